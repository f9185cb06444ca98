use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// Baseline karma every identity starts with, owned by the external
/// identity collaborator and mirrored here for the in-memory store.
pub const DEFAULT_KARMA: i64 = 10;

/// Externally-managed user reference.
///
/// lendit does not own users. The only fields consumed by the lending core
/// are the opaque identifier and the karma counter, which is credited by one
/// point for each successful lending transaction against an item the user
/// owns. The counter never decreases through any operation in this crate
/// family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    #[serde(rename = "karmaPoints")]
    pub karma_points: i64,
}

impl Identity {
    /// An identity at the collaborator's default karma baseline.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            karma_points: DEFAULT_KARMA,
        }
    }

    /// An identity with an explicit karma balance.
    pub fn with_karma(id: UserId, karma_points: i64) -> Self {
        Self { id, karma_points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_identity_starts_at_baseline() {
        let identity = Identity::new(UserId::generate());
        assert_eq!(identity.karma_points, 10);
    }

    #[test]
    fn wire_field_name_is_karma_points() {
        let identity = Identity::with_karma(UserId::generate(), 42);
        let json = serde_json::to_value(&identity).unwrap();
        assert_eq!(json["karmaPoints"], 42);
    }
}
