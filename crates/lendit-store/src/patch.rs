use lendit_types::UserId;
use serde::{Deserialize, Serialize};

/// Partial field update for an item record.
///
/// Only fields that are mutable in scope appear here. `current_borrower`
/// uses a double `Option`: the outer layer means "leave untouched" vs
/// "write", the inner layer is the stored value (`None` clears the
/// borrower). `id`, `owner`, and `date_added` are immutable after creation
/// and deliberately have no patch field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub current_borrower: Option<Option<UserId>>,
}

impl ItemPatch {
    /// A patch that only assigns the current borrower.
    pub fn borrower(borrower: UserId) -> Self {
        Self {
            current_borrower: Some(Some(borrower)),
            ..Self::default()
        }
    }

    /// `true` when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
