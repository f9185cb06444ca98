use lendit_types::{Item, UserId};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Precondition policy for the lending transaction.
///
/// `Permissive` checks nothing beyond existence of the item and borrower.
/// Self-borrow and re-borrow of an on-loan item both succeed (and both
/// credit the owner).
///
/// `Strict` hardens the transaction: a user cannot borrow their own item,
/// and an item already on loan cannot be borrowed again. Rejections happen
/// before any mutation, so neither the borrower field nor the karma counter
/// is touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LendingPolicy {
    #[default]
    Permissive,
    Strict,
}

impl LendingPolicy {
    /// Check policy preconditions for `borrower` taking `item`.
    pub fn check(&self, item: &Item, borrower: &UserId) -> CoreResult<()> {
        if let LendingPolicy::Strict = self {
            if item.owner == *borrower {
                return Err(CoreError::SelfBorrow(*borrower));
            }
            if let Some(current) = item.current_borrower {
                return Err(CoreError::AlreadyBorrowed {
                    item: item.id,
                    borrower: current,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendit_types::NewItem;

    fn kettle(owner: UserId) -> Item {
        NewItem::new("Kettle", owner).into_item()
    }

    #[test]
    fn permissive_allows_self_borrow() {
        let owner = UserId::generate();
        let item = kettle(owner);
        assert!(LendingPolicy::Permissive.check(&item, &owner).is_ok());
    }

    #[test]
    fn permissive_allows_re_borrow() {
        let mut item = kettle(UserId::generate());
        item.current_borrower = Some(UserId::generate());
        assert!(LendingPolicy::Permissive
            .check(&item, &UserId::generate())
            .is_ok());
    }

    #[test]
    fn strict_rejects_self_borrow() {
        let owner = UserId::generate();
        let item = kettle(owner);
        let err = LendingPolicy::Strict.check(&item, &owner).unwrap_err();
        assert!(matches!(err, CoreError::SelfBorrow(user) if user == owner));
    }

    #[test]
    fn strict_rejects_re_borrow() {
        let mut item = kettle(UserId::generate());
        let first = UserId::generate();
        item.current_borrower = Some(first);
        let err = LendingPolicy::Strict
            .check(&item, &UserId::generate())
            .unwrap_err();
        assert!(matches!(err, CoreError::AlreadyBorrowed { borrower, .. } if borrower == first));
    }

    #[test]
    fn strict_allows_available_item_for_other_user() {
        let item = kettle(UserId::generate());
        assert!(LendingPolicy::Strict
            .check(&item, &UserId::generate())
            .is_ok());
    }

    #[test]
    fn default_policy_is_permissive() {
        assert_eq!(LendingPolicy::default(), LendingPolicy::Permissive);
    }
}
