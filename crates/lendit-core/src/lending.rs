use std::sync::Arc;

use lendit_types::{Item, ItemId, UserId};

use crate::error::{CoreError, CoreResult};
use crate::policy::LendingPolicy;
use lendit_store::{IdentityStore, ItemPatch, ItemStore};

/// Karma credited to the owner per successful loan.
const KARMA_PER_LOAN: i64 = 1;

/// The lending transaction: "borrower X takes item Y."
///
/// This is the only component that touches both stores in one logical
/// operation. The write order is fixed: the borrower assignment is applied
/// to the item first, then the owner's karma is credited. The two writes are
/// not atomic across stores; if the owner identity cannot be resolved after
/// the item has been updated, the transaction fails with
/// [`CoreError::OwnerNotFound`] and the item stays borrowed without a karma
/// credit. Within the identity store the credit itself is a single atomic
/// read-modify-write, so concurrent loans crediting one owner never
/// under-count.
pub struct LendingService {
    items: Arc<dyn ItemStore>,
    identities: Arc<dyn IdentityStore>,
    policy: LendingPolicy,
}

impl LendingService {
    pub fn new(
        items: Arc<dyn ItemStore>,
        identities: Arc<dyn IdentityStore>,
        policy: LendingPolicy,
    ) -> Self {
        Self {
            items,
            identities,
            policy,
        }
    }

    pub fn policy(&self) -> LendingPolicy {
        self.policy
    }

    /// Execute the lending transaction.
    ///
    /// Preconditions (checked before any mutation): the item exists, the
    /// borrower exists, and the configured [`LendingPolicy`] accepts the
    /// pairing. On success the returned record carries the new borrower and
    /// the owner's karma has been credited by exactly one point.
    pub fn borrow(&self, item_id: &ItemId, borrower_id: &UserId) -> CoreResult<Item> {
        let item = self
            .items
            .find_by_id(item_id)?
            .ok_or(CoreError::ItemNotFound(*item_id))?;

        if self.identities.find_by_id(borrower_id)?.is_none() {
            return Err(CoreError::BorrowerNotFound(*borrower_id));
        }

        self.policy.check(&item, borrower_id)?;

        let updated = self
            .items
            .update(item_id, ItemPatch::borrower(*borrower_id))?
            .ok_or(CoreError::ItemNotFound(*item_id))?;

        // Write order is fixed: item first, then the owner credit. The
        // owner is re-fetched inside the store at credit time, never taken
        // from the record loaded above.
        self.identities
            .credit_karma(&updated.owner, KARMA_PER_LOAN)?
            .ok_or(CoreError::OwnerNotFound(updated.owner))?;

        tracing::info!(
            item = %updated.id,
            borrower = %borrower_id,
            owner = %updated.owner,
            "item lent"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendit_store::{InMemoryIdentityStore, InMemoryItemStore};
    use lendit_types::{Identity, NewItem};

    struct Fixture {
        items: Arc<InMemoryItemStore>,
        identities: Arc<InMemoryIdentityStore>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                items: Arc::new(InMemoryItemStore::new()),
                identities: Arc::new(InMemoryIdentityStore::new()),
            }
        }

        fn user(&self) -> UserId {
            let identity = Identity::new(UserId::generate());
            let id = identity.id;
            self.identities.insert(identity).unwrap();
            id
        }

        fn item(&self, name: &str, owner: UserId) -> Item {
            self.items.create(NewItem::new(name, owner)).unwrap()
        }

        fn service(&self, policy: LendingPolicy) -> LendingService {
            LendingService::new(
                Arc::clone(&self.items) as Arc<dyn ItemStore>,
                Arc::clone(&self.identities) as Arc<dyn IdentityStore>,
                policy,
            )
        }

        fn karma_of(&self, id: &UserId) -> i64 {
            self.identities
                .find_by_id(id)
                .unwrap()
                .expect("identity exists")
                .karma_points
        }
    }

    // -----------------------------------------------------------------------
    // Happy path
    // -----------------------------------------------------------------------

    #[test]
    fn borrow_assigns_the_borrower() {
        let fx = Fixture::new();
        let owner = fx.user();
        let borrower = fx.user();
        let kettle = fx.item("Kettle", owner);

        let updated = fx
            .service(LendingPolicy::Permissive)
            .borrow(&kettle.id, &borrower)
            .unwrap();

        assert_eq!(updated.current_borrower, Some(borrower));
        let stored = fx.items.find_by_id(&kettle.id).unwrap().unwrap();
        assert_eq!(stored.current_borrower, Some(borrower));
    }

    #[test]
    fn borrow_changes_no_other_item_field() {
        let fx = Fixture::new();
        let owner = fx.user();
        let borrower = fx.user();
        let kettle = fx.item("Kettle", owner);

        let updated = fx
            .service(LendingPolicy::Permissive)
            .borrow(&kettle.id, &borrower)
            .unwrap();

        assert_eq!(updated.id, kettle.id);
        assert_eq!(updated.name, kettle.name);
        assert_eq!(updated.description, kettle.description);
        assert_eq!(updated.image, kettle.image);
        assert_eq!(updated.date_added, kettle.date_added);
        assert_eq!(updated.owner, kettle.owner);
    }

    #[test]
    fn borrow_credits_owner_exactly_one_karma_point() {
        let fx = Fixture::new();
        let owner = fx.user();
        let borrower = fx.user();
        let kettle = fx.item("Kettle", owner);
        assert_eq!(fx.karma_of(&owner), 10);

        fx.service(LendingPolicy::Permissive)
            .borrow(&kettle.id, &borrower)
            .unwrap();

        assert_eq!(fx.karma_of(&owner), 11);
        // The borrower's own karma is untouched.
        assert_eq!(fx.karma_of(&borrower), 10);
    }

    // -----------------------------------------------------------------------
    // Not-found failures leave both stores unchanged
    // -----------------------------------------------------------------------

    #[test]
    fn borrow_missing_item_fails_without_mutation() {
        let fx = Fixture::new();
        let borrower = fx.user();

        let err = fx
            .service(LendingPolicy::Permissive)
            .borrow(&ItemId::generate(), &borrower)
            .unwrap_err();

        assert!(matches!(err, CoreError::ItemNotFound(_)));
        assert!(fx.items.is_empty());
        assert_eq!(fx.karma_of(&borrower), 10);
    }

    #[test]
    fn borrow_by_unknown_user_fails_without_mutation() {
        let fx = Fixture::new();
        let owner = fx.user();
        let kettle = fx.item("Kettle", owner);

        let err = fx
            .service(LendingPolicy::Permissive)
            .borrow(&kettle.id, &UserId::generate())
            .unwrap_err();

        assert!(matches!(err, CoreError::BorrowerNotFound(_)));
        let stored = fx.items.find_by_id(&kettle.id).unwrap().unwrap();
        assert_eq!(stored.current_borrower, None);
        assert_eq!(fx.karma_of(&owner), 10);
    }

    // -----------------------------------------------------------------------
    // Policy: permissive vs strict
    // -----------------------------------------------------------------------

    #[test]
    fn permissive_allows_self_borrow_and_still_credits() {
        let fx = Fixture::new();
        let owner = fx.user();
        let kettle = fx.item("Kettle", owner);

        let updated = fx
            .service(LendingPolicy::Permissive)
            .borrow(&kettle.id, &owner)
            .unwrap();

        assert_eq!(updated.current_borrower, Some(owner));
        assert_eq!(fx.karma_of(&owner), 11);
    }

    #[test]
    fn permissive_allows_re_borrow_and_credits_again() {
        let fx = Fixture::new();
        let owner = fx.user();
        let first = fx.user();
        let second = fx.user();
        let kettle = fx.item("Kettle", owner);
        let service = fx.service(LendingPolicy::Permissive);

        service.borrow(&kettle.id, &first).unwrap();
        let updated = service.borrow(&kettle.id, &second).unwrap();

        assert_eq!(updated.current_borrower, Some(second));
        assert_eq!(fx.karma_of(&owner), 12);
    }

    #[test]
    fn strict_rejects_self_borrow_without_mutation() {
        let fx = Fixture::new();
        let owner = fx.user();
        let kettle = fx.item("Kettle", owner);

        let err = fx
            .service(LendingPolicy::Strict)
            .borrow(&kettle.id, &owner)
            .unwrap_err();

        assert!(matches!(err, CoreError::SelfBorrow(_)));
        let stored = fx.items.find_by_id(&kettle.id).unwrap().unwrap();
        assert_eq!(stored.current_borrower, None);
        assert_eq!(fx.karma_of(&owner), 10);
    }

    #[test]
    fn strict_rejects_re_borrow_without_second_credit() {
        let fx = Fixture::new();
        let owner = fx.user();
        let first = fx.user();
        let second = fx.user();
        let kettle = fx.item("Kettle", owner);
        let service = fx.service(LendingPolicy::Strict);

        service.borrow(&kettle.id, &first).unwrap();
        let err = service.borrow(&kettle.id, &second).unwrap_err();

        assert!(matches!(err, CoreError::AlreadyBorrowed { .. }));
        let stored = fx.items.find_by_id(&kettle.id).unwrap().unwrap();
        assert_eq!(stored.current_borrower, Some(first));
        assert_eq!(fx.karma_of(&owner), 11);
    }

    // -----------------------------------------------------------------------
    // Cross-store consistency gap
    // -----------------------------------------------------------------------

    #[test]
    fn missing_owner_fails_after_item_update() {
        // The owner was never registered with the identity collaborator.
        // The item mutation lands, then the credit fails: the documented
        // two-step consistency gap.
        let fx = Fixture::new();
        let ghost_owner = UserId::generate();
        let borrower = fx.user();
        let kettle = fx.item("Kettle", ghost_owner);

        let err = fx
            .service(LendingPolicy::Permissive)
            .borrow(&kettle.id, &borrower)
            .unwrap_err();

        assert!(matches!(err, CoreError::OwnerNotFound(owner) if owner == ghost_owner));
        let stored = fx.items.find_by_id(&kettle.id).unwrap().unwrap();
        assert_eq!(stored.current_borrower, Some(borrower));
    }

    // -----------------------------------------------------------------------
    // Concurrency: parallel loans crediting one owner
    // -----------------------------------------------------------------------

    #[test]
    fn parallel_borrows_of_distinct_items_credit_owner_exactly_once_each() {
        use std::thread;

        let fx = Fixture::new();
        let owner = fx.user();
        let items: Vec<ItemId> = (0..8)
            .map(|i| fx.item(&format!("item-{i}"), owner).id)
            .collect();
        let borrowers: Vec<UserId> = (0..8).map(|_| fx.user()).collect();

        let service = Arc::new(fx.service(LendingPolicy::Permissive));
        let handles: Vec<_> = items
            .iter()
            .zip(&borrowers)
            .map(|(&item, &borrower)| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    service.borrow(&item, &borrower).unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread should not panic");
        }

        assert_eq!(fx.karma_of(&owner), 10 + 8);
    }
}
