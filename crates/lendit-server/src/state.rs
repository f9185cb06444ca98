use std::sync::Arc;

use lendit_core::{LendingPolicy, LendingService, ListingService};
use lendit_store::{IdentityStore, InMemoryIdentityStore, InMemoryItemStore, ItemStore};

/// Shared handler state: the two stores plus the services built over them.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemStore>,
    pub identities: Arc<dyn IdentityStore>,
    pub listing: Arc<ListingService>,
    pub lending: Arc<LendingService>,
}

impl AppState {
    pub fn new(
        items: Arc<dyn ItemStore>,
        identities: Arc<dyn IdentityStore>,
        policy: LendingPolicy,
    ) -> Self {
        Self {
            listing: Arc::new(ListingService::new(Arc::clone(&items))),
            lending: Arc::new(LendingService::new(
                Arc::clone(&items),
                Arc::clone(&identities),
                policy,
            )),
            items,
            identities,
        }
    }

    /// State backed by fresh in-memory stores, for tests and local demos.
    pub fn in_memory(policy: LendingPolicy) -> Self {
        Self::new(
            Arc::new(InMemoryItemStore::new()),
            Arc::new(InMemoryIdentityStore::new()),
            policy,
        )
    }
}
