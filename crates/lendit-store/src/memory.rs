use std::collections::HashMap;
use std::sync::RwLock;

use lendit_types::{Identity, Item, ItemId, NewItem, UserId};

use crate::error::StoreResult;
use crate::patch::ItemPatch;
use crate::traits::{IdentityStore, ItemStore};

/// In-memory, HashMap-based item store.
///
/// Intended for tests and embedding. All records are held behind a `RwLock`
/// for safe concurrent access and are cloned on read/write. `update` holds
/// the write lock across read-modify-write, so racing updates on one id
/// serialize instead of losing writes.
pub struct InMemoryItemStore {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl InMemoryItemStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().expect("lock poisoned").is_empty()
    }

    /// Remove all items from the store.
    pub fn clear(&self) {
        self.items.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn create(&self, new: NewItem) -> StoreResult<Item> {
        let item = new.into_item();
        let mut map = self.items.write().expect("lock poisoned");
        map.insert(item.id, item.clone());
        tracing::trace!(item = %item.id, "item record created");
        Ok(item)
    }

    fn find_by_id(&self, id: &ItemId) -> StoreResult<Option<Item>> {
        let map = self.items.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn find_all(&self) -> StoreResult<Vec<Item>> {
        let map = self.items.read().expect("lock poisoned");
        Ok(map.values().cloned().collect())
    }

    fn update(&self, id: &ItemId, patch: ItemPatch) -> StoreResult<Option<Item>> {
        let mut map = self.items.write().expect("lock poisoned");
        let Some(item) = map.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(description) = patch.description {
            item.description = Some(description);
        }
        if let Some(image) = patch.image {
            item.image = image;
        }
        if let Some(borrower) = patch.current_borrower {
            item.current_borrower = borrower;
        }
        Ok(Some(item.clone()))
    }

    fn delete(&self, id: &ItemId) -> StoreResult<bool> {
        let mut map = self.items.write().expect("lock poisoned");
        Ok(map.remove(id).is_some())
    }
}

impl std::fmt::Debug for InMemoryItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryItemStore")
            .field("item_count", &self.len())
            .finish()
    }
}

/// In-memory identity backend standing in for the external identity
/// collaborator. Karma credits are applied under the write lock, so
/// concurrent credits to one identity never under-count.
pub struct InMemoryIdentityStore {
    identities: RwLock<HashMap<UserId, Identity>>,
}

impl InMemoryIdentityStore {
    /// Create a new empty identity store.
    pub fn new() -> Self {
        Self {
            identities: RwLock::new(HashMap::new()),
        }
    }

    /// Number of identities currently stored.
    pub fn len(&self) -> usize {
        self.identities.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.identities.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn insert(&self, identity: Identity) -> StoreResult<()> {
        let mut map = self.identities.write().expect("lock poisoned");
        map.insert(identity.id, identity);
        Ok(())
    }

    fn find_by_id(&self, id: &UserId) -> StoreResult<Option<Identity>> {
        let map = self.identities.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn credit_karma(&self, id: &UserId, amount: i64) -> StoreResult<Option<Identity>> {
        let mut map = self.identities.write().expect("lock poisoned");
        let Some(identity) = map.get_mut(id) else {
            return Ok(None);
        };
        identity.karma_points += amount;
        tracing::trace!(user = %identity.id, karma = identity.karma_points, "karma credited");
        Ok(Some(identity.clone()))
    }
}

impl std::fmt::Debug for InMemoryIdentityStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryIdentityStore")
            .field("identity_count", &self.len())
            .finish()
    }
}
