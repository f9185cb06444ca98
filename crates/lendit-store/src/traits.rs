use lendit_types::{Identity, Item, ItemId, NewItem, UserId};

use crate::error::StoreResult;
use crate::patch::ItemPatch;

/// Keyed storage for item records.
///
/// All implementations must satisfy these invariants:
/// - `create` applies field defaults (image sentinel, creation timestamp,
///   absent borrower) and mints the record id.
/// - Lookups signal absence with `Ok(None)`, never by failing the call.
/// - `update` is atomic per id: two racing updates on the same record never
///   lose a write.
/// - `find_all` makes no ordering promise; ordering belongs to the caller.
/// - All I/O errors are propagated, never silently ignored.
pub trait ItemStore: Send + Sync {
    /// Create a new item record with defaults applied.
    fn create(&self, new: NewItem) -> StoreResult<Item>;

    /// Read an item by id. Returns `Ok(None)` if the item does not exist.
    fn find_by_id(&self, id: &ItemId) -> StoreResult<Option<Item>>;

    /// All item records, in no particular order.
    fn find_all(&self) -> StoreResult<Vec<Item>>;

    /// Apply a partial update atomically and return the updated record.
    /// Returns `Ok(None)` if the item does not exist; nothing is written.
    fn update(&self, id: &ItemId, patch: ItemPatch) -> StoreResult<Option<Item>>;

    /// Delete an item by id. Returns `true` if a record was removed.
    fn delete(&self, id: &ItemId) -> StoreResult<bool>;
}

/// Lookup and karma-credit capability over the external identity
/// collaborator.
///
/// The lending core only ever reads identities and credits karma; identity
/// creation (`insert`) exists so in-process backends can be seeded.
pub trait IdentityStore: Send + Sync {
    /// Register an identity. Overwrites any previous record with the same id.
    fn insert(&self, identity: Identity) -> StoreResult<()>;

    /// Read an identity by id. Returns `Ok(None)` if unknown.
    fn find_by_id(&self, id: &UserId) -> StoreResult<Option<Identity>>;

    /// Atomically add `amount` to the identity's karma counter and return
    /// the updated record, or `Ok(None)` if the identity is unknown.
    ///
    /// The read-modify-write must happen inside the store so concurrent
    /// credits to the same identity never under-count.
    fn credit_karma(&self, id: &UserId, amount: i64) -> StoreResult<Option<Identity>>;
}
