use lendit_types::{ItemId, UserId};
use thiserror::Error;

/// Errors from the lending core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The item referenced by the transaction does not exist.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// The borrowing user does not exist.
    #[error("borrower not found: {0}")]
    BorrowerNotFound(UserId),

    /// The item's owner could not be resolved when applying the karma
    /// credit. The borrower assignment has already been written at this
    /// point; see the consistency notes on `LendingService::borrow`.
    #[error("owner not found: {0}")]
    OwnerNotFound(UserId),

    /// Strict policy: a user may not borrow their own item.
    #[error("user {0} owns this item and cannot borrow it")]
    SelfBorrow(UserId),

    /// Strict policy: the item is already on loan.
    #[error("item {item} is already borrowed by {borrower}")]
    AlreadyBorrowed { item: ItemId, borrower: UserId },

    /// Store failure, propagated unchanged.
    #[error("store error: {0}")]
    Store(#[from] lendit_store::StoreError),
}

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
