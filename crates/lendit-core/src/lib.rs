//! Lending core for lendit.
//!
//! This crate is the heart of the registry. It provides:
//! - `LendingService` — the borrow transaction: validate, assign the
//!   borrower, credit the owner's karma
//! - `LendingPolicy` — permissive vs strict precondition checks
//! - `ListingService` — reverse-chronological listing with a stable
//!   tie-break
//!
//! Services own no state of their own; they take the item and identity
//! stores as explicit dependencies.

pub mod error;
pub mod lending;
pub mod listing;
pub mod policy;

pub use error::{CoreError, CoreResult};
pub use lending::LendingService;
pub use listing::ListingService;
pub use policy::LendingPolicy;
