//! Storage backends for lendit records.
//!
//! This crate defines the [`ItemStore`] and [`IdentityStore`] trait
//! boundaries consumed by the lending core, the [`ItemPatch`] partial
//! update, and in-memory implementations for tests, local demos, and
//! embedding.

pub mod error;
pub mod memory;
pub mod patch;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryIdentityStore, InMemoryItemStore};
pub use patch::ItemPatch;
pub use traits::{IdentityStore, ItemStore};
