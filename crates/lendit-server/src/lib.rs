//! HTTP server for the lendit item-lending registry.
//!
//! Exposes the `/api/items` REST surface over the lending core: listing,
//! item creation and deletion, and the borrow transaction, plus a small
//! identity-seeding surface standing in for the external identity
//! collaborator.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::LenditServer;
pub use state::AppState;
