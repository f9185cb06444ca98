//! Foundation types for the lendit item-lending registry.
//!
//! This crate provides the identifier and record types used throughout the
//! lendit system. Every other lendit crate depends on `lendit-types`.
//!
//! # Key Types
//!
//! - [`ItemId`] / [`UserId`] — time-ordered UUID v7 identifiers
//! - [`Item`] — a lendable item record (owner, optional current borrower)
//! - [`NewItem`] — creation input with explicit field defaults
//! - [`Identity`] — externally-managed user reference carrying a karma counter

pub mod error;
pub mod id;
pub mod identity;
pub mod item;

pub use error::TypeError;
pub use id::{ItemId, UserId};
pub use identity::{Identity, DEFAULT_KARMA};
pub use item::{Item, NewItem, DEFAULT_IMAGE};
