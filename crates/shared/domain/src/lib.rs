//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `typed-builder`).
//! Keep it lean: no I/O, UI, or heavy logic; just data and simple helpers.

pub mod config;
pub mod item;
pub mod money;

pub use item::{LineItem, LineItemId};
pub use money::Money;
