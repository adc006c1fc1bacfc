//! The storefront's "Om os" page.
//!
//! [`content`] holds the copy and image references; the `client` feature renders them as
//! three sections in a fixed order.

#[cfg(feature = "client")]
pub mod client;
pub mod content;
