//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, money formatting and the few UI primitives
//! every slice renders.
//!
//! ## Formatting
//! ```rust
//! use shop_kernel::format::CurrencyFormatter;
//! use shop_kernel::domain::Money;
//!
//! let formatter = CurrencyFormatter::default();
//! assert_eq!(formatter.format(Money::from_minor(123_450)), "1.234,50\u{a0}kr.");
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use shop_kernel::config::load_config;
//! use shop_kernel::domain::config::StoreConfig;
//!
//! let cfg: StoreConfig = load_config(Some("storefront")).unwrap_or_default();
//! ```
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod format;

pub use shop_domain as domain;
