//! Facade crate for the storefront slices and shared modules.
//! Re-exports domain/kernel primitives and composes the application root.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `shop` with the `client` feature from an app crate.
//! - Provide a [`domain::config::StoreConfig`] as root context and launch [`client::App`].

pub use shop_about as about;
pub use shop_cart as cart;
pub use shop_domain as domain;
pub use shop_kernel as kernel;

#[cfg(feature = "client")]
pub mod client;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "cart",
        "about",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn slices_are_always_registered() {
        assert!(features::is_enabled("cart"));
        assert!(features::is_enabled("about"));
        assert!(!features::is_enabled("checkout"));
    }
}
