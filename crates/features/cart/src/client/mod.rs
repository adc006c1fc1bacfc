//! Dioxus side of the cart slice.

mod button;
mod icons;
pub mod labels;
mod mini_cart;
mod store;

pub use button::{CartButton, CartButtonProps};
pub use mini_cart::{MiniCart, MiniCartProps};
pub use store::{CartStore, use_cart, use_cart_provider, use_cart_store};
