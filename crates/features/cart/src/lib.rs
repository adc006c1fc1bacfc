//! Shopping cart feature slice.
//!
//! * [`Cart`]: ordered, id-unique line items and the subtotal.
//! * [`CartItemInput`]: validation of raw add-to-cart payloads.
//! * [`CartState`] / [`CartActions`]: the cart plus the panel's open flag and checkout
//!   destination, behind the capability set the panel uses.
//! * `client` (feature): the reactive `CartStore` handle and the `MiniCart` panel.

mod cart;
#[cfg(feature = "client")]
pub mod client;
mod error;
pub mod input;
mod state;

pub use crate::cart::{Cart, CartRow};
pub use crate::error::{CartError, CartErrorExt};
pub use crate::input::{CartItemInput, PriceInput};
pub use crate::state::{CartActions, CartState};
