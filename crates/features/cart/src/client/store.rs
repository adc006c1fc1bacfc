use crate::cart::Cart;
use crate::error::CartError;
use crate::input::CartItemInput;
use crate::state::{CartActions, CartState};
use dioxus::prelude::*;
use shop_domain::{LineItem, Money};

/// Reactive handle to the cart.
///
/// `Copy`, so it is passed to every view that needs the cart as a prop. Reads subscribe the
/// calling component; writes go through the named operations only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartStore {
    state: Signal<CartState>,
}

/// Creates a cart store owned by the calling component.
pub fn use_cart_store(init: impl FnOnce() -> CartState) -> CartStore {
    CartStore::new(use_signal(init))
}

/// Creates the cart store and provides it to every descendant (see [`use_cart`]).
pub fn use_cart_provider(init: impl FnOnce() -> CartState) -> CartStore {
    let store = use_cart_store(init);
    use_context_provider(|| store)
}

/// The cart store provided by an ancestor through [`use_cart_provider`].
///
/// # Panics
/// If no ancestor provides a store.
#[must_use]
pub fn use_cart() -> CartStore {
    use_context::<CartStore>()
}

impl CartStore {
    #[must_use]
    pub const fn new(state: Signal<CartState>) -> Self {
        Self { state }
    }

    /// A copy of the whole state; subscribes the caller to every change.
    #[must_use]
    pub fn snapshot(&self) -> CartState {
        self.state.read().clone()
    }

    #[must_use]
    pub fn cart(&self) -> Cart {
        self.state.read().cart().clone()
    }

    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.state.read().cart().item_count()
    }

    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.state.read().cart().subtotal()
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.state.write().add_item(item);
    }

    /// See [`Cart::add_input`].
    ///
    /// # Errors
    /// Returns [`CartError::InvalidItem`] for payloads without a valid price or quantity.
    pub fn add_input(
        &mut self,
        input: CartItemInput,
        fraction_digits: u8,
    ) -> Result<(), CartError> {
        self.state.write().add_input(input, fraction_digits).map(|_| ())
    }

    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        self.state.write().update_quantity(id, quantity)
    }

    pub fn set_checkout_url(&mut self, url: Option<String>) {
        self.state.write().set_checkout_url(url);
    }
}

impl CartActions for CartStore {
    fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    fn set_open(&mut self, open: bool) {
        // Skip the write so subscribers do not re-render for a no-op.
        if self.state.peek().is_open() != open {
            self.state.write().set_open(open);
        }
    }

    fn checkout_url(&self) -> Option<String> {
        self.state.read().checkout_url()
    }

    fn remove_item(&mut self, id: &str) -> Option<LineItem> {
        self.state.write().remove_item(id)
    }
}
