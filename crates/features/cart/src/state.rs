use crate::cart::Cart;
use crate::error::CartError;
use crate::input::CartItemInput;
use shop_domain::LineItem;
use tracing::debug;

/// What the mini-cart panel is allowed to do with the cart.
///
/// Implemented by the plain [`CartState`] and by the reactive store the UI holds, so the
/// panel logic does not care which one it drives.
pub trait CartActions {
    fn is_open(&self) -> bool;

    /// Shows or hides the panel. Repeating the same value is a no-op.
    fn set_open(&mut self, open: bool);

    fn toggle_open(&mut self) {
        let open = self.is_open();
        self.set_open(!open);
    }

    /// Where the checkout link points, once the backend has created a checkout.
    fn checkout_url(&self) -> Option<String>;

    /// Removes the row with `id`; unknown ids leave the cart unchanged.
    fn remove_item(&mut self, id: &str) -> Option<LineItem>;
}

/// Cart contents plus the panel's open flag and checkout destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartState {
    cart: Cart,
    open: bool,
    checkout_url: Option<String>,
}

impl CartState {
    #[must_use]
    pub fn new(checkout_url: Option<String>) -> Self {
        Self { checkout_url, ..Self::default() }
    }

    #[must_use]
    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = cart;
        self
    }

    #[must_use]
    pub const fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_item(&mut self, item: LineItem) -> &LineItem {
        self.cart.add_item(item)
    }

    /// See [`Cart::add_input`].
    ///
    /// # Errors
    /// Returns [`CartError::InvalidItem`] for payloads without a valid price or quantity.
    pub fn add_input(
        &mut self,
        input: CartItemInput,
        fraction_digits: u8,
    ) -> Result<&LineItem, CartError> {
        self.cart.add_input(input, fraction_digits)
    }

    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        self.cart.update_quantity(id, quantity)
    }

    pub fn clear(&mut self) {
        self.cart.clear();
    }

    pub fn set_checkout_url(&mut self, url: Option<String>) {
        debug!(has_url = url.is_some(), "Checkout destination updated");
        self.checkout_url = url;
    }
}

impl CartActions for CartState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            debug!(open, "Cart panel visibility changed");
            self.open = open;
        }
    }

    fn checkout_url(&self) -> Option<String> {
        self.checkout_url.clone()
    }

    fn remove_item(&mut self, id: &str) -> Option<LineItem> {
        self.cart.remove_item(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_empty_cart() {
        let state = CartState::new(Some("https://checkout.example.com".to_owned()));
        assert!(!state.is_open());
        assert!(state.cart().is_empty());
        assert_eq!(state.checkout_url().as_deref(), Some("https://checkout.example.com"));
    }

    #[test]
    fn set_open_is_idempotent() {
        let mut state = CartState::default();

        state.set_open(true);
        state.set_open(true);
        assert!(state.is_open());

        state.set_open(false);
        state.set_open(false);
        assert!(!state.is_open());
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut state = CartState::default();
        state.toggle_open();
        assert!(state.is_open());
        state.toggle_open();
        assert!(!state.is_open());
    }

    #[test]
    fn checkout_url_can_arrive_later() {
        let mut state = CartState::default();
        assert!(state.checkout_url().is_none());

        state.set_checkout_url(Some("https://shop.example.com/checkouts/1".to_owned()));
        assert_eq!(state.checkout_url().as_deref(), Some("https://shop.example.com/checkouts/1"));
    }
}
