use crate::error::CartError;
use crate::input::CartItemInput;
use serde::{Deserialize, Serialize};
use shop_domain::{LineItem, Money};
use std::num::NonZeroU32;
use tracing::{debug, warn};

/// An ordered list of line items with unique ids.
///
/// Adding an id that is already present bumps that row's quantity, so every id maps to
/// exactly one row and removal by id is unambiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

/// A line item together with the key its rendered row uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartRow<'a> {
    pub index: usize,
    pub item: &'a LineItem,
}

impl CartRow<'_> {
    /// Stable row key: item id plus position, never random.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}", self.item.id, self.index)
    }
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all rows (the header badge).
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity.get())).sum()
    }

    /// Sum of unit price times quantity over all rows; zero for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Rows in cart order.
    pub fn rows(&self) -> impl Iterator<Item = CartRow<'_>> {
        self.items.iter().enumerate().map(|(index, item)| CartRow { index, item })
    }

    /// Adds an item, merging quantities when the id is already in the cart.
    pub fn add_item(&mut self, item: LineItem) -> &LineItem {
        let position = self.items.iter().position(|existing| existing.id == item.id);

        let index = if let Some(index) = position {
            let existing = &mut self.items[index];
            existing.quantity = existing.quantity.saturating_add(item.quantity.get());
            debug!(id = %existing.id, quantity = existing.quantity.get(), "Merged line item");
            index
        } else {
            debug!(id = %item.id, quantity = item.quantity.get(), "Added line item");
            self.items.push(item);
            self.items.len() - 1
        };

        &self.items[index]
    }

    /// Validates a raw add-to-cart payload and adds it.
    ///
    /// # Errors
    /// Returns [`CartError::InvalidItem`] if the payload is missing its price or quantity or
    /// carries malformed values; the cart is left unchanged.
    pub fn add_input(
        &mut self,
        input: CartItemInput,
        fraction_digits: u8,
    ) -> Result<&LineItem, CartError> {
        match input.into_line_item(fraction_digits) {
            Ok(item) => Ok(self.add_item(item)),
            Err(err) => {
                warn!(error = %err, "Rejected add-to-cart input");
                Err(err)
            },
        }
    }

    /// Removes the row with `id`, keeping the order of the others.
    ///
    /// Unknown ids are a no-op.
    pub fn remove_item(&mut self, id: &str) -> Option<LineItem> {
        let Some(index) = self.items.iter().position(|item| item.id.as_str() == id) else {
            debug!(id, "Line item not in cart; nothing removed");
            return None;
        };

        let removed = self.items.remove(index);
        debug!(id, remaining = self.items.len(), "Removed line item");
        Some(removed)
    }

    /// Sets a row's quantity; zero removes the row. Returns `false` for unknown ids.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> bool {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            return self.remove_item(id).is_some();
        };

        match self.items.iter_mut().find(|item| item.id.as_str() == id) {
            Some(item) => {
                item.quantity = quantity;
                debug!(id, quantity = quantity.get(), "Updated line item quantity");
                true
            },
            None => {
                debug!(id, "Line item not in cart; quantity unchanged");
                false
            },
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add_item(item);
        }
        cart
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl FromIterator<LineItem> for Cart {
    fn from_iter<I: IntoIterator<Item = LineItem>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64, quantity: u32) -> LineItem {
        LineItem::builder()
            .id(id)
            .title(format!("Product {id}"))
            .handle(format!("product-{id}"))
            .price(Money::from_minor(price))
            .quantity(NonZeroU32::new(quantity).expect("non-zero"))
            .build()
    }

    #[test]
    fn subtotal_of_empty_cart_is_zero() {
        assert_eq!(Cart::new().subtotal(), Money::ZERO);
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let cart: Cart = vec![item("a", 10_000, 2), item("b", 5_000, 1)].into();
        assert_eq!(cart.subtotal(), Money::from_minor(25_000));
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn adding_known_id_merges_quantity() {
        let mut cart = Cart::new();
        cart.add_item(item("a", 100, 1));
        cart.add_item(item("b", 100, 1));
        let merged = cart.add_item(item("a", 100, 2));

        assert_eq!(merged.quantity.get(), 3);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].id.as_str(), "a");
    }

    #[test]
    fn remove_keeps_order_of_remaining_rows() {
        let mut cart: Cart = vec![item("a", 1, 1), item("b", 1, 1), item("c", 1, 1)].into();

        let removed = cart.remove_item("b").expect("b is in the cart");

        assert_eq!(removed.id.as_str(), "b");
        let ids: Vec<_> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn removing_unknown_id_is_a_no_op() {
        let mut cart: Cart = vec![item("a", 1, 1)].into();
        let before = cart.clone();

        assert!(cart.remove_item("missing").is_none());
        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_sets_or_removes() {
        let mut cart: Cart = vec![item("a", 100, 1), item("b", 100, 1)].into();

        assert!(cart.update_quantity("a", 4));
        assert_eq!(cart.get("a").map(|i| i.quantity.get()), Some(4));

        assert!(cart.update_quantity("b", 0));
        assert!(!cart.contains("b"));

        assert!(!cart.update_quantity("missing", 2));
    }

    #[test]
    fn row_keys_combine_id_and_position() {
        let cart: Cart = vec![item("a", 1, 1), item("b", 1, 1)].into();
        let keys: Vec<_> = cart.rows().map(|row| row.key()).collect();
        assert_eq!(keys, ["a-0", "b-1"]);
    }

    #[test]
    fn rejected_input_leaves_cart_unchanged() {
        let mut cart: Cart = vec![item("a", 1, 1)].into();
        let input =
            CartItemInput { id: "b".to_owned(), variant_quantity: Some(1), ..Default::default() };

        assert!(cart.add_input(input, 2).is_err());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let mut cart: Cart = vec![item("a", 1, 1)].into();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Money::ZERO);
    }
}
