use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::num::NonZeroU32;
use typed_builder::TypedBuilder;

/// Route prefix for product detail pages.
pub const PRODUCTS_ROUTE: &str = "/products";

/// Identifier of a purchasable variant; unique within a cart.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(String);

impl LineItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for LineItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for LineItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One product variant in the cart.
///
/// Price and quantity are required; raw add-to-cart payloads are validated before a
/// `LineItem` exists.
///
/// ```rust
/// use shop_domain::{LineItem, Money};
/// use std::num::NonZeroU32;
///
/// let item = LineItem::builder()
///     .id("gid-1")
///     .title("Linen shirt")
///     .handle("linen-shirt")
///     .price(Money::from_minor(49_900))
///     .quantity(NonZeroU32::MIN)
///     .build();
///
/// assert_eq!(item.product_path(), "/products/linen-shirt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[builder(setter(into))]
    pub id: LineItemId,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    pub variant_title: String,
    pub price: Money,
    pub quantity: NonZeroU32,
    #[builder(default, setter(strip_option, into))]
    pub image: Option<String>,
    #[builder(setter(into))]
    pub handle: String,
}

impl LineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }

    /// Link target of the product detail page.
    #[must_use]
    pub fn product_path(&self) -> String {
        format!("{PRODUCTS_ROUTE}/{}", self.handle)
    }
}
