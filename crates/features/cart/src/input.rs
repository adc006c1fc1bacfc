//! Validation of raw add-to-cart payloads.
//!
//! Product data arrives from the commerce backend as loosely typed JSON. Everything that
//! reaches [`crate::Cart`] goes through [`CartItemInput::into_line_item`] first, so the
//! panel never sees an item without a price or quantity.

use crate::error::CartError;
use bigdecimal::{BigDecimal, FromPrimitive, ToPrimitive};
use serde::Deserialize;
use shop_domain::{LineItem, Money};
use std::num::NonZeroU32;
use std::str::FromStr;

/// Largest minor-unit scale an `i64` amount can carry.
const MAX_FRACTION_DIGITS: u8 = 18;

/// A price as the backend sends it: a decimal string (`"249.95"`) or a JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Decimal(String),
    Number(f64),
}

impl From<&str> for PriceInput {
    fn from(value: &str) -> Self {
        Self::Decimal(value.to_owned())
    }
}

impl From<f64> for PriceInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// An add-to-cart payload before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartItemInput {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub image: Option<String>,
    pub variant_title: String,
    pub variant_price: Option<PriceInput>,
    pub variant_quantity: Option<i64>,
}

impl CartItemInput {
    /// Validates the payload and converts it into a [`LineItem`].
    ///
    /// `fraction_digits` is the minor-unit scale of the shop currency (2 for DKK).
    ///
    /// # Errors
    /// Returns [`CartError::InvalidItem`] when the id, price or quantity is missing, the price
    /// is negative or malformed, or the quantity is not a positive 32-bit integer.
    pub fn into_line_item(self, fraction_digits: u8) -> Result<LineItem, CartError> {
        if self.id.trim().is_empty() {
            return Err(invalid("missing id", None));
        }

        let price = match self.variant_price {
            Some(price) => parse_price(&price, fraction_digits)?,
            None => return Err(invalid("missing price", Some(self.id))),
        };
        let quantity = match self.variant_quantity {
            Some(quantity) => u32::try_from(quantity)
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| {
                    invalid(format!("quantity {quantity} is not positive"), Some(self.id.clone()))
                })?,
            None => return Err(invalid("missing quantity", Some(self.id))),
        };

        let mut item = LineItem::builder()
            .id(self.id)
            .title(self.title)
            .variant_title(self.variant_title)
            .handle(self.handle)
            .price(price)
            .quantity(quantity)
            .build();
        item.image = self.image.filter(|src| !src.trim().is_empty());

        Ok(item)
    }
}

/// Parses a price into minor units of a currency with `fraction_digits` decimals.
///
/// JSON numbers are rounded to the currency scale; decimal strings must already fit it.
///
/// # Errors
/// Returns [`CartError::InvalidItem`] for negative, non-numeric, over-precise or
/// out-of-range values.
pub fn parse_price(price: &PriceInput, fraction_digits: u8) -> Result<Money, CartError> {
    if fraction_digits > MAX_FRACTION_DIGITS {
        return Err(CartError::Internal {
            message: format!("unsupported currency scale of {fraction_digits} digits").into(),
            context: Some("parsing price".into()),
        });
    }

    match price {
        PriceInput::Decimal(text) => parse_decimal(text, fraction_digits),
        PriceInput::Number(value) => {
            let amount = BigDecimal::from_f64(*value)
                .ok_or_else(|| invalid(format!("price {value} is not a finite number"), None))?;
            to_minor(&amount.round(i64::from(fraction_digits)), fraction_digits, value)
        },
    }
}

/// Parses a plain decimal string such as `"100"`, `"100.5"` or `"100.50"`.
///
/// Trailing zeros beyond the currency scale are accepted (`"100.000"`); any other extra
/// precision is rejected rather than rounded. Signs and exponents are not accepted.
///
/// # Errors
/// Returns [`CartError::InvalidItem`] for anything that is not an unsigned decimal.
pub fn parse_decimal(text: &str, fraction_digits: u8) -> Result<Money, CartError> {
    let text = text.trim();
    let plain = text.starts_with(|c: char| c.is_ascii_digit()) && !text.contains(['e', 'E']);

    let amount = BigDecimal::from_str(text)
        .ok()
        .filter(|_| plain)
        .ok_or_else(|| invalid(format!("price '{text}' is not a decimal amount"), None))?;

    let (_, scale) = amount.normalized().as_bigint_and_exponent();
    if scale > i64::from(fraction_digits) {
        return Err(invalid(
            format!("price '{text}' has more than {fraction_digits} fraction digits"),
            None,
        ));
    }

    to_minor(&amount, fraction_digits, text)
}

/// Shifts an amount that fits the currency scale into whole minor units.
fn to_minor(
    amount: &BigDecimal,
    fraction_digits: u8,
    shown: impl std::fmt::Display,
) -> Result<Money, CartError> {
    if amount < &BigDecimal::from(0) {
        return Err(invalid(format!("price {shown} is negative"), None));
    }

    let factor = BigDecimal::from(10_i64.pow(u32::from(fraction_digits)));
    (amount * factor)
        .to_i64()
        .map(Money::from_minor)
        .ok_or_else(|| invalid(format!("price {shown} is out of range"), None))
}

fn invalid(
    message: impl Into<std::borrow::Cow<'static, str>>,
    id: Option<String>,
) -> CartError {
    CartError::InvalidItem { message: message.into(), context: id.map(Into::into) }
}
