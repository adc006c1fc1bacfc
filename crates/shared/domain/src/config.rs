use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level storefront configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfigInner {
    pub shop: ShopConfig,
    pub checkout: CheckoutConfig,
    pub currency: CurrencyConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into UI contexts.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    #[serde(flatten, default)]
    inner: Arc<StoreConfigInner>,
}

impl Deref for StoreConfig {
    type Target = StoreConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for StoreConfig {
    fn deref_mut(&mut self) -> &mut StoreConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Shop identity shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub name: String,
}

/// External checkout destination.
///
/// `url` stays empty until the commerce backend has created a checkout session.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub url: Option<String>,
}

/// Which side of the number the currency symbol goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Locale rules for rendering [`crate::Money`] amounts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    /// Put a space between the number and the symbol.
    pub spaced: bool,
    pub decimal_separator: char,
    pub group_separator: char,
    pub fraction_digits: u8,
}

impl CurrencyConfig {
    /// Danish krone, `da-DK` rules: `1.234,50 kr.`
    #[must_use]
    pub fn danish_krone() -> Self {
        Self {
            code: "DKK".to_owned(),
            symbol: "kr.".to_owned(),
            symbol_position: SymbolPosition::Suffix,
            spaced: true,
            decimal_separator: ',',
            group_separator: '.',
            fraction_digits: 2,
        }
    }

    /// US dollar, `en-US` rules: `$1,234.50`
    #[must_use]
    pub fn us_dollar() -> Self {
        Self {
            code: "USD".to_owned(),
            symbol: "$".to_owned(),
            symbol_position: SymbolPosition::Prefix,
            spaced: false,
            decimal_separator: '.',
            group_separator: ',',
            fraction_digits: 2,
        }
    }
}

/// Native log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ShopConfig {
    fn default() -> Self {
        Self { name: "Butik".to_owned() }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self::danish_krone()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
