use shop_domain::config::{CurrencyConfig, LoggingConfig, StoreConfig, SymbolPosition};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let cfg = StoreConfig::default();
    assert_eq!(cfg.shop.name, "Butik");
    assert!(cfg.checkout.url.is_none());
    assert_eq!(cfg.currency, CurrencyConfig::danish_krone());
    assert_eq!(cfg.logging, LoggingConfig::default());
}

#[test]
fn store_config_deserializes() {
    let raw = json!({
        "shop": { "name": "Nordlys" },
        "checkout": { "url": "https://checkout.example.com/c/123" },
        "currency": { "code": "USD", "symbol": "$", "symbol_position": "prefix", "spaced": false,
                      "decimal_separator": ".", "group_separator": ",", "fraction_digits": 2 },
        "logging": { "level": "debug", "directory": "/tmp/logs", "json": true }
    });

    let cfg: StoreConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.shop.name, "Nordlys");
    assert_eq!(cfg.checkout.url.as_deref(), Some("https://checkout.example.com/c/123"));
    assert_eq!(cfg.currency, CurrencyConfig::us_dollar());
    assert_eq!(cfg.currency.symbol_position, SymbolPosition::Prefix);
    assert_eq!(cfg.logging.directory, Some(std::path::PathBuf::from("/tmp/logs")));
    assert!(cfg.logging.json);
}

#[test]
fn partial_sections_fall_back_to_defaults() {
    let cfg: StoreConfig =
        serde_json::from_value(json!({ "currency": { "symbol": "DKK" } })).expect("deserialize");
    assert_eq!(cfg.currency.symbol, "DKK");
    assert_eq!(cfg.currency.decimal_separator, ',');
    assert_eq!(cfg.shop.name, "Butik");
}

#[test]
fn mutation_through_deref_does_not_leak_into_clones() {
    let original = StoreConfig::default();
    let mut changed = original.clone();
    changed.checkout.url = Some("https://pay.example.com".to_owned());

    assert!(original.checkout.url.is_none());
    assert_eq!(changed.checkout.url.as_deref(), Some("https://pay.example.com"));
}
