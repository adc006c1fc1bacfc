use shop_kernel::config::{ConfigError, load_config, parse_config};
use shop_kernel::domain::config::{StoreConfig, SymbolPosition};
use std::fs;
use tempfile::tempdir;

const STOREFRONT_TOML: &str = r#"
[shop]
name = "Nordlys"

[checkout]
url = "https://nordlys.myshopify.com/checkouts/abc"

[currency]
code = "USD"
symbol = "$"
symbol_position = "prefix"
spaced = false
decimal_separator = "."
group_separator = ","
"#;

#[test]
fn loads_config_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("storefront.toml");
    fs::write(&path, STOREFRONT_TOML)?;

    let cfg: StoreConfig = load_config(Some(&path))?;

    assert_eq!(cfg.shop.name, "Nordlys");
    assert_eq!(cfg.checkout.url.as_deref(), Some("https://nordlys.myshopify.com/checkouts/abc"));
    assert_eq!(cfg.currency.symbol_position, SymbolPosition::Prefix);
    assert_eq!(cfg.currency.fraction_digits, 2, "unset keys keep their defaults");
    Ok(())
}

#[test]
fn extension_can_be_omitted() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("storefront.toml"), STOREFRONT_TOML)?;

    let cfg: StoreConfig = load_config(Some(dir.path().join("storefront")))?;
    assert_eq!(cfg.shop.name, "Nordlys");
    Ok(())
}

#[test]
fn missing_file_is_an_error_with_context() {
    let dir = tempdir().expect("temp dir");
    let err = load_config::<StoreConfig>(Some(dir.path().join("absent.toml")))
        .expect_err("missing file must fail");

    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn parses_embedded_toml() {
    let cfg: StoreConfig = parse_config(STOREFRONT_TOML).expect("embedded config");
    assert_eq!(cfg.currency.code, "USD");
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: StoreConfig = parse_config("").expect("empty config");
    assert_eq!(cfg, StoreConfig::default());
}

#[test]
fn malformed_toml_is_rejected() {
    let err = parse_config::<StoreConfig>("[shop\nname = ").expect_err("invalid toml");
    assert!(err.to_string().contains("Failed to parse embedded config"));
}
