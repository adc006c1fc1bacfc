use anyhow::Context;
use dioxus::prelude::*;
use shop::client::App;
use shop::domain::config::StoreConfig;
use shop::kernel::config::parse_config;
use tracing::Level;

/// The browser has no filesystem, so the config ships inside the bundle.
const STOREFRONT_TOML: &str = include_str!("../../../storefront.toml");

fn main() -> anyhow::Result<()> {
    let config: StoreConfig =
        parse_config(STOREFRONT_TOML).context("Embedded storefront.toml is invalid")?;

    let level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    dioxus::logger::init(level).context("Failed to initialize logger")?;
    tracing::info!(shop = %config.shop.name, "Starting web storefront");

    LaunchBuilder::web().with_context_provider(move || Box::new(config.clone())).launch(App);

    Ok(())
}
