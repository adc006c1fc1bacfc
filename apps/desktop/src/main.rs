#![windows_subsystem = "windows"]

use shop::client::App;
use shop::domain::config::StoreConfig;
use shop::kernel::config::{DEFAULT_CONFIG_FILE, load_config};
use shop_desktop::DesktopApp;
use shop_logger::Logger;

fn main() -> anyhow::Result<()> {
    // The logger itself is configured from the file, so a load failure is reported after init.
    let (config, load_error) = match load_config::<StoreConfig>(Some(DEFAULT_CONFIG_FILE)) {
        Ok(config) => (config, None),
        Err(err) => (StoreConfig::default(), Some(err)),
    };

    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    if let Some(err) = load_error {
        tracing::warn!(error = %err, "Using default storefront config");
    }
    tracing::info!(shop = %config.shop.name, currency = %config.currency.code, "Starting desktop storefront");

    DesktopApp::new(config).launch(App);

    Ok(())
}
