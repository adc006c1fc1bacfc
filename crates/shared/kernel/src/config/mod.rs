use config::{Config, File, FileFormat};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `SHOP__CHECKOUT__URL`.
pub const ENV_PREFIX: &str = "SHOP";
/// Config file looked up when no path is given (`storefront.toml`).
pub const DEFAULT_CONFIG_FILE: &str = "storefront";

/// Custom error type for config loading.
#[shop_derive::shop_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file layered with environment overrides.
///
/// 1. **Base File**: settings from `path` (any extension the `config` crate knows; the
///    extension may be omitted). Defaults to `storefront` in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `SHOP__`. Nested keys use double
///    underscores, e.g. `SHOP__CHECKOUT__URL` maps to `checkout.url`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, an override is malformed, or the
/// merged values do not match `T`.
///
/// # Example
/// ```rust
/// use shop_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    use config::Environment;

    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Parses configuration from an in-memory TOML document.
///
/// Used where there is no filesystem to read from, e.g. the web build embeds its
/// `storefront.toml` with `include_str!`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the document is not valid TOML or does not match `T`.
pub fn parse_config<T>(toml: &str) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    info!("Parsing embedded config ({} bytes)", toml.len());

    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .context("Failed to parse embedded config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize embedded config")
}
