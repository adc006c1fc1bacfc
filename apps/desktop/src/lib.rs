use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use shop::domain::config::StoreConfig;

/// Native window hosting the storefront app root.
#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    config: StoreConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl DesktopApp {
    /// A window titled after the configured shop name.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self { title: config.shop.name.clone(), width: 1280.0, height: 860.0, config }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Opens the window and runs `root` with the [`StoreConfig`] as root context.
    pub fn launch(self, root: fn() -> Element) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        let config = self.config;
        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(config.clone()))
            .launch(root);
    }
}
