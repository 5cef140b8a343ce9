//! Bundled site configuration.

use portfolio_core::{ConfigError, ConfigLoader, PageVariant, SiteConfig};

/// Loads the per-variant JSON compiled into the module.
pub struct WebConfigLoader;

impl ConfigLoader for WebConfigLoader {
    type Error = ConfigError;

    fn load_site_config(&self, name: &str) -> Result<SiteConfig, Self::Error> {
        let json = match name {
            "portfolio" => include_str!("../static/config/portfolio.json"),
            "portfolyo" => include_str!("../static/config/portfolyo.json"),
            _ => return Err(ConfigError::Unknown(name.to_string())),
        };
        Ok(SiteConfig::from_json(json)?)
    }
}

/// Resolve the config named by the page's `data-variant` marker. Failures
/// fall back to the built-in defaults for that variant.
#[must_use]
pub fn site_config(marker: Option<&str>) -> SiteConfig {
    let variant = PageVariant::from_marker(marker);
    let name = marker.map_or(variant.name(), str::trim);
    WebConfigLoader.load_site_config(name).unwrap_or_else(|err| {
        log::warn!("{err}; using {} defaults", variant.name());
        SiteConfig::for_variant(variant)
    })
}
