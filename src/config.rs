//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "acraia"
//! tagline = "AI agents, ready to hire"
//! copyright = "© Nolabs Tech 2025. All rights reserved."
//! search_placeholder = "What agent do you need today?"
//!
//! [store]
//! code = "USD"              # ISO 4217 code, informational
//! symbol = "$"
//! minor_digits = 2          # 3000 → $30.00
//!
//! [theme]
//! card_gap = "1.25rem"
//! grid_padding = "1.5rem"
//! card_image_height = "14rem"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#0a0a0a"
//! text_muted = "#737373"
//! border = "#e5e5e5"
//! accent = "#171717"
//! accent_text = "#fafafa"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#fafafa"
//! text_muted = "#a3a3a3"
//! border = "#262626"
//! accent = "#fafafa"
//! accent_text = "#171717"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Branding and fixed copy.
    pub site: SiteInfo,
    /// Currency used to display prices.
    pub store: StoreConfig,
    /// Layout settings (grid spacing, card image height).
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.store.minor_digits > 6 {
            return Err(ConfigError::Validation(
                "store.minor_digits must be 0-6".into(),
            ));
        }
        if self.store.code.len() != 3 || !self.store.code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ConfigError::Validation(
                "store.code must be a three-letter uppercase currency code".into(),
            ));
        }
        Ok(())
    }
}

/// Branding and fixed copy shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Wordmark shown as the home link.
    pub name: String,
    /// Used as the index page `<meta name="description">`.
    pub tagline: String,
    pub copyright: String,
    pub search_placeholder: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "acraia".to_string(),
            tagline: "AI agents, ready to hire".to_string(),
            copyright: "© Nolabs Tech 2025. All rights reserved.".to_string(),
            search_placeholder: "What agent do you need today?".to_string(),
        }
    }
}

/// Single site-wide currency. Prices stay integer minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub code: String,
    pub symbol: String,
    /// Digits after the decimal point (2 for cents, 0 for yen).
    pub minor_digits: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            minor_digits: 2,
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Gap between gallery cards (CSS value).
    pub card_gap: String,
    /// Padding around the gallery grid (CSS value).
    pub grid_padding: String,
    /// Height of the media area on each card (CSS value).
    pub card_image_height: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            card_gap: "1.25rem".to_string(),
            grid_padding: "1.5rem".to_string(),
            card_image_height: "14rem".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Captions, copyright line, section titles.
    pub text_muted: String,
    pub border: String,
    /// Filled buttons (search submit, checkout hover).
    pub accent: String,
    /// Text drawn on top of `accent`.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#0a0a0a".to_string(),
            text_muted: "#737373".to_string(),
            border: "#e5e5e5".to_string(),
            accent: "#171717".to_string(),
            accent_text: "#fafafa".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#fafafa".to_string(),
            text_muted: "#a3a3a3".to_string(),
            border: "#262626".to_string(),
            accent: "#fafafa".to_string(),
            accent_text: "#171717".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, falling back to
/// the stock defaults when the file is absent.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(dir)?;
    if overlay.is_none() {
        log::debug!("no config.toml in {}, using defaults", dir.display());
    }
    resolve_config(overlay)
}

/// Returns a fully-commented stock `config.toml`. Used by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Storefront Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Branding
# ---------------------------------------------------------------------------
[site]
# Wordmark shown in the header and footer, linking to the home page.
name = "acraia"
# Description meta tag on the home page.
tagline = "AI agents, ready to hire"
copyright = "© Nolabs Tech 2025. All rights reserved."
search_placeholder = "What agent do you need today?"

# ---------------------------------------------------------------------------
# Currency
# ---------------------------------------------------------------------------
# Catalog prices are integers in minor units; these settings only affect
# how they are displayed. A price of 0 is always shown as "Free".
[store]
code = "USD"
symbol = "$"
minor_digits = 2

# ---------------------------------------------------------------------------
# Layout
# ---------------------------------------------------------------------------
[theme]
card_gap = "1.25rem"
grid_padding = "1.5rem"
card_image_height = "14rem"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#0a0a0a"
text_muted = "#737373"
border = "#e5e5e5"
accent = "#171717"
accent_text = "#fafafa"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#fafafa"
text_muted = "#a3a3a3"
border = "#262626"
accent = "#fafafa"
accent_text = "#171717"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_vars(&colors.light, "    "),
        dark = scheme_vars(&colors.dark, "        "),
    )
}

fn scheme_vars(scheme: &ColorScheme, pad: &str) -> String {
    [
        ("bg", &scheme.background),
        ("text", &scheme.text),
        ("text-muted", &scheme.text_muted),
        ("border", &scheme.border),
        ("accent", &scheme.accent),
        ("accent-text", &scheme.accent_text),
    ]
    .iter()
    .map(|(name, value)| format!("{pad}--color-{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --card-gap: {card_gap};
    --grid-padding: {grid_padding};
    --card-image-height: {card_image_height};
}}"#,
        card_gap = theme.card_gap,
        grid_padding = theme.grid_padding,
        card_image_height = theme.card_image_height,
    )
}
