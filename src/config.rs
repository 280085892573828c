//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Unlike the content export,
//! config is authored by the site owner, so unknown keys are rejected to
//! catch typos early. All options are optional — a missing file yields the
//! stock defaults.
//!
//! ```toml
//! [site]
//! title = "Mara Voss Photography"
//! tagline = "Weddings, portraits and landscapes"
//! media_base_url = "https://cms.example.com"
//!
//! [layout]
//! gallery_columns = 2         # Columns in the featured gallery (>= 1)
//! default_aspect_ratio = 1.0  # Assumed ratio for images with unknown size
//!
//! [colors.light]
//! background = "#ffffff"
//! # ... (see stock_config_toml for the full palette)
//! ```

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
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: title, tagline, media host.
    pub site: SiteMeta,
    /// Gallery layout tunables.
    pub layout: LayoutConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.gallery_columns == 0 {
            return Err(ConfigError::Validation(
                "layout.gallery_columns must be at least 1".into(),
            ));
        }
        if !(self.layout.default_aspect_ratio > 0.0) {
            return Err(ConfigError::Validation(
                "layout.default_aspect_ratio must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Site identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Site title, shown in the hero and the `<title>` tag.
    pub title: String,
    /// Short tagline under the title on the landing page.
    pub tagline: String,
    /// Base URL the CMS serves uploads from. Relative media URLs in the
    /// export are resolved against this.
    pub media_base_url: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            tagline: String::new(),
            media_base_url: "http://localhost:1337".to_string(),
        }
    }
}

/// Gallery layout tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Number of columns in the balanced featured gallery.
    pub gallery_columns: usize,
    /// Aspect ratio assumed for images with unknown dimensions. Square (1.0)
    /// is a neutral guess, not a contract from the CMS — tune if a site's
    /// unsized uploads skew portrait or landscape.
    pub default_aspect_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gallery_columns: 2,
            default_aspect_ratio: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (captions, locations, category labels).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Link hover color.
    pub link_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#18181b".to_string(),
            text_muted: "#71717a".to_string(),
            border: "#e4e4e7".to_string(),
            link: "#27272a".to_string(),
            link_hover: "#000000".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#09090b".to_string(),
            text: "#f4f4f5".to_string(),
            text_muted: "#a1a1aa".to_string(),
            border: "#27272a".to_string(),
            link: "#d4d4d8".to_string(),
            link_hover: "#ffffff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Load config from a `config.toml` path.
///
/// A missing file yields the stock defaults. Unknown keys are rejected and
/// the result is validated.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = if path.exists() {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Stillfolio Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Title shown in the hero section and the browser tab.
title = "Portfolio"

# Short tagline under the title on the landing page.
tagline = ""

# Base URL the CMS serves uploads from. Relative media URLs in the content
# export (e.g. "/uploads/dawn.jpg") are resolved against this.
media_base_url = "http://localhost:1337"

# ---------------------------------------------------------------------------
# Gallery layout
# ---------------------------------------------------------------------------
[layout]
# Number of columns in the height-balanced featured gallery. Must be >= 1.
gallery_columns = 2

# Aspect ratio (width/height) assumed for images whose dimensions are
# unknown. 1.0 = square.
default_aspect_ratio = 1.0

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#18181b"
text_muted = "#71717a"    # Captions, locations, category labels
border = "#e4e4e7"
link = "#27272a"
link_hover = "#000000"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#09090b"
text = "#f4f4f5"
text_muted = "#a1a1aa"
border = "#27272a"
link = "#d4d4d8"
link_hover = "#ffffff"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
    )
}
