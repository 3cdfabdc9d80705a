//! Site configuration
//!
//! Read from a JSON file, then overridden from the environment:
//!
//! | Variable                      | Field                   |
//! |-------------------------------|-------------------------|
//! | `GROW_SITE_URL`               | `base_url`              |
//! | `GROW_CONTENT_DIR`            | `content_dir`           |
//! | `GROW_ROUTE_SUFFIX`           | `route_suffix`          |
//! | `GROW_STRICT_SLUGS`           | `strict_slugs`          |
//! | `GROW_DISPLAY_NAME_FALLBACK`  | `display_name_fallback` |

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::registry::SiteRegistry;
use crate::resolver::{SlugResolver, DEFAULT_ROUTE_SUFFIX};
use crate::store::{Catalog, ContentLoader};

/// Configuration shared by the server and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public origin used in sitemap and robots URLs
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Cosmetic suffix of canonical state and lane URLs
    #[serde(default = "default_route_suffix")]
    pub route_suffix: String,

    /// Content directory; the embedded content is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,

    /// Allow the resolver to match on display names
    #[serde(default = "default_true")]
    pub display_name_fallback: bool,

    /// Refuse to start when a key is authored twice
    #[serde(default)]
    pub strict_slugs: bool,
}

fn default_base_url() -> String { "https://www.growtrucking.com".to_string() }
fn default_route_suffix() -> String { DEFAULT_ROUTE_SUFFIX.to_string() }
fn default_true() -> bool { true }

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            route_suffix: default_route_suffix(),
            content_dir: None,
            display_name_fallback: true,
            strict_slugs: false,
        }
    }
}

impl SiteConfig {
    /// Read a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ContentError::ContentLoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Self = serde_json::from_str(&json).map_err(|e| ContentError::InvalidConfig {
            reason: format!("{}: {}", path.display(), e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden from the process environment
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// File (if given) or defaults, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Apply `GROW_*` variables from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply `GROW_*` variables from any lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("GROW_SITE_URL") {
            self.base_url = url;
        }
        if let Some(dir) = lookup("GROW_CONTENT_DIR") {
            self.content_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }
        if let Some(suffix) = lookup("GROW_ROUTE_SUFFIX") {
            self.route_suffix = suffix;
        }
        if let Some(value) = lookup("GROW_STRICT_SLUGS") {
            self.strict_slugs = parse_flag("GROW_STRICT_SLUGS", &value)?;
        }
        if let Some(value) = lookup("GROW_DISPLAY_NAME_FALLBACK") {
            self.display_name_fallback = parse_flag("GROW_DISPLAY_NAME_FALLBACK", &value)?;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ContentError::InvalidConfig {
                reason: format!("base_url must be an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.route_suffix.contains('/') {
            return Err(ContentError::InvalidConfig {
                reason: format!("route_suffix must not contain '/', got '{}'", self.route_suffix),
            });
        }
        Ok(())
    }

    /// Resolver configured with this suffix and fallback setting
    pub fn resolver(&self) -> SlugResolver {
        SlugResolver::new()
            .with_suffix(self.route_suffix.clone())
            .with_display_name_fallback(self.display_name_fallback)
    }

    /// Content from `content_dir`, or the embedded content
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.content_dir {
            Some(dir) => ContentLoader::new(dir).load(),
            None => Catalog::embedded(),
        }
    }

    /// Registries over the configured content. In strict mode every
    /// collection is built up front and duplicates are an error.
    pub fn build_site(&self) -> Result<SiteRegistry> {
        let catalog = self.load_catalog()?;
        if self.strict_slugs {
            SiteRegistry::from_catalog_strict(catalog)
        } else {
            let site = SiteRegistry::from_catalog(catalog);
            site.initialize();
            Ok(site)
        }
    }
}

/// Parse a boolean environment value: 1/true/yes/on or 0/false/no/off
pub fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ContentError::InvalidConfig {
            reason: format!("{} must be a boolean, got '{}'", name, other),
        }),
    }
}
