//! Layered emitter configuration.
//!
//! [`StyleframeConfig`] is resolved through `figment` with the precedence
//! **defaults < `styleframe.toml` < `STYLEFRAME_*` environment variables**.
//!
//! ```rust,no_run
//! use styleframe::config::StyleframeConfig;
//!
//! # fn main() -> styleframe::StyleframeResult<()> {
//! let config = StyleframeConfig::load(None)?;
//! assert!(config.indent <= 8);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use camino::Utf8Path;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{StyleframeError, StyleframeResult, StyleframeResultExt};

/// Emitter settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleframeConfig {
    /// Spaces per nesting level in pretty output.
    pub indent: usize,
    /// Emit single-line output without indentation.
    pub minify: bool,
    /// Inserted after the leading `--` of every custom property name.
    pub variable_prefix: String,
    /// Selector hosting variable declarations.
    pub root_selector: String,
}

impl Default for StyleframeConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            minify: false,
            variable_prefix: String::new(),
            root_selector: String::from(":root"),
        }
    }
}

impl StyleframeConfig {
    /// Default configuration file name.
    pub const FILE_NAME: &'static str = "styleframe.toml";

    /// Prefix of environment variable overrides.
    pub const ENV_PREFIX: &'static str = "STYLEFRAME_";

    /// The layered figment: defaults, then the TOML file, then the
    /// environment. Without an explicit `path`, [`Self::FILE_NAME`] is
    /// searched for from the working directory upwards.
    #[must_use]
    pub fn figment(path: Option<&Utf8Path>) -> Figment {
        let file = path.map_or_else(
            || Toml::file(Self::FILE_NAME),
            |explicit| Toml::file(explicit.as_std_path()),
        );
        Figment::from(Serialized::defaults(Self::default()))
            .merge(file)
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// Load the layered configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StyleframeError::Config`] when an explicit `path` does not
    /// exist or when extraction fails.
    pub fn load(path: Option<&Utf8Path>) -> StyleframeResult<Self> {
        if let Some(explicit) = path
            && !explicit.is_file()
        {
            return Err(Arc::new(StyleframeError::config(figment::Error::from(
                format!("configuration file '{explicit}' not found"),
            ))));
        }
        Self::from_figment(&Self::figment(path))
    }

    /// Extract configuration from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`StyleframeError::Config`] when extraction fails.
    pub fn from_figment(figment: &Figment) -> StyleframeResult<Self> {
        let config: Self = figment.extract().into_styleframe()?;
        debug!(
            indent = config.indent,
            minify = config.minify,
            prefix = %config.variable_prefix,
            "loaded styleframe configuration"
        );
        Ok(config)
    }
}
