//! Construction-time configuration and the configuration error type.

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::pages::PageId;

/// Base design resolution most layouts are authored against.
pub const DEFAULT_BASE_WIDTH: u32 = 320;
pub const DEFAULT_BASE_HEIGHT: u32 = 240;

/// Errors raised while building widgets, adapters or the page tree.
///
/// These are never produced per frame. Runtime misses (unknown child names,
/// empty history) are reported as `false` by the navigation calls instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Slider range is empty or inverted
    #[error("Slider min ({min}) must be less than max ({max})")]
    InvalidSliderRange { min: i32, max: i32 },

    /// Slider default outside its range
    #[error("Slider default {value} is outside [{min}, {max}]")]
    DefaultOutOfRange { value: i32, min: i32, max: i32 },

    /// Base design resolution with a zero dimension
    #[error("Base resolution {width}x{height} has a zero dimension")]
    ZeroBaseResolution { width: u32, height: u32 },

    /// A sibling with this name already exists
    #[error("Duplicate page name among siblings: {0}")]
    DuplicatePageName(String),

    /// Child pages must be named
    #[error("Child page name must not be empty")]
    EmptyPageName,

    /// Page id does not belong to this tree
    #[error("Unknown page: {0:?}")]
    UnknownPage(PageId),

    /// Stored configuration could not be decoded
    #[error("Invalid config encoding: {0}")]
    Decode(postcard::Error),

    /// Configuration could not be serialized
    #[error("Failed to encode config: {0}")]
    Encode(postcard::Error),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Toolkit-wide settings a host may persist alongside its own state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiConfig {
    /// Width of the grid layouts are authored on
    pub base_width: u32,
    /// Height of the grid layouts are authored on
    pub base_height: u32,
    /// Whether sliders show a value tooltip while dragged
    pub show_slider_tooltip: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            base_width: DEFAULT_BASE_WIDTH,
            base_height: DEFAULT_BASE_HEIGHT,
            show_slider_tooltip: true,
        }
    }
}

impl UiConfig {
    /// Decode a config previously written with [`UiConfig::encode`].
    pub fn decode(bytes: &[u8]) -> ConfigResult<Self> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }

    /// Encode this config into postcard bytes.
    pub fn encode(&self) -> ConfigResult<Vec<u8>> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_base_grid() {
        let config = UiConfig::default();
        assert_eq!(config.base_width, 320);
        assert_eq!(config.base_height, 240);
        assert!(config.show_slider_tooltip);
    }

    #[test]
    fn test_encoded_config_decodes() {
        let config = UiConfig {
            base_width: 480,
            base_height: 272,
            show_slider_tooltip: false,
        };
        let bytes = config.encode().unwrap();
        assert_eq!(UiConfig::decode(&bytes).unwrap(), config);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = UiConfig::default().encode().unwrap();
        let result = UiConfig::decode(&bytes[..1]);
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }
}
