//! Configuration types for Tapeline diagram rendering.
//!
//! This module provides configuration structures that control how tapes are
//! laid out and where rendered diagrams go. All types implement
//! [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and output settings.
//! - [`LayoutConfig`] - Controls the minimum number of tape cells before the ellipsis cells.
//! - [`OutputConfig`] - Controls clipboard delivery of the rendered diagram.
//!
//! # Example
//!
//! ```
//! # use tapeline::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().min_length(), 21);
//! assert!(config.output().clipboard());
//! ```

use serde::Deserialize;

/// Default floor for the number of padded tape cells.
pub const DEFAULT_MIN_LENGTH: usize = 21;

/// Top-level application configuration combining layout and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and output configurations.
    pub fn new(layout: LayoutConfig, output: OutputConfig) -> Self {
        Self { layout, output }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Replace the minimum tape length (builder style).
    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.layout.min_length = min_length;
        self
    }

    /// Replace the output configuration (builder style).
    #[must_use]
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}

/// Tape layout configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Minimum number of tape cells, not counting the ellipsis cells.
    #[serde(default = "default_min_length")]
    min_length: usize,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the given minimum tape length.
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Returns the minimum tape length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

/// Delivery options for rendered diagrams.
///
/// The diagram is always printed; these settings only govern the clipboard.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Append the diagram to the system clipboard.
    #[serde(default = "default_clipboard")]
    clipboard: bool,

    /// Keep existing clipboard contents instead of clearing them first.
    #[serde(default)]
    append: bool,

    /// Block until another program takes over the clipboard (X11/Wayland).
    #[serde(default)]
    wait: bool,
}

fn default_clipboard() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            clipboard: true,
            append: false,
            wait: false,
        }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    pub fn new(clipboard: bool, append: bool, wait: bool) -> Self {
        Self {
            clipboard,
            append,
            wait,
        }
    }

    /// Whether the diagram is sent to the clipboard.
    pub fn clipboard(&self) -> bool {
        self.clipboard
    }

    /// Whether existing clipboard contents are preserved.
    pub fn append(&self) -> bool {
        self.append
    }

    /// Whether the clipboard write blocks until ownership is handed over.
    ///
    /// Only affects X11 and Wayland, where the selection is served by the
    /// writing process itself.
    pub fn wait(&self) -> bool {
        self.wait
    }
}
