//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Page file to display; the built-in sample page when unset.
    #[serde(default)]
    pub page_file: Option<PathBuf>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Terminal widths at or below this many columns use the narrow
    /// (hamburger) layout.
    #[serde(default = "default_breakpoint_cols")]
    pub breakpoint_cols: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            breakpoint_cols: default_breakpoint_cols(),
        }
    }
}

/// Timing behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Carousel auto-advance interval.
    #[serde(default = "default_slide_interval_ms")]
    pub slide_interval_ms: u64,
    /// Quiet period before a resize burst is acted on.
    #[serde(default = "default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    /// Lines moved per wheel or arrow-key scroll step.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            slide_interval_ms: default_slide_interval_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            scroll_step: default_scroll_step(),
        }
    }
}

/// Diagnostic logging settings. The terminal belongs to the UI, so log
/// output goes to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` env-filter directive, overridable via `RUST_LOG`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            filter: default_log_filter(),
        }
    }
}

fn default_breakpoint_cols() -> u16 {
    100
}
fn default_slide_interval_ms() -> u64 {
    5000
}
fn default_resize_debounce_ms() -> u64 {
    250
}
fn default_scroll_step() -> u16 {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/pagestand/logs".to_string()
}
fn default_log_filter() -> String {
    "info".to_string()
}
