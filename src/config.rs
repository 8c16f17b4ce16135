// Configuration for jwtview display and logging.
// Defaults mirror the browser decoder this tool replaces.

use std::path::PathBuf;
use std::time::Duration;

/// Which rendering the decoded header/payload panels use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewTab {
    #[default]
    Json,
    Table,
}

impl ViewTab {
    pub fn toggled(self) -> Self {
        match self {
            ViewTab::Json => ViewTab::Table,
            ViewTab::Table => ViewTab::Json,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewTab::Json => "JSON",
            ViewTab::Table => "Table",
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Spaces per nesting level in JSON views (default 2)
    pub json_indent: usize,

    /// How long the "copied!" marker stays up (default 2s)
    pub copy_feedback: Duration,

    /// Tab shown at startup
    pub default_tab: ViewTab,

    /// Event poll interval for the TUI loop (default 50ms)
    pub tick: Duration,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            json_indent: 2,
            copy_feedback: Duration::from_millis(2000),
            default_tab: ViewTab::Json,
            tick: Duration::from_millis(50),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log destination; the TUI owns stdout/stderr so nothing is logged without it
    pub file: Option<PathBuf>,

    /// `EnvFilter` directives (default "info")
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

/// Master configuration combining all jwtview settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub display: DisplayConfig,
    pub log: LogConfig,
}
