//! Shell settings (`shell.toml`): everything about the window and the
//! probes that is not part of the user-edited inbox state.
//!
//! All sections use serde defaults so a partial file works.

mod loader;

pub use loader::{load_or_create, load_shell_settings, save_shell_settings};

use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Identification string sent by every service pane.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_6) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.87 Safari/537.36";

/// File name of the shell settings inside the config directory.
pub const SHELL_FILE: &str = "shell.toml";

pub const DEFAULT_PROBE_INTERVAL_MS: u64 = 500;

/// Accepted `probe.interval_ms` values.
pub const PROBE_INTERVAL_MS_RANGE: RangeInclusive<u64> = 100..=60_000;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub window: WindowSettings,
    pub sidebar: SidebarSettings,
    pub probe: ProbeSettings,
    pub browser: BrowserSettings,
    pub assets: AssetSettings,
}

/// Initial window geometry in logical pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            title: "Switchboard".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarSettings {
    pub width: u32,
}

impl Default for SidebarSettings {
    fn default() -> Self {
        Self { width: 64 }
    }
}

/// Unread count probe timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    pub interval_ms: u64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_PROBE_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    pub user_agent: String,
    /// Enable devtools in service panes (always on in debug builds).
    pub devtools: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            devtools: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory icons are served from; relative paths resolve against the
    /// working directory.
    pub dir: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
        }
    }
}
