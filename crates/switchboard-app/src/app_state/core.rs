//! SwitchboardApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use switchboard_config::{ShellSettings, StateStore};
use switchboard_session::Switchboard;
use switchboard_webview::WebViewRegistry;

use super::host::WryHost;

/// Top-level application state.
pub struct SwitchboardApp {
    pub(super) shell: ShellSettings,
    /// Handed to the [`Switchboard`] once the window exists.
    pub(super) store: Option<StateStore>,
    pub(super) partitions_root: PathBuf,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Sidebar and settings views; service panes are owned by the session.
    pub(super) views: Option<WebViewRegistry>,

    pub(super) switchboard: Option<Switchboard<WryHost>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    /// Whether the settings view is showing in the content area.
    pub(super) settings_visible: bool,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl SwitchboardApp {
    pub fn new(shell: ShellSettings, store: StateStore, partitions_root: PathBuf) -> Self {
        Self {
            shell,
            store: Some(store),
            partitions_root,
            window: None,
            views: None,
            switchboard: None,
            tokio_runtime: None,
            settings_visible: false,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
