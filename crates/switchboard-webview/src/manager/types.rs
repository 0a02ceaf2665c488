use std::path::{Path, PathBuf};

use crate::partition::{partition_data_dir, partition_store_id};

use super::handlers::NavigationPolicy;

/// How to build a view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL (takes precedence over `html`).
    pub url: Option<String>,
    /// Initial inline HTML.
    pub html: Option<String>,
    pub visible: bool,
    /// Always on in debug builds.
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Browser data directory. Views with different directories share no
    /// cookies or storage; `None` uses the platform default context.
    pub data_directory: Option<PathBuf>,
    /// WebKit data store on macOS and iOS, which ignore `data_directory`.
    pub data_store_id: Option<[u8; 16]>,
    /// Inject the IPC bridge and forward posted messages.
    pub ipc: bool,
    pub navigation: NavigationPolicy,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            visible: true,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            data_directory: None,
            data_store_id: None,
            ipc: false,
            navigation: NavigationPolicy::Web,
        }
    }
}

impl WebViewConfig {
    /// A remote page in the storage partition `partition`, kept under
    /// `partitions_root`.
    pub fn service(url: impl Into<String>, partitions_root: &Path, partition: &str) -> Self {
        Self {
            url: Some(url.into()),
            data_directory: Some(partition_data_dir(partitions_root, partition)),
            data_store_id: Some(partition_store_id(partition)),
            ..Default::default()
        }
    }

    /// One of our own pages, served through the custom protocol, with IPC.
    pub fn internal(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ipc: true,
            navigation: NavigationPolicy::Internal,
            ..Default::default()
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_devtools(mut self, devtools: bool) -> Self {
        self.devtools = devtools || cfg!(debug_assertions);
        self
    }
}
