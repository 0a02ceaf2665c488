//! `wry`-backed pane host: one child view per service, each with its own
//! browser data directory.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use winit::window::Window;

use switchboard_common::{Rect, SessionError};
use switchboard_session::{PaneHost, PaneSpec, PaneSurface};
use switchboard_webview::{WebViewConfig, WebViewHandle, WebViewManager};

use super::webview_bridge::bounds::to_wry_rect;

pub struct WryHost {
    window: Arc<Window>,
    manager: WebViewManager,
    partitions_root: PathBuf,
    content: Rect,
    devtools: bool,
}

impl WryHost {
    pub fn new(
        window: Arc<Window>,
        manager: WebViewManager,
        partitions_root: PathBuf,
        content: Rect,
        devtools: bool,
    ) -> Self {
        Self {
            window,
            manager,
            partitions_root,
            content,
            devtools,
        }
    }

    /// Bounds given to panes created from now on.
    pub fn set_content_bounds(&mut self, content: Rect) {
        self.content = content;
    }
}

impl PaneHost for WryHost {
    type Surface = WryPane;

    fn create_pane(&mut self, spec: &PaneSpec) -> Result<WryPane, SessionError> {
        let config = WebViewConfig::service(&spec.url, &self.partitions_root, &spec.partition)
            .with_visible(false)
            .with_user_agent(&spec.user_agent)
            .with_devtools(self.devtools);
        if let Some(dir) = &config.data_directory {
            debug!(service = %spec.service_id, dir = %dir.display(), "creating pane view");
        }

        let handle = self
            .manager
            .create(
                &spec.frame_id,
                self.window.as_ref(),
                to_wry_rect(&self.content),
                config,
            )
            .map_err(|e| SessionError::Host(format!("{}: {e}", spec.frame_id)))?;

        Ok(WryPane { handle })
    }
}

/// A service view. Dropping it destroys the view.
pub struct WryPane {
    handle: WebViewHandle,
}

impl WryPane {
    pub fn set_bounds(&self, rect: &Rect) -> Result<(), wry::Error> {
        self.handle.set_bounds(to_wry_rect(rect))
    }
}

impl PaneSurface for WryPane {
    fn set_active(&mut self, active: bool) -> Result<(), SessionError> {
        self.handle
            .set_visible(active)
            .map_err(|e| SessionError::Host(format!("{}: {e}", self.handle.label())))?;
        if active {
            self.handle
                .focus()
                .map_err(|e| SessionError::Host(format!("{}: {e}", self.handle.label())))?;
        }
        Ok(())
    }
}
