//! Window creation, probe runtime, webview setup and session boot.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use switchboard_session::{SessionOptions, Switchboard};
use switchboard_webview::{ContentProvider, WebViewManager, WebViewRegistry};

use super::core::SwitchboardApp;
use super::host::WryHost;
use super::pages;

impl SwitchboardApp {
    /// Create the window. Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_settings = &self.shell.window;
        let attrs = WindowAttributes::default()
            .with_title(window_settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_settings.width),
                f64::from(window_settings.height),
            ));

        match event_loop.create_window(attrs) {
            Ok(w) => {
                self.window = Some(Arc::new(w));
                tracing::info!("Window created");
                true
            }
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                false
            }
        }
    }

    /// Start the runtime the count probes run on.
    pub(super) fn initialize_runtime(&mut self) -> bool {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("switchboard-probe")
            .enable_time()
            .build();
        match runtime {
            Ok(rt) => {
                self.tokio_runtime = Some(rt);
                true
            }
            Err(e) => {
                tracing::error!("Failed to start probe runtime: {e}");
                false
            }
        }
    }

    /// Set up the view registry with the `switchboard://` content provider.
    pub(super) fn initialize_webviews(&mut self) {
        let assets_dir = &self.shell.assets.dir;
        if !assets_dir.is_dir() {
            tracing::warn!(
                path = %assets_dir.display(),
                "Assets directory not found; selector icons will be missing"
            );
        }

        let mut provider = ContentProvider::new(assets_dir);
        pages::register(&mut provider);

        let mut manager = WebViewManager::new();
        manager.set_content_provider(provider);

        self.views = Some(WebViewRegistry::new(manager));
        tracing::info!(assets_dir = %assets_dir.display(), "WebView registry initialized");
    }

    /// Load the inbox and build its panes.
    pub(super) fn boot_switchboard(&mut self) -> bool {
        let (Some(window), Some(views), Some(runtime)) =
            (&self.window, &self.views, &self.tokio_runtime)
        else {
            tracing::error!("Cannot boot: window, views or runtime missing");
            return false;
        };
        let Some(store) = self.store.take() else {
            tracing::error!("Cannot boot: state store already consumed");
            return false;
        };

        let (_, content) = self.layout();
        let host = WryHost::new(
            Arc::clone(window),
            views.manager().clone(),
            self.partitions_root.clone(),
            content,
            self.shell.browser.devtools,
        );
        let options = SessionOptions::from_shell(&self.shell);

        self.switchboard = Some(Switchboard::boot(
            store,
            host,
            options,
            runtime.handle().clone(),
        ));
        true
    }
}
