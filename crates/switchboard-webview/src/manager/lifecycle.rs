use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::{Response, StatusCode};
use wry::raw_window_handle;
use wry::{WebContext, WebViewBuilder};

use crate::content::{request_path, ContentProvider, PROTOCOL};
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a view labelled `label` as a child of `window`, placed at
    /// `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        label: &str,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut context = config.data_directory.clone().map(|dir| {
            if let Err(e) = std::fs::create_dir_all(&dir) {
                warn!(view = label, dir = %dir.display(), error = %e, "cannot create data directory");
            }
            WebContext::new(Some(dir))
        });

        let mut builder = match context.as_mut() {
            Some(ctx) => WebViewBuilder::with_web_context(ctx),
            None => WebViewBuilder::new(),
        };

        builder = builder
            .with_bounds(bounds)
            .with_visible(config.visible)
            .with_devtools(config.devtools)
            .with_focused(false);

        builder = with_data_store(builder, &config);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        if config.ipc {
            builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
            builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), label.to_string());
        }
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), label.to_string());
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events), label.to_string());
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&self.events),
            label.to_string(),
            config.navigation,
        );
        builder = self.attach_custom_protocol(builder);

        let initial_url = if let Some(url) = &config.url {
            builder = builder.with_url(url);
            url.clone()
        } else {
            builder = builder.with_html(config.html.as_deref().unwrap_or("<html><body></body></html>"));
            "about:blank".to_string()
        };

        let webview = builder.build_as_child(window)?;

        debug!(view = label, url = %initial_url, partitioned = context.is_some(), "WebView created");

        Ok(WebViewHandle {
            webview,
            _context: context,
            label: label.to_string(),
        })
    }

    /// Serve `switchboard://` requests from `provider`. Must be set before
    /// views are created.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(PROTOCOL.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = request_path(&uri);

            match cp.resolve(path) {
                Some((mime, data)) => respond(StatusCode::OK, &mime, data.into_owned()),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    respond(StatusCode::NOT_FOUND, "text/plain", b"Not Found".to_vec())
                }
            }
        })
    }
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
fn with_data_store<'a>(builder: WebViewBuilder<'a>, config: &WebViewConfig) -> WebViewBuilder<'a> {
    use wry::WebViewBuilderExtDarwin;

    match config.data_store_id {
        Some(id) => builder.with_data_store_identifier(id),
        None => builder,
    }
}

/// Other platforms isolate through the `WebContext` data directory.
#[cfg(not(any(target_os = "macos", target_os = "ios")))]
fn with_data_store<'a>(builder: WebViewBuilder<'a>, _config: &WebViewConfig) -> WebViewBuilder<'a> {
    builder
}

fn respond(status: StatusCode, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "*")
        .body(Cow::Owned(body))
        .unwrap_or_else(|e| {
            warn!(error = %e, "custom protocol: failed to build response");
            let mut fallback = Response::new(Cow::Borrowed(&b""[..]));
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}
