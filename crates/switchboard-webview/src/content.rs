//! Local content served through the `switchboard://` protocol.
//!
//! Icons come from the assets directory on disk; the sidebar and settings
//! pages are registered as in-memory overrides.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Custom protocol name.
pub const PROTOCOL: &str = "switchboard";

/// URL of `path` under the custom protocol.
///
/// WebView2 exposes custom protocols as `http://{name}.localhost/`; every
/// other backend uses `{name}://localhost/`.
pub fn protocol_url(path: &str) -> String {
    let path = path.trim_start_matches("./").trim_start_matches('/');
    if cfg!(windows) {
        format!("http://{PROTOCOL}.localhost/{path}")
    } else {
        format!("{PROTOCOL}://localhost/{path}")
    }
}

/// Request path of a protocol URI, without the scheme and host.
pub fn request_path(uri: &str) -> &str {
    let rest = uri
        .strip_prefix("switchboard://localhost")
        .or_else(|| uri.strip_prefix("http://switchboard.localhost"))
        .or_else(|| uri.strip_prefix("https://switchboard.localhost"))
        .or_else(|| uri.strip_prefix("switchboard://"))
        .unwrap_or("");
    let rest = rest.split(['?', '#']).next().unwrap_or("");
    rest.trim_start_matches('/')
}

/// Serves files from a base directory plus in-memory pages.
pub struct ContentProvider {
    base_dir: PathBuf,
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            overrides: HashMap::new(),
        }
    }

    /// Serve `data` at `path` instead of anything on disk.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to its MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches("./").trim_start_matches('/');

        if let Some((mime, data)) = self.overrides.get(clean) {
            return Some((Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())));
        }

        let file_path = self.base_dir.join(clean);

        // Canonicalize both sides so `..` and symlinks cannot escape the base.
        let canonical_base = std::fs::canonicalize(&self.base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Owned(mime.to_string()), Cow::Owned(data)))
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}
