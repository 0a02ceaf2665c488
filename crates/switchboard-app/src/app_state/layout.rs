//! Window layout: a fixed-width sidebar and the content area beside it.

use switchboard_common::Rect;

use super::core::SwitchboardApp;

/// Sidebar and content rects for a window of `width` x `height` logical px.
pub(super) fn split_window(width: f64, height: f64, sidebar_width: f64) -> (Rect, Rect) {
    Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0)).split_left(sidebar_width)
}

impl SwitchboardApp {
    /// `(sidebar, content)` for the current window size.
    pub(super) fn layout(&self) -> (Rect, Rect) {
        let sidebar_width = f64::from(self.shell.sidebar.width);
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                split_window(size.width, size.height, sidebar_width)
            }
            None => split_window(0.0, 0.0, sidebar_width),
        }
    }
}
