use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in logical window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Split off a fixed-width column on the left.
    ///
    /// Returns `(left, rest)`. The column is clamped to the rect's width so
    /// neither half ever has a negative size.
    pub fn split_left(&self, column: f64) -> (Rect, Rect) {
        let column = column.clamp(0.0, self.width.max(0.0));
        let left = Rect::new(self.x, self.y, column, self.height);
        let rest = Rect::new(
            self.x + column,
            self.y,
            (self.width - column).max(0.0),
            self.height,
        );
        (left, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_left_divides_width() {
        let window = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let (sidebar, content) = window.split_left(64.0);
        assert_eq!(sidebar, Rect::new(0.0, 0.0, 64.0, 800.0));
        assert_eq!(content, Rect::new(64.0, 0.0, 1216.0, 800.0));
    }

    #[test]
    fn split_left_clamps_to_width() {
        let window = Rect::new(0.0, 0.0, 40.0, 100.0);
        let (sidebar, content) = window.split_left(64.0);
        assert!((sidebar.width - 40.0).abs() < f64::EPSILON);
        assert!(content.width.abs() < f64::EPSILON);
        assert!((content.x - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rect_serialization() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&rect).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, back);
    }
}
