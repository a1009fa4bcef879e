//! Geometry helpers and color-name mapping.
//!
//! This module provides:
//! - [`Point`] in canvas coordinates
//! - Rectangle normalisation and circle radius for the shape tools
//! - Axis constraints for the straight-line tools
//! - Name-to-color mapping used by the configuration file

use crate::draw::{Rgb, color::*};
use std::path::PathBuf;

// ============================================================================
// Geometry
// ============================================================================

/// A position on the canvas, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Translates by `-origin`, e.g. from client to canvas coordinates.
    pub fn relative_to(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Converts a drag from `start` to `end` into `(x, y, width, height)` with
/// non-negative width and height, so dragging in any direction works.
pub fn normalized_rect(start: Point, end: Point) -> (f64, f64, f64, f64) {
    let (x, w) = if end.x >= start.x {
        (start.x, end.x - start.x)
    } else {
        (end.x, start.x - end.x)
    };
    let (y, h) = if end.y >= start.y {
        (start.y, end.y - start.y)
    } else {
        (end.y, start.y - end.y)
    };
    (x, y, w, h)
}

/// Radius of a circle centred at `center` that passes through `edge`.
pub fn circle_radius(center: Point, edge: Point) -> f64 {
    center.distance_to(edge)
}

/// Projects `point` onto the horizontal row through `anchor`.
pub fn constrain_to_row(anchor: Point, point: Point) -> Point {
    Point::new(point.x, anchor.y)
}

/// Projects `point` onto the vertical column through `anchor`.
pub fn constrain_to_column(anchor: Point, point: Point) -> Point {
    Point::new(anchor.x, point.y)
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to RGB values.
///
/// Used by the configuration system to accept `default_color = "red"`.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Rgb> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_rect_handles_every_drag_direction() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(50.0, 40.0);
        assert_eq!(normalized_rect(a, b), (10.0, 10.0, 40.0, 30.0));
        assert_eq!(normalized_rect(b, a), (10.0, 10.0, 40.0, 30.0));
        assert_eq!(
            normalized_rect(Point::new(50.0, 10.0), Point::new(10.0, 40.0)),
            (10.0, 10.0, 40.0, 30.0)
        );
    }

    #[test]
    fn degenerate_rect_has_zero_size() {
        let p = Point::new(7.0, 7.0);
        assert_eq!(normalized_rect(p, p), (7.0, 7.0, 0.0, 0.0));
    }

    #[test]
    fn circle_radius_is_euclidean() {
        assert_eq!(
            circle_radius(Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
            5.0
        );
    }

    #[test]
    fn line_constraints_keep_anchor_axis() {
        let anchor = Point::new(5.0, 20.0);
        let p = Point::new(80.0, 64.0);
        assert_eq!(constrain_to_row(anchor, p), Point::new(80.0, 20.0));
        assert_eq!(constrain_to_column(anchor, p), Point::new(5.0, 64.0));
    }

    #[test]
    fn relative_to_subtracts_origin() {
        let client = Point::new(130.0, 95.5);
        let origin = Point::new(30.0, 20.5);
        assert_eq!(client.relative_to(origin), Point::new(100.0, 75.0));
    }

    #[test]
    fn name_color_mapping() {
        assert_eq!(name_to_color("White"), Some(WHITE));
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn expand_tilde_only_touches_home_prefix() {
        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
        if dirs::home_dir().is_some() {
            assert!(!expand_tilde("~/Pictures").to_string_lossy().starts_with('~'));
        }
    }
}
