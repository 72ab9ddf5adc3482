//! Letterbox Coordinate Mapping
//!
//! The body drawing is a 200×400 logical space shown with
//! `preserveAspectRatio="xMidYMid meet"`: uniformly scaled and centred in
//! whatever box the page gives it. Mapping is computed by hand from the
//! element's bounding box because screen CTMs are unreliable on mobile
//! browsers.

use serde::{Deserialize, Serialize};

/// Logical width of the body drawing
pub const LOGICAL_WIDTH: f64 = 200.0;
/// Logical height of the body drawing
pub const LOGICAL_HEIGHT: f64 = 400.0;

/// Point in logical (viewBox) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalPoint {
    pub x: f64,
    pub y: f64,
}

impl LogicalPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen bounding box of a drawing surface (client coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Uniform scale from logical units to screen pixels
    pub fn scale(&self) -> f64 {
        (self.width / LOGICAL_WIDTH).min(self.height / LOGICAL_HEIGHT)
    }

    /// Letterbox bands on the left/right and top/bottom
    pub fn margins(&self) -> (f64, f64) {
        let scale = self.scale();
        (
            (self.width - LOGICAL_WIDTH * scale) / 2.0,
            (self.height - LOGICAL_HEIGHT * scale) / 2.0,
        )
    }

    /// Map a client position to logical coordinates.
    ///
    /// Returns `None` when the position falls in a letterbox band or the
    /// rectangle has no area.
    pub fn to_logical(self, client_x: f64, client_y: f64) -> Option<LogicalPoint> {
        let scale = self.scale();
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        let (margin_x, margin_y) = self.margins();
        let x = (client_x - self.left - margin_x) / scale;
        let y = (client_y - self.top - margin_y) / scale;
        if x < 0.0 || x > LOGICAL_WIDTH || y < 0.0 || y > LOGICAL_HEIGHT {
            return None;
        }
        Some(LogicalPoint::new(x, y))
    }

    /// Forward transform: where a logical point is drawn on screen
    pub fn to_screen(self, point: LogicalPoint) -> (f64, f64) {
        let scale = self.scale();
        let (margin_x, margin_y) = self.margins();
        (
            self.left + margin_x + point.x * scale,
            self.top + margin_y + point.y * scale,
        )
    }
}

/// Axis-aligned region with exclusive bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Region {
    pub fn contains(&self, point: LogicalPoint) -> bool {
        point.x > self.min_x && point.x < self.max_x && point.y > self.min_y && point.y < self.max_y
    }
}

/// Rough rectangle around the silhouette; taps outside it are ignored.
pub const BODY_REGION: Region = Region {
    min_x: 30.0,
    max_x: 170.0,
    min_y: 20.0,
    max_y: LOGICAL_HEIGHT,
};

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(a: LogicalPoint, b: LogicalPoint) {
        assert!((a.x - b.x).abs() < 1e-6, "x: {} vs {}", a.x, b.x);
        assert!((a.y - b.y).abs() < 1e-6, "y: {} vs {}", a.y, b.y);
    }

    #[test]
    fn test_exact_fit() {
        let rect = ScreenRect::new(10.0, 20.0, 200.0, 400.0);
        assert!((rect.scale() - 1.0).abs() < EPS);
        assert_eq!(rect.margins(), (0.0, 0.0));
        assert_close(rect.to_logical(110.0, 220.0).unwrap(), LogicalPoint::new(100.0, 200.0));
    }

    #[test]
    fn test_wide_box_has_side_bands() {
        // 600x400 -> scale 1, 200 px drawn, 200 px bands either side
        let rect = ScreenRect::new(0.0, 0.0, 600.0, 400.0);
        assert_eq!(rect.margins(), (200.0, 0.0));
        assert!(rect.to_logical(100.0, 200.0).is_none());
        assert!(rect.to_logical(500.0, 200.0).is_none());
        assert_close(rect.to_logical(300.0, 200.0).unwrap(), LogicalPoint::new(100.0, 200.0));
    }

    #[test]
    fn test_tall_box_has_top_bands() {
        // 100x400 -> scale 0.5, drawn 100x200, 100 px bands top/bottom
        let rect = ScreenRect::new(0.0, 0.0, 100.0, 400.0);
        assert_eq!(rect.margins(), (0.0, 100.0));
        assert!(rect.to_logical(50.0, 50.0).is_none());
        assert_close(rect.to_logical(50.0, 200.0).unwrap(), LogicalPoint::new(100.0, 200.0));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let rect = ScreenRect::new(0.0, 0.0, 200.0, 400.0);
        assert!(rect.to_logical(0.0, 0.0).is_some());
        assert!(rect.to_logical(200.0, 400.0).is_some());
        assert!(rect.to_logical(200.5, 400.0).is_none());
    }

    #[test]
    fn test_degenerate_rect_maps_nothing() {
        let rect = ScreenRect::new(0.0, 0.0, 0.0, 300.0);
        assert!(rect.to_logical(0.0, 0.0).is_none());
    }

    #[test]
    fn test_round_trip_across_rects() {
        let rects = [
            ScreenRect::new(0.0, 0.0, 200.0, 400.0),
            ScreenRect::new(13.5, 77.25, 375.0, 512.0),
            ScreenRect::new(-40.0, 8.0, 1024.0, 300.0),
            ScreenRect::new(5.0, 5.0, 33.3, 999.9),
        ];
        for rect in rects {
            for i in 0..=10 {
                for j in 0..=10 {
                    let point = LogicalPoint::new(1.0 + i as f64 * 19.7, 1.0 + j as f64 * 39.3);
                    let (sx, sy) = rect.to_screen(point);
                    let mapped = rect.to_logical(sx, sy).unwrap_or_else(|| {
                        panic!("{:?} mapped outside for {:?}", point, rect)
                    });
                    assert_close(mapped, point);
                }
            }
        }
    }

    #[test]
    fn test_body_region_bounds_are_exclusive() {
        assert!(BODY_REGION.contains(LogicalPoint::new(100.0, 200.0)));
        assert!(BODY_REGION.contains(LogicalPoint::new(30.1, 20.1)));
        assert!(!BODY_REGION.contains(LogicalPoint::new(30.0, 200.0)));
        assert!(!BODY_REGION.contains(LogicalPoint::new(170.0, 200.0)));
        assert!(!BODY_REGION.contains(LogicalPoint::new(100.0, 20.0)));
        assert!(!BODY_REGION.contains(LogicalPoint::new(100.0, 400.0)));
    }
}
