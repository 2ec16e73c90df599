//! Contain-fit mapping from the logical canvas onto the physical display
//!
//! The canvas (frame buffer) is shown letterboxed on the panel: scaled by the
//! smaller of the two axis ratios and centered. Touch samples arrive in panel
//! pixels, so widget rectangles are pushed through the same transform before
//! hit-testing.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Aspect-preserving, centered transform from canvas units to display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale: f32,
    offset_x: f32,
    offset_y: f32,
}

impl CoordinateMapper {
    /// Build the "contain" transform for a canvas shown on a display.
    ///
    /// A canvas with a zero dimension maps everything to a zero-area rect at
    /// the display center, which makes every widget non-interactive.
    pub fn contain(canvas: Size, display: Size) -> Self {
        if canvas.width == 0 || canvas.height == 0 {
            return Self {
                scale: 0.0,
                offset_x: display.width as f32 / 2.0,
                offset_y: display.height as f32 / 2.0,
            };
        }

        let (cw, ch) = (canvas.width as f32, canvas.height as f32);
        let (dw, dh) = (display.width as f32, display.height as f32);
        let scale = (dw / cw).min(dh / ch);

        Self {
            scale,
            offset_x: (dw - cw * scale) / 2.0,
            offset_y: (dh - ch * scale) / 2.0,
        }
    }

    /// Mapping for a canvas presented 1:1
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Letterbox offsets `(x, y)` in display pixels
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    pub fn map_point(&self, point: Point) -> Point {
        Point::new(
            (point.x as f32 * self.scale + self.offset_x) as i32,
            (point.y as f32 * self.scale + self.offset_y) as i32,
        )
    }

    /// Scale a length without applying the offsets.
    pub fn map_scalar(&self, value: u32) -> u32 {
        (value as f32 * self.scale) as u32
    }

    pub fn map_rect(&self, rect: Rectangle) -> Rectangle {
        Rectangle::new(
            self.map_point(rect.top_left),
            Size::new(
                self.map_scalar(rect.size.width),
                self.map_scalar(rect.size.height),
            ),
        )
    }

    /// Convert a display-space point back to canvas units.
    ///
    /// Returns `None` when the canvas is degenerate.
    pub fn unmap_point(&self, point: Point) -> Option<Point> {
        if self.scale <= 0.0 {
            return None;
        }
        Some(Point::new(
            ((point.x as f32 - self.offset_x) / self.scale) as i32,
            ((point.y as f32 - self.offset_y) / self.scale) as i32,
        ))
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::identity()
    }
}

/// Exclusive hit-test: `point` must lie strictly between the edges.
///
/// Two widgets sharing an edge can therefore never both claim a touch that
/// lands exactly on it.
pub fn contains_strict(rect: &Rectangle, point: Point) -> bool {
    let left = rect.top_left.x;
    let top = rect.top_left.y;
    let right = left + rect.size.width as i32;
    let bottom = top + rect.size.height as i32;

    left < point.x && point.x < right && top < point.y && point.y < bottom
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: u32, h: u32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn test_uniform_upscale_has_no_offset() {
        let mapper = CoordinateMapper::contain(Size::new(320, 240), Size::new(640, 480));
        assert_eq!(mapper.scale(), 2.0);
        assert_eq!(mapper.offset(), (0.0, 0.0));
        assert_eq!(mapper.map_rect(rect(30, 30, 120, 80)), rect(60, 60, 240, 160));
    }

    #[test]
    fn test_wide_display_letterboxes_horizontally() {
        let mapper = CoordinateMapper::contain(Size::new(320, 240), Size::new(800, 480));
        assert_eq!(mapper.scale(), 2.0);
        assert_eq!(mapper.offset(), (80.0, 0.0));
        assert_eq!(mapper.map_rect(rect(10, 10, 20, 20)), rect(100, 20, 40, 40));
    }

    #[test]
    fn test_tall_display_letterboxes_vertically() {
        let mapper = CoordinateMapper::contain(Size::new(640, 480), Size::new(320, 480));
        assert_eq!(mapper.scale(), 0.5);
        assert_eq!(mapper.offset(), (0.0, 120.0));
        assert_eq!(mapper.map_point(Point::new(100, 100)), Point::new(50, 170));
    }

    #[test]
    fn test_zero_canvas_is_inert() {
        let mapper = CoordinateMapper::contain(Size::new(0, 240), Size::new(640, 480));
        let mapped = mapper.map_rect(rect(10, 10, 100, 100));
        assert_eq!(mapped.size, Size::zero());
        assert!(!contains_strict(&mapped, mapped.top_left));
        assert_eq!(mapper.unmap_point(Point::new(1, 1)), None);
    }

    #[test]
    fn test_edges_are_excluded() {
        let r = rect(10, 10, 20, 20);
        assert!(contains_strict(&r, Point::new(11, 11)));
        assert!(contains_strict(&r, Point::new(29, 29)));
        assert!(!contains_strict(&r, Point::new(10, 15)));
        assert!(!contains_strict(&r, Point::new(30, 15)));
        assert!(!contains_strict(&r, Point::new(15, 10)));
        assert!(!contains_strict(&r, Point::new(15, 30)));
    }

    #[test]
    fn test_shared_edge_claims_neither() {
        let left = rect(0, 0, 50, 50);
        let right = rect(50, 0, 50, 50);
        let on_edge = Point::new(50, 25);
        assert!(!contains_strict(&left, on_edge));
        assert!(!contains_strict(&right, on_edge));
    }

    #[test]
    fn test_mapped_center_is_inside() {
        let sizes = [
            (Size::new(320, 240), Size::new(320, 240)),
            (Size::new(320, 240), Size::new(800, 480)),
            (Size::new(640, 480), Size::new(552, 368)),
            (Size::new(640, 480), Size::new(240, 320)),
        ];
        let rects = [rect(30, 30, 120, 80), rect(200, 150, 40, 24), rect(0, 0, 16, 16)];

        for (canvas, display) in sizes {
            let mapper = CoordinateMapper::contain(canvas, display);
            for r in rects {
                let mapped = mapper.map_rect(r);
                assert!(
                    contains_strict(&mapped, mapped.center()),
                    "center of {:?} not inside for {:?} on {:?}",
                    mapped,
                    canvas,
                    display
                );
            }
        }
    }

    #[test]
    fn test_unmap_inverts_map() {
        let mapper = CoordinateMapper::contain(Size::new(320, 240), Size::new(800, 480));
        let p = Point::new(40, 60);
        assert_eq!(mapper.unmap_point(mapper.map_point(p)), Some(p));
    }
}
