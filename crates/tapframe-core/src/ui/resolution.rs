//! Design-to-canvas scaling
//!
//! Layouts are written against a fixed base grid (320×240 by default). A
//! [`ResolutionAdapter`] converts those numbers to the canvas resolution in
//! use once, at setup time. Contain-fit mapping to the panel happens later,
//! per frame, in [`CoordinateMapper`](super::mapping::CoordinateMapper).

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{ConfigError, ConfigResult, DEFAULT_BASE_HEIGHT, DEFAULT_BASE_WIDTH, UiConfig};

/// Per-axis scale factors from the base grid to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionAdapter {
    scale_x: f32,
    scale_y: f32,
}

impl ResolutionAdapter {
    /// Adapter from the default 320×240 base grid.
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            scale_x: canvas_width as f32 / DEFAULT_BASE_WIDTH as f32,
            scale_y: canvas_height as f32 / DEFAULT_BASE_HEIGHT as f32,
        }
    }

    /// Adapter from a custom base grid.
    ///
    /// Fails if either base dimension is zero.
    pub fn with_base(
        canvas_width: u32,
        canvas_height: u32,
        base_width: u32,
        base_height: u32,
    ) -> ConfigResult<Self> {
        if base_width == 0 || base_height == 0 {
            return Err(ConfigError::ZeroBaseResolution {
                width: base_width,
                height: base_height,
            });
        }

        Ok(Self {
            scale_x: canvas_width as f32 / base_width as f32,
            scale_y: canvas_height as f32 / base_height as f32,
        })
    }

    /// Adapter using the base grid stored in `config`.
    pub fn from_config(canvas: Size, config: &UiConfig) -> ConfigResult<Self> {
        Self::with_base(
            canvas.width,
            canvas.height,
            config.base_width,
            config.base_height,
        )
    }

    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    pub fn scale_position(&self, x: i32, y: i32) -> Point {
        Point::new(
            (x as f32 * self.scale_x) as i32,
            (y as f32 * self.scale_y) as i32,
        )
    }

    pub fn scale_size(&self, width: u32, height: u32) -> Size {
        Size::new(
            (width as f32 * self.scale_x) as u32,
            (height as f32 * self.scale_y) as u32,
        )
    }

    /// Scale a `[x, y, w, h]` rectangle authored on the base grid.
    pub fn scale_rect(&self, x: i32, y: i32, width: u32, height: u32) -> Rectangle {
        Rectangle::new(
            self.scale_position(x, y),
            self.scale_size(width, height),
        )
    }

    /// Scale a radius, thickness or text scale by the larger axis factor.
    pub fn scale_value(&self, value: f32) -> f32 {
        value * self.scale_x.max(self.scale_y)
    }

    /// [`scale_value`](Self::scale_value) truncated to whole pixels.
    pub fn scale_px(&self, value: u32) -> u32 {
        self.scale_value(value as f32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_resolution() {
        let adapter = ResolutionAdapter::new(640, 480);
        assert_eq!(adapter.scale_position(30, 30), Point::new(60, 60));
        assert_eq!(adapter.scale_size(120, 80), Size::new(240, 160));
        assert_eq!(
            adapter.scale_rect(170, 130, 120, 80),
            Rectangle::new(Point::new(340, 260), Size::new(240, 160))
        );
        assert_eq!(adapter.scale_value(1.5), 3.0);
    }

    #[test]
    fn test_non_uniform_uses_larger_factor_for_values() {
        let adapter = ResolutionAdapter::new(640, 240);
        assert_eq!(adapter.scale_x(), 2.0);
        assert_eq!(adapter.scale_y(), 1.0);
        assert_eq!(adapter.scale_position(10, 10), Point::new(20, 10));
        assert_eq!(adapter.scale_value(2.0), 4.0);
        assert_eq!(adapter.scale_px(2), 4);
    }

    #[test]
    fn test_custom_base() {
        let adapter = ResolutionAdapter::with_base(480, 272, 480, 272).unwrap();
        assert_eq!(adapter.scale_position(100, 50), Point::new(100, 50));
    }

    #[test]
    fn test_zero_base_rejected() {
        assert!(matches!(
            ResolutionAdapter::with_base(640, 480, 0, 240),
            Err(ConfigError::ZeroBaseResolution { width: 0, height: 240 })
        ));
        assert!(ResolutionAdapter::with_base(640, 480, 320, 0).is_err());
    }

    #[test]
    fn test_from_config() {
        let config = UiConfig {
            base_width: 160,
            base_height: 120,
            ..UiConfig::default()
        };
        let adapter = ResolutionAdapter::from_config(Size::new(640, 480), &config).unwrap();
        assert_eq!(adapter.scale_x(), 4.0);
        assert_eq!(adapter.scale_y(), 4.0);
    }
}
