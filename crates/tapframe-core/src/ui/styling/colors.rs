//! Color definitions for widgets drawn over a camera frame
//!
//! Frame buffers are RGB565. To convert from 8-bit RGB: R>>3, G>>2, B>>3.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment};

/// A widget color parameter: either nothing is drawn, or a solid color is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    Transparent,
    Opaque(Rgb565),
}

impl ColorSpec {
    /// Opaque color from 8-bit channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec::Opaque(rgb888(r, g, b))
    }

    pub const fn color(&self) -> Option<Rgb565> {
        match self {
            ColorSpec::Transparent => None,
            ColorSpec::Opaque(color) => Some(*color),
        }
    }

    pub const fn is_transparent(&self) -> bool {
        matches!(self, ColorSpec::Transparent)
    }

    /// Solid fill style, or `None` when transparent
    pub fn fill(&self) -> Option<PrimitiveStyle<Rgb565>> {
        self.color().map(PrimitiveStyle::with_fill)
    }

    /// Inside-aligned stroke style, or `None` when transparent or zero width
    pub fn stroke(&self, width: u32) -> Option<PrimitiveStyle<Rgb565>> {
        if width == 0 {
            return None;
        }
        self.color().map(|color| {
            PrimitiveStyleBuilder::new()
                .stroke_color(color)
                .stroke_width(width)
                .stroke_alignment(StrokeAlignment::Inside)
                .build()
        })
    }
}

impl From<Rgb565> for ColorSpec {
    fn from(color: Rgb565) -> Self {
        ColorSpec::Opaque(color)
    }
}

impl From<Option<Rgb565>> for ColorSpec {
    fn from(color: Option<Rgb565>) -> Self {
        color.map_or(ColorSpec::Transparent, ColorSpec::Opaque)
    }
}

/// Convert 8-bit channels to RGB565
pub const fn rgb888(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// ============================================================================
// Widget defaults
// ============================================================================

pub const WHITE: ColorSpec = ColorSpec::rgb(255, 255, 255);
pub const BLACK: ColorSpec = ColorSpec::rgb(0, 0, 0);

/// Accent used for pressed buttons, slider progress and checked boxes
pub const ACCENT: ColorSpec = ColorSpec::rgb(0, 120, 220);

/// Resting button face
pub const SURFACE: ColorSpec = ColorSpec::rgb(50, 50, 50);

/// Borders, unchecked boxes and labels
pub const OUTLINE: ColorSpec = ColorSpec::rgb(200, 200, 200);

/// Slider track
pub const TRACK: ColorSpec = ColorSpec::rgb(60, 60, 60);

/// Slider handle border and switch "off" track
pub const MUTED: ColorSpec = ColorSpec::rgb(100, 100, 100);

/// Switch "on" track
pub const ON_GREEN: ColorSpec = ColorSpec::rgb(30, 200, 30);

/// Handle tint while pressed
pub const HANDLE_PRESSED: ColorSpec = ColorSpec::rgb(220, 220, 255);

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;

    #[test]
    fn test_rgb888_conversion() {
        assert_eq!(rgb888(255, 255, 255), Rgb565::WHITE);
        assert_eq!(rgb888(0, 0, 0), Rgb565::BLACK);
        assert_eq!(rgb888(0, 120, 220), Rgb565::new(0, 30, 27));
    }

    #[test]
    fn test_transparent_has_no_styles() {
        assert!(ColorSpec::Transparent.fill().is_none());
        assert!(ColorSpec::Transparent.stroke(2).is_none());
        assert!(WHITE.stroke(0).is_none());
        assert!(WHITE.fill().is_some());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(ColorSpec::from(None), ColorSpec::Transparent);
        assert_eq!(
            ColorSpec::from(Some(Rgb565::RED)),
            ColorSpec::Opaque(Rgb565::RED)
        );
    }
}
