// src/ui/components/text.rs
//! Text measurement and rendering with a continuous scale factor
//!
//! Mono fonts only come in fixed sizes, so a `scale` is resolved to the
//! nearest preset whose glyph height approximates `scale × 10` pixels.

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, ascii};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::ui::styling::ColorSpec;

/// Pick the mono font closest to a text scale.
pub fn font_for_scale(scale: f32) -> &'static MonoFont<'static> {
    if scale < 0.9 {
        &ascii::FONT_5X8
    } else if scale < 1.2 {
        &ascii::FONT_6X10
    } else if scale < 1.4 {
        &ascii::FONT_7X13
    } else if scale < 1.6 {
        &ascii::FONT_8X13
    } else if scale < 1.8 {
        &ascii::FONT_9X15
    } else if scale < 2.2 {
        &ascii::FONT_9X18
    } else {
        &ascii::FONT_10X20
    }
}

/// Size `text` would occupy at `scale`.
pub fn measure(text: &str, scale: f32) -> Size {
    let style = MonoTextStyle::new(font_for_scale(scale), Rgb565::WHITE);
    Text::with_baseline(text, Point::zero(), style, Baseline::Top)
        .bounding_box()
        .size
}

/// Draw `text` with its top-left corner at `position` and return its size.
///
/// Transparent text is measured but not drawn.
pub fn draw_text<D: DrawTarget<Color = Rgb565>>(
    canvas: &mut D,
    position: Point,
    text: &str,
    color: ColorSpec,
    scale: f32,
) -> Result<Size, D::Error> {
    let Some(color) = color.color() else {
        return Ok(measure(text, scale));
    };

    let style = MonoTextStyle::new(font_for_scale(scale), color);
    let text = Text::with_baseline(text, position, style, Baseline::Top);
    let size = text.bounding_box().size;
    text.draw(canvas)?;
    Ok(size)
}

/// Copy `text` into a fixed-capacity label, dropping what does not fit.
pub fn label<const N: usize>(text: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    #[test]
    fn test_font_grows_with_scale() {
        assert_eq!(font_for_scale(0.8).character_size, Size::new(5, 8));
        assert_eq!(font_for_scale(1.0).character_size, Size::new(6, 10));
        assert_eq!(font_for_scale(3.0).character_size, Size::new(10, 20));
    }

    #[test]
    fn test_measure_is_per_character() {
        assert_eq!(measure("Slider", 1.0), Size::new(36, 10));
        assert_eq!(measure("", 1.0).width, 0);
    }

    #[test]
    fn test_transparent_text_draws_nothing() {
        let mut canvas = SimulatorDisplay::<Rgb565>::new(Size::new(64, 32));
        let size = draw_text(&mut canvas, Point::new(0, 0), "AB", ColorSpec::Transparent, 1.0)
            .unwrap();
        assert_eq!(size, Size::new(12, 10));
        assert!(canvas.bounding_box().points().all(|p| canvas.get_pixel(p) == Rgb565::BLACK));
    }

    #[test]
    fn test_label_truncates() {
        let l: heapless::String<4> = label("Checkbox");
        assert_eq!(l.as_str(), "Chec");
    }
}
