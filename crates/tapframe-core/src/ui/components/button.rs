// src/ui/components/button.rs
//! Push button with arm-on-press, fire-on-release semantics

use alloc::boxed::Box;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use super::gesture::{DragOutPolicy, PressLatch};
use super::text;
use crate::ui::core::{Drawable, TouchSample, Touchable};
use crate::ui::mapping::{CoordinateMapper, contains_strict};
use crate::ui::styling::{ACCENT, ColorSpec, OUTLINE, SURFACE, WHITE};

/// Gap between the border and left/right/top/bottom aligned text
const TEXT_INSET_PX: i32 = 5;

/// Callback invoked on a confirmed tap
pub type ButtonCallback = Box<dyn FnMut()>;

/// Horizontal label placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical label placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Button component with a text label and an optional callback
///
/// # Touch Behavior
/// - A press inside the button arms it and shows the pressed color
/// - Dragging outside while held cancels the gesture
/// - Releasing inside an armed button fires the callback once
///
/// # Examples
/// ```ignore
/// let mut button = Button::new(
///     Rectangle::new(Point::new(30, 30), Size::new(120, 80)),
///     "Switch",
/// )
/// .with_colors(ColorSpec::Transparent, ColorSpec::Transparent)
/// .with_border(WHITE, 2);
///
/// button.set_callback(|| log::info!("tapped"));
/// ```
pub struct Button {
    bounds: Rectangle,
    label: heapless::String<32>,
    callback: Option<ButtonCallback>,
    latch: PressLatch,
    bg_color: ColorSpec,
    pressed_color: ColorSpec,
    text_color: ColorSpec,
    border_color: ColorSpec,
    border_thickness: u32,
    text_scale: f32,
    align_h: HAlign,
    align_v: VAlign,
}

impl Button {
    /// Create a button with the default dark face, blue pressed color,
    /// white 1.5× text and a 2 px light border.
    pub fn new(bounds: Rectangle, label: &str) -> Self {
        Self {
            bounds,
            label: text::label(label),
            callback: None,
            latch: PressLatch::new(),
            bg_color: SURFACE,
            pressed_color: ACCENT,
            text_color: WHITE,
            border_color: OUTLINE,
            border_thickness: 2,
            text_scale: 1.5,
            align_h: HAlign::Center,
            align_v: VAlign::Center,
        }
    }

    /// Face colors at rest and while pressed.
    pub fn with_colors(mut self, background: ColorSpec, pressed: ColorSpec) -> Self {
        self.bg_color = background;
        self.pressed_color = pressed;
        self
    }

    pub fn with_text_color(mut self, color: ColorSpec) -> Self {
        self.text_color = color;
        self
    }

    /// Border color and thickness; a thickness of 0 removes the border.
    pub fn with_border(mut self, color: ColorSpec, thickness: u32) -> Self {
        self.border_color = color;
        self.border_thickness = thickness;
        self
    }

    pub fn with_text_scale(mut self, scale: f32) -> Self {
        self.text_scale = scale;
        self
    }

    pub fn with_alignment(mut self, horizontal: HAlign, vertical: VAlign) -> Self {
        self.align_h = horizontal;
        self.align_v = vertical;
        self
    }

    pub fn with_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Install or replace the callback after construction.
    pub fn set_callback(&mut self, callback: impl FnMut() + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    pub fn is_pressed(&self) -> bool {
        self.latch.is_pressed()
    }

    pub fn is_armed(&self) -> bool {
        self.latch.is_armed()
    }

    fn text_origin(&self, text_size: Size) -> Point {
        let Rectangle { top_left, size } = self.bounds;
        let (w, h) = (size.width as i32, size.height as i32);
        let (tw, th) = (text_size.width as i32, text_size.height as i32);
        let inset = self.border_thickness as i32 + TEXT_INSET_PX;

        let x = match self.align_h {
            HAlign::Left => top_left.x + inset,
            HAlign::Center => top_left.x + (w - tw) / 2,
            HAlign::Right => top_left.x + w - tw - inset,
        };
        let y = match self.align_v {
            VAlign::Top => top_left.y + inset,
            VAlign::Center => top_left.y + (h - th) / 2,
            VAlign::Bottom => top_left.y + h - th - inset,
        };
        Point::new(x, y)
    }
}

impl Drawable for Button {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, canvas: &mut D) -> Result<(), D::Error> {
        let face = if self.latch.is_pressed() {
            self.pressed_color
        } else {
            self.bg_color
        };
        if let Some(style) = face.fill() {
            self.bounds.into_styled(style).draw(canvas)?;
        }
        if let Some(style) = self.border_color.stroke(self.border_thickness) {
            self.bounds.into_styled(style).draw(canvas)?;
        }

        let text_size = text::measure(&self.label, self.text_scale);
        text::draw_text(
            canvas,
            self.text_origin(text_size),
            &self.label,
            self.text_color,
            self.text_scale,
        )?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

impl Touchable for Button {
    type Output = ();

    fn handle_touch(&mut self, sample: TouchSample, mapper: &CoordinateMapper) -> Option<()> {
        let hit = contains_strict(&mapper.map_rect(self.bounds), sample.to_point());

        if !self.latch.update(sample.pressed, hit, DragOutPolicy::Cancel) {
            return None;
        }

        debug!("Button '{}' clicked", self.label);
        if let Some(callback) = self.callback.as_mut() {
            callback();
        }
        Some(())
    }
}
