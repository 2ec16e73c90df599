// src/ui/components/checkbox.rs
//! Labelled checkbox

use alloc::boxed::Box;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use log::debug;

use super::gesture::{DragOutPolicy, PressLatch};
use super::switch::ToggleCallback;
use super::text;
use crate::ui::core::{Drawable, TouchSample, Touchable};
use crate::ui::mapping::{CoordinateMapper, contains_strict};
use crate::ui::styling::{ACCENT, ColorSpec, OUTLINE, WHITE};

const BASE_BOX_SIZE: f32 = 25.0;
const BASE_TEXT_SCALE: f32 = 1.2;
const BASE_SPACING: f32 = 10.0;
const BASE_BOX_THICKNESS: f32 = 2.0;
/// Vertical slack around the box that still counts as a hit (unscaled)
const TOUCH_PADDING_Y: i32 = 5;

/// Check mark vertices as fractions of the box size
const CHECK_POINTS: [(f32, f32); 3] = [(0.2, 0.5), (0.45, 0.75), (0.8, 0.25)];

/// Square checkbox followed by a text label
///
/// Only the box is touch sensitive, padded a few pixels vertically.
pub struct Checkbox {
    position: Point,
    label: heapless::String<32>,
    scale: f32,
    is_checked: bool,
    callback: Option<ToggleCallback>,
    latch: PressLatch,
    box_color: ColorSpec,
    box_checked_color: ColorSpec,
    check_color: ColorSpec,
    text_color: ColorSpec,
    box_thickness: f32,
}

impl Checkbox {
    pub fn new(position: Point, label: &str) -> Self {
        Self {
            position,
            label: text::label(label),
            scale: 1.0,
            is_checked: false,
            callback: None,
            latch: PressLatch::new(),
            box_color: OUTLINE,
            box_checked_color: ACCENT,
            check_color: WHITE,
            text_color: OUTLINE,
            box_thickness: BASE_BOX_THICKNESS,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_checked(mut self, is_checked: bool) -> Self {
        self.is_checked = is_checked;
        self
    }

    pub fn with_box_colors(mut self, unchecked: ColorSpec, checked: ColorSpec) -> Self {
        self.box_color = unchecked;
        self.box_checked_color = checked;
        self
    }

    pub fn with_check_color(mut self, color: ColorSpec) -> Self {
        self.check_color = color;
        self
    }

    pub fn with_text_color(mut self, color: ColorSpec) -> Self {
        self.text_color = color;
        self
    }

    /// Outline thickness before scaling.
    pub fn with_box_thickness(mut self, thickness: f32) -> Self {
        self.box_thickness = thickness;
        self
    }

    pub fn with_callback(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_callback(&mut self, callback: impl FnMut(bool) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    /// Set the state without invoking the callback.
    pub fn set_checked(&mut self, is_checked: bool) {
        self.is_checked = is_checked;
    }

    /// Flip the state and report the new one to the callback.
    pub fn toggle(&mut self) -> bool {
        self.is_checked = !self.is_checked;
        if let Some(callback) = self.callback.as_mut() {
            callback(self.is_checked);
        }
        self.is_checked
    }

    fn box_size(&self) -> i32 {
        (BASE_BOX_SIZE * self.scale) as i32
    }

    fn text_scale(&self) -> f32 {
        BASE_TEXT_SCALE * self.scale
    }

    /// Box rectangle, label origin and label size, vertically centred on
    /// each other.
    fn layout(&self) -> (Rectangle, Point, Size) {
        let box_size = self.box_size().max(0);
        let text_size = text::measure(&self.label, self.text_scale());
        let text_h = text_size.height as i32;
        let total_h = box_size.max(text_h);

        let box_y = self.position.y + (total_h - box_size) / 2;
        let text_y = self.position.y + (total_h - text_h) / 2;
        let text_x = self.position.x + box_size + (BASE_SPACING * self.scale) as i32;

        let frame = Rectangle::new(
            Point::new(self.position.x, box_y),
            Size::new(box_size as u32, box_size as u32),
        );
        (frame, Point::new(text_x, text_y), text_size)
    }

    /// Touch region: the box padded vertically. The label is not sensitive.
    fn touch_rect(&self) -> Rectangle {
        let (frame, _, _) = self.layout();
        Rectangle::new(
            frame.top_left - Point::new(0, TOUCH_PADDING_Y),
            Size::new(
                frame.size.width,
                frame.size.height + 2 * TOUCH_PADDING_Y as u32,
            ),
        )
    }
}

impl Drawable for Checkbox {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, canvas: &mut D) -> Result<(), D::Error> {
        let (frame, text_origin, _) = self.layout();
        let color = if self.is_checked {
            self.box_checked_color
        } else {
            self.box_color
        };
        if self.is_checked
            && let Some(style) = color.fill()
        {
            frame.into_styled(style).draw(canvas)?;
        }
        let thickness = (self.box_thickness * self.scale) as u32;
        if let Some(style) = color.stroke(thickness) {
            frame.into_styled(style).draw(canvas)?;
        }

        if self.is_checked
            && let Some(check) = self.check_color.color()
        {
            let size = frame.size.width as f32;
            let [p1, p2, p3] = CHECK_POINTS.map(|(fx, fy)| {
                frame.top_left + Point::new((size * fx) as i32, (size * fy) as i32)
            });
            let width = ((2.0 * self.scale) as u32).max(1);
            let style = PrimitiveStyle::with_stroke(check, width);
            Line::new(p1, p2).into_styled(style).draw(canvas)?;
            Line::new(p2, p3).into_styled(style).draw(canvas)?;
        }

        text::draw_text(
            canvas,
            text_origin,
            &self.label,
            self.text_color,
            self.text_scale(),
        )?;

        Ok(())
    }

    /// Box and label together.
    fn bounds(&self) -> Rectangle {
        let (frame, text_origin, text_size) = self.layout();
        let box_right = frame.top_left.x + frame.size.width as i32;
        let right = (text_origin.x + text_size.width as i32).max(box_right);
        let height = frame.size.height.max(text_size.height);
        Rectangle::new(
            self.position,
            Size::new((right - self.position.x).max(0) as u32, height),
        )
    }
}

impl Touchable for Checkbox {
    type Output = bool;

    fn handle_touch(&mut self, sample: TouchSample, mapper: &CoordinateMapper) -> Option<bool> {
        let hit = contains_strict(&mapper.map_rect(self.touch_rect()), sample.to_point());

        if !self.latch.update(sample.pressed, hit, DragOutPolicy::Hold) {
            return None;
        }

        let state = self.toggle();
        debug!("Checkbox '{}' -> {}", self.label, state);
        Some(state)
    }
}
