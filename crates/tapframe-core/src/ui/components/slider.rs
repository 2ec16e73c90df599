// src/ui/components/slider.rs
//! Horizontal slider with continuous drag updates

use alloc::boxed::Box;
use core::fmt::Write;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Rectangle};
use log::debug;

use super::text;
use crate::config::{ConfigError, ConfigResult};
use crate::ui::core::{Drawable, TouchSample, Touchable};
use crate::ui::mapping::{CoordinateMapper, contains_strict};
use crate::ui::styling::{ACCENT, BLACK, ColorSpec, HANDLE_PRESSED, MUTED, OUTLINE, TRACK, WHITE};

const BASE_HANDLE_RADIUS: f32 = 10.0;
const BASE_HANDLE_BORDER_THICKNESS: f32 = 2.0;
const BASE_HANDLE_PRESSED_RADIUS_INCREASE: f32 = 3.0;
const BASE_TRACK_HEIGHT: f32 = 6.0;
const BASE_LABEL_SCALE: f32 = 1.2;
const BASE_TOOLTIP_SCALE: f32 = 1.2;
const BASE_TOUCH_PADDING_Y: f32 = 10.0;

/// Callback invoked with a widget's new value
pub type ValueCallback = Box<dyn FnMut(i32)>;

/// Slider over an inclusive integer range
///
/// The bounds describe the track. Touches register within `touch_padding_y`
/// above and below it. Once a drag starts it follows the contact anywhere on
/// the panel until release, and the value updates on every frame it changes.
///
/// # Examples
/// ```ignore
/// let slider = Slider::new(
///     Rectangle::new(Point::new(60, 130), Size::new(200, 20)),
///     0,
///     255,
///     128,
/// )?
/// .with_label("Color Value");
/// ```
pub struct Slider {
    bounds: Rectangle,
    min_val: i32,
    max_val: i32,
    value: i32,
    callback: Option<ValueCallback>,
    label: heapless::String<32>,
    scale: f32,
    show_tooltip_on_drag: bool,
    dragging: bool,
    track_color: ColorSpec,
    progress_color: ColorSpec,
    handle_color: ColorSpec,
    handle_border_color: ColorSpec,
    handle_pressed_color: ColorSpec,
    label_color: ColorSpec,
    tooltip_bg_color: ColorSpec,
    tooltip_text_color: ColorSpec,
}

impl Slider {
    /// Create a slider; fails unless `min_val < max_val` and
    /// `min_val <= default_val <= max_val`.
    pub fn new(
        bounds: Rectangle,
        min_val: i32,
        max_val: i32,
        default_val: i32,
    ) -> ConfigResult<Self> {
        if min_val >= max_val {
            return Err(ConfigError::InvalidSliderRange {
                min: min_val,
                max: max_val,
            });
        }
        if !(min_val..=max_val).contains(&default_val) {
            return Err(ConfigError::DefaultOutOfRange {
                value: default_val,
                min: min_val,
                max: max_val,
            });
        }

        Ok(Self {
            bounds,
            min_val,
            max_val,
            value: default_val,
            callback: None,
            label: heapless::String::new(),
            scale: 1.0,
            show_tooltip_on_drag: true,
            dragging: false,
            track_color: TRACK,
            progress_color: ACCENT,
            handle_color: WHITE,
            handle_border_color: MUTED,
            handle_pressed_color: HANDLE_PRESSED,
            label_color: OUTLINE,
            tooltip_bg_color: BLACK,
            tooltip_text_color: WHITE,
        })
    }

    /// Uniform multiplier for handle, track, text and padding sizes.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = text::label(label);
        self
    }

    pub fn with_tooltip(mut self, show_on_drag: bool) -> Self {
        self.show_tooltip_on_drag = show_on_drag;
        self
    }

    pub fn with_track_colors(mut self, track: ColorSpec, progress: ColorSpec) -> Self {
        self.track_color = track;
        self.progress_color = progress;
        self
    }

    pub fn with_handle_colors(
        mut self,
        handle: ColorSpec,
        border: ColorSpec,
        pressed: ColorSpec,
    ) -> Self {
        self.handle_color = handle;
        self.handle_border_color = border;
        self.handle_pressed_color = pressed;
        self
    }

    pub fn with_label_color(mut self, color: ColorSpec) -> Self {
        self.label_color = color;
        self
    }

    pub fn with_tooltip_colors(mut self, background: ColorSpec, text: ColorSpec) -> Self {
        self.tooltip_bg_color = background;
        self.tooltip_text_color = text;
        self
    }

    pub fn with_callback(mut self, callback: impl FnMut(i32) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_callback(&mut self, callback: impl FnMut(i32) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the value programmatically, clamped into range. Does not invoke
    /// the callback.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min_val, self.max_val);
    }

    pub fn range(&self) -> (i32, i32) {
        (self.min_val, self.max_val)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn scaled(&self, base: f32) -> i32 {
        (base * self.scale) as i32
    }

    fn touch_padding_y(&self) -> i32 {
        self.scaled(BASE_TOUCH_PADDING_Y)
    }

    /// Track rectangle grown vertically by the touch padding.
    pub fn touch_rect(&self) -> Rectangle {
        let pad = self.touch_padding_y();
        Rectangle::new(
            Point::new(self.bounds.top_left.x, self.bounds.top_left.y - pad),
            Size::new(
                self.bounds.size.width,
                (self.bounds.size.height as i32 + 2 * pad).max(0) as u32,
            ),
        )
    }

    /// Value for a contact `offset` pixels into a track `width` pixels wide,
    /// rounded half up.
    fn value_at(&self, offset: i32, width: i32) -> i32 {
        let range = (self.max_val as i64) - (self.min_val as i64);
        let offset = offset.clamp(0, width) as i64;
        let width = width as i64;
        let step = (2 * offset * range + width) / (2 * width);
        (self.min_val as i64 + step).clamp(self.min_val as i64, self.max_val as i64) as i32
    }

    /// Pixel offset of the handle along a track `width` pixels wide.
    fn handle_offset(&self, width: i32) -> i32 {
        let range = (self.max_val as i64) - (self.min_val as i64);
        ((self.value as i64 - self.min_val as i64) * width as i64 / range) as i32
    }
}

impl Drawable for Slider {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, canvas: &mut D) -> Result<(), D::Error> {
        let Rectangle { top_left, size } = self.bounds;
        let track_width = size.width as i32;
        if track_width <= 0 {
            return Ok(());
        }
        let track_center_y = top_left.y + size.height as i32 / 2;
        let handle_x = top_left.x + self.handle_offset(track_width);

        if !self.label.is_empty() {
            let label_scale = BASE_LABEL_SCALE * self.scale;
            let label_size = text::measure(&self.label, label_scale);
            let label_y = top_left.y - label_size.height as i32 - self.scaled(5.0);
            text::draw_text(
                canvas,
                Point::new(top_left.x, label_y),
                &self.label,
                self.label_color,
                label_scale,
            )?;
        }

        let track_height = self.scaled(BASE_TRACK_HEIGHT).max(0) as u32;
        let track_y = track_center_y - track_height as i32 / 2;
        if let Some(style) = self.track_color.fill() {
            Rectangle::new(Point::new(top_left.x, track_y), Size::new(size.width, track_height))
                .into_styled(style)
                .draw(canvas)?;
        }
        let progress_width = handle_x - top_left.x;
        if progress_width > 0
            && let Some(style) = self.progress_color.fill()
        {
            Rectangle::new(
                Point::new(top_left.x, track_y),
                Size::new(progress_width as u32, track_height),
            )
            .into_styled(style)
            .draw(canvas)?;
        }

        let mut radius = self.scaled(BASE_HANDLE_RADIUS);
        if self.dragging {
            radius += self.scaled(BASE_HANDLE_PRESSED_RADIUS_INCREASE);
        }
        let radius = radius.max(0);
        let handle_color = if self.dragging {
            self.handle_pressed_color
        } else {
            self.handle_color
        };
        let border = self.scaled(BASE_HANDLE_BORDER_THICKNESS).clamp(0, radius);
        let center = Point::new(handle_x, track_center_y);
        if border > 0
            && let Some(style) = self.handle_border_color.fill()
        {
            Circle::with_center(center, (2 * radius) as u32 + 1)
                .into_styled(style)
                .draw(canvas)?;
        }
        if let Some(style) = handle_color.fill() {
            Circle::with_center(center, (2 * (radius - border)) as u32 + 1)
                .into_styled(style)
                .draw(canvas)?;
        }

        if self.dragging && self.show_tooltip_on_drag {
            let mut value_text = heapless::String::<12>::new();
            write!(value_text, "{}", self.value).ok();
            let tooltip_scale = BASE_TOOLTIP_SCALE * self.scale;
            let text_size = text::measure(&value_text, tooltip_scale);
            let padding = self.scaled(5.0);
            let box_w = text_size.width as i32 + 2 * padding;
            let box_h = text_size.height as i32 + 2 * padding;
            let box_x = handle_x - box_w / 2;
            let box_y = top_left.y - box_h - self.scaled(10.0);
            if let Some(style) = self.tooltip_bg_color.fill() {
                Rectangle::new(
                    Point::new(box_x, box_y),
                    Size::new(box_w.max(0) as u32, box_h.max(0) as u32),
                )
                .into_styled(style)
                .draw(canvas)?;
            }
            text::draw_text(
                canvas,
                Point::new(box_x + padding, box_y + padding),
                &value_text,
                self.tooltip_text_color,
                tooltip_scale,
            )?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }
}

impl Touchable for Slider {
    type Output = i32;

    fn handle_touch(&mut self, sample: TouchSample, mapper: &CoordinateMapper) -> Option<i32> {
        if self.dragging && !sample.pressed {
            self.dragging = false;
            return None;
        }

        let hit = contains_strict(&mapper.map_rect(self.touch_rect()), sample.to_point());
        if !(sample.pressed && hit) && !self.dragging {
            return None;
        }

        self.dragging = true;
        let track = mapper.map_rect(self.bounds);
        let track_width = track.size.width as i32;
        if track_width <= 0 {
            return None;
        }

        let new_value = self.value_at(sample.x - track.top_left.x, track_width);
        if new_value == self.value {
            return None;
        }

        self.value = new_value;
        debug!("Slider '{}' -> {}", self.label, new_value);
        if let Some(callback) = self.callback.as_mut() {
            callback(new_value);
        }
        Some(new_value)
    }
}
