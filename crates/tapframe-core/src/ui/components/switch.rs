// src/ui/components/switch.rs
//! Pill-shaped on/off switch

use alloc::boxed::Box;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Rectangle};
use log::debug;

use super::gesture::{DragOutPolicy, PressLatch};
use crate::ui::core::{Drawable, TouchSample, Touchable};
use crate::ui::mapping::{CoordinateMapper, contains_strict};
use crate::ui::styling::{ColorSpec, HANDLE_PRESSED, MUTED, ON_GREEN, WHITE};

const BASE_HEIGHT: f32 = 30.0;
/// 1.9 × the height, truncated
const BASE_WIDTH: f32 = 57.0;
const BASE_HANDLE_PADDING: f32 = 2.0;

/// Callback invoked with the new state of a toggle widget
pub type ToggleCallback = Box<dyn FnMut(bool)>;

/// On/off switch toggled by a tap
///
/// A press inside arms the switch. Sliding off while held keeps the arm, but
/// the toggle only happens if the release lands inside again.
pub struct Switch {
    position: Point,
    scale: f32,
    is_on: bool,
    callback: Option<ToggleCallback>,
    latch: PressLatch,
    on_color: ColorSpec,
    off_color: ColorSpec,
    handle_color: ColorSpec,
    handle_pressed_color: ColorSpec,
    handle_radius_increase: f32,
}

impl Switch {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            scale: 1.0,
            is_on: false,
            callback: None,
            latch: PressLatch::new(),
            on_color: ON_GREEN,
            off_color: MUTED,
            handle_color: WHITE,
            handle_pressed_color: HANDLE_PRESSED,
            handle_radius_increase: 2.0,
        }
    }

    /// Multiply the 57×30 base size.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_state(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    pub fn with_track_colors(mut self, on: ColorSpec, off: ColorSpec) -> Self {
        self.on_color = on;
        self.off_color = off;
        self
    }

    pub fn with_handle_colors(mut self, handle: ColorSpec, pressed: ColorSpec) -> Self {
        self.handle_color = handle;
        self.handle_pressed_color = pressed;
        self
    }

    /// How much the handle grows while pressed, before scaling.
    pub fn with_handle_radius_increase(mut self, increase: f32) -> Self {
        self.handle_radius_increase = increase;
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

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Set the state without invoking the callback.
    pub fn set_on(&mut self, is_on: bool) {
        self.is_on = is_on;
    }

    pub fn is_pressed(&self) -> bool {
        self.latch.is_pressed()
    }

    /// Flip the state and report the new one to the callback.
    pub fn toggle(&mut self) -> bool {
        self.is_on = !self.is_on;
        if let Some(callback) = self.callback.as_mut() {
            callback(self.is_on);
        }
        self.is_on
    }

    fn scaled(&self, base: f32) -> i32 {
        (base * self.scale) as i32
    }
}

impl Drawable for Switch {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, canvas: &mut D) -> Result<(), D::Error> {
        let Rectangle { top_left, size } = self.bounds();
        let (w, h) = (size.width as i32, size.height as i32);
        let center_y = top_left.y + h / 2;
        let radius = h / 2;

        let track = if self.is_on {
            self.on_color
        } else {
            self.off_color
        };
        if let Some(style) = track.fill() {
            let diameter = (2 * radius) as u32 + 1;
            Circle::with_center(Point::new(top_left.x + radius, center_y), diameter)
                .into_styled(style)
                .draw(canvas)?;
            Circle::with_center(Point::new(top_left.x + w - radius, center_y), diameter)
                .into_styled(style)
                .draw(canvas)?;
            Rectangle::new(
                Point::new(top_left.x + radius, top_left.y),
                Size::new((w - 2 * radius).max(0) as u32, size.height),
            )
            .into_styled(style)
            .draw(canvas)?;
        }

        let handle_x = if self.is_on {
            top_left.x + w - radius
        } else {
            top_left.x + radius
        };
        let (handle, grow) = if self.latch.is_pressed() {
            (self.handle_pressed_color, self.scaled(self.handle_radius_increase))
        } else {
            (self.handle_color, 0)
        };
        let handle_radius = (radius - self.scaled(BASE_HANDLE_PADDING) + grow).max(0);
        if let Some(style) = handle.fill() {
            Circle::with_center(Point::new(handle_x, center_y), (2 * handle_radius) as u32 + 1)
                .into_styled(style)
                .draw(canvas)?;
        }

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.position,
            Size::new(
                self.scaled(BASE_WIDTH).max(0) as u32,
                self.scaled(BASE_HEIGHT).max(0) as u32,
            ),
        )
    }
}

impl Touchable for Switch {
    type Output = bool;

    fn handle_touch(&mut self, sample: TouchSample, mapper: &CoordinateMapper) -> Option<bool> {
        let hit = contains_strict(&mapper.map_rect(self.bounds()), sample.to_point());

        if !self.latch.update(sample.pressed, hit, DragOutPolicy::Hold) {
            return None;
        }

        let state = self.toggle();
        debug!("Switch at {:?} -> {}", self.position, state);
        Some(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use embedded_graphics_simulator::SimulatorDisplay;

    use crate::ui::styling::rgb888;

    fn recorded(switch: Switch) -> (Switch, Rc<RefCell<Vec<bool>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (switch.with_callback(move |on| sink.borrow_mut().push(on)), calls)
    }

    #[test]
    fn test_scaled_bounds() {
        let switch = Switch::new(Point::new(40, 160)).with_scale(1.5);
        assert_eq!(
            switch.bounds(),
            Rectangle::new(Point::new(40, 160), Size::new(85, 45))
        );
    }

    #[test]
    fn test_tap_toggles_once() {
        let (mut switch, calls) = recorded(Switch::new(Point::new(40, 50)));
        let mapper = CoordinateMapper::identity();

        switch.handle_touch(TouchSample::pressed(60, 65), &mapper);
        switch.handle_touch(TouchSample::pressed(61, 65), &mapper);
        assert_eq!(switch.handle_touch(TouchSample::released(61, 65), &mapper), Some(true));
        assert!(switch.is_on());

        switch.handle_touch(TouchSample::pressed(60, 65), &mapper);
        assert_eq!(switch.handle_touch(TouchSample::released(60, 65), &mapper), Some(false));
        assert_eq!(*calls.borrow(), [true, false]);
    }

    #[test]
    fn test_jitter_outside_keeps_arm() {
        let (mut switch, calls) = recorded(Switch::new(Point::new(40, 50)));
        let mapper = CoordinateMapper::identity();

        switch.handle_touch(TouchSample::pressed(60, 65), &mapper);
        switch.handle_touch(TouchSample::pressed(120, 65), &mapper);
        assert!(switch.is_pressed());
        switch.handle_touch(TouchSample::released(60, 65), &mapper);
        assert_eq!(*calls.borrow(), [true]);
    }

    #[test]
    fn test_release_outside_does_not_toggle() {
        let (mut switch, calls) = recorded(Switch::new(Point::new(40, 50)));
        let mapper = CoordinateMapper::identity();

        switch.handle_touch(TouchSample::pressed(60, 65), &mapper);
        switch.handle_touch(TouchSample::released(120, 65), &mapper);
        assert!(!switch.is_on());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_draw_reflects_state() {
        let mut switch = Switch::new(Point::new(0, 0));
        let mut canvas = SimulatorDisplay::<Rgb565>::new(Size::new(64, 32));
        // Track body between the two end caps, clear of the handle.
        let probe = Point::new(28, 3);

        switch.draw(&mut canvas).unwrap();
        assert_eq!(canvas.get_pixel(probe), rgb888(100, 100, 100));
        assert_eq!(canvas.get_pixel(Point::new(15, 15)), Rgb565::WHITE);

        switch.set_on(true);
        switch.draw(&mut canvas).unwrap();
        assert_eq!(canvas.get_pixel(probe), rgb888(30, 200, 30));
        assert_eq!(canvas.get_pixel(Point::new(42, 15)), Rgb565::WHITE);
    }
}
