//! Desktop stand-ins for the camera and the touch controller.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorEvent;

use tapframe_core::ui::styling::rgb888;
use tapframe_core::ui::{TouchSample, TouchSource};

// ---------------------------------------------------------------------------
// Touch
// ---------------------------------------------------------------------------

/// Left mouse button as a single-contact touch panel.
///
/// A click that starts and ends between two reads is still reported as one
/// pressed sample, so the release is seen on the following frame.
#[derive(Debug, Default)]
pub struct MouseTouch {
    position: Point,
    held: bool,
    latched: bool,
}

impl MouseTouch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one window event. Non-mouse events are ignored.
    pub fn handle_event(&mut self, event: &SimulatorEvent) {
        match *event {
            SimulatorEvent::MouseButtonDown { point, .. } => self.press(point),
            SimulatorEvent::MouseButtonUp { point, .. } => self.release(point),
            SimulatorEvent::MouseMove { point } => self.position = point,
            _ => {}
        }
    }

    fn press(&mut self, point: Point) {
        self.position = point;
        self.held = true;
        self.latched = true;
    }

    fn release(&mut self, point: Point) {
        self.position = point;
        self.held = false;
    }
}

impl TouchSource for MouseTouch {
    fn read(&mut self) -> TouchSample {
        let pressed = self.held || self.latched;
        self.latched = false;
        TouchSample::new(self.position.x, self.position.y, pressed)
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// Number of vertical bars in the test pattern
const BARS: i32 = 8;

/// Scrolling colour bars standing in for live camera frames.
#[derive(Debug, Default)]
pub struct TestPattern {
    tick: u32,
}

impl TestPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the next frame over the whole canvas.
    pub fn capture<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        canvas: &mut D,
    ) -> Result<(), D::Error> {
        let area = canvas.bounding_box();
        let width = area.size.width as i32;
        let bar_width = (width / BARS).max(1);
        let shift = (self.tick as i32) % width.max(1);

        for bar in 0..=BARS {
            let x = area.top_left.x + bar * bar_width - shift % bar_width;
            let level = ((bar + shift / bar_width) % BARS) as u8;
            // Dim so widgets stay readable on top.
            let color = rgb888(level * 12, 40 + level * 6, 80 - level * 8);
            Rectangle::new(
                Point::new(x, area.top_left.y),
                Size::new(bar_width as u32, area.size.height),
            )
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(canvas)?;
        }

        self.tick = self.tick.wrapping_add(2);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_click_spans_two_reads() {
        let mut touch = MouseTouch::new();
        touch.press(Point::new(10, 20));
        touch.release(Point::new(12, 20));

        assert_eq!(touch.read(), TouchSample::pressed(12, 20));
        assert_eq!(touch.read(), TouchSample::released(12, 20));
    }

    #[test]
    fn test_drag_tracks_position() {
        let mut touch = MouseTouch::new();
        touch.press(Point::zero());
        touch.read();
        touch.handle_event(&SimulatorEvent::MouseMove {
            point: Point::new(40, 5),
        });
        assert_eq!(touch.read(), TouchSample::pressed(40, 5));
    }
}
