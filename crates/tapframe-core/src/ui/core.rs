// src/ui/core.rs
//! Core UI traits and types for the tapframe UI system

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::mapping::CoordinateMapper;

/// One touch reading, in physical display pixels.
///
/// Exactly one sample is taken per frame. There is a single contact point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchSample {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

impl TouchSample {
    pub const fn new(x: i32, y: i32, pressed: bool) -> Self {
        Self { x, y, pressed }
    }

    /// A contact at `(x, y)`
    pub const fn pressed(x: i32, y: i32) -> Self {
        Self::new(x, y, true)
    }

    /// No contact, last known position `(x, y)`
    pub const fn released(x: i32, y: i32) -> Self {
        Self::new(x, y, false)
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Source of touch samples (touch controller driver, simulator mouse, ...).
pub trait TouchSource {
    /// Read the current contact state. Called once per frame.
    fn read(&mut self) -> TouchSample;
}

/// The physical panel the canvas is presented on.
pub trait DisplayPanel {
    /// Panel resolution in pixels
    fn size(&self) -> Size;
}

impl DisplayPanel for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// Everything a page needs for one frame: the canvas to draw on, the frame's
/// touch sample and the size of the panel the canvas will be shown on.
pub struct Frame<'a, D> {
    canvas: &'a mut D,
    touch: TouchSample,
    display_size: Size,
}

impl<'a, D> Frame<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(canvas: &'a mut D, touch: TouchSample, display_size: Size) -> Self {
        Self {
            canvas,
            touch,
            display_size,
        }
    }

    /// Read one sample from `touch` and bundle it with the canvas.
    pub fn capture<T: TouchSource, P: DisplayPanel>(
        canvas: &'a mut D,
        touch: &mut T,
        panel: &P,
    ) -> Self {
        let sample = touch.read();
        Self::new(canvas, sample, panel.size())
    }

    /// The drawing surface for this frame
    pub fn canvas(&mut self) -> &mut D {
        &mut *self.canvas
    }

    /// This frame's touch sample
    pub fn touch(&self) -> TouchSample {
        self.touch
    }

    /// Logical canvas size
    pub fn canvas_size(&self) -> Size {
        self.canvas.bounding_box().size
    }

    /// Physical display size
    pub fn display_size(&self) -> Size {
        self.display_size
    }

    /// Contain-fit mapping for this frame's canvas and display sizes.
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::contain(self.canvas_size(), self.display_size)
    }
}

/// Trait for any UI element that can be drawn onto the canvas
pub trait Drawable {
    /// Draw the element at its canvas position
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, canvas: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this element in canvas units
    fn bounds(&self) -> Rectangle;
}

/// Trait for UI elements that respond to touch samples
pub trait Touchable {
    /// Value committed by a confirmed interaction
    type Output;

    /// Advance the interaction state machine by one frame.
    ///
    /// `mapper` translates the element's canvas rectangle into display space
    /// so it can be compared with `sample`. Returns the committed value, if
    /// this frame committed one.
    fn handle_touch(&mut self, sample: TouchSample, mapper: &CoordinateMapper)
    -> Option<Self::Output>;
}

/// Combined trait for interactive drawable elements
pub trait Widget: Drawable + Touchable {}

/// Implement Widget for any type that implements both Drawable and Touchable
impl<T: Drawable + Touchable> Widget for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    struct Scripted {
        samples: [TouchSample; 2],
        reads: usize,
    }

    impl TouchSource for Scripted {
        fn read(&mut self) -> TouchSample {
            let sample = self.samples[self.reads % 2];
            self.reads += 1;
            sample
        }
    }

    #[test]
    fn test_capture_reads_once() {
        let mut canvas = SimulatorDisplay::<Rgb565>::new(Size::new(320, 240));
        let mut source = Scripted {
            samples: [TouchSample::pressed(5, 6), TouchSample::released(0, 0)],
            reads: 0,
        };
        let frame = Frame::capture(&mut canvas, &mut source, &Size::new(640, 480));

        assert_eq!(frame.touch(), TouchSample::pressed(5, 6));
        assert_eq!(frame.canvas_size(), Size::new(320, 240));
        assert_eq!(frame.display_size(), Size::new(640, 480));
        assert_eq!(source.reads, 1);
    }

    #[test]
    fn test_frame_mapper_uses_both_sizes() {
        let mut canvas = SimulatorDisplay::<Rgb565>::new(Size::new(320, 240));
        let frame = Frame::new(&mut canvas, TouchSample::default(), Size::new(640, 480));
        let mapped = frame
            .mapper()
            .map_rect(Rectangle::new(Point::new(10, 10), Size::new(20, 20)));
        assert_eq!(mapped, Rectangle::new(Point::new(20, 20), Size::new(40, 40)));
    }
}
