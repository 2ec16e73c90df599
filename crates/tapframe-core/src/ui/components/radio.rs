// src/ui/components/radio.rs
//! Radio buttons and the group that keeps them mutually exclusive

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Rectangle};
use log::debug;

use super::text;
use crate::ui::core::{Drawable, Frame, TouchSample};
use crate::ui::mapping::{CoordinateMapper, contains_strict};
use crate::ui::styling::{ACCENT, ColorSpec, OUTLINE, WHITE};

const BASE_CIRCLE_RADIUS: f32 = 12.0;
const BASE_TEXT_SCALE: f32 = 1.2;
const BASE_SPACING: f32 = 10.0;
const BASE_CIRCLE_THICKNESS: f32 = 2.0;

/// Callback invoked with the newly selected value
pub type RadioCallback<V> = Box<dyn FnMut(V)>;

/// One option of a [`RadioGroup`].
///
/// An item never changes its own selection; the owning group does.
pub struct RadioItem<V> {
    position: Point,
    label: heapless::String<32>,
    value: V,
    scale: f32,
    is_selected: bool,
    click_armed: bool,
    circle_color: ColorSpec,
    circle_selected_color: ColorSpec,
    dot_color: ColorSpec,
    text_color: ColorSpec,
    circle_thickness: f32,
}

impl<V> RadioItem<V> {
    pub fn new(position: Point, label: &str, value: V) -> Self {
        Self {
            position,
            label: text::label(label),
            value,
            scale: 1.0,
            is_selected: false,
            click_armed: false,
            circle_color: OUTLINE,
            circle_selected_color: ACCENT,
            dot_color: WHITE,
            text_color: OUTLINE,
            circle_thickness: BASE_CIRCLE_THICKNESS,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_circle_colors(mut self, normal: ColorSpec, selected: ColorSpec) -> Self {
        self.circle_color = normal;
        self.circle_selected_color = selected;
        self
    }

    pub fn with_dot_color(mut self, color: ColorSpec) -> Self {
        self.dot_color = color;
        self
    }

    pub fn with_text_color(mut self, color: ColorSpec) -> Self {
        self.text_color = color;
        self
    }

    /// Ring thickness before scaling.
    pub fn with_circle_thickness(mut self, thickness: f32) -> Self {
        self.circle_thickness = thickness;
        self
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn is_armed(&self) -> bool {
        self.click_armed
    }

    fn radius(&self) -> i32 {
        (BASE_CIRCLE_RADIUS * self.scale) as i32
    }
}

impl<V> Drawable for RadioItem<V> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, canvas: &mut D) -> Result<(), D::Error> {
        let radius = self.radius().max(0);
        let center = self.position + Point::new(radius, radius);

        let ring = if self.is_selected {
            self.circle_selected_color
        } else {
            self.circle_color
        };
        let thickness = (self.circle_thickness * self.scale) as u32;
        if let Some(style) = ring.stroke(thickness) {
            Circle::with_center(center, (2 * radius) as u32 + 1)
                .into_styled(style)
                .draw(canvas)?;
        }

        if self.is_selected
            && let Some(style) = self.dot_color.fill()
        {
            let dot_radius = (radius / 2).max(2);
            Circle::with_center(center, (2 * dot_radius) as u32 + 1)
                .into_styled(style)
                .draw(canvas)?;
        }

        let text_scale = BASE_TEXT_SCALE * self.scale;
        let text_size = text::measure(&self.label, text_scale);
        let text_x = self.position.x + 2 * radius + (BASE_SPACING * self.scale) as i32;
        let text_y = center.y - text_size.height as i32 / 2;
        text::draw_text(
            canvas,
            Point::new(text_x, text_y),
            &self.label,
            self.text_color,
            text_scale,
        )?;

        Ok(())
    }

    /// Touch region: the square around the circle.
    fn bounds(&self) -> Rectangle {
        let diameter = (2 * self.radius()).max(0) as u32;
        Rectangle::new(self.position, Size::new(diameter, diameter))
    }
}

/// Mutually exclusive set of [`RadioItem`]s.
///
/// After any change exactly the items whose value equals `selected_value`
/// are marked selected; with distinct values that is one item or none.
pub struct RadioGroup<V> {
    items: Vec<RadioItem<V>>,
    selected_value: Option<V>,
    callback: Option<RadioCallback<V>>,
}

impl<V> RadioGroup<V>
where
    V: PartialEq + Clone + Debug,
{
    pub fn new(default_value: Option<V>) -> Self {
        Self {
            items: Vec::new(),
            selected_value: default_value,
            callback: None,
        }
    }

    pub fn with_callback(mut self, callback: impl FnMut(V) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_callback(&mut self, callback: impl FnMut(V) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }

    /// Append an item; it starts selected if its value is the current one.
    pub fn add_radio(&mut self, mut item: RadioItem<V>) -> usize {
        item.is_selected = self.selected_value.as_ref() == Some(&item.value);
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn selected_value(&self) -> Option<&V> {
        self.selected_value.as_ref()
    }

    pub fn items(&self) -> &[RadioItem<V>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Select `value`. Only an actual change updates the items and invokes
    /// the callback; returns whether it changed.
    pub fn select(&mut self, value: V) -> bool {
        if self.selected_value.as_ref() == Some(&value) {
            return false;
        }

        for item in &mut self.items {
            item.is_selected = item.value == value;
        }
        debug!("Radio selection -> {:?}", value);
        self.selected_value = Some(value.clone());
        if let Some(callback) = self.callback.as_mut() {
            callback(value);
        }
        true
    }

    /// Advance every item's arm/confirm gesture by one frame.
    ///
    /// Returns the new selection if this frame changed it.
    pub fn handle_touch(&mut self, sample: TouchSample, mapper: &CoordinateMapper) -> Option<V> {
        let point = sample.to_point();

        if sample.pressed {
            for item in &mut self.items {
                if !item.click_armed && contains_strict(&mapper.map_rect(item.bounds()), point) {
                    item.click_armed = true;
                }
            }
            return None;
        }

        let mut chosen = None;
        for item in &mut self.items {
            if chosen.is_none()
                && item.click_armed
                && contains_strict(&mapper.map_rect(item.bounds()), point)
            {
                chosen = Some(item.value.clone());
            }
            item.click_armed = false;
        }

        let value = chosen?;
        self.select(value.clone()).then_some(value)
    }

    pub fn draw<D: DrawTarget<Color = Rgb565>>(&self, canvas: &mut D) -> Result<(), D::Error> {
        for item in &self.items {
            item.draw(canvas)?;
        }
        Ok(())
    }

    /// Handle this frame's touch sample, then draw every item.
    pub fn handle_events<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<V>, D::Error> {
        let mapper = frame.mapper();
        let selected = self.handle_touch(frame.touch(), &mapper);
        self.draw(frame.canvas())?;
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::RefCell;
    use embedded_graphics_simulator::SimulatorDisplay;

    use crate::ui::styling::rgb888;

    fn abc_group() -> (RadioGroup<char>, Rc<RefCell<Vec<char>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let mut group = RadioGroup::new(Some('B')).with_callback(move |v| sink.borrow_mut().push(v));
        group.add_radio(RadioItem::new(Point::new(40, 60), "Option A", 'A'));
        group.add_radio(RadioItem::new(Point::new(40, 110), "Option B", 'B'));
        group.add_radio(RadioItem::new(Point::new(40, 160), "Option C", 'C'));
        (group, calls)
    }

    fn selected(group: &RadioGroup<char>) -> Vec<char> {
        group
            .items()
            .iter()
            .filter(|item| item.is_selected())
            .map(|item| *item.value())
            .collect()
    }

    fn tap(group: &mut RadioGroup<char>, x: i32, y: i32) -> Option<char> {
        let mapper = CoordinateMapper::identity();
        group.handle_touch(TouchSample::pressed(x, y), &mapper);
        group.handle_touch(TouchSample::released(x, y), &mapper)
    }

    #[test]
    fn test_default_selection_on_add() {
        let (group, _) = abc_group();
        assert_eq!(selected(&group), ['B']);
        assert_eq!(group.selected_value(), Some(&'B'));
    }

    #[test]
    fn test_tap_selects_exclusively() {
        let (mut group, calls) = abc_group();

        assert_eq!(tap(&mut group, 52, 172), Some('C'));
        assert_eq!(selected(&group), ['C']);
        assert_eq!(tap(&mut group, 52, 72), Some('A'));
        assert_eq!(selected(&group), ['A']);
        assert_eq!(*calls.borrow(), ['C', 'A']);
    }

    #[test]
    fn test_reselecting_current_is_silent() {
        let (mut group, calls) = abc_group();
        assert_eq!(tap(&mut group, 52, 122), None);
        assert!(!group.select('B'));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_arm_cleared_after_release_anywhere() {
        let (mut group, calls) = abc_group();
        let mapper = CoordinateMapper::identity();

        group.handle_touch(TouchSample::pressed(52, 72), &mapper);
        assert!(group.items()[0].is_armed());
        group.handle_touch(TouchSample::released(52, 172), &mapper);
        assert!(group.items().iter().all(|item| !item.is_armed()));
        assert!(calls.borrow().is_empty());
        assert_eq!(selected(&group), ['B']);
    }

    #[test]
    fn test_unknown_default_selects_none() {
        let mut group = RadioGroup::new(Some('Z'));
        group.add_radio(RadioItem::new(Point::new(0, 0), "A", 'A'));
        group.add_radio(RadioItem::new(Point::new(0, 40), "B", 'B'));
        assert!(selected(&group).is_empty());

        assert!(group.select('B'));
        assert_eq!(selected(&group), ['B']);
        // A value no item carries deselects everything.
        assert!(group.select('Q'));
        assert!(selected(&group).is_empty());
    }

    #[test]
    fn test_at_most_one_selected_under_random_taps() {
        let (mut group, _) = abc_group();
        let points = [(52, 72), (52, 122), (300, 10), (52, 172), (52, 72), (0, 0)];
        for round in 0..4 {
            for &(x, y) in points.iter().skip(round) {
                tap(&mut group, x, y);
                let current = selected(&group);
                assert!(current.len() <= 1);
                assert_eq!(current.first(), group.selected_value());
            }
        }
    }

    #[test]
    fn test_handle_events_draws_selection() {
        let (mut group, _) = abc_group();
        let mut canvas = SimulatorDisplay::<Rgb565>::new(Size::new(320, 240));
        let mut frame = Frame::new(&mut canvas, TouchSample::released(0, 0), Size::new(320, 240));
        assert_eq!(group.handle_events(&mut frame).unwrap(), None);

        // Centers at x=52; the selected B shows a white dot, A an empty ring.
        assert_eq!(canvas.get_pixel(Point::new(52, 122)), Rgb565::WHITE);
        assert_eq!(canvas.get_pixel(Point::new(52, 72)), Rgb565::BLACK);
        assert_eq!(canvas.get_pixel(Point::new(52, 161)), rgb888(200, 200, 200));
    }
}
