//! Homogeneous widget managers
//!
//! A [`WidgetGroup`] owns widgets of a single kind and drives them once per
//! frame: each member handles the frame's touch sample and is then drawn, in
//! insertion order, before the next member runs.

use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::components::{Button, Checkbox, Slider, Switch};
use super::core::{Frame, Widget};

/// A committed interaction reported by a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupEvent<T> {
    /// Insertion index of the widget that committed
    pub index: usize,
    pub value: T,
}

/// Ordered collection of same-kind widgets.
pub struct WidgetGroup<W> {
    widgets: Vec<W>,
}

pub type ButtonManager = WidgetGroup<Button>;
pub type SliderManager = WidgetGroup<Slider>;
pub type SwitchManager = WidgetGroup<Switch>;
pub type CheckboxManager = WidgetGroup<Checkbox>;

impl<W> Default for WidgetGroup<W> {
    fn default() -> Self {
        Self {
            widgets: Vec::new(),
        }
    }
}

impl<W: Widget> WidgetGroup<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a widget and return its index.
    pub fn add(&mut self, widget: W) -> usize {
        self.widgets.push(widget);
        self.widgets.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&W> {
        self.widgets.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut W> {
        self.widgets.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &W> {
        self.widgets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut W> {
        self.widgets.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Feed the frame's touch sample to every widget and draw it.
    ///
    /// All members are processed even after one commits. The first commit in
    /// insertion order is returned.
    pub fn handle_events<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<GroupEvent<W::Output>>, D::Error> {
        let sample = frame.touch();
        let mapper = frame.mapper();
        let mut first = None;

        for (index, widget) in self.widgets.iter_mut().enumerate() {
            if let Some(value) = widget.handle_touch(sample, &mapper)
                && first.is_none()
            {
                first = Some(GroupEvent { index, value });
            }
            widget.draw(frame.canvas())?;
        }

        Ok(first)
    }
}

impl ButtonManager {
    pub fn add_button(&mut self, button: Button) -> usize {
        self.add(button)
    }
}

impl SliderManager {
    pub fn add_slider(&mut self, slider: Slider) -> usize {
        self.add(slider)
    }
}

impl SwitchManager {
    pub fn add_switch(&mut self, switch: Switch) -> usize {
        self.add(switch)
    }
}

impl CheckboxManager {
    pub fn add_checkbox(&mut self, checkbox: Checkbox) -> usize {
        self.add(checkbox)
    }
}
