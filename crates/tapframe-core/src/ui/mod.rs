// src/ui/mod.rs
//! tapframe UI system - touch widgets drawn over a live frame buffer
//!
//! This module provides:
//! - Core traits for drawable and touchable widgets, plus the per-frame input bundle
//! - Contain-fit mapping between the logical canvas and the physical display
//! - Design-resolution scaling for layouts authored on a fixed base grid
//! - Widgets (button, slider, switch, checkbox, radio) and their group managers

pub mod components;
pub mod core;
pub mod group;
pub mod mapping;
pub mod resolution;
pub mod styling;

// Re-export commonly used items
pub use components::{
    Button, ButtonCallback, Checkbox, HAlign, RadioCallback, RadioGroup, RadioItem, Slider,
    Switch, ToggleCallback, VAlign, ValueCallback,
};
pub use self::core::{DisplayPanel, Drawable, Frame, TouchSample, TouchSource, Touchable, Widget};
pub use group::{
    ButtonManager, CheckboxManager, GroupEvent, SliderManager, SwitchManager, WidgetGroup,
};
pub use mapping::CoordinateMapper;
pub use resolution::ResolutionAdapter;
pub use styling::ColorSpec;
