//! Styling for tapframe widgets
//!
//! Colors are flat RGB565 values wrapped in [`ColorSpec`], where
//! [`ColorSpec::Transparent`] suppresses a visual layer entirely.

pub mod colors;

pub use colors::*;
