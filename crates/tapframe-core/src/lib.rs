//! Hardware-independent core library for tapframe
//!
//! This crate holds the platform-agnostic parts of the touch widget toolkit:
//! contain-fit coordinate mapping, design-resolution scaling, the widget
//! interaction state machines with their group managers, and the page tree
//! with its navigation manager.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on embedded
//! targets and on desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod pages;
pub mod ui;

pub use config::{ConfigError, ConfigResult, UiConfig};
