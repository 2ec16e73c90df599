//! Desktop simulator for the tapframe widget demo.
//!
//! Draws a scrolling test pattern as the "camera" frame, runs the demo page
//! tree over it and shows the result in an SDL2 window via
//! `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key       | Action                 |
//! |-----------|------------------------|
//! | Backspace | Back (history)         |
//! | H         | Home page              |
//! | Q / Esc   | Quit                   |
//!
//! The left mouse button acts as the touch panel.

mod devices;
mod pages;

use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
};
use log::{error, info};

use tapframe_core::UiConfig;
use tapframe_core::pages::UiManager;
use tapframe_core::ui::{Frame, ResolutionAdapter};

use devices::{MouseTouch, TestPattern};

// ---------------------------------------------------------------------------
// Display constants
// ---------------------------------------------------------------------------

/// Camera frame resolution. The window shows it 1:1.
const CANVAS_SIZE: Size = Size::new(640, 480);

/// Target frame duration (~30 FPS).
const FRAME_DURATION: Duration = Duration::from_millis(33);

fn main() {
    env_logger::init();
    info!("Starting tapframe simulator");
    info!("Canvas: {}×{}", CANVAS_SIZE.width, CANVAS_SIZE.height);
    info!("Keys: Backspace=Back  H=Home  Q=Quit");

    let config = UiConfig::default();
    let adapter = match ResolutionAdapter::from_config(CANVAS_SIZE, &config) {
        Ok(adapter) => adapter,
        Err(e) => {
            error!("Invalid UI config: {}", e);
            return;
        }
    };
    let tree = match pages::build_tree(&adapter, config.show_slider_tooltip) {
        Ok(tree) => tree,
        Err(e) => {
            error!("Failed to build pages: {}", e);
            return;
        }
    };

    let mut manager = UiManager::new();
    manager.set_root_page(tree);

    let mut canvas = SimulatorDisplay::<Rgb565>::new(CANVAS_SIZE);
    let output_settings = OutputSettingsBuilder::new().scale(1).build();
    let mut window = Window::new("tapframe Simulator", &output_settings);

    let mut camera = TestPattern::new();
    let mut touch = MouseTouch::new();
    // The panel and the canvas match, so touch mapping is the identity.
    let panel = CANVAS_SIZE;

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = canvas.clear(Rgb565::BLACK);
    window.update(&canvas);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,

                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Q | Keycode::Escape => break 'running,
                    Keycode::Backspace => {
                        if !manager.go_back() {
                            info!("History is empty");
                        }
                    }
                    Keycode::H => {
                        manager.go_home();
                    }
                    _ => {}
                },

                other => touch.handle_event(&other),
            }
        }

        // --- Frame --------------------------------------------------------
        if let Err(e) = camera.capture(&mut canvas) {
            error!("Camera error: {:?}", e);
        }
        let mut frame = Frame::capture(&mut canvas, &mut touch, &panel);
        if let Err(e) = manager.update(&mut frame) {
            error!("Draw error: {:?}", e);
        }

        window.update(&canvas);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }

    info!("Simulator exiting");
}
