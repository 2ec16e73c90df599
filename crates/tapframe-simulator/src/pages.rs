//! Demo pages: a home screen with one sub-page per widget kind.
//!
//! Every layout coordinate is authored on the 320×240 base grid and scaled
//! through the [`ResolutionAdapter`] at construction time.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::info;

use tapframe_core::ConfigResult;
use tapframe_core::pages::{Navigation, Page, PageRef, PageTree};
use tapframe_core::ui::components::text;
use tapframe_core::ui::styling::{BLACK, WHITE, rgb888};
use tapframe_core::ui::{
    Button, ButtonManager, Checkbox, CheckboxManager, ColorSpec, Frame, GroupEvent, RadioGroup,
    RadioItem, ResolutionAdapter, Slider, SliderManager, Switch, SwitchManager,
};

const RED: ColorSpec = ColorSpec::rgb(200, 30, 30);
const BLUE: ColorSpec = ColorSpec::rgb(0, 120, 220);
const GREEN: ColorSpec = ColorSpec::rgb(30, 200, 30);
const YELLOW: ColorSpec = ColorSpec::rgb(220, 220, 30);
const GRAY: ColorSpec = ColorSpec::rgb(100, 100, 100);
const STATUS_ON: ColorSpec = ColorSpec::rgb(30, 200, 30);
const STATUS_OFF: ColorSpec = ColorSpec::rgb(80, 80, 80);

/// Child page names, in home-button order
const CHILDREN: [&str; 4] = ["switch", "slider", "radio", "checkbox"];

/// Build the demo page tree.
pub fn build_tree(
    adapter: &ResolutionAdapter,
    show_tooltip: bool,
) -> ConfigResult<PageTree<DemoPage>> {
    let pages = [
        DemoPage::Switch(Box::new(SwitchPage::new(adapter))),
        DemoPage::Slider(Box::new(SliderPage::new(adapter, show_tooltip)?)),
        DemoPage::Radio(Box::new(RadioPage::new(adapter))),
        DemoPage::Checkbox(Box::new(CheckboxPage::new(adapter))),
    ];

    let mut tree = PageTree::new("home", DemoPage::Home(Box::new(HomePage::new(adapter))));
    let root = tree.root();
    for (name, page) in CHILDREN.into_iter().zip(pages) {
        tree.add_child(root, name, page)?;
    }
    Ok(tree)
}

// ---------------------------------------------------------------------------
// DemoPage
// ---------------------------------------------------------------------------

/// Every page the demo can show.
pub enum DemoPage {
    Home(Box<HomePage>),
    Switch(Box<SwitchPage>),
    Slider(Box<SliderPage>),
    Radio(Box<RadioPage>),
    Checkbox(Box<CheckboxPage>),
}

impl Page for DemoPage {
    fn on_enter(&mut self) {
        match self {
            DemoPage::Home(page) => page.on_enter(),
            DemoPage::Switch(page) => page.on_enter(),
            DemoPage::Slider(page) => page.on_enter(),
            DemoPage::Radio(page) => page.on_enter(),
            DemoPage::Checkbox(page) => page.on_enter(),
        }
    }

    fn on_exit(&mut self) {
        match self {
            DemoPage::Home(page) => page.on_exit(),
            DemoPage::Switch(page) => page.on_exit(),
            DemoPage::Slider(page) => page.on_exit(),
            DemoPage::Radio(page) => page.on_exit(),
            DemoPage::Checkbox(page) => page.on_exit(),
        }
    }

    fn on_child_enter(&mut self, child: PageRef<'_>) {
        if let DemoPage::Home(page) = self {
            page.on_child_enter(child);
        }
    }

    fn on_child_exit(&mut self, child: PageRef<'_>) {
        if let DemoPage::Home(page) = self {
            page.on_child_exit(child);
        }
    }

    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error> {
        match self {
            DemoPage::Home(page) => page.update(frame),
            DemoPage::Switch(page) => page.update(frame),
            DemoPage::Slider(page) => page.update(frame),
            DemoPage::Radio(page) => page.update(frame),
            DemoPage::Checkbox(page) => page.update(frame),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

/// Title, back arrow and status labels every sub-page draws.
struct Chrome {
    title: &'static str,
    title_pos: Point,
    title_scale: f32,
    back: ButtonManager,
}

impl Chrome {
    fn new(adapter: &ResolutionAdapter, title: &'static str) -> Self {
        let mut back = ButtonManager::new();
        back.add_button(
            Button::new(adapter.scale_rect(0, 0, 30, 30), "<")
                .with_colors(BLACK, ColorSpec::Transparent)
                .with_text_color(WHITE)
                .with_border(ColorSpec::Transparent, 0)
                .with_text_scale(adapter.scale_value(1.0)),
        );
        Self {
            title,
            title_pos: adapter.scale_position(40, 5),
            title_scale: adapter.scale_value(1.5),
            back,
        }
    }

    /// Run the back button and draw the title. Returns the parent request
    /// when the back button was tapped.
    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error> {
        let back = self.back.handle_events(frame)?;
        text::draw_text(frame.canvas(), self.title_pos, self.title, WHITE, self.title_scale)?;
        Ok(back.map(|_| Navigation::ToParent))
    }
}

/// Column of on/off indicators mirroring a widget group.
struct StatusColumn {
    heading: Point,
    scale: f32,
    boxes: [Rectangle; 3],
}

impl StatusColumn {
    fn new(adapter: &ResolutionAdapter, x: i32, rows: [i32; 3]) -> Self {
        Self {
            heading: adapter.scale_position(x, 30),
            scale: adapter.scale_value(1.0),
            boxes: rows.map(|y| adapter.scale_rect(x, y, 30, 20)),
        }
    }

    fn draw<D: DrawTarget<Color = Rgb565>>(
        &self,
        canvas: &mut D,
        states: &[bool; 3],
    ) -> Result<(), D::Error> {
        text::draw_text(canvas, self.heading, "Status", WHITE, self.scale)?;
        for (rect, on) in self.boxes.iter().zip(states) {
            let color = if *on { STATUS_ON } else { STATUS_OFF };
            if let Some(style) = color.fill() {
                rect.into_styled(style).draw(canvas)?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

pub struct HomePage {
    title_pos: Point,
    title_scale: f32,
    buttons: ButtonManager,
}

impl HomePage {
    fn new(adapter: &ResolutionAdapter) -> Self {
        let border = adapter.scale_value(2.0) as u32;
        let mut buttons = ButtonManager::new();
        buttons.add_button(
            Button::new(adapter.scale_rect(30, 30, 120, 80), "Switch")
                .with_colors(ColorSpec::Transparent, ColorSpec::Transparent)
                .with_border(WHITE, border)
                .with_text_color(WHITE)
                .with_text_scale(adapter.scale_value(0.8)),
        );
        buttons.add_button(
            Button::new(adapter.scale_rect(170, 30, 120, 80), "Slider")
                .with_colors(RED, BLUE)
                .with_border(ColorSpec::Transparent, 0)
                .with_text_scale(adapter.scale_value(1.0)),
        );
        buttons.add_button(
            Button::new(adapter.scale_rect(30, 130, 120, 80), "Radio")
                .with_colors(YELLOW, GRAY)
                .with_border(GREEN, border)
                .with_text_scale(adapter.scale_value(1.2)),
        );
        buttons.add_button(
            Button::new(adapter.scale_rect(170, 130, 120, 80), "Checkbox")
                .with_colors(GREEN, GRAY)
                .with_border(YELLOW, border)
                .with_text_scale(adapter.scale_value(1.4)),
        );

        Self {
            title_pos: adapter.scale_position(10, 5),
            title_scale: adapter.scale_value(1.5),
            buttons,
        }
    }
}

impl Page for HomePage {
    fn on_child_enter(&mut self, child: PageRef<'_>) {
        info!("Opening '{}' demo", child.name);
    }

    fn on_child_exit(&mut self, child: PageRef<'_>) {
        info!("Closed '{}' demo", child.name);
    }

    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error> {
        text::draw_text(frame.canvas(), self.title_pos, "UI Demo Home", WHITE, self.title_scale)?;
        let tapped = self.buttons.handle_events(frame)?;
        Ok(tapped
            .and_then(|GroupEvent { index, .. }| CHILDREN.get(index).copied())
            .map(Navigation::child))
    }
}

pub struct SwitchPage {
    chrome: Chrome,
    status: StatusColumn,
    states: [bool; 3],
    switches: SwitchManager,
}

impl SwitchPage {
    const KEYS: [&'static str; 3] = ["small", "medium", "large"];

    fn new(adapter: &ResolutionAdapter) -> Self {
        let states = [false, true, false];
        let mut switches = SwitchManager::new();
        for ((y, scale), on) in [(50, 0.8), (100, 1.0), (160, 1.5)].into_iter().zip(states) {
            switches.add_switch(
                Switch::new(adapter.scale_position(40, y))
                    .with_scale(adapter.scale_value(scale))
                    .with_state(on),
            );
        }
        Self {
            chrome: Chrome::new(adapter, "Switch Demo"),
            status: StatusColumn::new(adapter, 220, [50, 100, 160]),
            states,
            switches,
        }
    }
}

impl Page for SwitchPage {
    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error> {
        let request = self.chrome.update(frame)?;
        self.status.draw(frame.canvas(), &self.states)?;
        self.switches.handle_events(frame)?;
        // Several switches may commit in one frame, so mirror all of them.
        let current = self.switches.iter().map(Switch::is_on);
        for (index, (state, on)) in self.states.iter_mut().zip(current).enumerate() {
            if *state != on {
                *state = on;
                info!("Switch '{}' state: {}", Self::KEYS[index], on);
            }
        }
        Ok(request)
    }
}

pub struct SliderPage {
    chrome: Chrome,
    preview: Rectangle,
    level: i32,
    sliders: SliderManager,
}

impl SliderPage {
    fn new(adapter: &ResolutionAdapter, show_tooltip: bool) -> ConfigResult<Self> {
        let level = 128;
        let mut sliders = SliderManager::new();
        sliders.add_slider(
            Slider::new(adapter.scale_rect(60, 130, 200, 20), 0, 255, level)?
                .with_label("Color Value")
                .with_scale(adapter.scale_value(1.0))
                .with_tooltip(show_tooltip),
        );
        Ok(Self {
            chrome: Chrome::new(adapter, "Slider Demo"),
            preview: adapter.scale_rect(140, 40, 40, 40),
            level,
            sliders,
        })
    }
}

impl Page for SliderPage {
    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error> {
        let request = self.chrome.update(frame)?;

        let grey = u8::try_from(self.level).unwrap_or(u8::MAX);
        self.preview
            .into_styled(PrimitiveStyle::with_fill(rgb888(grey, grey, grey)))
            .draw(frame.canvas())?;

        if let Some(GroupEvent { value, .. }) = self.sliders.handle_events(frame)? {
            self.level = value;
        }
        Ok(request)
    }
}

pub struct RadioPage {
    chrome: Chrome,
    readout_pos: Point,
    readout_scale: f32,
    radios: RadioGroup<char>,
}

impl RadioPage {
    fn new(adapter: &ResolutionAdapter) -> Self {
        let mut radios = RadioGroup::new(Some('B'));
        let options = [(60, "Option A", 'A'), (110, "Option B", 'B'), (160, "Option C", 'C')];
        for (y, label, value) in options {
            radios.add_radio(
                RadioItem::new(adapter.scale_position(40, y), label, value)
                    .with_scale(adapter.scale_value(1.0)),
            );
        }
        Self {
            chrome: Chrome::new(adapter, "Radio Button Demo"),
            readout_pos: adapter.scale_position(200, 110),
            readout_scale: adapter.scale_value(1.0),
            radios,
        }
    }
}

impl Page for RadioPage {
    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error> {
        let request = self.chrome.update(frame)?;

        let mut readout = heapless::String::<16>::new();
        if let Some(choice) = self.radios.selected_value() {
            // 16 bytes always fit "Selected: X".
            let _ = write!(readout, "Selected: {}", choice);
        }
        text::draw_text(frame.canvas(), self.readout_pos, &readout, WHITE, self.readout_scale)?;

        if let Some(choice) = self.radios.handle_events(frame)? {
            info!("Radio choice: {}", choice);
        }
        Ok(request)
    }
}

pub struct CheckboxPage {
    chrome: Chrome,
    status: StatusColumn,
    states: [bool; 3],
    checkboxes: CheckboxManager,
}

impl CheckboxPage {
    const KEYS: [char; 3] = ['A', 'B', 'C'];

    fn new(adapter: &ResolutionAdapter) -> Self {
        let states = [false, true, false];
        let mut checkboxes = CheckboxManager::new();
        let rows = [(50, "Small", 0.8), (100, "Medium", 1.0), (160, "Large", 1.5)];
        for ((y, label, scale), checked) in rows.into_iter().zip(states) {
            checkboxes.add_checkbox(
                Checkbox::new(adapter.scale_position(40, y), label)
                    .with_scale(adapter.scale_value(scale))
                    .with_checked(checked),
            );
        }
        Self {
            chrome: Chrome::new(adapter, "Checkbox Demo"),
            status: StatusColumn::new(adapter, 260, [50, 105, 160]),
            states,
            checkboxes,
        }
    }
}

impl Page for CheckboxPage {
    fn update<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        frame: &mut Frame<'_, D>,
    ) -> Result<Option<Navigation>, D::Error> {
        let request = self.chrome.update(frame)?;
        self.status.draw(frame.canvas(), &self.states)?;
        self.checkboxes.handle_events(frame)?;
        let current = self.checkboxes.iter().map(Checkbox::is_checked);
        for (index, (state, checked)) in self.states.iter_mut().zip(current).enumerate() {
            if *state != checked {
                *state = checked;
                info!("Checkbox '{}' state: {}", Self::KEYS[index], checked);
            }
        }
        Ok(request)
    }
}
