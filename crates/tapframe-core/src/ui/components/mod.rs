pub mod button;
pub mod checkbox;
pub mod gesture;
pub mod radio;
pub mod slider;
pub mod switch;
pub mod text;

pub use button::{Button, ButtonCallback, HAlign, VAlign};
pub use checkbox::Checkbox;
pub use gesture::{DragOutPolicy, PressLatch};
pub use radio::{RadioCallback, RadioGroup, RadioItem};
pub use slider::{Slider, ValueCallback};
pub use switch::{Switch, ToggleCallback};
