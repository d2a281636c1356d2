pub mod animation;
pub mod config;
pub mod differ;
pub mod display;
pub mod glitch;
pub mod render;
pub mod rng;
pub mod slot;
pub mod style;
pub mod surface;
pub mod time_source;
pub mod widget;

pub use config::{ClockConfig, DigitOffset};
pub use render::{AssetStore, ScreenPanel};
pub use slot::{Glyph, Slot};
pub use style::{ClockStyle, StyleSet};
pub use surface::{DrawError, FontId, RenderSurface};
pub use time_source::{Clock, LocalTime, MonotonicClock, TimeSource};
pub use widget::{Button, ClockWidget, Press};

/// Number of screens the clock face spans: four digits plus the colon.
pub const SCREEN_COUNT: usize = 5;
