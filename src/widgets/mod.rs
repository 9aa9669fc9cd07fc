//! Built-in widgets and the provider values they read.

pub mod button;
pub mod theme;

pub use button::{ButtonModel, ButtonTextState, BUTTON_PADDING};
pub use theme::{Density, Fonts, Theme, ThemeStyle};
