//! Headless testing helpers: a recording canvas and the Pilot.
//!
//! Use [`RecordingCanvas`] to capture render output as text for assertions
//! and snapshots, and [`Pilot`] to drive an [`App`](crate::app::App) with
//! synthetic pointer gestures.

pub mod canvas;
pub mod pilot;

pub use canvas::{FixedTextMeasurer, RecordingCanvas};
pub use pilot::Pilot;
