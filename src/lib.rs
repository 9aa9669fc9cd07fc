//! # apex-ui
//!
//! A retained-mode UI composition core.
//!
//! A UI is a tree of elements. Each element owns a bag of typed components:
//! plain data, layout and draw behaviors, pointer handlers, and providers that
//! publish ambient values (theme, density, fonts) to their subtree. Three
//! passes walk the tree: layout measures and places, render draws onto a
//! host-supplied [`Canvas`](render::Canvas), and motion input routes pointer
//! events with implicit capture.
//!
//! ## Core Systems
//!
//! - **[`component`]**: Typed, append-only per-element component storage
//! - **[`element`]**: Slotmap-backed element tree, builder and search
//! - **[`provider`]**: Scoped nearest-ancestor context values
//! - **[`layout`]**: Constraint-down/size-up layout pass, padding and alignment
//! - **[`render`]**: Canvas interface and back-to-front render pass
//! - **[`event`]**: Pointer events, hit testing, capture-aware dispatch, clicks
//! - **[`app`]**: Frame driver tying the passes together
//! - **[`widgets`]**: Built-in Button plus Theme, Density and Fonts
//! - **[`testing`]**: Recording canvas and the headless Pilot
//! - **[`geometry`]**: Point, Size, Rect, Spacing primitives
//!
//! ## Example
//!
//! ```
//! use apex_ui::app::{App, AppConfig};
//! use apex_ui::event::{OnClickModel, State};
//! use apex_ui::testing::{FixedTextMeasurer, RecordingCanvas};
//! use apex_ui::widgets::{ButtonModel, Density, Fonts, Theme};
//!
//! let mut app = App::new(AppConfig::default(), |root| {
//!     root.provider(Theme::default())
//!         .provider(Density::default())
//!         .provider(Fonts::new(FixedTextMeasurer::default()));
//!     root.button(ButtonModel::new("Hello"), State::Enabled, |button| {
//!         button.on_click(OnClickModel::new(|id| println!("clicked {id:?}")));
//!     });
//! });
//!
//! let mut canvas = RecordingCanvas::new();
//! app.frame(&mut canvas).unwrap();
//! assert_eq!(canvas.commands().len(), 2);
//! ```

// Foundation
pub mod error;
pub mod geometry;

// Core systems
pub mod component;
pub mod element;
pub mod provider;

// Passes
pub mod event;
pub mod layout;
pub mod render;

// Application
pub mod app;
pub mod widgets;

// Test support
pub mod testing;

pub use element::{ElementId, ElementMut, Tree};
pub use error::{Error, Result};
