//! Pointer input: events, hit testing, capture-aware dispatch, clicks.

pub mod click;
pub mod dispatch;
pub mod pointer;

pub use click::{click_behavior, InternalState, OnClickModel, State};
pub use dispatch::{InputCx, MotionInput, MotionInputComponent, MotionInputPass};
pub use hit_test::HitMap;
pub use pointer::{PointerAction, PointerEvent};
