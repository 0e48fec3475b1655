//! Input subsystem.
//!
//! Nothing here exposes winit types. The runtime translates window events
//! into [`InputEvent`]s, folds them into the live [`InputState`], and takes
//! one [`InputSnapshot`] per frame tick for the application to query.

pub(crate) mod platform;
mod snapshot;
mod state;
mod types;

pub use snapshot::InputSnapshot;
pub use state::InputState;
pub use types::{InputEvent, Key, Modifiers, MouseButton, PointerButtonEvent, PointerMoveEvent, Press};
