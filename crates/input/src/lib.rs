//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::HostAction`] and turns
//! mouse press/move/release sequences into clicks, with a helper to convert
//! terminal cells into normalized device coordinates for picking.

pub mod handler;
pub mod map;

pub use match_qube_types as types;

pub use handler::{to_ndc, PointerEvent, PointerTracker, Rect};
pub use map::{handle_key_event, should_quit};
