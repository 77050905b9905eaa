//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. Views render into
//! a plain framebuffer that a [`TerminalRenderer`] diffs and flushes, so the
//! drawing code stays pure and testable.

pub mod cube_view;
pub mod fb;
pub mod renderer;

pub use match_qube_core as core;
pub use match_qube_engine as engine;
pub use match_qube_types as types;

pub use cube_view::{CubeLayout, CubeView, Hud, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
