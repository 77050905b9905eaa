//! Host runtime for the match engine.
//!
//! The core crate is pure; this crate supplies the pieces a front end needs
//! around it: an orthographic [`picker`], an [`animator`] that reports tween
//! completions, an [`audio`] seam and the [`host::Game`] that wires them to a
//! [`Session`](match_qube_core::Session) frame by frame.

pub mod animator;
pub mod audio;
pub mod host;
pub mod picker;

pub use match_qube_core as core;
pub use match_qube_types as types;

pub use animator::{Animator, Tween};
pub use audio::{AudioSink, CueRecorder, TracingAudio};
pub use host::{Game, Status};
pub use picker::{ndc_to_coord, Facing, OrthoPicker};
