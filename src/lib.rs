//! Match Qube (workspace facade crate).
//!
//! Re-exports the workspace crates as `match_qube::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use match_qube_core as core;
pub use match_qube_engine as engine;
pub use match_qube_input as input;
pub use match_qube_term as term;
pub use match_qube_types as types;
