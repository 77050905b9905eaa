//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the cube puzzle: the 3x3x3 grid, the
//! booster state machine, scoring with a persisted highscore, and the session
//! that spawns markers and resolves matches. It knows nothing about cameras,
//! tweens or sound; those are reached through [`pick::Picker`] and the
//! [`event::EngineEvent`] stream.
//!
//! # Module Structure
//!
//! - [`grid`]: cell indexing, axis lines and marker occupancy
//! - [`booster`]: multiplier that charges on matches and decays when idle
//! - [`score`]: points, milestones and highscore tracking
//! - [`store`]: highscore persistence
//! - [`session`]: spawning, picking and the sequential removal protocol
//! - [`rng`]: seeded LCG so the same seed replays the same game
//!
//! # Game Rules
//!
//! - Markers spawn into a random free cell, starting at one per second and
//!   speeding up by a fixed step per spawn down to a floor.
//! - Picking straight through three markers of the same color along one axis
//!   explodes them and scores `multiplier` points.
//! - Each match charges the booster; the multiplier falls back to 1 once the
//!   charge has decayed.
//! - Crossing into a new decimal digit of score (from 100 on) adds a color.
//! - The game ends when every cell is occupied.
//!
//! # Example
//!
//! ```
//! use match_qube_core::{FixedPicker, Session};
//!
//! let mut session = Session::with_seed(12345);
//! session.start();
//!
//! let picker = FixedPicker::default();
//! for _ in 0..100 {
//!     session.tick(16, &picker);
//! }
//! assert_eq!(session.grid().occupied(), 1);
//! ```
//!
//! # Timing
//!
//! The host calls [`Session::tick`](session::Session::tick) once per frame
//! with elapsed milliseconds and drives the booster with
//! [`Booster::update`](booster::Booster::update) using a wall clock.

pub mod booster;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod pick;
pub mod rng;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod store;
pub mod timer;

pub use match_qube_types as types;

pub use booster::{Booster, BoosterPhase};
pub use config::EngineConfig;
pub use error::{GridError, StoreError};
pub use event::EngineEvent;
pub use grid::{axis_line, index_to_position, lines, position_to_index, Grid, Marker};
pub use pick::{FixedPicker, Hits, PickOutcome, Picker};
pub use rng::SimpleRng;
pub use score::{crosses_milestone, digit_count, Score, ScoreChange};
pub use session::{Session, SpawnOutcome};
pub use snapshot::{BoosterSnapshot, MarkerSnapshot, SessionSnapshot};
pub use store::{HighscoreStore, JsonFileStore, MemoryStore};
pub use timer::Deadline;
