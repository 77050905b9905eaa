//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (match engine, terminal host, benchmarks).
//!
//! # Cube Dimensions
//!
//! The playfield is a 3x3x3 cube of cells:
//!
//! - **Coordinates**: `(x, y, z)` with each component in `-1..=1`
//! - **Linear index**: `(x + 1) + (y + 1) * 3 + (z + 1) * 9`, in `0..27`
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `INITIAL_SPAWN_RATE_MS` | 1000 | Delay between spawns at game start |
//! | `SPAWN_RATE_STEP_MS` | 10 | Spawn delay reduction per successful spawn |
//! | `SPAWN_RATE_FLOOR_MS` | 350 | Fastest spawn delay |
//! | `BOOSTER_SETTLE_MS` | 500 | Armed booster wait before decay |
//! | `BOOSTER_COOLDOWN_MS` | 500 | Wait between multiplier steps |
//! | `APPEAR_MS` | 1000 | Marker scale-up animation |
//! | `BLOCK_MS` | 400 | Single-hit bounce animation |
//! | `EXPLODE_MS` | 250 | Per-marker explode animation |
//!
//! # Examples
//!
//! ```
//! use match_qube_types::{Axis, Position, GRID_CELLS};
//!
//! let pos = Position::new(1, -1, 0);
//! assert_eq!(pos.get(Axis::X), 1);
//! assert_eq!(GRID_CELLS, 27);
//! ```

/// Cells along one edge of the cube.
pub const GRID_EXTENT: usize = 3;

/// Total number of cells in the cube.
pub const GRID_CELLS: usize = GRID_EXTENT * GRID_EXTENT * GRID_EXTENT;

/// Marker palette as 0xRRGGBB, in color id order.
///
/// Red, green, blue, yellow, orange, teal, purple, pink.
pub const PALETTE: [u32; 8] = [
    0xFF3B30, 0x4CD964, 0x007AFF, 0xFFCC00, 0xFF9500, 0x5AC8FA, 0x5856D6, 0xFF2D55,
];

/// Number of colors in the palette.
pub const PALETTE_SIZE: u8 = PALETTE.len() as u8;

/// Upper bound for the active color count (one palette entry is never used).
pub const MAX_COLOR_COUNT: u8 = PALETTE_SIZE - 1;

/// Active color count at game start.
pub const INITIAL_COLOR_COUNT: u8 = 2;

/// Host frame interval (16ms, ~60 FPS)
pub const TICK_MS: u32 = 16;

/// Spawn delay at game start (1000ms)
pub const INITIAL_SPAWN_RATE_MS: u32 = 1000;

/// Spawn delay reduction after each successful spawn (10ms)
pub const SPAWN_RATE_STEP_MS: u32 = 10;

/// Spawn delay never drops below this (350ms)
pub const SPAWN_RATE_FLOOR_MS: u32 = 350;

/// Chance (percent) that a spawn tries the axis-completion heuristic.
pub const HEURISTIC_PERCENT: u32 = 50;

/// Booster gauge increment per update while charging (degrees)
pub const BOOSTER_CHARGE_STEP: u16 = 10;

/// Booster gauge decrement per update while decaying (degrees)
pub const BOOSTER_DECAY_STEP: u16 = 1;

/// Full booster gauge (degrees)
pub const BOOSTER_FULL_DEGREES: u16 = 360;

/// Wall-clock wait between a full gauge and the start of decay (500ms)
pub const BOOSTER_SETTLE_MS: u64 = 500;

/// Wall-clock wait between two multiplier steps (500ms)
pub const BOOSTER_COOLDOWN_MS: u64 = 500;

/// Scores below this never cross a milestone.
pub const MILESTONE_MIN_SCORE: u64 = 100;

/// Marker appear animation (1000ms)
pub const APPEAR_MS: u32 = 1000;

/// Single-hit bounce animation (400ms)
pub const BLOCK_MS: u32 = 400;

/// Explode animation, per marker (250ms)
pub const EXPLODE_MS: u32 = 250;

/// Idle camera rotation period (2500ms)
pub const AUTO_ROTATE_MS: u32 = 2500;

/// Pointer travel (terminal cells) that turns a click into a drag.
pub const POINTER_DRAG_THRESHOLD: u16 = 2;


/// The three cube axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Stride of this axis in the linear cell index.
    ///
    /// # Examples
    ///
    /// ```
    /// use match_qube_types::Axis;
    ///
    /// assert_eq!(Axis::X.stride(), 1);
    /// assert_eq!(Axis::Y.stride(), 3);
    /// assert_eq!(Axis::Z.stride(), 9);
    /// ```
    pub fn stride(&self) -> usize {
        match self {
            Axis::X => 1,
            Axis::Y => 3,
            Axis::Z => 9,
        }
    }

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// A lattice position inside the cube.
///
/// Components are expected in `-1..=1`; the grid validates them when
/// converting to an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`.
    pub fn get(&self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Copy with the component along `axis` replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use match_qube_types::{Axis, Position};
    ///
    /// let p = Position::new(0, 1, -1).with(Axis::Y, -1);
    /// assert_eq!(p, Position::new(0, -1, -1));
    /// ```
    pub fn with(mut self, axis: Axis, value: i8) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    /// Whether every component is in `-1..=1`.
    pub fn in_bounds(&self) -> bool {
        [self.x, self.y, self.z].iter().all(|c| (-1..=1).contains(c))
    }
}

/// Palette index of a marker.
pub type ColorId = u8;

/// Identity of a marker, unique within a session.
///
/// Two markers of the same color are still distinct objects for picking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u32);

/// A pointer position in normalized device coordinates.
///
/// Both components span `-1.0..=1.0`; `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Pointer {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Animations the engine asks the host to play on a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Scale-up after a spawn.
    Appear,
    /// Grow-then-shrink bounce after a single-marker pick.
    Block,
    /// Remove animation, one marker of a match at a time.
    Explode,
}

impl AnimationKind {
    /// Duration of the tween in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        match self {
            AnimationKind::Appear => APPEAR_MS,
            AnimationKind::Block => BLOCK_MS,
            AnimationKind::Explode => EXPLODE_MS,
        }
    }
}

/// Fire-and-forget audio cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Background loop, started with a game.
    Ambient,
    Appear,
    Pop,
    Block,
    /// Game over.
    End,
}

impl Cue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Ambient => "ambient",
            Cue::Appear => "appear",
            Cue::Pop => "pop",
            Cue::Block => "block",
            Cue::End => "end",
        }
    }
}

/// Keyboard-level host commands (pointer picks go through [`Pointer`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAction {
    /// Start a game if none is running.
    Start,
    /// Turn the camera to the next axis.
    CycleFacing,
}
