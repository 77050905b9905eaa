//! Picking seam between the host's pointer/camera and the engine.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::types::{MarkerId, Pointer, GRID_CELLS};

/// Markers under the pointer, nearest first.
pub type Hits = ArrayVec<MarkerId, GRID_CELLS>;

/// Resolves a pointer position into the markers it hits.
///
/// Implementations own the camera; the engine only supplies the grid so hits
/// are always drawn from live markers.
pub trait Picker {
    fn pick(&self, pointer: Pointer, grid: &Grid) -> Hits;
}

/// A picker that always reports the same hits.
///
/// Useful for hosts that raycast elsewhere, and for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedPicker {
    hits: Hits,
}

impl FixedPicker {
    pub fn new(hits: &[MarkerId]) -> Self {
        Self {
            hits: hits.iter().copied().take(GRID_CELLS).collect(),
        }
    }
}

impl Picker for FixedPicker {
    fn pick(&self, _pointer: Pointer, grid: &Grid) -> Hits {
        self.hits
            .iter()
            .copied()
            .filter(|id| grid.find(*id).is_some())
            .collect()
    }
}

/// What a resolved pick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    /// Nothing under the pointer.
    Empty,
    /// A single marker: bounce feedback.
    Blocked(MarkerId),
    /// A same-color triple: removal started.
    Matched([MarkerId; 3]),
    /// Any other selection; ignored.
    NoMatch,
}
