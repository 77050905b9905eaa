use crate::booster::BoosterPhase;
use crate::types::{ColorId, MarkerId, GRID_CELLS, INITIAL_COLOR_COUNT, INITIAL_SPAWN_RATE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerSnapshot {
    pub id: MarkerId,
    pub color: ColorId,
    /// Part of an in-flight match removal.
    pub removing: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoosterSnapshot {
    pub multiplier: u32,
    pub phase: BoosterPhase,
    pub degrees: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub cells: [Option<MarkerSnapshot>; GRID_CELLS],
    pub running: bool,
    pub score: u64,
    pub highscore: u64,
    pub booster: BoosterSnapshot,
    pub color_count: u8,
    pub spawn_rate_ms: u32,
}

impl SessionSnapshot {
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            cells: [None; GRID_CELLS],
            running: false,
            score: 0,
            highscore: 0,
            booster: BoosterSnapshot {
                multiplier: 1,
                phase: BoosterPhase::Idle,
                degrees: 0,
            },
            color_count: INITIAL_COLOR_COUNT,
            spawn_rate_ms: INITIAL_SPAWN_RATE_MS,
        }
    }
}
