//! Orthographic picking for a camera looking straight down one axis.

use match_qube_core::grid::position_to_index;
use match_qube_core::{Grid, Hits, Picker};

use crate::types::{Axis, Pointer, Position};

/// Which axis the camera looks down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    /// From z = +1 along -z. Screen right is +x, up is +y.
    #[default]
    Front,
    /// From x = +1 along -x. Screen right is -z, up is +y.
    Side,
    /// From y = +1 along -y. Screen right is +x, up is -z.
    Top,
}

impl Facing {
    pub const ALL: [Facing; 3] = [Facing::Front, Facing::Side, Facing::Top];

    pub fn next(self) -> Self {
        match self {
            Facing::Front => Facing::Side,
            Facing::Side => Facing::Top,
            Facing::Top => Facing::Front,
        }
    }

    /// The axis running away from the camera.
    pub fn depth_axis(self) -> Axis {
        match self {
            Facing::Front => Axis::Z,
            Facing::Side => Axis::X,
            Facing::Top => Axis::Y,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::Front => "front",
            Facing::Side => "side",
            Facing::Top => "top",
        }
    }

    /// Cell indices behind screen column `(u, v)`, nearest first.
    ///
    /// `u` grows to the right and `v` upwards, both in `-1..=1`.
    pub fn column(self, u: i8, v: i8) -> Option<[usize; 3]> {
        let mut out = [0usize; 3];
        for (slot, depth) in out.iter_mut().zip([1i8, 0, -1]) {
            let pos = match self {
                Facing::Front => Position::new(u, v, depth),
                Facing::Side => Position::new(depth, v, -u),
                Facing::Top => Position::new(u, depth, -v),
            };
            *slot = position_to_index(pos).ok()?;
        }
        Some(out)
    }
}

/// Map one NDC component onto a grid coordinate by thirds.
pub fn ndc_to_coord(value: f32) -> Option<i8> {
    if !(-1.0..=1.0).contains(&value) {
        return None;
    }
    let third = 1.0 / 3.0;
    Some(if value < -third {
        -1
    } else if value > third {
        1
    } else {
        0
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrthoPicker {
    facing: Facing,
}

impl OrthoPicker {
    pub fn new(facing: Facing) -> Self {
        Self { facing }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }
}

impl Picker for OrthoPicker {
    fn pick(&self, pointer: Pointer, grid: &Grid) -> Hits {
        let mut hits = Hits::new();
        let (Some(u), Some(v)) = (ndc_to_coord(pointer.x), ndc_to_coord(pointer.y)) else {
            return hits;
        };
        let Some(column) = self.facing.column(u, v) else {
            return hits;
        };
        for index in column {
            if let Some(marker) = grid.get(index) {
                hits.push(marker.id);
            }
        }
        hits
    }
}
