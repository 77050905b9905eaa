//! Grid module - the 3x3x3 cube of cells
//!
//! Each of the 27 cells holds at most one marker. Cells are stored in a flat
//! array indexed by `(x + 1) + (y + 1) * 3 + (z + 1) * 9`, so the x axis is the
//! fastest-varying one.
//!
//! The grid is purely combinatorial: addressing, axis lines and occupancy.
//! Timing and game rules live in [`crate::session`].

use crate::error::GridError;
use crate::types::{Axis, ColorId, MarkerId, Position, GRID_CELLS, GRID_EXTENT};

/// A colored marker occupying one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub id: MarkerId,
    pub color: ColorId,
}

/// A grid cell: empty or holding one marker.
pub type Cell = Option<Marker>;

/// Convert a position to its linear index.
///
/// # Examples
///
/// ```
/// use match_qube_core::grid::position_to_index;
/// use match_qube_core::types::Position;
///
/// assert_eq!(position_to_index(Position::new(-1, -1, -1)), Ok(0));
/// assert_eq!(position_to_index(Position::new(1, 1, 1)), Ok(26));
/// assert!(position_to_index(Position::new(2, 0, 0)).is_err());
/// ```
pub fn position_to_index(pos: Position) -> Result<usize, GridError> {
    if !pos.in_bounds() {
        return Err(GridError::InvalidCoordinate(pos));
    }
    let offset = |c: i8| (c + 1) as usize;
    Ok(offset(pos.x) + offset(pos.y) * GRID_EXTENT + offset(pos.z) * GRID_EXTENT * GRID_EXTENT)
}

/// Convert a linear index back to its position.
pub fn index_to_position(index: usize) -> Result<Position, GridError> {
    if index >= GRID_CELLS {
        return Err(GridError::InvalidIndex(index));
    }
    Ok(position_of(index))
}

/// The three cells that share `index`'s other two coordinates, ascending along `axis`.
///
/// # Examples
///
/// ```
/// use match_qube_core::grid::axis_line;
/// use match_qube_core::types::Axis;
///
/// assert_eq!(axis_line(13, Axis::X), Ok([12, 13, 14]));
/// assert_eq!(axis_line(13, Axis::Y), Ok([10, 13, 16]));
/// assert_eq!(axis_line(13, Axis::Z), Ok([4, 13, 22]));
/// ```
pub fn axis_line(index: usize, axis: Axis) -> Result<[usize; 3], GridError> {
    if index >= GRID_CELLS {
        return Err(GridError::InvalidIndex(index));
    }
    Ok(line_through(index, axis))
}

/// All 9 lines running along `axis`, each ascending.
pub fn lines(axis: Axis) -> [[usize; 3]; 9] {
    let mut out = [[0usize; 3]; 9];
    let mut n = 0;
    for index in 0..GRID_CELLS {
        if position_of(index).get(axis) == -1 {
            out[n] = line_through(index, axis);
            n += 1;
        }
    }
    out
}

// Callers guarantee `index < GRID_CELLS`.
#[inline(always)]
pub(crate) fn position_of(index: usize) -> Position {
    debug_assert!(index < GRID_CELLS);
    let e = GRID_EXTENT;
    let coord = |v: usize| v as i8 - 1;
    Position::new(coord(index % e), coord((index / e) % e), coord(index / (e * e)))
}

#[inline(always)]
pub(crate) fn line_through(index: usize, axis: Axis) -> [usize; 3] {
    let stride = axis.stride();
    let offset = (position_of(index).get(axis) + 1) as usize;
    let base = index - offset * stride;
    [base, base + stride, base + 2 * stride]
}

/// The cube's cell contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: [Cell; GRID_CELLS],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_CELLS],
        }
    }

    /// Marker at `index`, `None` if empty or out of range
    pub fn get(&self, index: usize) -> Option<Marker> {
        self.cells.get(index).copied().flatten()
    }

    /// Marker at `pos`, `None` if empty or out of range
    pub fn at(&self, pos: Position) -> Option<Marker> {
        position_to_index(pos).ok().and_then(|i| self.get(i))
    }

    /// Check if `index` is a valid, empty cell
    pub fn is_free(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Put a marker into an empty cell.
    ///
    /// Returns false if the index is out of range or the cell is occupied;
    /// occupancy is exclusive, a marker never replaces another.
    pub fn place(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_none() => {
                *cell = Some(marker);
                true
            }
            _ => false,
        }
    }

    /// Remove and return the marker at `index`
    pub fn take(&mut self, index: usize) -> Option<Marker> {
        self.cells.get_mut(index).and_then(Option::take)
    }

    /// Cell index currently holding marker `id`
    pub fn find(&self, id: MarkerId) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| matches!(cell, Some(m) if m.id == id))
    }

    /// First free cell scanning circularly from `start`
    pub fn first_free_from(&self, start: usize) -> Option<usize> {
        (0..GRID_CELLS)
            .map(|step| (start + step) % GRID_CELLS)
            .find(|&index| self.cells[index].is_none())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if every cell holds a marker (game over condition)
    pub fn full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate `(index, marker)` over occupied cells
    pub fn markers(&self) -> impl Iterator<Item = (usize, Marker)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|m| (i, m)))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [None; GRID_CELLS];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(id: u32, color: ColorId) -> Marker {
        Marker {
            id: MarkerId(id),
            color,
        }
    }

    #[test]
    fn test_index_corners() {
        assert_eq!(position_to_index(Position::new(-1, -1, -1)), Ok(0));
        assert_eq!(position_to_index(Position::new(1, -1, -1)), Ok(2));
        assert_eq!(position_to_index(Position::new(-1, 1, -1)), Ok(6));
        assert_eq!(position_to_index(Position::new(-1, -1, 1)), Ok(18));
        assert_eq!(position_to_index(Position::new(0, 0, 0)), Ok(13));
    }

    #[test]
    fn test_invalid_inputs() {
        let bad = Position::new(0, -2, 0);
        assert_eq!(position_to_index(bad), Err(GridError::InvalidCoordinate(bad)));
        assert_eq!(index_to_position(27), Err(GridError::InvalidIndex(27)));
        assert_eq!(axis_line(40, Axis::Z), Err(GridError::InvalidIndex(40)));
    }

    #[test]
    fn test_axis_line_is_same_from_every_member() {
        for axis in Axis::ALL {
            for index in 0..GRID_CELLS {
                let line = line_through(index, axis);
                for member in line {
                    assert_eq!(line_through(member, axis), line);
                }
            }
        }
    }

    #[test]
    fn test_lines_partition_grid() {
        for axis in Axis::ALL {
            let mut seen = [0u8; GRID_CELLS];
            for line in lines(axis) {
                for index in line {
                    seen[index] += 1;
                }
            }
            assert!(seen.iter().all(|&n| n == 1), "axis {}", axis.as_str());
        }
    }

    #[test]
    fn test_place_is_exclusive() {
        let mut grid = Grid::new();
        assert!(grid.place(5, marker(1, 0)));
        assert!(!grid.place(5, marker(2, 1)));
        assert_eq!(grid.get(5), Some(marker(1, 0)));
        assert!(!grid.place(27, marker(3, 0)));
    }

    #[test]
    fn test_take_and_find() {
        let mut grid = Grid::new();
        grid.place(8, marker(4, 2));
        assert_eq!(grid.find(MarkerId(4)), Some(8));
        assert_eq!(grid.take(8), Some(marker(4, 2)));
        assert_eq!(grid.find(MarkerId(4)), None);
        assert!(grid.is_free(8));
        assert_eq!(grid.take(8), None);
    }

    #[test]
    fn test_first_free_wraps() {
        let mut grid = Grid::new();
        for i in 20..GRID_CELLS {
            grid.place(i, marker(i as u32, 0));
        }
        assert_eq!(grid.first_free_from(20), Some(0));
        assert_eq!(grid.first_free_from(3), Some(3));

        for i in 0..20 {
            grid.place(i, marker(100 + i as u32, 0));
        }
        assert!(grid.full());
        assert_eq!(grid.first_free_from(11), None);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new();
        grid.place(0, marker(1, 0));
        grid.place(26, marker(2, 1));
        assert_eq!(grid.occupied(), 2);
        grid.clear();
        assert_eq!(grid.occupied(), 0);
        assert!(!grid.full());
    }
}
