//! Grid addressing and axis line tests

use match_qube::core::grid::{axis_line, index_to_position, lines, position_to_index};
use match_qube::core::{Grid, GridError, Marker};
use match_qube::types::{Axis, MarkerId, Position, GRID_CELLS};

#[test]
fn test_every_index_maps_back() {
    for index in 0..GRID_CELLS {
        let pos = index_to_position(index).unwrap();
        assert!(pos.in_bounds());
        assert_eq!(position_to_index(pos), Ok(index));
    }
}

#[test]
fn test_x_is_fastest_axis() {
    assert_eq!(position_to_index(Position::new(0, -1, -1)), Ok(1));
    assert_eq!(position_to_index(Position::new(-1, 0, -1)), Ok(3));
    assert_eq!(position_to_index(Position::new(-1, -1, 0)), Ok(9));
    assert_eq!(position_to_index(Position::new(0, 0, 0)), Ok(13));
}

#[test]
fn test_out_of_range_is_an_error() {
    let bad = Position::new(0, -2, 0);
    assert_eq!(position_to_index(bad), Err(GridError::InvalidCoordinate(bad)));
    assert_eq!(index_to_position(27), Err(GridError::InvalidIndex(27)));
    assert!(axis_line(GRID_CELLS, Axis::Z).is_err());
}

#[test]
fn test_axis_line_contains_index_and_varies_one_axis() {
    for index in 0..GRID_CELLS {
        let origin = index_to_position(index).unwrap();
        for axis in Axis::ALL {
            let line = axis_line(index, axis).unwrap();
            assert!(line.contains(&index));
            for (i, cell) in line.iter().enumerate() {
                let pos = index_to_position(*cell).unwrap();
                assert_eq!(pos.get(axis), i as i8 - 1);
                assert_eq!(pos.with(axis, origin.get(axis)), origin);
            }
        }
    }
}

#[test]
fn test_lines_partition_the_cube() {
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
fn test_cells_hold_one_marker() {
    let mut grid = Grid::new();
    let a = Marker {
        id: MarkerId(1),
        color: 0,
    };
    let b = Marker {
        id: MarkerId(2),
        color: 1,
    };
    assert!(grid.place(5, a));
    assert!(!grid.place(5, b));
    assert_eq!(grid.get(5), Some(a));
    assert_eq!(grid.find(MarkerId(1)), Some(5));
    assert_eq!(grid.take(5), Some(a));
    assert!(grid.is_free(5));
    assert_eq!(grid.find(MarkerId(1)), None);
}

#[test]
fn test_first_free_wraps_around() {
    let mut grid = Grid::new();
    for index in 20..GRID_CELLS {
        grid.place(
            index,
            Marker {
                id: MarkerId(index as u32),
                color: 0,
            },
        );
    }
    assert_eq!(grid.first_free_from(20), Some(0));
    assert_eq!(grid.first_free_from(3), Some(3));
    assert_eq!(grid.occupied(), 7);
}
