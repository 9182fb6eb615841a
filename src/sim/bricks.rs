//! Brick grid construction and layout
//!
//! Bricks never store a position. Their rectangle is a pure function of the
//! grid indices and the layout constants, evaluated on every draw and
//! collision pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::brick_color;
use crate::consts::*;

/// Whether a brick can still be hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrickStatus {
    Active,
    Destroyed,
}

/// A single brick cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub status: BrickStatus,
    /// Fixed at level setup
    pub color: [f32; 4],
}

impl Brick {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == BrickStatus::Active
    }
}

/// Brick size and spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
    pub offset_top: f32,
    pub offset_left: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_top: BRICK_OFFSET_TOP,
            offset_left: BRICK_OFFSET_LEFT,
        }
    }
}

impl BrickLayout {
    /// Top-left corner of the cell at `(column, row)`
    #[inline]
    pub fn position(&self, column: u32, row: u32) -> Vec2 {
        Vec2::new(
            column as f32 * (self.width + self.padding) + self.offset_left,
            row as f32 * (self.height + self.padding) + self.offset_top,
        )
    }

    /// Whether `point` lies inside the cell at `(column, row)`, edges included
    pub fn cell_contains(&self, column: u32, row: u32, point: Vec2) -> bool {
        let corner = self.position(column, row);
        crate::point_in_rect(point.x, point.y, corner.x, corner.y, self.width, self.height)
    }
}

/// Grid dimensions `(rows, columns)` for a level
pub fn grid_dimensions(level: u32) -> (u32, u32) {
    (BASE_BRICK_ROWS + level / 2, BASE_BRICK_COLUMNS + level / 3)
}

/// Column-major brick grid, indexed `[column][row]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: u32,
    columns: u32,
    /// `columns` vectors of `rows` bricks each
    cells: Vec<Vec<Brick>>,
    /// Active bricks left, kept in step with `cells`
    remaining: u32,
    pub layout: BrickLayout,
}

impl BrickGrid {
    /// Build a fully active grid tinted for `level`
    pub fn new(rows: u32, columns: u32, level: u32) -> Self {
        let cells = (0..columns)
            .map(|column| {
                (0..rows)
                    .map(|row| Brick {
                        status: BrickStatus::Active,
                        color: brick_color(level, column, row),
                    })
                    .collect()
            })
            .collect();

        Self {
            rows,
            columns,
            cells,
            remaining: rows * columns,
            layout: BrickLayout::default(),
        }
    }

    /// Build the grid for `level` using the level's dimensions
    pub fn for_level(level: u32) -> Self {
        let (rows, columns) = grid_dimensions(level);
        Self::new(rows, columns, level)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Active bricks left
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    pub fn get(&self, column: u32, row: u32) -> Option<&Brick> {
        self.cells.get(column as usize)?.get(row as usize)
    }

    /// Top-left corner of a cell
    #[inline]
    pub fn position(&self, column: u32, row: u32) -> Vec2 {
        self.layout.position(column, row)
    }

    /// Destroy the brick at `(column, row)`.
    ///
    /// Returns false if it was already destroyed or out of range; a brick is
    /// only ever counted once.
    pub fn destroy(&mut self, column: u32, row: u32) -> bool {
        let Some(brick) = self
            .cells
            .get_mut(column as usize)
            .and_then(|c| c.get_mut(row as usize))
        else {
            return false;
        };
        if !brick.is_active() {
            return false;
        }
        brick.status = BrickStatus::Destroyed;
        self.remaining -= 1;
        true
    }

    /// Iterate over active bricks in scan order (column-major) with their indices
    pub fn active(&self) -> impl Iterator<Item = (u32, u32, &Brick)> {
        self.cells.iter().enumerate().flat_map(|(column, bricks)| {
            bricks
                .iter()
                .enumerate()
                .filter(|(_, brick)| brick.is_active())
                .map(move |(row, brick)| (column as u32, row as u32, brick))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(grid_dimensions(1), (5, 10));
        assert_eq!(grid_dimensions(2), (6, 10));
        assert_eq!(grid_dimensions(3), (6, 11));
        assert_eq!(grid_dimensions(6), (8, 12));
    }

    #[test]
    fn test_new_grid_all_active() {
        let grid = BrickGrid::for_level(4);
        let (rows, columns) = grid_dimensions(4);
        assert_eq!(grid.remaining(), rows * columns);
        assert_eq!(grid.active().count() as u32, rows * columns);
        for c in 0..columns {
            for r in 0..rows {
                assert!(grid.get(c, r).is_some_and(Brick::is_active));
            }
        }
        assert!(grid.get(columns, 0).is_none());
    }

    #[test]
    fn test_position_formula() {
        let grid = BrickGrid::for_level(1);
        assert_eq!(grid.position(0, 0), Vec2::new(30.0, 60.0));
        assert_eq!(grid.position(2, 3), Vec2::new(2.0 * 95.0 + 30.0, 3.0 * 40.0 + 60.0));
    }

    #[test]
    fn test_cell_contains_inclusive_edges() {
        let layout = BrickLayout::default();
        assert!(layout.cell_contains(0, 0, Vec2::new(30.0, 60.0)));
        assert!(layout.cell_contains(0, 0, Vec2::new(115.0, 90.0)));
        assert!(!layout.cell_contains(0, 0, Vec2::new(116.0, 70.0)));
        // Padding gap between columns belongs to no cell
        assert!(!layout.cell_contains(1, 0, Vec2::new(120.0, 70.0)));
    }

    #[test]
    fn test_destroy_once() {
        let mut grid = BrickGrid::for_level(1);
        assert!(grid.destroy(3, 2));
        assert_eq!(grid.remaining(), 49);
        assert!(!grid.destroy(3, 2));
        assert_eq!(grid.remaining(), 49);
        assert!(!grid.destroy(99, 0));
        assert_eq!(grid.get(3, 2).map(|b| b.status), Some(BrickStatus::Destroyed));
    }

    proptest! {
        #[test]
        fn prop_dimensions_non_decreasing(level in 1u32..500) {
            let (r0, c0) = grid_dimensions(level);
            let (r1, c1) = grid_dimensions(level + 1);
            prop_assert!(r1 >= r0);
            prop_assert!(c1 >= c0);
            prop_assert_eq!(r0, 5 + level / 2);
            prop_assert_eq!(c0, 10 + level / 3);
        }
    }
}
