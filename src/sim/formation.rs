//! The enemy formation: a rigid rectangular grid of units
//!
//! The grid shape is fixed for the wave's lifetime. Destroyed units leave
//! holes (`None` cells); rows and columns never change. The whole grid
//! marches as one body, so units carry a position but never move on their
//! own. Row 0 is the bottom row.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::WaveTuning;

/// A single enemy unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    pub center: Vec2,
    /// Sprite palette index, fixed at layout time
    pub variant: usize,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.center, Vec2::new(ALIEN_WIDTH, ALIEN_HEIGHT))
    }
}

/// Rectangular grid of unit-or-empty cells, row-major from the bottom row up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Alien>>,
}

impl Formation {
    /// Lay out a fresh grid hanging below the ceiling offset.
    ///
    /// The variant index advances every two rows from the bottom, cycling
    /// through the palette. Zero rows or columns is a caller bug.
    pub fn new(tuning: &WaveTuning) -> Self {
        assert!(tuning.rows > 0, "formation needs at least one row");
        assert!(tuning.cols > 0, "formation needs at least one column");

        let bottom_row_y =
            GAME_HEIGHT - tuning.ceiling - (ALIEN_HEIGHT + tuning.v_sep) * (tuning.rows as f32 - 1.0);

        let mut cells = Vec::with_capacity(tuning.rows * tuning.cols);
        let mut variant = 0;
        for row in 0..tuning.rows {
            if row > 0 && row % 2 == 0 {
                variant += 1;
            }
            if variant == ALIEN_VARIANT_COUNT {
                variant = 0;
            }
            let y = bottom_row_y + row as f32 * (tuning.v_sep + ALIEN_HEIGHT);
            for col in 0..tuning.cols {
                let x = tuning.h_sep + col as f32 * (tuning.h_sep + ALIEN_WIDTH);
                cells.push(Some(Alien {
                    center: Vec2::new(x, y),
                    variant,
                }));
            }
        }

        Self {
            rows: tuning.rows,
            cols: tuning.cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Alien> {
        self.cells[row * self.cols + col].as_ref()
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Option<Alien> {
        &mut self.cells[row * self.cols + col]
    }

    /// Iterate live units in row-major order (bottom row first)
    pub fn live_units(&self) -> impl Iterator<Item = &Alien> {
        self.cells.iter().filter_map(|cell| cell.as_ref())
    }

    pub fn live_count(&self) -> usize {
        self.live_units().count()
    }

    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Right edge of the rightmost live unit; 0 when the grid is empty
    pub fn leading_right(&self) -> f32 {
        self.live_units()
            .map(|unit| unit.rect().right())
            .fold(0.0, f32::max)
    }

    /// Left edge of the leftmost live unit; `GAME_WIDTH` when empty
    pub fn leading_left(&self) -> f32 {
        self.live_units()
            .map(|unit| unit.rect().left())
            .fold(GAME_WIDTH, f32::min)
    }

    /// Bottom edge of the lowest live unit; `GAME_HEIGHT` when empty
    pub fn lowest_edge(&self) -> f32 {
        self.live_units()
            .map(|unit| unit.rect().bottom())
            .fold(GAME_HEIGHT, f32::min)
    }

    fn shift(&mut self, delta: Vec2) {
        for unit in self.cells.iter_mut().flatten() {
            unit.center += delta;
        }
    }

    pub fn step_right(&mut self) {
        self.shift(Vec2::new(ALIEN_H_WALK, 0.0));
    }

    pub fn step_left(&mut self) {
        self.shift(Vec2::new(-ALIEN_H_WALK, 0.0));
    }

    pub fn step_down(&mut self) {
        self.shift(Vec2::new(0.0, -ALIEN_V_WALK));
    }

    pub fn column_has_live(&self, col: usize) -> bool {
        (0..self.rows).any(|row| self.cell(row, col).is_some())
    }

    /// Bottommost live unit in a column, if any
    pub fn bottommost_in_column(&self, col: usize) -> Option<&Alien> {
        (0..self.rows).find_map(|row| self.cell(row, col))
    }
}
