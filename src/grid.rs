//! The 2-D cell store structures are placed on.
//!
//! The grid is a collaborator of the placement coordinator: it owns cell
//! occupancy and the user's currently selected cell, and answers distance
//! queries. It never mutates coordinator state itself.

use bevy::prelude::*;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::constants::{MAP_HEIGHT, MAP_WIDTH};
use crate::coords::GridPos;
use crate::structures::Structure;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("coordinates {pos} are outside the {width}x{height} grid")]
    OutOfBounds {
        pos: GridPos,
        width: i32,
        height: i32,
    },
}

/// Bounded 2-D store of placed structures, plus the current cell selection.
#[derive(Resource, Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: BTreeMap<GridPos, Structure>,
    selected: Option<GridPos>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT)
    }
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: BTreeMap::new(),
            selected: None,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// The structure occupying `pos`, if any
    pub fn get(&self, pos: GridPos) -> Option<&Structure> {
        self.cells.get(&pos)
    }

    /// Places `structure` at `pos`, overwriting any prior occupant.
    pub fn set(&mut self, pos: GridPos, structure: Structure) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        self.cells.insert(pos, structure);
        Ok(())
    }

    /// Clears the cell at `pos`, returning the prior occupant if any.
    pub fn remove(&mut self, pos: GridPos) -> Option<Structure> {
        self.cells.remove(&pos)
    }

    /// All placed structures with their coordinates, in coordinate order
    pub fn structures(&self) -> impl Iterator<Item = (GridPos, &Structure)> {
        self.cells.iter().map(|(pos, structure)| (*pos, structure))
    }

    /// Placed warehouses only
    pub fn warehouses(&self) -> impl Iterator<Item = (GridPos, &Structure)> {
        self.structures()
            .filter(|(_, structure)| structure.is_warehouse())
    }

    /// Integer grid distance between two coordinates (Chebyshev metric:
    /// diagonal steps count as one).
    pub fn distance_between(&self, a: GridPos, b: GridPos) -> u32 {
        let dx = a.x.abs_diff(b.x);
        let dy = a.y.abs_diff(b.y);
        dx.max(dy)
    }

    /// Marks `pos` as the user's currently selected cell.
    pub fn select(&mut self, pos: GridPos) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        self.selected = Some(pos);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_coordinates(&self) -> Option<GridPos> {
        self.selected
    }
}
