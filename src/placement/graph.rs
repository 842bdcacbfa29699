//! The warehouse-to-structure supply graph.
//!
//! Placed structures are identified by their grid coordinate: one structure
//! per cell, so the coordinate is a stable id for as long as the structure
//! exists. The graph maps each placed warehouse's coordinate to the set of
//! structure coordinates currently inside its effect radius, and is
//! maintained incrementally as placements crush and create cells.

use std::collections::{BTreeMap, BTreeSet};

use crate::coords::GridPos;
use crate::grid::Grid;
use crate::structures::EFFECT_RADIUS;

#[derive(Debug, Clone, Default)]
pub struct WarehouseGraph {
    entries: BTreeMap<GridPos, BTreeSet<GridPos>>,
}

impl WarehouseGraph {
    /// Registers a new warehouse with its initial neighbor set.
    /// The warehouse itself is never kept as its own neighbor.
    pub fn register_warehouse(&mut self, warehouse: GridPos, mut neighbors: BTreeSet<GridPos>) {
        neighbors.remove(&warehouse);
        self.entries.insert(warehouse, neighbors);
    }

    /// Drops a warehouse's entry whole. Its neighbor links are forgotten,
    /// not re-homed. Returns false if no entry existed.
    pub fn remove_warehouse(&mut self, warehouse: GridPos) -> bool {
        self.entries.remove(&warehouse).is_some()
    }

    /// Scrubs a plain structure from every warehouse's neighbor set.
    /// A structure may sit in range of several warehouses at once.
    pub fn remove_structure(&mut self, structure: GridPos) {
        for neighbors in self.entries.values_mut() {
            neighbors.remove(&structure);
        }
    }

    /// Links `structure` as a neighbor of `warehouse` if that warehouse is
    /// registered. No-op when asked to link a warehouse to itself.
    pub fn add_neighbor(&mut self, warehouse: GridPos, structure: GridPos) {
        if warehouse == structure {
            return;
        }
        if let Some(neighbors) = self.entries.get_mut(&warehouse) {
            neighbors.insert(structure);
        }
    }

    pub fn contains_warehouse(&self, warehouse: GridPos) -> bool {
        self.entries.contains_key(&warehouse)
    }

    pub fn neighbors_of(&self, warehouse: GridPos) -> Option<&BTreeSet<GridPos>> {
        self.entries.get(&warehouse)
    }

    /// All registered warehouses with their neighbor sets, in coordinate order
    pub fn warehouses(&self) -> impl Iterator<Item = (GridPos, &BTreeSet<GridPos>)> {
        self.entries
            .iter()
            .map(|(warehouse, neighbors)| (*warehouse, neighbors))
    }

    pub fn warehouse_count(&self) -> usize {
        self.entries.len()
    }

    /// Checks the graph/grid consistency invariant: a structure is a
    /// neighbor of a warehouse iff both exist on the grid and their
    /// distance is within the effect radius.
    pub fn is_consistent_with(&self, grid: &Grid) -> bool {
        // Every entry must correspond to a live warehouse, and every link
        // to a live in-range structure.
        for (warehouse, neighbors) in self.warehouses() {
            if !grid.get(warehouse).is_some_and(|s| s.is_warehouse()) {
                return false;
            }
            for &neighbor in neighbors {
                if neighbor == warehouse || grid.get(neighbor).is_none() {
                    return false;
                }
                if grid.distance_between(warehouse, neighbor) > EFFECT_RADIUS {
                    return false;
                }
            }
        }
        // Conversely, every in-range live plain structure must be linked.
        // Warehouse-to-warehouse links depend on placement order (a new
        // warehouse adopts older ones, never the reverse), so only plain
        // structures carry the coverage guarantee.
        for (warehouse, neighbors) in self.warehouses() {
            for (pos, structure) in grid.structures() {
                if pos == warehouse || structure.is_warehouse() {
                    continue;
                }
                if grid.distance_between(warehouse, pos) <= EFFECT_RADIUS
                    && !neighbors.contains(&pos)
                {
                    return false;
                }
            }
        }
        true
    }
}
