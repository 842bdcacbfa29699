//! Placement arbitration and turn-close bookkeeping.

use bevy::prelude::*;
use std::collections::BTreeSet;

use crate::coords::GridPos;
use crate::grid::Grid;
use crate::impacts::Impacts;
use crate::inventory::Inventory;
use crate::round::Round;
use crate::structures::{EFFECT_RADIUS, Structure, StructureKind};

use super::exchange::process_exchanges;
use super::graph::WarehouseGraph;

/// Transient placement intent: what to build and where.
/// Complete (and committable) only when both halves are present.
#[derive(Debug, Clone, Default)]
pub struct PendingPlacement {
    pub template: Option<Structure>,
    pub target: Option<GridPos>,
}

impl PendingPlacement {
    pub fn is_complete(&self) -> bool {
        self.template.is_some() && self.target.is_some()
    }

    pub fn reset(&mut self) {
        self.template = None;
        self.target = None;
    }
}

/// A successfully committed placement, reported back to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedPlacement {
    pub position: GridPos,
    pub kind: StructureKind,
}

/// Owns the pending placement intent, the warehouse supply graph and the
/// per-turn ledger of built structures. All mutation goes through the
/// placement dispatch system; collaborators only read.
#[derive(Resource, Debug, Default)]
pub struct PlacementCoordinator {
    pending: PendingPlacement,
    graph: WarehouseGraph,
    built_this_turn: Vec<Structure>,
}

impl PlacementCoordinator {
    pub fn set_template(&mut self, template: Option<Structure>) {
        self.pending.template = template;
    }

    pub fn set_target(&mut self, target: Option<GridPos>) {
        self.pending.target = target;
    }

    pub fn pending(&self) -> &PendingPlacement {
        &self.pending
    }

    pub fn graph(&self) -> &WarehouseGraph {
        &self.graph
    }

    pub fn built_this_turn(&self) -> &[Structure] {
        &self.built_this_turn
    }

    /// Commits the pending placement if the intent is complete; an
    /// incomplete intent is kept for the next reaction, not an error.
    ///
    /// On commit: the crushed occupant's supply links are cleaned up first,
    /// then the new occupant is linked into the graph, then the grid cell is
    /// overwritten and a snapshot of the template appended to the turn
    /// ledger. The intent is consumed either way once the gate passes.
    pub fn try_commit(&mut self, grid: &mut Grid) -> Option<CommittedPlacement> {
        if !self.pending.is_complete() {
            return None;
        }
        let target = self.pending.target.take()?;
        let template = self.pending.template.take()?;
        self.pending.reset();

        if !grid.contains(target) {
            warn!("placement of {} at {} rejected: outside the grid", template.kind(), target);
            return None;
        }

        self.crush_occupant(grid, target);
        self.link_new_occupant(grid, target, &template);

        let kind = template.kind();
        if let Err(err) = grid.set(target, template.clone()) {
            warn!("placement of {kind} failed: {err}");
            return None;
        }

        // Ledger gets its own snapshot so later grid mutation cannot
        // retroactively change this turn's impact bookkeeping.
        self.built_this_turn.push(template);

        debug_assert!(self.graph.is_consistent_with(grid));
        Some(CommittedPlacement {
            position: target,
            kind,
        })
    }

    /// Runs the turn close: import/export first, and only on success the
    /// impact application, the exchange pass and the ledger flush. On
    /// failure the round is held open and nothing else changes.
    pub fn close_round(
        &mut self,
        grid: &Grid,
        inventory: &mut Inventory,
        impacts: &mut Impacts,
        round: &mut Round,
    ) {
        if !inventory.try_import_export() {
            info!("round {} held open: import/export not balanced", round.current());
            round.hold();
            return;
        }

        for structure in &self.built_this_turn {
            let contribution = structure.impacts();
            impacts.increment_social(contribution.social);
            impacts.increment_economy(contribution.economy);
            impacts.increment_ecology(contribution.ecology);
        }

        process_exchanges(&self.graph, grid, inventory);

        self.pending.reset();
        self.built_this_turn.clear();
        round.advance();
        info!("round closed, now in round {}", round.current());
    }

    /// Cleans up the supply graph for whatever currently occupies `target`.
    /// A crushed warehouse takes its whole entry with it; a crushed plain
    /// structure is scrubbed from every neighbor set.
    fn crush_occupant(&mut self, grid: &Grid, target: GridPos) {
        match grid.get(target) {
            Some(existing) if existing.is_warehouse() => {
                self.graph.remove_warehouse(target);
            }
            Some(_) => {
                self.graph.remove_structure(target);
            }
            None => {}
        }
    }

    /// Links the incoming occupant into the graph before the grid write.
    /// A new warehouse adopts every structure already in range; a new plain
    /// structure joins every warehouse whose radius covers it. Ties at the
    /// radius are in range.
    fn link_new_occupant(&mut self, grid: &Grid, target: GridPos, template: &Structure) {
        if template.is_warehouse() {
            let neighbors: BTreeSet<GridPos> = grid
                .structures()
                .map(|(pos, _)| pos)
                // the cell being overwritten no longer exists once we commit
                .filter(|&pos| pos != target)
                .filter(|&pos| grid.distance_between(target, pos) <= EFFECT_RADIUS)
                .collect();
            self.graph.register_warehouse(target, neighbors);
        } else {
            let in_range: Vec<GridPos> = self
                .graph
                .warehouses()
                .map(|(warehouse, _)| warehouse)
                .filter(|&warehouse| grid.distance_between(target, warehouse) <= EFFECT_RADIUS)
                .collect();
            for warehouse in in_range {
                self.graph.add_neighbor(warehouse, target);
            }
        }
    }
}
