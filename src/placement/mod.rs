//! The placement-and-exchange coordination engine.
//!
//! UI-originated notifications arrive as [`PlacementEvent`] messages and are
//! handled by a single dispatch system that reacts, then always attempts to
//! commit the pending placement. Turn closes run the import/export gate,
//! impact application and the resource exchange pass.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

pub mod coordinator;
pub mod exchange;
pub mod graph;


pub use coordinator::{CommittedPlacement, PendingPlacement, PlacementCoordinator};
pub use graph::WarehouseGraph;

use crate::coords::GridPos;
use crate::grid::Grid;
use crate::impacts::Impacts;
use crate::inventory::Inventory;
use crate::round::Round;
use crate::selection::SelectionList;
use crate::structures::{Structure, StructureKind};

/// A notification delivered to the placement coordinator. One enum covers
/// every source the coordinator reacts to, so there is no sender-identity
/// branching and no unrecognized-sender case.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementEvent {
    /// The placement list's current item changed
    SelectionChanged,
    /// The user picked a grid cell
    CellChosen,
    /// The round controller wants to close the current round
    RoundAdvanceRequested,
}

/// Written after every committed placement so the grid and the placement
/// list can refresh their selection state.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementCommitted {
    pub position: GridPos,
    pub kind: StructureKind,
}

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlacementEvent>()
            .add_message::<PlacementCommitted>()
            .init_resource::<Grid>()
            .init_resource::<Inventory>()
            .init_resource::<Impacts>()
            .init_resource::<SelectionList>()
            .init_resource::<Round>()
            .init_resource::<PlacementCoordinator>()
            .add_systems(
                Update,
                (dispatch_placement_events, clear_selection_on_commit).chain(),
            );
    }
}

/// Single entry point for all coordinator reactions. Every notification is
/// handled to completion, and every reaction ends with a commit attempt.
pub fn dispatch_placement_events(
    mut events: MessageReader<PlacementEvent>,
    mut coordinator: ResMut<PlacementCoordinator>,
    mut grid: ResMut<Grid>,
    mut inventory: ResMut<Inventory>,
    mut impacts: ResMut<Impacts>,
    mut round: ResMut<Round>,
    selection: Res<SelectionList>,
    mut committed: MessageWriter<PlacementCommitted>,
) {
    for event in events.read() {
        match event {
            PlacementEvent::SelectionChanged => {
                coordinator.set_template(selection.selected_item().map(Structure::of));
            }
            PlacementEvent::CellChosen => {
                coordinator.set_target(grid.selected_coordinates());
            }
            PlacementEvent::RoundAdvanceRequested => {
                coordinator.close_round(&grid, &mut inventory, &mut impacts, &mut round);
            }
        }

        if let Some(commit) = coordinator.try_commit(&mut grid) {
            info!("placed {} at {}", commit.kind, commit.position);
            committed.write(PlacementCommitted {
                position: commit.position,
                kind: commit.kind,
            });
        }
    }
}

/// Grid-side reaction to a commit: the picked cell is no longer pending, so
/// its selection highlight goes away.
pub fn clear_selection_on_commit(
    mut committed: MessageReader<PlacementCommitted>,
    mut grid: ResMut<Grid>,
) {
    if committed.read().last().is_some() {
        grid.clear_selection();
    }
}
