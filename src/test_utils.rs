//! Testing utilities for Homestead
//!
//! Helpers for driving the placement coordinator the way the UI would:
//! select a structure, pick a cell, request a round advance, and let the
//! dispatch system react between steps.

use bevy::ecs::message::MessageReader;
use bevy::ecs::system::SystemState;
use bevy::prelude::*;

use crate::coords::GridPos;
use crate::grid::Grid;
use crate::placement::{PlacementCommitted, PlacementEvent, PlacementPlugin};
use crate::selection::SelectionList;
use crate::structures::StructureKind;

/// Creates a minimal app with the placement engine installed
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(PlacementPlugin);
    app
}

/// Picks `kind` in the placement list and notifies the coordinator
pub fn select_structure(app: &mut App, kind: StructureKind) {
    app.world_mut()
        .resource_mut::<SelectionList>()
        .select(kind);
    app.world_mut().write_message(PlacementEvent::SelectionChanged);
    app.update();
}

/// Selects the grid cell at `pos` and notifies the coordinator
pub fn choose_cell(app: &mut App, pos: GridPos) {
    app.world_mut()
        .resource_mut::<Grid>()
        .select(pos)
        .expect("test cell outside the grid");
    app.world_mut().write_message(PlacementEvent::CellChosen);
    app.update();
}

/// Full placement: select the structure, then pick the cell
pub fn place(app: &mut App, kind: StructureKind, pos: GridPos) {
    select_structure(app, kind);
    choose_cell(app, pos);
}

/// Requests a round advance and lets the coordinator react
pub fn request_round_advance(app: &mut App) {
    app.world_mut()
        .write_message(PlacementEvent::RoundAdvanceRequested);
    app.update();
}

/// Drains all pending commit notifications
pub fn drain_committed(world: &mut World) -> Vec<PlacementCommitted> {
    let mut state: SystemState<MessageReader<PlacementCommitted>> = SystemState::new(world);
    let mut reader = state.get_mut(world);
    let committed = reader.read().copied().collect();
    state.apply(world);
    committed
}
