//! Homestead - a turn-based settlement-building simulation.
//!
//! Structures placed on a grid consume and produce typed goods each turn,
//! routed through warehouses that define supply zones. This crate is the
//! headless coordination engine: placement arbitration, warehouse supply
//! graph maintenance and the per-turn resource exchange.

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

pub mod constants;
pub mod coords;
pub mod goods;
pub mod grid;
pub mod impacts;
pub mod inventory;
pub mod placement;
pub mod round;
pub mod selection;
pub mod structures;

/// Plugin group for the headless simulation logic. No rendering or input
/// plumbing; drive it with [`placement::PlacementEvent`] messages.
pub struct LogicPlugins;

impl PluginGroup for LogicPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>().add(placement::PlacementPlugin)
    }
}

/// Builds a minimal headless app with the simulation logic installed.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(LogicPlugins);
    app
}

#[cfg(test)]
pub mod test_utils;
