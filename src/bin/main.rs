//! Headless demo: builds a small settlement and advances a few rounds.

use bevy::prelude::*;

use homestead::coords::GridPos;
use homestead::goods::Good;
use homestead::grid::Grid;
use homestead::impacts::Impacts;
use homestead::inventory::Inventory;
use homestead::placement::PlacementEvent;
use homestead::round::Round;
use homestead::selection::SelectionList;
use homestead::structures::StructureKind;

fn main() {
    let mut app = homestead::headless_app();
    app.add_plugins(bevy::log::LogPlugin::default());

    // Seed the stockpile.
    app.world_mut()
        .resource_mut::<Inventory>()
        .add(Good::Wood, 10);

    // Build a warehouse with a well, a farm and a sawmill in its zone.
    let plan = [
        (StructureKind::Warehouse, GridPos::new(5, 5)),
        (StructureKind::Well, GridPos::new(6, 5)),
        (StructureKind::Farm, GridPos::new(5, 6)),
        (StructureKind::Sawmill, GridPos::new(7, 5)),
    ];
    for (kind, pos) in plan {
        app.world_mut().resource_mut::<SelectionList>().select(kind);
        app.world_mut()
            .write_message(PlacementEvent::SelectionChanged);
        app.update();

        app.world_mut()
            .resource_mut::<Grid>()
            .select(pos)
            .expect("demo plan stays inside the grid");
        app.world_mut().write_message(PlacementEvent::CellChosen);
        app.update();
    }

    for _ in 0..3 {
        app.world_mut()
            .write_message(PlacementEvent::RoundAdvanceRequested);
        app.update();
    }

    let world = app.world();
    let inventory = world.resource::<Inventory>();
    let impacts = world.resource::<Impacts>();
    let round = world.resource::<Round>();
    info!("reached round {}", round.current());
    for good in [Good::Wood, Good::Plank, Good::Water, Good::Grain] {
        info!("{good}: {}", inventory.get(good));
    }
    info!(
        "impacts: social {:.1}, economy {:.1}, ecology {:.1}",
        impacts.social(),
        impacts.economy(),
        impacts.ecology()
    );
}
