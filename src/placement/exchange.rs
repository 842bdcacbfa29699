//! The once-per-turn resource exchange pass.

use bevy::prelude::*;
use std::collections::BTreeSet;

use crate::coords::GridPos;
use crate::grid::Grid;
use crate::inventory::Inventory;

use super::graph::WarehouseGraph;

/// Matches every warehouse neighbor's declared needs against the shared
/// inventory and applies consumption and production.
///
/// Each structure is serviced at most once per pass, first warehouse
/// encountered wins; it is marked processed before its needs are checked,
/// so a second warehouse never retries it. Supply is all-or-nothing: a
/// structure consumes and produces only if every need is coverable at
/// current inventory levels.
pub fn process_exchanges(graph: &WarehouseGraph, grid: &Grid, inventory: &mut Inventory) {
    let mut processed: BTreeSet<GridPos> = BTreeSet::new();

    for (warehouse, neighbors) in graph.warehouses() {
        for &neighbor in neighbors {
            if !processed.insert(neighbor) {
                continue; // serviced under an earlier warehouse
            }
            let Some(structure) = grid.get(neighbor) else {
                continue;
            };

            let supplied = structure
                .needs()
                .iter()
                .all(|&(good, qty)| inventory.has_at_least(good, qty));
            if !supplied {
                debug!(
                    "{} at {} unsupplied this turn (warehouse {})",
                    structure.kind(),
                    neighbor,
                    warehouse
                );
                continue;
            }

            for &(good, qty) in structure.needs() {
                inventory.remove(good, qty);
            }
            for &(good, qty) in structure.production() {
                inventory.add(good, qty);
            }
            debug!(
                "{} at {} supplied via warehouse {}",
                structure.kind(),
                neighbor,
                warehouse
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goods::Good;
    use crate::structures::{Structure, StructureKind};
    use std::collections::BTreeSet;

    fn grid_with(structures: &[((i32, i32), StructureKind)]) -> Grid {
        let mut grid = Grid::new(16, 16);
        for &((x, y), kind) in structures {
            grid.set(GridPos::new(x, y), Structure::of(kind)).unwrap();
        }
        grid
    }

    fn graph_with(entries: &[((i32, i32), &[(i32, i32)])]) -> WarehouseGraph {
        let mut graph = WarehouseGraph::default();
        for &(warehouse, neighbors) in entries {
            let set: BTreeSet<GridPos> = neighbors
                .iter()
                .map(|&(x, y)| GridPos::new(x, y))
                .collect();
            graph.register_warehouse(warehouse.into(), set);
        }
        graph
    }

    #[test]
    fn supplied_structure_consumes_and_produces() {
        let grid = grid_with(&[((0, 0), StructureKind::Warehouse), ((2, 0), StructureKind::Sawmill)]);
        let graph = graph_with(&[((0, 0), &[(2, 0)])]);
        let mut inventory = Inventory::default();
        inventory.add(Good::Wood, 5);

        process_exchanges(&graph, &grid, &mut inventory);

        assert_eq!(inventory.get(Good::Wood), 2);
        assert_eq!(inventory.get(Good::Plank), 1);
    }

    #[test]
    fn unsupplied_structure_changes_nothing() {
        let grid = grid_with(&[((0, 0), StructureKind::Warehouse), ((2, 0), StructureKind::Sawmill)]);
        let graph = graph_with(&[((0, 0), &[(2, 0)])]);
        let mut inventory = Inventory::default();
        inventory.add(Good::Wood, 2); // sawmill needs 3

        process_exchanges(&graph, &grid, &mut inventory);

        assert_eq!(inventory.get(Good::Wood), 2);
        assert_eq!(inventory.get(Good::Plank), 0);
    }

    #[test]
    fn all_or_nothing_across_multiple_needs() {
        // House needs 1 Food and 1 Water; only Food on hand.
        let grid = grid_with(&[((0, 0), StructureKind::Warehouse), ((1, 0), StructureKind::House)]);
        let graph = graph_with(&[((0, 0), &[(1, 0)])]);
        let mut inventory = Inventory::default();
        inventory.add(Good::Food, 4);

        process_exchanges(&graph, &grid, &mut inventory);

        // Nothing consumed: the Water need could not be covered.
        assert_eq!(inventory.get(Good::Food), 4);
    }

    #[test]
    fn overlapping_warehouses_service_once() {
        let grid = grid_with(&[
            ((0, 0), StructureKind::Warehouse),
            ((2, 2), StructureKind::Warehouse),
            ((1, 1), StructureKind::Sawmill),
        ]);
        let graph = graph_with(&[((0, 0), &[(1, 1), (2, 2)]), ((2, 2), &[(1, 1), (0, 0)])]);
        let mut inventory = Inventory::default();
        inventory.add(Good::Wood, 6); // enough for two servicings

        process_exchanges(&graph, &grid, &mut inventory);

        // Serviced exactly once: 6 - 3 wood, + 1 plank.
        assert_eq!(inventory.get(Good::Wood), 3);
        assert_eq!(inventory.get(Good::Plank), 1);
    }

    #[test]
    fn producers_run_without_needs() {
        let grid = grid_with(&[((0, 0), StructureKind::Warehouse), ((0, 2), StructureKind::Well)]);
        let graph = graph_with(&[((0, 0), &[(0, 2)])]);
        let mut inventory = Inventory::default();

        process_exchanges(&graph, &grid, &mut inventory);

        assert_eq!(inventory.get(Good::Water), 2);
    }

    #[test]
    fn stale_neighbor_coordinates_are_skipped() {
        let grid = grid_with(&[((0, 0), StructureKind::Warehouse)]);
        let graph = graph_with(&[((0, 0), &[(1, 0)])]); // nothing at (1, 0)
        let mut inventory = Inventory::default();
        inventory.add(Good::Wood, 3);

        process_exchanges(&graph, &grid, &mut inventory);

        assert_eq!(inventory.get(Good::Wood), 3);
    }

    #[test]
    fn never_underflows_across_many_consumers() {
        // Two sawmills behind one warehouse, wood for only one.
        let grid = grid_with(&[
            ((0, 0), StructureKind::Warehouse),
            ((1, 0), StructureKind::Sawmill),
            ((0, 1), StructureKind::Sawmill),
        ]);
        let graph = graph_with(&[((0, 0), &[(1, 0), (0, 1)])]);
        let mut inventory = Inventory::default();
        inventory.add(Good::Wood, 4);

        process_exchanges(&graph, &grid, &mut inventory);

        // First (coordinate order) sawmill supplied, second gated out.
        assert_eq!(inventory.get(Good::Wood), 1);
        assert_eq!(inventory.get(Good::Plank), 1);
    }
}
