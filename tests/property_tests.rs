use std::collections::BTreeSet;

use gridgraph::{
    EntityId, PowerGrid, ScriptedSuffix,
    safety::run_safety_checks,
};
use proptest::prelude::*;

const PLANTS: usize = 3;
const HOUSEHOLDS: usize = 5;

#[derive(Clone, Debug)]
enum Op {
    ConnectPlant(usize, usize),
    ConnectHousehold(usize, usize),
    Disconnect(usize, usize),
    Kill(usize),
    Repair(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..HOUSEHOLDS, 0..PLANTS).prop_map(|(h, p)| Op::ConnectPlant(h, p)),
        (0..HOUSEHOLDS, 0..HOUSEHOLDS).prop_map(|(a, b)| Op::ConnectHousehold(a, b)),
        (0..HOUSEHOLDS, 0..PLANTS).prop_map(|(h, p)| Op::Disconnect(h, p)),
        (0..PLANTS).prop_map(Op::Kill),
        (0..PLANTS).prop_map(Op::Repair),
    ]
}

fn seeded_grid() -> (PowerGrid, Vec<String>, Vec<String>) {
    let mut grid = PowerGrid::with_suffix_source(ScriptedSuffix::new([1]));
    let plants = (0..PLANTS)
        .map(|_| grid.create_power_plant().expect("plant"))
        .collect();
    let households = (0..HOUSEHOLDS)
        .map(|_| grid.create_household().expect("household"))
        .collect();
    (grid, plants, households)
}

fn apply(grid: &mut PowerGrid, plants: &[String], households: &[String], op: &Op) {
    // Failures are expected for many generated ops; only the invariants matter.
    let _ = match op {
        Op::ConnectPlant(h, p) => grid.connect_household_to_power_plant(&households[*h], &plants[*p]),
        Op::ConnectHousehold(a, b) => {
            grid.connect_household_to_household(&households[*a], &households[*b])
        }
        Op::Disconnect(h, p) => {
            grid.disconnect_household_from_power_plant(&households[*h], &plants[*p])
        }
        Op::Kill(p) => grid.kill_power_plant(&plants[*p]),
        Op::Repair(p) => grid.repair_power_plant(&plants[*p]),
    };
}

fn edge_set(grid: &PowerGrid) -> BTreeSet<(EntityId, EntityId)> {
    grid.snapshot()
        .nodes
        .into_iter()
        .flat_map(|node| {
            let id = node.id;
            node.neighbors.into_iter().map(move |n| (id.min(n), id.max(n)))
        })
        .collect()
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let (mut grid, plants, households) = seeded_grid();
        for op in &ops {
            apply(&mut grid, &plants, &households, op);
            let report = run_safety_checks(&grid);
            prop_assert!(!report.has_issues(), "{report:?} after {op:?}");
        }
        prop_assert_eq!(grid.node_count(), PLANTS + HOUSEHOLDS);
    }

    #[test]
    fn connect_then_disconnect_is_identity(
        ops in prop::collection::vec(op_strategy(), 0..40),
        h in 0..HOUSEHOLDS,
        p in 0..PLANTS,
    ) {
        let (mut grid, plants, households) = seeded_grid();
        for op in &ops {
            apply(&mut grid, &plants, &households, op);
        }
        let before = edge_set(&grid);
        if grid.connect_household_to_power_plant(&households[h], &plants[p]).is_ok() {
            grid.disconnect_household_from_power_plant(&households[h], &plants[p])
                .expect("disconnect after connect");
        }
        prop_assert_eq!(edge_set(&grid), before);
    }

    #[test]
    fn kill_then_repair_restores_neighbor_set(
        ops in prop::collection::vec(op_strategy(), 0..40),
        p in 0..PLANTS,
    ) {
        let (mut grid, plants, households) = seeded_grid();
        for op in &ops {
            apply(&mut grid, &plants, &households, op);
        }
        let live = EntityId::power_plant(p as u32 + 1);
        prop_assume!(grid.contains(live));
        let before = edge_set(&grid);
        grid.kill_power_plant(&plants[p]).expect("kill");
        grid.repair_power_plant(&plants[p]).expect("repair");
        prop_assert!(grid.contains(live));
        prop_assert_eq!(edge_set(&grid), before);
    }

    #[test]
    fn successful_creations_are_unique(suffixes in prop::collection::vec(1u32..20, 1..40)) {
        let mut grid = PowerGrid::with_suffix_source(ScriptedSuffix::new(suffixes.clone()));
        let mut issued = BTreeSet::new();
        for _ in &suffixes {
            if let Ok(handle) = grid.create_household() {
                prop_assert!(issued.insert(handle));
            }
        }
        prop_assert_eq!(issued.len(), grid.node_count());
    }
}
