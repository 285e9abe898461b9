use std::thread;

use gridgraph::{PowerGrid, ScriptedSuffix, SharedGrid, safety::run_safety_checks};

#[test]
fn test_shared_grid_serializes_concurrent_connects() {
    let shared = SharedGrid::new(PowerGrid::with_suffix_source(ScriptedSuffix::new([1])));
    let plant = shared
        .with_mut(|grid| grid.create_power_plant())
        .expect("plant");
    let households: Vec<String> = (0..8)
        .map(|_| {
            shared
                .with_mut(|grid| grid.create_household())
                .expect("household")
        })
        .collect();

    let handles: Vec<_> = households
        .iter()
        .cloned()
        .map(|household| {
            let shared = shared.clone();
            let plant = plant.clone();
            thread::spawn(move || {
                // Repeated attempts on one edge; only the first may succeed.
                (0..4)
                    .filter(|_| {
                        shared
                            .with_mut(|grid| grid.connect_household_to_power_plant(&household, &plant))
                            .is_ok()
                    })
                    .count()
            })
        })
        .collect();
    let wins: usize = handles
        .into_iter()
        .map(|h| h.join().expect("join"))
        .sum();

    assert_eq!(wins, households.len());
    shared.with(|grid| {
        assert_eq!(grid.edge_count(), households.len());
        assert!(!run_safety_checks(grid).has_issues());
        for household in &households {
            assert!(grid.household_has_electricity(household).expect("query"));
        }
    });
}
