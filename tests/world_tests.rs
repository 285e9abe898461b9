use gridgraph::{GridConfig, ScriptedSuffix, World};

#[test]
fn test_world_scenario_direct_supply() {
    let mut world = World::new();
    let plant = world.create_power_plant().expect("plant");
    let household = world.create_household().expect("household");
    assert!(world.connect_household_to_power_plant(&household, &plant));
    assert!(world.household_has_electricity(&household));
}

#[test]
fn test_world_failures_return_false() {
    let mut world = World::with_suffix_source(ScriptedSuffix::new([1, 1]));
    let plant = world.create_power_plant().expect("plant");
    assert_eq!(world.create_power_plant(), None);

    assert!(!world.connect_household_to_power_plant("doesNotExist", &plant));
    assert!(!world.connect_household_to_household("doesNotExist", "nope"));
    assert!(!world.disconnect_household_from_power_plant("doesNotExist", &plant));
    assert!(!world.repair_power_plant(&plant));
    assert!(!world.household_has_electricity("doesNotExist"));
    assert!(world.kill_power_plant(&plant));
    assert!(!world.kill_power_plant(&plant));
}

#[test]
fn test_world_kill_repair_scenario() {
    let mut world = World::with_config(&GridConfig::seeded(2024)).expect("world");
    let plant = world.create_power_plant().expect("plant");
    let household = world.create_household().expect("household");
    assert!(world.connect_household_to_power_plant(&household, &plant));
    assert!(world.kill_power_plant(&plant));
    assert!(!world.household_has_electricity(&household));
    assert!(world.repair_power_plant(&plant));
    assert!(world.household_has_electricity(&household));
}

#[test]
fn test_world_disconnect_cuts_power() {
    let mut world = World::with_suffix_source(ScriptedSuffix::new([10]));
    let plant = world.create_power_plant().expect("plant");
    let household = world.create_household().expect("household");
    assert!(!world.disconnect_household_from_power_plant(&household, &plant));
    assert!(world.connect_household_to_power_plant(&household, &plant));
    assert!(!world.connect_household_to_power_plant(&household, &plant));
    assert!(world.disconnect_household_from_power_plant(&household, &plant));
    assert!(!world.household_has_electricity(&household));
    assert_eq!(world.grid().edge_count(), 0);
}

#[test]
fn test_seeded_worlds_issue_the_same_handles() {
    let config = GridConfig::seeded(77);
    let mut a = World::with_config(&config).expect("a");
    let mut b = World::with_config(&config).expect("b");
    assert_eq!(a.create_power_plant(), b.create_power_plant());
    assert_eq!(a.create_household(), b.create_household());
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GridConfig::default().with_max_suffix(0);
    assert!(World::with_config(&config).is_err());
}
