use std::{fmt, result};

use ahash::AHashSet;
use serde::Serialize;

use crate::{
    graph::PowerGrid,
    ids::{EntityId, EntityKind},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SafetyReport {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub asymmetric_edges: usize,
    pub dangling_edges: usize,
    pub duplicate_edges: usize,
    pub self_loops: usize,
    pub coexisting_plants: usize,
}

impl SafetyReport {
    pub fn merge(&mut self, other: &SafetyReport) {
        self.total_nodes = self.total_nodes.max(other.total_nodes);
        self.total_edges = self.total_edges.max(other.total_edges);
        self.asymmetric_edges += other.asymmetric_edges;
        self.dangling_edges += other.dangling_edges;
        self.duplicate_edges += other.duplicate_edges;
        self.self_loops += other.self_loops;
        self.coexisting_plants += other.coexisting_plants;
    }

    pub fn has_issues(&self) -> bool {
        self.asymmetric_edges > 0
            || self.dangling_edges > 0
            || self.duplicate_edges > 0
            || self.self_loops > 0
            || self.coexisting_plants > 0
    }
}

#[derive(Debug)]
pub struct SafetyError {
    pub report: SafetyReport,
}

impl fmt::Display for SafetyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "grid invariant violations detected")
    }
}

impl std::error::Error for SafetyError {}

/// Counts directed entries whose target exists but does not list the source back.
pub fn validate_symmetry(grid: &PowerGrid) -> SafetyReport {
    let mut report = base_report(grid);
    for (id, neighbors) in grid.iter() {
        report.asymmetric_edges += neighbors
            .iter()
            .filter(|n| {
                grid.neighbors(**n)
                    .is_some_and(|back| !back.contains(id))
            })
            .count();
    }
    report
}

/// Counts entries pointing at identifiers that are not in the store.
pub fn validate_references(grid: &PowerGrid) -> SafetyReport {
    let mut report = base_report(grid);
    for (_, neighbors) in grid.iter() {
        report.dangling_edges += neighbors.iter().filter(|n| !grid.contains(**n)).count();
    }
    report
}

pub fn validate_no_duplicate_edges(grid: &PowerGrid) -> SafetyReport {
    let mut report = base_report(grid);
    for (id, neighbors) in grid.iter() {
        let mut seen = AHashSet::with_capacity(neighbors.len());
        for neighbor in neighbors {
            if neighbor == id {
                report.self_loops += 1;
            } else if !seen.insert(*neighbor) {
                report.duplicate_edges += 1;
            }
        }
    }
    report
}

/// Counts suffixes held by both a live and a killed plant.
pub fn validate_plant_exclusivity(grid: &PowerGrid) -> SafetyReport {
    let mut report = base_report(grid);
    report.coexisting_plants = grid
        .entity_ids(EntityKind::PowerPlant)
        .into_iter()
        .filter(|id| grid.contains(EntityId::killed_power_plant(id.suffix())))
        .count();
    report
}

pub fn run_safety_checks(grid: &PowerGrid) -> SafetyReport {
    let mut report = SafetyReport::default();
    report.merge(&validate_symmetry(grid));
    report.merge(&validate_references(grid));
    report.merge(&validate_no_duplicate_edges(grid));
    report.merge(&validate_plant_exclusivity(grid));
    report
}

pub fn run_strict_safety_checks(grid: &PowerGrid) -> result::Result<(), SafetyError> {
    let report = run_safety_checks(grid);
    if report.has_issues() {
        Err(SafetyError { report })
    } else {
        Ok(())
    }
}

fn base_report(grid: &PowerGrid) -> SafetyReport {
    SafetyReport {
        total_nodes: grid.node_count(),
        total_edges: grid.edge_count(),
        ..SafetyReport::default()
    }
}
