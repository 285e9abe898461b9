//! Boolean-contract facade over [`PowerGrid`].
//!
//! Failures are already logged by the grid, so the facade only collapses each
//! `Result` into `true`/`false` (or `Some`/`None` for creation).

use crate::{config::GridConfig, errors::GridGraphError, graph::PowerGrid, ids::SuffixSource};

#[derive(Debug, Default)]
pub struct World {
    grid: PowerGrid,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &GridConfig) -> Result<Self, GridGraphError> {
        Ok(Self {
            grid: PowerGrid::with_config(config)?,
        })
    }

    pub fn with_suffix_source<S: SuffixSource + 'static>(source: S) -> Self {
        Self {
            grid: PowerGrid::with_suffix_source(source),
        }
    }

    pub fn grid(&self) -> &PowerGrid {
        &self.grid
    }

    pub fn into_grid(self) -> PowerGrid {
        self.grid
    }

    pub fn create_power_plant(&mut self) -> Option<String> {
        self.grid.create_power_plant().ok()
    }

    pub fn create_household(&mut self) -> Option<String> {
        self.grid.create_household().ok()
    }

    pub fn connect_household_to_power_plant(&mut self, household: &str, plant: &str) -> bool {
        self.grid
            .connect_household_to_power_plant(household, plant)
            .is_ok()
    }

    pub fn connect_household_to_household(&mut self, first: &str, second: &str) -> bool {
        self.grid
            .connect_household_to_household(first, second)
            .is_ok()
    }

    pub fn disconnect_household_from_power_plant(&mut self, household: &str, plant: &str) -> bool {
        self.grid
            .disconnect_household_from_power_plant(household, plant)
            .is_ok()
    }

    pub fn kill_power_plant(&mut self, plant: &str) -> bool {
        self.grid.kill_power_plant(plant).is_ok()
    }

    pub fn repair_power_plant(&mut self, plant: &str) -> bool {
        self.grid.repair_power_plant(plant).is_ok()
    }

    pub fn household_has_electricity(&self, household: &str) -> bool {
        self.grid
            .household_has_electricity(household)
            .unwrap_or(false)
    }
}

impl From<PowerGrid> for World {
    fn from(grid: PowerGrid) -> Self {
        Self { grid }
    }
}
