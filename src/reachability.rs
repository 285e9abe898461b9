//! Energization query.
//!
//! A household is energized when a live plant is a direct neighbor, or a
//! neighbor of one of its household neighbors. Longer household chains do not
//! carry power, and killed plants never count.

use tracing::{info, warn};

use crate::{
    errors::GridGraphError,
    graph::PowerGrid,
    ids::{EntityId, EntityKind},
};

/// How a household receives power, if it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Supply {
    Direct(EntityId),
    ViaHousehold { household: EntityId, plant: EntityId },
}

impl PowerGrid {
    pub fn household_has_electricity(&self, household: &str) -> Result<bool, GridGraphError> {
        let supply = self.household_supply(household)?;
        match supply {
            Some(_) => info!(household, "household has electricity"),
            None => info!(household, "household doesn't have electricity"),
        }
        Ok(supply.is_some())
    }

    /// First supply found: direct plants are checked before household routes.
    pub fn household_supply(&self, household: &str) -> Result<Option<Supply>, GridGraphError> {
        let id = self
            .resolve(EntityKind::Household, household)
            .map_err(|missing| {
                warn!("can't find {missing}");
                GridGraphError::EntityNotFound(vec![missing])
            })?;
        let neighbors = self.neighbors(id).unwrap_or_default();

        if let Some(plant) = first_live_plant(neighbors) {
            return Ok(Some(Supply::Direct(plant)));
        }

        let via = neighbors
            .iter()
            .filter(|n| n.kind() == EntityKind::Household)
            .find_map(|intermediate| {
                let second = self.neighbors(*intermediate).unwrap_or_default();
                first_live_plant(second).map(|plant| Supply::ViaHousehold {
                    household: *intermediate,
                    plant,
                })
            });
        Ok(via)
    }
}

fn first_live_plant(neighbors: &[EntityId]) -> Option<EntityId> {
    neighbors
        .iter()
        .copied()
        .find(|n| n.kind() == EntityKind::PowerPlant)
}
