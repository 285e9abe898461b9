use tracing::{info, warn};

use crate::{
    errors::GridGraphError,
    graph::PowerGrid,
    ids::{EntityId, EntityKind},
};

impl PowerGrid {
    pub fn connect_household_to_power_plant(
        &mut self,
        household: &str,
        plant: &str,
    ) -> Result<(), GridGraphError> {
        let (household, plant) = self.resolve_logged(
            (EntityKind::Household, household),
            (EntityKind::PowerPlant, plant),
        )?;
        self.connect(household, plant)
    }

    pub fn connect_household_to_household(
        &mut self,
        first: &str,
        second: &str,
    ) -> Result<(), GridGraphError> {
        let (first, second) = self.resolve_logged(
            (EntityKind::Household, first),
            (EntityKind::Household, second),
        )?;
        self.connect(first, second)
    }

    /// Removes a household/plant edge. Household-to-household links are
    /// permanent.
    pub fn disconnect_household_from_power_plant(
        &mut self,
        household: &str,
        plant: &str,
    ) -> Result<(), GridGraphError> {
        let (household, plant) = self.resolve_logged(
            (EntityKind::Household, household),
            (EntityKind::PowerPlant, plant),
        )?;
        if !self.is_linked(plant, household) {
            warn!(%household, %plant, "items already disconnected");
            return Err(GridGraphError::AlreadyDisconnected(household, plant));
        }
        self.unlink(plant, household);
        info!(%household, %plant, "disconnected");
        Ok(())
    }

    fn connect(&mut self, a: EntityId, b: EntityId) -> Result<(), GridGraphError> {
        if a == b {
            warn!(%a, "refusing to connect an entity to itself");
            return Err(GridGraphError::invalid_input(format!(
                "cannot connect {a} to itself"
            )));
        }
        if self.is_linked(a, b) {
            warn!(%a, %b, "already connected");
            return Err(GridGraphError::AlreadyConnected(a, b));
        }
        self.link(a, b);
        info!(%a, %b, "connected");
        Ok(())
    }

    fn resolve_logged(
        &self,
        left: (EntityKind, &str),
        right: (EntityKind, &str),
    ) -> Result<(EntityId, EntityId), GridGraphError> {
        self.resolve_pair(left, right).inspect_err(|err| {
            for missing in err.missing() {
                warn!("can't find {missing}");
            }
        })
    }
}
