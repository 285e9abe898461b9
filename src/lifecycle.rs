//! Entity creation and the kill/repair renames.
//!
//! Killing a plant moves its neighbor list under the killed key and rewrites
//! every neighbor's edge; repairing moves it back. In both directions the
//! renamed edge is appended at the end of each neighbor's list.

use tracing::{debug, info, warn};

use crate::{
    errors::GridGraphError,
    graph::PowerGrid,
    ids::{EntityId, EntityKind},
};

impl PowerGrid {
    /// Creates an unconnected power plant and returns its bare suffix.
    ///
    /// A suffix already held by a live or killed plant is a hard failure.
    pub fn create_power_plant(&mut self) -> Result<String, GridGraphError> {
        self.create_entity(EntityKind::PowerPlant)
    }

    /// Creates an unconnected household and returns its bare suffix.
    pub fn create_household(&mut self) -> Result<String, GridGraphError> {
        self.create_entity(EntityKind::Household)
    }

    pub fn kill_power_plant(&mut self, plant: &str) -> Result<(), GridGraphError> {
        self.rename_plant(plant, EntityKind::PowerPlant, EntityKind::KilledPowerPlant)?;
        info!(plant, "power plant killed");
        Ok(())
    }

    pub fn repair_power_plant(&mut self, plant: &str) -> Result<(), GridGraphError> {
        self.rename_plant(plant, EntityKind::KilledPowerPlant, EntityKind::PowerPlant)?;
        info!(plant, "power plant repaired");
        Ok(())
    }

    fn create_entity(&mut self, kind: EntityKind) -> Result<String, GridGraphError> {
        let id = EntityId::new(kind, self.next_suffix());
        if let Some(existing) = self.conflicting_entity(id) {
            warn!(%existing, "{} already existed", kind.label());
            return Err(GridGraphError::DuplicateEntity(existing));
        }
        self.insert_node(id, Vec::new());
        info!(%id, "{} created", kind.label());
        Ok(id.handle())
    }

    /// A plant suffix is taken while either its live or its killed form exists.
    fn conflicting_entity(&self, id: EntityId) -> Option<EntityId> {
        let candidates: &[EntityKind] = match id.kind() {
            EntityKind::Household => &[EntityKind::Household],
            EntityKind::PowerPlant | EntityKind::KilledPowerPlant => {
                &[EntityKind::PowerPlant, EntityKind::KilledPowerPlant]
            }
        };
        candidates
            .iter()
            .map(|kind| id.with_kind(*kind))
            .find(|candidate| self.contains(*candidate))
    }

    fn rename_plant(
        &mut self,
        plant: &str,
        from: EntityKind,
        to: EntityKind,
    ) -> Result<(), GridGraphError> {
        let (old, neighbors) = self.take_resolved(from, plant).map_err(|missing| {
            warn!(plant, "can't find {missing}");
            GridGraphError::EntityNotFound(vec![missing])
        })?;
        let new = old.with_kind(to);
        for neighbor in &neighbors {
            debug!(%neighbor, %old, %new, "relinking neighbor");
            self.relink_to_end(*neighbor, old, new);
        }
        self.insert_node(new, neighbors);
        Ok(())
    }
}
