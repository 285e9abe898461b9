use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::{
    config::GridConfig,
    errors::{GridGraphError, MissingEntity},
    ids::{EntityId, EntityKind, SuffixSource},
};

/// Serializable view of the store, sorted by key for stable output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridSnapshot {
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeSnapshot {
    pub id: EntityId,
    pub neighbors: Vec<EntityId>,
}

impl GridSnapshot {
    pub fn to_json(&self) -> Result<String, GridGraphError> {
        serde_json::to_string_pretty(self).map_err(|e| GridGraphError::serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, GridGraphError> {
        serde_json::from_str(json).map_err(|e| GridGraphError::serialization(e.to_string()))
    }
}

/// The grid store: every entity mapped to its ordered neighbor list.
///
/// Mutating operations live in [`crate::lifecycle`] and [`crate::connection`];
/// the energization query lives in [`crate::reachability`].
pub struct PowerGrid {
    adjacency: AHashMap<EntityId, Vec<EntityId>>,
    suffixes: Box<dyn SuffixSource>,
}

impl PowerGrid {
    pub fn new() -> Self {
        Self::with_suffix_source(GridConfig::default().suffix_source())
    }

    pub fn with_config(config: &GridConfig) -> Result<Self, GridGraphError> {
        config.validate()?;
        Ok(Self::with_suffix_source(config.suffix_source()))
    }

    pub fn with_suffix_source<S: SuffixSource + 'static>(source: S) -> Self {
        Self {
            adjacency: AHashMap::new(),
            suffixes: Box::new(source),
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn neighbors(&self, id: EntityId) -> Option<&[EntityId]> {
        self.adjacency.get(&id).map(Vec::as_slice)
    }

    /// All identifiers of `kind`, ascending by suffix.
    pub fn entity_ids(&self, kind: EntityKind) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .adjacency
            .keys()
            .filter(|id| id.kind() == kind)
            .copied()
            .collect();
        ids.sort();
        ids
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Undirected edge count; each link is stored on both endpoints.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut nodes: Vec<NodeSnapshot> = self
            .adjacency
            .iter()
            .map(|(id, neighbors)| NodeSnapshot {
                id: *id,
                neighbors: neighbors.clone(),
            })
            .collect();
        nodes.sort_by_key(|node| node.id);
        GridSnapshot { nodes }
    }
}

impl Default for PowerGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PowerGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PowerGrid")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

impl PowerGrid {
    pub(crate) fn next_suffix(&mut self) -> u32 {
        self.suffixes.next_suffix()
    }

    pub(crate) fn resolve(&self, kind: EntityKind, handle: &str) -> Result<EntityId, MissingEntity> {
        EntityId::from_handle(kind, handle)
            .filter(|id| self.adjacency.contains_key(id))
            .ok_or_else(|| MissingEntity {
                kind,
                name: handle.to_string(),
            })
    }

    /// Resolves both endpoints, reporting every side that is missing.
    pub(crate) fn resolve_pair(
        &self,
        (left_kind, left): (EntityKind, &str),
        (right_kind, right): (EntityKind, &str),
    ) -> Result<(EntityId, EntityId), GridGraphError> {
        match (self.resolve(left_kind, left), self.resolve(right_kind, right)) {
            (Ok(a), Ok(b)) => Ok((a, b)),
            (a, b) => {
                let missing = [a.err(), b.err()].into_iter().flatten().collect();
                Err(GridGraphError::EntityNotFound(missing))
            }
        }
    }

    pub(crate) fn is_linked(&self, a: EntityId, b: EntityId) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|neighbors| neighbors.contains(&b))
    }

    pub(crate) fn insert_node(&mut self, id: EntityId, neighbors: Vec<EntityId>) {
        self.adjacency.insert(id, neighbors);
    }

    /// Resolves `handle` and removes its node in one step.
    pub(crate) fn take_resolved(
        &mut self,
        kind: EntityKind,
        handle: &str,
    ) -> Result<(EntityId, Vec<EntityId>), MissingEntity> {
        EntityId::from_handle(kind, handle)
            .and_then(|id| self.adjacency.remove(&id).map(|neighbors| (id, neighbors)))
            .ok_or_else(|| MissingEntity {
                kind,
                name: handle.to_string(),
            })
    }

    /// Appends each endpoint to the other's list.
    pub(crate) fn link(&mut self, a: EntityId, b: EntityId) {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    /// Drops each endpoint from the other's list, keeping the remaining order.
    pub(crate) fn unlink(&mut self, a: EntityId, b: EntityId) {
        if let Some(neighbors) = self.adjacency.get_mut(&a) {
            neighbors.retain(|n| *n != b);
        }
        if let Some(neighbors) = self.adjacency.get_mut(&b) {
            neighbors.retain(|n| *n != a);
        }
    }

    /// Replaces `old` with `new` in `node`'s list by removing it and appending
    /// the new key at the end.
    pub(crate) fn relink_to_end(&mut self, node: EntityId, old: EntityId, new: EntityId) {
        if let Some(neighbors) = self.adjacency.get_mut(&node) {
            neighbors.retain(|n| *n != old);
            neighbors.push(new);
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&EntityId, &Vec<EntityId>)> {
        self.adjacency.iter()
    }
}
