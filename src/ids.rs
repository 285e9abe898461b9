//! Namespaced entity identifiers and the suffix generators that feed them.
//!
//! An identifier is a kind tag plus a numeric suffix. Callers only ever see the
//! bare suffix; the prefixed key (`PP-482910`) is the [`fmt::Display`] form used
//! in diagnostics and snapshots.

use std::{collections::VecDeque, fmt, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::errors::GridGraphError;

pub const DEFAULT_MAX_SUFFIX: u32 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    PowerPlant,
    Household,
    KilledPowerPlant,
}

impl EntityKind {
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::PowerPlant => "PP",
            EntityKind::Household => "HH",
            EntityKind::KilledPowerPlant => "KPP",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityKind::PowerPlant => "power plant",
            EntityKind::Household => "household",
            EntityKind::KilledPowerPlant => "killed power plant",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    kind: EntityKind,
    suffix: u32,
}

impl EntityId {
    pub fn new(kind: EntityKind, suffix: u32) -> Self {
        Self { kind, suffix }
    }

    pub fn power_plant(suffix: u32) -> Self {
        Self::new(EntityKind::PowerPlant, suffix)
    }

    pub fn household(suffix: u32) -> Self {
        Self::new(EntityKind::Household, suffix)
    }

    pub fn killed_power_plant(suffix: u32) -> Self {
        Self::new(EntityKind::KilledPowerPlant, suffix)
    }

    /// Resolves a caller handle. Only the canonical decimal rendering of a
    /// suffix names an entity, so `"007"` and `"abc"` both yield `None`.
    pub fn from_handle(kind: EntityKind, handle: &str) -> Option<Self> {
        let suffix: u32 = handle.parse().ok()?;
        if suffix.to_string() != handle {
            return None;
        }
        Some(Self::new(kind, suffix))
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn suffix(&self) -> u32 {
        self.suffix
    }

    /// Bare suffix handed back to callers.
    pub fn handle(&self) -> String {
        self.suffix.to_string()
    }

    pub fn with_kind(&self, kind: EntityKind) -> Self {
        Self::new(kind, self.suffix)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.prefix(), self.suffix)
    }
}

impl FromStr for EntityId {
    type Err = GridGraphError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let (prefix, handle) = key
            .split_once('-')
            .ok_or_else(|| GridGraphError::invalid_input(format!("malformed key {key}")))?;
        let kind = match prefix {
            "PP" => EntityKind::PowerPlant,
            "HH" => EntityKind::Household,
            "KPP" => EntityKind::KilledPowerPlant,
            other => {
                return Err(GridGraphError::invalid_input(format!(
                    "unknown prefix {other}"
                )));
            }
        };
        Self::from_handle(kind, handle)
            .ok_or_else(|| GridGraphError::invalid_input(format!("malformed suffix in {key}")))
    }
}

impl Serialize for EntityId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of numeric suffixes for newly created entities.
///
/// Implementations never consult the store; collision handling is the caller's
/// concern and is terminal.
pub trait SuffixSource: Send {
    fn next_suffix(&mut self) -> u32;
}

/// Uniform draws from `[1, max]`, either seeded or from OS entropy.
pub struct RandomSuffix {
    rng: StdRng,
    max: u32,
}

impl RandomSuffix {
    pub fn new(max: u32) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max: max.max(1),
        }
    }

    pub fn seeded(seed: u64, max: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max: max.max(1),
        }
    }
}

impl Default for RandomSuffix {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUFFIX)
    }
}

impl SuffixSource for RandomSuffix {
    fn next_suffix(&mut self) -> u32 {
        self.rng.gen_range(1..=self.max)
    }
}

/// Replays a fixed sequence of suffixes, then keeps counting upward from the
/// last one. Used to reproduce collisions.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSuffix {
    queue: VecDeque<u32>,
    last: u32,
}

impl ScriptedSuffix {
    pub fn new<I: IntoIterator<Item = u32>>(suffixes: I) -> Self {
        Self {
            queue: suffixes.into_iter().collect(),
            last: 0,
        }
    }
}

impl SuffixSource for ScriptedSuffix {
    fn next_suffix(&mut self) -> u32 {
        let next = self
            .queue
            .pop_front()
            .unwrap_or_else(|| self.last.saturating_add(1));
        self.last = next;
        next
    }
}
