//! In-memory power grid graph: plants, households and the links between them.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod client;
pub mod config;
pub mod connection;
pub mod errors;
pub mod graph;
pub mod ids;
pub mod lifecycle;
pub mod reachability;
pub mod safety;
pub mod script;
pub mod shared;
pub mod world;

pub use crate::config::GridConfig;
pub use crate::errors::{GridGraphError, MissingEntity};
pub use crate::graph::{GridSnapshot, NodeSnapshot, PowerGrid};
pub use crate::ids::{EntityId, EntityKind, RandomSuffix, ScriptedSuffix, SuffixSource};
pub use crate::reachability::Supply;
pub use crate::shared::SharedGrid;
pub use crate::world::World;
