/// Best-first path carving with asymmetric directional costs
pub mod carver;
/// Pipeline orchestration from randomization through carving
pub mod generator;
/// Cellular reshaping driven by an injected decision capability
pub mod reshape;
/// Route endpoint selection over the directed room graph
pub mod route;

pub use generator::{GeneratorConfig, LevelGenerator};
