#![forbid(unsafe_code)]
//! world_gen: deterministic procedural arena generation.
//!
//! Modules:
//! - noise, heightmap: seeded OpenSimplex noise and fBm height fields with radial falloff
//! - asteroids, background, population, bounds: the placement passes
//! - generator: runs the passes in order from a single seeded RNG stream
//! - spawn: the collaborator trait that receives placement decisions
//!
//! A run is fully determined by `(width, height, seed, parameters)`.
pub mod asteroids;
pub mod background;
pub mod bounds;
pub mod error;
pub mod generator;
pub mod heightmap;
pub mod noise;
pub mod param;
pub mod population;
pub mod random;
pub mod range;
pub mod spawn;

/// Convenient re-exports for common types. Import with `use world_gen::prelude::*;`.
pub mod prelude {
    pub use crate::asteroids::{place_asteroids, AsteroidFieldStats, AsteroidGrid};
    pub use crate::background::{place_background, BACKDROP_LAYER, PLANET_LAYER};
    pub use crate::bounds::{create_world_bounds, world_bounds};
    pub use crate::error::{Error, Result};
    pub use crate::generator::{GenerationStage, GenerationSummary, WorldGenerator};
    pub use crate::heightmap::{fbm, FbmSettings, HeightMap, RadialMask};
    pub use crate::noise::{Noise2D, OpenSimplexNoise};
    pub use crate::param::WorldGeneratorParameter;
    pub use crate::population::{populate_world, squad_anchor, spawn_squad};
    pub use crate::range::{Range, SampleMode};
    pub use crate::spawn::{
        Decoration, Faction, RecordingSpawner, SpawnCommand, SquadId, UnitId, WorldSpawner,
    };
}
