//! The world generator: owns the seeded state and runs every stage in order.
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::asteroids::{place_on_grid, AsteroidFieldStats, AsteroidGrid};
use crate::background::place_background;
use crate::bounds::create_world_bounds;
use crate::error::{Error, Result};
use crate::heightmap::{FbmSettings, HeightMap, RadialMask};
use crate::noise::OpenSimplexNoise;
use crate::param::WorldGeneratorParameter;
use crate::population::populate_world;
use crate::spawn::WorldSpawner;

/// Stages of a run, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenerationStage {
    Bounds,
    AsteroidField,
    Background,
    Population,
}

/// What a run produced.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationSummary {
    /// Seed of the run.
    pub seed: i64,
    /// Stages executed, in order.
    pub stages: Vec<GenerationStage>,
    /// Asteroid pass counters.
    pub asteroids: AsteroidFieldStats,
    /// Planet decorations placed; zero when the background pass is disabled.
    pub planets: usize,
    /// Squads spawned.
    pub squads: u32,
}

/// Generates one world from `(width, height, seed, parameters)`.
///
/// A generator is single-shot: [`WorldGenerator::generate`] consumes it, since
/// the RNG stream it owns is advanced by the run.
#[derive(Debug)]
pub struct WorldGenerator {
    width: i32,
    height: i32,
    seed: i64,
    param: WorldGeneratorParameter,
    grid: AsteroidGrid,
    noise: OpenSimplexNoise,
    rng: StdRng,
}

impl WorldGenerator {
    /// Create a generator with default parameters.
    pub fn new(width: i32, height: i32, seed: i64) -> Result<Self> {
        Self::with_parameters(width, height, seed, WorldGeneratorParameter::default())
    }

    /// Create a generator, validating dimensions and parameters.
    pub fn with_parameters(
        width: i32,
        height: i32,
        seed: i64,
        param: WorldGeneratorParameter,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        param.validate()?;

        let (field_w, field_h) = Self::field_size_for(width, height);
        let grid = AsteroidGrid::new(field_w, field_h, param.asteroid_density)?;

        Ok(Self {
            width,
            height,
            seed,
            grid,
            noise: OpenSimplexNoise::new(seed),
            rng: StdRng::seed_from_u64(seed as u64),
            param,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn parameters(&self) -> &WorldGeneratorParameter {
        &self.param
    }

    /// Asteroid sampling grid laid over the height field.
    pub fn asteroid_grid(&self) -> &AsteroidGrid {
        &self.grid
    }

    /// Size of the height field as `(width, height)`.
    ///
    /// The field carries one extra row past the requested height; without it
    /// the asteroid grid never reaches the top edge and leaves an empty band.
    pub fn field_size(&self) -> (usize, usize) {
        Self::field_size_for(self.width, self.height)
    }

    fn field_size_for(width: i32, height: i32) -> (usize, usize) {
        (width as usize, height as usize + 1)
    }

    /// Geometric center of the arena.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 * 0.5, self.height as f32 * 0.5)
    }

    /// Synthesize the height field without placing anything.
    pub fn height_map(&self) -> HeightMap {
        let (field_w, field_h) = self.field_size();
        let mask = RadialMask::new(self.center(), self.width as f32 * 0.5);
        HeightMap::generate(
            &self.noise,
            &FbmSettings::from(&self.param),
            mask,
            field_w,
            field_h,
        )
    }

    /// Run every stage against `spawner`.
    pub fn generate<S: WorldSpawner + ?Sized>(mut self, spawner: &mut S) -> GenerationSummary {
        info!(
            "Generating {}x{} world with seed {}.",
            self.width, self.height, self.seed
        );

        let mut stages = Vec::with_capacity(4);

        stages.push(GenerationStage::Bounds);
        create_world_bounds(self.width as f32, self.height as f32, spawner);

        stages.push(GenerationStage::AsteroidField);
        let map = self.height_map();
        let asteroids = place_on_grid(&map, &self.grid, &self.param, &mut self.rng, spawner);

        let planets = if self.param.generate_background {
            stages.push(GenerationStage::Background);
            place_background(&self.param, &mut self.rng, spawner)
        } else {
            debug!("Background pass disabled.");
            0
        };

        stages.push(GenerationStage::Population);
        let squads = populate_world(self.center(), &self.param, spawner);

        info!(
            "World ready: {} asteroids, {} planets, {} squads.",
            asteroids.placed, planets, squads
        );

        GenerationSummary {
            seed: self.seed,
            stages,
            asteroids,
            planets,
            squads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Range;
    use crate::spawn::{RecordingSpawner, SpawnCommand};

    fn small_param() -> WorldGeneratorParameter {
        WorldGeneratorParameter::default()
            .with_fbm(6, 2.0, 0.5)
            .with_height_threshold(-0.5)
            .with_squads(4, 9)
            .with_squad_ring(8.0, 0.0)
    }

    fn run(seed: i64, param: WorldGeneratorParameter) -> (GenerationSummary, Vec<SpawnCommand>) {
        let generator = WorldGenerator::with_parameters(64, 48, seed, param).expect("valid");
        let mut spawner = RecordingSpawner::new();
        let summary = generator.generate(&mut spawner);
        (summary, spawner.into_inner())
    }

    #[test]
    fn same_inputs_same_commands() {
        let (sa, a) = run(1337, small_param());
        let (sb, b) = run(1337, small_param());
        assert_eq!(sa, sb);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn different_seeds_differ() {
        let (_, a) = run(1, small_param());
        let (_, b) = run(2, small_param());
        assert_ne!(a, b);
    }

    #[test]
    fn stages_run_in_order() {
        let (summary, commands) = run(5, small_param());
        assert_eq!(
            summary.stages,
            vec![
                GenerationStage::Bounds,
                GenerationStage::AsteroidField,
                GenerationStage::Background,
                GenerationStage::Population,
            ]
        );

        let rank = |c: &SpawnCommand| match c {
            SpawnCommand::Boundary { .. } => 0,
            SpawnCommand::Asteroid { .. } => 1,
            SpawnCommand::Background { .. } => 2,
            _ => 3,
        };
        let ranks: Vec<_> = commands.iter().map(rank).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ranks.iter().filter(|r| **r == 0).count(), 4);
        assert_eq!(
            ranks.iter().filter(|r| **r == 1).count(),
            summary.asteroids.placed
        );
    }

    #[test]
    fn background_can_be_disabled() {
        let (summary, commands) = run(5, small_param().with_background(false));
        assert!(!summary.stages.contains(&GenerationStage::Background));
        assert_eq!(summary.planets, 0);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, SpawnCommand::Background { .. })));
    }

    #[test]
    fn disabling_background_keeps_asteroids_identical() {
        let asteroids = |commands: Vec<SpawnCommand>| -> Vec<SpawnCommand> {
            commands
                .into_iter()
                .filter(|c| matches!(c, SpawnCommand::Asteroid { .. }))
                .collect()
        };
        let (_, with_bg) = run(21, small_param());
        let (_, without_bg) = run(21, small_param().with_background(false));
        assert_eq!(asteroids(with_bg), asteroids(without_bg));
    }

    #[test]
    fn single_planet_is_emitted() {
        let param =
            small_param().with_planets(Range::discrete(1, 1), Range::continuous(1.0, 2.0));
        for seed in [0, 1, 99, -7] {
            let (summary, _) = run(seed, param.clone());
            assert_eq!(summary.planets, 1);
        }
    }

    #[test]
    fn population_counts_match() {
        let (summary, commands) = run(3, small_param());
        assert_eq!(summary.squads, 4);
        let squads = commands
            .iter()
            .filter(|c| matches!(c, SpawnCommand::Squad { .. }))
            .count();
        let units = commands
            .iter()
            .filter(|c| matches!(c, SpawnCommand::Unit { .. }))
            .count();
        let motherships = commands
            .iter()
            .filter(|c| matches!(c, SpawnCommand::Mothership { .. }))
            .count();
        assert_eq!((squads, units, motherships), (4, 32, 1));
    }

    #[test]
    fn field_has_one_extra_row() {
        let generator = WorldGenerator::new(40, 30, 0).expect("valid");
        assert_eq!(generator.field_size(), (40, 31));
        let map = generator.height_map();
        assert_eq!(map.size(), (40, 31));
        assert!(map.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));
        assert_eq!(generator.center(), Vec2::new(20.0, 15.0));
    }

    #[test]
    fn asteroid_pass_covers_the_stored_grid() {
        let generator = WorldGenerator::with_parameters(64, 48, 9, small_param()).expect("valid");
        let (field_w, field_h) = generator.field_size();
        let grid = *generator.asteroid_grid();
        assert_eq!(
            grid,
            AsteroidGrid::new(field_w, field_h, generator.parameters().asteroid_density)
                .expect("non-empty")
        );

        let mut spawner = RecordingSpawner::new();
        let summary = generator.generate(&mut spawner);
        assert_eq!(summary.asteroids.candidates, grid.rows * grid.cols);
        assert_eq!(
            summary.asteroids.placed + summary.asteroids.rejected,
            summary.asteroids.candidates
        );
        assert_eq!(spawner.asteroids().count(), summary.asteroids.placed);
    }

    #[test]
    fn rejects_bad_dimensions_and_parameters() {
        assert!(matches!(
            WorldGenerator::new(0, 10, 1),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(matches!(
            WorldGenerator::new(10, -1, 1),
            Err(Error::InvalidDimensions { .. })
        ));

        let zero_density = WorldGeneratorParameter::default().with_asteroid_density(0.0);
        assert!(matches!(
            WorldGenerator::with_parameters(64, 64, 1, zero_density),
            Err(Error::InvalidConfig(_))
        ));

        // Valid density, but too coarse for a 2-cell-wide field.
        let coarse = WorldGeneratorParameter::default().with_asteroid_density(0.5);
        assert!(WorldGenerator::with_parameters(2, 64, 1, coarse).is_err());
    }

    #[test]
    fn boundary_matches_requested_size() {
        let (_, commands) = run(4, small_param());
        let corners: Vec<Vec2> = commands
            .iter()
            .filter_map(|c| match c {
                SpawnCommand::Boundary { a, .. } => Some(Vec2::from(*a)),
                _ => None,
            })
            .collect();
        assert_eq!(
            corners,
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(0.0, 48.0),
                Vec2::new(64.0, 48.0),
                Vec2::new(64.0, 0.0),
            ]
        );
    }
}
