//! Asteroid placement over a height field.
//!
//! A coarse grid is laid over the [`HeightMap`]; every grid node whose source
//! cell is at or below the height threshold becomes an asteroid, nudged by a
//! random fraction of the cell spacing. The walk is row-major and every node
//! consumes the same number of draws once accepted, so the stream of random
//! values (and therefore the field) is fixed by the seed.
use glam::Vec2;
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::heightmap::HeightMap;
use crate::param::WorldGeneratorParameter;
use crate::random::{chance, rand01, random_sign};
use crate::spawn::WorldSpawner;

/// Sampling grid laid over a height field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsteroidGrid {
    pub rows: usize,
    pub cols: usize,
    pub row_spacing: f32,
    pub col_spacing: f32,
}

impl AsteroidGrid {
    /// Grid for a `width x height` field at `density`.
    ///
    /// Fails if the grid would have no rows or no columns.
    pub fn new(width: usize, height: usize, density: f32) -> Result<Self> {
        let rows = (width.saturating_sub(1) as f32 * density) as usize;
        let cols = (height.saturating_sub(1) as f32 * density) as usize;
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidConfig(format!(
                "asteroid grid for a {width}x{height} field at density {density} is empty"
            )));
        }
        Ok(Self {
            rows,
            cols,
            row_spacing: width as f32 / rows as f32,
            col_spacing: height as f32 / cols as f32,
        })
    }

    /// Grid position of node `(row, col)` before jitter.
    #[inline]
    pub fn node_position(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(row as f32 * self.row_spacing, col as f32 * self.col_spacing)
    }

    /// Height-field cell sampled for node `(row, col)`.
    #[inline]
    pub fn source_cell(&self, row: usize, col: usize) -> (usize, usize) {
        let p = self.node_position(row, col);
        (p.x as usize, p.y as usize)
    }
}

/// Counters from one asteroid pass.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsteroidFieldStats {
    /// Grid nodes evaluated.
    pub candidates: usize,
    /// Asteroids emitted.
    pub placed: usize,
    /// Nodes above the threshold.
    pub rejected: usize,
    /// Asteroids that received the bonus radius.
    pub boss: usize,
}

/// Place asteroids on `map` and emit them to `spawner`.
///
/// `param` must have been validated; the grid itself is validated here.
pub fn place_asteroids<R, S>(
    map: &HeightMap,
    param: &WorldGeneratorParameter,
    rng: &mut R,
    spawner: &mut S,
) -> Result<AsteroidFieldStats>
where
    R: RngCore,
    S: WorldSpawner + ?Sized,
{
    let (width, height) = map.size();
    let grid = AsteroidGrid::new(width, height, param.asteroid_density)?;
    Ok(place_on_grid(map, &grid, param, rng, spawner))
}

/// Walk an already validated `grid` over `map`. Never fails.
pub(crate) fn place_on_grid<R, S>(
    map: &HeightMap,
    grid: &AsteroidGrid,
    param: &WorldGeneratorParameter,
    rng: &mut R,
    spawner: &mut S,
) -> AsteroidFieldStats
where
    R: RngCore,
    S: WorldSpawner + ?Sized,
{
    let mut stats = AsteroidFieldStats::default();
    let scatter = Vec2::new(
        param.asteroid_scattering * grid.row_spacing,
        param.asteroid_scattering * grid.col_spacing,
    );
    let bonus = param.asteroid_radius.max * 2.0;

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            stats.candidates += 1;

            let (cx, cy) = grid.source_cell(row, col);
            let Some(value) = map.get(cx, cy) else {
                stats.rejected += 1;
                continue;
            };
            if value > param.height_threshold {
                stats.rejected += 1;
                continue;
            }

            let sx = random_sign(rng);
            let sy = random_sign(rng);
            let position = grid.node_position(row, col) + Vec2::new(sx, sy) * scatter;

            let mut radius = param.asteroid_radius.random(rand01(rng));
            if chance(rng, param.asteroid_extra_scaling_chance) {
                radius += bonus;
                stats.boss += 1;
            }

            spawner.spawn_asteroid(position.into(), radius);
            stats.placed += 1;
        }
    }

    debug!(
        "Asteroid grid {}x{}: {} placed, {} rejected, {} boss.",
        grid.rows, grid.cols, stats.placed, stats.rejected, stats.boss
    );

    stats
}
