//! Screen-space decoration: a backdrop and a handful of planets.
//!
//! Decoration lives in viewport coordinates rather than world coordinates, so
//! planets are scattered over the viewport extent independently of the arena.
use glam::Vec2;
use rand::RngCore;

use crate::param::WorldGeneratorParameter;
use crate::random::{rand01, random_in, random_index};
use crate::spawn::{Decoration, WorldSpawner};

/// Layer of the full-viewport backdrop.
pub const BACKDROP_LAYER: i32 = -2;
/// Layer of planet decorations, above the backdrop and below gameplay objects.
pub const PLANET_LAYER: i32 = -1;

/// Emit the backdrop and the planets. Returns the number of planets placed.
pub fn place_background<R, S>(
    param: &WorldGeneratorParameter,
    rng: &mut R,
    spawner: &mut S,
) -> usize
where
    R: RngCore,
    S: WorldSpawner + ?Sized,
{
    let viewport = param.viewport;
    spawner.spawn_background(
        (viewport * 0.5).into(),
        viewport.x,
        viewport.y,
        Decoration::Backdrop,
        BACKDROP_LAYER,
    );

    let count = param.number_of_planets.random_count(rand01(rng));
    let catalog = param.planet_sprite_count as usize;
    for _ in 0..count {
        let radius = param.planet_radius.random(rand01(rng));
        let sprite = random_index(rng, catalog) as u32;
        let x = random_in(rng, 0.0, viewport.x);
        let y = random_in(rng, 0.0, viewport.y);
        let size = radius * 2.0;
        spawner.spawn_background(
            Vec2::new(x, y).into(),
            size,
            size,
            Decoration::Planet(sprite),
            PLANET_LAYER,
        );
    }

    count
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::range::Range;
    use crate::spawn::{RecordingSpawner, SpawnCommand};

    fn planets(spawner: &RecordingSpawner) -> Vec<(Vec2, f32, u32)> {
        spawner
            .as_slice()
            .iter()
            .filter_map(|c| match c {
                SpawnCommand::Background {
                    position,
                    width,
                    sprite: Decoration::Planet(i),
                    layer,
                    ..
                } => {
                    assert_eq!(*layer, PLANET_LAYER);
                    Some((Vec2::from(*position), *width, *i))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn single_planet_regardless_of_seed() {
        let param = WorldGeneratorParameter::default()
            .with_planets(Range::discrete(1, 1), Range::continuous(2.0, 3.0));
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut spawner = RecordingSpawner::new();
            let count = place_background(&param, &mut rng, &mut spawner);
            assert_eq!(count, 1);
            assert_eq!(planets(&spawner).len(), 1);
        }
    }

    #[test]
    fn backdrop_covers_viewport_first() {
        let param = WorldGeneratorParameter::default().with_viewport(Vec2::new(40.0, 20.0));
        let mut rng = StdRng::seed_from_u64(1);
        let mut spawner = RecordingSpawner::new();
        place_background(&param, &mut rng, &mut spawner);

        assert_eq!(
            spawner.as_slice()[0],
            SpawnCommand::Background {
                position: Vec2::new(20.0, 10.0).into(),
                width: 40.0,
                height: 20.0,
                sprite: Decoration::Backdrop,
                layer: BACKDROP_LAYER,
            }
        );
        assert!(BACKDROP_LAYER < PLANET_LAYER);
    }

    #[test]
    fn planets_stay_inside_viewport_and_catalog() {
        let viewport = Vec2::new(30.0, 12.0);
        let param = WorldGeneratorParameter::default()
            .with_viewport(viewport)
            .with_planets(Range::discrete(20, 20), Range::continuous(1.0, 2.0));
        let mut rng = StdRng::seed_from_u64(5);
        let mut spawner = RecordingSpawner::new();
        place_background(&param, &mut rng, &mut spawner);

        let placed = planets(&spawner);
        assert_eq!(placed.len(), 20);
        for (p, size, sprite) in placed {
            assert!(p.x >= 0.0 && p.x <= viewport.x);
            assert!(p.y >= 0.0 && p.y <= viewport.y);
            assert!((2.0..=4.0).contains(&size));
            assert!(sprite < param.planet_sprite_count);
        }
    }

    #[test]
    fn zero_planets_still_draws_backdrop() {
        let param = WorldGeneratorParameter::default()
            .with_planets(Range::discrete(0, 0), Range::continuous(1.0, 2.0));
        let mut rng = StdRng::seed_from_u64(3);
        let mut spawner = RecordingSpawner::new();
        assert_eq!(place_background(&param, &mut rng, &mut spawner), 0);
        assert_eq!(spawner.len(), 1);
    }
}
