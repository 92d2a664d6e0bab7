//! Fractal height-field synthesis.
//!
//! A [`HeightMap`] holds one value per integer cell. Each value is a sum of
//! noise octaves (fractional Brownian motion) minus a radial falloff, clamped
//! to `[-1, 1]`. Low values mark cells where asteroids may spawn.
use glam::Vec2;
use tracing::debug;

use crate::noise::Noise2D;
use crate::param::WorldGeneratorParameter;

/// Octave settings for [`fbm`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FbmSettings {
    pub octaves: u32,
    pub frequency: f64,
    pub lacunarity: f64,
    pub gain: f64,
}

impl From<&WorldGeneratorParameter> for FbmSettings {
    fn from(param: &WorldGeneratorParameter) -> Self {
        Self {
            octaves: param.octaves,
            frequency: param.frequency as f64,
            lacunarity: param.lacunarity as f64,
            gain: param.gain as f64,
        }
    }
}

/// Sum `settings.octaves` layers of `noise` at `(x, y)`.
///
/// The first octave is sampled at `frequency` with amplitude `gain`; each
/// following octave multiplies frequency by `lacunarity` and amplitude by `gain`.
pub fn fbm<N: Noise2D + ?Sized>(noise: &N, x: f64, y: f64, settings: &FbmSettings) -> f64 {
    let mut total = 0.0;
    let mut frequency = settings.frequency;
    let mut amplitude = settings.gain;
    for _ in 0..settings.octaves {
        total += noise.eval(x * frequency, y * frequency) * amplitude;
        frequency *= settings.lacunarity;
        amplitude *= settings.gain;
    }
    total
}

/// Falloff subtracted from the fBm sum, growing linearly with distance from `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialMask {
    pub center: Vec2,
    pub radius: f32,
}

impl RadialMask {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance to the center in units of `radius`.
    #[inline]
    pub fn scalar(&self, p: Vec2) -> f32 {
        p.distance(self.center) / self.radius
    }
}

/// Dense row-major grid of height values.
#[derive(Clone, Debug)]
pub struct HeightMap {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl HeightMap {
    /// Synthesize a `width x height` field from `noise`.
    pub fn generate<N: Noise2D + ?Sized>(
        noise: &N,
        settings: &FbmSettings,
        mask: RadialMask,
        width: usize,
        height: usize,
    ) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let total = fbm(noise, x as f64, y as f64, settings);
                let scalar = mask.scalar(Vec2::new(x as f32, y as f32));
                let value = (total as f32 - scalar).clamp(-1.0, 1.0);
                data.push(value);
            }
        }

        debug!(
            "Synthesized {}x{} height field ({} octaves).",
            width, height, settings.octaves
        );

        Self {
            width,
            height,
            data,
        }
    }

    /// Build a height map from raw row-major values.
    ///
    /// Returns `None` if `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Get the size of the field as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Value at cell `(x, y)`, or `None` outside the field.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }

    /// Row-major values.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Iterate `(x, y, value)` over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let w = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (i % w, i / w, *v))
    }

    /// Smallest and largest value, or `None` for an empty field.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        self.data.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{ConstantNoise, OpenSimplexNoise};

    fn settings(octaves: u32) -> FbmSettings {
        FbmSettings {
            octaves,
            frequency: 1.0 / 16.0,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }

    #[test]
    fn fbm_sums_geometric_amplitudes() {
        // 0.5 + 0.25 + 0.125
        let v = fbm(&ConstantNoise(1.0), 3.0, 4.0, &settings(3));
        assert!((v - 0.875).abs() < 1e-12);
    }

    #[test]
    fn fbm_scales_sample_coordinates_per_octave() {
        struct Probe;
        impl Noise2D for Probe {
            fn eval(&self, x: f64, _y: f64) -> f64 {
                x
            }
        }
        let s = FbmSettings {
            octaves: 2,
            frequency: 0.5,
            lacunarity: 3.0,
            gain: 0.5,
        };
        // x * 0.5 * 0.5 + x * 1.5 * 0.25
        let v = fbm(&Probe, 8.0, 0.0, &s);
        assert!((v - (2.0 + 3.0)).abs() < 1e-12);
    }

    #[test]
    fn mask_scalar_is_distance_over_radius() {
        let mask = RadialMask::new(Vec2::new(10.0, 10.0), 10.0);
        assert_eq!(mask.scalar(Vec2::new(10.0, 10.0)), 0.0);
        assert_eq!(mask.scalar(Vec2::new(20.0, 10.0)), 1.0);
        assert_eq!(mask.scalar(Vec2::new(10.0, 5.0)), 0.5);
    }

    #[test]
    fn values_are_clamped() {
        let mask = RadialMask::new(Vec2::new(8.0, 8.0), 8.0);
        let high = HeightMap::generate(&ConstantNoise(100.0), &settings(4), mask, 16, 16);
        assert!(high.as_slice().iter().all(|v| *v == 1.0));

        let low = HeightMap::generate(&ConstantNoise(-100.0), &settings(4), mask, 16, 16);
        assert!(low.as_slice().iter().all(|v| *v == -1.0));
    }

    #[test]
    fn simplex_field_stays_in_unit_bound() {
        let noise = OpenSimplexNoise::new(2024);
        let mask = RadialMask::new(Vec2::new(32.0, 24.0), 32.0);
        let map = HeightMap::generate(&noise, &settings(8), mask, 64, 49);
        assert_eq!(map.size(), (64, 49));
        assert_eq!(map.as_slice().len(), 64 * 49);
        for (x, y, v) in map.cells() {
            assert!((-1.0..=1.0).contains(&v), "cell ({x}, {y}) = {v}");
        }
    }

    #[test]
    fn outer_annulus_is_lower_than_inner() {
        let noise = OpenSimplexNoise::new(99);
        let center = Vec2::new(48.0, 48.0);
        let mask = RadialMask::new(center, 48.0);
        let map = HeightMap::generate(&noise, &settings(6), mask, 96, 96);

        let mean_in = |lo: f32, hi: f32| {
            let (sum, n) = map
                .cells()
                .filter(|&(x, y, _)| {
                    let d = Vec2::new(x as f32, y as f32).distance(center) / 48.0;
                    d >= lo && d < hi
                })
                .fold((0.0f32, 0usize), |(s, n), (_, _, v)| (s + v, n + 1));
            sum / n as f32
        };

        let inner = mean_in(0.0, 0.25);
        let outer = mean_in(0.75, 1.0);
        assert!(outer < inner, "outer {outer} >= inner {inner}");
    }

    #[test]
    fn get_and_from_raw() {
        let map = HeightMap::from_raw(2, 2, vec![0.1, 0.2, 0.3, 0.4]).expect("valid size");
        assert_eq!(map.get(1, 0), Some(0.2));
        assert_eq!(map.get(0, 1), Some(0.3));
        assert_eq!(map.get(2, 0), None);
        assert_eq!(map.min_max(), Some((0.1, 0.4)));
        assert!(HeightMap::from_raw(3, 2, vec![0.0; 4]).is_none());
    }
}
