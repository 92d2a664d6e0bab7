//! Tunable parameters for a generation run.
use glam::Vec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::range::Range;

/// Largest squad that fits the 3x3 formation, commander included.
pub const MAX_SQUAD_MEMBERS: u32 = 9;

/// Configuration for [`crate::generator::WorldGenerator`].
///
/// Defaults describe a sparse asteroid ring around an open center with five
/// player squads.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldGeneratorParameter {
    /// Number of fBm layers summed.
    pub octaves: u32,
    /// Frequency multiplier applied per octave.
    pub lacunarity: f32,
    /// Base sampling frequency of the noise.
    pub frequency: f32,
    /// Amplitude multiplier per octave, and the amplitude of the first octave.
    pub gain: f32,

    /// Cells with a height value above this never spawn an asteroid.
    pub height_threshold: f32,
    /// Fraction of the field resolution used for the asteroid sampling grid.
    pub asteroid_density: f32,
    /// Candidate asteroid radii.
    pub asteroid_radius: Range,
    /// Position jitter as a fraction of the cell spacing.
    pub asteroid_scattering: f32,
    /// Probability of adding `asteroid_radius.max * 2` to a radius.
    pub asteroid_extra_scaling_chance: f32,

    /// Number of starting player squads.
    pub initial_squads: u32,
    /// Members per squad, commander included.
    pub squad_members: u32,
    /// Distance of each squad anchor from the world center.
    pub squad_distance: f32,
    /// Angle of the first squad anchor, in degrees.
    pub squad_initial_angle: f32,

    /// Decoration pass toggle.
    pub generate_background: bool,
    /// Number of planet decorations.
    pub number_of_planets: Range,
    /// Planet decoration radii.
    pub planet_radius: Range,
    /// Size of the planet sprite catalog.
    pub planet_sprite_count: u32,
    /// Screen-space extent decoration is placed in.
    pub viewport: Vec2,
}

impl Default for WorldGeneratorParameter {
    fn default() -> Self {
        let lacunarity = 2.0;
        Self {
            octaves: 12,
            lacunarity,
            frequency: 1.0 / 64.0,
            gain: 1.0 / lacunarity,
            height_threshold: -0.8,
            asteroid_density: 0.4,
            asteroid_radius: Range::continuous(0.25, 0.5),
            asteroid_scattering: 0.25,
            asteroid_extra_scaling_chance: 0.01,
            initial_squads: 5,
            squad_members: MAX_SQUAD_MEMBERS,
            squad_distance: 10.0,
            squad_initial_angle: 0.0,
            generate_background: true,
            number_of_planets: Range::discrete(1, 3),
            planet_radius: Range::continuous(2.0, 6.0),
            planet_sprite_count: 6,
            viewport: Vec2::new(64.0, 36.0),
        }
    }
}

impl WorldGeneratorParameter {
    /// Create parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fBm octave count, lacunarity and gain.
    pub fn with_fbm(mut self, octaves: u32, lacunarity: f32, gain: f32) -> Self {
        self.octaves = octaves;
        self.lacunarity = lacunarity;
        self.gain = gain;
        self
    }

    /// Sets the base noise frequency.
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the spawn threshold.
    pub fn with_height_threshold(mut self, height_threshold: f32) -> Self {
        self.height_threshold = height_threshold;
        self
    }

    /// Sets the asteroid sampling density.
    pub fn with_asteroid_density(mut self, asteroid_density: f32) -> Self {
        self.asteroid_density = asteroid_density;
        self
    }

    /// Sets the asteroid radius range.
    pub fn with_asteroid_radius(mut self, asteroid_radius: Range) -> Self {
        self.asteroid_radius = asteroid_radius;
        self
    }

    /// Sets the asteroid jitter fraction.
    pub fn with_asteroid_scattering(mut self, asteroid_scattering: f32) -> Self {
        self.asteroid_scattering = asteroid_scattering;
        self
    }

    /// Sets the bonus radius probability.
    pub fn with_asteroid_extra_scaling_chance(mut self, chance: f32) -> Self {
        self.asteroid_extra_scaling_chance = chance;
        self
    }

    /// Sets squad count and size.
    pub fn with_squads(mut self, initial_squads: u32, squad_members: u32) -> Self {
        self.initial_squads = initial_squads;
        self.squad_members = squad_members;
        self
    }

    /// Sets the squad ring radius and starting angle in degrees.
    pub fn with_squad_ring(mut self, distance: f32, initial_angle: f32) -> Self {
        self.squad_distance = distance;
        self.squad_initial_angle = initial_angle;
        self
    }

    /// Enables or disables the decoration pass.
    pub fn with_background(mut self, generate_background: bool) -> Self {
        self.generate_background = generate_background;
        self
    }

    /// Sets the planet count and radius ranges.
    pub fn with_planets(mut self, number_of_planets: Range, planet_radius: Range) -> Self {
        self.number_of_planets = number_of_planets;
        self.planet_radius = planet_radius;
        self
    }

    /// Sets the decoration viewport extent.
    pub fn with_viewport(mut self, viewport: Vec2) -> Self {
        self.viewport = viewport;
        self
    }

    /// Validates the parameters, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.octaves == 0 {
            return Err(Error::InvalidConfig("octaves must be >= 1".into()));
        }
        if !(self.lacunarity.is_finite() && self.lacunarity > 1.0) {
            return Err(Error::InvalidConfig("lacunarity must be > 1".into()));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(Error::InvalidConfig("frequency must be > 0".into()));
        }
        if !(self.gain > 0.0 && self.gain < 1.0) {
            return Err(Error::InvalidConfig("gain must be in (0, 1)".into()));
        }
        if self.height_threshold.is_nan() {
            return Err(Error::InvalidConfig("height_threshold is NaN".into()));
        }
        if !(self.asteroid_density > 0.0 && self.asteroid_density <= 1.0) {
            return Err(Error::InvalidConfig(
                "asteroid_density must be in (0, 1]".into(),
            ));
        }
        self.asteroid_radius.validate("asteroid_radius")?;
        if !(self.asteroid_scattering.is_finite() && self.asteroid_scattering >= 0.0) {
            return Err(Error::InvalidConfig(
                "asteroid_scattering must be >= 0".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.asteroid_extra_scaling_chance) {
            return Err(Error::InvalidConfig(
                "asteroid_extra_scaling_chance must be in [0, 1]".into(),
            ));
        }
        if self.squad_members == 0 || self.squad_members > MAX_SQUAD_MEMBERS {
            return Err(Error::InvalidConfig(format!(
                "squad_members must be in 1..={MAX_SQUAD_MEMBERS}"
            )));
        }
        if !(self.squad_distance.is_finite() && self.squad_distance >= 0.0) {
            return Err(Error::InvalidConfig("squad_distance must be >= 0".into()));
        }
        if !self.squad_initial_angle.is_finite() {
            return Err(Error::InvalidConfig(
                "squad_initial_angle must be finite".into(),
            ));
        }
        self.number_of_planets.validate("number_of_planets")?;
        if self.number_of_planets.min < 0.0 {
            return Err(Error::InvalidConfig(
                "number_of_planets must not be negative".into(),
            ));
        }
        self.planet_radius.validate("planet_radius")?;
        if self.planet_sprite_count == 0 {
            return Err(Error::InvalidConfig(
                "planet_sprite_count must be >= 1".into(),
            ));
        }
        if !(self.viewport.x > 0.0 && self.viewport.y > 0.0) {
            return Err(Error::InvalidConfig(
                "viewport must be > 0 in both components".into(),
            ));
        }

        Ok(())
    }
}
