use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;
use world_gen::prelude::WorldGeneratorParameter;

/// Read a RON parameter file. Missing fields fall back to their defaults.
pub fn load_parameters(path: impl AsRef<Path>) -> anyhow::Result<WorldGeneratorParameter> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading parameters from {}", path.display()))?;
    let param = parse_parameters(&text).with_context(|| format!("loading {}", path.display()))?;
    info!("Loaded parameters from {}.", path.display());
    Ok(param)
}

/// Parse and validate RON parameter text.
pub fn parse_parameters(text: &str) -> anyhow::Result<WorldGeneratorParameter> {
    let param: WorldGeneratorParameter = ron::from_str(text)?;
    param.validate()?;
    Ok(param)
}

/// Parameters from the RON file named by the first argument, or `fallback`.
pub fn parameters_from_args(
    fallback: WorldGeneratorParameter,
) -> anyhow::Result<WorldGeneratorParameter> {
    match std::env::args().nth(1) {
        Some(path) => load_parameters(path),
        None => Ok(fallback),
    }
}

#[cfg(test)]
mod tests {
    use world_gen::error::Error;
    use world_gen::prelude::{Range, SampleMode};

    use super::*;

    const DENSE_FIELD: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/params/dense-field.ron");

    #[test]
    fn bundled_file_fills_omitted_fields_with_defaults() {
        let param = load_parameters(DENSE_FIELD).expect("bundled parameters load");
        let defaults = WorldGeneratorParameter::default();

        assert_eq!(param.octaves, 8);
        assert_eq!((param.initial_squads, param.squad_members), (2, 5));
        assert!(!param.generate_background);
        assert_eq!(param.asteroid_radius, Range::continuous(0.3, 0.7));
        assert_eq!(param.asteroid_radius.mode, SampleMode::Continuous);
        assert_eq!(param.number_of_planets.mode, SampleMode::Discrete);

        assert_eq!(param.viewport, defaults.viewport);
        assert_eq!(param.planet_radius, defaults.planet_radius);
        assert_eq!(param.planet_sprite_count, defaults.planet_sprite_count);
        assert_eq!(param.lacunarity, defaults.lacunarity);
        assert_eq!(param.gain, defaults.gain);
    }

    #[test]
    fn empty_document_is_the_default() {
        let param = parse_parameters("()").expect("defaults are valid");
        assert_eq!(param, WorldGeneratorParameter::default());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = parse_parameters("(asteroid_radius: (min: 2.0, max: 1.0))")
            .expect_err("min > max must be rejected");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn unknown_file_reports_path() {
        let err = load_parameters("does-not-exist.ron").expect_err("missing file");
        assert!(err.to_string().contains("does-not-exist.ron"));
    }
}
