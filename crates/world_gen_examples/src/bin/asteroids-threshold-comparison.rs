use glam::Vec2;
use world_gen::prelude::*;
use world_gen_examples::{init_tracing, render_world_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Raising the threshold lets the field grow inward from the rim.
    let extent = Vec2::new(128.0, 128.0);
    for (name, threshold) in [("sparse", -0.8), ("medium", -0.5), ("dense", -0.2)] {
        let param = WorldGeneratorParameter::default()
            .with_height_threshold(threshold)
            .with_background(false)
            .with_squads(0, 1);
        let generator = WorldGenerator::with_parameters(128, 128, 1234, param)?;
        let mut spawner = RecordingSpawner::new();
        let summary = generator.generate(&mut spawner);
        println!(
            "{name} (threshold {threshold}): {} of {} nodes placed",
            summary.asteroids.placed, summary.asteroids.candidates
        );

        let rc = RenderConfig::new((800, 800), extent);
        render_world_to_png(
            spawner.as_slice(),
            None,
            &rc,
            format!("asteroids-threshold-{name}.png"),
        )?;
    }

    Ok(())
}
