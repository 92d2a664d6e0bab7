use glam::Vec2;
use world_gen::prelude::*;
use world_gen_examples::{init_tracing, parameters_from_args, render_world_to_png, RenderConfig};

// Usage: world-from-ron [path/to/params.ron]
// Try crates/world_gen_examples/params/dense-field.ron.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let param = parameters_from_args(WorldGeneratorParameter::default())?;
    let (width, height) = (160, 120);
    let generator = WorldGenerator::with_parameters(width, height, 2024, param)?;
    let map = generator.height_map();

    let mut spawner = RecordingSpawner::new();
    let summary = generator.generate(&mut spawner);
    println!("stages: {:?}", summary.stages);

    let rc = RenderConfig::new((1280, 960), Vec2::new(width as f32, height as f32))
        .with_height_underlay(true);
    render_world_to_png(spawner.as_slice(), Some(&map), &rc, "world-from-ron.png")?;

    Ok(())
}
