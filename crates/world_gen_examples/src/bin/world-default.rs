use glam::Vec2;
use world_gen::prelude::*;
use world_gen_examples::{init_tracing, render_world_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A 128x96 arena with default parameters.
    let (width, height, seed) = (128, 96, 42);
    let generator = WorldGenerator::new(width, height, seed)?;
    let map = generator.height_map();

    let mut spawner = RecordingSpawner::new();
    let summary = generator.generate(&mut spawner);
    println!(
        "seed {}: {} asteroids ({} boss), {} planets, {} squads",
        summary.seed,
        summary.asteroids.placed,
        summary.asteroids.boss,
        summary.planets,
        summary.squads
    );

    let rc = RenderConfig::new((1024, 768), Vec2::new(width as f32, height as f32))
        .with_height_underlay(true);
    render_world_to_png(spawner.as_slice(), Some(&map), &rc, "world-default.png")?;

    Ok(())
}
