use world_gen::prelude::*;
use world_gen_examples::{init_tracing, render_height_map_to_png};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Same seed, increasing octave counts.
    for octaves in [1, 4, 12] {
        let param = WorldGeneratorParameter::default().with_fbm(octaves, 2.0, 0.5);
        let generator = WorldGenerator::with_parameters(256, 256, 7, param)?;
        let map = generator.height_map();
        if let Some((lo, hi)) = map.min_max() {
            println!("octaves {octaves}: heights in [{lo:.3}, {hi:.3}]");
        }
        render_height_map_to_png(&map, format!("heightmap-preview-octaves-{octaves}.png"))?;
    }

    Ok(())
}
