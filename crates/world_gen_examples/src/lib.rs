#![forbid(unsafe_code)]

mod params;
mod rendering;

pub use params::{load_parameters, parameters_from_args, parse_parameters};
pub use rendering::{
    init_tracing, render_height_map_to_png, render_world_to_png, RenderConfig, WorldStyle,
};
