use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;
use world_gen::prelude::{Faction, HeightMap, SpawnCommand};

/// Install a compact fmt subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();
}

/// Colors used when drawing spawn commands.
#[derive(Clone, Debug)]
pub struct WorldStyle {
    pub boundary: [u8; 3],
    pub asteroid: [u8; 3],
    pub mothership: [u8; 3],
    pub player: [u8; 3],
    pub enemy: [u8; 3],
    pub neutral: [u8; 3],
}

impl Default for WorldStyle {
    fn default() -> Self {
        Self {
            boundary: [220, 220, 220],
            asteroid: [150, 120, 90],
            mothership: [250, 210, 60],
            player: [60, 160, 250],
            enemy: [235, 70, 60],
            neutral: [170, 170, 170],
        }
    }
}

/// Output image size and the world extent it maps.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub world_extent: Vec2,
    pub background: [u8; 3],
    pub style: WorldStyle,
    /// Draw the height field underneath the placements.
    pub height_underlay: bool,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), world_extent: Vec2) -> Self {
        Self {
            image_size,
            world_extent,
            background: [12, 14, 24],
            style: WorldStyle::default(),
            height_underlay: false,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_style(mut self, style: WorldStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_height_underlay(mut self, enabled: bool) -> Self {
        self.height_underlay = enabled;
        self
    }

    fn scale(&self) -> Vec2 {
        Vec2::new(
            self.image_size.0 as f32 / self.world_extent.x.max(f32::EPSILON),
            self.image_size.1 as f32 / self.world_extent.y.max(f32::EPSILON),
        )
    }

    /// World position to pixel position, with y pointing up in the world.
    fn to_pixel(&self, p: Vec2) -> Vec2 {
        let s = self.scale();
        Vec2::new(p.x * s.x, self.image_size.1 as f32 - p.y * s.y)
    }
}

/// Grayscale image of `map`, one pixel per cell; low heights are dark.
pub fn render_height_map_to_png(map: &HeightMap, out_path: impl AsRef<Path>) -> anyhow::Result<()> {
    let (w, h) = map.size();
    let mut img = RgbImage::new(w as u32, h as u32);
    for (x, y, v) in map.cells() {
        let g = height_to_gray(v);
        img.put_pixel(x as u32, (h - 1 - y) as u32, Rgb([g, g, g]));
    }
    save(&img, out_path.as_ref())
}

/// Draw recorded spawn commands. Background decorations are screen-space and skipped.
pub fn render_world_to_png(
    commands: &[SpawnCommand],
    height_map: Option<&HeightMap>,
    config: &RenderConfig,
    out_path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (iw, ih) = config.image_size;
    let mut img = RgbImage::from_pixel(iw, ih, Rgb(config.background));

    if let (true, Some(map)) = (config.height_underlay, height_map) {
        draw_underlay(&mut img, map, config);
    }

    let scale = config.scale().min_element();
    let style = &config.style;
    for command in commands {
        match command {
            SpawnCommand::Boundary { a, b } => {
                let a = config.to_pixel(Vec2::from(*a));
                let b = config.to_pixel(Vec2::from(*b));
                draw_line(&mut img, a, b, style.boundary);
            }
            SpawnCommand::Asteroid { position, radius } => {
                let p = config.to_pixel(Vec2::from(*position));
                fill_circle(&mut img, p, (radius * scale).max(1.0), style.asteroid);
            }
            SpawnCommand::Mothership { position, .. } => {
                let p = config.to_pixel(Vec2::from(*position));
                fill_circle(&mut img, p, (2.0 * scale).max(3.0), style.mothership);
            }
            SpawnCommand::Squad {
                position, faction, ..
            }
            | SpawnCommand::Unit {
                position, faction, ..
            } => {
                let p = config.to_pixel(Vec2::from(*position));
                fill_circle(&mut img, p, (0.35 * scale).max(1.0), faction_color(style, *faction));
            }
            SpawnCommand::Background { .. } | SpawnCommand::Attach { .. } => {}
        }
    }

    save(&img, out_path.as_ref())
}

fn faction_color(style: &WorldStyle, faction: Faction) -> [u8; 3] {
    match faction {
        Faction::Player => style.player,
        Faction::Enemy => style.enemy,
        Faction::Neutral => style.neutral,
    }
}

fn height_to_gray(v: f32) -> u8 {
    ((v.clamp(-1.0, 1.0) * 0.5 + 0.5) * 255.0).round() as u8
}

fn draw_underlay(img: &mut RgbImage, map: &HeightMap, config: &RenderConfig) {
    let (iw, ih) = config.image_size;
    let s = config.scale();
    for py in 0..ih {
        for px in 0..iw {
            let wx = px as f32 / s.x;
            let wy = (ih - 1 - py) as f32 / s.y;
            if let Some(v) = map.get(wx as usize, wy as usize) {
                let g = height_to_gray(v) / 3;
                img.put_pixel(px, py, Rgb([g, g, g.saturating_add(8)]));
            }
        }
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn fill_circle(img: &mut RgbImage, center: Vec2, radius: f32, color: [u8; 3]) {
    let r = radius.ceil() as i64;
    let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
    let r2 = radius * radius;
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx * dx + dy * dy) as f32 <= r2 {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn draw_line(img: &mut RgbImage, a: Vec2, b: Vec2, color: [u8; 3]) {
    let steps = a.distance(b).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let p = a.lerp(b, i as f32 / steps as f32);
        // Nudge onto the last row/column so edges at the image border stay visible.
        let x = (p.x.round() as i64).min(img.width() as i64 - 1);
        let y = (p.y.round() as i64).min(img.height() as i64 - 1);
        put(img, x, y, color);
    }
}

fn save(img: &RgbImage, path: &Path) -> anyhow::Result<()> {
    img.save(path)?;
    info!("Wrote {}.", path.display());
    Ok(())
}
