//! Arena boundary segments.
use glam::Vec2;

use crate::spawn::WorldSpawner;

/// The four segments enclosing a `width x height` arena anchored at the origin.
///
/// Segments are ordered left, top, right, bottom, each ending where the next
/// begins.
pub fn world_bounds(width: f32, height: f32) -> [(Vec2, Vec2); 4] {
    let bottom_left = Vec2::ZERO;
    let top_left = Vec2::new(0.0, height);
    let top_right = Vec2::new(width, height);
    let bottom_right = Vec2::new(width, 0.0);
    [
        (bottom_left, top_left),
        (top_left, top_right),
        (top_right, bottom_right),
        (bottom_right, bottom_left),
    ]
}

/// Emit the arena boundary to `spawner`.
pub fn create_world_bounds<S: WorldSpawner + ?Sized>(width: f32, height: f32, spawner: &mut S) {
    for (a, b) in world_bounds(width, height) {
        spawner.spawn_boundary(a.into(), b.into());
    }
}
