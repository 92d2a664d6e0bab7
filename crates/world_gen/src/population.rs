//! Starting population: the player mothership and a ring of squads.
//!
//! Squads sit at equal angular spacing on a circle around the world center.
//! Each squad is a commander at the anchor plus followers on the surrounding
//! cells of a 3x3 formation. Nothing here draws from the RNG.
use glam::Vec2;
use tracing::debug;

use crate::param::WorldGeneratorParameter;
use crate::spawn::{Faction, WorldSpawner};

/// Follower offsets around the commander, x outer and y inner, center excluded.
pub const FORMATION_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Anchor of squad `index` out of `count` on a ring around `center`.
///
/// Squad 0 sits at `initial_angle` degrees; the rest follow counter-clockwise
/// every `360 / count` degrees.
pub fn squad_anchor(
    center: Vec2,
    distance: f32,
    initial_angle: f32,
    index: u32,
    count: u32,
) -> Vec2 {
    let step = 360.0 / count.max(1) as f32;
    let angle = (initial_angle + index as f32 * step).to_radians();
    center + Vec2::from_angle(angle) * distance
}

/// Spawn one squad at `anchor` with `members` total members, commander included.
pub fn spawn_squad<S>(anchor: Vec2, members: u32, faction: Faction, spawner: &mut S) -> S::SquadHandle
where
    S: WorldSpawner + ?Sized,
{
    let squad = spawner.spawn_squad(anchor.into(), faction);
    let followers = members.saturating_sub(1) as usize;
    for &(dx, dy) in FORMATION_OFFSETS.iter().take(followers) {
        let position = anchor + Vec2::new(dx as f32, dy as f32);
        let unit = spawner.spawn_unit(position.into(), faction);
        spawner.attach_unit_to_squad(unit, squad);
    }
    squad
}

/// Spawn the mothership at `center` and the configured player squads around it.
///
/// Returns the number of squads spawned.
pub fn populate_world<S>(center: Vec2, param: &WorldGeneratorParameter, spawner: &mut S) -> u32
where
    S: WorldSpawner + ?Sized,
{
    spawner.spawn_mothership(center.into(), Faction::Player);

    for i in 0..param.initial_squads {
        let anchor = squad_anchor(
            center,
            param.squad_distance,
            param.squad_initial_angle,
            i,
            param.initial_squads,
        );
        spawn_squad(anchor, param.squad_members, Faction::Player, spawner);
    }

    debug!(
        "Spawned mothership and {} squads of {}.",
        param.initial_squads, param.squad_members
    );

    param.initial_squads
}
