//! The spawning collaborator that receives placement decisions.
//!
//! The generator never creates game objects itself. Every decision is handed to
//! a [`WorldSpawner`] passed in by the caller, which maps it onto whatever entity
//! runtime the game uses. [`RecordingSpawner`] keeps the calls as
//! [`SpawnCommand`]s, which is what tests and the PNG examples use.
use mint::Vector2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Allegiance tag attached to squads, units and the mothership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Faction {
    Player,
    Enemy,
    Neutral,
}

/// Sprite selection for a background placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// Full-viewport backdrop.
    Backdrop,
    /// Planet sprite by catalog index.
    Planet(u32),
}

/// Receiver for placement decisions.
pub trait WorldSpawner {
    /// Handle returned for a squad commander.
    type SquadHandle: Copy;
    /// Handle returned for a squad member.
    type UnitHandle: Copy;

    /// One straight arena boundary segment from `a` to `b`.
    fn spawn_boundary(&mut self, a: Vector2<f32>, b: Vector2<f32>);

    fn spawn_asteroid(&mut self, position: Vector2<f32>, radius: f32);

    /// A screen-space decoration. `layer` orders it relative to other decoration.
    fn spawn_background(
        &mut self,
        position: Vector2<f32>,
        width: f32,
        height: f32,
        sprite: Decoration,
        layer: i32,
    );

    fn spawn_mothership(&mut self, position: Vector2<f32>, faction: Faction);

    /// Create a squad commander and return its handle.
    fn spawn_squad(&mut self, position: Vector2<f32>, faction: Faction) -> Self::SquadHandle;

    /// Create a squad member and return its handle.
    fn spawn_unit(&mut self, position: Vector2<f32>, faction: Faction) -> Self::UnitHandle;

    fn attach_unit_to_squad(&mut self, unit: Self::UnitHandle, squad: Self::SquadHandle);
}

/// A no-op spawner.
impl WorldSpawner for () {
    type SquadHandle = ();
    type UnitHandle = ();

    #[inline]
    fn spawn_boundary(&mut self, _a: Vector2<f32>, _b: Vector2<f32>) {}

    #[inline]
    fn spawn_asteroid(&mut self, _position: Vector2<f32>, _radius: f32) {}

    #[inline]
    fn spawn_background(
        &mut self,
        _position: Vector2<f32>,
        _width: f32,
        _height: f32,
        _sprite: Decoration,
        _layer: i32,
    ) {
    }

    #[inline]
    fn spawn_mothership(&mut self, _position: Vector2<f32>, _faction: Faction) {}

    #[inline]
    fn spawn_squad(&mut self, _position: Vector2<f32>, _faction: Faction) {}

    #[inline]
    fn spawn_unit(&mut self, _position: Vector2<f32>, _faction: Faction) {}

    #[inline]
    fn attach_unit_to_squad(&mut self, _unit: (), _squad: ()) {}
}

impl<S: WorldSpawner + ?Sized> WorldSpawner for &mut S {
    type SquadHandle = S::SquadHandle;
    type UnitHandle = S::UnitHandle;

    fn spawn_boundary(&mut self, a: Vector2<f32>, b: Vector2<f32>) {
        (**self).spawn_boundary(a, b);
    }

    fn spawn_asteroid(&mut self, position: Vector2<f32>, radius: f32) {
        (**self).spawn_asteroid(position, radius);
    }

    fn spawn_background(
        &mut self,
        position: Vector2<f32>,
        width: f32,
        height: f32,
        sprite: Decoration,
        layer: i32,
    ) {
        (**self).spawn_background(position, width, height, sprite, layer);
    }

    fn spawn_mothership(&mut self, position: Vector2<f32>, faction: Faction) {
        (**self).spawn_mothership(position, faction);
    }

    fn spawn_squad(&mut self, position: Vector2<f32>, faction: Faction) -> Self::SquadHandle {
        (**self).spawn_squad(position, faction)
    }

    fn spawn_unit(&mut self, position: Vector2<f32>, faction: Faction) -> Self::UnitHandle {
        (**self).spawn_unit(position, faction)
    }

    fn attach_unit_to_squad(&mut self, unit: Self::UnitHandle, squad: Self::SquadHandle) {
        (**self).attach_unit_to_squad(unit, squad);
    }
}

/// Handle issued by [`RecordingSpawner`] for squads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquadId(pub usize);

/// Handle issued by [`RecordingSpawner`] for units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitId(pub usize);

/// One recorded call on a [`WorldSpawner`].
#[derive(Clone, Debug, PartialEq)]
pub enum SpawnCommand {
    Boundary {
        a: Vector2<f32>,
        b: Vector2<f32>,
    },
    Asteroid {
        position: Vector2<f32>,
        radius: f32,
    },
    Background {
        position: Vector2<f32>,
        width: f32,
        height: f32,
        sprite: Decoration,
        layer: i32,
    },
    Mothership {
        position: Vector2<f32>,
        faction: Faction,
    },
    Squad {
        id: SquadId,
        position: Vector2<f32>,
        faction: Faction,
    },
    Unit {
        id: UnitId,
        position: Vector2<f32>,
        faction: Faction,
    },
    Attach {
        unit: UnitId,
        squad: SquadId,
    },
}

/// A spawner that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSpawner {
    commands: Vec<SpawnCommand>,
    next_squad: usize,
    next_unit: usize,
}

impl RecordingSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            commands: Vec::with_capacity(cap),
            ..Self::default()
        }
    }

    pub fn into_inner(self) -> Vec<SpawnCommand> {
        self.commands
    }

    pub fn as_slice(&self) -> &[SpawnCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Recorded asteroids as `(position, radius)`.
    pub fn asteroids(&self) -> impl Iterator<Item = (Vector2<f32>, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            SpawnCommand::Asteroid { position, radius } => Some((*position, *radius)),
            _ => None,
        })
    }

    /// Recorded boundary segments.
    pub fn boundaries(&self) -> impl Iterator<Item = (Vector2<f32>, Vector2<f32>)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            SpawnCommand::Boundary { a, b } => Some((*a, *b)),
            _ => None,
        })
    }

    /// Recorded squad commanders as `(id, position)`.
    pub fn squads(&self) -> impl Iterator<Item = (SquadId, Vector2<f32>)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            SpawnCommand::Squad { id, position, .. } => Some((*id, *position)),
            _ => None,
        })
    }

    /// Number of recorded commands matching `pred`.
    pub fn count(&self, pred: impl Fn(&SpawnCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl WorldSpawner for RecordingSpawner {
    type SquadHandle = SquadId;
    type UnitHandle = UnitId;

    fn spawn_boundary(&mut self, a: Vector2<f32>, b: Vector2<f32>) {
        self.commands.push(SpawnCommand::Boundary { a, b });
    }

    fn spawn_asteroid(&mut self, position: Vector2<f32>, radius: f32) {
        self.commands
            .push(SpawnCommand::Asteroid { position, radius });
    }

    fn spawn_background(
        &mut self,
        position: Vector2<f32>,
        width: f32,
        height: f32,
        sprite: Decoration,
        layer: i32,
    ) {
        self.commands.push(SpawnCommand::Background {
            position,
            width,
            height,
            sprite,
            layer,
        });
    }

    fn spawn_mothership(&mut self, position: Vector2<f32>, faction: Faction) {
        self.commands
            .push(SpawnCommand::Mothership { position, faction });
    }

    fn spawn_squad(&mut self, position: Vector2<f32>, faction: Faction) -> SquadId {
        let id = SquadId(self.next_squad);
        self.next_squad += 1;
        self.commands.push(SpawnCommand::Squad {
            id,
            position,
            faction,
        });
        id
    }

    fn spawn_unit(&mut self, position: Vector2<f32>, faction: Faction) -> UnitId {
        let id = UnitId(self.next_unit);
        self.next_unit += 1;
        self.commands.push(SpawnCommand::Unit {
            id,
            position,
            faction,
        });
        id
    }

    fn attach_unit_to_squad(&mut self, unit: UnitId, squad: SquadId) {
        self.commands.push(SpawnCommand::Attach { unit, squad });
    }
}
