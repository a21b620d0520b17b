//! Falling entities and the player sprite

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Kinds of falling entity, each with its own box size and speed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Kills the player on contact
    Enemy,
    /// Grants a bonus on contact
    Friend,
    /// Boss-level hazard, three lanes wide
    Boss,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Enemy, EntityKind::Friend, EntityKind::Boss];

    pub fn width(self) -> f32 {
        match self {
            EntityKind::Enemy => ENEMY_WIDTH,
            EntityKind::Friend => FRIEND_WIDTH,
            EntityKind::Boss => BOSS_WIDTH,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            EntityKind::Enemy => ENEMY_HEIGHT,
            EntityKind::Friend => FRIEND_HEIGHT,
            EntityKind::Boss => BOSS_HEIGHT,
        }
    }

    /// Inclusive speed range (pixels per millisecond)
    pub fn speed_range(self) -> (f32, f32) {
        match self {
            EntityKind::Enemy => ENEMY_SPEED,
            EntityKind::Friend => FRIEND_SPEED,
            EntityKind::Boss => BOSS_SPEED,
        }
    }

    /// Number of whole lanes of this kind's width that fit across the board
    pub fn lane_count(self) -> usize {
        (GAME_WIDTH / self.width()) as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Enemy => "enemy",
            EntityKind::Friend => "friend",
            EntityKind::Boss => "boss",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A falling entity occupying one lane
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left corner of the sprite box
    pub pos: Vec2,
    /// Fall speed in pixels per millisecond, fixed at spawn
    pub speed: f32,
}

impl Entity {
    /// Place a new entity just above the board in the given lane
    pub fn new(kind: EntityKind, lane: usize, speed: f32) -> Self {
        Self {
            kind,
            pos: Vec2::new(lane as f32 * kind.width(), -kind.height()),
            speed,
        }
    }

    /// Spawn with a random speed drawn from the kind's range, scaled
    pub fn spawn(kind: EntityKind, lane: usize, speed_scale: f32, rng: &mut impl Rng) -> Self {
        let (lo, hi) = kind.speed_range();
        let speed = rng.random_range(lo..=hi) * speed_scale;
        Self::new(kind, lane, speed)
    }

    /// Fall for `dt_ms` milliseconds
    pub fn update(&mut self, dt_ms: f32) {
        self.pos.y += dt_ms * self.speed;
    }

    /// Y coordinate of the falling (bottom) edge
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.kind.height()
    }

    /// True once the entity has fallen past the bottom of the board
    pub fn is_off_screen(&self) -> bool {
        self.pos.y > GAME_HEIGHT
    }

    /// Lane index this entity was spawned into
    pub fn lane(&self) -> usize {
        (self.pos.x / self.kind.width()).round() as usize
    }
}

/// Discrete player movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// The player's sprite. Moves a whole box at a time, never leaves the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            // Middle-left lane, bottom row
            pos: Vec2::new(2.0 * PLAYER_WIDTH, GAME_HEIGHT - PLAYER_HEIGHT),
        }
    }
}

impl Player {
    pub const MAX_X: f32 = GAME_WIDTH - PLAYER_WIDTH;
    pub const MAX_Y: f32 = GAME_HEIGHT - PLAYER_HEIGHT;

    /// Shift one lane or row. Steps that would leave the board are ignored.
    /// Returns whether the player moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        let next = match direction {
            Direction::Left => self.pos - Vec2::new(PLAYER_WIDTH, 0.0),
            Direction::Right => self.pos + Vec2::new(PLAYER_WIDTH, 0.0),
            Direction::Up => self.pos - Vec2::new(0.0, PLAYER_HEIGHT),
            Direction::Down => self.pos + Vec2::new(0.0, PLAYER_HEIGHT),
        };
        let in_bounds =
            (0.0..=Self::MAX_X).contains(&next.x) && (0.0..=Self::MAX_Y).contains(&next.y);
        if in_bounds {
            self.pos = next;
        }
        in_bounds
    }
}
