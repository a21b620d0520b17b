//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the frame timestamp
//! - Seeded RNG only
//! - Stable iteration order (by lane index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod level;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{any_boss_hit, any_lane_hit, boss_hit, lane_hit};
pub use entity::{Direction, Entity, EntityKind, Player};
pub use level::{ConfigError, FrameChecks, GamePhase, LevelConfig, LevelStateMachine, Song, Transition};
pub use spawner::SlotArray;
pub use state::{Banner, GameState};
pub use tick::{FrameOutcome, InputAction, advance_frame, handle_input};
