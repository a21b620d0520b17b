//! Desert Drop - a lane-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, level progression)
//! - `renderer`: Drawing-surface seam and HUD layout
//! - `platform`: Asset names, keyboard mapping, browser resource loading
//! - `audio`: Background music tracks (browser only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Board dimensions (canvas pixels)
    pub const GAME_WIDTH: f32 = 1000.0;
    pub const GAME_HEIGHT: f32 = 667.0;

    /// Player sprite box. The player moves one box per key press.
    pub const PLAYER_WIDTH: f32 = 125.0;
    pub const PLAYER_HEIGHT: f32 = 200.0;

    /// Falling drops that end the run
    pub const ENEMY_WIDTH: f32 = 125.0;
    pub const ENEMY_HEIGHT: f32 = 125.0;

    /// Falling suns that grant a bonus
    pub const FRIEND_WIDTH: f32 = 125.0;
    pub const FRIEND_HEIGHT: f32 = 125.0;

    /// Boss sprite box (three lanes across the board)
    pub const BOSS_WIDTH: f32 = 333.0;
    pub const BOSS_HEIGHT: f32 = 333.0;
    /// The boss art is smaller than its box; the falling edge is raised by this much
    pub const BOSS_HITBOX_INSET: f32 = 75.0;

    /// Speed ranges in pixels per millisecond
    pub const ENEMY_SPEED: (f32, f32) = (0.25, 0.40);
    pub const FRIEND_SPEED: (f32, f32) = (0.45, 0.70);
    pub const BOSS_SPEED: (f32, f32) = (0.5, 0.75);

    /// Points for catching a friend
    pub const FRIEND_BONUS: u64 = 2000;

    /// Score windows that trigger level transitions
    pub const LEVEL_TWO_SCORE: (u64, u64) = (50_000, 100_000);
    pub const LEVEL_THREE_SCORE: (u64, u64) = (300_000, 350_000);
    /// Half-open: [start, end)
    pub const BOSS_LEVEL_SCORE: (u64, u64) = (450_000, 500_000);
    pub const WIN_SCORE: u64 = 1_000_000;

    /// Score is pinned just past each window so a transition fires once
    pub const LEVEL_TWO_PIN: u64 = 100_001;
    pub const LEVEL_THREE_PIN: u64 = 350_001;
    pub const BOSS_LEVEL_PIN: u64 = 500_001;

    /// How long non-terminal banners stay on screen
    pub const BANNER_DURATION_MS: f32 = 1200.0;
}
