//! Score-driven level progression
//!
//! Each frame produces one `Transition`, picked by walking an ordered rule
//! table and stopping at the first rule that matches. The transition then
//! updates the phase, the active `LevelConfig`, and the score.

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// First level, default quotas
    Playing,
    /// More and faster drops
    LevelTwo,
    /// Even more drops
    LevelThree,
    /// Drops stop, the boss falls
    BossLevel,
    /// Run won (terminal until restart)
    Win,
    /// Run lost (terminal until restart)
    GameOver,
}

impl GamePhase {
    /// Terminal phases halt the frame loop until the player restarts
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Win | GamePhase::GameOver)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::Playing => "Level 1",
            GamePhase::LevelTwo => "Level 2",
            GamePhase::LevelThree => "Level 3",
            GamePhase::BossLevel => "Boss",
            GamePhase::Win => "Win",
            GamePhase::GameOver => "Game Over",
        }
    }
}

/// Background music track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Song {
    Main,
    Boss,
}

/// Raised at setup when a phase asks for more live entities than a kind has lanes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{kind} quota {quota} exceeds the {lanes} available lanes")]
    QuotaExceedsLanes {
        kind: EntityKind,
        quota: usize,
        lanes: usize,
    },
}

/// Phase-dependent tuning read by the spawners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    pub enemy_quota: usize,
    pub friend_quota: usize,
    pub boss_quota: usize,
    /// Multiplier applied to newly spawned drops' speed
    pub enemy_speed_scale: f32,
    pub song: Song,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl LevelConfig {
    pub const DEFAULT: Self = Self {
        enemy_quota: 2,
        friend_quota: 1,
        boss_quota: 0,
        enemy_speed_scale: 1.0,
        song: Song::Main,
    };

    pub const LEVEL_TWO: Self = Self {
        enemy_quota: 3,
        enemy_speed_scale: 1.25,
        ..Self::DEFAULT
    };

    pub const LEVEL_THREE: Self = Self {
        enemy_quota: 4,
        ..Self::LEVEL_TWO
    };

    pub const BOSS_LEVEL: Self = Self {
        enemy_quota: 0,
        boss_quota: 2,
        song: Song::Boss,
        ..Self::LEVEL_THREE
    };

    /// Every configuration a run can switch to
    pub const ALL: [Self; 4] = [
        Self::DEFAULT,
        Self::LEVEL_TWO,
        Self::LEVEL_THREE,
        Self::BOSS_LEVEL,
    ];

    pub fn quota(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Enemy => self.enemy_quota,
            EntityKind::Friend => self.friend_quota,
            EntityKind::Boss => self.boss_quota,
        }
    }

    pub fn speed_scale(&self, kind: EntityKind) -> f32 {
        match kind {
            EntityKind::Enemy => self.enemy_speed_scale,
            EntityKind::Friend | EntityKind::Boss => 1.0,
        }
    }

    /// Spawning draws random lanes until a free one turns up, so each quota
    /// must leave at least one lane reachable
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in EntityKind::ALL {
            let quota = self.quota(kind);
            let lanes = kind.lane_count();
            if quota > lanes {
                return Err(ConfigError::QuotaExceedsLanes { kind, quota, lanes });
            }
        }
        Ok(())
    }
}

/// What happened this frame, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A drop or the boss hit the player
    GameOver,
    /// The player caught a sun
    FriendBonus,
    LevelTwo,
    LevelThree,
    BossLevel,
    Win,
    StillPlaying,
}

impl Transition {
    /// Whether the frame loop should schedule another frame
    pub fn rearms(self) -> bool {
        !matches!(self, Transition::GameOver | Transition::Win)
    }
}

/// Per-frame facts the rule table is evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameChecks {
    pub score: u64,
    pub enemy_hit: bool,
    pub friend_hit: bool,
    pub boss_hit: bool,
}

fn player_hit(c: &FrameChecks) -> bool {
    c.enemy_hit || c.boss_hit
}

fn friend_caught(c: &FrameChecks) -> bool {
    c.friend_hit
}

fn in_level_two_window(c: &FrameChecks) -> bool {
    (LEVEL_TWO_SCORE.0..=LEVEL_TWO_SCORE.1).contains(&c.score)
}

fn in_level_three_window(c: &FrameChecks) -> bool {
    (LEVEL_THREE_SCORE.0..=LEVEL_THREE_SCORE.1).contains(&c.score)
}

fn in_boss_window(c: &FrameChecks) -> bool {
    (BOSS_LEVEL_SCORE.0..BOSS_LEVEL_SCORE.1).contains(&c.score)
}

fn reached_win(c: &FrameChecks) -> bool {
    c.score >= WIN_SCORE
}

fn always(_: &FrameChecks) -> bool {
    true
}

type Rule = (fn(&FrameChecks) -> bool, Transition);

/// Evaluated top-down, first match wins
const RULES: [Rule; 7] = [
    (player_hit, Transition::GameOver),
    (friend_caught, Transition::FriendBonus),
    (in_level_two_window, Transition::LevelTwo),
    (in_level_three_window, Transition::LevelThree),
    (in_boss_window, Transition::BossLevel),
    (reached_win, Transition::Win),
    (always, Transition::StillPlaying),
];

/// Owns the current phase and the tuning it implies
#[derive(Debug, Clone)]
pub struct LevelStateMachine {
    phase: GamePhase,
    config: LevelConfig,
}

impl LevelStateMachine {
    /// Validates every reachable configuration before the first frame
    pub fn new() -> Result<Self, ConfigError> {
        for config in &LevelConfig::ALL {
            config.validate()?;
        }
        Ok(Self {
            phase: GamePhase::Playing,
            config: LevelConfig::DEFAULT,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Pick this frame's transition
    pub fn evaluate(checks: &FrameChecks) -> Transition {
        RULES
            .iter()
            .find(|(predicate, _)| predicate(checks))
            .map_or(Transition::StillPlaying, |&(_, transition)| transition)
    }

    /// Apply a transition's effects to the phase, config and score
    pub fn apply(&mut self, transition: Transition, score: &mut u64) {
        match transition {
            Transition::GameOver => {
                log::info!("Game over at {} with score {}", self.phase.as_str(), score);
                *score = 0;
                self.enter(GamePhase::GameOver, LevelConfig::DEFAULT);
            }
            Transition::FriendBonus => {
                *score += FRIEND_BONUS;
            }
            Transition::LevelTwo => {
                *score = LEVEL_TWO_PIN;
                self.enter(GamePhase::LevelTwo, LevelConfig::LEVEL_TWO);
            }
            Transition::LevelThree => {
                *score = LEVEL_THREE_PIN;
                self.enter(GamePhase::LevelThree, LevelConfig::LEVEL_THREE);
            }
            Transition::BossLevel => {
                *score = BOSS_LEVEL_PIN;
                self.enter(GamePhase::BossLevel, LevelConfig::BOSS_LEVEL);
            }
            Transition::Win => {
                log::info!("Run won with score {}", score);
                self.enter(GamePhase::Win, LevelConfig::DEFAULT);
            }
            Transition::StillPlaying => {}
        }
    }

    /// Back to the first level for a new run
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.config = LevelConfig::DEFAULT;
    }

    fn enter(&mut self, phase: GamePhase, config: LevelConfig) {
        if phase != self.phase {
            log::info!("Entering {}", phase.as_str());
        }
        self.phase = phase;
        self.config = config;
    }
}
