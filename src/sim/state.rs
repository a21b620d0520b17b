//! Game state and core simulation types
//!
//! Created once at startup and reused across restarts.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entity::{EntityKind, Player};
use super::level::{ConfigError, GamePhase, LevelStateMachine, Song};
use super::spawner::SlotArray;

/// HUD banner shown over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Shows the score the run ended with
    GameOver { score: u64 },
    Bonus,
    /// Shows the score that triggered the level change
    NextLevel { score: u64 },
    Boss,
    Win { score: u64 },
}

impl Banner {
    /// Terminal banners stay up until the run restarts
    pub fn is_terminal(&self) -> bool {
        matches!(self, Banner::GameOver { .. } | Banner::Win { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    /// Score for the current run
    pub score: u64,
    /// Timestamp of the previous frame (ms). `None` until the first frame of a run.
    pub last_frame_ms: Option<f64>,
    /// Frames advanced since startup
    pub frames: u64,
    /// Phase, quotas and song
    pub level: LevelStateMachine,
    pub enemies: SlotArray,
    pub friends: SlotArray,
    pub bosses: SlotArray,
    pub player: Player,
    /// Whether the frame loop should keep scheduling frames
    pub running: bool,
    /// Banner currently on screen
    pub banner: Option<Banner>,
    /// Time left for a non-terminal banner (ms)
    pub banner_ms: f32,
}

impl GameState {
    /// Create a new game state with the given seed and fill the board to quota
    pub fn new(seed: u64) -> Result<Self, ConfigError> {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            last_frame_ms: None,
            frames: 0,
            level: LevelStateMachine::new()?,
            enemies: SlotArray::new(EntityKind::Enemy),
            friends: SlotArray::new(EntityKind::Friend),
            bosses: SlotArray::new(EntityKind::Boss),
            player: Player::default(),
            running: true,
            banner: None,
            banner_ms: 0.0,
        };
        state.ensure_quotas();
        Ok(state)
    }

    pub fn phase(&self) -> GamePhase {
        self.level.phase()
    }

    pub fn song(&self) -> Song {
        self.level.config().song
    }

    pub fn slots(&self, kind: EntityKind) -> &SlotArray {
        match kind {
            EntityKind::Enemy => &self.enemies,
            EntityKind::Friend => &self.friends,
            EntityKind::Boss => &self.bosses,
        }
    }

    /// Bring every kind to exactly the current phase's quota, dropping extras
    /// when a phase lowers it and spawning when below
    pub fn ensure_quotas(&mut self) {
        let config = *self.level.config();
        for kind in EntityKind::ALL {
            let slots = match kind {
                EntityKind::Enemy => &mut self.enemies,
                EntityKind::Friend => &mut self.friends,
                EntityKind::Boss => &mut self.bosses,
            };
            let dropped = slots.trim_to(config.quota(kind));
            if dropped > 0 {
                log::debug!("Dropped {} {} over quota", dropped, kind);
            }
            slots.ensure_quota(config.quota(kind), config.speed_scale(kind), &mut self.rng);
        }
    }

    /// Advance every falling entity by `dt_ms`
    pub fn update_entities(&mut self, dt_ms: f32) {
        self.enemies.update(dt_ms);
        self.friends.update(dt_ms);
        self.bosses.update(dt_ms);
    }

    /// Drop entities that fell off the board, then replenish to quota
    pub fn prune_and_respawn(&mut self) {
        let removed = self.enemies.prune_off_screen()
            + self.friends.prune_off_screen()
            + self.bosses.prune_off_screen();
        if removed > 0 {
            log::trace!("Pruned {} entities", removed);
        }
        self.ensure_quotas();
    }

    pub fn show_banner(&mut self, banner: Banner, duration_ms: f32) {
        self.banner = Some(banner);
        self.banner_ms = if banner.is_terminal() {
            f32::INFINITY
        } else {
            duration_ms
        };
    }

    /// Count down the current banner, clearing it when it expires
    pub fn tick_banner(&mut self, dt_ms: f32) {
        if self.banner.is_some() {
            self.banner_ms -= dt_ms;
            if self.banner_ms <= 0.0 {
                self.banner = None;
                self.banner_ms = 0.0;
            }
        }
    }

    /// Start a fresh run: empty board, score 0, first level, player at start
    pub fn restart(&mut self) {
        self.score = 0;
        self.last_frame_ms = None;
        self.level.reset();
        self.enemies.clear();
        self.friends.clear();
        self.bosses.clear();
        self.player = Player::default();
        self.banner = None;
        self.banner_ms = 0.0;
        self.running = true;
        self.ensure_quotas();
        log::info!("Run restarted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GAME_HEIGHT;
    use crate::sim::level::{LevelConfig, Transition};

    #[test]
    fn test_new_fills_default_quotas() {
        let state = GameState::new(12345).unwrap();
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.enemies.live_count(), 2);
        assert_eq!(state.friends.live_count(), 1);
        assert_eq!(state.bosses.live_count(), 0);
        assert_eq!(state.score, 0);
        assert!(state.running);
        assert_eq!(state.song(), Song::Main);
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = GameState::new(99).unwrap();
        let b = GameState::new(99).unwrap();
        let lanes = |s: &GameState| s.enemies.iter().map(|e| e.lane()).collect::<Vec<_>>();
        assert_eq!(lanes(&a), lanes(&b));
    }

    #[test]
    fn test_prune_and_respawn_keeps_quota() {
        let mut state = GameState::new(1).unwrap();
        for e in state.enemies.iter_mut() {
            e.pos.y = GAME_HEIGHT + 10.0;
        }
        state.prune_and_respawn();
        assert_eq!(state.enemies.live_count(), 2);
        assert!(state.enemies.iter().all(|e| e.pos.y < 0.0));
    }

    #[test]
    fn test_lower_quota_drops_extras() {
        let mut state = GameState::new(3).unwrap();
        state.score = 320_000;
        state.level.apply(Transition::LevelThree, &mut state.score);
        state.ensure_quotas();
        assert_eq!(state.enemies.live_count(), 4);

        state.level.apply(Transition::BossLevel, &mut state.score);
        state.ensure_quotas();
        assert_eq!(state.enemies.live_count(), 0);
        assert_eq!(state.bosses.live_count(), 2);
        assert_eq!(state.friends.live_count(), 1);
    }

    #[test]
    fn test_banner_countdown() {
        let mut state = GameState::new(1).unwrap();
        state.show_banner(Banner::Bonus, 100.0);
        state.tick_banner(60.0);
        assert_eq!(state.banner, Some(Banner::Bonus));
        state.tick_banner(60.0);
        assert_eq!(state.banner, None);

        state.show_banner(Banner::GameOver { score: 10 }, 100.0);
        state.tick_banner(1e9);
        assert!(state.banner.is_some());
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = GameState::new(5).unwrap();
        state.score = 400_000;
        state.level.apply(Transition::BossLevel, &mut state.score);
        state.ensure_quotas();
        assert_eq!(state.bosses.live_count(), 2);
        state.player.pos.x = 0.0;
        state.running = false;

        state.restart();
        assert_eq!(state.score, 0);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(*state.level.config(), LevelConfig::DEFAULT);
        assert_eq!(state.bosses.live_count(), 0);
        assert_eq!(state.enemies.live_count(), 2);
        assert_eq!(state.player, Player::default());
        assert!(state.running);
        assert!(state.last_frame_ms.is_none());
    }
}
