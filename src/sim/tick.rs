//! Per-frame game loop step
//!
//! Advances time, moves entities, replenishes the board, evaluates exactly
//! one transition, and reports whether the loop should keep running.

use super::collision::{any_boss_hit, any_lane_hit};
use super::entity::Direction;
use super::level::{FrameChecks, GamePhase, LevelStateMachine, Transition};
use super::state::{Banner, GameState};
use crate::consts::BANNER_DURATION_MS;

/// Discrete input commands from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Step the player one lane or row
    Move(Direction),
    /// Restart after a game over or win
    Resume,
    /// Skip straight to the boss level
    EnterBoss,
}

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    /// The one transition that fired this frame
    pub transition: Transition,
    /// Milliseconds since the previous frame
    pub delta_ms: f32,
    /// Whether the host should schedule another frame
    pub rearm: bool,
}

/// Advance the game by one frame at timestamp `now_ms`.
///
/// Returns `None` if the loop is halted (after a game over or win).
pub fn advance_frame(state: &mut GameState, now_ms: f64) -> Option<FrameOutcome> {
    if !state.running {
        log::debug!("Frame requested while halted");
        return None;
    }

    // Score counts whole milliseconds crossed, so fractional frame times add up exactly
    let (delta_ms, elapsed_ms) = match state.last_frame_ms {
        Some(last) => (
            (now_ms - last).max(0.0),
            (now_ms.floor() - last.floor()).max(0.0),
        ),
        None => (0.0, 0.0),
    };
    let delta_ms = delta_ms as f32;
    state.last_frame_ms = Some(now_ms);
    state.frames += 1;

    // Surviving scores points
    state.score += elapsed_ms as u64;

    state.update_entities(delta_ms);
    state.tick_banner(delta_ms);
    state.prune_and_respawn();

    let checks = FrameChecks {
        score: state.score,
        enemy_hit: any_lane_hit(state.enemies.iter(), &state.player),
        friend_hit: any_lane_hit(state.friends.iter(), &state.player),
        boss_hit: any_boss_hit(state.bosses.iter(), &state.player),
    };
    let transition = LevelStateMachine::evaluate(&checks);

    let score_before = state.score;
    state.level.apply(transition, &mut state.score);
    // A new phase takes effect on the board immediately
    state.ensure_quotas();

    match transition {
        Transition::GameOver => state.show_banner(
            Banner::GameOver {
                score: score_before,
            },
            BANNER_DURATION_MS,
        ),
        Transition::FriendBonus => state.show_banner(Banner::Bonus, BANNER_DURATION_MS),
        Transition::LevelTwo | Transition::LevelThree => state.show_banner(
            Banner::NextLevel {
                score: score_before,
            },
            BANNER_DURATION_MS,
        ),
        Transition::BossLevel => state.show_banner(Banner::Boss, BANNER_DURATION_MS),
        Transition::Win => state.show_banner(
            Banner::Win {
                score: score_before,
            },
            BANNER_DURATION_MS,
        ),
        Transition::StillPlaying => {}
    }

    state.running = transition.rearms();

    Some(FrameOutcome {
        transition,
        delta_ms,
        rearm: state.running,
    })
}

/// Apply one input action.
///
/// Returns true when the loop was halted and must be scheduled again.
pub fn handle_input(state: &mut GameState, action: InputAction) -> bool {
    match action {
        InputAction::Move(direction) => {
            state.player.step(direction);
            false
        }
        InputAction::Resume => {
            if state.running {
                return false;
            }
            state.restart();
            true
        }
        InputAction::EnterBoss => {
            let was_halted = !state.running;
            if state.phase().is_terminal() {
                state.restart();
            }
            if state.phase() != GamePhase::BossLevel {
                state.level.apply(Transition::BossLevel, &mut state.score);
                state.ensure_quotas();
                state.show_banner(Banner::Boss, BANNER_DURATION_MS);
            }
            state.running = true;
            was_halted
        }
    }
}
