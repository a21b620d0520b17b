//! Property tests for the simulation

use desert_drop::consts::*;
use desert_drop::sim::{
    Direction, Entity, EntityKind, GameState, InputAction, Player, SlotArray, advance_frame,
    handle_input, lane_hit,
};
use proptest::prelude::*;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Left),
        Just(Direction::Right),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

fn assert_lanes_consistent(slots: &SlotArray) {
    assert!(slots.live_count() <= slots.lane_count());
    for lane in 0..slots.lane_count() {
        if let Some(entity) = slots.get(lane) {
            assert_eq!(entity.kind, slots.kind());
            assert_eq!(entity.lane(), lane, "{} stored in the wrong slot", entity.kind);
        }
    }
}

proptest! {
    #[test]
    fn player_never_leaves_board(moves in prop::collection::vec(direction(), 0..200)) {
        let mut player = Player::default();
        for direction in moves {
            player.step(direction);
            prop_assert!(player.pos.x >= 0.0 && player.pos.x <= Player::MAX_X);
            prop_assert!(player.pos.y >= 0.0 && player.pos.y <= Player::MAX_Y);
            // Always aligned to the lane grid
            prop_assert_eq!(player.pos.x % PLAYER_WIDTH, 0.0);
        }
    }

    #[test]
    fn lanes_stay_unique_and_filled(
        seed in any::<u64>(),
        start_score in 0u64..1_100_000,
        boss_at in prop::option::of(0usize..300),
        deltas in prop::collection::vec(0.0f64..120.0, 1..300),
        moves in prop::collection::vec(prop::option::of(direction()), 300),
    ) {
        let mut state = GameState::new(seed).unwrap();
        // Start anywhere on the score ladder so every phase gets exercised
        state.score = start_score;
        let mut now = 0.0;

        for (frame, (delta, step)) in deltas.into_iter().zip(moves).enumerate() {
            if let Some(direction) = step {
                prop_assert!(!handle_input(&mut state, InputAction::Move(direction)));
            }
            if boss_at == Some(frame) {
                handle_input(&mut state, InputAction::EnterBoss);
            }

            now += delta;
            let Some(outcome) = advance_frame(&mut state, now) else {
                break;
            };

            for kind in EntityKind::ALL {
                assert_lanes_consistent(state.slots(kind));
            }

            let config = state.level.config();
            for kind in EntityKind::ALL {
                prop_assert_eq!(
                    state.slots(kind).live_count(),
                    config.quota(kind),
                    "{} in {}",
                    kind,
                    state.phase().as_str()
                );
            }

            if !outcome.rearm {
                prop_assert!(!state.running);
                break;
            }
        }
    }

    #[test]
    fn lane_hit_matches_edge_rule(
        lane in 0usize..8,
        y in -200.0f32..800.0,
        moves in prop::collection::vec(direction(), 0..20),
    ) {
        let mut player = Player::default();
        for direction in moves {
            player.step(direction);
        }
        let mut drop = Entity::new(EntityKind::Enemy, lane, 0.3);
        drop.pos.y = y;

        let bottom = y + ENEMY_HEIGHT;
        let expected = drop.pos.x == player.pos.x
            && bottom > player.pos.y
            && bottom < player.pos.y + PLAYER_HEIGHT;
        prop_assert_eq!(lane_hit(&drop, &player), expected);
    }
}
