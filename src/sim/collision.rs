//! Player-vs-entity hit tests
//!
//! Drops and suns share the player's lane grid, so they hit on exact lane
//! equality. The boss is three lanes wide and does not line up with the
//! player grid; it hits by horizontal band instead.

use super::entity::{Entity, Player};
use crate::consts::{BOSS_HITBOX_INSET, BOSS_WIDTH, PLAYER_HEIGHT};

/// True if `edge` lies strictly inside the player's vertical span
#[inline]
fn within_player_rows(edge: f32, player: &Player) -> bool {
    edge > player.pos.y && edge < player.pos.y + PLAYER_HEIGHT
}

/// Same lane, and the entity's falling edge is inside the player's box
pub fn lane_hit(entity: &Entity, player: &Player) -> bool {
    entity.pos.x == player.pos.x && within_player_rows(entity.bottom(), player)
}

/// Which third of the board an x coordinate falls in
#[inline]
fn band(x: f32) -> u8 {
    if x < BOSS_WIDTH {
        0
    } else if x < 2.0 * BOSS_WIDTH {
        1
    } else {
        2
    }
}

/// Same band, and the boss's inset falling edge is inside the player's box
pub fn boss_hit(boss: &Entity, player: &Player) -> bool {
    band(boss.pos.x) == band(player.pos.x)
        && within_player_rows(boss.bottom() - BOSS_HITBOX_INSET, player)
}

/// True if any of `entities` hits the player under the lane rule
pub fn any_lane_hit<'a>(entities: impl IntoIterator<Item = &'a Entity>, player: &Player) -> bool {
    entities.into_iter().any(|e| lane_hit(e, player))
}

/// True if any of `bosses` hits the player under the band rule
pub fn any_boss_hit<'a>(bosses: impl IntoIterator<Item = &'a Entity>, player: &Player) -> bool {
    bosses.into_iter().any(|b| boss_hit(b, player))
}
