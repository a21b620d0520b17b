//! Per-kind lane slots and spawning
//!
//! Each kind owns a fixed array with one slot per lane. A slot is either
//! empty or holds exactly one live entity positioned at `lane * width`.

use rand::Rng;

use super::entity::{Entity, EntityKind};

/// Fixed-size lane-indexed container for one entity kind
#[derive(Debug, Clone)]
pub struct SlotArray {
    kind: EntityKind,
    slots: Vec<Option<Entity>>,
}

impl SlotArray {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            slots: vec![None; kind.lane_count()],
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn lane_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied lanes
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_free(&self, lane: usize) -> bool {
        matches!(self.slots.get(lane), Some(None))
    }

    pub fn get(&self, lane: usize) -> Option<&Entity> {
        self.slots.get(lane).and_then(Option::as_ref)
    }

    /// Put an entity into a free lane. Returns false if the lane is taken or out of range.
    pub fn insert(&mut self, lane: usize, entity: Entity) -> bool {
        match self.slots.get_mut(lane) {
            Some(slot) if slot.is_none() => {
                *slot = Some(entity);
                true
            }
            _ => false,
        }
    }

    /// Live entities in lane order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.slots.iter_mut().flatten()
    }

    /// Advance every live entity by `dt_ms`
    pub fn update(&mut self, dt_ms: f32) {
        for entity in self.iter_mut() {
            entity.update(dt_ms);
        }
    }

    /// Empty every slot whose entity fell past the board. Returns how many were removed.
    pub fn prune_off_screen(&mut self) -> usize {
        let mut removed = 0;
        for slot in &mut self.slots {
            if slot.as_ref().is_some_and(Entity::is_off_screen) {
                *slot = None;
                removed += 1;
            }
        }
        removed
    }

    /// Empty lanes until at most `quota` are live, highest on the board first.
    /// Returns how many were removed.
    pub fn trim_to(&mut self, quota: usize) -> usize {
        let mut removed = 0;
        while self.live_count() > quota {
            let highest = self
                .slots
                .iter()
                .enumerate()
                .filter_map(|(lane, slot)| slot.as_ref().map(|e| (lane, e.pos.y)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
                .map(|(lane, _)| lane);
            let Some(lane) = highest else {
                break;
            };
            self.slots[lane] = None;
            removed += 1;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Spawn one entity into a uniformly random free lane.
    ///
    /// Lanes are drawn at random until a free one turns up. Returns the lane,
    /// or `None` when every lane is occupied (a quota larger than the lane
    /// count, which `LevelConfig::validate` rejects at setup).
    pub fn spawn_one(&mut self, speed_scale: f32, rng: &mut impl Rng) -> Option<usize> {
        debug_assert!(
            self.live_count() < self.lane_count(),
            "spawn_one called with no free {} lane",
            self.kind
        );
        if self.live_count() >= self.lane_count() {
            log::error!(
                "No free {} lane ({} lanes, all occupied)",
                self.kind,
                self.lane_count()
            );
            return None;
        }

        let lane = loop {
            let candidate = rng.random_range(0..self.lane_count());
            if self.is_free(candidate) {
                break candidate;
            }
        };

        let entity = Entity::spawn(self.kind, lane, speed_scale, rng);
        log::debug!(
            "Spawned {} in lane {} (speed {:.3})",
            self.kind,
            lane,
            entity.speed
        );
        self.slots[lane] = Some(entity);
        Some(lane)
    }

    /// Spawn until `quota` lanes are live. Returns how many were spawned.
    pub fn ensure_quota(&mut self, quota: usize, speed_scale: f32, rng: &mut impl Rng) -> usize {
        let mut spawned = 0;
        while self.live_count() < quota {
            if self.spawn_one(speed_scale, rng).is_none() {
                break;
            }
            spawned += 1;
        }
        spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GAME_HEIGHT;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_is_empty() {
        let slots = SlotArray::new(EntityKind::Enemy);
        assert_eq!(slots.lane_count(), 8);
        assert_eq!(slots.live_count(), 0);
        assert!((0..8).all(|lane| slots.is_free(lane)));
        assert!(!slots.is_free(8));
    }

    #[test]
    fn test_ensure_quota_fills_distinct_lanes() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut slots = SlotArray::new(EntityKind::Enemy);
        assert_eq!(slots.ensure_quota(4, 1.0, &mut rng), 4);
        assert_eq!(slots.live_count(), 4);

        for (lane, entity) in slots.slots.iter().enumerate() {
            if let Some(e) = entity {
                assert_eq!(e.lane(), lane);
                assert_eq!(e.pos.x, lane as f32 * 125.0);
                assert_eq!(e.pos.y, -125.0);
            }
        }

        // Already at quota: nothing to do
        assert_eq!(slots.ensure_quota(4, 1.0, &mut rng), 0);
        // Lower quota never removes entities
        assert_eq!(slots.ensure_quota(2, 1.0, &mut rng), 0);
        assert_eq!(slots.live_count(), 4);
    }

    #[test]
    fn test_boss_quota_tightest_case() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut slots = SlotArray::new(EntityKind::Boss);
        assert_eq!(slots.ensure_quota(2, 1.0, &mut rng), 2);
        let xs: Vec<f32> = slots.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs.len(), 2);
        assert!(xs.iter().all(|x| [0.0, 333.0, 666.0].contains(x)));
        assert_ne!(xs[0], xs[1]);
    }

    #[test]
    fn test_fill_every_lane() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut slots = SlotArray::new(EntityKind::Boss);
        assert_eq!(slots.ensure_quota(3, 1.0, &mut rng), 3);
        assert!((0..3).all(|lane| !slots.is_free(lane)));
    }

    #[test]
    fn test_speed_scale_applied() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut slots = SlotArray::new(EntityKind::Enemy);
        slots.ensure_quota(8, 2.0, &mut rng);
        assert!(slots.iter().all(|e| e.speed >= 0.5 && e.speed <= 0.8));
    }

    #[test]
    fn test_prune_only_off_screen() {
        let mut slots = SlotArray::new(EntityKind::Enemy);
        assert!(slots.insert(0, Entity::new(EntityKind::Enemy, 0, 0.3)));
        assert!(slots.insert(3, Entity::new(EntityKind::Enemy, 3, 0.3)));
        assert!(!slots.insert(3, Entity::new(EntityKind::Enemy, 3, 0.3)));

        slots.iter_mut().find(|e| e.lane() == 3).unwrap().pos.y = GAME_HEIGHT + 1.0;
        assert_eq!(slots.prune_off_screen(), 1);
        assert!(slots.is_free(3));
        assert!(!slots.is_free(0));
        assert_eq!(slots.live_count(), 1);
    }

    #[test]
    fn test_trim_drops_highest_first() {
        let mut slots = SlotArray::new(EntityKind::Enemy);
        for (lane, y) in [(1, 300.0), (4, -50.0), (6, 120.0)] {
            let mut e = Entity::new(EntityKind::Enemy, lane, 0.3);
            e.pos.y = y;
            assert!(slots.insert(lane, e));
        }

        assert_eq!(slots.trim_to(3), 0);
        assert_eq!(slots.trim_to(1), 2);
        assert_eq!(slots.live_count(), 1);
        assert!(!slots.is_free(1));
        assert_eq!(slots.trim_to(0), 1);
        assert_eq!(slots.live_count(), 0);
    }

    #[test]
    fn test_update_moves_all() {
        let mut slots = SlotArray::new(EntityKind::Friend);
        slots.insert(1, Entity::new(EntityKind::Friend, 1, 0.5));
        slots.insert(2, Entity::new(EntityKind::Friend, 2, 0.6));
        slots.update(10.0);
        assert!((slots.get(1).unwrap().pos.y - (-120.0)).abs() < 1e-4);
        assert!((slots.get(2).unwrap().pos.y - (-119.0)).abs() < 1e-4);
    }
}
