//! Pillar field: spawning, movement and recycling
//!
//! Pillars march toward the player at constant speed and are replaced from
//! the spawn line on the right. The field keeps spawn order (oldest first)
//! and exposes a revision counter so presentation layers can poll for
//! structural changes instead of registering callbacks.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::Tuning;

/// A pillar pair: solid above and below a passable gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    /// Stable for the pillar's lifetime, unique within a run.
    pub id: u32,
    /// Horizontal position of the pillar's center line. Decreases every step.
    pub x: f32,
    /// Vertical center of the gap, fixed at spawn.
    pub gap_center: f32,
    /// Set once the trailing edge clears the player. Guards double scoring.
    pub passed: bool,
}

impl Pillar {
    /// Trailing-edge coordinate used for the score check.
    #[inline]
    pub fn trailing_edge(&self, pillar_width: f32) -> f32 {
        self.x + pillar_width / 2.0
    }

    /// The two solid boxes, spanning from the gap edges to the play bounds.
    pub fn solid_regions(&self, tuning: &Tuning) -> [Aabb; 2] {
        let half_w = tuning.pillar_width / 2.0;
        let half_d = tuning.pillar_depth / 2.0;
        let gap_top = self.gap_center + tuning.gap_height / 2.0;
        let gap_bottom = self.gap_center - tuning.gap_height / 2.0;
        [
            // Above the gap
            Aabb::new(
                Vec3::new(self.x - half_w, gap_top, -half_d),
                Vec3::new(self.x + half_w, tuning.upper_bound, half_d),
            ),
            // Below the gap
            Aabb::new(
                Vec3::new(self.x - half_w, tuning.lower_bound, -half_d),
                Vec3::new(self.x + half_w, gap_bottom, half_d),
            ),
        ]
    }
}

/// Ordered collection of live pillars (spawn order, oldest first).
///
/// The backing vector is private: spawning, movement and recycling all go
/// through the field's own operations so the revision counter stays honest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarField {
    pillars: Vec<Pillar>,
    /// Next pillar ID, reset with the run.
    next_id: u32,
    /// Bumped on structural changes; monotonic across resets.
    revision: u64,
}

impl PillarField {
    pub fn new() -> Self {
        Self {
            pillars: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Read access for rendering and scoring, oldest pillar first.
    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    pub fn len(&self) -> usize {
        self.pillars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pillars.is_empty()
    }

    /// Structural-change counter. Spawns and resets bump it; movement does
    /// not. Observers re-read the pillar slice when the value moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a pillar at the spawn line with a randomly offset gap.
    pub fn spawn<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        let id = self.next_id;
        self.next_id += 1;
        let gap_center = rng.random_range(-tuning.max_gap_offset..=tuning.max_gap_offset);
        self.pillars.push(Pillar {
            id,
            x: tuning.spawn_x,
            gap_center,
            passed: false,
        });
        self.revision += 1;
    }

    /// Move every pillar toward the player.
    pub fn advance(&mut self, dt: f32, speed: f32) {
        for pillar in &mut self.pillars {
            pillar.x -= speed * dt;
        }
    }

    /// Spawn when the field is empty or the newest pillar has traveled one
    /// spawn interval past the spawn line, then drop the oldest pillar if
    /// that pushed the field over the retention cap.
    pub fn maybe_spawn<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) {
        let due = match self.pillars.last() {
            None => true,
            Some(last) => last.x < tuning.spawn_x - tuning.spawn_interval,
        };
        if due {
            self.spawn(tuning, rng);
            if self.pillars.len() > tuning.max_pillars {
                self.pillars.remove(0);
            }
        }
    }

    /// Mark pillars whose trailing edge is strictly behind `player_x`.
    /// Returns how many newly passed, each counted exactly once.
    pub fn mark_passed(&mut self, player_x: f32, pillar_width: f32) -> u32 {
        let mut scored = 0;
        for pillar in &mut self.pillars {
            if !pillar.passed && pillar.trailing_edge(pillar_width) < player_x {
                pillar.passed = true;
                scored += 1;
            }
        }
        scored
    }

    /// Empty the field and restart ID allocation. The revision counter keeps
    /// counting so observers see the reset as a change.
    pub fn reset(&mut self) {
        self.pillars.clear();
        self.next_id = 1;
        self.revision += 1;
    }
}

impl Default for PillarField {
    fn default() -> Self {
        Self::new()
    }
}
