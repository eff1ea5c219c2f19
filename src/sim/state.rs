//! Game state and lifecycle
//!
//! The authoritative state of a run: player position, score, phase and the
//! pillar field. Mutation happens only through `step` and the two player
//! actions (flap, restart); presentation reads snapshots.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacles::PillarField;
use crate::tuning::Tuning;

/// Lifecycle phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first flap; the simulation does not advance
    Ready,
    /// Active play
    Running,
    /// Terminal. Flaps are ignored; only restart leaves this phase
    Dead,
}

/// Scalar view of the state handed to presentation each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player's vertical position
    pub position: f32,
    /// Pillars cleared this run
    pub score: u32,
    /// False only before the first flap
    pub started: bool,
    /// True while the simulation advances
    pub running: bool,
    /// True after a collision or bounds exit
    pub dead: bool,
}

/// Complete game state (deterministic given seed, tuning and input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Gap sampling stream. One stream per session; restart does not reseed,
    /// so a seed plus an input script reproduces every run in a session.
    pub(crate) rng: Pcg32,
    /// Constants table, fixed at construction
    pub tuning: Tuning,
    /// Player's vertical position
    pub position: f32,
    /// Vertical velocity. Integration detail, deliberately absent from
    /// `Snapshot`; flap overwrites it, gravity accumulates into it.
    pub(crate) velocity: f32,
    /// Pillars cleared this run
    pub score: u32,
    /// Lifecycle phase
    pub phase: Phase,
    /// Live pillars, oldest first
    pub pillars: PillarField,
}

impl GameState {
    /// Create a fresh state at the ready position.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let position = tuning.start_height;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            position,
            velocity: 0.0,
            score: 0,
            phase: Phase::Ready,
            pillars: PillarField::new(),
        }
    }

    /// Set the vertical velocity to the flap impulse.
    ///
    /// The first flap also starts the run. While dead this is a no-op.
    pub fn flap(&mut self) {
        match self.phase {
            Phase::Ready => {
                self.phase = Phase::Running;
                self.velocity = self.tuning.flap_impulse;
            }
            Phase::Running => {
                self.velocity = self.tuning.flap_impulse;
            }
            Phase::Dead => {}
        }
    }

    /// Return to the ready position with an empty pillar field.
    ///
    /// Does not start the run; the next flap does. The RNG stream carries
    /// on, so one seed covers a whole session of runs.
    pub fn restart(&mut self) {
        self.position = self.tuning.start_height;
        self.velocity = 0.0;
        self.score = 0;
        self.phase = Phase::Ready;
        self.pillars.reset();
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Ready
    }

    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn dead(&self) -> bool {
        self.phase == Phase::Dead
    }

    /// Scalar view for presentation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            score: self.score,
            started: self.started(),
            running: self.running(),
            dead: self.dead(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_waits_at_start_height() {
        let tuning = Tuning::default();
        let state = GameState::new(1, tuning.clone());

        assert_eq!(state.position, tuning.start_height);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, Phase::Ready);
        assert!(!state.started());
        assert!(state.pillars.is_empty());
    }

    #[test]
    fn test_first_flap_starts_and_applies_impulse() {
        let mut state = GameState::new(1, Tuning::default());
        state.flap();

        assert_eq!(state.phase, Phase::Running);
        assert!(state.started());
        assert_eq!(state.velocity, state.tuning.flap_impulse);
    }

    #[test]
    fn test_flap_overwrites_velocity() {
        let mut state = GameState::new(1, Tuning::default());
        state.flap();
        state.velocity = -5.0;
        state.flap();
        // Instantaneous set, not additive
        assert_eq!(state.velocity, state.tuning.flap_impulse);
    }

    #[test]
    fn test_flap_while_dead_is_ignored() {
        let mut state = GameState::new(1, Tuning::default());
        state.flap();
        state.phase = Phase::Dead;
        state.velocity = -3.0;
        state.flap();

        assert_eq!(state.phase, Phase::Dead);
        assert_eq!(state.velocity, -3.0);
    }

    #[test]
    fn test_restart_restores_the_initial_snapshot() {
        let mut state = GameState::new(9, Tuning::default());
        state.flap();
        state.position = -4.0;
        state.score = 7;
        state.phase = Phase::Dead;
        state.pillars.spawn(&state.tuning, &mut state.rng);

        state.restart();

        let fresh = GameState::new(9, Tuning::default());
        assert_eq!(state.snapshot(), fresh.snapshot());
        assert!(state.pillars.is_empty());
        assert_eq!(state.velocity, 0.0);
    }

    #[test]
    fn test_restart_does_not_reseed_the_gap_stream() {
        let tuning = Tuning::default();
        let mut session = GameState::new(77, tuning.clone());
        let mut uninterrupted = GameState::new(77, tuning.clone());

        // First run draws one gap, then the session restarts
        session.pillars.spawn(&tuning, &mut session.rng);
        session.restart();
        session.pillars.spawn(&tuning, &mut session.rng);

        // The second draw continues the stream rather than repeating it
        uninterrupted.pillars.spawn(&tuning, &mut uninterrupted.rng);
        let first = uninterrupted.pillars.pillars()[0].gap_center;
        uninterrupted.pillars.spawn(&tuning, &mut uninterrupted.rng);
        let second = uninterrupted.pillars.pillars()[1].gap_center;

        assert_eq!(session.pillars.pillars()[0].gap_center, second);
        assert_ne!(first, second);
    }

    #[test]
    fn test_exactly_one_lifecycle_flag_at_a_time() {
        let mut state = GameState::new(1, Tuning::default());
        for phase in [Phase::Ready, Phase::Running, Phase::Dead] {
            state.phase = phase;
            let snap = state.snapshot();
            let not_started = !snap.started;
            let flags = [not_started, snap.running, snap.dead];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1, "{phase:?}");
            // dead implies not running, running implies started
            assert!(!snap.dead || !snap.running);
            assert!(!snap.running || snap.started);
        }
    }
}
