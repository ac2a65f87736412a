//! Filling in fields the recognition layer failed to deliver.
//!
//! Missing alive counts and death status are taken from the last complete
//! reading, but only for a bounded run of samples. After that the data is
//! considered stale and evaluation pauses until a complete sample arrives.

use crate::{Observation, RoundPhase};

#[derive(Debug, Clone, Default)]
pub struct CarryForward {
    ally_alive: Option<u8>,
    enemy_alive: Option<u8>,
    self_dead: Option<bool>,
    degraded_run: u32,
}

/// Observation fields after degradation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filled {
    pub ally_alive: u8,
    pub enemy_alive: u8,
    pub self_dead: bool,
    /// At least one field was missing and had to be carried forward.
    pub degraded: bool,
    /// Carrying forward is no longer allowed, the sample must not be evaluated.
    pub exhausted: bool,
    /// Both alive counts came from this sample.
    pub counts_observed: bool,
    /// No field had to fall back to a default.
    pub known: bool,
}

impl CarryForward {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn degraded_run(&self) -> u32 {
        self.degraded_run
    }

    pub fn fill(
        &mut self,
        observation: &Observation,
        team_size: u8,
        max_carry_forward: u32,
    ) -> Filled {
        let ally = observation.ally_alive.filter(|n| *n <= team_size);
        let enemy = observation.enemy_alive.filter(|n| *n <= team_size);

        let counts_observed = ally.is_some() && enemy.is_some();
        let degraded = ally.is_none()
            || enemy.is_none()
            || observation.self_dead.is_none()
            || observation.round_phase_hint == RoundPhase::Unknown;

        if degraded {
            self.degraded_run += 1;
        } else {
            self.degraded_run = 0;
        }

        let ally_alive = ally.or(self.ally_alive);
        let enemy_alive = enemy.or(self.enemy_alive);
        let self_dead = observation.self_dead.or(self.self_dead);

        if let Some(ally) = ally {
            self.ally_alive = Some(ally);
        }
        if let Some(enemy) = enemy {
            self.enemy_alive = Some(enemy);
        }
        if let Some(dead) = observation.self_dead {
            self.self_dead = Some(dead);
        }

        let (ally_alive, enemy_alive, self_dead) = match (ally_alive, enemy_alive, self_dead) {
            (Some(a), Some(e), Some(d)) => (a, e, d),
            (a, e, d) => {
                // Nothing to carry forward yet.
                return Filled {
                    ally_alive: a.unwrap_or(team_size),
                    enemy_alive: e.unwrap_or(team_size),
                    self_dead: d.unwrap_or(false),
                    degraded: true,
                    exhausted: true,
                    counts_observed,
                    known: false,
                };
            }
        };

        Filled {
            ally_alive,
            enemy_alive,
            self_dead,
            degraded,
            exhausted: self.degraded_run > max_carry_forward,
            counts_observed,
            known: true,
        }
    }
}
