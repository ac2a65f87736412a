use crate::killfeed::KillFeedLine;

/// Coarse lifecycle state of a round.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    Pre,
    Mid,
    Post,
    #[default]
    Unknown,
}

impl RoundPhase {
    pub fn is_round_over(&self) -> bool {
        matches!(self, Self::Pre | Self::Post)
    }
}

/// What the recognition layer reported for a single sampled frame.
///
/// Every field except the timestamp may be missing or wrong, the analyzer
/// decides how to degrade (see [`crate::carry`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Observation {
    pub captured_at: f64,
    pub self_dead: Option<bool>,
    pub ally_alive: Option<u8>,
    pub enemy_alive: Option<u8>,
    pub round_timer_seconds: Option<u16>,
    pub round_phase_hint: RoundPhase,
    /// A round result banner was seen on this frame.
    pub round_ended: bool,
    /// Kill-feed lines visible on this frame, oldest first.
    pub kill_feed: Vec<KillFeedLine>,
}

impl Observation {
    pub fn new(captured_at: f64) -> Self {
        Self {
            captured_at,
            ..Default::default()
        }
    }

    pub fn with_counts(mut self, ally_alive: u8, enemy_alive: u8) -> Self {
        self.ally_alive = Some(ally_alive);
        self.enemy_alive = Some(enemy_alive);
        self
    }

    pub fn with_ally_alive(mut self, ally_alive: u8) -> Self {
        self.ally_alive = Some(ally_alive);
        self
    }

    pub fn with_self_dead(mut self, self_dead: bool) -> Self {
        self.self_dead = Some(self_dead);
        self
    }

    pub fn with_phase(mut self, phase: RoundPhase) -> Self {
        self.round_phase_hint = phase;
        self
    }

    pub fn with_timer(mut self, seconds: u16) -> Self {
        self.round_timer_seconds = Some(seconds);
        self
    }

    pub fn with_round_ended(mut self) -> Self {
        self.round_ended = true;
        self
    }

    pub fn with_kill_feed(mut self, lines: Vec<KillFeedLine>) -> Self {
        self.kill_feed = lines;
        self
    }

    /// Either an explicit result banner or the round timer running out.
    pub fn signals_round_end(&self) -> bool {
        self.round_ended || self.round_timer_seconds == Some(0)
    }
}

/// One timestamped, fully populated observation as stored in the history.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Snapshot {
    pub captured_at: f64,
    pub ally_alive: u8,
    pub enemy_alive: u8,
    pub self_dead: bool,
    pub round_timer_seconds: Option<u16>,
    pub round_phase: RoundPhase,
    /// Death/advantage evaluation ran on this snapshot.
    pub evaluable: bool,
    /// Both alive counts were read on this sample rather than carried forward.
    pub counts_observed: bool,
    /// Every field is backed by a reading, this sample's or a carried one.
    /// `false` when defaults had to stand in because nothing was known yet.
    pub known: bool,
}
