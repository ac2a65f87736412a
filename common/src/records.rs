//! Line formats of recordings and audit logs.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseHint {
    Pre,
    Mid,
    Post,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KillFeedRecord {
    pub killer: String,
    pub victim: String,
    pub victim_is_ally: bool,
}

/// Structured recognition output for one frame.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObservationRecord {
    pub captured_at: f64,
    #[serde(default)]
    pub self_dead: Option<bool>,
    #[serde(default)]
    pub ally_alive: Option<u8>,
    #[serde(default)]
    pub enemy_alive: Option<u8>,
    #[serde(default)]
    pub round_timer_seconds: Option<u16>,
    #[serde(default)]
    pub round_phase: PhaseHint,
    #[serde(default)]
    pub round_ended: bool,
    #[serde(default)]
    pub kill_feed: Vec<KillFeedRecord>,
}

/// Raw recognized HUD text for one frame.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HudRecord {
    pub captured_at: f64,
    #[serde(default)]
    pub banner: Option<Vec<String>>,
    #[serde(default)]
    pub round_info: Option<Vec<String>>,
    #[serde(default)]
    pub death_notice: Option<Vec<String>>,
    #[serde(default)]
    pub ally_icons: Option<Vec<String>>,
    #[serde(default)]
    pub enemy_icons: Option<Vec<String>>,
    #[serde(default)]
    pub kill_feed: Vec<KillFeedRecord>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputRecord {
    Observation(ObservationRecord),
    Hud(HudRecord),
    ResetRound,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverheatRecord {
    pub session: crate::SessionId,
    pub logged_at: chrono::DateTime<chrono::Utc>,
    pub died_at: f64,
    pub ally_alive_at_death: u8,
    pub enemy_alive_at_death: u8,
    pub trade_window_closes_at: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatsRecord {
    pub session: crate::SessionId,
    pub total_deaths: u64,
    pub deaths_with_advantage: u64,
    pub trades: u64,
    pub overheats: u64,
    pub aborted: u64,
    pub concurrent_deaths: u64,
    pub dropped_samples: u64,
    pub degraded_samples: u64,
}
