/// Tunables of the analyzer, injected at construction.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds after a qualifying death during which an enemy death counts as a trade.
    pub trade_window: f64,
    /// Seconds of history kept behind the newest snapshot.
    pub retention_horizon: f64,
    /// Consecutive samples a new phase must be seen on before it is adopted.
    pub hysteresis_depth: u32,
    pub team_size: u8,
    /// Consecutive incomplete samples that may be filled from the last known values.
    pub max_carry_forward: u32,
    /// Name of the observed player as it appears in the kill feed.
    pub player_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trade_window: 3.0,
            retention_horizon: 15.0,
            hysteresis_depth: 2,
            team_size: 5,
            max_carry_forward: 3,
            player_name: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), crate::ConfigError> {
        if !self.trade_window.is_finite() || self.trade_window <= 0.0 {
            return Err(crate::ConfigError::InvalidDuration {
                field: "trade_window",
                value: self.trade_window,
            });
        }
        if !self.retention_horizon.is_finite() || self.retention_horizon <= 0.0 {
            return Err(crate::ConfigError::InvalidDuration {
                field: "retention_horizon",
                value: self.retention_horizon,
            });
        }
        // The trade scan reads the whole window back out of the history.
        if self.retention_horizon < self.trade_window {
            return Err(crate::ConfigError::HorizonShorterThanWindow {
                retention_horizon: self.retention_horizon,
                trade_window: self.trade_window,
            });
        }
        if self.team_size == 0 {
            return Err(crate::ConfigError::EmptyTeam);
        }

        Ok(())
    }
}
