/// Command line overrides for [`analysis::Config`].
#[derive(Debug, Default, Clone, clap::Args)]
pub struct Overrides {
    /// Seconds after a death in which an enemy death counts as a trade
    #[arg(long)]
    pub trade_window: Option<f64>,
    /// Seconds of history kept
    #[arg(long)]
    pub retention_horizon: Option<f64>,
    /// Consecutive samples needed before a new round phase is adopted
    #[arg(long)]
    pub hysteresis_depth: Option<u32>,
    #[arg(long)]
    pub team_size: Option<u8>,
    /// Consecutive incomplete samples filled from the last known values
    #[arg(long)]
    pub max_carry_forward: Option<u32>,
    /// Observed player's name as shown in the kill feed
    #[arg(long)]
    pub player_name: Option<String>,
}

impl Overrides {
    pub fn apply(&self, config: &mut analysis::Config) {
        if let Some(v) = self.trade_window {
            config.trade_window = v;
        }
        if let Some(v) = self.retention_horizon {
            config.retention_horizon = v;
        }
        if let Some(v) = self.hysteresis_depth {
            config.hysteresis_depth = v;
        }
        if let Some(v) = self.team_size {
            config.team_size = v;
        }
        if let Some(v) = self.max_carry_forward {
            config.max_carry_forward = v;
        }
        if let Some(v) = self.player_name.as_ref() {
            config.player_name = Some(v.clone());
        }
    }
}

/// Reads a JSON config file, missing fields keep their defaults.
pub fn load_config(path: Option<&std::path::Path>) -> Result<analysis::Config, crate::DriverError> {
    let path = match path {
        Some(p) => p,
        None => return Ok(analysis::Config::default()),
    };

    let raw = std::fs::read_to_string(path)?;
    let config: analysis::Config = serde_json::from_str(&raw)?;
    tracing::debug!(?config, "Loaded config from {:?}", path);

    Ok(config)
}
