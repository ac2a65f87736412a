/// A snapshot arrived with a timestamp that is not newer than the latest one in the history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfOrderError {
    pub captured_at: f64,
    pub latest: f64,
}

impl core::fmt::Display for OutOfOrderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "snapshot at {:.3}s is not newer than the latest snapshot at {:.3}s",
            self.captured_at, self.latest
        )
    }
}

impl std::error::Error for OutOfOrderError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidDuration { field: &'static str, value: f64 },
    HorizonShorterThanWindow { retention_horizon: f64, trade_window: f64 },
    EmptyTeam,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDuration { field, value } => {
                write!(f, "'{}' must be a positive number of seconds, got {}", field, value)
            }
            Self::HorizonShorterThanWindow {
                retention_horizon,
                trade_window,
            } => write!(
                f,
                "retention horizon ({}s) must cover the trade window ({}s)",
                retention_horizon, trade_window
            ),
            Self::EmptyTeam => write!(f, "team size must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to interpret a piece of recognized HUD text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudParseError {
    MalformedTimer(String),
    MalformedScore(String),
    /// The round info strip did not yield exactly three readings.
    UnexpectedReadings(usize),
}

impl core::fmt::Display for HudParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedTimer(raw) => write!(f, "unreadable round timer {:?}", raw),
            Self::MalformedScore(raw) => write!(f, "unreadable score {:?}", raw),
            Self::UnexpectedReadings(n) => {
                write!(f, "expected 3 round info readings, got {}", n)
            }
        }
    }
}

impl std::error::Error for HudParseError {}
