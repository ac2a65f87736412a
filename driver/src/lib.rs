pub mod convert;
pub mod pipeline;
pub mod settings;
pub mod sink;
pub mod source;

#[derive(Debug)]
pub enum DriverError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Config(analysis::ConfigError),
    Worker(tokio::task::JoinError),
}

impl From<std::io::Error> for DriverError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<analysis::ConfigError> for DriverError {
    fn from(value: analysis::ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<tokio::task::JoinError> for DriverError {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Worker(value)
    }
}

impl core::fmt::Display for DriverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {}", e),
            Self::Json(e) => write!(f, "json: {}", e),
            Self::Config(e) => write!(f, "config: {}", e),
            Self::Worker(e) => write!(f, "analysis worker: {}", e),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Worker(e) => Some(e),
        }
    }
}
