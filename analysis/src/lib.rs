//! Detection of "overheats": the observed player dying while their team held a
//! man advantage, without an enemy dying within the trade window afterwards.
//!
//! Feed every sampled [`Observation`] into [`OverheatAnalyzer::process_frame`],
//! in capture order, and act on [`Verdict::Overheat`].

pub mod advantage;
pub mod carry;
pub mod history;
pub mod hud;
pub mod killfeed;
pub mod phase;
pub mod trade;

mod analyzer;
mod config;
mod error;
mod snapshot;

pub use advantage::AdvantageState;
pub use analyzer::{OverheatAnalyzer, OverheatEvent, RoundContext, Stats, Verdict};
pub use config::Config;
pub use error::{ConfigError, HudParseError, OutOfOrderError};
pub use history::HistoryBuffer;
pub use killfeed::KillFeedLine;
pub use snapshot::{Observation, RoundPhase, Snapshot};
pub use trade::{DeathEvent, DeathTradeMachine, TradeState, TradeWindow, WindowStatus};
