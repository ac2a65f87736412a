use crate::{AdvantageState, HistoryBuffer, Snapshot};

/// The observer's death, with the situation at that instant.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct DeathEvent {
    pub died_at: f64,
    pub advantage: AdvantageState,
    pub ally_alive_at_death: u8,
    pub enemy_alive_at_death: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum WindowStatus {
    Open,
    Traded,
    ExpiredOverheat,
    Aborted,
}

/// The interval after a death under advantage in which an enemy death trades it.
///
/// Inclusive at `opens_at`, exclusive at `closes_at`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TradeWindow {
    pub death: DeathEvent,
    pub opens_at: f64,
    pub closes_at: f64,
    pub status: WindowStatus,
}

impl TradeWindow {
    pub fn open(death: DeathEvent, duration: f64) -> Self {
        Self {
            death,
            opens_at: death.died_at,
            closes_at: death.died_at + duration,
            status: WindowStatus::Open,
        }
    }

    pub fn contains(&self, t: f64) -> bool {
        t >= self.opens_at && t < self.closes_at
    }

    pub fn is_expired_at(&self, t: f64) -> bool {
        t >= self.closes_at
    }

    fn close(mut self, status: WindowStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TradeState {
    Idle,
    AwaitingTrade(TradeWindow),
}

/// What happened to the machine when a death was fed into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathOutcome {
    /// The window opened for this death, `None` when the death was not under advantage.
    pub opened: Option<TradeWindow>,
    /// A window that was still open and had to be given up for the new death.
    pub displaced: Option<TradeWindow>,
}

/// Tracks at most one pending trade window.
#[derive(Debug, Clone)]
pub struct DeathTradeMachine {
    trade_window: f64,
    state: TradeState,
}

impl DeathTradeMachine {
    pub fn new(trade_window: f64) -> Self {
        Self {
            trade_window,
            state: TradeState::Idle,
        }
    }

    pub fn state(&self) -> &TradeState {
        &self.state
    }

    pub fn pending(&self) -> Option<&TradeWindow> {
        match &self.state {
            TradeState::AwaitingTrade(window) => Some(window),
            TradeState::Idle => None,
        }
    }

    /// Starts tracking a death. Only a death under strict advantage opens a window.
    pub fn on_death(&mut self, death: DeathEvent) -> DeathOutcome {
        let displaced = match self.state {
            TradeState::AwaitingTrade(prior) => {
                tracing::warn!(
                    prior_death = prior.opens_at,
                    new_death = death.died_at,
                    "Second death while a trade window is open, aborting the earlier window"
                );
                Some(prior.close(WindowStatus::Aborted))
            }
            TradeState::Idle => None,
        };
        self.state = TradeState::Idle;

        if death.advantage != AdvantageState::Advantage {
            tracing::debug!(?death, "Death without advantage");
            return DeathOutcome {
                opened: None,
                displaced,
            };
        }

        let window = TradeWindow::open(death, self.trade_window);
        tracing::debug!(
            opens_at = window.opens_at,
            closes_at = window.closes_at,
            "Opened trade window"
        );
        self.state = TradeState::AwaitingTrade(window);

        DeathOutcome {
            opened: Some(window),
            displaced,
        }
    }

    /// Checks the pending window against everything seen up to `now`.
    ///
    /// A trade is looked for first, so a trade and an expiry seen on the same
    /// step resolve as a trade. The history is scanned instead of only the
    /// latest pair, so drops on samples that were not evaluated still count.
    /// Expiry is only declared on a sample whose counts were actually read.
    pub fn resolve(&mut self, now: &Snapshot, history: &HistoryBuffer) -> Option<TradeWindow> {
        let window = match self.state {
            TradeState::AwaitingTrade(window) => window,
            TradeState::Idle => return None,
        };

        let status = if traded(&window, now, history) {
            WindowStatus::Traded
        } else if now.counts_observed && window.is_expired_at(now.captured_at) {
            WindowStatus::ExpiredOverheat
        } else {
            return None;
        };

        tracing::debug!(
            ?status,
            opens_at = window.opens_at,
            now = now.captured_at,
            "Trade window resolved"
        );

        self.state = TradeState::Idle;
        Some(window.close(status))
    }

    /// Gives up the pending window, it never counts as an overheat.
    pub fn abort(&mut self) -> Option<TradeWindow> {
        match std::mem::replace(&mut self.state, TradeState::Idle) {
            TradeState::AwaitingTrade(window) => Some(window.close(WindowStatus::Aborted)),
            TradeState::Idle => None,
        }
    }
}

/// Whether `current` shows the observer dying since `previous`.
///
/// A `previous` snapshot made up of defaults says nothing about the observer
/// being alive.
pub fn is_death_transition(previous: Option<&Snapshot>, current: &Snapshot) -> bool {
    previous.map(|p| p.known && !p.self_dead).unwrap_or(false) && current.self_dead
}

/// Any drop of the enemy count whose sampling interval starts inside the window.
///
/// Only counts read on their own sample are compared. Carried counts would
/// move the interval start past the last real reading.
fn traded(window: &TradeWindow, now: &Snapshot, history: &HistoryBuffer) -> bool {
    let mut reference = window.death.enemy_alive_at_death;
    let mut interval_start = window.opens_at;

    let observed = history
        .query_window(window.opens_at, now.captured_at)
        .filter(|s| s.counts_observed);
    for snapshot in observed {
        if snapshot.enemy_alive < reference && interval_start < window.closes_at {
            tracing::trace!(
                at = snapshot.captured_at,
                from = reference,
                to = snapshot.enemy_alive,
                "Enemy count dropped"
            );
            return true;
        }

        reference = snapshot.enemy_alive;
        interval_start = snapshot.captured_at;
    }

    false
}
