use crate::{
    advantage, carry::CarryForward, killfeed, phase::PhaseClassifier, trade, Config, ConfigError,
    DeathEvent, DeathTradeMachine, HistoryBuffer, Observation, RoundPhase, Snapshot, TradeWindow,
    WindowStatus,
};

/// Details of a detected overheat, for audit logging.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct OverheatEvent {
    pub died_at: f64,
    pub ally_alive_at_death: u8,
    pub enemy_alive_at_death: u8,
    pub trade_window_closes_at: f64,
}

impl From<&TradeWindow> for OverheatEvent {
    fn from(window: &TradeWindow) -> Self {
        Self {
            died_at: window.death.died_at,
            ally_alive_at_death: window.death.ally_alive_at_death,
            enemy_alive_at_death: window.death.enemy_alive_at_death,
            trade_window_closes_at: window.closes_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub enum Verdict {
    None,
    Overheat(OverheatEvent),
}

impl Verdict {
    pub fn is_overheat(&self) -> bool {
        matches!(self, Self::Overheat(_))
    }
}

/// Counters accumulated since construction or the last [`OverheatAnalyzer::clear_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    pub total_deaths: u64,
    pub deaths_with_advantage: u64,
    pub trades: u64,
    pub overheats: u64,
    pub aborted: u64,
    pub concurrent_deaths: u64,
    /// Samples dropped for an out-of-order or unusable timestamp.
    pub dropped_samples: u64,
    /// Samples with at least one field filled by carry-forward.
    pub degraded_samples: u64,
}

/// Per-round state, thrown away at every round boundary.
#[derive(Debug, Clone)]
pub struct RoundContext {
    classifier: PhaseClassifier,
    trades: DeathTradeMachine,
    carry: CarryForward,
}

impl RoundContext {
    pub fn new(config: &Config) -> Self {
        Self {
            classifier: PhaseClassifier::new(config.hysteresis_depth),
            trades: DeathTradeMachine::new(config.trade_window),
            carry: CarryForward::new(),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.classifier.current()
    }

    pub fn pending_window(&self) -> Option<&TradeWindow> {
        self.trades.pending()
    }
}

/// Decides, frame by frame, whether the observed player overheated.
///
/// Single writer: every call takes `&mut self` and returns before the next
/// sample can be fed, so no synchronisation is involved. Time only comes from
/// [`Observation::captured_at`], which makes replays of a recording exact.
#[derive(Debug, Clone)]
pub struct OverheatAnalyzer {
    config: Config,
    history: HistoryBuffer,
    context: RoundContext,
    stats: Stats,
}

impl OverheatAnalyzer {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            history: HistoryBuffer::new(config.retention_horizon),
            context: RoundContext::new(&config),
            stats: Stats::default(),
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn phase(&self) -> RoundPhase {
        self.context.phase()
    }

    pub fn pending_window(&self) -> Option<&TradeWindow> {
        self.context.pending_window()
    }

    pub fn get_stats(&self) -> Stats {
        self.stats
    }

    pub fn clear_stats(&mut self) {
        self.stats = Stats::default();
    }

    /// Starts a fresh round. An open trade window is given up without a verdict.
    pub fn reset_round(&mut self) {
        if let Some(window) = self.context.trades.abort() {
            tracing::info!(
                died_at = window.death.died_at,
                "Round reset with an open trade window"
            );
            self.record(&window);
        }

        self.history.clear();
        self.context = RoundContext::new(&self.config);
    }

    #[tracing::instrument(
        name = "Frame",
        skip(self, observation),
        fields(captured_at = observation.captured_at)
    )]
    pub fn process_frame(&mut self, observation: &Observation) -> Verdict {
        if !observation.captured_at.is_finite() {
            tracing::warn!("Dropping sample with an unusable timestamp");
            self.stats.dropped_samples += 1;
            return Verdict::None;
        }
        if let Err(e) = self.history.check_order(observation.captured_at) {
            tracing::warn!("Dropping out-of-order sample: {}", e);
            self.stats.dropped_samples += 1;
            return Verdict::None;
        }

        let filled = self.context.carry.fill(
            observation,
            self.config.team_size,
            self.config.max_carry_forward,
        );
        if filled.degraded {
            self.stats.degraded_samples += 1;
            tracing::debug!(
                run = self.context.carry.degraded_run(),
                "Carrying forward missing fields"
            );
        }

        let transition = if filled.exhausted {
            let forced = self.context.classifier.force_unknown();
            if forced.is_some() {
                tracing::warn!("Recognition data went stale, pausing evaluation");
            }
            forced
        } else {
            self.context
                .classifier
                .observe(observation.round_phase_hint, observation.signals_round_end())
        };
        let phase = self.context.classifier.current();

        let snapshot = Snapshot {
            captured_at: observation.captured_at,
            ally_alive: filled.ally_alive,
            enemy_alive: filled.enemy_alive,
            self_dead: filled.self_dead,
            round_timer_seconds: observation.round_timer_seconds,
            round_phase: phase,
            evaluable: phase == RoundPhase::Mid && !filled.exhausted,
            counts_observed: filled.counts_observed,
            known: filled.known,
        };
        let previous = self.history.latest().copied();

        if let Err(e) = self.history.append(snapshot) {
            tracing::warn!("Dropping sample rejected by the history: {}", e);
            self.stats.dropped_samples += 1;
            return Verdict::None;
        }

        let mut verdict = Verdict::None;

        if snapshot.evaluable || phase.is_round_over() {
            if let Some(window) = self.context.trades.resolve(&snapshot, &self.history) {
                verdict = self.record(&window);
            }
        }
        if phase.is_round_over() {
            if let Some(window) = self.context.trades.abort() {
                tracing::info!(
                    died_at = window.death.died_at,
                    ?phase,
                    "Round ended during the trade window"
                );
                self.record(&window);
            }
        }

        if transition.map(|t| t.is_rollover()).unwrap_or(false) {
            tracing::debug!("New round, clearing history");
            self.history.clear();
            if let Err(e) = self.history.append(snapshot) {
                tracing::warn!("Could not seed the new round: {}", e);
            }
        }

        if snapshot.evaluable && trade::is_death_transition(previous.as_ref(), &snapshot) {
            if let Some(previous) = previous.as_ref() {
                let death = self.death_event(previous, &snapshot, observation);
                if let Some(overheat) = self.on_death(death, &snapshot) {
                    verdict = overheat;
                }
            }
        }

        verdict
    }

    fn death_event(
        &self,
        previous: &Snapshot,
        current: &Snapshot,
        observation: &Observation,
    ) -> DeathEvent {
        let before = (previous.ally_alive, previous.enemy_alive);
        let after = (current.ally_alive, current.enemy_alive);

        let (ally, enemy) = match self.config.player_name.as_deref() {
            Some(player) if !observation.kill_feed.is_empty() => {
                killfeed::counts_at_death(before, after, &observation.kill_feed, player)
                    .unwrap_or(before)
            }
            _ => before,
        };

        DeathEvent {
            died_at: current.captured_at,
            advantage: advantage::classify(ally, enemy),
            ally_alive_at_death: ally,
            enemy_alive_at_death: enemy,
        }
    }

    fn on_death(&mut self, death: DeathEvent, snapshot: &Snapshot) -> Option<Verdict> {
        self.stats.total_deaths += 1;
        if death.advantage == advantage::AdvantageState::Advantage {
            self.stats.deaths_with_advantage += 1;
        }

        let outcome = self.context.trades.on_death(death);
        if let Some(displaced) = outcome.displaced {
            self.stats.concurrent_deaths += 1;
            self.record(&displaced);
        }

        if outcome.opened.is_none() {
            return None;
        }

        // The death sample itself may already show the trade.
        self.context
            .trades
            .resolve(snapshot, &self.history)
            .map(|window| self.record(&window))
    }

    fn record(&mut self, window: &TradeWindow) -> Verdict {
        match window.status {
            WindowStatus::Traded => {
                self.stats.trades += 1;
                Verdict::None
            }
            WindowStatus::ExpiredOverheat => {
                self.stats.overheats += 1;
                tracing::info!(
                    died_at = window.death.died_at,
                    ally = window.death.ally_alive_at_death,
                    enemy = window.death.enemy_alive_at_death,
                    "Overheat"
                );
                Verdict::Overheat(OverheatEvent::from(window))
            }
            WindowStatus::Aborted => {
                self.stats.aborted += 1;
                Verdict::None
            }
            WindowStatus::Open => Verdict::None,
        }
    }
}
