use crate::RoundPhase;

/// Debounces the phase hints coming out of recognition.
///
/// A new phase is only adopted once it has been seen on `depth` consecutive
/// samples. The one exception is a round ending: Mid -> Post is taken at once
/// when the same sample also carries a round-end signal.
#[derive(Debug, Clone)]
pub struct PhaseClassifier {
    depth: u32,
    current: RoundPhase,
    pending: Option<(RoundPhase, u32)>,
}

/// An adopted phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: RoundPhase,
    pub to: RoundPhase,
}

impl PhaseTransition {
    /// The change starts a new round.
    pub fn is_rollover(&self) -> bool {
        self.to == RoundPhase::Pre && matches!(self.from, RoundPhase::Mid | RoundPhase::Post)
    }
}

impl PhaseClassifier {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            current: RoundPhase::Unknown,
            pending: None,
        }
    }

    pub fn current(&self) -> RoundPhase {
        self.current
    }

    pub fn observe(&mut self, hint: RoundPhase, round_end_signal: bool) -> Option<PhaseTransition> {
        if hint == RoundPhase::Unknown || hint == self.current {
            self.pending = None;
            return None;
        }

        if hint == RoundPhase::Post && self.current == RoundPhase::Mid && round_end_signal {
            return Some(self.adopt(hint));
        }

        let seen = match self.pending {
            Some((candidate, seen)) if candidate == hint => seen + 1,
            _ => 1,
        };

        if seen >= self.depth {
            Some(self.adopt(hint))
        } else {
            tracing::trace!(?hint, seen, "Holding back phase change");
            self.pending = Some((hint, seen));
            None
        }
    }

    /// Drops back to [`RoundPhase::Unknown`] until consistent hints arrive again.
    pub fn force_unknown(&mut self) -> Option<PhaseTransition> {
        self.pending = None;
        if self.current == RoundPhase::Unknown {
            return None;
        }

        Some(self.adopt(RoundPhase::Unknown))
    }

    fn adopt(&mut self, phase: RoundPhase) -> PhaseTransition {
        let transition = PhaseTransition {
            from: self.current,
            to: phase,
        };
        tracing::debug!(from = ?transition.from, to = ?transition.to, "Round phase changed");

        self.current = phase;
        self.pending = None;

        transition
    }
}
