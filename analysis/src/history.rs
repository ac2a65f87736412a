use crate::{OutOfOrderError, Snapshot};

/// Time-ordered retention of the most recent snapshots.
///
/// Entries older than `horizon` seconds behind the newest appended snapshot are
/// evicted on every append. Time only ever comes from the snapshots themselves,
/// so replaying a recording yields the exact same buffer contents.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    horizon: f64,
    entries: std::collections::VecDeque<Snapshot>,
}

impl HistoryBuffer {
    pub fn new(horizon: f64) -> Self {
        Self {
            horizon,
            entries: std::collections::VecDeque::new(),
        }
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Whether a snapshot taken at `captured_at` would be accepted by [`HistoryBuffer::append`].
    pub fn check_order(&self, captured_at: f64) -> Result<(), OutOfOrderError> {
        match self.entries.back() {
            Some(latest) if captured_at <= latest.captured_at => Err(OutOfOrderError {
                captured_at,
                latest: latest.captured_at,
            }),
            _ => Ok(()),
        }
    }

    pub fn append(&mut self, snapshot: Snapshot) -> Result<(), OutOfOrderError> {
        self.check_order(snapshot.captured_at)?;

        self.entries.push_back(snapshot);

        let cutoff = snapshot.captured_at - self.horizon;
        while self
            .entries
            .front()
            .map(|oldest| oldest.captured_at < cutoff)
            .unwrap_or(false)
        {
            self.entries.pop_front();
        }

        Ok(())
    }

    /// All retained snapshots with `from <= captured_at <= to`, oldest first.
    ///
    /// The returned iterator is lazy and can be cloned to walk the same range again.
    pub fn query_window(
        &self,
        from: f64,
        to: f64,
    ) -> impl Iterator<Item = &Snapshot> + Clone + '_ {
        let start = self.entries.partition_point(|s| s.captured_at < from);

        self.entries
            .range(start..)
            .take_while(move |s| s.captured_at <= to)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> + Clone + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Snapshot> {
        self.entries.back()
    }

    pub fn oldest(&self) -> Option<&Snapshot> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
