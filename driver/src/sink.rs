use common::records::{OverheatRecord, StatsRecord};

use crate::DriverError;

/// Receives the audit output of a run. Called from the analysis thread.
pub trait VerdictSink: Send {
    fn overheat(&mut self, record: &OverheatRecord) -> Result<(), DriverError>;

    fn stats(&mut self, record: &StatsRecord) -> Result<(), DriverError>;
}

impl<T> VerdictSink for Box<T>
where
    T: VerdictSink + ?Sized,
{
    fn overheat(&mut self, record: &OverheatRecord) -> Result<(), DriverError> {
        (**self).overheat(record)
    }

    fn stats(&mut self, record: &StatsRecord) -> Result<(), DriverError> {
        (**self).stats(record)
    }
}

/// Writes every record as one JSON line and flushes right away.
pub struct JsonLinesSink<W> {
    writer: W,
}

impl<W> JsonLinesSink<W>
where
    W: std::io::Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line<T>(&mut self, record: &T) -> Result<(), DriverError>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W> VerdictSink for JsonLinesSink<W>
where
    W: std::io::Write + Send,
{
    fn overheat(&mut self, record: &OverheatRecord) -> Result<(), DriverError> {
        self.write_line(record)
    }

    fn stats(&mut self, record: &StatsRecord) -> Result<(), DriverError> {
        self.write_line(record)
    }
}
