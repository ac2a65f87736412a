//! Replays recorded input through an analyzer.
//!
//! Reading happens on the async side, analysis on a single blocking worker
//! that owns the analyzer. The two are connected by one unbounded channel, so
//! records reach the analyzer exactly in the order they were read.

use common::records::InputRecord;

use crate::{convert, sink::VerdictSink, source::RecordSource, DriverError};

/// Drains `rx` into `analyzer` until every sender is gone.
pub fn run_analysis(
    mut analyzer: analysis::OverheatAnalyzer,
    mut rx: tokio::sync::mpsc::UnboundedReceiver<InputRecord>,
    sink: &mut dyn VerdictSink,
    session: common::SessionId,
) -> Result<analysis::Stats, DriverError> {
    while let Some(record) = rx.blocking_recv() {
        let observation = match record {
            InputRecord::Observation(record) => convert::observation(record),
            InputRecord::Hud(record) => convert::hud(record),
            InputRecord::ResetRound => {
                tracing::debug!("Resetting round");
                analyzer.reset_round();
                continue;
            }
        };

        if let analysis::Verdict::Overheat(event) = analyzer.process_frame(&observation) {
            tracing::info!(died_at = event.died_at, "Overheat detected");
            sink.overheat(&convert::overheat_record(session, chrono::Utc::now(), &event))?;
        }
    }

    let stats = analyzer.get_stats();
    sink.stats(&convert::stats_record(session, &stats))?;

    Ok(stats)
}

/// Pushes every record of `source` into `tx`. Returns the number of records sent.
pub async fn feed<S>(
    source: &mut S,
    tx: tokio::sync::mpsc::UnboundedSender<InputRecord>,
) -> Result<usize, DriverError>
where
    S: RecordSource + ?Sized,
{
    let mut sent = 0;
    while let Some(record) = source.next_record().await? {
        if tx.send(record).is_err() {
            tracing::warn!("Analysis worker stopped early");
            break;
        }
        sent += 1;
    }

    Ok(sent)
}

#[tracing::instrument(name = "Replay", skip_all, fields(%session))]
pub async fn replay<S, K>(
    config: analysis::Config,
    mut source: S,
    mut sink: K,
    session: common::SessionId,
) -> Result<analysis::Stats, DriverError>
where
    S: RecordSource,
    K: VerdictSink + 'static,
{
    let analyzer = analysis::OverheatAnalyzer::new(config)?;

    let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<InputRecord>();
    let worker =
        tokio::task::spawn_blocking(move || run_analysis(analyzer, rx, &mut sink, session));

    let fed = feed(&mut source, tx).await;
    let stats = worker.await??;

    let sent = fed?;
    tracing::info!(records = sent, "Replay finished");

    Ok(stats)
}
