use common::records::{OverheatRecord, StatsRecord};
use driver::sink::{JsonLinesSink, VerdictSink};
use driver::source::{JsonLinesSource, RecordSource};
use driver::DriverError;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

#[derive(Default, Clone)]
struct MemorySink {
    overheats: std::sync::Arc<std::sync::Mutex<Vec<OverheatRecord>>>,
    stats: std::sync::Arc<std::sync::Mutex<Option<StatsRecord>>>,
}

impl VerdictSink for MemorySink {
    fn overheat(&mut self, record: &OverheatRecord) -> Result<(), DriverError> {
        self.overheats.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn stats(&mut self, record: &StatsRecord) -> Result<(), DriverError> {
        *self.stats.lock().unwrap() = Some(record.clone());
        Ok(())
    }
}

fn observation(t: f64, ally: u8, enemy: u8, dead: bool) -> String {
    serde_json::json!({
        "kind": "observation",
        "captured_at": t,
        "self_dead": dead,
        "ally_alive": ally,
        "enemy_alive": enemy,
        "round_phase": "mid",
    })
    .to_string()
}

fn recording(lines: &[String]) -> Vec<u8> {
    lines.join("\n").into_bytes()
}

#[tokio::test]
#[traced_test]
async fn replay_detects_overheat() {
    let input = recording(&[
        observation(98.0, 4, 3, false),
        observation(99.0, 4, 3, false),
        "this is not a record".to_owned(),
        observation(100.0, 3, 3, true),
        String::new(),
        observation(102.5, 3, 3, true),
        observation(103.1, 3, 3, true),
        r#"{"kind":"reset_round"}"#.to_owned(),
        observation(200.0, 5, 5, false),
    ]);

    let sink = MemorySink::default();
    let session = common::SessionId::new();

    let stats = driver::pipeline::replay(
        analysis::Config::default(),
        JsonLinesSource::new(input.as_slice()),
        sink.clone(),
        session,
    )
    .await
    .unwrap();

    assert_eq!(1, stats.overheats);
    assert_eq!(1, stats.total_deaths);

    let overheats = sink.overheats.lock().unwrap().clone();
    assert_eq!(1, overheats.len());
    assert_eq!(session, overheats[0].session);
    assert_eq!(100.0, overheats[0].died_at);
    assert_eq!(4, overheats[0].ally_alive_at_death);
    assert_eq!(3, overheats[0].enemy_alive_at_death);
    assert_eq!(103.0, overheats[0].trade_window_closes_at);

    let final_stats = sink.stats.lock().unwrap().clone().unwrap();
    assert_eq!(driver::convert::stats_record(session, &stats), final_stats);

    assert!(logs_contain("Skipping malformed record"));
}

#[tokio::test]
async fn replay_hud_records() {
    let hud = |t: f64, banner: &str, dead: bool, allies: usize, enemies: usize| {
        let death_notice: Vec<&str> = if dead { vec!["KILLED BY"] } else { Vec::new() };
        serde_json::json!({
            "kind": "hud",
            "captured_at": t,
            "banner": [banner],
            "round_info": ["3", "1.20", "4"],
            "death_notice": death_notice,
            "ally_icons": vec!["jett"; allies],
            "enemy_icons": vec!["omen"; enemies],
        })
        .to_string()
    };

    let input = recording(&[
        hud(10.0, "", false, 4, 3),
        hud(11.0, "", false, 4, 3),
        hud(12.0, "", true, 3, 3),
        hud(13.0, "", true, 3, 3),
        hud(14.0, "won", true, 3, 0),
    ]);

    let sink = MemorySink::default();
    let stats = driver::pipeline::replay(
        analysis::Config::default(),
        JsonLinesSource::new(input.as_slice()),
        sink.clone(),
        common::SessionId::new(),
    )
    .await
    .unwrap();

    // The win banner shows the last enemies gone inside the window.
    assert_eq!(1, stats.deaths_with_advantage);
    assert_eq!(1, stats.trades);
    assert_eq!(0, stats.overheats);
    assert!(sink.overheats.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_config_fails_fast() {
    let config = analysis::Config {
        team_size: 0,
        ..Default::default()
    };

    let result = driver::pipeline::replay(
        config,
        JsonLinesSource::new(&b""[..]),
        MemorySink::default(),
        common::SessionId::new(),
    )
    .await;

    assert!(matches!(result, Err(DriverError::Config(_))));
}

#[tokio::test]
async fn source_skips_blank_and_broken_lines() {
    let input = b"\n{\"kind\":\"reset_round\"}\n{broken\n\n{\"kind\":\"reset_round\"}\n";
    let mut source = JsonLinesSource::new(&input[..]);

    let mut count = 0;
    while let Some(record) = source.next_record().await.unwrap() {
        assert_eq!(common::records::InputRecord::ResetRound, record);
        count += 1;
    }

    assert_eq!(2, count);
}

#[test]
fn json_sink_writes_lines() {
    let session = common::SessionId::new();
    let mut sink = JsonLinesSink::new(Vec::new());

    let event = analysis::OverheatEvent {
        died_at: 1.5,
        ally_alive_at_death: 3,
        enemy_alive_at_death: 2,
        trade_window_closes_at: 4.5,
    };
    sink.overheat(&driver::convert::overheat_record(session, chrono::Utc::now(), &event))
        .unwrap();
    sink.stats(&driver::convert::stats_record(session, &analysis::Stats::default()))
        .unwrap();

    let written = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(2, lines.len());

    let overheat: OverheatRecord = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(1.5, overheat.died_at);
    assert_eq!(session, overheat.session);

    let stats: StatsRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(0, stats.overheats);
}
