use common::records::{InputRecord, ObservationRecord, PhaseHint};
use pretty_assertions::assert_eq;

#[test]
fn observation_with_missing_fields() {
    let line = r#"{"kind":"observation","captured_at":100.5,"ally_alive":4,"round_phase":"mid"}"#;

    let record: InputRecord = serde_json::from_str(line).unwrap();

    assert_eq!(
        InputRecord::Observation(ObservationRecord {
            captured_at: 100.5,
            self_dead: None,
            ally_alive: Some(4),
            enemy_alive: None,
            round_timer_seconds: None,
            round_phase: PhaseHint::Mid,
            round_ended: false,
            kill_feed: Vec::new(),
        }),
        record
    );
}

#[test]
fn hud_and_reset() {
    let hud = r#"{"kind":"hud","captured_at":3.0,"banner":["won"],"kill_feed":[{"killer":"a","victim":"b","victim_is_ally":false}]}"#;
    let reset = r#"{"kind":"reset_round"}"#;

    match serde_json::from_str::<InputRecord>(hud).unwrap() {
        InputRecord::Hud(record) => {
            assert_eq!(Some(vec!["won".to_owned()]), record.banner);
            assert_eq!(None, record.death_notice);
            assert_eq!(1, record.kill_feed.len());
        }
        other => panic!("unexpected record {:?}", other),
    }

    assert_eq!(InputRecord::ResetRound, serde_json::from_str(reset).unwrap());
}

#[test]
fn unknown_kind_is_rejected() {
    assert!(serde_json::from_str::<InputRecord>(r#"{"kind":"frame"}"#).is_err());
}
