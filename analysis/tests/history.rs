use analysis::{HistoryBuffer, RoundPhase, Snapshot};
use pretty_assertions::assert_eq;

fn snapshot(captured_at: f64) -> Snapshot {
    Snapshot {
        captured_at,
        ally_alive: 5,
        enemy_alive: 5,
        self_dead: false,
        round_timer_seconds: None,
        round_phase: RoundPhase::Mid,
        evaluable: true,
        counts_observed: true,
        known: true,
    }
}

#[test]
fn evicts_behind_horizon() {
    let mut history = HistoryBuffer::new(15.0);
    for t in 0..=20 {
        history.append(snapshot(t as f64)).unwrap();
    }

    let now = history.latest().unwrap().captured_at;
    assert_eq!(20.0, now);
    assert_eq!(5.0, history.oldest().unwrap().captured_at);
    assert!(history.iter().all(|s| s.captured_at >= now - 15.0));
    assert_eq!(16, history.len());
}

#[test]
fn rejects_out_of_order() {
    let mut history = HistoryBuffer::new(15.0);
    history.append(snapshot(1.0)).unwrap();
    history.append(snapshot(2.0)).unwrap();

    let err = history.append(snapshot(2.0)).unwrap_err();
    assert_eq!(2.0, err.captured_at);
    assert_eq!(2.0, err.latest);

    assert!(history.append(snapshot(1.5)).is_err());
    assert!(history.check_order(1.5).is_err());
    assert!(history.check_order(2.5).is_ok());

    assert_eq!(2, history.len());
    assert_eq!(2.0, history.latest().unwrap().captured_at);
}

#[test]
fn query_window_is_inclusive_and_restartable() {
    let mut history = HistoryBuffer::new(15.0);
    for t in [1.0, 1.5, 2.0, 2.5, 3.0, 3.5] {
        history.append(snapshot(t)).unwrap();
    }

    let window = history.query_window(1.5, 3.0);
    let first: Vec<f64> = window.clone().map(|s| s.captured_at).collect();
    let second: Vec<f64> = window.map(|s| s.captured_at).collect();

    assert_eq!(vec![1.5, 2.0, 2.5, 3.0], first);
    assert_eq!(first, second);

    assert_eq!(0, history.query_window(4.0, 10.0).count());
    assert_eq!(6, history.query_window(0.0, 10.0).count());
}

#[test]
fn clear_empties() {
    let mut history = HistoryBuffer::new(15.0);
    history.append(snapshot(1.0)).unwrap();
    history.clear();

    assert!(history.is_empty());
    assert!(history.append(snapshot(0.5)).is_ok());
}
