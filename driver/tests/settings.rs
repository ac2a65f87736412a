use driver::settings::{load_config, Overrides};
use pretty_assertions::assert_eq;

#[test]
fn defaults_without_file() {
    assert_eq!(analysis::Config::default(), load_config(None).unwrap());
}

#[test]
fn partial_file_and_overrides() {
    let path = std::env::temp_dir().join(format!("overheat-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"trade_window": 2.5, "player_name": "malding"}"#).unwrap();

    let mut config = load_config(Some(&path)).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(2.5, config.trade_window);
    assert_eq!(15.0, config.retention_horizon);
    assert_eq!(Some("malding".to_owned()), config.player_name);

    let overrides = Overrides {
        hysteresis_depth: Some(3),
        trade_window: Some(4.0),
        ..Default::default()
    };
    overrides.apply(&mut config);

    assert_eq!(3, config.hysteresis_depth);
    assert_eq!(4.0, config.trade_window);
    assert_eq!(5, config.team_size);
}

#[test]
fn missing_file_is_an_error() {
    let result = load_config(Some(std::path::Path::new("/nonexistent/overheat.json")));
    assert!(matches!(result, Err(driver::DriverError::Io(_))));
}
