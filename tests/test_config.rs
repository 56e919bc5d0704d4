use std::io::Write;

use alien_wave::config::{ConfigError, GameConfig};

#[test]
fn defaults_match_field_geometry() {
    let c = GameConfig::default();
    assert_eq!((c.field.width, c.field.height), (500, 500));
    assert_eq!((c.player.width, c.player.height), (90, 40));
    assert_eq!((c.player.start_x, c.player.start_y), (200, 450));
    assert_eq!((c.bullet.width, c.bullet.height, c.bullet.speed), (10, 10, 23));
    assert_eq!((c.wave.alien_width, c.wave.alien_height, c.wave.spacing), (40, 40, 10));
    assert_eq!((c.wave.initial_columns, c.wave.initial_rows), (5, 3));
    assert_eq!((c.wave.alien_speed, c.wave.drop_step), (3, 20));
    assert_eq!(c.wave.points_per_kill, 10);
    assert_eq!((c.controls.keyboard_step, c.controls.button_step), (25, 10));
    assert_eq!(c.player_max_x(), 410);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_ron_keeps_other_defaults() {
    let c = GameConfig::from_ron_str("(wave: (initial_columns: 7, alien_speed: 5), frame_millis: 33)")
        .unwrap();
    assert_eq!(c.wave.initial_columns, 7);
    assert_eq!(c.wave.alien_speed, 5);
    assert_eq!(c.frame_millis, 33);
    assert_eq!(c.wave.initial_rows, 3);
    assert_eq!(c.field, GameConfig::default().field);
}

#[test]
fn empty_ron_is_default() {
    assert_eq!(GameConfig::from_ron_str("()").unwrap(), GameConfig::default());
}

#[test]
fn printed_config_parses_back() {
    let c = GameConfig::default();
    let text = c.to_ron_string().unwrap();
    assert_eq!(GameConfig::from_ron_str(&text).unwrap(), c);
}

#[test]
fn malformed_ron_is_parse_error() {
    let err = GameConfig::from_ron_str("(field: (width: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn rejects_non_positive_sizes() {
    let err = GameConfig::from_ron_str("(bullet: (width: 0))").unwrap_err();
    match err {
        ConfigError::Invalid(msg) => assert!(msg.contains("bullet.width")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_player_wider_than_field() {
    let err = GameConfig::from_ron_str("(field: (width: 80))").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn rejects_start_x_outside_field() {
    for ron in ["(player: (start_x: 480))", "(player: (start_x: -5))"] {
        match GameConfig::from_ron_str(ron).unwrap_err() {
            ConfigError::Invalid(msg) => assert!(msg.contains("player.start_x"), "{msg}"),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }
    // Both ends of the range are fine.
    assert!(GameConfig::from_ron_str("(player: (start_x: 0))").is_ok());
    assert!(GameConfig::from_ron_str("(player: (start_x: 410))").is_ok());
}

#[test]
fn rejects_negative_speed_and_zero_frame() {
    assert!(GameConfig::from_ron_str("(wave: (alien_speed: -1))").is_err());
    assert!(GameConfig::from_ron_str("(frame_millis: 0)").is_err());
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "(controls: (keyboard_step: 40))").unwrap();
    let c = GameConfig::load(file.path()).unwrap();
    assert_eq!(c.controls.keyboard_step, 40);
    assert_eq!(c.controls.button_step, 10);
}

#[test]
fn load_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(&dir.path().join("nope.ron")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
