#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::GameConfig;
    use crate::enums::*;
    use crate::error::{ErrorKind, PenaltyError};
    use crate::state::MatchState;
    use crate::types::{Point, Rect, ShotParameters, Zone};

    #[test]
    fn test_rect_contains_is_inclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(40.0, 60.0)));
        assert!(!r.contains(Point::new(40.1, 60.0)));
        assert!(!r.contains(Point::new(9.9, 30.0)));
    }

    #[test]
    fn test_rect_validity() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 1.0, -2.0).is_valid());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
    }

    #[test]
    fn test_shot_parameters_reject_out_of_range_power() {
        assert!(ShotParameters::new(0.0, 90.0).is_ok());
        assert!(ShotParameters::new(100.0, 90.0).is_ok());
        let err = ShotParameters::new(100.5, 90.0).unwrap_err();
        assert_eq!(err, PenaltyError::PowerOutOfRange { power: 100.5 });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(ShotParameters::new(-1.0, 0.0).is_err());
        assert!(ShotParameters::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_shot_direction_points_up_screen_at_90_degrees() {
        let shot = ShotParameters::new(50.0, 90.0).unwrap();
        let dir = shot.direction();
        assert!(dir.x.abs() < 1e-12);
        assert!((dir.y + 1.0).abs() < 1e-12, "90° should be -y on screen");
    }

    #[test]
    fn test_min_power_threshold() {
        assert!(!ShotParameters::new(5.0, 0.0).unwrap().is_shootable());
        assert!(ShotParameters::new(5.01, 0.0).unwrap().is_shootable());
    }

    #[test]
    fn test_zone_labels() {
        let zone = |row, col| Zone {
            index: row * 3 + col,
            row,
            col,
            bounds: Rect::default(),
        };
        assert_eq!(zone(0, 0).label(), "top-left");
        assert_eq!(zone(0, 1).label(), "top-center");
        assert_eq!(zone(1, 2).label(), "middle-right");
        assert_eq!(zone(2, 1).label(), "bottom-center");
    }

    #[test]
    fn test_match_result_from_scores() {
        assert_eq!(MatchResult::from_scores(3, 2), MatchResult::PlayerWin);
        assert_eq!(MatchResult::from_scores(2, 3), MatchResult::KeeperWin);
        assert_eq!(MatchResult::from_scores(2, 2), MatchResult::Draw);
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.read_probability(), 0.3);
        assert_eq!(Difficulty::Medium.read_probability(), 0.5);
        assert_eq!(Difficulty::Hard.read_probability(), 0.7);
        assert_eq!(Difficulty::Custom(0.9).read_probability(), 0.9);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_new_match_state_is_not_started() {
        let state = MatchState::new(5);
        assert_eq!(state.phase, MatchPhase::NotStarted);
        assert!(!state.is_over);
        assert_eq!(state.remaining_attempts(), 5);
        assert!(state.result.is_none());
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(PenaltyError::NoZones.kind(), ErrorKind::InvalidState);
        assert_eq!(PenaltyError::ShotInFlight.kind(), ErrorKind::InvalidState);
        assert_eq!(
            PenaltyError::WrongPhase {
                phase: MatchPhase::Over,
                expected: MatchPhase::InProgress,
            }
            .kind(),
            ErrorKind::InvalidState
        );
        assert_eq!(
            PenaltyError::ZoneIndexOutOfRange { index: 9, count: 9 }.kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.cooldown_ms, 2000.0);
    }

    #[test]
    fn test_partial_toml_config() {
        let config = GameConfig::from_toml_str(
            r#"
            max_attempts = 3
            difficulty = "hard"
            canvas_width = 1024.0
            "#,
        )
        .unwrap();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.canvas_width, 1024.0);
        // Untouched keys keep their defaults.
        assert_eq!(config.canvas_height, 400.0);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        let err = GameConfig::from_toml_str("max_attempts = 0").unwrap_err();
        assert_eq!(err, PenaltyError::ZeroAttempts);

        let err = GameConfig::from_toml_str("canvas_width = -5.0").unwrap_err();
        assert!(matches!(err, PenaltyError::InvalidConfig(_)));

        let err = GameConfig::from_toml_str("ball_base_duration_ms = 400.0").unwrap_err();
        assert!(matches!(err, PenaltyError::InvalidConfig(_)));

        let err = GameConfig::from_toml_str("max_attempts = \"five\"").unwrap_err();
        assert!(matches!(err, PenaltyError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = GameConfig::default();
        let text = config.to_toml_string().unwrap();
        let back = GameConfig::from_toml_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_string(&PlayerCommand::BeginDrag { x: 1.0, y: 2.0 }).unwrap();
        assert!(json.contains("\"type\":\"BeginDrag\""));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::BeginDrag { x, y } if x == 1.0 && y == 2.0));

        let json = r#"{"type":"SetDifficulty","difficulty":"easy"}"#;
        let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
        assert!(matches!(
            cmd,
            PlayerCommand::SetDifficulty {
                difficulty: Difficulty::Easy
            }
        ));
    }
}
