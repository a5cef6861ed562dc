#[cfg(test)]
mod tests {
    use crate::predictor::*;
    use crate::profiles::*;
    use crate::random::ScriptedRandom;
    use penalty_core::config::GameConfig;
    use penalty_core::enums::{DiveDirection, DiveHeight, Difficulty};
    use penalty_core::types::{Point, Rect, ShotParameters, Zone};
    use penalty_core::PenaltyError;
    use penalty_pitch::zones::ZoneGrid;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const ORIGIN: Point = Point { x: 400.0, y: 300.0 };

    fn goal() -> Rect {
        Rect::new(200.0, 40.0, 400.0, 120.0)
    }

    fn zones() -> Vec<Zone> {
        ZoneGrid::new(goal()).unwrap().zones().to_vec()
    }

    /// Straight up at power 60 lands on (400, 60), the top-center center.
    fn straight_shot() -> ShotParameters {
        ShotParameters::new(60.0, 90.0).unwrap()
    }

    fn ctx<'a>(shot: ShotParameters, difficulty: f64, zones: &'a [Zone]) -> KeeperContext<'a> {
        KeeperContext {
            shot,
            origin: ORIGIN,
            difficulty,
            zones,
            goal: goal(),
        }
    }

    // --- Read probability ---

    #[test]
    fn test_adjusted_difficulty() {
        assert_eq!(adjusted_difficulty(0.5, 0.0), 0.5);
        assert_eq!(adjusted_difficulty(0.5, 100.0), 0.25);
        assert!((adjusted_difficulty(0.5, 60.0) - 0.35).abs() < 1e-12);
        assert_eq!(adjusted_difficulty(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_correct_read_below_threshold() {
        let zones = zones();
        let mut rng = ScriptedRandom::new([0.34]);
        let d = decide(&ctx(straight_shot(), 0.5, &zones), &mut rng).unwrap();
        assert_eq!(d.target_zone.index, 1);
        assert!(d.read_correctly);
        assert_eq!(d.diving_direction, DiveDirection::Center);
        assert_eq!(d.diving_height, DiveHeight::Top);
        assert_eq!(rng.draws(), 1, "a correct read takes one draw");
    }

    #[test]
    fn test_misread_picks_among_three_nearest() {
        // Neighbours of top-center by distance: middle-center (40),
        // bottom-center (80), top-left (133.3, before top-right by index).
        let zones = zones();
        for (second, expected) in [(0.0, 4), (0.5, 7), (0.9, 0)] {
            let mut rng = ScriptedRandom::new([0.99, second]);
            let d = decide(&ctx(straight_shot(), 0.5, &zones), &mut rng).unwrap();
            assert_eq!(d.target_zone.index, expected);
            assert!(!d.read_correctly);
            assert_eq!(rng.draws(), 2);
        }
    }

    #[test]
    fn test_wrong_zone_candidates_order() {
        let zones = zones();
        let order: Vec<usize> = wrong_zone_candidates(&zones, &zones[1])
            .iter()
            .map(|z| z.index)
            .collect();
        assert_eq!(order, vec![4, 7, 0, 2, 3, 5, 6, 8]);
    }

    #[test]
    fn test_single_zone_always_returned() {
        let zones = vec![zones()[4]];
        let mut rng = ScriptedRandom::new([0.99, 0.99]);
        let d = decide(&ctx(straight_shot(), 0.0, &zones), &mut rng).unwrap();
        assert_eq!(d.target_zone.index, 4);
        assert!(d.read_correctly);
    }

    #[test]
    fn test_two_zones_misread_takes_the_other() {
        let all = zones();
        let zones = vec![all[0], all[1]];
        let mut rng = ScriptedRandom::new([0.99, 0.99]);
        let d = decide(&ctx(straight_shot(), 0.0, &zones), &mut rng).unwrap();
        assert_eq!(d.target_zone.index, 0);
        assert_eq!(d.diving_direction, DiveDirection::Left);
    }

    // --- Mapping ---

    #[test]
    fn test_dive_direction_bands() {
        let zones = zones();
        let g = goal();
        let dirs: Vec<DiveDirection> = zones.iter().map(|z| dive_direction(z, &g)).collect();
        for row in 0..3 {
            assert_eq!(dirs[row * 3], DiveDirection::Left);
            assert_eq!(dirs[row * 3 + 1], DiveDirection::Center);
            assert_eq!(dirs[row * 3 + 2], DiveDirection::Right);
        }
    }

    #[test]
    fn test_dive_height_from_target_row() {
        // Shot pulled hard to the bottom-right corner of the goal.
        let zones = zones();
        let shot = ShotParameters::new(100.0, 0.0).unwrap();
        let mut rng = ScriptedRandom::new([0.0]);
        let d = decide(&ctx(shot, 1.0, &zones), &mut rng).unwrap();
        assert_eq!(d.target_zone.index, 8);
        assert_eq!(d.diving_height, DiveHeight::Bottom);
        assert_eq!(d.diving_direction, DiveDirection::Right);
    }

    // --- Validation ---

    #[test]
    fn test_no_zones_rejected() {
        let mut rng = ScriptedRandom::new([0.5]);
        let err = decide(&ctx(straight_shot(), 0.5, &[]), &mut rng).unwrap_err();
        assert_eq!(err, PenaltyError::NoZones);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_difficulty_out_of_range_rejected() {
        let zones = zones();
        let mut rng = ScriptedRandom::new([0.5]);
        for bad in [-0.1, 1.5, f64::NAN] {
            let err = decide(&ctx(straight_shot(), bad, &zones), &mut rng).unwrap_err();
            assert!(matches!(err, PenaltyError::DifficultyOutOfRange { .. }));
        }
    }

    #[test]
    fn test_power_out_of_range_rejected() {
        let zones = zones();
        let shot = ShotParameters {
            power: 140.0,
            angle_degrees: 90.0,
        };
        let mut rng = ScriptedRandom::new([0.5]);
        let err = decide(&ctx(shot, 0.5, &zones), &mut rng).unwrap_err();
        assert!(matches!(err, PenaltyError::PowerOutOfRange { .. }));
    }

    // --- Profiles ---

    #[test]
    fn test_profiles_follow_presets() {
        assert_eq!(get_profile(Difficulty::Easy).read_probability, 0.3);
        assert_eq!(get_profile(Difficulty::Medium).read_probability, 0.5);
        assert_eq!(get_profile(Difficulty::Hard).read_probability, 0.7);
        assert_eq!(get_profile(Difficulty::Hard).dive_duration_ms, 500.0);
    }

    #[test]
    fn test_profile_from_config_uses_timings() {
        let config = GameConfig {
            keeper_reaction_ms: 120.0,
            keeper_dive_duration_ms: 350.0,
            ..GameConfig::default()
        };
        let p = KeeperProfile::from_config(Difficulty::Easy, &config);
        assert_eq!(p.read_probability, 0.3);
        assert_eq!(p.reaction_ms, 120.0);
        assert_eq!(p.dive_duration_ms, 350.0);
    }

    // --- Statistical ---

    #[test]
    fn test_read_rate_tracks_adjusted_difficulty() {
        let zones = zones();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 4000;
        let reads = (0..trials)
            .filter(|_| {
                decide(&ctx(straight_shot(), 0.7, &zones), &mut rng)
                    .unwrap()
                    .read_correctly
            })
            .count();
        let rate = reads as f64 / trials as f64;
        // Expected 0.7 * 0.7 = 0.49.
        assert!((rate - 0.49).abs() < 0.05, "read rate {rate}");
    }

    proptest! {
        #[test]
        fn prop_certain_keeper_reads_slow_shots(
            angle in 0.0f64..180.0,
            power in 0.0f64..=100.0,
            r in 0.0f64..1.0,
        ) {
            // Difficulty 1 at power 0 reads every draw below 1.
            let zones = zones();
            let shot = ShotParameters::new(0.0, angle).unwrap();
            let mut rng = ScriptedRandom::new([r]);
            let d = decide(&ctx(shot, 1.0, &zones), &mut rng).unwrap();
            prop_assert!(d.read_correctly);

            // Difficulty 0 never reads anything.
            let shot = ShotParameters::new(power, angle).unwrap();
            let mut rng = ScriptedRandom::new([r, r]);
            let d = decide(&ctx(shot, 0.0, &zones), &mut rng).unwrap();
            prop_assert!(!d.read_correctly);
        }

        #[test]
        fn prop_misread_stays_near_the_truth(
            angle in 0.0f64..180.0,
            power in 0.0f64..=100.0,
            pick in 0.0f64..1.0,
        ) {
            let zones = zones();
            let shot = ShotParameters::new(power, angle).unwrap();
            let mut rng = ScriptedRandom::new([0.99, pick]);
            let d = decide(&ctx(shot, 0.0, &zones), &mut rng).unwrap();
            let landing = penalty_pitch::landing_point(&shot, ORIGIN);
            let correct = penalty_pitch::zones::nearest_zone(&zones, landing).unwrap();
            let nearest: Vec<usize> = wrong_zone_candidates(&zones, correct)
                .iter()
                .take(3)
                .map(|z| z.index)
                .collect();
            prop_assert!(nearest.contains(&d.target_zone.index));
        }

        #[test]
        fn prop_decision_is_consistent(seed in any::<u64>(), power in 0.0f64..=100.0) {
            let zones = zones();
            let shot = ShotParameters::new(power, 90.0).unwrap();
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let d = decide(&ctx(shot, 0.5, &zones), &mut rng).unwrap();
            prop_assert_eq!(d.diving_height, DiveHeight::from_row(d.target_zone.row));
            prop_assert_eq!(d.diving_direction, dive_direction(&d.target_zone, &goal()));
        }
    }
}
