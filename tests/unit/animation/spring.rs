use super::*;

const SCENE_CONFIGS: [SpringConfig; 7] = [
    SpringConfig::new(15.0, 100.0),
    SpringConfig::new(12.0, 150.0),
    SpringConfig::new(20.0, 100.0),
    SpringConfig::new(20.0, 120.0),
    SpringConfig::new(15.0, 180.0),
    SpringConfig::new(15.0, 120.0),
    SpringConfig::new(10.0, 150.0),
];

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn not_started_is_zero() {
    for cfg in SCENE_CONFIGS {
        assert_eq!(spring(-1.0, fps30(), cfg), 0.0);
        assert_eq!(spring(-45.0, fps30(), cfg), 0.0);
        assert_eq!(spring(0.0, fps30(), cfg), 0.0);
        assert_eq!(spring(f64::NAN, fps30(), cfg), 0.0);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    for cfg in SCENE_CONFIGS {
        for f in [1.0, 7.0, 13.5, 29.0, 104.0] {
            let a = spring(f, fps30(), cfg);
            let b = spring(f, fps30(), cfg);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

#[test]
fn out_of_order_evaluation_matches_in_order() {
    let cfg = SpringConfig::new(12.0, 150.0);
    let forward: Vec<f64> = (0..60).map(|f| spring(f as f64, fps30(), cfg)).collect();
    for f in (0..60).rev() {
        assert_eq!(spring(f as f64, fps30(), cfg), forward[f]);
    }
}

#[test]
fn every_scene_config_converges_to_exactly_one() {
    for cfg in SCENE_CONFIGS {
        assert!(cfg.validate().is_ok());
        assert_eq!(spring(300.0, fps30(), cfg), 1.0);
        let settle = settling_frame(fps30(), cfg).unwrap();
        assert!(settle < 120, "{cfg:?} settles at {settle}");
        assert_eq!(spring(settle as f64, fps30(), cfg), 1.0);
    }
}

#[test]
fn low_damping_overshoots() {
    let cfg = SpringConfig::new(12.0, 150.0);
    assert!(cfg.damping_ratio() < 1.0);
    let peak = (0..30)
        .map(|f| spring(f as f64, fps30(), cfg))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05, "peak {peak}");
}

#[test]
fn critical_damping_rises_without_overshoot() {
    let cfg = SpringConfig::new(20.0, 100.0);
    assert!((cfg.damping_ratio() - 1.0).abs() < 1e-12);
    let mut prev = 0.0;
    for f in 0..90 {
        let v = spring(f as f64, fps30(), cfg);
        assert!(v >= prev);
        assert!(v <= 1.0);
        prev = v;
    }
}

#[test]
fn overdamped_response_starts_at_rest() {
    let cfg = SpringConfig::new(60.0, 100.0);
    assert!(cfg.damping_ratio() > 1.0);
    let first = spring(1.0, fps30(), cfg);
    assert!(first > 0.0 && first < 0.1);
    assert_eq!(spring(3000.0, fps30(), cfg), 1.0);
}

#[test]
fn stiffer_spring_settles_sooner() {
    let soft = settling_frame(fps30(), SpringConfig::new(40.0, 100.0)).unwrap();
    let stiff = settling_frame(fps30(), SpringConfig::new(40.0, 400.0)).unwrap();
    assert!(stiff < soft);
}

#[test]
fn target_scales_the_trajectory() {
    let cfg = SpringConfig::new(15.0, 120.0);
    let unit = spring(4.0, fps30(), cfg);
    let scaled = spring_to(4.0, fps30(), cfg, 30.0);
    assert!((scaled - unit * 30.0).abs() < 1e-12);
    assert_eq!(spring_to(400.0, fps30(), cfg, 30.0), 30.0);
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(SpringConfig::new(-1.0, 100.0).validate().is_err());
    assert!(SpringConfig::new(10.0, 0.0).validate().is_err());
    assert!(SpringConfig::new(f64::INFINITY, 100.0).validate().is_err());
    assert_eq!(spring(10.0, fps30(), SpringConfig::new(10.0, 0.0)), 0.0);
}

#[test]
fn mass_defaults_to_one_when_deserialized() {
    let cfg: SpringConfig = serde_json::from_str(r#"{"damping": 15, "stiffness": 100}"#).unwrap();
    assert_eq!(cfg, SpringConfig::new(15.0, 100.0));
}
