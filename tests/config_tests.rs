// Host-side tests for sphere configuration and overrides.

use tagsphere_core::constants::*;
use tagsphere_core::{Bounds, ConfigError, PaletteName, SphereConfig};

#[test]
fn defaults_are_valid() {
    let c = SphereConfig::default();
    assert_eq!(c.validate(), Ok(()));
    assert_eq!(c.radius, 180.0);
    assert_eq!(c.focal_length, 500.0);
    assert_eq!(c.palette, PaletteName::Default);
    assert!((c.base_angular_step - std::f32::consts::PI / 1440.0).abs() < 1e-9);
}

#[test]
fn rejects_non_positive_radius() {
    let c = SphereConfig {
        radius: 0.0,
        ..Default::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::NonPositiveRadius(0.0)));
}

#[test]
fn focal_length_must_clear_the_nearest_label_at_max_zoom() {
    let c = SphereConfig {
        focal_length: 250.0,
        ..Default::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::FocalLengthTooSmall { .. })
    ));
    assert!(c.max_depth() > c.radius);
}

#[test]
fn rejects_inverted_bounds() {
    let c = SphereConfig {
        font_size: Bounds::new(30.0, 12.0),
        ..Default::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::InvertedBounds {
            name: "font size",
            min: 30.0,
            max: 12.0
        })
    );
}

#[test]
fn rejects_bad_damping_and_speed() {
    for damping in [0.0, -0.5, 1.01, f32::NAN] {
        let c = SphereConfig {
            damping,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(ConfigError::DampingOutOfRange(_))));
    }
    let c = SphereConfig {
        max_speed: 0.0,
        ..Default::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::NonPositiveMaxSpeed(0.0)));
}

#[test]
fn apply_override_parses_known_keys() {
    let mut c = SphereConfig::default();
    c.apply_override("radius", " 200 ").unwrap();
    c.apply_override("max-font-size", "36").unwrap();
    c.apply_override("palette", "Pastel").unwrap();
    c.apply_override("jitter", "-4").unwrap();
    assert_eq!(c.radius, 200.0);
    assert_eq!(c.font_size.max, 36.0);
    assert_eq!(c.palette, PaletteName::Pastel);
    assert_eq!(c.jitter, 4.0);
}

#[test]
fn apply_override_reports_bad_input() {
    let mut c = SphereConfig::default();
    assert_eq!(
        c.apply_override("colour", "red"),
        Err(ConfigError::UnknownKey("colour".into()))
    );
    assert_eq!(
        c.apply_override("damping", "lots"),
        Err(ConfigError::InvalidValue {
            key: "damping".into(),
            value: "lots".into()
        })
    );
    assert!(c.apply_override("radius", "inf").is_err());
    assert_eq!(c, SphereConfig::default());
}

#[test]
fn with_overrides_skips_entries_that_break_invariants() {
    let c = SphereConfig::default().with_overrides([
        ("radius", "200"),
        ("focal-length", "10"),
        ("palette", "cool"),
        ("bogus", "1"),
        ("damping", "2"),
    ]);
    assert_eq!(c.radius, 200.0);
    assert_eq!(c.focal_length, DEFAULT_FOCAL_LENGTH);
    assert_eq!(c.palette, PaletteName::Cool);
    assert_eq!(c.damping, DEFAULT_DAMPING);
    assert_eq!(c.validate(), Ok(()));
}

#[test]
fn bounds_clamp_and_contain() {
    let b = Bounds::new(0.5, 1.5);
    assert_eq!(b.clamp(3.0), 1.5);
    assert_eq!(b.clamp(0.1), 0.5);
    assert!(b.contains(1.5));
    assert!(!b.contains(1.51));
}

#[test]
fn auto_rotation_speed_must_lie_in_its_window() {
    let c = SphereConfig {
        auto_rotation_speed: 5.0,
        ..Default::default()
    };
    assert_eq!(
        c.validate(),
        Err(ConfigError::AutoSpeedOutOfRange {
            value: 5.0,
            min: AUTO_SPEED_MIN,
            max: AUTO_SPEED_MAX
        })
    );

    let c = SphereConfig::default().with_overrides([("auto-rotation-speed", "5")]);
    assert_eq!(c.auto_rotation_speed, DEFAULT_AUTO_ROTATION_SPEED);
    let c = SphereConfig::default().with_overrides([("auto-rotation-speed", "0.8")]);
    assert_eq!(c.auto_rotation_speed, 0.8);
}

#[test]
fn tuning_clamps_an_unvalidated_auto_speed() {
    let c = SphereConfig {
        auto_rotation_speed: 5.0,
        ..Default::default()
    };
    let mut m = tagsphere_core::MotionController::new(&c);
    let before = m.tuning.auto_rotation_speed;
    assert_eq!(before, AUTO_SPEED_MAX);
    m.speed_up(&c);
    assert!(m.tuning.auto_rotation_speed >= before);
}

#[test]
fn dependent_overrides_apply_in_any_order() {
    let c = SphereConfig::default().with_overrides([("radius", "600"), ("focal-length", "2000")]);
    assert_eq!(c.radius, 600.0);
    assert_eq!(c.focal_length, 2000.0);

    let c = SphereConfig::default().with_overrides([("min-font-size", "40"), ("max-font-size", "60")]);
    assert_eq!(c.font_size, Bounds::new(40.0, 60.0));

    // an unrelated bad entry does not block the pair
    let c = SphereConfig::default().with_overrides([
        ("radius", "600"),
        ("damping", "2"),
        ("focal-length", "2000"),
    ]);
    assert_eq!((c.radius, c.focal_length), (600.0, 2000.0));
    assert_eq!(c.damping, DEFAULT_DAMPING);
    assert_eq!(c.validate(), Ok(()));
}
