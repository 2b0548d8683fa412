use luxe_core::config::OVERRIDE_KEYS;
use luxe_core::{ConfigError, EffectsConfig};
use std::time::Duration;

#[test]
fn defaults_match_page_tuning() {
    let c = EffectsConfig::default();
    assert!((c.smoothing - 0.15).abs() < f32::EPSILON);
    assert_eq!(c.dot_offset, 3.0);
    assert_eq!(c.outline_offset, 20.0);
    assert_eq!(c.glow_offset, 300.0);
    assert_eq!(c.reveal_threshold, 100.0);
    assert_eq!(c.preload_delay, Duration::from_millis(1500));
    assert!(c.gate_on_preload);
    assert!(c.validate().is_ok());
}

#[test]
fn overrides_parse_each_key() -> Result<(), ConfigError> {
    let c = EffectsConfig::default()
        .with_override("smoothing", "0.3")?
        .with_override("dot-offset", "4")?
        .with_override("outline-offset", " 24 ")?
        .with_override("glow-offset", "250")?
        .with_override("reveal-threshold", "0")?
        .with_override("preload-ms", "2000")?
        .with_override("gate-on-preload", "false")?;
    assert!((c.smoothing - 0.3).abs() < 1e-6);
    assert_eq!(c.dot_offset, 4.0);
    assert_eq!(c.outline_offset, 24.0);
    assert_eq!(c.glow_offset, 250.0);
    assert_eq!(c.reveal_threshold, 0.0);
    assert_eq!(c.preload_delay, Duration::from_millis(2000));
    assert!(!c.gate_on_preload);
    Ok(())
}

#[test]
fn every_advertised_key_is_accepted() {
    let samples = ["0.5", "1", "1", "1", "1", "10", "true"];
    for (key, value) in OVERRIDE_KEYS.iter().zip(samples) {
        assert!(
            EffectsConfig::default().with_override(key, value).is_ok(),
            "{key}={value} rejected"
        );
    }
}

#[test]
fn rejects_unknown_keys_and_bad_values() {
    assert_eq!(
        EffectsConfig::default().with_override("speed", "1"),
        Err(ConfigError::UnknownKey("speed".into()))
    );
    assert!(matches!(
        EffectsConfig::default().with_override("preload-ms", "soon"),
        Err(ConfigError::Parse { .. })
    ));
    assert!(matches!(
        EffectsConfig::default().with_override("smoothing", "0"),
        Err(ConfigError::Invalid { key: "smoothing", .. })
    ));
    assert!(matches!(
        EffectsConfig::default().with_override("smoothing", "1.5"),
        Err(ConfigError::Invalid { .. })
    ));
    assert!(matches!(
        EffectsConfig::default().with_override("glow-offset", "-1"),
        Err(ConfigError::Invalid { key: "glow-offset", .. })
    ));
    assert!(matches!(
        EffectsConfig::default().with_override("dot-offset", "NaN"),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn preload_delay_is_bounded_by_timer_range() {
    assert!(matches!(
        EffectsConfig::default().with_override("preload-ms", "4294967296"),
        Err(ConfigError::Invalid { key: "preload-ms", .. })
    ));
    let max = EffectsConfig::default().with_override("preload-ms", "2147483647");
    assert_eq!(
        max.map(|c| c.preload_delay),
        Ok(Duration::from_millis(i32::MAX as u64))
    );
}
