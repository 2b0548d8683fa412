use crate::constants::config_attr;
use luxe_core::config::OVERRIDE_KEYS;
use luxe_core::EffectsConfig;
use web_sys as web;

/// Defaults, with any `data-luxe-*` overrides on `<body>` applied.
/// A bad override is reported and skipped; the rest still apply.
pub fn from_body(document: &web::Document) -> EffectsConfig {
    let mut config = EffectsConfig::default();
    let Some(body) = document.body() else {
        return config;
    };
    for key in OVERRIDE_KEYS {
        let attr = config_attr(key);
        let Some(value) = body.get_attribute(&attr) else {
            continue;
        };
        match config.clone().with_override(key, &value) {
            Ok(c) => config = c,
            Err(e) => log::warn!("[config] ignoring {}={:?}: {}", attr, value, e),
        }
    }
    config
}
