// Host-side tests for the DOM names the effects bind to.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn cursor_layers_use_distinct_class_selectors() {
    let layers = [
        CURSOR_DOT_SELECTOR,
        CURSOR_OUTLINE_SELECTOR,
        CURSOR_GLOW_SELECTOR,
    ];
    for (i, a) in layers.iter().enumerate() {
        assert!(a.starts_with('.'), "{a} is not a class selector");
        for b in &layers[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn hover_triggers_cover_markers_links_and_buttons() {
    let parts: Vec<&str> = HOVER_TRIGGER_SELECTOR.split(',').map(str::trim).collect();
    assert_eq!(parts, vec![".hover-trigger", "a", "button"]);
}

#[test]
fn state_classes_are_bare_names() {
    for class in [HOVERING_CLASS, REVEALED_CLASS, LOADING_CLASS] {
        assert!(!class.is_empty());
        assert!(!class.contains(' ') && !class.starts_with('.'));
    }
    assert_eq!(REVEAL_SELECTOR, ".reveal");
}

#[test]
fn config_attribute_names() {
    assert_eq!(config_attr("smoothing"), "data-luxe-smoothing");
    assert_eq!(config_attr("preload-ms"), "data-luxe-preload-ms");
    assert!(config_attr("x").starts_with("data-"));
}
