/// DOM names the effects bind to.
///
/// Kept in one place so the markup and stylesheet can be checked against them.
// Cursor layers
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
pub const CURSOR_OUTLINE_SELECTOR: &str = ".cursor-outline";
pub const CURSOR_GLOW_SELECTOR: &str = ".cursor-glow";

// Hover triggers: explicit markers plus native interactive elements
pub const HOVER_TRIGGER_SELECTOR: &str = ".hover-trigger, a, button";
pub const HOVERING_CLASS: &str = "hovering"; // on <body>

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "active";

// Preloader overlay
pub const PRELOADER_SELECTOR: &str = ".preloader";
pub const LOADER_LINE_SELECTOR: &str = ".loader-line";
pub const LOADING_CLASS: &str = "loading"; // on <body> while the intro runs

// Config overrides are read from `data-luxe-<key>` on <body>
pub const CONFIG_ATTR_PREFIX: &str = "data-luxe-";

#[inline]
pub fn config_attr(key: &str) -> String {
    format!("{}{}", CONFIG_ATTR_PREFIX, key)
}
