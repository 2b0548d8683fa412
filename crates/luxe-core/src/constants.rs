// Default tuning for the cursor, reveal and preloader effects.

// Cursor
pub const SMOOTHING_FACTOR: f32 = 0.15; // fraction of remaining distance closed per tick
pub const DOT_OFFSET_PX: f32 = 3.0; // half the dot size
pub const OUTLINE_OFFSET_PX: f32 = 20.0; // half the outline ring size
pub const GLOW_OFFSET_PX: f32 = 300.0; // half the glow size

// Scroll reveal
pub const REVEAL_THRESHOLD_PX: f32 = 100.0; // distance above the viewport bottom

// Preloader
pub const PRELOAD_DELAY_MS: u64 = 1500;
pub const PRELOAD_DELAY_MAX_MS: u64 = i32::MAX as u64; // longest delay a browser timer honours
pub const GATE_ON_PRELOAD: bool = true;
