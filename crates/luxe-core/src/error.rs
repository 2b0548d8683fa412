use crate::cursor::CursorLayer;
use crate::reveal::RevealId;
use thiserror::Error;

/// Failures reported by a [`Surface`](crate::Surface) write.
///
/// These are cosmetic: callers log and skip, they never propagate further.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("cursor layer {0:?} is not mounted")]
    LayerMissing(CursorLayer),
    #[error("reveal element {0:?} is not mounted")]
    ElementMissing(RevealId),
    #[error("surface rejected write: {0}")]
    Rejected(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),
    #[error("could not parse `{value}` for `{key}`")]
    Parse { key: String, value: String },
    #[error("invalid value for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: &'static str },
}
