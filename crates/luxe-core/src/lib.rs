//! Platform-free state for the site's cursor, hover, scroll reveal and
//! preloader effects.
//!
//! Nothing here touches a browser. The host implements [`Surface`] and
//! forwards pointer, scroll, hover, timer and frame notifications to a
//! [`Page`].

pub mod config;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod hover;
pub mod lifecycle;
pub mod page;
pub mod pointer;
pub mod preloader;
pub mod reveal;
pub mod surface;

pub use config::EffectsConfig;
pub use cursor::{translate3d, CursorLayer, CursorRenderer};
pub use error::{ConfigError, SurfaceError};
pub use hover::{HoverTracker, TriggerId};
pub use lifecycle::StopSignal;
pub use page::{Page, PageState};
pub use pointer::{PointerTracker, SmoothedFollower};
pub use preloader::{timer_millis, PreloadPhase, Preloader};
pub use reveal::{RevealController, RevealId};
pub use surface::Surface;
