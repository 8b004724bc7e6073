pub mod config;
pub mod error;
pub mod expand;
pub mod host;
pub mod link;
pub mod registry;

pub use config::{EasingType, LinkConfig, NavigatorConfig, ScrollConfig, SettleMode, MIN_SETTLE_FRAMES};
pub use error::{Error, NavigationError, Result};
pub use expand::{expand_to, Expansion};
pub use host::{Bounds, BoundsProvider, CollapsibleController, PageNavigator, Point, ScrollContainer};
pub use link::{LinkIntent, LinkResolver};
pub use registry::{SectionEntry, SectionId, SectionRegistry};
