//! Scroll targeting for table-of-contents jumps
//!
//! ## Atoms
//! - `easing` - Pure easing curves (cubic, quintic, linear)
//! - `timing` - Progress, interpolation and the real-time frame clock
//! - `config` - Derived values on top of `tocnav_core::ScrollConfig`
//!
//! ## Engine
//! - `engine` - The settle-then-scroll state machine
//!
//! # Usage
//!
//! ```ignore
//! use tocnav_ui::scroll::{FrameClock, ScrollEngine};
//!
//! let mut engine = ScrollEngine::default();
//! engine.begin(section_id, bounds_handle);
//!
//! // Once per host frame, after the host's layout pass
//! let mut clock = FrameClock::new();
//! while engine.needs_update() {
//!     engine.tick(clock.tick(), &container);
//! }
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod engine;

pub use config::{ScrollConfig, ScrollConfigExt, SettleMode};
pub use easing::{EasingType, EasingTypeExt};
pub use engine::{normalized_target, EngineState, ScrollEngine, ScrollRequest};
pub use timing::FrameClock;
