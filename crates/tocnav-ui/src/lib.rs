pub mod hover;
pub mod navigator;
pub mod scroll;

pub use hover::{HoverChange, LinkHover};
pub use navigator::Navigator;
pub use scroll::{EngineState, FrameClock, ScrollEngine};
