//! Capabilities the navigator consumes from the hosting UI layer
//!
//! The navigator never owns the sections it tracks. Hosts hand out `Rc`
//! handles to their widgets and the registry keeps only `Weak` references,
//! so every method here takes `&self`; implementors use `Cell`/`RefCell`
//! for the state they mutate.

use crate::error::NavigationError;

/// A position in the host's shared (screen) coordinate space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Extent of a section relative to the content origin
///
/// Content space grows downwards: `top` is the distance from the content's
/// top edge to the section's top edge, and `bottom >= top`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A section that can be collapsed, hiding its body
pub trait CollapsibleController {
    fn is_expanded(&self) -> bool;

    /// Request a flip of the expanded state. Layout may react later.
    fn toggle_expanded(&self);
}

/// Reports where a section currently sits inside the scroll content
pub trait BoundsProvider {
    /// Bounds relative to `content_origin`, the content's top-left corner
    /// expressed in the same space the provider positions itself in.
    fn bounds_in_content_space(&self, content_origin: Point) -> Bounds;
}

/// The scrollable viewport hosting the document
///
/// Offsets are normalized: `1.0` shows the top of the content, `0.0` the
/// bottom.
pub trait ScrollContainer {
    fn content_height(&self) -> f64;

    fn viewport_height(&self) -> f64;

    fn normalized_offset(&self) -> f64;

    fn set_normalized_offset(&self, offset: f64);

    /// Recompute sizes now instead of on the host's own schedule
    fn force_layout_recompute(&self);

    /// Top-left corner of the content in the space bounds providers use
    fn content_origin(&self) -> Point {
        Point::default()
    }
}

/// Switches the host to another documentation page
pub trait PageNavigator {
    fn go_to_page(&self, page_key: &str) -> Result<(), NavigationError>;
}
