//! Section registry: maps section ids to weak handles on their widgets
//!
//! Entries are added as sections render and only ever removed wholesale by
//! [`SectionRegistry::clear`] when the hosting page changes.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::host::{BoundsProvider, CollapsibleController};

/// Stable identifier of a navigable section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// What the registry knows about one section
#[derive(Clone)]
pub struct SectionEntry {
    bounds: Weak<dyn BoundsProvider>,
    controller: Option<Weak<dyn CollapsibleController>>,
    parent: Option<SectionId>,
}

impl fmt::Debug for SectionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionEntry")
            .field("bounds_alive", &(self.bounds.strong_count() > 0))
            .field("has_controller", &self.controller.is_some())
            .field("parent", &self.parent)
            .finish()
    }
}

impl SectionEntry {
    /// Track `bounds` without taking ownership of it
    pub fn new<B: BoundsProvider + 'static>(bounds: &Rc<B>) -> Self {
        let bounds = Rc::downgrade(bounds) as Weak<dyn BoundsProvider>;
        Self {
            bounds,
            controller: None,
            parent: None,
        }
    }

    pub fn with_controller<C: CollapsibleController + 'static>(mut self, controller: &Rc<C>) -> Self {
        let controller = Rc::downgrade(controller) as Weak<dyn CollapsibleController>;
        self.controller = Some(controller);
        self
    }

    /// Nest this section under `parent`. An empty id means "no parent".
    pub fn with_parent(mut self, parent: impl Into<SectionId>) -> Self {
        let parent = parent.into();
        self.parent = (!parent.is_empty()).then_some(parent);
        self
    }

    /// Bounds provider, if the widget is still alive
    pub fn bounds(&self) -> Option<Rc<dyn BoundsProvider>> {
        self.bounds.upgrade()
    }

    pub fn bounds_handle(&self) -> Weak<dyn BoundsProvider> {
        self.bounds.clone()
    }

    /// Collapsible controller, if one was registered and is still alive
    pub fn controller(&self) -> Option<Rc<dyn CollapsibleController>> {
        self.controller.as_ref().and_then(|c| c.upgrade())
    }

    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }

    pub fn parent(&self) -> Option<&SectionId> {
        self.parent.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct SectionRegistry {
    entries: HashMap<SectionId, SectionEntry>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `id`. Empty ids are ignored.
    pub fn register(&mut self, id: impl Into<SectionId>, entry: SectionEntry) {
        let id = id.into();
        if id.is_empty() {
            tracing::debug!("Ignoring section registration with empty id");
            return;
        }
        if self.entries.insert(id.clone(), entry).is_some() {
            tracing::debug!(section = %id, "Section re-registered, previous entry replaced");
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&SectionEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Drop every entry, parent link and controller handle
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            tracing::debug!(count = self.entries.len(), "Clearing section registry");
        }
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Bounds, Point};
    use std::cell::Cell;

    struct Section {
        top: f64,
        expanded: Cell<bool>,
    }

    impl BoundsProvider for Section {
        fn bounds_in_content_space(&self, _origin: Point) -> Bounds {
            Bounds::new(self.top, self.top + 20.0, 0.0, 100.0)
        }
    }

    impl CollapsibleController for Section {
        fn is_expanded(&self) -> bool {
            self.expanded.get()
        }

        fn toggle_expanded(&self) {
            self.expanded.set(!self.expanded.get());
        }
    }

    fn section(top: f64) -> Rc<Section> {
        Rc::new(Section {
            top,
            expanded: Cell::new(false),
        })
    }

    #[test]
    fn test_register_then_clear_is_unresolvable() {
        let s = section(0.0);
        let mut registry = SectionRegistry::new();
        registry.register("intro", SectionEntry::new(&s));
        assert!(registry.lookup("intro").is_some());

        registry.clear();
        assert!(registry.lookup("intro").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut registry = SectionRegistry::new();
        registry.clear();
        registry.clear();
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_last_registration_wins() {
        let first = section(10.0);
        let second = section(500.0);
        let mut registry = SectionRegistry::new();
        registry.register("power", SectionEntry::new(&first).with_parent("root"));
        registry.register("power", SectionEntry::new(&second));

        let entry = registry.lookup("power").unwrap();
        assert!(entry.parent().is_none());
        let top = entry.bounds().unwrap().bounds_in_content_space(Point::default()).top;
        assert!((top - 500.0).abs() < f64::EPSILON);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_ids_are_ignored() {
        let s = section(0.0);
        let mut registry = SectionRegistry::new();
        registry.register("", SectionEntry::new(&s));
        assert!(registry.is_empty());

        registry.register("child", SectionEntry::new(&s).with_parent(""));
        assert!(registry.lookup("child").unwrap().parent().is_none());
    }

    #[test]
    fn test_entries_do_not_keep_sections_alive() {
        let s = section(0.0);
        let mut registry = SectionRegistry::new();
        registry.register("gone", SectionEntry::new(&s).with_controller(&s));
        drop(s);

        let entry = registry.lookup("gone").unwrap();
        assert!(entry.bounds().is_none());
        assert!(entry.controller().is_none());
        assert!(entry.has_controller());
    }

    #[test]
    fn test_parent_may_be_registered_later() {
        let child = section(40.0);
        let parent = section(0.0);
        let mut registry = SectionRegistry::new();
        registry.register("child", SectionEntry::new(&child).with_parent("parent"));
        assert!(!registry.contains("parent"));

        registry.register("parent", SectionEntry::new(&parent).with_controller(&parent));
        let parent_id = registry.lookup("child").unwrap().parent().unwrap().clone();
        assert!(registry.lookup(parent_id.as_str()).unwrap().controller().is_some());
    }
}
