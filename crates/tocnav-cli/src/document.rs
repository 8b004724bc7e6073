//! Simulated host document for driving the navigator without a real UI
//!
//! Sections are stacked top to bottom in outline order. Each visible
//! section contributes a header, plus its body while expanded. Like a real
//! layout system, the cached geometry does not follow a toggle immediately:
//! it is recomputed `layout_lag` frames later, or when layout is forced.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Deserialize;

use tocnav_core::{
    Bounds, BoundsProvider, CollapsibleController, NavigationError, PageNavigator, Point,
    ScrollContainer, SectionEntry,
};
use tocnav_ui::Navigator;

pub const HEADER_HEIGHT: f64 = 24.0;
const CONTENT_WIDTH: f64 = 640.0;

#[derive(Debug, Clone, Deserialize)]
pub struct Outline {
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    /// Page keys the simulated host can navigate to
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default, rename = "section")]
    pub sections: Vec<OutlineSection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutlineSection {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    /// Body height shown while the section is expanded
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub collapsible: bool,
    #[serde(default)]
    pub expanded: bool,
}

fn default_viewport_height() -> f64 {
    400.0
}

impl Outline {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read outline {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid outline")
    }
}

/// Geometry as of the last layout pass
#[derive(Debug, Default)]
struct Layout {
    tops: RefCell<HashMap<String, f64>>,
    content_height: Cell<f64>,
    /// Frames since the first toggle not yet reflected in the layout
    stale_for: Cell<Option<u32>>,
}

impl Layout {
    fn invalidate(&self) {
        if self.stale_for.get().is_none() {
            self.stale_for.set(Some(0));
        }
    }
}

pub struct SimSection {
    id: String,
    title: String,
    parent: Option<String>,
    body_height: f64,
    collapsible: bool,
    expanded: Cell<bool>,
    layout: Rc<Layout>,
}

impl SimSection {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Collapsed sections hide their body; plain sections always show it
    pub fn is_open(&self) -> bool {
        !self.collapsible || self.expanded.get()
    }
}

impl CollapsibleController for SimSection {
    fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    fn toggle_expanded(&self) {
        self.expanded.set(!self.expanded.get());
        self.layout.invalidate();
        tracing::debug!(section = %self.id, expanded = self.expanded.get(), "Section toggled");
    }
}

impl BoundsProvider for SimSection {
    /// The simulator lays sections out directly in content space, with the
    /// content origin fixed at (0, 0)
    fn bounds_in_content_space(&self, content_origin: Point) -> Bounds {
        let top = self.layout.tops.borrow().get(&self.id).copied().unwrap_or(0.0) - content_origin.y;
        let body = if self.is_open() { self.body_height } else { 0.0 };
        Bounds::new(top, top + HEADER_HEIGHT + body, -content_origin.x, CONTENT_WIDTH - content_origin.x)
    }
}

pub struct SimContainer {
    sections: Vec<Rc<SimSection>>,
    layout: Rc<Layout>,
    viewport_height: f64,
    layout_lag: u32,
    offset: Cell<f64>,
    layout_passes: Cell<u32>,
}

impl SimContainer {
    /// Host frame boundary: apply a pending layout once it has lagged long enough
    pub fn on_frame(&self) {
        if let Some(frames) = self.layout.stale_for.get() {
            if frames + 1 >= self.layout_lag {
                self.relayout();
            } else {
                self.layout.stale_for.set(Some(frames + 1));
            }
        }
    }

    pub fn layout_passes(&self) -> u32 {
        self.layout_passes.get()
    }

    /// Offset from the content top to the viewport top, in content units
    pub fn scrolled_distance(&self) -> f64 {
        let range = (self.layout.content_height.get() - self.viewport_height).max(0.0);
        (1.0 - self.offset.get()) * range
    }

    fn is_visible(&self, section: &SimSection, by_id: &HashMap<&str, &SimSection>) -> bool {
        let mut current = section.parent.as_deref();
        let mut hops = 0;
        while let Some(parent_id) = current {
            let Some(parent) = by_id.get(parent_id) else {
                break;
            };
            if !parent.is_open() {
                return false;
            }
            current = parent.parent.as_deref();
            hops += 1;
            if hops > self.sections.len() {
                break;
            }
        }
        true
    }

    fn relayout(&self) {
        let by_id: HashMap<&str, &SimSection> = self
            .sections
            .iter()
            .map(|s| (s.id.as_str(), s.as_ref()))
            .collect();

        let mut tops = HashMap::with_capacity(self.sections.len());
        let mut cursor = 0.0;
        for section in &self.sections {
            tops.insert(section.id.clone(), cursor);
            if self.is_visible(section, &by_id) {
                cursor += HEADER_HEIGHT;
                if section.is_open() {
                    cursor += section.body_height;
                }
            }
        }

        self.layout.tops.replace(tops);
        self.layout.content_height.set(cursor);
        self.layout.stale_for.set(None);
        self.layout_passes.set(self.layout_passes.get() + 1);
    }
}

impl ScrollContainer for SimContainer {
    fn content_height(&self) -> f64 {
        self.layout.content_height.get()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn normalized_offset(&self) -> f64 {
        self.offset.get()
    }

    fn set_normalized_offset(&self, offset: f64) {
        self.offset.set(offset.clamp(0.0, 1.0));
    }

    fn force_layout_recompute(&self) {
        self.relayout();
    }
}

#[derive(Debug, Default)]
pub struct SimPages {
    known: Vec<String>,
    current: RefCell<Option<String>>,
}

impl SimPages {
    pub fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }
}

impl PageNavigator for SimPages {
    fn go_to_page(&self, page_key: &str) -> Result<(), NavigationError> {
        if !self.known.iter().any(|p| p == page_key) {
            return Err(NavigationError::UnknownPage(page_key.to_string()));
        }
        self.current.replace(Some(page_key.to_string()));
        Ok(())
    }
}

pub struct SimDocument {
    pub container: Rc<SimContainer>,
    pub pages: Rc<SimPages>,
}

impl SimDocument {
    pub fn build(outline: &Outline, layout_lag: u32) -> Self {
        let layout = Rc::new(Layout::default());
        let sections = outline
            .sections
            .iter()
            .map(|s| {
                Rc::new(SimSection {
                    id: s.id.clone(),
                    title: s.title.clone().unwrap_or_else(|| s.id.clone()),
                    parent: s.parent.clone().filter(|p| !p.is_empty()),
                    body_height: s.height,
                    collapsible: s.collapsible,
                    expanded: Cell::new(s.expanded),
                    layout: layout.clone(),
                })
            })
            .collect();

        let container = Rc::new(SimContainer {
            sections,
            layout,
            viewport_height: outline.viewport_height,
            layout_lag,
            offset: Cell::new(1.0),
            layout_passes: Cell::new(0),
        });
        container.relayout();

        let pages = Rc::new(SimPages {
            known: outline.pages.clone(),
            current: RefCell::new(outline.pages.first().cloned()),
        });

        Self { container, pages }
    }

    pub fn sections(&self) -> &[Rc<SimSection>] {
        &self.container.sections
    }

    pub fn section(&self, id: &str) -> Option<&Rc<SimSection>> {
        self.sections().iter().find(|s| s.id == id)
    }

    /// Register every section the way a rendering pass would
    pub fn register_all(&self, navigator: &mut Navigator) {
        for section in self.sections() {
            let mut entry = SectionEntry::new(section);
            if section.collapsible {
                entry = entry.with_controller(section);
            }
            if let Some(parent) = &section.parent {
                entry = entry.with_parent(parent.as_str());
            }
            navigator.register_section(section.id.as_str(), entry);
        }
    }
}
