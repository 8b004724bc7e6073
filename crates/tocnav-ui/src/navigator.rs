//! Entry points the surrounding UI layer talks to
//!
//! Nothing here returns an error to the caller: a click on a stale link, a
//! page the host does not know, or a broken parent chain all end in a log
//! line and no further action for that request.

use std::rc::{Rc, Weak};
use std::time::Duration;

use tocnav_core::{
    expand_to, Error, LinkIntent, LinkResolver, NavigatorConfig, PageNavigator, Result,
    ScrollContainer, SectionEntry, SectionId, SectionRegistry,
};

use crate::scroll::{EngineState, ScrollEngine};

pub struct Navigator {
    registry: SectionRegistry,
    resolver: LinkResolver,
    engine: ScrollEngine,
    container: Weak<dyn ScrollContainer>,
    pages: Weak<dyn PageNavigator>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("sections", &self.registry.len())
            .field("engine", &self.engine)
            .finish()
    }
}

impl Navigator {
    pub fn new<S, P>(config: &NavigatorConfig, container: &Rc<S>, pages: &Rc<P>) -> Self
    where
        S: ScrollContainer + 'static,
        P: PageNavigator + 'static,
    {
        let container = Rc::downgrade(container) as Weak<dyn ScrollContainer>;
        let pages = Rc::downgrade(pages) as Weak<dyn PageNavigator>;
        Self {
            registry: SectionRegistry::new(),
            resolver: LinkResolver::new(config.links.clone()),
            engine: ScrollEngine::new(config.scroll.clone()),
            container,
            pages,
        }
    }

    pub fn register_section(&mut self, id: impl Into<SectionId>, entry: SectionEntry) {
        self.registry.register(id, entry);
    }

    /// Forget every section; call when the hosting page is replaced.
    /// A request still in flight targets the old page and is dropped too.
    pub fn clear_registry(&mut self) {
        self.registry.clear();
        self.engine.cancel();
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn resolver(&self) -> &LinkResolver {
        &self.resolver
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    #[inline]
    pub fn needs_update(&self) -> bool {
        self.engine.needs_update()
    }

    /// Dispatch a clicked link. The classified intent is returned so the
    /// host can route [`LinkIntent::ClipboardAction`] to its clipboard.
    pub fn handle_link_activated(&mut self, link_id: &str) -> Option<LinkIntent> {
        let intent = self.resolver.classify(link_id)?;
        match &intent {
            LinkIntent::ScrollToSection(section) => self.scroll_to_section(section.as_str()),
            LinkIntent::NavigateToPage(page) => {
                if let Err(e) = self.navigate(page) {
                    tracing::warn!(page = %page, error = %e, "Failed to navigate to page");
                }
            }
            LinkIntent::ClipboardAction => {
                tracing::debug!("Clipboard link left to the clipboard handler");
            }
        }
        Some(intent)
    }

    /// Expand the section's ancestors and start scrolling it into view,
    /// replacing any request in flight
    pub fn scroll_to_section(&mut self, id: &str) {
        match self.start_scroll(id) {
            Ok(()) => {}
            Err(Error::SectionNotFound(id)) => {
                tracing::warn!(section = %id, "TOC target not found");
            }
            Err(e) => {
                tracing::warn!(section = %id, error = %e, "Scroll request aborted");
            }
        }
    }

    /// Advance the scroll engine by one host frame
    pub fn tick(&mut self, dt: Duration) -> EngineState {
        if !self.engine.needs_update() {
            return EngineState::Idle;
        }
        match self.container.upgrade() {
            Some(container) => self.engine.tick(dt, container.as_ref()),
            None => {
                tracing::debug!("Scroll container is gone, dropping request");
                self.engine.cancel();
                EngineState::Idle
            }
        }
    }

    fn start_scroll(&mut self, id: &str) -> Result<()> {
        let entry = self
            .registry
            .lookup(id)
            .ok_or_else(|| Error::SectionNotFound(id.to_string()))?;
        let bounds = entry.bounds_handle();

        let expansion = expand_to(&self.registry, id);
        tracing::debug!(
            section = %id,
            ancestors = expansion.chain.len(),
            toggled = expansion.toggled.len(),
            "Expanded parent chain"
        );

        self.engine.begin(SectionId::from(id), bounds);
        Ok(())
    }

    fn navigate(&self, page: &str) -> Result<()> {
        let pages = self
            .pages
            .upgrade()
            .ok_or_else(|| Error::Other("page navigator is gone".to_string()))?;
        pages.go_to_page(page)?;
        tracing::debug!(page = %page, "Navigated to page");
        Ok(())
    }
}
