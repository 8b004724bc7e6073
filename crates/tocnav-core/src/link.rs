//! Classification of opaque link identifiers handed over by the text layer

use crate::config::LinkConfig;
use crate::registry::SectionId;

/// What activating a link should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkIntent {
    /// Jump to a section on the current page
    ScrollToSection(SectionId),
    /// Switch to another documentation page
    NavigateToPage(String),
    /// Owned by the copy-to-clipboard collaborator
    ClipboardAction,
}

#[derive(Debug, Clone, Default)]
pub struct LinkResolver {
    config: LinkConfig,
}

impl LinkResolver {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    /// Classify a link id; the first matching rule wins.
    ///
    /// Returns `None` for an empty id.
    pub fn classify(&self, link_id: &str) -> Option<LinkIntent> {
        if link_id.is_empty() {
            return None;
        }
        if let Some(section) = link_id.strip_prefix(self.config.section_prefix.as_str()) {
            return Some(LinkIntent::ScrollToSection(SectionId::from(section)));
        }
        if link_id == self.config.clipboard_sentinel {
            return Some(LinkIntent::ClipboardAction);
        }
        Some(LinkIntent::NavigateToPage(link_id.to_string()))
    }

    /// Link id a table of contents should embed to jump to `section`
    pub fn section_link(&self, section: &str) -> String {
        format!("{}{}", self.config.section_prefix, section)
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_prefix_is_stripped() {
        let resolver = LinkResolver::default();
        assert_eq!(
            resolver.classify("toc_power-grid"),
            Some(LinkIntent::ScrollToSection(SectionId::from("power-grid")))
        );
    }

    #[test]
    fn test_clipboard_sentinel() {
        let resolver = LinkResolver::default();
        assert_eq!(resolver.classify("Clipboard"), Some(LinkIntent::ClipboardAction));
    }

    #[test]
    fn test_other_ids_are_page_keys() {
        let resolver = LinkResolver::default();
        assert_eq!(
            resolver.classify("ThingSolarPanel"),
            Some(LinkIntent::NavigateToPage("ThingSolarPanel".to_string()))
        );
        // Prefix matching is case sensitive
        assert_eq!(
            resolver.classify("TOC_intro"),
            Some(LinkIntent::NavigateToPage("TOC_intro".to_string()))
        );
    }

    #[test]
    fn test_empty_id_is_noop() {
        let resolver = LinkResolver::default();
        assert_eq!(resolver.classify(""), None);
    }

    #[test]
    fn test_empty_id_is_noop_with_empty_reserved_values() {
        let resolver = LinkResolver::new(LinkConfig {
            section_prefix: String::new(),
            clipboard_sentinel: String::new(),
        });
        assert_eq!(resolver.classify(""), None);
    }

    #[test]
    fn test_custom_reserved_values() {
        let resolver = LinkResolver::new(LinkConfig {
            section_prefix: "#".to_string(),
            clipboard_sentinel: "copy".to_string(),
        });
        assert_eq!(
            resolver.classify("#setup"),
            Some(LinkIntent::ScrollToSection(SectionId::from("setup")))
        );
        assert_eq!(resolver.classify("copy"), Some(LinkIntent::ClipboardAction));
        assert_eq!(resolver.section_link("setup"), "#setup");
    }

    #[test]
    fn test_section_link_round_trips_through_classify() {
        let resolver = LinkResolver::default();
        let link = resolver.section_link("atmospherics");
        assert_eq!(link, "toc_atmospherics");
        assert_eq!(
            resolver.classify(&link),
            Some(LinkIntent::ScrollToSection(SectionId::from("atmospherics")))
        );
    }
}
