//! Tracks which link the pointer is over so the text layer can re-tint it

/// Highlight changes produced by one pointer event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverChange {
    /// Link whose highlight should be removed
    pub cleared: Option<usize>,
    /// Link that should now be highlighted
    pub highlighted: Option<usize>,
}

impl HoverChange {
    pub fn is_empty(&self) -> bool {
        self.cleared.is_none() && self.highlighted.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinkHover {
    current: Option<usize>,
}

impl LinkHover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Pointer moved; `link` is the index of the link under it, if any
    pub fn pointer_moved(&mut self, link: Option<usize>) -> HoverChange {
        if link == self.current {
            return HoverChange::default();
        }
        let change = HoverChange {
            cleared: self.current,
            highlighted: link,
        };
        self.current = link;
        change
    }

    pub fn pointer_exited(&mut self) -> HoverChange {
        HoverChange {
            cleared: self.current.take(),
            highlighted: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moving_between_links() {
        let mut hover = LinkHover::new();

        let change = hover.pointer_moved(Some(2));
        assert_eq!(change, HoverChange { cleared: None, highlighted: Some(2) });

        assert!(hover.pointer_moved(Some(2)).is_empty());

        let change = hover.pointer_moved(Some(5));
        assert_eq!(change, HoverChange { cleared: Some(2), highlighted: Some(5) });

        let change = hover.pointer_moved(None);
        assert_eq!(change, HoverChange { cleared: Some(5), highlighted: None });
        assert_eq!(hover.current(), None);
    }

    #[test]
    fn test_exit_clears_highlight_once() {
        let mut hover = LinkHover::new();
        hover.pointer_moved(Some(0));

        assert_eq!(hover.pointer_exited().cleared, Some(0));
        assert!(hover.pointer_exited().is_empty());
    }
}
