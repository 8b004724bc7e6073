//! Ancestor expansion: make a section visible by opening every collapsed
//! section above it, outermost first.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::registry::{SectionId, SectionRegistry};

/// Outcome of one expansion pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Registered ancestors of the target, root first
    pub chain: Vec<SectionId>,
    /// Sections that were collapsed and got a toggle request, in order
    pub toggled: Vec<SectionId>,
    /// Id at which the parent walk found a cycle
    pub cycle_at: Option<SectionId>,
}

impl Expansion {
    /// `Err(CycleDetected)` when the parent walk was cut short by a cycle.
    /// The sections found before the cycle are still expanded.
    pub fn check(&self) -> Result<()> {
        match &self.cycle_at {
            Some(id) => Err(Error::CycleDetected(id.to_string())),
            None => Ok(()),
        }
    }
}

/// Registered ancestors of `target`, ordered root first.
///
/// The walk stops at the first parent that was never registered, and at the
/// first parent that would be visited twice.
pub fn ancestor_chain(registry: &SectionRegistry, target: &str) -> (Vec<SectionId>, Option<SectionId>) {
    let mut chain = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(target);

    let mut current = target;
    let mut cycle_at = None;

    while let Some(parent) = registry.lookup(current).and_then(|e| e.parent()) {
        if !visited.insert(parent.as_str()) {
            cycle_at = Some(parent.clone());
            break;
        }
        if !registry.contains(parent.as_str()) {
            tracing::debug!(section = %target, orphan = %parent, "Parent chain ends at unregistered section");
            break;
        }
        chain.push(parent.clone());
        current = parent.as_str();
    }

    chain.reverse();
    (chain, cycle_at)
}

/// Request expansion of every collapsed ancestor of `target`, root first,
/// then of `target` itself if it is collapsible.
///
/// Best effort: toggles are requested, never verified.
pub fn expand_to(registry: &SectionRegistry, target: &str) -> Expansion {
    let (chain, cycle_at) = ancestor_chain(registry, target);

    let mut toggled = Vec::new();
    let target_id = SectionId::from(target);
    for id in chain.iter().chain(std::iter::once(&target_id)) {
        let Some(entry) = registry.lookup(id.as_str()) else {
            continue;
        };
        let Some(controller) = entry.controller() else {
            if entry.has_controller() {
                tracing::debug!(section = %id, "Collapsible controller dropped, skipping");
            }
            continue;
        };
        if !controller.is_expanded() {
            controller.toggle_expanded();
            toggled.push(id.clone());
        }
    }

    let expansion = Expansion {
        chain,
        toggled,
        cycle_at,
    };
    if let Err(e) = expansion.check() {
        tracing::warn!(section = %target, error = %e, "Parent walk stopped early");
    }
    expansion
}
