//! The page as the loaders see it.
//!
//! Loaders never query a real document; the embedder snapshots which
//! containers exist and which of them shipped static fallback content,
//! and the snapshot drives loader activation. Fallback presence is an
//! explicit marker set by the embedder (`data-fallback` in the markup),
//! not inferred from container contents.

use std::collections::HashMap;

/// Per-container state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlotState {
    /// The container shipped static fallback content the loader may keep.
    pub fallback: bool,
}

/// Snapshot of the containers present on the current page.
#[derive(Debug, Clone, Default)]
pub struct PageModel {
    slots: HashMap<String, SlotState>,
}

impl PageModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty container.
    #[must_use]
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.slots.insert(id.into(), SlotState::default());
        self
    }

    /// Register a container that already holds fallback content.
    #[must_use]
    pub fn with_fallback_container(mut self, id: impl Into<String>) -> Self {
        self.slots.insert(id.into(), SlotState { fallback: true });
        self
    }

    /// Whether the container exists on this page.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// Whether the container carries the fallback marker.
    #[must_use]
    pub fn has_fallback(&self, id: &str) -> bool {
        self.slots.get(id).is_some_and(|slot| slot.fallback)
    }
}
