//! Hover/active/focus tracking for pseudo-class resolution
//!
//! Three independent slots, each holding at most one element handle. The
//! hosting application writes them from pointer and keyboard events; the
//! style-resolution pass reads them when matching `:hover`, `:active` and
//! `:focus`.
//!
//! Matching is by handle identity, never by structural equality: two nodes
//! may compare equal as values and still be different interaction targets,
//! so `H` is expected to be an arena index or similar opaque id whose
//! equality *is* identity. Slots are cleared explicitly by the host, never
//! inferred here.

use parking_lot::RwLock;

/// Per-viewer interaction state.
///
/// Each slot is single-writer (the event driver) and multi-reader (style
/// resolution); an update is one reference swap behind its own lock, so
/// readers of one slot never contend with writers of another.
#[derive(Debug, Default)]
pub struct InteractionState<H: Copy + PartialEq> {
  hovered: RwLock<Option<H>>,
  active: RwLock<Option<H>>,
  focused: RwLock<Option<H>>,
}

impl<H: Copy + PartialEq> InteractionState<H> {
  /// Creates a state with all slots empty.
  pub fn new() -> Self {
    Self {
      hovered: RwLock::new(None),
      active: RwLock::new(None),
      focused: RwLock::new(None),
    }
  }

  /// Sets or clears the hovered element.
  pub fn set_hover(&self, element: Option<H>) {
    *self.hovered.write() = element;
  }

  /// Sets or clears the active (pressed) element.
  pub fn set_active(&self, element: Option<H>) {
    *self.active.write() = element;
  }

  /// Sets or clears the focused element.
  pub fn set_focus(&self, element: Option<H>) {
    *self.focused.write() = element;
  }

  /// Returns true if `element` is the hovered element.
  pub fn is_hover(&self, element: H) -> bool {
    *self.hovered.read() == Some(element)
  }

  /// Returns true if `element` is the active element.
  pub fn is_active(&self, element: H) -> bool {
    *self.active.read() == Some(element)
  }

  /// Returns true if `element` is the focused element.
  pub fn is_focus(&self, element: H) -> bool {
    *self.focused.read() == Some(element)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn slots_are_independent() {
    let state = InteractionState::new();
    state.set_hover(Some(1usize));
    state.set_active(Some(2usize));

    assert!(state.is_hover(1));
    assert!(!state.is_hover(2));
    assert!(state.is_active(2));
    assert!(!state.is_focus(1));
    assert!(!state.is_focus(2));
  }

  #[test]
  fn clearing_a_slot_only_affects_that_slot() {
    let state = InteractionState::new();
    state.set_hover(Some(7usize));
    state.set_focus(Some(7usize));

    state.set_hover(None);
    assert!(!state.is_hover(7));
    assert!(state.is_focus(7));
  }

  #[test]
  fn matching_is_by_handle_not_by_node_contents() {
    // Two arena slots holding structurally equal nodes are still distinct
    // interaction targets.
    let arena = ["<a href='x'>", "<a href='x'>"];
    assert_eq!(arena[0], arena[1]);

    let state = InteractionState::new();
    state.set_hover(Some(0usize));
    assert!(state.is_hover(0));
    assert!(!state.is_hover(1));
  }
}
