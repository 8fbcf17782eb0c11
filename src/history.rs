//! Navigation history with browser back/forward semantics
//!
//! The history is an ordered log of visited locations plus a cursor.
//! Visiting a new location while positioned mid-history prunes the abandoned
//! forward branch, exactly like a browser's address bar. A separate
//! visited-set remembers every location ever seen, so `:visited` styling of
//! links survives pruning.
//!
//! The log/cursor pair lives behind a single `RwLock` and is only ever
//! updated as a unit: a style-resolution pass calling [`NavigationHistory::is_visited`]
//! concurrently with the navigation driver can never observe a cursor
//! pointing past the end of a partially written log.

use parking_lot::RwLock;
use rustc_hash::FxHashSet;

use crate::error::HistoryError;

/// Ordered visited-location log with a cursor.
///
/// Locations are opaque URI-like strings compared by value. History is
/// in-memory only and resets with the viewer; persistence across sessions is
/// deliberately not offered.
///
/// # Examples
///
/// ```
/// use docpane::NavigationHistory;
///
/// let history = NavigationHistory::new();
/// history.visit("doc:a");
/// history.visit("doc:b");
///
/// assert_eq!(history.back().unwrap(), "doc:a");
/// assert!(history.has_forward());
///
/// // Visiting mid-history prunes the forward branch.
/// history.visit("doc:c");
/// assert!(!history.has_forward());
/// assert!(history.is_visited("doc:b"));
/// ```
#[derive(Debug)]
pub struct NavigationHistory {
  inner: RwLock<HistoryLog>,
}

impl Default for NavigationHistory {
  fn default() -> Self {
    Self::new()
  }
}

#[derive(Debug)]
struct HistoryLog {
  /// Reachable entries; index `cursor` is the current location.
  entries: Vec<String>,
  /// -1 means empty/unset. Invariant: -1 <= cursor < entries.len().
  cursor: isize,
  /// Every location ever visited, including pruned forward branches.
  seen: FxHashSet<String>,
}

impl NavigationHistory {
  /// Creates an empty history.
  pub fn new() -> Self {
    Self {
      inner: RwLock::new(HistoryLog {
        entries: Vec::new(),
        cursor: -1,
        seen: FxHashSet::default(),
      }),
    }
  }

  /// Records a visit to `location`.
  ///
  /// Re-visiting the current location is a no-op, so a reload that reports
  /// the same resolved URL does not produce a duplicate entry. Otherwise the
  /// cursor advances, any entries at or after the new cursor are discarded,
  /// and `location` becomes the new current entry.
  pub fn visit(&self, location: impl Into<String>) {
    let location = location.into();
    let mut log = self.inner.write();

    if log.cursor >= 0 && log.entries[log.cursor as usize] == location {
      return;
    }

    let insert_at = (log.cursor + 1) as usize;
    log.entries.truncate(insert_at);
    log.seen.insert(location.clone());
    log.entries.push(location);
    log.cursor = insert_at as isize;
  }

  /// Moves the cursor back one entry and returns the new current location.
  pub fn back(&self) -> Result<String, HistoryError> {
    let mut log = self.inner.write();
    if log.cursor <= 0 {
      return Err(HistoryError::OutOfRange {
        index: log.cursor,
        len: log.entries.len(),
      });
    }
    log.cursor -= 1;
    Ok(log.entries[log.cursor as usize].clone())
  }

  /// Moves the cursor forward one entry and returns the new current location.
  pub fn forward(&self) -> Result<String, HistoryError> {
    let mut log = self.inner.write();
    if log.cursor < 0 || (log.cursor + 1) as usize >= log.entries.len() {
      return Err(HistoryError::OutOfRange {
        index: log.cursor,
        len: log.entries.len(),
      });
    }
    log.cursor += 1;
    Ok(log.entries[log.cursor as usize].clone())
  }

  /// Returns true if `back()` would succeed.
  pub fn has_back(&self) -> bool {
    self.inner.read().cursor > 0
  }

  /// Returns true if `forward()` would succeed.
  pub fn has_forward(&self) -> bool {
    let log = self.inner.read();
    log.cursor >= 0 && ((log.cursor + 1) as usize) < log.entries.len()
  }

  /// Returns true if `location` was ever visited in this session.
  ///
  /// This is a relaxed membership test independent of the cursor; it stays
  /// true for entries pruned off an abandoned forward branch. Used purely to
  /// style previously seen links.
  pub fn is_visited(&self, location: &str) -> bool {
    self.inner.read().seen.contains(location)
  }

  /// The current location, if any.
  pub fn current(&self) -> Option<String> {
    let log = self.inner.read();
    if log.cursor >= 0 {
      Some(log.entries[log.cursor as usize].clone())
    } else {
      None
    }
  }

  /// Number of reachable entries (current branch only).
  pub fn len(&self) -> usize {
    self.inner.read().entries.len()
  }

  /// Returns true if nothing was visited yet.
  pub fn is_empty(&self) -> bool {
    self.inner.read().entries.is_empty()
  }
}
