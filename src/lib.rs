//! docpane: rendering and navigation controller for document viewers
//!
//! This crate decides *what* to paint, *where*, and *in what coordinate
//! mapping*, and tracks where the user has been. It deliberately owns none
//! of the heavy machinery: styling, box layout and actual box painting live
//! behind the [`BoxTreeProvider`] trait, and all drawing goes through the
//! [`DrawingSurface`] trait.
//!
//! # Components
//!
//! - [`NavigationHistory`]: visited-location log with browser back/forward
//!   semantics and forward-branch pruning.
//! - [`InteractionState`]: identity-based hover/active/focus slots consulted
//!   by pseudo-class resolution.
//! - [`pagination`]: page clip regions, margins and translation offsets for
//!   paged preview and print output.
//! - [`Viewer`]: the paint orchestrator tying it all together, with
//!   continuous and paged modes, layout invalidation and per-pass failure
//!   isolation.

pub mod error;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod pagination;
pub mod provider;
pub mod surface;
pub mod viewer;

pub use error::{Error, HistoryError, LayoutError, RenderError, Result};
pub use geometry::{EdgeOffsets, Point, Rect, Size};
pub use history::NavigationHistory;
pub use interaction::InteractionState;
pub use pagination::{
  PageDescriptor, PageLayout, PageMode, PAGE_CLEARANCE_HEIGHT, PAGE_CLEARANCE_WIDTH,
  PAGE_SEAM_BLEED,
};
pub use provider::{BoxTreeProvider, MediaTarget, PageMetrics, ViewportConstraints};
pub use surface::{Color, DrawingSurface};
pub use viewer::{InvalidationFlag, PaintPass, ViewMode, Viewer, ViewerBuilder};
