//! Box tree provider interface
//!
//! The cascade, box construction and layout all live behind this trait. The
//! viewer asks for a relayout when its invalidation flag is set, then treats
//! the returned layer handle as an immutable-for-the-pass snapshot: in paged
//! mode the same tree is painted once per visible page, each time clipped
//! and translated so the right vertical slice lands on the page.
//!
//! The provider's `relayout` may be long-running; it is an opaque blocking
//! call with no cancellation support. A host wanting cancellation must
//! abandon the whole paint pass instead.

use crate::error::{LayoutError, RenderError};
use crate::geometry::{EdgeOffsets, Size};
use crate::surface::DrawingSurface;

/// What the layout is for. Print layout performs the provider's own page
/// breaking against the sheet size instead of the screen viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaTarget {
  /// Interactive screen viewport
  Screen,
  /// Paged print output
  Print,
}

/// Constraints handed to the provider for a relayout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConstraints {
  /// Available viewport (screen) or sheet (print) size
  pub viewport: Size,
  /// Media the layout targets
  pub media: MediaTarget,
}

/// Geometry the provider pre-computed for one page during page breaking.
///
/// Everything the pagination math consumes; positions on the painted canvas
/// are assigned later by the viewer, not by the provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageMetrics {
  /// Full margin-box size of the page (content plus margin/border/padding)
  pub size: Size,
  /// Combined margin, border and padding on each edge
  pub insets: EdgeOffsets,
  /// Y position in document space where this page's content slice begins
  pub document_top: f32,
}

/// The collaborator that owns documents, styles and layout.
///
/// `Layer` is an opaque handle to the root of a laid-out box tree. The
/// viewer caches the handle between paints but drops it on the first paint
/// after an invalidation; it never survives a relayout.
pub trait BoxTreeProvider {
  /// Opaque handle to a laid-out box tree.
  type Layer;

  /// Produces a fresh box tree for the given constraints.
  ///
  /// Returning `Ok` invalidates any previously issued layer handles.
  fn relayout(&mut self, constraints: ViewportConstraints) -> Result<Self::Layer, LayoutError>;

  /// Paints the full box tree against the surface's current clip and origin.
  fn paint(
    &mut self,
    surface: &mut dyn DrawingSurface,
    layer: &Self::Layer,
  ) -> Result<(), RenderError>;

  /// Number of pages the layout broke the document into.
  ///
  /// Zero for an empty document; the viewer treats that as nothing to
  /// paint, not as an error.
  fn page_count(&self, layer: &Self::Layer) -> usize;

  /// Pre-computed geometry for page `index` in `[0, page_count)`.
  fn page_metrics(&self, layer: &Self::Layer, index: usize) -> PageMetrics;
}
