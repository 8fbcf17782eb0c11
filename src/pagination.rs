//! Page placement: clip regions, margins and translation offsets
//!
//! The provider's page breaking decides *what* is on each page; this module
//! decides *where* each page sits on the painted canvas and how document
//! space maps onto it. Nothing here is cached: geometry depends on the live
//! viewport size and on box tree content, both of which may change between
//! paints, so the viewer re-derives the page layout on every pass that
//! paints paged content.

use crate::geometry::{Point, Rect, Size};
use crate::provider::{BoxTreeProvider, PageMetrics};

/// Default horizontal clearance between the canvas edge and page stack.
pub const PAGE_CLEARANCE_WIDTH: f32 = 10.0;

/// Default vertical clearance above, between and below stacked pages.
pub const PAGE_CLEARANCE_HEIGHT: f32 = 10.0;

/// Amount each page's clip rectangle is expanded past its margin box, on
/// every edge.
///
/// Without the bleed, antialiased strokes on adjacent page borders leave
/// sub-pixel seams where the two clips meet. Adjacent clips overlapping by
/// one unit along the shared edge is intentional; downstream rendering
/// depends on the overlap, so do not "fix" this by clamping.
pub const PAGE_SEAM_BLEED: f32 = 1.0;

/// How pages are being laid onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageMode {
  /// On-screen paged preview: pages stacked with clearances, optionally
  /// centered in the viewport.
  Screen {
    /// Width available for centering
    viewport_width: f32,
    /// Center pages horizontally instead of the default left clearance
    centered: bool,
  },
  /// Print pagination: no clearances, no centering; positions are sheet
  /// coordinates.
  Print,
}

/// Computed placement for one page.
///
/// Produced fresh per paint pass from the current box tree; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDescriptor {
  /// Zero-based page number in document order
  pub page_number: usize,
  /// The page's full margin box (content plus margin/border/padding) in
  /// canvas coordinates
  pub margin_box_bounds: Rect,
  /// The content area inside the page's insets, in canvas coordinates
  pub content_bounds: Rect,
  /// Margin box expanded by [`PAGE_SEAM_BLEED`] on each edge; used for
  /// visibility tests against the surface clip
  pub clip_bounds: Rect,
  /// Translation that maps document space onto this page's content area:
  /// document y `document_top` lands on the content box's top edge
  pub content_offset: Point,
}

/// An ordered page sequence plus the canvas size needed to show all of it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
  /// Pages in document order
  pub pages: Vec<PageDescriptor>,
  /// Canvas size covering every page including trailing clearance. The
  /// caller must size its canvas to this even when some pages are clipped
  /// away during painting.
  pub preferred_size: Size,
}

/// Assigns painting positions to every page of `layer`.
///
/// Screen mode stacks pages top-down starting at [`PAGE_CLEARANCE_HEIGHT`]
/// with the same clearance between consecutive pages. The horizontal offset
/// is either the default left clearance or, when centered,
/// `(viewport_width - max_page_width) / 2`, identical for every page, and
/// allowed to go negative when pages are wider than the viewport (they spill
/// past the left edge rather than being clamped).
///
/// Print mode stacks pages with zero clearance at x = 0.
///
/// An empty document yields an empty layout with zero preferred size.
pub fn paginate<P: BoxTreeProvider>(provider: &P, layer: &P::Layer, mode: PageMode) -> PageLayout {
  let count = provider.page_count(layer);
  if count == 0 {
    return PageLayout::default();
  }

  let metrics: Vec<_> = (0..count).map(|i| provider.page_metrics(layer, i)).collect();
  let max_page_width = metrics
    .iter()
    .map(|m| m.size.width)
    .fold(0.0_f32, f32::max);

  let (offset_x, clearance) = match mode {
    PageMode::Screen {
      viewport_width,
      centered,
    } => {
      let offset_x = if centered {
        (viewport_width - max_page_width) / 2.0
      } else {
        PAGE_CLEARANCE_WIDTH
      };
      (offset_x, PAGE_CLEARANCE_HEIGHT)
    }
    PageMode::Print => (0.0, 0.0),
  };

  let mut pages = Vec::with_capacity(count);
  let mut painting_top = clearance;

  for (page_number, m) in metrics.iter().enumerate() {
    let margin_box = Rect::new(offset_x, painting_top, m.size.width, m.size.height);
    pages.push(describe(page_number, margin_box, m));
    painting_top += m.size.height + clearance;
  }

  let width = pages
    .iter()
    .map(|p| p.margin_box_bounds.max_x())
    .fold(0.0_f32, f32::max);
  let height = pages
    .iter()
    .map(|p| p.margin_box_bounds.max_y())
    .fold(0.0_f32, f32::max);

  PageLayout {
    pages,
    preferred_size: Size::new(width + clearance_width(mode), height + clearance),
  }
}

/// Computes one page's geometry for printing a single sheet.
///
/// The sheet's margin box sits at the origin (print output has no viewer
/// clearance between independently printed sheets) and the content
/// translation anchors on the page's own top inset: `insets.top -
/// document_top` rather than a stacking position.
///
/// The caller is responsible for validating `page_number` against
/// [`BoxTreeProvider::page_count`].
pub fn single_page<P: BoxTreeProvider>(
  provider: &P,
  layer: &P::Layer,
  page_number: usize,
) -> PageDescriptor {
  let m = provider.page_metrics(layer, page_number);
  let margin_box = Rect::new(0.0, 0.0, m.size.width, m.size.height);
  describe(page_number, margin_box, &m)
}

fn describe(page_number: usize, margin_box: Rect, metrics: &PageMetrics) -> PageDescriptor {
  let content = margin_box.inset(metrics.insets);
  PageDescriptor {
    page_number,
    margin_box_bounds: margin_box,
    content_bounds: content,
    clip_bounds: margin_box.inflate(PAGE_SEAM_BLEED),
    content_offset: Point::new(content.x, content.y - metrics.document_top),
  }
}

fn clearance_width(mode: PageMode) -> f32 {
  match mode {
    PageMode::Screen { .. } => PAGE_CLEARANCE_WIDTH,
    PageMode::Print => 0.0,
  }
}
