//! Shared mock provider and recording surface for integration tests.

use docpane::{
  BoxTreeProvider, Color, DrawingSurface, EdgeOffsets, LayoutError, PageMetrics, Rect,
  RenderError, Size, ViewportConstraints,
};

/// Sentinel color the mock provider paints its content with, so tests can
/// locate delegated box tree paints among the viewer's own fills.
pub const CONTENT_MARK: Color = Color::rgb(1, 2, 3);

/// Extent of the sentinel content fill, in document space at the origin.
pub const CONTENT_EXTENT: Size = Size::new(10.0, 10.0);

pub struct MockLayer {
  pages: Vec<PageMetrics>,
}

/// Scriptable box tree provider: fixed page metrics, optional failures, and
/// an optional hook that runs inside `relayout` (for invalidation races).
pub struct MockProvider {
  pub pages: Vec<PageMetrics>,
  pub relayout_calls: usize,
  pub paint_calls: usize,
  pub layout_error: Option<LayoutError>,
  pub paint_error: Option<RenderError>,
  pub on_relayout: Option<Box<dyn FnMut() + Send>>,
}

impl MockProvider {
  pub fn new(pages: Vec<PageMetrics>) -> Self {
    Self {
      pages,
      relayout_calls: 0,
      paint_calls: 0,
      layout_error: None,
      paint_error: None,
      on_relayout: None,
    }
  }
}

impl BoxTreeProvider for MockProvider {
  type Layer = MockLayer;

  fn relayout(&mut self, _constraints: ViewportConstraints) -> Result<MockLayer, LayoutError> {
    self.relayout_calls += 1;
    if let Some(hook) = self.on_relayout.as_mut() {
      hook();
    }
    if let Some(err) = self.layout_error.clone() {
      return Err(err);
    }
    Ok(MockLayer {
      pages: self.pages.clone(),
    })
  }

  fn paint(
    &mut self,
    surface: &mut dyn DrawingSurface,
    _layer: &MockLayer,
  ) -> Result<(), RenderError> {
    self.paint_calls += 1;
    if let Some(err) = self.paint_error.clone() {
      return Err(err);
    }
    surface.fill_rect(
      Rect::new(0.0, 0.0, CONTENT_EXTENT.width, CONTENT_EXTENT.height),
      CONTENT_MARK,
    );
    Ok(())
  }

  fn page_count(&self, layer: &MockLayer) -> usize {
    layer.pages.len()
  }

  fn page_metrics(&self, layer: &MockLayer, index: usize) -> PageMetrics {
    layer.pages[index]
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
  Fill { rect: Rect, color: Color },
  Outline { rect: Rect, color: Color },
  Clip(Rect),
}

/// A surface that records every operation in absolute coordinates (fills and
/// outlines are recorded with the current translation applied, the way they
/// would land on a real canvas).
pub struct RecordingSurface {
  clip: Rect,
  tx: f32,
  ty: f32,
  pub print: bool,
  pub ops: Vec<Op>,
}

impl RecordingSurface {
  pub fn new(bounds: Rect) -> Self {
    Self {
      clip: bounds,
      tx: 0.0,
      ty: 0.0,
      print: false,
      ops: Vec::new(),
    }
  }

  pub fn net_translation(&self) -> (f32, f32) {
    (self.tx, self.ty)
  }

  pub fn fills_with(&self, color: Color) -> Vec<Rect> {
    self
      .ops
      .iter()
      .filter_map(|op| match op {
        Op::Fill { rect, color: c } if *c == color => Some(*rect),
        _ => None,
      })
      .collect()
  }

  pub fn outlines(&self) -> Vec<(Rect, Color)> {
    self
      .ops
      .iter()
      .filter_map(|op| match op {
        Op::Outline { rect, color } => Some((*rect, *color)),
        _ => None,
      })
      .collect()
  }
}

impl DrawingSurface for RecordingSurface {
  fn set_clip(&mut self, rect: Rect) {
    self.clip = rect;
    self.ops.push(Op::Clip(rect));
  }

  fn clip(&self) -> Rect {
    self.clip
  }

  fn translate(&mut self, dx: f32, dy: f32) {
    self.tx += dx;
    self.ty += dy;
  }

  fn fill_rect(&mut self, rect: Rect, color: Color) {
    self.ops.push(Op::Fill {
      rect: rect.translate(self.tx, self.ty),
      color,
    });
  }

  fn draw_rect(&mut self, rect: Rect, color: Color) {
    self.ops.push(Op::Outline {
      rect: rect.translate(self.tx, self.ty),
      color,
    });
  }

  fn is_print(&self) -> bool {
    self.print
  }
}

/// A 600x800 page with 50-unit insets whose content slice starts at
/// `document_top`.
pub fn letter_page(document_top: f32) -> PageMetrics {
  PageMetrics {
    size: Size::new(600.0, 800.0),
    insets: EdgeOffsets::all(50.0),
    document_top,
  }
}
