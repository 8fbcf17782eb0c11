//! The viewer: paint orchestration, invalidation and the upward facade
//!
//! [`Viewer`] is the per-instance controller a host application talks to. It
//! owns the box tree provider, the cached root layer handle, the
//! level-triggered invalidation flag, the navigation history and the
//! interaction state. There are no process-wide statics, so independent
//! viewer instances coexist freely.
//!
//! # Paint pass
//!
//! Every paint pass walks the same state machine:
//! `Idle -> LayingOut -> Painting -> Idle`, and returns to `Idle` no matter
//! how the pass ends, so a single bad frame cannot wedge the viewer. The
//! machine is not reentrant; the host must not issue concurrent paint calls
//! against one viewer (taking `&mut self` enforces this within safe code).
//!
//! # Failure reporting
//!
//! Paint failures are returned as typed errors *and* broadcast to any
//! registered failure listeners. [`RenderError::Aborted`] is the exception:
//! it is a host-lifecycle control signal, propagates untouched and is never
//! shown to listeners.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace, warn};

use crate::error::{Error, RenderError, Result};
use crate::geometry::Size;
use crate::history::NavigationHistory;
use crate::interaction::InteractionState;
use crate::pagination::{self, PageLayout, PageMode, PAGE_SEAM_BLEED};
use crate::provider::{BoxTreeProvider, MediaTarget, ViewportConstraints};
use crate::surface::{Color, DrawingSurface};

/// Shared signal that cached layout is stale.
///
/// Set from any mutation site that changes box geometry (document change,
/// resize, style change); the viewer takes it at the start of a layout pass.
/// The flag is level-triggered: taking it is an atomic swap, so a set that
/// races in while layout is already running is kept for the *next* pass
/// instead of being lost.
#[derive(Debug, Clone, Default)]
pub struct InvalidationFlag {
  flag: Arc<AtomicBool>,
}

impl InvalidationFlag {
  /// Creates a cleared flag.
  pub fn new() -> Self {
    Self::default()
  }

  /// Marks the layout stale.
  pub fn set(&self) {
    self.flag.store(true, Ordering::Release);
  }

  /// Returns true if a relayout is pending.
  pub fn is_set(&self) -> bool {
    self.flag.load(Ordering::Acquire)
  }

  /// Clears the flag and returns whether it was set.
  pub(crate) fn take(&self) -> bool {
    self.flag.swap(false, Ordering::AcqRel)
  }
}

/// Whether the document renders as one continuous canvas or as discrete
/// fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
  /// One continuous scrollable canvas
  #[default]
  Continuous,
  /// Discretized page stack ("paged preview")
  Paged,
}

/// What a paint pass did, returned from [`Viewer::request_paint`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaintPass {
  /// True if this pass ran a relayout before painting
  pub relayout_performed: bool,
  /// Pages whose content was painted
  pub pages_painted: usize,
  /// Pages skipped because their clip fell outside the surface clip
  pub pages_skipped: usize,
  /// In paged mode, the canvas size covering every page, reported even
  /// when some pages were clipped away
  pub preferred_size: Option<Size>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PassState {
  Idle,
  LayingOut,
  Painting,
}

type FailureListener = Box<dyn Fn(&Error) + Send + Sync>;

/// Rendering/navigation controller for one document view.
///
/// `P` provides the box tree; `H` is the opaque element handle used for
/// hover/active/focus tracking (an arena index by default).
///
/// # Examples
///
/// ```no_run
/// use docpane::{Size, Viewer, ViewMode};
/// # use docpane::{BoxTreeProvider, DrawingSurface};
/// # fn demo<P: BoxTreeProvider, S: DrawingSurface>(provider: P, surface: &mut S) -> docpane::Result<()> {
/// let mut viewer: Viewer<P> = Viewer::builder(provider)
///   .viewport(Size::new(800.0, 600.0))
///   .view_mode(ViewMode::Paged)
///   .build();
///
/// viewer.invalidate_layout(); // document just loaded
/// let pass = viewer.request_paint(surface)?;
/// assert!(pass.relayout_performed);
/// # Ok(())
/// # }
/// ```
pub struct Viewer<P: BoxTreeProvider, H: Copy + PartialEq = usize> {
  provider: P,
  root_layer: Option<P::Layer>,
  invalidated: InvalidationFlag,
  state: PassState,
  view_mode: ViewMode,
  centered_paged_view: bool,
  viewport: Size,
  paint_background: bool,
  background: Color,
  page_background: Color,
  history: NavigationHistory,
  interaction: InteractionState<H>,
  listeners: Vec<FailureListener>,
}

/// Builder for [`Viewer`].
pub struct ViewerBuilder<P: BoxTreeProvider, H: Copy + PartialEq = usize> {
  viewer: Viewer<P, H>,
}

impl<P: BoxTreeProvider, H: Copy + PartialEq> ViewerBuilder<P, H> {
  /// Sets the viewport size used for layout and centering.
  pub fn viewport(mut self, viewport: Size) -> Self {
    self.viewer.viewport = viewport;
    self
  }

  /// Sets continuous or paged rendering.
  pub fn view_mode(mut self, mode: ViewMode) -> Self {
    self.viewer.view_mode = mode;
    self
  }

  /// Centers pages horizontally in paged mode.
  pub fn centered_paged_view(mut self, centered: bool) -> Self {
    self.viewer.centered_paged_view = centered;
    self
  }

  /// Sets the themed default background color.
  pub fn background(mut self, color: Color) -> Self {
    self.viewer.background = color;
    self
  }

  /// Sets the page face color painted under each page in paged mode.
  pub fn page_background(mut self, color: Color) -> Self {
    self.viewer.page_background = color;
    self
  }

  /// Enables or disables painting the default background entirely.
  pub fn paint_background(mut self, paint: bool) -> Self {
    self.viewer.paint_background = paint;
    self
  }

  /// Finishes construction.
  pub fn build(self) -> Viewer<P, H> {
    self.viewer
  }
}

impl<P: BoxTreeProvider, H: Copy + PartialEq> Viewer<P, H> {
  /// Creates a viewer with default settings: 800x600 viewport, continuous
  /// mode, opaque white backgrounds.
  pub fn new(provider: P) -> Self {
    Self {
      provider,
      root_layer: None,
      invalidated: InvalidationFlag::new(),
      state: PassState::Idle,
      view_mode: ViewMode::Continuous,
      centered_paged_view: false,
      viewport: Size::new(800.0, 600.0),
      paint_background: true,
      background: Color::WHITE,
      page_background: Color::WHITE,
      history: NavigationHistory::new(),
      interaction: InteractionState::new(),
      listeners: Vec::new(),
    }
  }

  /// Starts building a viewer with non-default settings.
  pub fn builder(provider: P) -> ViewerBuilder<P, H> {
    ViewerBuilder {
      viewer: Self::new(provider),
    }
  }

  // ----- settings and shared state -----

  /// The box tree provider.
  pub fn provider(&self) -> &P {
    &self.provider
  }

  /// Mutable access to the provider, e.g. to load a document. Callers must
  /// follow any geometry-changing mutation with [`invalidate_layout`](Self::invalidate_layout).
  pub fn provider_mut(&mut self) -> &mut P {
    &mut self.provider
  }

  /// A cloneable handle to this viewer's invalidation flag, for mutation
  /// sites (resize observers, document loaders) that outlive a borrow of
  /// the viewer.
  pub fn invalidation_flag(&self) -> InvalidationFlag {
    self.invalidated.clone()
  }

  /// Marks the cached layout stale; the next paint will relayout first.
  pub fn invalidate_layout(&self) {
    self.invalidated.set();
  }

  /// Resizes the viewport. Implies a layout invalidation.
  pub fn set_viewport(&mut self, viewport: Size) {
    if viewport != self.viewport {
      self.viewport = viewport;
      self.invalidated.set();
    }
  }

  /// Current viewport size.
  pub fn viewport(&self) -> Size {
    self.viewport
  }

  /// Switches between continuous and paged rendering.
  pub fn set_view_mode(&mut self, mode: ViewMode) {
    self.view_mode = mode;
  }

  /// Current view mode.
  pub fn view_mode(&self) -> ViewMode {
    self.view_mode
  }

  /// Centers pages horizontally in the viewport instead of the default
  /// left clearance.
  pub fn set_centered_paged_view(&mut self, centered: bool) {
    self.centered_paged_view = centered;
  }

  /// True when paged view centers pages.
  pub fn is_centered_paged_view(&self) -> bool {
    self.centered_paged_view
  }

  /// Sets the themed default background.
  pub fn set_background(&mut self, color: Color) {
    self.background = color;
  }

  /// Enables or disables the default background fill (the original
  /// "opaque" toggle).
  pub fn set_paint_background(&mut self, paint: bool) {
    self.paint_background = paint;
  }

  /// Registers a failure listener. Every captured layout/render failure is
  /// broadcast to all registered listeners in registration order.
  pub fn add_failure_listener(&mut self, listener: impl Fn(&Error) + Send + Sync + 'static) {
    self.listeners.push(Box::new(listener));
  }

  // ----- navigation history facade -----

  /// Records a visit. See [`NavigationHistory::visit`].
  pub fn visit(&self, location: impl Into<String>) {
    self.history.visit(location);
  }

  /// Navigates back. See [`NavigationHistory::back`].
  pub fn back(&self) -> Result<String> {
    Ok(self.history.back()?)
  }

  /// Navigates forward. See [`NavigationHistory::forward`].
  pub fn forward(&self) -> Result<String> {
    Ok(self.history.forward()?)
  }

  /// True if back navigation is possible.
  pub fn has_back(&self) -> bool {
    self.history.has_back()
  }

  /// True if forward navigation is possible.
  pub fn has_forward(&self) -> bool {
    self.history.has_forward()
  }

  /// True if `location` was visited this session.
  pub fn is_visited(&self, location: &str) -> bool {
    self.history.is_visited(location)
  }

  /// The current location, if anything was visited yet.
  pub fn current(&self) -> Option<String> {
    self.history.current()
  }

  /// The navigation history itself, for the style-resolution collaborator.
  pub fn history(&self) -> &NavigationHistory {
    &self.history
  }

  // ----- interaction state facade -----

  /// Sets or clears the hovered element.
  pub fn set_hover(&self, element: Option<H>) {
    self.interaction.set_hover(element);
  }

  /// Sets or clears the active element.
  pub fn set_active(&self, element: Option<H>) {
    self.interaction.set_active(element);
  }

  /// Sets or clears the focused element.
  pub fn set_focus(&self, element: Option<H>) {
    self.interaction.set_focus(element);
  }

  /// True if `element` is hovered.
  pub fn is_hover(&self, element: H) -> bool {
    self.interaction.is_hover(element)
  }

  /// True if `element` is active.
  pub fn is_active(&self, element: H) -> bool {
    self.interaction.is_active(element)
  }

  /// True if `element` is focused.
  pub fn is_focus(&self, element: H) -> bool {
    self.interaction.is_focus(element)
  }

  /// The interaction state itself, for the style-resolution collaborator.
  pub fn interaction(&self) -> &InteractionState<H> {
    &self.interaction
  }

  // ----- painting -----

  /// Paints the document onto `surface`.
  ///
  /// Relayouts first if the invalidation flag is set; with no pending
  /// invalidation the cached layer is repainted as-is, so two paints in a
  /// row perform exactly one relayout. With no box tree and no pending
  /// invalidation, only the default background is painted.
  ///
  /// Failures are returned *and* broadcast to failure listeners, except
  /// [`RenderError::Aborted`] which propagates silently. The viewer is back
  /// in its idle state when this returns, success or not.
  pub fn request_paint(&mut self, surface: &mut dyn DrawingSurface) -> Result<PaintPass> {
    debug_assert!(
      self.state == PassState::Idle,
      "paint pass re-entered; guard concurrent paint calls in the host"
    );

    let started = Instant::now();
    let result = self.run_paint_pass(surface);
    self.state = PassState::Idle;

    match &result {
      Ok(pass) => debug!(
        "paint pass took {:?} (relayout: {}, pages painted: {}, skipped: {})",
        started.elapsed(),
        pass.relayout_performed,
        pass.pages_painted,
        pass.pages_skipped
      ),
      Err(err) => debug!("paint pass failed after {:?}: {err}", started.elapsed()),
    }

    result
  }

  /// Paints exactly one page for print or export.
  ///
  /// Fails with [`RenderError::NoLayout`] when no box tree exists and with
  /// [`RenderError::PageIndex`] when `page_number` is outside
  /// `[0, page_count)`. Print geometry ignores the screen viewport and
  /// centering; no default background is painted.
  pub fn paint_single_page(
    &mut self,
    surface: &mut dyn DrawingSurface,
    page_number: usize,
  ) -> Result<PaintPass> {
    let count = match self.root_layer.as_ref() {
      None => return Err(Error::Render(RenderError::NoLayout)),
      Some(layer) => self.provider.page_count(layer),
    };
    if page_number >= count {
      return Err(Error::Render(RenderError::PageIndex {
        page: page_number,
        count,
      }));
    }

    self.state = PassState::Painting;
    let result = self.run_single_page_pass(surface, page_number);
    self.state = PassState::Idle;
    result
  }

  /// Relayouts against a print sheet size and returns the page count.
  ///
  /// Print drivers call this once before iterating
  /// [`paint_single_page`](Self::paint_single_page) over every sheet.
  pub fn prepare_print_layout(&mut self, sheet: Size) -> Result<usize> {
    self.state = PassState::LayingOut;
    // Take the flag first: a set racing in during this layout must survive
    // into the next screen paint.
    self.invalidated.take();

    let constraints = ViewportConstraints {
      viewport: sheet,
      media: MediaTarget::Print,
    };
    let result = self.provider.relayout(constraints);
    self.state = PassState::Idle;

    match result {
      Ok(layer) => {
        let count = self.provider.page_count(&layer);
        self.root_layer = Some(layer);
        trace!("print layout prepared: {count} page(s)");
        Ok(count)
      }
      Err(err) => {
        let err = Error::Layout(err);
        self.broadcast_failure(&err);
        Err(err)
      }
    }
  }

  /// Computes print painting positions for every page (stacked, zero
  /// clearance) without painting anything, so a print driver can size its
  /// output before the first sheet.
  pub fn assign_print_positions(&self) -> Result<PageLayout> {
    match self.root_layer.as_ref() {
      None => Err(Error::Render(RenderError::NoLayout)),
      Some(layer) => Ok(pagination::paginate(&self.provider, layer, PageMode::Print)),
    }
  }

  fn run_paint_pass(&mut self, surface: &mut dyn DrawingSurface) -> Result<PaintPass> {
    let mut pass = PaintPass::default();

    if self.invalidated.take() {
      self.state = PassState::LayingOut;
      trace!("layout invalidated; requesting fresh box tree");
      let constraints = ViewportConstraints {
        viewport: self.viewport,
        media: MediaTarget::Screen,
      };
      match self.provider.relayout(constraints) {
        Ok(layer) => {
          self.root_layer = Some(layer);
          pass.relayout_performed = true;
        }
        Err(err) => {
          let err = Error::Layout(err);
          self.broadcast_failure(&err);
          return Err(err);
        }
      }
    }

    if self.root_layer.is_none() {
      // No document yet: themed background only.
      self.paint_default_background(surface);
      return Ok(pass);
    }

    self.state = PassState::Painting;
    self.paint_default_background(surface);

    match self.view_mode {
      ViewMode::Continuous => {
        if let Some(layer) = self.root_layer.as_ref() {
          if let Err(err) = self.provider.paint(surface, layer) {
            return Err(self.capture_paint_failure(err));
          }
        }
      }
      ViewMode::Paged => {
        if let Some(layer) = self.root_layer.as_ref() {
          let layout = pagination::paginate(
            &self.provider,
            layer,
            PageMode::Screen {
              viewport_width: self.viewport.width,
              centered: self.centered_paged_view,
            },
          );
          pass.preferred_size = Some(layout.preferred_size);

          let working = surface.clip();
          for page in &layout.pages {
            surface.set_clip(working);

            let visible = match working.intersection(page.clip_bounds) {
              Some(overlap) if !overlap.is_empty() => overlap,
              _ => {
                pass.pages_skipped += 1;
                continue;
              }
            };
            trace!("painting page {} (visible {:?})", page.page_number, visible);

            // Page face covers background and margin areas; the boundary
            // outline is inset one unit so it survives the seam bleed.
            surface.fill_rect(page.margin_box_bounds, self.page_background);
            surface.draw_rect(
              page.margin_box_bounds.inflate(-PAGE_SEAM_BLEED),
              Color::BLACK,
            );

            if let Some(content_clip) = working.intersection(page.content_bounds) {
              if !content_clip.is_empty() {
                surface.set_clip(content_clip);
                surface.translate(page.content_offset.x, page.content_offset.y);
                let painted = self.provider.paint(surface, layer);
                surface.translate(-page.content_offset.x, -page.content_offset.y);
                if let Err(err) = painted {
                  surface.set_clip(working);
                  return Err(self.capture_paint_failure(err));
                }
              }
            }

            pass.pages_painted += 1;
          }
          surface.set_clip(working);
        }
      }
    }

    Ok(pass)
  }

  fn run_single_page_pass(
    &mut self,
    surface: &mut dyn DrawingSurface,
    page_number: usize,
  ) -> Result<PaintPass> {
    let mut pass = PaintPass::default();

    if let Some(layer) = self.root_layer.as_ref() {
      let page = pagination::single_page(&self.provider, layer, page_number);
      surface.fill_rect(page.margin_box_bounds, self.page_background);

      let working = surface.clip();
      if let Some(content_clip) = working.intersection(page.content_bounds) {
        if !content_clip.is_empty() {
          surface.set_clip(content_clip);
          surface.translate(page.content_offset.x, page.content_offset.y);
          let painted = self.provider.paint(surface, layer);
          surface.translate(-page.content_offset.x, -page.content_offset.y);
          surface.set_clip(working);
          if let Err(err) = painted {
            return Err(self.capture_paint_failure(err));
          }
        }
      }
      pass.pages_painted = 1;
    }

    Ok(pass)
  }

  fn paint_default_background(&self, surface: &mut dyn DrawingSurface) {
    // Print surfaces have no themed background.
    if self.paint_background && !surface.is_print() {
      surface.fill_rect(surface.clip(), self.background);
    }
  }

  fn capture_paint_failure(&self, err: RenderError) -> Error {
    if err == RenderError::Aborted {
      // Host-lifecycle control flow; listeners never see it.
      return Error::Render(err);
    }
    let err = Error::Render(err);
    self.broadcast_failure(&err);
    err
  }

  fn broadcast_failure(&self, err: &Error) {
    warn!(
      "render failure (reported to {} listener(s)): {err}",
      self.listeners.len()
    );
    for listener in &self.listeners {
      listener(err);
    }
  }
}
