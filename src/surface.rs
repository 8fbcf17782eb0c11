//! Drawing surface abstraction
//!
//! The viewer never touches a toolkit directly; everything it paints goes
//! through [`DrawingSurface`]. Implementations wrap whatever the host uses
//! (a raster canvas, a window backbuffer, a printer context) and only need
//! clipping, translation and rectangle fills/strokes; box content itself is
//! painted by the box tree provider against the same surface.

use crate::geometry::Rect;

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
  /// Red channel
  pub r: u8,
  /// Green channel
  pub g: u8,
  /// Blue channel
  pub b: u8,
  /// Alpha channel (255 = opaque)
  pub a: u8,
}

impl Color {
  /// Opaque white.
  pub const WHITE: Self = Self::rgb(255, 255, 255);
  /// Opaque black.
  pub const BLACK: Self = Self::rgb(0, 0, 0);
  /// Fully transparent.
  pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

  /// Creates an opaque color.
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }

  /// Creates a color with an explicit alpha.
  pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
    Self { r, g, b, a }
  }
}

/// Target for all viewer painting.
///
/// The clip is absolute (not affected by `translate`); the viewer reads it
/// with [`clip`](DrawingSurface::clip) before a paged pass and restores it
/// when done. A fresh surface should report its full paintable bounds as the
/// initial clip: the viewer uses it both for visibility tests and to fill
/// the default background.
pub trait DrawingSurface {
  /// Replaces the current clip rectangle.
  fn set_clip(&mut self, rect: Rect);

  /// Returns the current clip rectangle.
  fn clip(&self) -> Rect;

  /// Shifts the surface origin by the given deltas.
  ///
  /// Calls are cumulative; the viewer always undoes its own translations
  /// before returning, even when the box painter fails mid-page.
  fn translate(&mut self, dx: f32, dy: f32);

  /// Fills a rectangle with a solid color.
  fn fill_rect(&mut self, rect: Rect, color: Color);

  /// Strokes a one-unit rectangle outline.
  fn draw_rect(&mut self, rect: Rect, color: Color);

  /// True for printer-backed surfaces.
  ///
  /// Print surfaces carry no themed background, so the viewer skips the
  /// default background fill when this returns true.
  fn is_print(&self) -> bool {
    false
  }
}
