//! Print entry points: single-page painting and print position assignment.

mod common;

use common::{letter_page, MockProvider, RecordingSurface, CONTENT_MARK};
use docpane::{DrawingSurface, Error, Rect, RenderError, Size, Viewer};

fn print_viewer() -> Viewer<MockProvider> {
  Viewer::new(MockProvider::new(vec![
    letter_page(0.0),
    letter_page(700.0),
    letter_page(1400.0),
  ]))
}

fn sheet_surface() -> RecordingSurface {
  let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 600.0, 800.0));
  surface.print = true;
  surface
}

#[test]
fn paint_single_page_requires_a_layout() {
  let mut viewer = print_viewer();
  let mut surface = sheet_surface();
  let result = viewer.paint_single_page(&mut surface, 0);
  assert!(matches!(result, Err(Error::Render(RenderError::NoLayout))));
}

#[test]
fn paint_single_page_rejects_out_of_range_pages() {
  let mut viewer = print_viewer();
  viewer.prepare_print_layout(Size::new(600.0, 800.0)).unwrap();

  let mut surface = sheet_surface();
  let result = viewer.paint_single_page(&mut surface, 3);
  assert!(matches!(
    result,
    Err(Error::Render(RenderError::PageIndex { page: 3, count: 3 }))
  ));
}

#[test]
fn prepare_print_layout_reports_page_count() {
  let mut viewer = print_viewer();
  let count = viewer.prepare_print_layout(Size::new(600.0, 800.0)).unwrap();
  assert_eq!(count, 3);
  assert_eq!(viewer.provider().relayout_calls, 1);
}

#[test]
fn single_page_anchors_content_on_its_own_top_inset() {
  let mut viewer = print_viewer();
  viewer.prepare_print_layout(Size::new(600.0, 800.0)).unwrap();

  let mut surface = sheet_surface();
  let pass = viewer.paint_single_page(&mut surface, 1).unwrap();
  assert_eq!(pass.pages_painted, 1);

  // The sheet's margin box sits at the origin; document y 700 must land on
  // the content top (inset 50), so the document origin lands at 50 - 700.
  let marks = surface.fills_with(CONTENT_MARK);
  assert_eq!(marks.len(), 1);
  assert_eq!(marks[0].x, 50.0);
  assert_eq!(marks[0].y, 50.0 - 700.0);

  // No themed background on a print surface, translation undone, clip back.
  assert_eq!(surface.net_translation(), (0.0, 0.0));
  assert_eq!(surface.clip(), Rect::new(0.0, 0.0, 600.0, 800.0));
}

#[test]
fn single_page_paints_the_page_face_but_no_outline() {
  let mut viewer = print_viewer();
  viewer.prepare_print_layout(Size::new(600.0, 800.0)).unwrap();

  let mut surface = sheet_surface();
  viewer.paint_single_page(&mut surface, 0).unwrap();

  let faces = surface.fills_with(docpane::Color::WHITE);
  assert_eq!(faces, vec![Rect::new(0.0, 0.0, 600.0, 800.0)]);
  assert!(surface.outlines().is_empty());
}

#[test]
fn assign_print_positions_requires_a_layout() {
  let viewer = print_viewer();
  assert!(matches!(
    viewer.assign_print_positions(),
    Err(Error::Render(RenderError::NoLayout))
  ));
}

#[test]
fn assign_print_positions_stacks_sheets_without_clearance() {
  let mut viewer = print_viewer();
  viewer.prepare_print_layout(Size::new(600.0, 800.0)).unwrap();

  let layout = viewer.assign_print_positions().unwrap();
  assert_eq!(layout.pages.len(), 3);
  assert_eq!(layout.pages[0].margin_box_bounds.y, 0.0);
  assert_eq!(layout.pages[1].margin_box_bounds.y, 800.0);
  assert_eq!(layout.pages[2].margin_box_bounds.y, 1600.0);
  assert_eq!(layout.preferred_size, Size::new(600.0, 2400.0));
}

#[test]
fn failed_single_page_paint_is_captured_and_viewer_recovers() {
  let mut viewer = print_viewer();
  viewer.prepare_print_layout(Size::new(600.0, 800.0)).unwrap();
  viewer.provider_mut().paint_error = Some(RenderError::Paint {
    message: "printer jam".into(),
  });

  let mut surface = sheet_surface();
  assert!(viewer.paint_single_page(&mut surface, 0).is_err());
  assert_eq!(surface.net_translation(), (0.0, 0.0));

  viewer.provider_mut().paint_error = None;
  viewer.paint_single_page(&mut surface, 0).unwrap();
}
