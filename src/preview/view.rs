//! Presentation seam between the controller and the page

use super::state::PreviewContent;

/// The elements a preview modal drives.
///
/// Implementations own their handles (DOM nodes, signals, recorders in tests)
/// and are only ever called from the UI thread.
pub trait ModalView {
  fn set_visible(&self, visible: bool);

  /// Replace the body wholesale
  fn render(&self, content: &PreviewContent);

  fn set_full_view_href(&self, href: &str);
}
