//! Document readiness, as reported by `document.readyState`

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageReadiness {
  /// Still parsing; the modal markup may not exist yet
  Loading,
  Interactive,
  Complete,
}

impl PageReadiness {
  /// Unknown states are treated as parsed.
  pub fn from_ready_state(state: &str) -> Self {
    match state {
      "loading" => PageReadiness::Loading,
      "interactive" => PageReadiness::Interactive,
      _ => PageReadiness::Complete,
    }
  }

  /// Whether binding must wait for `DOMContentLoaded`
  pub fn must_wait(self) -> bool {
    self == PageReadiness::Loading
  }
}
