//! Modal controller

use std::cell::RefCell;

use tracing::{debug, warn};

use super::config::{ContentPolicy, ModalConfig};
use super::endpoints::Endpoints;
use super::error::PreviewError;
use super::source::PreviewSource;
use super::state::{ModalState, Phase, PreviewContent, RequestTicket, Visibility};
use super::view::ModalView;

/// Drives one preview modal.
///
/// Lives on the UI thread and is shared by event handlers through `Rc`.
/// State borrows never span an `.await`, so a second `open` or a `close`
/// can run while a fetch is outstanding.
pub struct ModalController<V, S> {
  view: V,
  source: S,
  endpoints: Endpoints,
  loading_text: String,
  policy: ContentPolicy,
  state: RefCell<ModalState>,
}

impl<V: ModalView, S: PreviewSource> ModalController<V, S> {
  pub fn new(view: V, source: S, config: &ModalConfig) -> Self {
    Self {
      view,
      source,
      endpoints: Endpoints::new(&config.base_path),
      loading_text: config.loading_text.clone(),
      policy: config.content_policy,
      state: RefCell::new(ModalState::new()),
    }
  }

  pub fn view(&self) -> &V {
    &self.view
  }

  pub fn endpoints(&self) -> &Endpoints {
    &self.endpoints
  }

  pub fn visibility(&self) -> Visibility {
    self.state.borrow().visibility()
  }

  pub fn phase(&self) -> Phase {
    self.state.borrow().phase()
  }

  pub fn content(&self) -> PreviewContent {
    self.state.borrow().content().clone()
  }

  pub fn full_view_href(&self) -> Option<String> {
    self.state.borrow().full_view_href().map(str::to_string)
  }

  /// Open the modal for `resource_id` and load its preview.
  ///
  /// The modal is visible with the loading placeholder before the first
  /// suspension point. Requests are never cancelled; if another `open`
  /// happens first, this one's response is discarded.
  pub async fn open(&self, resource_id: &str) {
    let ticket = self.begin(resource_id);
    let outcome = self.source.fetch_preview(&ticket.preview_url).await;
    self.finish(&ticket, outcome);
  }

  /// Synchronous half of [`open`](Self::open)
  pub fn begin(&self, resource_id: &str) -> RequestTicket {
    let (ticket, placeholder) = {
      let mut state = self.state.borrow_mut();
      let ticket = state.open(resource_id, &self.endpoints, &self.loading_text);
      (ticket, state.content().clone())
    };
    debug!(resource_id, seq = ticket.seq, url = %ticket.preview_url, "Opening resource preview");

    self.view.set_visible(true);
    self.view.render(&placeholder);
    ticket
  }

  /// Continuation of [`open`](Self::open). Returns whether the outcome was applied.
  pub fn finish(&self, ticket: &RequestTicket, outcome: Result<String, PreviewError>) -> bool {
    let failure = outcome.as_ref().err().map(ToString::to_string);
    let resolution = self.state.borrow_mut().resolve(ticket, outcome, self.policy);
    let Some(resolution) = resolution else {
      debug!(resource_id = %ticket.resource_id, seq = ticket.seq, "Discarding stale preview response");
      return false;
    };
    if let Some(error) = failure {
      warn!(resource_id = %ticket.resource_id, %error, "Resource preview failed");
    }

    self.view.render(&resolution.content);
    if let Some(href) = &resolution.full_view_href {
      self.view.set_full_view_href(href);
    }
    true
  }

  /// Hide the modal. No-op when already closed.
  pub fn close(&self) {
    let changed = self.state.borrow_mut().close();
    if changed {
      debug!("Closing resource preview");
      self.view.set_visible(false);
    }
  }

  /// Handle a click anywhere on the page; only hits on the backdrop close.
  pub fn dismiss_from_pointer(&self, target_is_backdrop: bool) {
    if target_is_backdrop {
      self.close();
    }
  }
}
