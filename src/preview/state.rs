//! Modal state machine
//!
//! `Closed --open--> Loading --outcome--> Loaded`, and `close` from any
//! state. Every open issues a [`RequestTicket`]; only the ticket of the most
//! recent open may write content, so an older response that lands late is
//! dropped instead of overwriting the newer preview.

use super::config::ContentPolicy;
use super::endpoints::Endpoints;
use super::error::PreviewError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
  #[default]
  Closed,
  Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Closed,
  Loading,
  Loaded,
}

/// What the modal body currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PreviewContent {
  #[default]
  Empty,
  Loading(String),
  /// Server markup, rendered as-is
  Fragment(String),
  /// Server body shown escaped
  Text(String),
  Error(String),
}

impl PreviewContent {
  pub fn is_error(&self) -> bool {
    matches!(self, PreviewContent::Error(_))
  }
}

/// Issued by [`ModalState::open`], redeemed by [`ModalState::resolve`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
  pub seq: u64,
  pub resource_id: String,
  pub preview_url: String,
  pub view_url: String,
}

/// Changes a resolved ticket made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
  pub content: PreviewContent,
  /// Set only on success
  pub full_view_href: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ModalState {
  visibility: Visibility,
  content: PreviewContent,
  full_view_href: Option<String>,
  resource_id: Option<String>,
  latest_seq: u64,
  pending: bool,
}

impl ModalState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn visibility(&self) -> Visibility {
    self.visibility
  }

  pub fn is_open(&self) -> bool {
    self.visibility == Visibility::Open
  }

  pub fn phase(&self) -> Phase {
    match (self.visibility, self.pending) {
      (Visibility::Closed, _) => Phase::Closed,
      (Visibility::Open, true) => Phase::Loading,
      (Visibility::Open, false) => Phase::Loaded,
    }
  }

  pub fn content(&self) -> &PreviewContent {
    &self.content
  }

  pub fn full_view_href(&self) -> Option<&str> {
    self.full_view_href.as_deref()
  }

  /// Id passed to the most recent open
  pub fn resource_id(&self) -> Option<&str> {
    self.resource_id.as_deref()
  }

  /// Sequence number of the most recent open, 0 before the first
  pub fn latest_seq(&self) -> u64 {
    self.latest_seq
  }

  /// Show the modal with a loading placeholder and issue a ticket for the fetch
  pub fn open(&mut self, resource_id: &str, endpoints: &Endpoints, loading_text: &str) -> RequestTicket {
    self.latest_seq += 1;
    self.visibility = Visibility::Open;
    self.content = PreviewContent::Loading(loading_text.to_string());
    self.resource_id = Some(resource_id.to_string());
    self.pending = true;

    RequestTicket {
      seq: self.latest_seq,
      resource_id: resource_id.to_string(),
      preview_url: endpoints.preview_url(resource_id),
      view_url: endpoints.view_url(resource_id),
    }
  }

  /// Hide the modal. Content is kept until the next open replaces it.
  /// Returns false when already closed.
  pub fn close(&mut self) -> bool {
    if self.visibility == Visibility::Closed {
      return false;
    }
    self.visibility = Visibility::Closed;
    true
  }

  /// Apply the outcome of a fetch. Stale tickets change nothing and return `None`.
  pub fn resolve(
    &mut self,
    ticket: &RequestTicket,
    outcome: Result<String, PreviewError>,
    policy: ContentPolicy,
  ) -> Option<Resolution> {
    if ticket.seq != self.latest_seq {
      return None;
    }
    self.pending = false;

    let resolution = match outcome {
      Ok(body) => {
        let content = match policy {
          ContentPolicy::Trusted => PreviewContent::Fragment(body),
          ContentPolicy::Text => PreviewContent::Text(body),
        };
        self.full_view_href = Some(ticket.view_url.clone());
        Resolution {
          content,
          full_view_href: Some(ticket.view_url.clone()),
        }
      }
      Err(err) => Resolution {
        content: PreviewContent::Error(format!("Error: {}", err)),
        full_view_href: None,
      },
    };

    self.content = resolution.content.clone();
    Some(resolution)
  }
}
