//! HTTP client for preview fragments

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::preview::{PreviewError, PreviewSource};

/// Fetches fragments from the dashboard over same-origin HTTP; the session
/// cookie goes along by browser default.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPreviewSource;

#[async_trait(?Send)]
impl PreviewSource for HttpPreviewSource {
  async fn fetch_preview(&self, url: &str) -> Result<String, PreviewError> {
    let resp = Request::get(url)
      .send()
      .await
      .map_err(|e| PreviewError::Network(e.to_string()))?;
    if !resp.ok() {
      return Err(PreviewError::from_status(resp.status()));
    }
    resp.text().await.map_err(|e| PreviewError::Body(e.to_string()))
  }
}
