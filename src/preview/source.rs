//! Where preview fragments come from

use async_trait::async_trait;

use super::error::PreviewError;

/// Single GET of a preview fragment.
///
/// `?Send` because browser futures are tied to the UI thread.
#[async_trait(?Send)]
pub trait PreviewSource {
  async fn fetch_preview(&self, url: &str) -> Result<String, PreviewError>;
}
