// Preview core (target independent, testable natively)
pub mod preview;

// Browser surface (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod dashboard;

pub use preview::{
  ContentPolicy, Endpoints, ModalConfig, ModalController, ModalView, Phase, PreviewContent,
  PreviewError, PreviewSource, RequestTicket, Visibility,
};
