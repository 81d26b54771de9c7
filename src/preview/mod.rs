//! Resource preview modal: state machine, endpoints and the controller that
//! ties a [`ModalView`] to a [`PreviewSource`].

mod config;
mod controller;
mod endpoints;
mod error;
mod page;
mod source;
mod state;
mod view;

pub use config::{ContentPolicy, ElementIds, ModalConfig};
pub use controller::ModalController;
pub use endpoints::Endpoints;
pub use error::{ConfigError, PreviewError};
pub use page::PageReadiness;
pub use source::PreviewSource;
pub use state::{ModalState, Phase, PreviewContent, RequestTicket, Resolution, Visibility};
pub use view::ModalView;
