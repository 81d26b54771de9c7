//! Browser side of the preview modal (WASM)

pub mod apiclient;
pub mod dom;

pub use apiclient::HttpPreviewSource;
pub use dom::{bind_document, bind_when_ready, load_config, BindError, DomModalView};

/// Route `tracing` events to the browser console
pub fn init_logging(level: tracing::Level) {
  let config = tracing_wasm::WASMLayerConfigBuilder::new()
    .set_max_level(level)
    .build();
  tracing_wasm::set_as_global_default_with_config(config);
}
