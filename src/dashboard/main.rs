//! Resource preview modal - Client-Side Rendered (WASM)
//!
//! Binds to the dashboard's modal elements once the page is parsed and
//! exposes `openModal(id)`.

use resource_preview::dashboard;

fn main() {
  console_error_panic_hook::set_once();

  let Some(document) = web_sys::window().and_then(|w| w.document()) else {
    return;
  };
  // Config placed before this script also sets the log level
  dashboard::init_logging(dashboard::load_config(&document).max_level());

  if let Err(e) = dashboard::bind_when_ready() {
    tracing::error!(error = %e, "Resource preview modal unavailable");
  }
}
