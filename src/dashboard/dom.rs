//! Binding to server-rendered modal markup
//!
//! The page supplies the container, body, close control and full-view link;
//! this module only mutates them.

use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, HtmlElement, MouseEvent};

use super::apiclient::HttpPreviewSource;
use crate::preview::{ModalConfig, ModalController, ModalView, PageReadiness, PreviewContent};

/// Id of the optional `<script type="application/json">` holding a [`ModalConfig`]
pub const CONFIG_ELEMENT_ID: &str = "preview-modal-config";

/// Name of the global function server-rendered markup calls
pub const OPEN_FN: &str = "openModal";

pub type DomModalController = ModalController<DomModalView, HttpPreviewSource>;

#[derive(Debug, Error)]
pub enum BindError {
  #[error("no window")]
  NoWindow,
  #[error("no document")]
  NoDocument,
  #[error("element #{0} not found")]
  MissingElement(String),
  #[error("element #{0} is not an HTML element")]
  NotHtmlElement(String),
  #[error("{0}")]
  Js(String),
}

impl From<JsValue> for BindError {
  fn from(value: JsValue) -> Self {
    BindError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
  }
}

/// [`ModalView`] over existing DOM elements
pub struct DomModalView {
  document: Document,
  modal: HtmlElement,
  body: Element,
  full_view: Element,
}

impl DomModalView {
  pub fn from_document(document: &Document, config: &ModalConfig) -> Result<Self, BindError> {
    let ids = &config.elements;
    let modal = find(document, &ids.modal)?
      .dyn_into::<HtmlElement>()
      .map_err(|_| BindError::NotHtmlElement(ids.modal.clone()))?;

    Ok(Self {
      document: document.clone(),
      modal,
      body: find(document, &ids.body)?,
      full_view: find(document, &ids.full_view)?,
    })
  }

  /// The container, which doubles as the backdrop
  pub fn modal(&self) -> &HtmlElement {
    &self.modal
  }

  fn show_paragraph(&self, text: &str, error: bool) -> Result<(), JsValue> {
    let p = self.document.create_element("p")?;
    p.set_text_content(Some(text));
    if error {
      p.set_class_name("modal-error");
      p.set_attribute("style", "color:red;")?;
    }
    self.body.set_inner_html("");
    self.body.append_child(&p)?;
    Ok(())
  }
}

impl ModalView for DomModalView {
  fn set_visible(&self, visible: bool) {
    let display = if visible { "block" } else { "none" };
    if let Err(e) = self.modal.style().set_property("display", display) {
      tracing::warn!(error = ?e, "Failed to toggle modal visibility");
    }
  }

  fn render(&self, content: &PreviewContent) {
    let result = match content {
      PreviewContent::Empty => {
        self.body.set_inner_html("");
        Ok(())
      }
      PreviewContent::Fragment(html) => {
        self.body.set_inner_html(html);
        Ok(())
      }
      PreviewContent::Loading(text) | PreviewContent::Text(text) => self.show_paragraph(text, false),
      PreviewContent::Error(message) => self.show_paragraph(message, true),
    };
    if let Err(e) = result {
      tracing::warn!(error = ?e, "Failed to render modal body");
    }
  }

  fn set_full_view_href(&self, href: &str) {
    if let Err(e) = self.full_view.set_attribute("href", href) {
      tracing::warn!(error = ?e, "Failed to set full view link");
    }
  }
}

fn find(document: &Document, id: &str) -> Result<Element, BindError> {
  document
    .get_element_by_id(id)
    .ok_or_else(|| BindError::MissingElement(id.to_string()))
}

/// Read the page's config block, falling back to defaults
pub fn load_config(document: &Document) -> ModalConfig {
  let Some(json) = document
    .get_element_by_id(CONFIG_ELEMENT_ID)
    .and_then(|el| el.text_content())
  else {
    return ModalConfig::default();
  };

  match ModalConfig::from_json(&json) {
    Ok(config) => config,
    Err(e) => {
      tracing::warn!(error = %e, "Ignoring modal config");
      ModalConfig::default()
    }
  }
}

/// Accept the id as either a string or a number from JS
fn resource_id_from_js(value: &JsValue) -> Option<String> {
  value
    .as_string()
    .or_else(|| value.as_f64().map(|n| n.to_string()))
}

/// Wire the modal into the page.
///
/// Binds the close control, a window-wide click listener that closes only on
/// the backdrop itself, and a global `openModal(id)` for the page's markup.
/// Listeners live as long as the page.
pub fn bind_document(config: &ModalConfig) -> Result<Rc<DomModalController>, BindError> {
  let window = web_sys::window().ok_or(BindError::NoWindow)?;
  let document = window.document().ok_or(BindError::NoDocument)?;

  let view = DomModalView::from_document(&document, config)?;
  let close_button = find(&document, &config.elements.close)?;
  let backdrop: JsValue = view.modal().clone().into();
  let controller = Rc::new(ModalController::new(view, HttpPreviewSource, config));

  let on_close = {
    let controller = controller.clone();
    Closure::<dyn Fn(MouseEvent)>::new(move |_: MouseEvent| controller.close())
  };
  close_button.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
  on_close.forget();

  let on_window_click = {
    let controller = controller.clone();
    Closure::<dyn Fn(MouseEvent)>::new(move |ev: MouseEvent| {
      let on_backdrop = ev
        .target()
        .map(|target| JsValue::from(target) == backdrop)
        .unwrap_or(false);
      controller.dismiss_from_pointer(on_backdrop);
    })
  };
  window.add_event_listener_with_callback("click", on_window_click.as_ref().unchecked_ref())?;
  on_window_click.forget();

  let open = {
    let controller = controller.clone();
    Closure::<dyn Fn(JsValue)>::new(move |id: JsValue| {
      let Some(resource_id) = resource_id_from_js(&id) else {
        tracing::warn!(id = ?id, "openModal called without a resource id");
        return;
      };
      let controller = controller.clone();
      wasm_bindgen_futures::spawn_local(async move {
        controller.open(&resource_id).await;
      });
    })
  };
  js_sys::Reflect::set(&window, &JsValue::from_str(OPEN_FN), open.as_ref())?;
  open.forget();

  tracing::info!(modal = %config.elements.modal, base = %controller.endpoints().base(), "Resource preview modal bound");
  Ok(controller)
}

/// Bind once the document has been parsed.
///
/// Binds immediately when the markup is already there, otherwise on
/// `DOMContentLoaded`. The config block is read at bind time. Failures to
/// bind are logged.
pub fn bind_when_ready() -> Result<(), BindError> {
  let window = web_sys::window().ok_or(BindError::NoWindow)?;
  let document = window.document().ok_or(BindError::NoDocument)?;

  if !PageReadiness::from_ready_state(&document.ready_state()).must_wait() {
    report_binding(bind_document(&load_config(&document)));
    return Ok(());
  }

  tracing::debug!("Document still loading, deferring modal binding");
  let loaded = document.clone();
  let on_ready = Closure::once(move || report_binding(bind_document(&load_config(&loaded))));
  let options = AddEventListenerOptions::new();
  options.set_once(true);
  document.add_event_listener_with_callback_and_add_event_listener_options(
    "DOMContentLoaded",
    on_ready.as_ref().unchecked_ref(),
    &options,
  )?;
  on_ready.forget();
  Ok(())
}

fn report_binding(result: Result<Rc<DomModalController>, BindError>) {
  if let Err(e) = result {
    tracing::error!(error = %e, "Resource preview modal unavailable");
  }
}
