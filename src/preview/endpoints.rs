//! Preview and full-view URLs for a resource

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that cannot appear literally in a path segment. `%` is left to
/// [`encode_segment`] so existing escapes pass through.
const SEGMENT: &AsciiSet = &CONTROLS
  .add(b' ')
  .add(b'"')
  .add(b'#')
  .add(b'/')
  .add(b'<')
  .add(b'>')
  .add(b'?')
  .add(b'\\')
  .add(b'`')
  .add(b'{')
  .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
  base: String,
}

impl Default for Endpoints {
  fn default() -> Self {
    Self::new("/dashboard")
  }
}

impl Endpoints {
  pub fn new(base: &str) -> Self {
    Self {
      base: base.trim_end_matches('/').to_string(),
    }
  }

  pub fn base(&self) -> &str {
    &self.base
  }

  /// Fragment endpoint fetched by the modal
  pub fn preview_url(&self, resource_id: &str) -> String {
    format!("{}/{}/preview", self.base, encode_segment(resource_id))
  }

  /// Full page for the resource, never fetched by the modal itself
  pub fn view_url(&self, resource_id: &str) -> String {
    format!("{}/{}/view", self.base, encode_segment(resource_id))
  }
}

/// Make `id` a single path segment, leaving valid segments untouched.
/// A `%` that does not start an escape is itself escaped.
fn encode_segment(id: &str) -> String {
  let encoded = utf8_percent_encode(id, SEGMENT).to_string();
  let bytes = encoded.as_bytes();
  let mut out = String::with_capacity(encoded.len());
  for (i, c) in encoded.char_indices() {
    let is_escape = c == '%'
      && bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
      && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
    if c == '%' && !is_escape {
      out.push_str("%25");
    } else {
      out.push(c);
    }
  }
  out
}
