//! Wiki link rendering
//!
//! A link's target is derived from its text: the text becomes a relative
//! Markdown filename, percent-encoded so the reference survives spaces and
//! punctuation. No validation happens here; whether the page exists is the
//! consumer's problem.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped when deriving a link target from its text. This is the
/// `encodeURIComponent` set: everything except alphanumerics and
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one path component.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

/// A wiki link with resolved text.
pub struct Link {
    text: String,
}

impl Link {
    pub fn new(text: String) -> Self {
        Link { text }
    }

    /// Render an anchor referencing the page named by the link text.
    pub fn to_markdown(&self) -> String {
        format!("[{}](./{}.md)", self.text, encode_component(&self.text))
    }
}
