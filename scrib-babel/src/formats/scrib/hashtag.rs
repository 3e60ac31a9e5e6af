//! Hashtag tokens (`#topic`)
//!
//! A `#` starts a hashtag anywhere in a line. The token owns the characters it
//! consumed and decides itself how far to extend: it greedily accepts
//! characters until whitespace or a bracket delimiter. Rendering links the tag
//! to its wiki page.

use crate::formats::markdown::link::encode_component;
use crate::formats::scrib::cursor::Cursor;
use serde::{Deserialize, Serialize};

const MARKER: char = '#';

/// A hashtag token and the exact characters it consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hashtag {
    raw: String,
}

impl Hashtag {
    /// Whether the cursor is positioned at a hashtag start. Peek only.
    pub fn matches(cursor: &Cursor) -> bool {
        cursor.peek() == Some(MARKER)
    }

    /// Consume the marker and start the token.
    pub fn new(cursor: &mut Cursor) -> Self {
        let mut raw = String::new();
        if let Some(c) = cursor.bump() {
            raw.push(c);
        }
        Hashtag { raw }
    }

    /// Whether the next character still belongs to the tag.
    ///
    /// Bracket delimiters end the tag so that a hashtag inside a bracket
    /// interior cannot swallow the interior's closing `]`.
    pub fn can_accept_more(&self, cursor: &Cursor) -> bool {
        cursor
            .peek()
            .is_some_and(|c| !c.is_whitespace() && c != '[' && c != ']')
    }

    /// Consume one more character into the tag.
    pub fn accept_next(&mut self, cursor: &mut Cursor) {
        if let Some(c) = cursor.bump() {
            self.raw.push(c);
        }
    }

    /// The exact source characters consumed, marker included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The tag text without the marker.
    pub fn tag(&self) -> &str {
        self.raw.strip_prefix(MARKER).unwrap_or(&self.raw)
    }

    /// Render as a Markdown link to the tag's page.
    pub fn to_markdown(&self) -> String {
        if self.tag().is_empty() {
            // a bare `#` is just text
            return self.raw.clone();
        }
        format!("[{}](./{}.md)", self.raw, encode_component(self.tag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashtag_from(input: &str) -> (Hashtag, Cursor) {
        let mut cursor = Cursor::new(input);
        let mut hashtag = Hashtag::new(&mut cursor);
        while hashtag.can_accept_more(&cursor) {
            hashtag.accept_next(&mut cursor);
        }
        (hashtag, cursor)
    }

    #[test]
    fn test_matches_peeks_only() {
        let cursor = Cursor::new("#tag");
        assert!(Hashtag::matches(&cursor));
        assert_eq!(cursor.remaining(), 4);
    }

    #[test]
    fn test_accepts_until_whitespace() {
        let (hashtag, cursor) = hashtag_from("#one two");
        assert_eq!(hashtag.raw(), "#one");
        assert_eq!(hashtag.tag(), "one");
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn test_stops_at_bracket_delimiters() {
        let (hashtag, cursor) = hashtag_from("#tag]rest");
        assert_eq!(hashtag.raw(), "#tag");
        assert_eq!(cursor.peek(), Some(']'));
    }

    #[test]
    fn test_renders_page_link() {
        let (hashtag, _) = hashtag_from("#rust");
        assert_eq!(hashtag.to_markdown(), "[#rust](./rust.md)");
    }

    #[test]
    fn test_bare_marker_renders_as_text() {
        let (hashtag, _) = hashtag_from("# rest");
        assert_eq!(hashtag.to_markdown(), "#");
    }
}
