//! Property tests for the rendering guarantees
//!
//! Two of the notation's guarantees are universal enough to test as
//! properties: text with no token starters renders to itself, and an
//! unmatched `[` degrades to the exact original text. The parse-level
//! guarantee is stronger still: the symbol tree always reconstructs its
//! source, for any input at all.

use proptest::prelude::*;
use scrib_babel::formats::scrib::parser::parse_line;
use scrib_babel::line_to_markdown;

proptest! {
    #[test]
    fn plain_text_renders_unchanged(input in "[^\\[#]*") {
        prop_assert_eq!(line_to_markdown(&input), input);
    }

    #[test]
    fn unmatched_bracket_renders_verbatim(rest in "[^\\]]*") {
        let input = format!("[{rest}");
        prop_assert_eq!(line_to_markdown(&input), input);
    }

    #[test]
    fn parsing_preserves_source_text(input in ".*") {
        prop_assert_eq!(parse_line(&input).raw_text(), input);
    }
}
