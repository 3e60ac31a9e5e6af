//! Export tests for Markdown rendering (scrib → Markdown/HTML fragments)

use crate::common::{parse, render};
use insta::assert_snapshot;
use scrib_babel::format::Format;
use scrib_babel::formats::markdown::MarkdownFormat;

#[test]
fn test_plain_text_renders_unchanged() {
    assert_eq!(render("nothing special here."), "nothing special here.");
}

#[test]
fn test_bold_level_one_is_plain() {
    assert_eq!(render("[* text]"), "<b>text</b>");
}

#[test]
fn test_bold_level_formula() {
    assert_eq!(
        render("[** text]"),
        "<b style=\"font-size:1.2em;\" class=\"level-2\">text</b>"
    );
    assert_eq!(
        render("[*** text]"),
        "<b style=\"font-size:1.4em;\" class=\"level-3\">text</b>"
    );
}

#[test]
fn test_interior_keeps_trailing_spaces() {
    // everything between the consumed whitespace run and the `]` belongs
    // to the interior
    assert_eq!(render("[* text ]"), "<b>text </b>");
}

#[test]
fn test_strike_and_underline() {
    assert_eq!(render("[- x]"), "<del>x</del>");
    assert_eq!(render("[_ x]"), "<u>x</u>");
    // level changes nothing for these
    assert_eq!(render("[-- x]"), "<del>x</del>");
}

#[test]
fn test_double_bracket_bold() {
    assert_eq!(render("[[text]]"), "<b>text</b>");
}

#[test]
fn test_nested_bold() {
    assert_eq!(render("[[a [* b] c]]"), "<b>a <b>b</b> c</b>");
}

#[test]
fn test_link_renders_anchor() {
    assert_eq!(render("[page]"), "[page](./page.md)");
    assert_eq!(render("[page name]"), "[page name](./page%20name.md)");
}

#[test]
fn test_control_char_without_space_is_a_link() {
    assert_eq!(render("[*text]"), "[*text](./*text.md)");
}

#[test]
fn test_empty_bracket_is_literal() {
    assert_eq!(render("[]"), "[]");
}

#[test]
fn test_malformed_input_renders_verbatim() {
    for input in ["[", "[abc", "[[abc", "[* abc", "[*abc", "[[a [* b] c"] {
        assert_eq!(render(input), input, "input: {input:?}");
    }
}

#[test]
fn test_hashtag_renders_page_link() {
    assert_eq!(render("see #rust now"), "see [#rust](./rust.md) now");
}

#[test]
fn test_hashtag_inside_emphasis() {
    assert_eq!(render("[* see #rust]"), "<b>see [#rust](./rust.md)</b>");
}

#[test]
fn test_document_serialization_terminates_lines() {
    let doc = parse("[* a]\nplain\n");
    let out = MarkdownFormat.serialize(&doc).expect("serialize");
    assert_eq!(out, "<b>a</b>\nplain\n");
}

#[test]
fn test_kitchensink_line() {
    let out = render("intro [* bold] mid [[big [- gone]]] end #tag [page one]");
    assert_snapshot!(out, @"intro <b>bold</b> mid <b>big <del>gone</del></b> end [#tag](./tag.md) [page one](./page%20one.md)");
}

#[test]
fn test_emphasis_levels_snapshot() {
    let out = render("[* one] [** two] [*** three]");
    assert_snapshot!(out, @r#"<b>one</b> <b style="font-size:1.2em;" class="level-2">two</b> <b style="font-size:1.4em;" class="level-3">three</b>"#);
}
