//! The scrib tokenizer
//!
//!     A line is tokenized by a single forward pass: hashtags and brackets become
//!     tokens, everything else becomes raw characters. Brackets are the involved
//!     part. A `[` opens one of five constructs and the decision needs lookahead,
//!     so the bracket parser consumes speculatively and commits a rich variant
//!     only once the closing delimiter is found. Until then every consumed
//!     character is also accumulated into the token's `raw` text, which is what
//!     gets rendered when the rich parse fails. Failure therefore never loses
//!     input; it just downgrades to literal text.
//!
//!     Nested interiors reuse [`parse_symbols`] with `]` as the requested
//!     delimiter. The delimiter is left unconsumed for the enclosing bracket to
//!     take, and a nested call that exhausts the line without finding it reports
//!     failure to that bracket, never to the top-level caller.

use crate::ast::{Bracket, BracketKind, EmphasisKind, Line, Symbol};
use crate::formats::scrib::cursor::Cursor;
use crate::formats::scrib::hashtag::Hashtag;

/// A successful tokenizer run.
pub struct Parsed {
    pub symbols: Vec<Symbol>,
    /// Characters left unconsumed, the requested delimiter included.
    pub remaining: usize,
}

/// Parse one line of scrib into its symbol sequence.
pub fn parse_line(line: &str) -> Line {
    let mut cursor = Cursor::new(line);
    // without a delimiter the tokenizer cannot fail
    let symbols = match parse_symbols(&mut cursor, None) {
        Some(parsed) => parsed.symbols,
        None => Vec::new(),
    };
    Line { symbols }
}

/// Tokenize until the delimiter, or to the end of the line.
///
/// With a delimiter requested, stops at (and does not consume) the first
/// occurrence outside any token, returning the remaining length including it.
/// Returns `None` when the line ends first. With no delimiter requested the
/// whole line is consumed and `remaining` is 0.
pub fn parse_symbols(cursor: &mut Cursor, delimiter: Option<char>) -> Option<Parsed> {
    let mut symbols = Vec::new();
    while let Some(c) = cursor.peek() {
        if Hashtag::matches(cursor) {
            let mut hashtag = Hashtag::new(cursor);
            while hashtag.can_accept_more(cursor) {
                hashtag.accept_next(cursor);
            }
            symbols.push(Symbol::Hashtag(hashtag));
        } else if c == '[' {
            cursor.bump();
            symbols.push(Symbol::Bracket(parse_bracket(cursor)));
        } else if delimiter == Some(c) {
            return Some(Parsed {
                symbols,
                remaining: cursor.remaining(),
            });
        } else {
            cursor.bump();
            symbols.push(Symbol::Raw(c));
        }
    }
    if delimiter.is_some() {
        // delimiter never found
        return None;
    }
    Some(Parsed {
        symbols,
        remaining: 0,
    })
}

fn control_kind(c: char) -> Option<EmphasisKind> {
    match c {
        '*' => Some(EmphasisKind::Bold),
        '-' => Some(EmphasisKind::Strike),
        '_' => Some(EmphasisKind::Underline),
        _ => None,
    }
}

/// Parse one bracket construct. The opening `[` has already been consumed.
fn parse_bracket(cursor: &mut Cursor) -> Bracket {
    let mut raw = String::from("[");
    let Some(next) = cursor.peek() else {
        // `[` at the end of the line
        return Bracket {
            raw,
            kind: BracketKind::Unsupported,
            symbols: Vec::new(),
        };
    };
    if next == ']' {
        cursor.bump();
        raw.push(']');
        return Bracket {
            raw,
            kind: BracketKind::Empty,
            symbols: Vec::new(),
        };
    }
    if next == '[' {
        cursor.bump();
        raw.push('[');
        return parse_double_bold(raw, cursor);
    }
    if let Some(kind) = control_kind(next) {
        cursor.bump();
        return parse_control(raw, next, kind, cursor);
    }
    parse_link(raw, Vec::new(), cursor)
}

/// `[[bold text]]`
fn parse_double_bold(mut raw: String, cursor: &mut Cursor) -> Bracket {
    let mark = cursor.mark();
    let Some(parsed) = parse_symbols(cursor, Some(']')) else {
        // closing `]]` never found: the rest of the line is literal text
        raw.push_str(&cursor.consumed_since(mark));
        return Bracket {
            raw,
            kind: BracketKind::Unsupported,
            symbols: Vec::new(),
        };
    };
    raw.push_str(&cursor.consumed_since(mark));
    // the delimiter plus the character after it (the second `]` when well formed)
    for _ in 0..2 {
        if let Some(c) = cursor.bump() {
            raw.push(c);
        }
    }
    finish_rich(raw, BracketKind::DoubleBold, parsed.symbols)
}

/// `[* bold]`, `[-- strike]`, `[_ underline]`, and the no-space link fallback.
fn parse_control(mut raw: String, control: char, kind: EmphasisKind, cursor: &mut Cursor) -> Bracket {
    let mut level = 1;
    while cursor.peek() == Some(control) {
        cursor.bump();
        level += 1;
    }
    for _ in 0..level {
        raw.push(control);
    }

    if !cursor.peek().is_some_and(char::is_whitespace) {
        // no whitespace after the run: the control characters are literal text
        // and the remainder is a link attempt
        let symbols = vec![Symbol::Raw(control); level];
        return parse_link(raw, symbols, cursor);
    }
    while let Some(c) = cursor.peek() {
        if !c.is_whitespace() {
            break;
        }
        cursor.bump();
        raw.push(c);
    }

    let mark = cursor.mark();
    let Some(parsed) = parse_symbols(cursor, Some(']')) else {
        // closing `]` never found
        raw.push_str(&cursor.consumed_since(mark));
        return Bracket {
            raw,
            kind: BracketKind::Unsupported,
            symbols: Vec::new(),
        };
    };
    raw.push_str(&cursor.consumed_since(mark));
    if let Some(c) = cursor.bump() {
        raw.push(c); // the `]`
    }
    finish_rich(raw, BracketKind::Emphasis { kind, level }, parsed.symbols)
}

/// `[link text]`
///
/// Characters are consumed one at a time up to the closing `]`; each one is
/// kept both as raw text and as an interior symbol. Hitting the end of the
/// line instead of `]` fails the whole attempt.
fn parse_link(mut raw: String, mut symbols: Vec<Symbol>, cursor: &mut Cursor) -> Bracket {
    while let Some(c) = cursor.peek() {
        if c == ']' {
            break;
        }
        cursor.bump();
        raw.push(c);
        symbols.push(Symbol::Raw(c));
    }
    if cursor.is_empty() {
        return Bracket {
            raw,
            kind: BracketKind::Unsupported,
            symbols: Vec::new(),
        };
    }
    cursor.bump();
    raw.push(']');
    finish_rich(raw, BracketKind::Link, symbols)
}

/// Rich variants carry their interior; one that ended up with no interior
/// renders as its raw text anyway, so it is kept as `Unsupported`.
fn finish_rich(raw: String, kind: BracketKind, symbols: Vec<Symbol>) -> Bracket {
    if symbols.is_empty() {
        return Bracket {
            raw,
            kind: BracketKind::Unsupported,
            symbols,
        };
    }
    Bracket { raw, kind, symbols }
}
