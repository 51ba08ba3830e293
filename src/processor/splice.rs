//! Locates the `<name> = "..." ... ;` assignment inside a template and
//! swaps it for a freshly escaped constant.
//!
//! Locating is done by a small scanner rather than a pattern match over the
//! whole file, so the span is exact: string literals are read with their
//! escapes honoured and the span ends at the `;` that follows the last one.
//
//  Shape accepted after the marker name (informal):
//
//      assign  ::= NAME ws* '=' ws* literal (ws* literal)* ws* ';'
//      literal ::= '"' ( '\' any | [^"\\\n] )* '"'
//
//  A NAME occurrence that is glued to a longer identifier, or that is not
//  followed by that shape (a comment, a declaration without value), is
//  skipped.

use std::ops::Range;

use tracing::debug;

use crate::error::SpliceError;

/// Byte range of the assignment in the template, from the first byte of
/// the name through the closing `;`.
pub type MarkerSpan = Range<usize>;

/// Find the single assignment to `name` in `document`.
pub fn locate(document: &str, name: &str) -> Result<MarkerSpan, SpliceError> {
    let spans: Vec<MarkerSpan> = document
        .match_indices(name)
        .filter(|&(start, _)| on_identifier_boundary(document, start, name.len()))
        .filter_map(|(start, _)| {
            let mut scanner = Scanner::new(document, start + name.len());
            scanner.assignment().map(|end| start..end)
        })
        .collect();

    match spans.as_slice() {
        [] => Err(SpliceError::MarkerNotFound { name: name.into() }),
        [span] => Ok(span.clone()),
        _ => Err(SpliceError::AmbiguousMarker {
            name: name.into(),
            count: spans.len(),
        }),
    }
}

/// Replace the assignment to `name` with `constant`. Bytes outside the
/// located span are copied unchanged.
pub fn splice(document: &str, name: &str, constant: &str) -> Result<String, SpliceError> {
    let span = locate(document, name)?;
    debug!(start = span.start, end = span.end, "marker `{name}` located");

    let mut out = String::with_capacity(document.len() - span.len() + constant.len());
    out.push_str(&document[..span.start]);
    out.push_str(constant);
    out.push_str(&document[span.end..]);
    Ok(out)
}

fn is_ident(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn on_identifier_boundary(document: &str, start: usize, len: usize) -> bool {
    let bytes = document.as_bytes();
    let before = start.checked_sub(1).map(|i| bytes[i]);
    let after = bytes.get(start + len).copied();
    !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
}

/// Cursor over the bytes following a marker name.
struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(document: &'a str, pos: usize) -> Self {
        Self {
            bytes: document.as_bytes(),
            pos,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consume one string literal, opening quote included.
    fn literal(&mut self) -> Option<()> {
        if !self.eat(b'"') {
            return None;
        }
        loop {
            match self.peek()? {
                b'"' => {
                    self.pos += 1;
                    return Some(());
                }
                b'\\' => self.pos += 2,
                b'\n' => return None,
                _ => self.pos += 1,
            }
        }
    }

    /// Consume `= "..." ... ;` and return the offset just past the `;`.
    fn assignment(&mut self) -> Option<usize> {
        self.skip_whitespace();
        if !self.eat(b'=') {
            return None;
        }
        self.skip_whitespace();
        self.literal()?;
        loop {
            self.skip_whitespace();
            match self.peek()? {
                b'"' => self.literal()?,
                b';' => {
                    self.pos += 1;
                    return Some(self.pos);
                }
                _ => return None,
            }
        }
    }
}
