//! Line-oriented directive scanner over a [`RawSource`].
//!
//! The scanner never backtracks: every step classifies the byte under the
//! cursor into a [`Directive`] and the caller dispatches on it.

use std::fmt;

use crate::{
    error::{ObjError, ObjResult},
    source::{RawSource, TERMINATOR},
};

/// Read position inside a terminated byte buffer.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a RawSource) -> Self {
        Self {
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// `true` once the cursor sits on the trailing terminator.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos + 1 >= self.bytes.len()
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    /// Byte `offset` positions ahead; the terminator past the end.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> u8 {
        self.bytes
            .get(self.pos + offset)
            .copied()
            .unwrap_or(TERMINATOR)
    }

    /// Advance by `n` bytes, never past the terminator.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bytes.len().saturating_sub(1));
    }

    /// `true` at a line break or the end of input.
    #[inline]
    pub fn at_line_end(&self) -> bool {
        self.is_at_end() || matches!(self.peek(), b'\n' | b'\r')
    }

    /// Skip spaces and tabs.
    #[inline]
    pub fn skip_blanks(&mut self) {
        while !self.is_at_end() && matches!(self.peek(), b' ' | b'\t') {
            self.pos += 1;
        }
    }

    /// Move to the first byte of the next line (or to the end).
    /// Returns `true` if a `\n` was consumed.
    pub fn next_line(&mut self) -> bool {
        while !self.is_at_end() && self.peek() != b'\n' {
            self.pos += 1;
        }
        if self.is_at_end() {
            return false;
        }
        self.pos += 1;
        true
    }

    /// Bytes from the cursor up to the end of the current line.
    pub fn rest_of_line(&self) -> &'a [u8] {
        let end = self.bytes.len().saturating_sub(1);
        let rest = &self.bytes[self.pos.min(end)..end];
        let len = rest
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(rest.len());
        &rest[..len]
    }
}

/// Directives that carry no data and are skipped to the end of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipKind {
    /// `mtllib`
    MaterialLibrary,
    /// `usemtl`
    UseMaterial,
    /// `s`
    Smoothing,
    /// `o`
    Object,
    /// `l`
    LineElement,
    /// `g`
    Group,
    /// `#`
    Comment,
}

impl SkipKind {
    fn from_byte(b: u8) -> Option<Self> {
        Some(match b {
            b'm' => SkipKind::MaterialLibrary,
            b'u' => SkipKind::UseMaterial,
            b's' => SkipKind::Smoothing,
            b'o' => SkipKind::Object,
            b'l' => SkipKind::LineElement,
            b'g' => SkipKind::Group,
            b'#' => SkipKind::Comment,
            _ => return None,
        })
    }
}

/// What the byte under the cursor starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    Skip(SkipKind),
    /// A single space or tab.
    Whitespace,
    /// `\n` (len 1), `\r\n` (len 2), or a lone `\r` (len 1, no new line).
    LineBreak { len: usize },
    /// `v `
    Position,
    /// `vt`
    TexCoord,
    /// `vn`
    Normal,
    /// `f`
    Face,
    End,
}

impl Directive {
    /// Bytes occupied by the directive marker itself.
    pub fn marker_len(&self) -> usize {
        match self {
            Directive::Position | Directive::Face => 1,
            Directive::TexCoord | Directive::Normal => 2,
            Directive::LineBreak { len } => *len,
            Directive::Whitespace => 1,
            Directive::Skip(_) | Directive::End => 0,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Position => f.write_str("v"),
            Directive::TexCoord => f.write_str("vt"),
            Directive::Normal => f.write_str("vn"),
            Directive::Face => f.write_str("f"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Cursor plus the line bookkeeping needed for diagnostics.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    line: usize,
    line_start: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a RawSource) -> Self {
        Self {
            cursor: Cursor::new(source),
            line: 1,
            line_start: 0,
        }
    }

    /// 1-based line of the cursor.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the cursor.
    #[inline]
    pub fn column(&self) -> usize {
        self.cursor.pos() - self.line_start + 1
    }

    #[inline]
    pub fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// Classify the byte under the cursor without consuming it.
    pub fn classify(&self) -> ObjResult<Directive> {
        let c = &self.cursor;
        if c.is_at_end() {
            return Ok(Directive::End);
        }

        let b = c.peek();
        if let Some(kind) = SkipKind::from_byte(b) {
            return Ok(Directive::Skip(kind));
        }

        match (b, c.peek_at(1)) {
            (b' ' | b'\t', _) => Ok(Directive::Whitespace),
            (b'\n', _) => Ok(Directive::LineBreak { len: 1 }),
            (b'\r', b'\n') => Ok(Directive::LineBreak { len: 2 }),
            (b'\r', _) => Ok(Directive::LineBreak { len: 1 }),
            (b'v', b' ' | b'\t' | b'\n' | b'\r' | TERMINATOR) => Ok(Directive::Position),
            (b'v', b't') => Ok(Directive::TexCoord),
            (b'v', b'n') => Ok(Directive::Normal),
            (b'v', next) => Err(self.malformed_at(1, next)),
            (b'f', _) => Ok(Directive::Face),
            (other, _) => Err(self.malformed_at(0, other)),
        }
    }

    /// Consume `directive`'s marker (or the whole line for skips).
    pub fn consume(&mut self, directive: Directive) {
        match directive {
            Directive::Skip(_) => self.next_line(),
            Directive::LineBreak { len } => {
                let newline = self.cursor.peek_at(len - 1) == b'\n';
                self.cursor.advance(len);
                if newline {
                    self.start_line();
                }
            }
            other => self.cursor.advance(other.marker_len()),
        }
    }

    /// Discard the rest of the current line.
    pub fn next_line(&mut self) {
        if self.cursor.next_line() {
            self.start_line();
        }
    }

    fn start_line(&mut self) {
        self.line += 1;
        self.line_start = self.cursor.pos();
    }

    fn malformed_at(&self, offset: usize, byte: u8) -> ObjError {
        ObjError::MalformedDirective {
            line: self.line,
            column: self.column() + offset,
            byte,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directives(src: &str) -> ObjResult<Vec<Directive>> {
        let raw = RawSource::from_bytes(src);
        let mut scanner = Scanner::new(&raw);
        let mut out = Vec::new();
        loop {
            let d = scanner.classify()?;
            out.push(d);
            if d == Directive::End {
                return Ok(out);
            }
            match d {
                Directive::Position
                | Directive::TexCoord
                | Directive::Normal
                | Directive::Face => scanner.next_line(),
                other => scanner.consume(other),
            }
        }
    }

    #[test]
    fn classifies_vertex_family() {
        let got = directives("v 1 2 3\nvt 0 0\nvn 0 0 1\nf 1 1 1\n").expect("scan");
        assert_eq!(
            got,
            vec![
                Directive::Position,
                Directive::TexCoord,
                Directive::Normal,
                Directive::Face,
                Directive::End,
            ]
        );
    }

    #[test]
    fn skips_and_line_breaks() {
        let got = directives("# c\r\n\r\n  \ro x\n").expect("scan");
        assert_eq!(
            got,
            vec![
                Directive::Skip(SkipKind::Comment),
                Directive::LineBreak { len: 2 },
                Directive::Whitespace,
                Directive::Whitespace,
                Directive::LineBreak { len: 1 },
                Directive::Skip(SkipKind::Object),
                Directive::End,
            ]
        );
    }

    #[test]
    fn unknown_marker_reports_position() {
        let err = directives("v 0 0 0\n  x 1\n").unwrap_err();
        match err {
            ObjError::MalformedDirective { line, column, byte } => {
                assert_eq!((line, column, byte), (2, 3, b'x'));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unknown_vertex_subtype_is_malformed() {
        assert!(matches!(
            directives("vp 1 2\n"),
            Err(ObjError::MalformedDirective { byte: b'p', column: 2, .. })
        ));
    }

    #[test]
    fn cursor_never_passes_terminator() {
        let raw = RawSource::from_bytes("ab");
        let mut c = Cursor::new(&raw);
        c.advance(10);
        assert!(c.is_at_end());
        assert_eq!(c.peek(), TERMINATOR);
        assert!(!c.next_line());
        assert!(c.rest_of_line().is_empty());
    }

    #[test]
    fn rest_of_line_stops_at_break() {
        let raw = RawSource::from_bytes("f 1 2 3 4\r\nv");
        let mut c = Cursor::new(&raw);
        c.advance(8);
        assert_eq!(c.rest_of_line(), b"4");
    }
}
