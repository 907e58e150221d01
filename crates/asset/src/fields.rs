//! Field parsers for `v`/`vt`/`vn` components and `f` index groups.
//!
//! None of these fail: anything missing reads as zero and is reported back
//! to the caller so it can be surfaced as a quality note. Scanning never
//! leaves the current line.

use crate::{mesh::IndexGroup, scanner::Cursor};

/// `N` float components plus the index of the first one that was missing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components<const N: usize> {
    pub values: [f32; N],
    pub first_missing: Option<usize>,
}

/// Parse `N` floats starting anywhere on a directive's data. The cursor is
/// left on the first byte after the last literal consumed.
pub fn parse_components<const N: usize>(cur: &mut Cursor<'_>) -> Components<N> {
    let mut out = Components {
        values: [0.0; N],
        first_missing: None,
    };

    if !seek(cur, starts_float) {
        out.first_missing = (N > 0).then_some(0);
        return out;
    }

    for (i, value) in out.values.iter_mut().enumerate() {
        match float_prefix(cur) {
            Some(v) => *value = v,
            None => {
                out.first_missing.get_or_insert(i);
            }
        }
    }
    out
}

/// Result of reading a face line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceFields {
    pub groups: [IndexGroup; 3],
    /// Groups actually present among the first three.
    pub found: usize,
    /// Further groups after the third, left unconsumed.
    pub extra: usize,
}

/// Parse exactly three index groups (`v`, `v/t`, `v//n` or `v/t/n`).
/// The cursor rests on the first byte after the third group.
pub fn parse_face(cur: &mut Cursor<'_>) -> FaceFields {
    let mut face = FaceFields::default();

    for group in face.groups.iter_mut() {
        if !seek(cur, starts_int) {
            return face;
        }
        *group = index_group(cur);
        face.found += 1;
    }

    face.extra = count_trailing_groups(*cur);
    face
}

fn index_group(cur: &mut Cursor<'_>) -> IndexGroup {
    let mut group = IndexGroup::new(int_prefix(cur).unwrap_or(0), 0, 0);

    if cur.peek() != b'/' {
        return group;
    }
    cur.advance(1);

    if cur.peek() == b'/' {
        cur.advance(1);
        group.normal = int_prefix(cur).unwrap_or(0);
        return group;
    }

    group.tex_coord = int_prefix(cur).unwrap_or(0);
    if cur.peek() == b'/' {
        cur.advance(1);
        group.normal = int_prefix(cur).unwrap_or(0);
    }
    group
}

fn count_trailing_groups(cur: Cursor<'_>) -> usize {
    cur.rest_of_line()
        .split(|&b| b == b' ' || b == b'\t')
        .take_while(|token| token.first() != Some(&b'#'))
        .filter(|token| token.first().is_some_and(|&b| b.is_ascii_digit() || b == b'-'))
        .count()
}

/// Advance along the current line until `starts` matches. Returns `false`
/// (cursor on the line end) if nothing matched.
fn seek(cur: &mut Cursor<'_>, starts: fn(&Cursor<'_>) -> bool) -> bool {
    while !cur.at_line_end() {
        if starts(cur) {
            return true;
        }
        cur.advance(1);
    }
    false
}

fn starts_float(cur: &Cursor<'_>) -> bool {
    let digit = |off| cur.peek_at(off).is_ascii_digit();
    match cur.peek() {
        b'0'..=b'9' => true,
        b'.' => digit(1),
        b'+' | b'-' => digit(1) || (cur.peek_at(1) == b'.' && digit(2)),
        _ => false,
    }
}

fn starts_int(cur: &Cursor<'_>) -> bool {
    match cur.peek() {
        b'0'..=b'9' => true,
        b'+' | b'-' => cur.peek_at(1).is_ascii_digit(),
        _ => false,
    }
}

/// Longest float literal at the cursor after optional blanks. On failure
/// the cursor does not move.
fn float_prefix(cur: &mut Cursor<'_>) -> Option<f32> {
    let mut probe = *cur;
    probe.skip_blanks();
    let bytes = probe.rest_of_line();

    let mut len = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        len += 1;
    }
    let int_digits = count_digits(&bytes[len..]);
    len += int_digits;

    let mut frac_digits = 0;
    if bytes.get(len) == Some(&b'.') {
        frac_digits = count_digits(&bytes[len + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            len += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut exp = len + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            len = exp + exp_digits;
        }
    }

    let text = std::str::from_utf8(&bytes[..len]).ok()?;
    let value = text.parse::<f32>().ok()?;
    probe.advance(len);
    *cur = probe;
    Some(value)
}

/// Signed decimal integer at the cursor, saturating at the `i32` range.
fn int_prefix(cur: &mut Cursor<'_>) -> Option<i32> {
    let bytes = cur.rest_of_line();
    let (negative, sign_len) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };
    let digits = count_digits(&bytes[sign_len..]);
    if digits == 0 {
        return None;
    }

    let magnitude = bytes[sign_len..sign_len + digits]
        .iter()
        .fold(0i64, |acc, &b| {
            (acc * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1)
        });
    let value = if negative { -magnitude } else { magnitude };
    cur.advance(sign_len + digits);
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
