//! Error types for OBJ ingestion, parsing and assembly.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjError {
    /// File could not be opened or its size could not be determined.
    #[error("failed to open OBJ file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fewer bytes were read than the file reported.
    #[error("short read of OBJ file {}: expected {expected} bytes, got {actual}", .path.display())]
    Read {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// A line starts with a byte that is not a known directive marker.
    #[error("malformed OBJ directive at {line}:{column}: unexpected byte '{}'", .byte.escape_ascii())]
    MalformedDirective { line: usize, column: usize, byte: u8 },

    /// More unique vertices than a `u32` index buffer can address.
    #[error("too many vertices in OBJ (>{})", u32::MAX)]
    TooManyVertices,

    /// A face corner references an element that does not exist.
    #[error(
        "face {face} corner {corner}: {attribute} index {index} out of range (len={len})"
    )]
    IndexOutOfRange {
        face: usize,
        corner: usize,
        attribute: Attribute,
        index: i32,
        len: usize,
    },
}

/// Which array a face index points into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    Position,
    TexCoord,
    Normal,
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Attribute::Position => "position",
            Attribute::TexCoord => "tex coord",
            Attribute::Normal => "normal",
        })
    }
}

pub type ObjResult<T> = Result<T, ObjError>;
