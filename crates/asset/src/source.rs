//! Raw file ingestion: the whole file in one buffer plus a trailing
//! terminator byte.

use std::{fs::File, io::Read, path::Path};

use crate::error::{ObjError, ObjResult};

/// Byte appended after the file contents.
pub const TERMINATOR: u8 = b'\0';

/// Immutable file contents followed by [`TERMINATOR`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSource {
    bytes: Vec<u8>,
}

impl RawSource {
    /// Read the file at `path` in a single allocation of `len + 1` bytes.
    ///
    /// The file handle is closed before this returns on every path.
    pub fn read(path: impl AsRef<Path>) -> ObjResult<Self> {
        let path = path.as_ref();
        let io_err = |source| ObjError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let expected = file.metadata().map_err(io_err)?.len();

        let bytes = read_exact_len(file, expected, path)?;
        log::debug!("Read {} bytes from {}", expected, path.display());
        Ok(Self { bytes })
    }

    /// Wrap in-memory contents, appending the terminator.
    pub fn from_bytes(contents: impl Into<Vec<u8>>) -> Self {
        let mut bytes = contents.into();
        bytes.push(TERMINATOR);
        Self { bytes }
    }

    /// Contents including the trailing terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Contents without the terminator.
    #[inline]
    pub fn contents(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// Number of `\n` bytes. Each line carries at most one record, so this
    /// plus one bounds the number of records.
    pub fn line_count(&self) -> usize {
        self.contents().iter().filter(|&&b| b == b'\n').count()
    }
}

/// Read exactly `expected` bytes from `reader` and append the terminator.
/// Fewer bytes than `expected` is a [`ObjError::Read`].
fn read_exact_len(reader: impl Read, expected: u64, path: &Path) -> ObjResult<Vec<u8>> {
    let mut bytes = Vec::with_capacity(expected as usize + 1);
    let actual = reader
        .take(expected)
        .read_to_end(&mut bytes)
        .map_err(|source| ObjError::Io {
            path: path.to_path_buf(),
            source,
        })? as u64;

    if actual < expected {
        return Err(ObjError::Read {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    bytes.push(TERMINATOR);
    Ok(bytes)
}
