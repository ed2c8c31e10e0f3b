// ardu_core/src/domain.rs
use crate::error::{ArduError, Result};
use std::path::{Path, PathBuf};

/// Bytes of one input file, read in full before anything is generated.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ArduError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk<'a> {
    pub ordinal: usize,
    pub is_last: bool,
    pub bytes: &'a [u8],
}

/// Strings named in the "Generated from ... by ..." line of a header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderLabels {
    pub source: String,
    pub generator: String,
}

impl HeaderLabels {
    pub fn new(source: impl Into<String>, generator: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            generator: generator.into(),
        }
    }
}
