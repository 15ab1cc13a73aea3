use std::io;

use thiserror::Error;

use crate::consts::LumpType;

pub type Md2Result<T> = Result<T, Md2Error>;

/// Everything that can stop a model from decoding.
///
/// Decoding is all-or-nothing, so a single value describes the first stage
/// that failed along with the sizes involved.
#[derive(Debug, Error)]
pub enum Md2Error {
    #[error("not an MD2 file: ident {ident:#010x} version {version} (expected \"IDP2\" version 8)")]
    BadMagicOrVersion { ident: i32, version: i32 },
    #[error("{lump} lump truncated: needs {needed} bytes, {available} available")]
    TruncatedData {
        lump: LumpType,
        needed: usize,
        available: usize,
    },
    #[error("invalid skin dimensions {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
    #[error("{lump} lump has negative count {count}")]
    InvalidCount { lump: LumpType, count: i32 },
    #[error("I/O error")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl Md2Error {
    pub(crate) fn truncated(lump: LumpType, needed: usize, available: usize) -> Self {
        Self::TruncatedData {
            lump,
            needed,
            available,
        }
    }

    /// True for every failure caused by the bytes themselves rather than by
    /// reading them.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Md2Error::Io { .. })
    }
}
