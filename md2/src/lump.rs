use std::mem;

use crate::binaries::BinaryData;
use crate::consts::LumpType;
use crate::error::{Md2Error, Md2Result};

/// A record stored as a flat array in one lump.
pub trait Lump: BinaryData {
    fn lump_type() -> LumpType;
}

/// Turn a header count into a length, rejecting negative values.
pub fn lump_count(lump: LumpType, count: i32) -> Md2Result<usize> {
    usize::try_from(count).map_err(|_| Md2Error::InvalidCount { lump, count })
}

/// Decode `count` records of `T` from the start of a lump's bytes.
///
/// Trailing bytes past the last record are ignored.
pub fn read_lump<T: Lump>(bytes: &[u8], count: i32) -> Md2Result<Box<[T]>> {
    let count = lump_count(T::lump_type(), count)?;
    T::read_array(bytes, count).ok_or_else(|| {
        Md2Error::truncated(
            T::lump_type(),
            count.saturating_mul(mem::size_of::<T>()),
            bytes.len(),
        )
    })
}

#[cfg(test)]
mod lump_tests {
    use super::*;
    use crate::triangles::Triangle;

    #[test]
    fn negative_count_is_rejected() {
        let err = read_lump::<Triangle>(&[], -1).unwrap_err();
        assert!(matches!(
            err,
            Md2Error::InvalidCount {
                lump: LumpType::Triangles,
                count: -1
            }
        ));
    }

    #[test]
    fn short_lump_reports_sizes() {
        let err = read_lump::<Triangle>(&[0; 20], 2).unwrap_err();
        assert!(matches!(
            err,
            Md2Error::TruncatedData {
                lump: LumpType::Triangles,
                needed: 24,
                available: 20
            }
        ));
    }

    #[test]
    fn empty_lump_decodes_nothing() {
        assert!(read_lump::<Triangle>(&[], 0).unwrap().is_empty());
    }
}
