use std::mem;

use crate::binaries::{read_padded_str, BinaryData};
use crate::consts::{LumpType, SKIN_NAME_LENGTH};
use crate::error::Md2Result;
use crate::lump::{read_lump, Lump};

/// One 64 byte skin path slot.
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkinSlot {
    pub name: [u8; SKIN_NAME_LENGTH],
}

const _: () = assert!(mem::size_of::<SkinSlot>() == SKIN_NAME_LENGTH);

impl BinaryData for SkinSlot {}

impl Lump for SkinSlot {
    fn lump_type() -> LumpType {
        LumpType::Skins
    }
}

/// Decode skin names in file order.
///
/// Names keep their null padding, exactly 64 characters less any dropped
/// non-ASCII bytes. Use [`trim_padding`](crate::binaries::trim_padding) to get
/// the path itself.
pub fn decode_skin_names(bytes: &[u8], num_skins: i32) -> Md2Result<Vec<String>> {
    Ok(read_lump::<SkinSlot>(bytes, num_skins)?
        .iter()
        .map(|slot| read_padded_str(&slot.name))
        .collect())
}
