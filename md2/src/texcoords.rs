use std::mem;

use glam::{vec2, Vec2};

use crate::binaries::BinaryData;
use crate::consts::{LumpType, TEX_COORD_SIZE};
use crate::error::{Md2Error, Md2Result};
use crate::lump::{read_lump, Lump};

/// Texture coordinate in skin pixels, as stored on disk.
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RawTexCoord {
    pub s: i16,
    pub t: i16,
}

const _: () = assert!(mem::size_of::<RawTexCoord>() == TEX_COORD_SIZE);

impl BinaryData for RawTexCoord {
    fn from_le(self) -> Self {
        Self {
            s: i16::from_le(self.s),
            t: i16::from_le(self.t),
        }
    }
}

impl Lump for RawTexCoord {
    fn lump_type() -> LumpType {
        LumpType::TexCoords
    }
}

/// Texture coordinate normalized by the skin size, origin at the top left of
/// the skin.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TexCoord {
    pub s: f32,
    pub t: f32,
}

impl TexCoord {
    pub fn uv(&self) -> Vec2 {
        vec2(self.s, self.t)
    }

    /// UV with the origin moved to the bottom left, for consumers that load
    /// skins upside down.
    pub fn flipped_uv(&self) -> Vec2 {
        vec2(self.s, 1.0 - self.t)
    }
}

pub fn decode_tex_coords(bytes: &[u8], num_st: i32) -> Md2Result<Box<[RawTexCoord]>> {
    read_lump(bytes, num_st)
}

/// Divide every coordinate by the skin size.
///
/// A zero dimension is rejected even when there is nothing to divide.
pub fn normalize_tex_coords(
    raw: &[RawTexCoord],
    skin_width: i32,
    skin_height: i32,
) -> Md2Result<Vec<TexCoord>> {
    if skin_width == 0 || skin_height == 0 {
        return Err(Md2Error::InvalidDimension {
            width: skin_width,
            height: skin_height,
        });
    }

    let (width, height) = (skin_width as f32, skin_height as f32);
    Ok(raw
        .iter()
        .map(|st| TexCoord {
            s: f32::from(st.s) / width,
            t: f32::from(st.t) / height,
        })
        .collect())
}
