use std::mem;

use crate::binaries::BinaryData;
use crate::consts::{frame_stride, LumpType, HEADER_SIZE, MD2_IDENT, MD2_VERSION};
use crate::error::{Md2Error, Md2Result};

// https://icculus.org/homepages/phaethon/q3a/formats/md2-schoenblum.html
//
// Every field is a little-endian i32. Counts and offsets are trusted only as
// far as the lump slices they describe stay inside the file.
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Md2Header {
    pub ident: i32,       // "IDP2"
    pub version: i32,     // always 8
    pub skin_width: i32,  // texture width in pixels
    pub skin_height: i32, // texture height in pixels
    pub frame_size: i32,  // byte size of one frame record
    pub num_skins: i32,
    pub num_xyz: i32, // vertices per frame
    pub num_st: i32,  // texture coordinates
    pub num_tris: i32,
    pub num_glcmds: i32, // i32 words in the gl command lump
    pub num_frames: i32,
    pub ofs_skins: i32,
    pub ofs_st: i32,
    pub ofs_tris: i32,
    pub ofs_frames: i32,
    pub ofs_glcmds: i32,
    pub ofs_end: i32,
}

const _: () = assert!(mem::size_of::<Md2Header>() == HEADER_SIZE);

impl BinaryData for Md2Header {
    fn from_le(self) -> Self {
        let mut words: [i32; 17] = bytemuck::cast(self);
        for word in &mut words {
            *word = i32::from_le(*word);
        }
        bytemuck::cast(words)
    }
}

impl Md2Header {
    /// Read and validate the header at the start of `buffer`.
    ///
    /// The magic is checked as soon as four bytes are present, so a short file
    /// of another format is rejected as such rather than as truncated.
    pub fn load(buffer: &[u8]) -> Md2Result<Self> {
        if let Some(ident) = i32::read(buffer).filter(|&ident| ident != MD2_IDENT) {
            return Err(Md2Error::BadMagicOrVersion {
                ident,
                version: buffer.get(4..).and_then(i32::read).unwrap_or_default(),
            });
        }
        let header = Self::read(buffer)
            .ok_or_else(|| Md2Error::truncated(LumpType::Header, HEADER_SIZE, buffer.len()))?;
        header.validate()?;
        Ok(header)
    }

    pub fn validate(&self) -> Md2Result<()> {
        if self.ident != MD2_IDENT || self.version != MD2_VERSION {
            return Err(Md2Error::BadMagicOrVersion {
                ident: self.ident,
                version: self.version,
            });
        }
        Ok(())
    }

    /// Frame record size implied by the vertex count, which is what frames are
    /// actually decoded with. `frame_size` should agree but is not relied on.
    pub fn expected_frame_size(&self) -> Option<usize> {
        usize::try_from(self.num_xyz).ok().map(frame_stride)
    }

    /// Byte range of a lump as `[start, end)` offsets, before clamping.
    ///
    /// Each lump runs up to the offset of the lump that conventionally follows
    /// it. Skins run to the end of the file.
    pub fn lump_range(&self, lump: LumpType, file_len: usize) -> (i64, i64) {
        let file_len = i64::try_from(file_len).unwrap_or(i64::MAX);
        let (start, end) = match lump {
            LumpType::Header => return (0, HEADER_SIZE as i64),
            LumpType::Skins => return (self.ofs_skins.into(), file_len),
            LumpType::TexCoords => (self.ofs_st, self.ofs_tris),
            LumpType::Triangles => (self.ofs_tris, self.ofs_frames),
            LumpType::Frames => (self.ofs_frames, self.ofs_glcmds),
            LumpType::GlCommands => (self.ofs_glcmds, self.ofs_end),
        };
        (start.into(), end.into())
    }

    /// The bytes of a lump, clamped to the buffer.
    ///
    /// A range starting before the file or ending before it starts yields an
    /// empty slice, leaving the lump decoder to report the shortfall.
    pub fn lump_bytes<'a>(&self, buffer: &'a [u8], lump: LumpType) -> &'a [u8] {
        let (start, end) = self.lump_range(lump, buffer.len());
        let Ok(start) = usize::try_from(start) else {
            return &[];
        };
        let end = usize::try_from(end).unwrap_or(0).min(buffer.len());
        buffer.get(start..end).unwrap_or(&[])
    }
}
