use std::fmt;

/// "IDP2" read as a little-endian `i32`.
pub const MD2_IDENT: i32 = i32::from_le_bytes(*b"IDP2");
pub const MD2_VERSION: i32 = 8;

pub const HEADER_SIZE: usize = 68;
pub const SKIN_NAME_LENGTH: usize = 64;
pub const FRAME_NAME_LENGTH: usize = 16;

/// scale + translate + name, before the vertex array
pub const FRAME_HEADER_SIZE: usize = 40;
pub const VERTEX_SIZE: usize = 4;
pub const TEX_COORD_SIZE: usize = 4;
pub const TRIANGLE_SIZE: usize = 12;
pub const GL_COMMAND_VERTEX_SIZE: usize = 12;

/// Byte size of one frame record holding `num_xyz` vertices.
pub const fn frame_stride(num_xyz: usize) -> usize {
    FRAME_HEADER_SIZE + VERTEX_SIZE * num_xyz
}

/// Sections of an MD2 file, used to address lump slices and to report which
/// stage of a decode failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LumpType {
    Header,
    Skins,
    TexCoords,
    Triangles,
    Frames,
    GlCommands,
}

impl fmt::Display for LumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LumpType::Header => "header",
            LumpType::Skins => "skins",
            LumpType::TexCoords => "texture coordinates",
            LumpType::Triangles => "triangles",
            LumpType::Frames => "frames",
            LumpType::GlCommands => "gl commands",
        })
    }
}
