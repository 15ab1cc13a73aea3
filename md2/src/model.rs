use std::{fs, path::Path};

use glam::{Vec2, Vec3};

use crate::binaries::trim_padding;
use crate::consts::LumpType;
use crate::error::Md2Result;
use crate::frames::{decode_frames, Frame, RawFrame};
use crate::glcmds::{decode_gl_commands, GlCommand};
use crate::header::Md2Header;
use crate::skins::decode_skin_names;
use crate::texcoords::{decode_tex_coords, normalize_tex_coords, TexCoord};
use crate::triangles::{decode_triangles, Triangle};

/// A fully decoded MD2 model.
///
/// Owns everything it was decoded into; the source buffer is not kept.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    header: Md2Header,
    skin_names: Vec<String>,
    triangles: Vec<Triangle>,
    frames: Vec<Frame>,
    tex_coords: Vec<TexCoord>,
    gl_commands: Vec<GlCommand>,
}

impl Model {
    /// Read a whole file and decode it.
    pub fn load(path: impl AsRef<Path>) -> Md2Result<Self> {
        let buffer = fs::read(path)?;
        Self::decode(&buffer)
    }

    /// Decode a model from the complete contents of an MD2 file.
    ///
    /// The header is validated before any lump is looked at. Each lump is
    /// decoded from the slice its header offsets describe, then texture
    /// coordinates are normalized and frames decompressed. Any failure aborts
    /// the whole decode.
    pub fn decode(buffer: &[u8]) -> Md2Result<Self> {
        let header = Md2Header::load(buffer)?;
        let lump = |lump| header.lump_bytes(buffer, lump);

        let skin_names = decode_skin_names(lump(LumpType::Skins), header.num_skins)?;
        let raw_tex_coords = decode_tex_coords(lump(LumpType::TexCoords), header.num_st)?;
        let triangles = decode_triangles(lump(LumpType::Triangles), header.num_tris)?;
        let raw_frames = decode_frames(lump(LumpType::Frames), header.num_frames, header.num_xyz)?;
        // No words at all means the exporter skipped the lump, not a missing
        // terminator.
        let gl_commands = if header.num_glcmds == 0 {
            Vec::new()
        } else {
            decode_gl_commands(lump(LumpType::GlCommands))?
        };

        let tex_coords =
            normalize_tex_coords(&raw_tex_coords, header.skin_width, header.skin_height)?;
        let frames = raw_frames.iter().map(RawFrame::decompress).collect();

        Ok(Self {
            header,
            skin_names,
            triangles,
            frames,
            tex_coords,
            gl_commands,
        })
    }

    pub fn header(&self) -> &Md2Header {
        &self.header
    }

    /// Skin paths with their null padding intact.
    pub fn skin_names(&self) -> &[String] {
        &self.skin_names
    }

    pub fn trimmed_skin_names(&self) -> impl Iterator<Item = &str> {
        self.skin_names.iter().map(|name| trim_padding(name))
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Texture coordinates normalized to the skin size.
    pub fn tex_coords(&self) -> &[TexCoord] {
        &self.tex_coords
    }

    pub fn gl_commands(&self) -> &[GlCommand] {
        &self.gl_commands
    }

    /// Decompressed vertex positions, one list per frame.
    pub fn frame_positions(&self) -> Vec<Vec<Vec3>> {
        self.frames.iter().map(Frame::positions).collect()
    }

    pub fn triangle_vertex_indices(&self) -> Vec<[i16; 3]> {
        self.triangles.iter().map(|t| t.vertex_indices).collect()
    }

    pub fn triangle_tex_coord_indices(&self) -> Vec<[i16; 3]> {
        self.triangles.iter().map(|t| t.tex_coord_indices).collect()
    }

    pub fn uvs(&self) -> Vec<Vec2> {
        self.tex_coords.iter().map(TexCoord::uv).collect()
    }

    /// UVs with `v = 1 - t`.
    pub fn flipped_uvs(&self) -> Vec<Vec2> {
        self.tex_coords.iter().map(TexCoord::flipped_uv).collect()
    }
}
