use std::mem;

use glam::Vec3;

use crate::binaries::{f32_from_le, read_padded_str, trim_padding, BinaryData};
use crate::consts::{LumpType, FRAME_HEADER_SIZE, FRAME_NAME_LENGTH, VERTEX_SIZE};
use crate::error::{Md2Error, Md2Result};
use crate::lump::lump_count;

/// The fixed part of a frame record, followed on disk by `num_xyz`
/// [`RawVertex`] records.
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RawFrameHeader {
    pub scale: [f32; 3],
    pub translate: [f32; 3],
    pub name: [u8; FRAME_NAME_LENGTH],
}

const _: () = assert!(mem::size_of::<RawFrameHeader>() == FRAME_HEADER_SIZE);

impl BinaryData for RawFrameHeader {
    fn from_le(self) -> Self {
        Self {
            scale: self.scale.map(f32_from_le),
            translate: self.translate.map(f32_from_le),
            name: self.name,
        }
    }
}

/// Compressed vertex: one byte per axis plus an index into the fixed table of
/// 162 precomputed normals.
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RawVertex {
    pub v: [u8; 3],
    pub light_normal_index: u8,
}

const _: () = assert!(mem::size_of::<RawVertex>() == VERTEX_SIZE);

impl BinaryData for RawVertex {}

impl RawVertex {
    pub fn decompress(&self, scale: Vec3, translate: Vec3) -> Vertex {
        Vertex {
            position: Vec3::from_array(self.v.map(f32::from)) * scale + translate,
            light_normal_index: self.light_normal_index,
        }
    }
}

/// A frame as read, with positions still quantized.
#[derive(Clone, Debug)]
pub struct RawFrame {
    pub header: RawFrameHeader,
    pub verts: Box<[RawVertex]>,
}

impl RawFrame {
    fn read(record: &[u8], num_xyz: usize) -> Option<Self> {
        let header = RawFrameHeader::read(record)?;
        let verts = RawVertex::read_array(record.get(FRAME_HEADER_SIZE..)?, num_xyz)?;
        Some(Self { header, verts })
    }

    /// Expand every vertex with this frame's own scale and translation.
    pub fn decompress(&self) -> Frame {
        let scale = Vec3::from_array(self.header.scale);
        let translate = Vec3::from_array(self.header.translate);
        Frame {
            scale,
            translate,
            name: read_padded_str(&self.header.name),
            vertices: self
                .verts
                .iter()
                .map(|v| v.decompress(scale, translate))
                .collect(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub light_normal_index: u8,
}

/// One keyframe with decompressed vertex positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub scale: Vec3,
    pub translate: Vec3,
    /// Null padded, see [`Frame::trimmed_name`].
    pub name: String,
    pub vertices: Vec<Vertex>,
}

impl Frame {
    pub fn trimmed_name(&self) -> &str {
        trim_padding(&self.name)
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Axis aligned bounds of the frame, `None` when it has no vertices.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| {
                    (min.min(v.position), max.max(v.position))
                }),
        )
    }
}

/// Decode `num_frames` frame records of `num_xyz` vertices each.
pub fn decode_frames(bytes: &[u8], num_frames: i32, num_xyz: i32) -> Md2Result<Vec<RawFrame>> {
    let num_frames = lump_count(LumpType::Frames, num_frames)?;
    let num_xyz = lump_count(LumpType::Frames, num_xyz)?;

    let stride = num_xyz
        .checked_mul(VERTEX_SIZE)
        .map_or(usize::MAX, |verts| verts.saturating_add(FRAME_HEADER_SIZE));
    let needed = stride.saturating_mul(num_frames);
    let truncated = || Md2Error::truncated(LumpType::Frames, needed, bytes.len());

    if bytes.len() < needed {
        return Err(truncated());
    }
    bytes
        .chunks_exact(stride)
        .take(num_frames)
        .map(|record| RawFrame::read(record, num_xyz).ok_or_else(truncated))
        .collect()
}
