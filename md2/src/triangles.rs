use std::mem;

use crate::binaries::BinaryData;
use crate::consts::{LumpType, TRIANGLE_SIZE};
use crate::error::Md2Result;
use crate::lump::{read_lump, Lump};

/// Indices of one face into the frame vertex list and the texture coordinate
/// list.
///
/// Indices are stored as read. Nothing checks them against the vertex or
/// texture coordinate counts, so consumers must before indexing.
#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Triangle {
    pub vertex_indices: [i16; 3],
    pub tex_coord_indices: [i16; 3],
}

const _: () = assert!(mem::size_of::<Triangle>() == TRIANGLE_SIZE);

impl BinaryData for Triangle {
    fn from_le(self) -> Self {
        Self {
            vertex_indices: self.vertex_indices.map(i16::from_le),
            tex_coord_indices: self.tex_coord_indices.map(i16::from_le),
        }
    }
}

impl Lump for Triangle {
    fn lump_type() -> LumpType {
        LumpType::Triangles
    }
}

impl Triangle {
    /// Vertex indices as `usize`, or `None` if any is negative or not below
    /// `num_verts`.
    pub fn checked_vertex_indices(&self, num_verts: usize) -> Option<[usize; 3]> {
        checked(self.vertex_indices, num_verts)
    }

    pub fn checked_tex_coord_indices(&self, num_tex_coords: usize) -> Option<[usize; 3]> {
        checked(self.tex_coord_indices, num_tex_coords)
    }
}

fn checked(indices: [i16; 3], len: usize) -> Option<[usize; 3]> {
    let [a, b, c] = indices.map(|i| usize::try_from(i).ok().filter(|&i| i < len));
    Some([a?, b?, c?])
}

pub fn decode_triangles(bytes: &[u8], num_tris: i32) -> Md2Result<Vec<Triangle>> {
    Ok(read_lump::<Triangle>(bytes, num_tris)?.into_vec())
}
