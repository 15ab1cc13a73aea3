use std::mem;

use glam::{vec2, Vec2};

use crate::binaries::{f32_from_le, BinaryData};
use crate::consts::{LumpType, GL_COMMAND_VERTEX_SIZE};
use crate::error::{Md2Error, Md2Result};

/// Primitive a command draws its vertices as.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GlDrawMode {
    TriangleStrip,
    TriangleFan,
}

#[repr(C, packed)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlCommandVertex {
    /// Already normalized to the skin, unlike the texture coordinate lump.
    pub s: f32,
    pub t: f32,
    pub vertex_index: i32,
}

const _: () = assert!(mem::size_of::<GlCommandVertex>() == GL_COMMAND_VERTEX_SIZE);

impl BinaryData for GlCommandVertex {
    fn from_le(self) -> Self {
        Self {
            s: f32_from_le(self.s),
            t: f32_from_le(self.t),
            vertex_index: i32::from_le(self.vertex_index),
        }
    }
}

impl GlCommandVertex {
    pub fn uv(&self) -> Vec2 {
        vec2(self.s, self.t)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GlCommand {
    pub mode: GlDrawMode,
    pub vertices: Vec<GlCommandVertex>,
}

impl GlCommand {
    /// Indices into the frame vertex list as a triangle list, unrolling the
    /// strip or fan. Winding alternates on strips the way GL draws them.
    pub fn triangle_vertex_indices(&self) -> Vec<[i32; 3]> {
        let idx: Vec<i32> = self.vertices.iter().map(|v| v.vertex_index).collect();
        match self.mode {
            GlDrawMode::TriangleStrip => idx
                .windows(3)
                .enumerate()
                .map(|(i, w)| {
                    if i % 2 == 0 {
                        [w[0], w[1], w[2]]
                    } else {
                        [w[1], w[0], w[2]]
                    }
                })
                .collect(),
            GlDrawMode::TriangleFan => idx
                .windows(2)
                .skip(1)
                .map(|w| [idx[0], w[0], w[1]])
                .collect(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GlCommandState {
    /// Next read is a mode word at `offset`.
    Reading { offset: usize },
    /// A zero mode word was read, or a read failed.
    Terminated,
}

/// Walks a gl command lump one command at a time.
///
/// Each command is an `i32` whose sign picks strip (positive) or fan
/// (negative) and whose magnitude is the vertex count, followed by that many
/// [`GlCommandVertex`] records. A zero word ends the stream; anything after it
/// is ignored.
pub struct GlCommandReader<'a> {
    bytes: &'a [u8],
    state: GlCommandState,
}

impl<'a> GlCommandReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            state: GlCommandState::Reading { offset: 0 },
        }
    }

    pub fn state(&self) -> GlCommandState {
        self.state
    }

    /// Advance by one command. `Ok(None)` once the terminator has been read.
    pub fn step(&mut self) -> Md2Result<Option<GlCommand>> {
        let GlCommandState::Reading { offset } = self.state else {
            return Ok(None);
        };

        match self.read_command(offset) {
            Ok(Some((command, next))) => {
                self.state = GlCommandState::Reading { offset: next };
                Ok(Some(command))
            }
            Ok(None) => {
                self.state = GlCommandState::Terminated;
                Ok(None)
            }
            Err(err) => {
                self.state = GlCommandState::Terminated;
                Err(err)
            }
        }
    }

    fn read_command(&self, offset: usize) -> Md2Result<Option<(GlCommand, usize)>> {
        let remaining = self.bytes.get(offset..).unwrap_or(&[]);
        let mode_word = i32::read(remaining).ok_or_else(|| self.truncated(offset, 4))?;
        if mode_word == 0 {
            return Ok(None);
        }

        let mode = if mode_word < 0 {
            GlDrawMode::TriangleFan
        } else {
            GlDrawMode::TriangleStrip
        };
        let count = mode_word.unsigned_abs() as usize;
        let body = count.saturating_mul(GL_COMMAND_VERTEX_SIZE);

        let vertices = GlCommandVertex::read_array(&remaining[4..], count)
            .ok_or_else(|| self.truncated(offset, body.saturating_add(4)))?;

        let command = GlCommand {
            mode,
            vertices: vertices.into_vec(),
        };
        Ok(Some((command, offset + 4 + body)))
    }

    fn truncated(&self, offset: usize, len: usize) -> Md2Error {
        Md2Error::truncated(
            LumpType::GlCommands,
            offset.saturating_add(len),
            self.bytes.len(),
        )
    }
}

impl Iterator for GlCommandReader<'_> {
    type Item = Md2Result<GlCommand>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

/// Decode a whole gl command lump up to its terminator.
pub fn decode_gl_commands(bytes: &[u8]) -> Md2Result<Vec<GlCommand>> {
    GlCommandReader::new(bytes).collect()
}
