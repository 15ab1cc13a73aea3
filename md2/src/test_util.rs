//! Builds synthetic MD2 files laid out the way exporters write them: header,
//! skins, texture coordinates, triangles, frames, gl commands.

use crate::consts::{
    frame_stride, FRAME_NAME_LENGTH, HEADER_SIZE, MD2_IDENT, MD2_VERSION, SKIN_NAME_LENGTH,
};
use crate::header::Md2Header;

pub struct TestFrame {
    pub name: String,
    pub scale: [f32; 3],
    pub translate: [f32; 3],
    pub verts: Vec<[u8; 4]>,
}

impl TestFrame {
    pub fn new(name: &str, scale: [f32; 3], translate: [f32; 3], positions: &[[u8; 3]]) -> Self {
        Self {
            name: name.to_owned(),
            scale,
            translate,
            verts: positions.iter().map(|&[x, y, z]| [x, y, z, 0]).collect(),
        }
    }
}

pub struct Md2Builder {
    pub skin_width: i32,
    pub skin_height: i32,
    pub skins: Vec<String>,
    pub tex_coords: Vec<(i16, i16)>,
    pub triangles: Vec<([i16; 3], [i16; 3])>,
    /// Every frame must hold the same number of vertices.
    pub frames: Vec<TestFrame>,
    /// `(mode word, vertices)`; the terminator is appended when any exist.
    pub gl_commands: Vec<(i32, Vec<(f32, f32, i32)>)>,
}

impl Md2Builder {
    /// One frame of one vertex, one triangle, one texture coordinate, no
    /// skins and no gl commands.
    pub fn minimal() -> Self {
        Self {
            skin_width: 256,
            skin_height: 256,
            skins: Vec::new(),
            tex_coords: vec![(128, 64)],
            triangles: vec![([0, 0, 0], [0, 0, 0])],
            frames: vec![TestFrame::new("frame1", [1.0; 3], [0.0; 3], &[[255, 0, 128]])],
            gl_commands: Vec::new(),
        }
    }

    fn num_xyz(&self) -> usize {
        self.frames.first().map_or(0, |f| f.verts.len())
    }

    fn gl_words(&self) -> Vec<i32> {
        if self.gl_commands.is_empty() {
            return Vec::new();
        }
        let mut words = Vec::new();
        for (mode_word, verts) in &self.gl_commands {
            words.push(*mode_word);
            for &(s, t, index) in verts {
                words.push(s.to_bits() as i32);
                words.push(t.to_bits() as i32);
                words.push(index);
            }
        }
        words.push(0);
        words
    }

    pub fn layout(&self) -> Md2Header {
        let num_xyz = self.num_xyz();
        let num_glcmds = self.gl_words().len();

        let ofs_skins = HEADER_SIZE;
        let ofs_st = ofs_skins + SKIN_NAME_LENGTH * self.skins.len();
        let ofs_tris = ofs_st + 4 * self.tex_coords.len();
        let ofs_frames = ofs_tris + 12 * self.triangles.len();
        let ofs_glcmds = ofs_frames + frame_stride(num_xyz) * self.frames.len();
        let ofs_end = ofs_glcmds + 4 * num_glcmds;

        let i = |v: usize| v as i32;
        Md2Header {
            ident: MD2_IDENT,
            version: MD2_VERSION,
            skin_width: self.skin_width,
            skin_height: self.skin_height,
            frame_size: i(frame_stride(num_xyz)),
            num_skins: i(self.skins.len()),
            num_xyz: i(num_xyz),
            num_st: i(self.tex_coords.len()),
            num_tris: i(self.triangles.len()),
            num_glcmds: i(num_glcmds),
            num_frames: i(self.frames.len()),
            ofs_skins: i(ofs_skins),
            ofs_st: i(ofs_st),
            ofs_tris: i(ofs_tris),
            ofs_frames: i(ofs_frames),
            ofs_glcmds: i(ofs_glcmds),
            ofs_end: i(ofs_end),
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let header = self.layout();
        let words: [i32; 17] = bytemuck::cast(header);
        let mut bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();

        for skin in &self.skins {
            let mut slot = skin.as_bytes().to_vec();
            slot.resize(SKIN_NAME_LENGTH, 0);
            bytes.extend(slot);
        }
        for (s, t) in &self.tex_coords {
            bytes.extend(s.to_le_bytes());
            bytes.extend(t.to_le_bytes());
        }
        for (verts, sts) in &self.triangles {
            for index in verts.iter().chain(sts) {
                bytes.extend(index.to_le_bytes());
            }
        }
        for frame in &self.frames {
            for f in frame.scale.iter().chain(&frame.translate) {
                bytes.extend(f.to_le_bytes());
            }
            let mut name = frame.name.as_bytes().to_vec();
            name.resize(FRAME_NAME_LENGTH, 0);
            bytes.extend(name);
            bytes.extend(frame.verts.iter().flatten());
        }
        for word in self.gl_words() {
            bytes.extend(word.to_le_bytes());
        }

        assert_eq!(bytes.len(), header.ofs_end as usize);
        bytes
    }
}
