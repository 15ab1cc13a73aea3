use glam::{Vec2, Vec3};
use md2::Model;

/// Summary of one decoded model, plus anything odd about its header that the
/// decoder tolerated.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReport {
    pub path: String,
    pub skins: Vec<String>,
    pub num_frames: usize,
    pub num_vertices: usize,
    pub num_triangles: usize,
    pub num_tex_coords: usize,
    pub num_gl_commands: usize,
    pub first_frame: Option<String>,
    /// Over every frame.
    pub bounds: Option<(Vec3, Vec3)>,
    pub uv_bounds: Option<(Vec2, Vec2)>,
    pub warnings: Vec<String>,
}

impl ModelReport {
    pub fn new(path: &str, model: &Model, file_len: usize, flip_uvs: bool) -> Self {
        let header = model.header();
        let mut warnings = Vec::new();

        let (frame_size, num_xyz, ofs_end) = (header.frame_size, header.num_xyz, header.ofs_end);
        let expected = header.expected_frame_size();
        if expected != usize::try_from(frame_size).ok() {
            warnings.push(format!(
                "frame size {frame_size} does not match {num_xyz} vertices ({expected:?} bytes)"
            ));
        }
        if usize::try_from(ofs_end).ok() != Some(file_len) {
            warnings.push(format!(
                "end offset {ofs_end} does not match file length {file_len}"
            ));
        }

        let num_vertices = model.frames().first().map_or(0, |f| f.vertices.len());
        let num_tex_coords = model.tex_coords().len();
        let bad_triangles = model
            .triangles()
            .iter()
            .filter(|t| {
                t.checked_vertex_indices(num_vertices).is_none()
                    || t.checked_tex_coord_indices(num_tex_coords).is_none()
            })
            .count();
        if bad_triangles > 0 {
            warnings.push(format!("{bad_triangles} triangles index out of range"));
        }

        let uvs = if flip_uvs {
            model.flipped_uvs()
        } else {
            model.uvs()
        };

        Self {
            path: path.to_owned(),
            skins: model.trimmed_skin_names().map(str::to_owned).collect(),
            num_frames: model.frames().len(),
            num_vertices,
            num_triangles: model.triangles().len(),
            num_tex_coords,
            num_gl_commands: model.gl_commands().len(),
            first_frame: model.frames().first().map(|f| f.trimmed_name().to_owned()),
            bounds: model
                .frames()
                .iter()
                .filter_map(|f| f.bounds())
                .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax))),
            uv_bounds: uvs
                .iter()
                .map(|&uv| (uv, uv))
                .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax))),
            warnings,
        }
    }

    pub fn log(&self) {
        log::info!(
            "{}: {} frames of {} vertices, {} triangles, {} texture coordinates, {} gl commands",
            self.path,
            self.num_frames,
            self.num_vertices,
            self.num_triangles,
            self.num_tex_coords,
            self.num_gl_commands
        );
        for skin in &self.skins {
            log::info!("  skin {skin}");
        }
        if let Some(name) = &self.first_frame {
            log::info!("  first frame {name}");
        }
        if let Some((min, max)) = self.bounds {
            log::info!("  bounds {min} .. {max}");
        }
        if let Some((min, max)) = self.uv_bounds {
            log::debug!("  uv bounds {min} .. {max}");
        }
        for warning in &self.warnings {
            log::warn!("{}: {warning}", self.path);
        }
    }
}
