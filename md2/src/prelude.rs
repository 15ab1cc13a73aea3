pub use crate::binaries::{trim_padding, BinaryData};
pub use crate::consts::LumpType;
pub use crate::error::{Md2Error, Md2Result};
pub use crate::frames::{Frame, RawFrame, RawVertex, Vertex};
pub use crate::glcmds::{GlCommand, GlCommandReader, GlCommandVertex, GlDrawMode};
pub use crate::header::Md2Header;
pub use crate::model::Model;
pub use crate::texcoords::{RawTexCoord, TexCoord};
pub use crate::triangles::Triangle;
