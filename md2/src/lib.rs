//! Decoder for Quake II MD2 models.
//!
//! An MD2 file is a 68 byte header followed by lumps addressed by the
//! header's offsets: skin names, texture coordinates, triangles, keyframes of
//! quantized vertices, and a stream of precomputed strip/fan draw commands.
//! [`Model::decode`] validates the header, decodes every lump from the slice
//! its offsets describe, normalizes texture coordinates and decompresses
//! vertices, returning a model that owns all of its data.
//!
//! Decoding is synchronous and keeps no state between calls, so callers are
//! free to decode many files in parallel.
//!
//! ```no_run
//! let model = md2::Model::load("models/monsters/tank/tris.md2")?;
//! for frame in model.frames() {
//!     println!("{} {:?}", frame.trimmed_name(), frame.bounds());
//! }
//! # Ok::<(), md2::Md2Error>(())
//! ```

pub mod binaries;
pub mod consts;
pub mod error;
pub mod frames;
pub mod glcmds;
pub mod header;
pub mod lump;
pub mod model;
pub mod prelude;
pub mod skins;
pub mod texcoords;
pub mod triangles;

#[cfg(test)]
mod test_util;

pub use error::{Md2Error, Md2Result};
pub use model::Model;
