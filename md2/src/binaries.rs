use std::mem;

/// A fixed-layout record that can be copied straight out of a file buffer.
///
/// Records are laid out exactly as on disk. Multi-byte fields are stored
/// little-endian, so implementors with such fields override [`from_le`] to
/// swap them into host order; on little-endian hosts this compiles away.
///
/// [`from_le`]: BinaryData::from_le
pub trait BinaryData: bytemuck::Pod {
    fn from_le(self) -> Self {
        self
    }

    /// Read one record from the start of `bytes`, or `None` if there are not
    /// enough bytes.
    fn read(bytes: &[u8]) -> Option<Self> {
        let bytes = bytes.get(..mem::size_of::<Self>())?;
        Some(bytemuck::pod_read_unaligned::<Self>(bytes).from_le())
    }

    /// Read `count` consecutive records from the start of `bytes`.
    fn read_array(bytes: &[u8], count: usize) -> Option<Box<[Self]>> {
        let size = mem::size_of::<Self>();
        let bytes = bytes.get(..size.checked_mul(count)?)?;
        Some(
            bytes
                .chunks_exact(size)
                .map(|record| bytemuck::pod_read_unaligned::<Self>(record).from_le())
                .collect(),
        )
    }
}

impl BinaryData for i32 {
    fn from_le(self) -> Self {
        i32::from_le(self)
    }
}

pub(crate) fn f32_from_le(value: f32) -> f32 {
    f32::from_bits(u32::from_le(value.to_bits()))
}

/// Decode a fixed-width, null padded name.
///
/// Non-ASCII bytes are dropped rather than failing the whole decode. Padding
/// is kept; see [`trim_padding`].
pub fn read_padded_str(bytes: &[u8]) -> String {
    bytes
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| char::from(b))
        .collect()
}

/// The text of a padded name up to its first NUL.
pub fn trim_padding(name: &str) -> &str {
    name.find('\0').map_or(name, |end| &name[..end])
}
