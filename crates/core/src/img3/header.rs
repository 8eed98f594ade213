use log::warn;

use super::raw::{read_at, RawHeader};
use super::{Img3Error, Img3Result, Tag, HEADER_LEN, IMG3_MAGIC};

/// The fixed header at the start of every IMG3 container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub magic: Tag,
    /// Total container size, header included.
    pub full_size: u32,
    /// Bytes of section data following the header. Does not include the header.
    pub image_size: u32,
    /// Offset of the signature block, relative to the end of the header.
    pub signature_offset: u32,
    /// Image type, e.g. "ibec" or "illb".
    pub image_identifier: Tag,
}

impl Header {
    /// Absolute offset one past the declared section data.
    pub fn data_end(&self) -> u64 {
        HEADER_LEN as u64 + u64::from(self.image_size)
    }

    /// Log any disagreement between the declared sizes and the actual buffer.
    ///
    /// These are diagnostics only; the section walk stays bounds-checked either way.
    pub(crate) fn check_against(&self, buffer_len: usize) {
        if u64::from(self.full_size) != buffer_len as u64 {
            warn!(
                "header full size 0x{:x} does not match buffer length 0x{:x}",
                self.full_size, buffer_len
            );
        }
        if self.data_end() > buffer_len as u64 {
            warn!(
                "header image size 0x{:x} runs past the end of the buffer (0x{:x} bytes after the header)",
                self.image_size,
                buffer_len.saturating_sub(HEADER_LEN)
            );
        }
    }
}

/// Decode and validate the header at the start of `buffer`.
pub fn decode_header(buffer: &[u8]) -> Img3Result<Header> {
    let raw: RawHeader = read_at(buffer, 0)
        .map_err(|_| Img3Error::TruncatedInput { needed: HEADER_LEN, available: buffer.len() })?;

    if raw.magic != IMG3_MAGIC {
        return Err(Img3Error::InvalidMagic { found: raw.magic });
    }

    Ok(Header {
        magic: Tag::from_raw(raw.magic),
        full_size: raw.full_size,
        image_size: raw.image_size,
        signature_offset: raw.signature_offset,
        image_identifier: Tag::from_raw(raw.image_identifier),
    })
}
