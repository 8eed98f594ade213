//! IMG3 container decoding.
//!
//! An IMG3 file is a fixed 20-byte header followed by a chain of sections,
//! each of which records its own total size. There is no section count and no
//! index, so the only way to find section *n* is to walk sections `0..n`.
//!
//! This module provides:
//! - `Tag`: the byte-reversed four character identifiers used throughout.
//! - `Header` / `decode_header`: the fixed header at offset 0.
//! - `Section` / `iterate_sections`: a bounds-checked, guarded walk over the
//!   section chain.
//! - `Container`: a convenience pairing of a decoded header with its buffer.
//! - `Img3Error`: every way a buffer can fail to be a well-formed container.

mod header;
mod raw;
mod section;
mod tag;

pub use header::{decode_header, Header};
pub use section::{iterate_sections, Section, Sections};
pub use tag::Tag;

use thiserror::Error;

/// Raw magic value as read from the first four bytes (little-endian).
///
/// Rendered through `Tag` this reads as "Img3".
pub const IMG3_MAGIC: u32 = 0x496D_6733;

/// Size in bytes of the fixed container header.
pub const HEADER_LEN: usize = 20;

/// Size in bytes of the fixed fields at the start of every section.
pub const SECTION_HEADER_LEN: usize = 12;

/// Error type for container decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Img3Error {
    /// The buffer is too short to hold the container header.
    #[error("Input truncated: need {needed} bytes for the header, have {available}")]
    TruncatedInput { needed: usize, available: usize },

    /// The first four bytes are not the IMG3 magic.
    #[error("File isn't a valid IMG3 container (magic 0x{found:08x})")]
    InvalidMagic { found: u32 },

    /// A section header would extend past the end of the buffer.
    ///
    /// `offset` is relative to the end of the container header.
    #[error(
        "Section at data offset 0x{offset:x} is truncated: need {needed} bytes, have {available}"
    )]
    TruncatedSection { offset: u32, needed: usize, available: usize },

    /// A section declared a size too small to advance the walk.
    #[error(
        "Section at data offset 0x{offset:x} is malformed: full size {full_size} is below the {min} byte minimum"
    )]
    MalformedSection { offset: u32, full_size: u32, min: usize },
}

/// Convenience result type for container decoding.
pub type Img3Result<T> = Result<T, Img3Error>;

/// A decoded header together with the buffer it was decoded from.
///
/// The container only borrows the buffer; the caller keeps ownership.
#[derive(Debug, Clone, Copy)]
pub struct Container<'a> {
    buffer: &'a [u8],
    header: Header,
}

impl<'a> Container<'a> {
    /// Decode the header of `buffer` and run the consistency diagnostics.
    pub fn parse(buffer: &'a [u8]) -> Img3Result<Self> {
        let header = decode_header(buffer)?;
        header.check_against(buffer.len());
        Ok(Self { buffer, header })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Start a fresh walk over the section chain.
    pub fn sections(&self) -> Sections<'a> {
        iterate_sections(self.buffer, &self.header)
    }

    /// Walk the whole chain, stopping at the first error.
    pub fn collect_sections(&self) -> Img3Result<Vec<(u32, Section)>> {
        self.sections().collect()
    }
}
