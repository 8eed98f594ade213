use std::io::Cursor;

use binrw::{BinRead, BinReaderExt};

/// On-disk layout of the container header.
#[derive(BinRead)]
#[br(little)]
pub(crate) struct RawHeader {
    pub magic: u32,
    pub full_size: u32,
    pub image_size: u32,
    pub signature_offset: u32,
    pub image_identifier: u32,
}

/// On-disk layout of the fixed fields opening every section.
#[derive(BinRead)]
#[br(little)]
pub(crate) struct RawSection {
    pub section_type: u32,
    pub full_size: u32,
    pub data_size: u32,
}

/// Read a `T` at absolute `offset` of `buf`.
///
/// Running off the end of `buf` is reported as an error, never a panic.
pub(crate) fn read_at<T>(buf: &[u8], offset: u64) -> binrw::BinResult<T>
where
    T: for<'a> BinRead<Args<'a> = ()>,
{
    let mut reader = Cursor::new(buf);
    reader.set_position(offset);
    reader.read_le()
}
