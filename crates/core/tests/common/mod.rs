//! Helpers for building synthetic IMG3 buffers by hand.
#![allow(dead_code)]

/// Stored (byte-reversed) form of a 4 character tag.
pub fn tag_bytes(text: &str) -> [u8; 4] {
    let mut bytes: [u8; 4] = text.as_bytes().try_into().expect("tag must be 4 bytes");
    bytes.reverse();
    bytes
}

/// 20-byte header with the IMG3 magic.
pub fn header(full_size: u32, image_size: u32, signature_offset: u32, ident: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(20);
    out.extend_from_slice(&tag_bytes("Img3"));
    out.extend_from_slice(&full_size.to_le_bytes());
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&signature_offset.to_le_bytes());
    out.extend_from_slice(&tag_bytes(ident));
    out
}

/// Section with its fixed fields followed by `full_size - 12` zero bytes.
pub fn section(tag: &str, full_size: u32, data_size: u32) -> Vec<u8> {
    let mut out = section_fields(tag, full_size, data_size);
    out.resize(full_size.max(12) as usize, 0);
    out
}

/// Only the 12 fixed fields of a section, no payload.
pub fn section_fields(tag: &str, full_size: u32, data_size: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(12);
    out.extend_from_slice(&tag_bytes(tag));
    out.extend_from_slice(&full_size.to_le_bytes());
    out.extend_from_slice(&data_size.to_le_bytes());
    out
}

/// Complete container whose header sizes agree with the given sections.
pub fn container(ident: &str, sections: &[(&str, u32, u32)]) -> Vec<u8> {
    let body: Vec<u8> = sections
        .iter()
        .flat_map(|(tag, full_size, data_size)| section(tag, *full_size, *data_size))
        .collect();
    let image_size = body.len() as u32;
    let mut out = header(image_size + 20, image_size, 0, ident);
    out.extend_from_slice(&body);
    out
}
