#![allow(dead_code)]

use std::path::{Path, PathBuf};

fn tag_bytes(text: &str) -> [u8; 4] {
    let mut bytes: [u8; 4] = text.as_bytes().try_into().expect("tag must be 4 bytes");
    bytes.reverse();
    bytes
}

fn push_u32s(out: &mut Vec<u8>, values: &[u32]) {
    for value in values {
        out.extend_from_slice(&value.to_le_bytes());
    }
}

/// Header followed by raw section field triples `(tag, full_size, data_size)`.
///
/// Each section is padded with zeros up to its declared full size (at least 12 bytes).
pub fn build_img3(
    ident: &str,
    image_size: u32,
    full_size: u32,
    sections: &[(&str, u32, u32)],
) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&tag_bytes("Img3"));
    push_u32s(&mut out, &[full_size, image_size, 0]);
    out.extend_from_slice(&tag_bytes(ident));
    for (tag, section_full, data_size) in sections {
        let start = out.len();
        out.extend_from_slice(&tag_bytes(tag));
        push_u32s(&mut out, &[*section_full, *data_size]);
        out.resize(start + (*section_full).max(12) as usize, 0);
    }
    out
}

/// The single-section `TEST`/`DATA` container.
pub fn scenario_img3() -> Vec<u8> {
    build_img3("TEST", 12, 32, &[("DATA", 12, 0)])
}

pub fn write_fixture(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
