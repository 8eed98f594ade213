//! Human-readable and serializable views of a decoded container.
//!
//! The text helpers return whole blocks so a frontend can stream sections as
//! the walk yields them. `ContainerReport` is the collected form used for JSON.

use serde::{Deserialize, Serialize};

use crate::img3::{Container, Header, Img3Result, Section, Tag};

/// Render the header block.
pub fn format_header(header: &Header) -> String {
    let mut out = String::new();
    out.push_str("\n=========\n");
    out.push_str("Header\n");
    out.push_str("=========\n");
    out.push_str(&format!("Full size: {}\n", hex_dec(header.full_size)));
    out.push_str(&format!("Image size: {}\n", hex_dec(header.image_size)));
    out.push_str(&format!("SHSH offset: {}\n", hex_dec(header.signature_offset)));
    out.push_str(&format!("Image id: {}\n\n", header.image_identifier));
    out
}

/// Banner printed between the header block and the first section.
pub fn data_banner() -> &'static str {
    "\n=========\nData\n=========\n"
}

/// Render one section block. `offset` is relative to the end of the header.
pub fn format_section(offset: u32, section: &Section) -> String {
    format!(
        "Section: {}\nOffset: {}\nFull size: {}\nData size: {}\n\n",
        section.section_type,
        hex_dec(offset),
        hex_dec(section.full_size),
        hex_dec(section.data_size)
    )
}

fn hex_dec(value: u32) -> String {
    format!("0x{value:x}({value})")
}

/// One entry of the section listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Offset relative to the end of the container header.
    pub offset: u32,
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub full_size: u32,
    pub data_size: u32,
}

impl SectionEntry {
    pub fn new(offset: u32, section: &Section) -> Self {
        Self {
            offset,
            tag: section.section_type,
            description: section.section_type.description().map(str::to_string),
            full_size: section.full_size,
            data_size: section.data_size,
        }
    }
}

/// Fully collected report for a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerReport {
    pub full_size: u32,
    pub image_size: u32,
    pub signature_offset: u32,
    pub image_identifier: Tag,
    pub sections: Vec<SectionEntry>,
}

impl ContainerReport {
    /// Decode `buffer` and walk the whole section chain.
    ///
    /// Fails on the first decode error; no partial report is produced.
    pub fn from_buffer(buffer: &[u8]) -> Img3Result<Self> {
        let container = Container::parse(buffer)?;
        let sections = container
            .collect_sections()?
            .iter()
            .map(|(offset, section)| SectionEntry::new(*offset, section))
            .collect();

        let header = container.header();
        Ok(Self {
            full_size: header.full_size,
            image_size: header.image_size,
            signature_offset: header.signature_offset,
            image_identifier: header.image_identifier,
            sections,
        })
    }

    /// Render the same text the streaming frontend prints.
    pub fn to_text(&self) -> String {
        let header = Header {
            magic: Tag::from_raw(crate::img3::IMG3_MAGIC),
            full_size: self.full_size,
            image_size: self.image_size,
            signature_offset: self.signature_offset,
            image_identifier: self.image_identifier,
        };
        let mut out = format_header(&header);
        out.push_str(data_banner());
        for entry in &self.sections {
            let section = Section {
                section_type: entry.tag,
                full_size: entry.full_size,
                data_size: entry.data_size,
            };
            out.push_str(&format_section(entry.offset, &section));
        }
        out
    }
}
