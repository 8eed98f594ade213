use std::iter::FusedIterator;

use log::{debug, warn};

use super::raw::{read_at, RawSection};
use super::{Header, Img3Error, Img3Result, Tag, HEADER_LEN, SECTION_HEADER_LEN};

/// Fixed fields at the start of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub section_type: Tag,
    /// Bytes this section occupies: fixed fields, payload and padding.
    pub full_size: u32,
    /// Payload bytes only.
    pub data_size: u32,
}

impl Section {
    /// Room left for payload once the fixed fields are accounted for.
    pub fn payload_capacity(&self) -> u32 {
        self.full_size.saturating_sub(SECTION_HEADER_LEN as u32)
    }

    /// Whether `full_size` is large enough to move the walk forward.
    pub fn advances(&self) -> bool {
        self.full_size as usize >= SECTION_HEADER_LEN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Walking,
    /// The last yielded section cannot advance the cursor; report it next.
    Stalled { offset: u32, full_size: u32 },
    Done,
}

/// Lazy walk over the section chain of one container.
///
/// Yields `(offset, section)` where `offset` is relative to the end of the
/// header. The walk ends at the first error or once the cursor reaches
/// `image_size`. It is not restartable: call `iterate_sections` again for a
/// fresh walk.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    buffer: &'a [u8],
    image_size: u32,
    // u64 so that adding a hostile full_size can never wrap.
    cursor: u64,
    state: WalkState,
}

/// Start walking the sections that follow `header` in `buffer`.
pub fn iterate_sections<'a>(buffer: &'a [u8], header: &Header) -> Sections<'a> {
    Sections { buffer, image_size: header.image_size, cursor: 0, state: WalkState::Walking }
}

impl Sections<'_> {
    fn read_section(&self, offset: u32) -> Img3Result<Section> {
        let absolute = HEADER_LEN as u64 + u64::from(offset);
        let raw: RawSection = read_at(self.buffer, absolute).map_err(|_| {
            Img3Error::TruncatedSection {
                offset,
                needed: SECTION_HEADER_LEN,
                available: (self.buffer.len() as u64).saturating_sub(absolute) as usize,
            }
        })?;

        Ok(Section {
            section_type: Tag::from_raw(raw.section_type),
            full_size: raw.full_size,
            data_size: raw.data_size,
        })
    }
}

impl Iterator for Sections<'_> {
    type Item = Img3Result<(u32, Section)>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            WalkState::Done => return None,
            WalkState::Stalled { offset, full_size } => {
                self.state = WalkState::Done;
                return Some(Err(Img3Error::MalformedSection {
                    offset,
                    full_size,
                    min: SECTION_HEADER_LEN,
                }));
            }
            WalkState::Walking => {}
        }

        if self.cursor >= u64::from(self.image_size) {
            self.state = WalkState::Done;
            return None;
        }
        // Below image_size, so it fits.
        let offset = self.cursor as u32;

        let section = match self.read_section(offset) {
            Ok(section) => section,
            Err(err) => {
                self.state = WalkState::Done;
                return Some(Err(err));
            }
        };

        debug!(
            "section {} at data offset 0x{:x}: full size 0x{:x}, data size 0x{:x}",
            section.section_type, offset, section.full_size, section.data_size
        );
        if section.advances() && section.data_size > section.payload_capacity() {
            warn!(
                "section {} at data offset 0x{:x} claims 0x{:x} data bytes but only has room for 0x{:x}",
                section.section_type,
                offset,
                section.data_size,
                section.payload_capacity()
            );
        }

        self.cursor += u64::from(section.full_size);
        if !section.advances() {
            self.state = WalkState::Stalled { offset, full_size: section.full_size };
        }

        Some(Ok((offset, section)))
    }
}

impl FusedIterator for Sections<'_> {}
