use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A four character identifier as stored in an IMG3 file.
///
/// Tags are written byte-reversed: the stored bytes `[b0, b1, b2, b3]` read as
/// the text `b3 b2 b1 b0`. Holding the raw little-endian value means the text
/// form is simply the big-endian bytes of that value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(u32);

impl Tag {
    /// Wrap the raw value read (little-endian) from the file.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Build the tag that renders as `text`. Returns `None` unless `text` is exactly 4 bytes.
    pub fn from_text(text: &str) -> Option<Self> {
        let bytes: [u8; 4] = text.as_bytes().try_into().ok()?;
        Some(Self(u32::from_be_bytes(bytes)))
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The bytes exactly as they appear on disk.
    pub const fn stored_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Render the tag in reading order.
    ///
    /// Bytes that are not valid UTF-8 come out as U+FFFD.
    pub fn text(self) -> String {
        String::from_utf8_lossy(&self.0.to_be_bytes()).into_owned()
    }

    /// Short human label for tags with a well-known meaning.
    pub fn description(self) -> Option<&'static str> {
        let label = match &self.0.to_be_bytes() {
            b"Img3" => "container magic",
            b"DATA" => "payload",
            b"SHSH" => "signature blob",
            b"CERT" => "certificate chain",
            b"KBAG" => "key bag",
            b"TYPE" => "image type",
            b"VERS" => "version string",
            b"SEPO" => "security epoch",
            b"BORD" => "board id",
            b"CHIP" => "chip id",
            b"PROD" => "production mode",
            b"SDOM" => "security domain",
            b"ECID" => "exclusive chip id",
            b"NONC" => "nonce",
            b"OVRD" => "override",
            b"RAND" => "random pad",
            b"SALT" => "salt",
            _ => return None,
        };
        Some(label)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Tag::from_text(&text)
            .ok_or_else(|| de::Error::custom(format!("tag '{text}' is not exactly 4 bytes")))
    }
}
