/*!
 Contains the codec front door, which prefers an optional native unarchiver
 and falls back to the portable parser.

 Hosts with access to a platform unarchiver decode archives with higher
 fidelity than any re-implementation, so one can be installed and is then
 tried first. The portable parser stays fully self-sufficient; a missing or
 declining native codec never affects its result.
*/

use crate::{
    error::{archive::ArchiveError, color::ColorError, font::FontError},
    records::{color::Color, font::Font},
};

/// A platform unarchiver that can decode and encode archives natively
///
/// Implementations return `None` for payloads or values they cannot handle,
/// letting the portable parser take over.
pub trait NativeCodec {
    /// Decode a color archive payload, or decline it
    fn decode_color(&self, payload: &[u8]) -> Option<Color>;

    /// Decode a font archive payload, or decline it
    fn decode_font(&self, payload: &[u8]) -> Option<Font>;

    /// Encode a color as an archive payload, or decline it
    fn encode_color(&self, color: &Color) -> Option<Vec<u8>>;

    /// Encode a font as an archive payload, or decline it
    fn encode_font(&self, font: &Font) -> Option<Vec<u8>>;
}

/// Decodes and encodes archive payloads, preferring a native unarchiver when
/// one is installed
#[derive(Default)]
pub struct ArchiveCodec {
    /// Optional platform unarchiver tried before the portable parser
    native: Option<Box<dyn NativeCodec>>,
}

impl ArchiveCodec {
    /// A codec that only uses the portable parser
    pub fn portable() -> Self {
        Self { native: None }
    }

    /// A codec that tries `native` first and falls back to the portable parser
    pub fn with_native(native: Box<dyn NativeCodec>) -> Self {
        Self {
            native: Some(native),
        }
    }

    /// Decode a color archive payload
    pub fn decode_color(&self, payload: &[u8]) -> Result<Color, ColorError> {
        if let Some(native) = &self.native {
            if let Some(color) = native.decode_color(payload) {
                return Ok(color);
            }
        }
        Color::from_payload(payload)
    }

    /// Decode a font archive payload
    pub fn decode_font(&self, payload: &[u8]) -> Result<Font, FontError> {
        if let Some(native) = &self.native {
            if let Some(font) = native.decode_font(payload) {
                return Ok(font);
            }
        }
        Font::from_payload(payload)
    }

    /// Encode a color as an archive payload
    pub fn encode_color(&self, color: &Color) -> Result<Vec<u8>, ArchiveError> {
        if let Some(native) = &self.native {
            if let Some(payload) = native.encode_color(color) {
                return Ok(payload);
            }
        }
        color.to_payload()
    }

    /// Encode a font as an archive payload
    pub fn encode_font(&self, font: &Font) -> Result<Vec<u8>, ArchiveError> {
        if let Some(native) = &self.native {
            if let Some(payload) = native.encode_font(font) {
                return Ok(payload);
            }
        }
        font.to_payload()
    }
}
