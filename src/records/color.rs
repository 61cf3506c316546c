/*!
 Contains logic to decode and encode the color attribute records carried by
 keyed archives.

 Producers have written color records in several shapes over the years. The
 decoder recognizes each of them; the encoder always emits the calibrated RGB
 shape, which every known consumer parses.
*/

use std::str::from_utf8;

use plist::{Dictionary, Value};

use crate::{
    archive::{
        builder::{ArchiveBuilder, RecordKind},
        resolver::{resolve_field, KeyedArchive},
    },
    error::{archive::ArchiveError, color::ColorError},
};

/// Record field holding calibrated RGB channel text
const RGB_KEY: &str = "NSRGB";
/// Record field naming the color space of a components record
const COLOR_SPACE_KEY: &str = "NSColorSpace";
/// Record field holding channel text in a named color space
const COMPONENTS_KEY: &str = "NSComponents";
/// Color space identifier written on encode, denoting calibrated RGB
const CALIBRATED_RGB_SPACE: u8 = 1;

/// A color attribute as 8-bit RGB channels
///
/// Alpha is never archived; colors are treated as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as an `(r, g, b)` tuple
    pub fn tuple(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Decode a color from a complete archive payload
    pub fn from_payload(payload: &[u8]) -> Result<Self, ColorError> {
        let archive = KeyedArchive::from_payload(payload).map_err(ColorError::Archive)?;
        Self::from_record(archive.record(), archive.objects())
    }

    /// Decode a color from a resolved attribute record
    ///
    /// Encodings are tried in priority order; the first whose shape is present
    /// decides the record, and its channel text must then parse.
    pub fn from_record(record: &Dictionary, objects: &[Value]) -> Result<Self, ColorError> {
        for matcher in MATCHERS {
            if let Some(channels) = matcher(record, objects)? {
                return parse_channels(channels.text()?);
            }
        }
        Err(ColorError::UnrecognizedEncoding)
    }

    /// Encode the color as a complete keyed archive value tree
    ///
    /// Always emits the calibrated RGB shape: an `NSColorSpace` marker plus
    /// `NSRGB` channel text as bytes.
    pub fn to_archive(&self) -> Value {
        let mut builder = ArchiveBuilder::new(RecordKind::Color);
        builder.insert(
            COLOR_SPACE_KEY,
            Value::Integer(CALIBRATED_RGB_SPACE.into()),
        );
        builder.insert(RGB_KEY, Value::Data(self.channel_text().into_bytes()));
        builder.build()
    }

    /// Encode the color as binary property list bytes
    pub fn to_payload(&self) -> Result<Vec<u8>, ArchiveError> {
        let mut payload = vec![];
        self.to_archive()
            .to_writer_binary(&mut payload)
            .map_err(ArchiveError::InvalidPlist)?;
        Ok(payload)
    }

    /// Channel text for the encoded record, scaled back to `0.0..=1.0`
    ///
    /// Plain decimal, single spaces. Formatting and parsing both round-trip
    /// through [`f64`], so decoding recovers the exact 8-bit channels.
    fn channel_text(&self) -> String {
        format!(
            "{} {} {}",
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0
        )
    }
}

/// Channel text located by a matcher, before parsing
enum Channels<'a> {
    /// Channel text stored as raw bytes
    Data(&'a [u8]),
    /// Channel text stored as a string
    Text(&'a str),
}

impl Channels<'_> {
    /// The located channel text
    fn text(&self) -> Result<&str, ColorError> {
        match self {
            Channels::Data(data) => from_utf8(data)
                .map_err(|why| ColorError::InvalidComponents(format!("channel data is not text: {why}"))),
            Channels::Text(text) => Ok(text),
        }
    }
}

/// A color encoding: inspects a record and hands back its channel text when the
/// record stores that encoding
type Matcher =
    for<'a> fn(&'a Dictionary, &'a [Value]) -> Result<Option<Channels<'a>>, ColorError>;

/// Known color encodings, in the priority order producers emit them
const MATCHERS: [Matcher; 3] = [match_rgb_data, match_rgb_string, match_components];

/// Matches calibrated RGB channel text stored as bytes under [`RGB_KEY`]
fn match_rgb_data<'a>(
    record: &'a Dictionary,
    objects: &'a [Value],
) -> Result<Option<Channels<'a>>, ColorError> {
    match record.get(RGB_KEY) {
        Some(field) => match resolve_field(objects, field).map_err(ColorError::Archive)? {
            Value::Data(data) => Ok(Some(Channels::Data(data))),
            _ => Ok(None),
        },
        None => Ok(None),
    }
}

/// Matches calibrated RGB channel text stored as a string under [`RGB_KEY`]
fn match_rgb_string<'a>(
    record: &'a Dictionary,
    objects: &'a [Value],
) -> Result<Option<Channels<'a>>, ColorError> {
    match record.get(RGB_KEY) {
        Some(field) => match resolve_field(objects, field).map_err(ColorError::Archive)? {
            Value::String(text) => Ok(Some(Channels::Text(text))),
            _ => Ok(None),
        },
        None => Ok(None),
    }
}

/// Matches named-space records pairing [`COLOR_SPACE_KEY`] with channel bytes
/// under [`COMPONENTS_KEY`]
fn match_components<'a>(
    record: &'a Dictionary,
    objects: &'a [Value],
) -> Result<Option<Channels<'a>>, ColorError> {
    if !record.contains_key(COLOR_SPACE_KEY) {
        return Ok(None);
    }
    match record.get(COMPONENTS_KEY) {
        Some(field) => match resolve_field(objects, field).map_err(ColorError::Archive)? {
            Value::Data(data) => Ok(Some(Channels::Data(data))),
            _ => Ok(None),
        },
        None => Ok(None),
    }
}

/// Parse whitespace-separated channel text into 8-bit channels
///
/// At least three tokens must be present; trailing tokens (legacy alpha) are
/// ignored.
fn parse_channels(text: &str) -> Result<Color, ColorError> {
    let mut tokens = text.split_whitespace();
    let mut channels = [0u8; 3];
    for channel in &mut channels {
        let token = tokens.next().ok_or_else(|| {
            ColorError::InvalidComponents(format!("expected 3 channels in {text:?}"))
        })?;
        *channel = parse_channel(token)?;
    }
    Ok(Color::new(channels[0], channels[1], channels[2]))
}

/// Parse one channel token in `0.0..=1.0` and scale it to `0..=255`
fn parse_channel(token: &str) -> Result<u8, ColorError> {
    let channel: f64 = token
        .parse()
        .map_err(|_| ColorError::InvalidComponents(format!("{token:?} is not a number")))?;
    if !channel.is_finite() {
        return Err(ColorError::InvalidComponents(format!(
            "channel {channel} is not finite"
        )));
    }
    Ok((channel * 255.0).round().clamp(0.0, 255.0) as u8)
}
