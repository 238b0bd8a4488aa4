//! Stream format codes.
//!
//! A format is identified by a FOURCC: four ASCII characters packed
//! little-endian into a `u32`. The packed values are shared with device
//! firmware and existing streams, so they must stay byte-identical.

use std::fmt;

/// Packs a 4-character ASCII tag into its wire code.
///
/// Little-endian: `byte0 | byte1 << 8 | byte2 << 16 | byte3 << 24`. The
/// packing is order-sensitive, so two different character orders never
/// collide.
pub const fn fourcc(tag: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*tag)
}

/// Error for stream format lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The code does not name a recognized stream format.
    #[error("unknown stream format fourcc: 0x{0:08x}")]
    UnknownFourcc(u32),
}

/// How each stream is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u32)]
pub enum Format {
    /// Greyscale, 8 bits per pixel.
    Grey = fourcc(b"GREY"),
    /// YUV 4:2:2, 16 bits per pixel.
    Yuyv = fourcc(b"YUYV"),
    /// BGR 8:8:8, 24 bits per pixel.
    Bgr888 = fourcc(b"BGR3"),
    /// RGB 8:8:8, 24 bits per pixel.
    Rgb888 = fourcc(b"RGB3"),
}

impl Format {
    /// The packed wire code.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Decodes a wire code into a recognized format.
    pub const fn from_code(code: u32) -> Result<Self, FormatError> {
        const GREY: u32 = Format::Grey as u32;
        const YUYV: u32 = Format::Yuyv as u32;
        const BGR3: u32 = Format::Bgr888 as u32;
        const RGB3: u32 = Format::Rgb888 as u32;
        match code {
            GREY => Ok(Self::Grey),
            YUYV => Ok(Self::Yuyv),
            BGR3 => Ok(Self::Bgr888),
            RGB3 => Ok(Self::Rgb888),
            _ => Err(FormatError::UnknownFourcc(code)),
        }
    }

    /// The 4-character ASCII tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Grey => "GREY",
            Self::Yuyv => "YUYV",
            Self::Bgr888 => "BGR3",
            Self::Rgb888 => "RGB3",
        }
    }

    /// Bytes per pixel of the format.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Grey => 1,
            Self::Yuyv => 2,
            Self::Bgr888 | Self::Rgb888 => 3,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Bytes per pixel for a raw wire code.
///
/// An unrecognized code is a distinct error, never a zero: buffer sizing
/// downstream could not tell a silent zero apart from a real answer.
pub const fn bytes_per_pixel(code: u32) -> Result<usize, FormatError> {
    match Format::from_code(code) {
        Ok(format) => Ok(format.bytes_per_pixel()),
        Err(e) => Err(e),
    }
}
