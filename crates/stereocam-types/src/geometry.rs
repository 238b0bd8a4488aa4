//! Resolution and stream request value types.

use std::cmp::Ordering;
use std::fmt;

use crate::format::Format;

/// Image resolution in pixels.
///
/// Ordering is by pixel **area**: `a < b` iff `a.area() < b.area()`. Two
/// resolutions with equal area but different dimensions compare neither less
/// nor greater, which is why this type implements [`PartialOrd`] but not
/// [`Ord`]; use [`Eq`]/[`Hash`] for map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
}

impl Resolution {
    /// Creates a resolution.
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Total pixel count.
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

impl PartialOrd for Resolution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.area().cmp(&other.area()) {
            // equal area but different dimensions: unordered
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl From<[u16; 2]> for Resolution {
    fn from(size: [u16; 2]) -> Self {
        Self {
            width: size[0],
            height: size[1],
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A requested stream configuration.
///
/// Immutable once created; stream negotiation compares, hashes and
/// deduplicates requests, so equality is field-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StreamRequest {
    /// Stream width in pixels.
    pub width: u16,
    /// Stream height in pixels.
    pub height: u16,
    /// Stream pixel format.
    pub format: Format,
    /// Stream frames per second.
    pub fps: u16,
}

impl StreamRequest {
    /// Creates a request from explicit dimensions.
    pub const fn new(width: u16, height: u16, format: Format, fps: u16) -> Self {
        Self {
            width,
            height,
            format,
            fps,
        }
    }

    /// Creates a request from a resolution.
    pub const fn with_resolution(res: Resolution, format: Format, fps: u16) -> Self {
        Self {
            width: res.width,
            height: res.height,
            format,
            fps,
        }
    }

    /// The requested resolution.
    pub const fn resolution(&self) -> Resolution {
        Resolution {
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for StreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} {} @{}fps",
            self.width, self.height, self.format, self.fps
        )
    }
}
