#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Runtime data records produced at frame rate.
pub mod data;

/// Wire-stable device enumerations.
pub mod enums;

/// Stream format codes and pixel-size derivation.
pub mod format;

/// Resolution and stream request value types.
pub mod geometry;

/// Per-model option descriptors and validation.
pub mod options;

pub use crate::data::{ImgData, ImuData, ImuFlag, OptionInfo};
pub use crate::enums::{
    AddOns, Capabilities, DeviceOption, Info, InvalidEnumValue, Model, Source, Stream,
};
pub use crate::format::{bytes_per_pixel, fourcc, Format, FormatError};
pub use crate::geometry::{Resolution, StreamRequest};
pub use crate::options::{
    option_info, permitted_values, validate, validate_batch, Generation, OptionError,
};
