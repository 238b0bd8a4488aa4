//! Runtime data records.
//!
//! These are produced once per capture by the transport layer and handed
//! upward by value. Resetting a record is idempotent and never allocates.

use std::fmt;

use crate::enums::wire_enum;

/// Image frame metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImgData {
    /// Image frame id.
    pub frame_id: u16,
    /// Image timestamp in microseconds.
    pub timestamp: u64,
    /// Image exposure time, nominal range [1, 480].
    pub exposure_time: u16,
}

impl ImgData {
    /// Zeroes every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

wire_enum! {
    /// Which parts of an [`ImuData`] sample are valid.
    ///
    /// When only one side is valid the other axis array holds unspecified
    /// stale contents, not zeros; check the flag before reading.
    ImuFlag {
        /// Accelerometer and gyroscope are both valid.
        BothValid = 0,
        /// Only the accelerometer is valid.
        AccelOnly = 1,
        /// Only the gyroscope is valid.
        GyroOnly = 2,
    }
}

impl Default for ImuFlag {
    fn default() -> Self {
        Self::BothValid
    }
}

/// One IMU sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImuData {
    /// IMU frame id.
    pub frame_id: u32,
    /// Which axis arrays are valid.
    pub flag: ImuFlag,
    /// IMU timestamp in microseconds.
    pub timestamp: u64,
    /// Accelerometer data for the X, Y, Z axes.
    pub accel: [f64; 3],
    /// Gyroscope data for the X, Y, Z axes.
    pub gyro: [f64; 3],
    /// IMU temperature.
    pub temperature: f64,
}

impl ImuData {
    /// Zeroes the flag, timestamp, both axis arrays and the temperature.
    ///
    /// `frame_id` is left untouched; the producer assigns it per sample.
    pub fn reset(&mut self) {
        self.flag = ImuFlag::BothValid;
        self.timestamp = 0;
        self.accel = [0.0; 3];
        self.gyro = [0.0; 3];
        self.temperature = 0.0;
    }
}

/// Bounds of a device option value.
///
/// The producer upholds `min <= def <= max`; the validation boundary relies
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct OptionInfo {
    /// Minimum value.
    pub min: i32,
    /// Maximum value.
    pub max: i32,
    /// Default value.
    pub def: i32,
}

impl fmt::Display for OptionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min: {}, max: {}, def: {}", self.min, self.max, self.def)
    }
}
