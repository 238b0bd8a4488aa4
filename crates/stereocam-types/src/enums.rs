//! Device enumerations shared with firmware.
//!
//! Every enum here is `#[repr(u8)]` with ordinals that are part of the wire
//! protocol: devices and serialized configs reference them as raw bytes, so
//! members are only ever inserted before the end of the list and never
//! renumbered. Validity of a raw byte is decided against the member count,
//! not a hard-coded bound.

/// A raw byte did not name a member of the target enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name} value: {value}")]
pub struct InvalidEnumValue {
    /// Name of the enumeration the conversion targeted.
    pub name: &'static str,
    /// The offending raw value.
    pub value: u8,
}

/// Declares a wire-stable `#[repr(u8)]` enumeration.
///
/// Generates the enum plus its validity check, raw-byte conversions and
/// string forms, all derived from the declared member list so that adding a
/// member in one place keeps everything consistent.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )+
        }

        impl $name {
            /// Number of members; every raw value below this is valid.
            pub const COUNT: u8 = [$($value),+].len() as u8;

            /// Whether a raw wire byte names a member.
            pub const fn is_valid(raw: u8) -> bool {
                raw < Self::COUNT
            }

            /// Decodes a raw wire byte, `None` if out of range.
            pub const fn from_raw(raw: u8) -> Option<Self> {
                match raw {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// The member name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }

            /// Displays a raw wire byte: the member name when valid, the
            /// decimal value otherwise. Tolerates version skew where a peer
            /// knows members this build does not.
            pub fn raw_to_string(raw: u8) -> String {
                match Self::from_raw(raw) {
                    Some(value) => value.as_str().to_string(),
                    None => raw.to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<u8> for $name {
            type Error = crate::enums::InvalidEnumValue;

            fn try_from(raw: u8) -> Result<Self, Self::Error> {
                Self::from_raw(raw).ok_or(crate::enums::InvalidEnumValue {
                    name: stringify!($name),
                    value: raw,
                })
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// Device model generation.
    Model {
        /// First-generation standard device.
        Standard = 0,
        /// Second-generation standard device.
        Standard2 = 1,
        /// Second-generation 210a device.
        Standard210a = 2,
    }
}

wire_enum! {
    /// Data streams the device can produce.
    Stream {
        /// Left image stream.
        Left = 0,
        /// Right image stream.
        Right = 1,
        /// Left image stream, rectified.
        LeftRectified = 2,
        /// Right image stream, rectified.
        RightRectified = 3,
        /// Disparity stream.
        Disparity = 4,
        /// Disparity stream, normalized.
        DisparityNormalized = 5,
        /// Depth stream.
        Depth = 6,
        /// Point cloud stream.
        Points = 7,
    }
}

wire_enum! {
    /// Full set of functionality a device may provide.
    Capabilities {
        /// Provides a stereo stream.
        Stereo = 0,
        /// Provides a stereo color stream.
        StereoColor = 1,
        /// Provides a color stream.
        Color = 2,
        /// Provides a depth stream.
        Depth = 3,
        /// Provides a point cloud stream.
        Points = 4,
        /// Provides a fisheye stream.
        Fisheye = 5,
        /// Provides an infrared stream.
        Infrared = 6,
        /// Provides a second infrared stream.
        Infrared2 = 7,
        /// Provides IMU (accelerometer, gyroscope) data.
        Imu = 8,
    }
}

wire_enum! {
    /// Read-only device information fields.
    Info {
        /// Device name.
        DeviceName = 0,
        /// Serial number.
        SerialNumber = 1,
        /// Firmware version.
        FirmwareVersion = 2,
        /// Hardware version.
        HardwareVersion = 3,
        /// Spec version.
        SpecVersion = 4,
        /// Lens type.
        LensType = 5,
        /// IMU type.
        ImuType = 6,
        /// Nominal baseline.
        NominalBaseline = 7,
    }
}

wire_enum! {
    /// Camera control options.
    ///
    /// Named `DeviceOption` rather than the firmware docs' `Option` so it
    /// does not shadow `std::option::Option`; ordinals are unchanged.
    DeviceOption {
        /// Image gain, valid in manual-exposure mode.
        Gain = 0,
        /// Image brightness, valid in manual-exposure mode.
        Brightness = 1,
        /// Image contrast, valid in manual-exposure mode.
        Contrast = 2,
        /// Image frame rate; must be set together with [`DeviceOption::ImuFrequency`].
        FrameRate = 3,
        /// IMU frequency; must be set together with [`DeviceOption::FrameRate`].
        ImuFrequency = 4,
        /// Exposure mode: 0 auto, 1 manual.
        ExposureMode = 5,
        /// Max gain, valid in auto-exposure mode.
        MaxGain = 6,
        /// Max exposure time, valid in auto-exposure mode.
        MaxExposureTime = 7,
        /// Min exposure time, valid in auto-exposure mode.
        MinExposureTime = 8,
        /// Desired brightness, valid in auto-exposure mode.
        DesiredBrightness = 9,
        /// Infrared emitter control.
        IrControl = 10,
        /// HDR mode: 0 for 10-bit, 1 for 12-bit.
        HdrMode = 11,
        /// Accelerometer full-scale range.
        AccelerometerRange = 12,
        /// Gyroscope full-scale range.
        GyroscopeRange = 13,
        /// Accelerometer low-pass filter parameter.
        AccelerometerLowPassFilter = 14,
        /// Gyroscope low-pass filter parameter.
        GyroscopeLowPassFilter = 15,
        /// Trigger a zero-drift calibration.
        ZeroDriftCalibration = 16,
        /// Erase the device chip.
        EraseChip = 17,
    }
}

wire_enum! {
    /// Which data the user chooses to capture.
    Source {
        /// Video streaming of stereo, color, depth, etc.
        VideoStreaming = 0,
        /// Motion tracking of IMU data.
        MotionTracking = 1,
        /// Everything together.
        All = 2,
    }
}

wire_enum! {
    /// Peripheral hardware add-ons.
    AddOns {
        /// Infrared emitter.
        Infrared = 0,
        /// Second infrared emitter.
        Infrared2 = 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_counts() {
        assert_eq!(Model::COUNT, 3);
        assert_eq!(Stream::COUNT, 8);
        assert_eq!(Capabilities::COUNT, 9);
        assert_eq!(Info::COUNT, 8);
        assert_eq!(DeviceOption::COUNT, 18);
        assert_eq!(Source::COUNT, 3);
        assert_eq!(AddOns::COUNT, 2);
    }

    #[test]
    fn test_wire_ordinals_frozen() {
        assert_eq!(Model::Standard210a as u8, 2);
        assert_eq!(Stream::Points as u8, 7);
        assert_eq!(Capabilities::Imu as u8, 8);
        assert_eq!(DeviceOption::FrameRate as u8, 3);
        assert_eq!(DeviceOption::ImuFrequency as u8, 4);
        assert_eq!(DeviceOption::EraseChip as u8, 17);
        assert_eq!(Source::All as u8, 2);
    }

    #[test]
    fn test_is_valid_matches_sentinel() {
        for raw in 0..=u8::MAX {
            assert_eq!(Stream::is_valid(raw), raw < Stream::COUNT);
            assert_eq!(Stream::is_valid(raw), Stream::from_raw(raw).is_some());
        }
    }

    #[test]
    fn test_raw_round_trip() {
        for raw in 0..DeviceOption::COUNT {
            let option = DeviceOption::from_raw(raw).unwrap();
            assert_eq!(option as u8, raw);
        }
    }

    #[test]
    fn test_display_valid_and_invalid() {
        assert_eq!(Model::Standard.to_string(), "Standard");
        assert_eq!(Model::raw_to_string(1), "Standard2");
        assert_eq!(Model::raw_to_string(200), "200");
    }

    #[test]
    fn test_try_from_invalid() {
        let err = Source::try_from(9).unwrap_err();
        assert_eq!(err.name, "Source");
        assert_eq!(err.value, 9);
        assert_eq!(err.to_string(), "invalid Source value: 9");
    }
}
