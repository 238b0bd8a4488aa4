//! Per-model option descriptors and the validation boundary.
//!
//! Ranges and permitted value sets differ between device generations; the
//! table below is a compatibility contract with firmware and is reproduced
//! value-for-value from the documented ranges, keyed by generation rather
//! than hard-coded per model.

use log::debug;

use crate::data::OptionInfo;
use crate::enums::{DeviceOption, Model};

/// Device generation, the key of the option range table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Generation {
    /// First-generation devices.
    Standard1,
    /// Second-generation devices.
    Standard2,
}

impl Model {
    /// The generation this model belongs to.
    pub const fn generation(self) -> Generation {
        match self {
            Model::Standard => Generation::Standard1,
            Model::Standard2 | Model::Standard210a => Generation::Standard2,
        }
    }
}

/// Error for option lookups and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    /// The option is a trigger action and carries no value range.
    #[error("option {0} is an action and has no value range")]
    NoRange(DeviceOption),

    /// The value falls outside the generation-specific range.
    #[error("value {value} for option {option} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The option being set.
        option: DeviceOption,
        /// The rejected value.
        value: i32,
        /// Range minimum for this generation.
        min: i32,
        /// Range maximum for this generation.
        max: i32,
    },

    /// The value is not a member of the option's discrete value set.
    #[error("value {value} for option {option} is not a permitted value")]
    NotInValueSet {
        /// The option being set.
        option: DeviceOption,
        /// The rejected value.
        value: i32,
    },

    /// One half of a coupled option pair was set without the other.
    #[error("option {present} must be set together with {missing}")]
    UnpairedOption {
        /// The option that was present.
        present: DeviceOption,
        /// Its required companion.
        missing: DeviceOption,
    },
}

const fn info(min: i32, max: i32, def: i32) -> OptionInfo {
    OptionInfo { min, max, def }
}

/// Looks up the value bounds of an option for a device model.
///
/// Options whose range differs by generation answer per the model's
/// generation; trigger actions answer [`OptionError::NoRange`].
pub const fn option_info(model: Model, option: DeviceOption) -> Result<OptionInfo, OptionError> {
    use DeviceOption::*;
    use Generation::*;

    let result = match (option, model.generation()) {
        (Gain, _) => info(0, 48, 24),
        (Brightness, _) => info(0, 240, 120),
        (Contrast, _) => info(0, 255, 127),
        (FrameRate, _) => info(10, 60, 25),
        (ImuFrequency, _) => info(100, 500, 200),
        (ExposureMode, _) => info(0, 1, 0),
        (MaxGain, Standard1) => info(0, 48, 48),
        (MaxGain, Standard2) => info(0, 255, 8),
        (MaxExposureTime, Standard1) => info(0, 240, 240),
        (MaxExposureTime, Standard2) => info(0, 1000, 333),
        (MinExposureTime, _) => info(0, 1000, 0),
        (DesiredBrightness, Standard1) => info(0, 255, 192),
        (DesiredBrightness, Standard2) => info(1, 255, 122),
        (IrControl, _) => info(0, 160, 0),
        (HdrMode, _) => info(0, 1, 0),
        (AccelerometerRange, Standard1) => info(4, 32, 8),
        (AccelerometerRange, Standard2) => info(6, 48, 12),
        (GyroscopeRange, Standard1) => info(500, 4000, 1000),
        (GyroscopeRange, Standard2) => info(250, 4000, 1000),
        (AccelerometerLowPassFilter, _) => info(0, 2, 2),
        (GyroscopeLowPassFilter, _) => info(23, 64, 64),
        (ZeroDriftCalibration | EraseChip, _) => return Err(OptionError::NoRange(option)),
    };
    Ok(result)
}

/// The discrete value set of an option, when it has one.
///
/// These options accept only the listed values, not every value between the
/// range bounds.
pub const fn permitted_values(model: Model, option: DeviceOption) -> Option<&'static [i32]> {
    use DeviceOption::*;
    use Generation::*;

    match (option, model.generation()) {
        (FrameRate, _) => Some(&[10, 15, 20, 25, 30, 35, 40, 45, 50, 55, 60]),
        (ImuFrequency, _) => Some(&[100, 200, 250, 333, 500]),
        (AccelerometerRange, Standard1) => Some(&[4, 8, 16, 32]),
        (AccelerometerRange, Standard2) => Some(&[6, 12, 24, 48]),
        (GyroscopeRange, Standard1) => Some(&[500, 1000, 2000, 4000]),
        (GyroscopeRange, Standard2) => Some(&[250, 500, 1000, 2000, 4000]),
        (AccelerometerLowPassFilter, _) => Some(&[0, 1, 2]),
        (GyroscopeLowPassFilter, _) => Some(&[23, 64]),
        _ => None,
    }
}

/// Validates a single option value against the model's contract.
///
/// Discrete-set options check membership; ranged options check bounds.
pub fn validate(model: Model, option: DeviceOption, value: i32) -> Result<(), OptionError> {
    if let Some(set) = permitted_values(model, option) {
        if set.contains(&value) {
            Ok(())
        } else {
            debug!("rejecting {option}={value} for {model}: not in {set:?}");
            Err(OptionError::NotInValueSet { option, value })
        }
    } else {
        let info = option_info(model, option)?;
        if value < info.min || value > info.max {
            debug!(
                "rejecting {option}={value} for {model}: out of [{}, {}]",
                info.min, info.max
            );
            Err(OptionError::OutOfRange {
                option,
                value,
                min: info.min,
                max: info.max,
            })
        } else {
            Ok(())
        }
    }
}

/// Validates a batch of option settings applied together.
///
/// On top of per-value validation, enforces the coupled pair: frame rate and
/// IMU frequency must always be set together, so a batch carrying one
/// without the other is a usage error, never a silent success.
pub fn validate_batch(
    model: Model,
    settings: &[(DeviceOption, i32)],
) -> Result<(), OptionError> {
    let has = |wanted: DeviceOption| settings.iter().any(|&(option, _)| option == wanted);

    let frame_rate = has(DeviceOption::FrameRate);
    let imu_frequency = has(DeviceOption::ImuFrequency);
    if frame_rate != imu_frequency {
        let (present, missing) = if frame_rate {
            (DeviceOption::FrameRate, DeviceOption::ImuFrequency)
        } else {
            (DeviceOption::ImuFrequency, DeviceOption::FrameRate)
        };
        debug!("rejecting batch for {model}: {present} without {missing}");
        return Err(OptionError::UnpairedOption { present, missing });
    }

    for &(option, value) in settings {
        validate(model, option, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODELS: [Model; 3] = [Model::Standard, Model::Standard2, Model::Standard210a];

    #[test]
    fn test_generation_mapping() {
        assert_eq!(Model::Standard.generation(), Generation::Standard1);
        assert_eq!(Model::Standard2.generation(), Generation::Standard2);
        assert_eq!(Model::Standard210a.generation(), Generation::Standard2);
    }

    #[test]
    fn test_generation_split_ranges() {
        let s1 = option_info(Model::Standard, DeviceOption::MaxGain).unwrap();
        assert_eq!((s1.min, s1.max, s1.def), (0, 48, 48));
        let s2 = option_info(Model::Standard2, DeviceOption::MaxGain).unwrap();
        assert_eq!((s2.min, s2.max, s2.def), (0, 255, 8));
        // the two second-generation models share one table entry
        assert_eq!(
            option_info(Model::Standard210a, DeviceOption::MaxGain),
            option_info(Model::Standard2, DeviceOption::MaxGain)
        );

        let s1 = option_info(Model::Standard, DeviceOption::DesiredBrightness).unwrap();
        assert_eq!((s1.min, s1.max, s1.def), (0, 255, 192));
        let s2 = option_info(Model::Standard2, DeviceOption::DesiredBrightness).unwrap();
        assert_eq!((s2.min, s2.max, s2.def), (1, 255, 122));
    }

    #[test]
    fn test_every_range_entry_is_well_formed() {
        for model in ALL_MODELS {
            for raw in 0..DeviceOption::COUNT {
                let option = DeviceOption::from_raw(raw).unwrap();
                match option_info(model, option) {
                    Ok(info) => {
                        assert!(
                            info.min <= info.def && info.def <= info.max,
                            "{model}/{option}: {info}"
                        );
                    }
                    Err(OptionError::NoRange(o)) => {
                        assert!(matches!(
                            o,
                            DeviceOption::ZeroDriftCalibration | DeviceOption::EraseChip
                        ));
                    }
                    Err(e) => panic!("{model}/{option}: unexpected {e}"),
                }
            }
        }
    }

    #[test]
    fn test_every_default_is_in_its_value_set() {
        for model in ALL_MODELS {
            for raw in 0..DeviceOption::COUNT {
                let option = DeviceOption::from_raw(raw).unwrap();
                if let Some(set) = permitted_values(model, option) {
                    let info = option_info(model, option).unwrap();
                    assert!(set.contains(&info.def), "{model}/{option}: {info}");
                    assert_eq!(info.min, *set.first().unwrap());
                    assert_eq!(info.max, *set.last().unwrap());
                }
            }
        }
    }

    #[test]
    fn test_discrete_set_membership() {
        assert!(validate(Model::Standard, DeviceOption::GyroscopeRange, 2000).is_ok());
        // 250 is only permitted on the second generation
        assert_eq!(
            validate(Model::Standard, DeviceOption::GyroscopeRange, 250),
            Err(OptionError::NotInValueSet {
                option: DeviceOption::GyroscopeRange,
                value: 250,
            })
        );
        assert!(validate(Model::Standard2, DeviceOption::GyroscopeRange, 250).is_ok());
        // in range but not in the set
        assert!(validate(Model::Standard, DeviceOption::FrameRate, 27).is_err());
    }

    #[test]
    fn test_range_check() {
        assert!(validate(Model::Standard, DeviceOption::Gain, 48).is_ok());
        assert_eq!(
            validate(Model::Standard, DeviceOption::Gain, 49),
            Err(OptionError::OutOfRange {
                option: DeviceOption::Gain,
                value: 49,
                min: 0,
                max: 48,
            })
        );
    }

    #[test]
    fn test_actions_have_no_range() {
        assert_eq!(
            option_info(Model::Standard, DeviceOption::EraseChip),
            Err(OptionError::NoRange(DeviceOption::EraseChip))
        );
        assert_eq!(
            validate(Model::Standard, DeviceOption::ZeroDriftCalibration, 1),
            Err(OptionError::NoRange(DeviceOption::ZeroDriftCalibration))
        );
    }

    #[test]
    fn test_coupled_pair_enforced() {
        let err = validate_batch(Model::Standard, &[(DeviceOption::FrameRate, 25)]).unwrap_err();
        assert_eq!(
            err,
            OptionError::UnpairedOption {
                present: DeviceOption::FrameRate,
                missing: DeviceOption::ImuFrequency,
            }
        );
        let err =
            validate_batch(Model::Standard, &[(DeviceOption::ImuFrequency, 200)]).unwrap_err();
        assert_eq!(
            err,
            OptionError::UnpairedOption {
                present: DeviceOption::ImuFrequency,
                missing: DeviceOption::FrameRate,
            }
        );
        assert!(validate_batch(
            Model::Standard,
            &[
                (DeviceOption::FrameRate, 25),
                (DeviceOption::ImuFrequency, 200),
            ],
        )
        .is_ok());
        // pairing satisfied but a value is still bad
        assert!(validate_batch(
            Model::Standard,
            &[
                (DeviceOption::FrameRate, 27),
                (DeviceOption::ImuFrequency, 200),
            ],
        )
        .is_err());
        // a batch without either half of the pair is fine
        assert!(validate_batch(Model::Standard, &[(DeviceOption::Gain, 24)]).is_ok());
    }
}
