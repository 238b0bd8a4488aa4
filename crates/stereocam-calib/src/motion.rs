//! IMU calibration records.

use std::fmt;

/// Intrinsics of one inertial sensor: scale, drift and variances.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ImuIntrinsics {
    /// Scale matrix: diagonal holds per-axis scale, off-diagonal holds
    /// cross-axis factors.
    pub scale: [[f64; 3]; 3],
    /// Zero-drift for the X, Y, Z axes.
    pub drift: [f64; 3],
    /// Noise density variances.
    pub noise: [f64; 3],
    /// Random walk variances.
    pub bias: [f64; 3],
}

impl fmt::Display for ImuIntrinsics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale: {:?}, drift: {:?}, noise: {:?}, bias: {:?}",
            self.scale, self.drift, self.noise, self.bias
        )
    }
}

/// Motion intrinsics: one record per inertial sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionIntrinsics {
    /// Accelerometer intrinsics.
    pub accel: ImuIntrinsics,
    /// Gyroscope intrinsics.
    pub gyro: ImuIntrinsics,
}

impl fmt::Display for MotionIntrinsics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "accel: {{{}}}, gyro: {{{}}}", self.accel, self.gyro)
    }
}
