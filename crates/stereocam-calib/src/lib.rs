#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Rigid transforms between sensor frames.
pub mod extrinsics;

/// Camera intrinsics variants.
pub mod intrinsics;

/// IMU intrinsics.
pub mod motion;

pub use crate::extrinsics::Extrinsics;
pub use crate::intrinsics::{
    CalibError, CalibModel, CameraIntrinsics, KannalaBrandtIntrinsics, PinholeIntrinsics,
};
pub use crate::motion::{ImuIntrinsics, MotionIntrinsics};
