#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use stereocam_types as types;

#[doc(inline)]
pub use stereocam_calib as calib;
