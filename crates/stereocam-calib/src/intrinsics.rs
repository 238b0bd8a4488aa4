//! Camera intrinsics.
//!
//! One physical camera slot carries exactly one calibration record; which
//! mathematical model that record follows is fixed when the calibration is
//! produced. The variant set is closed: a future model (Scaramuzza, Mei)
//! is added as one more variant, never by special-casing existing code.

use std::fmt;

/// Error for calibration record decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalibError {
    /// The wire byte does not name a calibration model.
    #[error("unknown calibration model byte: {0}")]
    UnknownModel(u8),
}

/// Calibration model discriminator.
///
/// Ordinals are shared with calibration files and firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum CalibModel {
    /// Pinhole camera.
    Pinhole = 0,
    /// Equidistant (Kannala-Brandt) camera.
    KannalaBrandt = 1,
    /// Calibration model not known to this build.
    Unknown = 2,
}

impl CalibModel {
    /// Decodes the wire discriminator byte.
    ///
    /// Unrecognized bytes decode to [`CalibModel::Unknown`] so records from
    /// newer firmware still load; loaders that would rather reject them use
    /// the [`TryFrom<u8>`] impl instead.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Pinhole,
            1 => Self::KannalaBrandt,
            _ => Self::Unknown,
        }
    }

    /// The discriminator name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pinhole => "pinhole",
            Self::KannalaBrandt => "kannala_brandt",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CalibModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for CalibModel {
    type Error = CalibError;

    /// Strict decode: rejects bytes outside the wire-defined set instead of
    /// mapping them to [`CalibModel::Unknown`].
    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Pinhole),
            1 => Ok(Self::KannalaBrandt),
            2 => Ok(Self::Unknown),
            _ => Err(CalibError::UnknownModel(raw)),
        }
    }
}

/// Pinhole camera intrinsics.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PinholeIntrinsics {
    /// Image width in pixels.
    pub width: u16,
    /// Image height in pixels.
    pub height: u16,
    /// Focal length of the image plane, as a multiple of pixel width.
    pub fx: f64,
    /// Focal length of the image plane, as a multiple of pixel height.
    pub fy: f64,
    /// Horizontal coordinate of the principal point.
    pub cx: f64,
    /// Vertical coordinate of the principal point.
    pub cy: f64,
    /// Legacy distortion-model byte carried by captured records.
    ///
    /// Preserved for wire compatibility only; the [`CameraIntrinsics`]
    /// variant is the single source of truth for which model a record
    /// follows, and nothing branches on this byte.
    pub model: u8,
    /// Distortion coefficients: k1, k2, p1, p2, k3.
    pub coeffs: [f64; 5],
}

impl PinholeIntrinsics {
    /// Creates a pinhole record; the legacy model byte is set to the
    /// pinhole discriminator.
    pub const fn new(
        width: u16,
        height: u16,
        fx: f64,
        fy: f64,
        cx: f64,
        cy: f64,
        coeffs: [f64; 5],
    ) -> Self {
        Self {
            width,
            height,
            fx,
            fy,
            cx,
            cy,
            model: CalibModel::Pinhole as u8,
            coeffs,
        }
    }

    /// Reproduces a captured record, keeping whatever legacy model byte the
    /// device wrote.
    pub const fn with_model_byte(mut self, model: u8) -> Self {
        self.model = model;
        self
    }
}

impl fmt::Display for PinholeIntrinsics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pinhole, width: {}, height: {}, fx: {}, fy: {}, cx: {}, cy: {}, coeffs: {:?}",
            self.width, self.height, self.fx, self.fy, self.cx, self.cy, self.coeffs
        )
    }
}

/// Kannala-Brandt (equidistant fisheye) camera intrinsics.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KannalaBrandtIntrinsics {
    /// Image width in pixels.
    pub width: u16,
    /// Image height in pixels.
    pub height: u16,
    /// Distortion coefficient k2.
    pub k2: f64,
    /// Distortion coefficient k3.
    pub k3: f64,
    /// Distortion coefficient k4.
    pub k4: f64,
    /// Distortion coefficient k5.
    pub k5: f64,
    /// Projection parameter mu.
    pub mu: f64,
    /// Projection parameter mv.
    pub mv: f64,
    /// Projection parameter u0.
    pub u0: f64,
    /// Projection parameter v0.
    pub v0: f64,
}

impl fmt::Display for KannalaBrandtIntrinsics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kannala_brandt, width: {}, height: {}, k2: {}, k3: {}, k4: {}, k5: {}, \
             mu: {}, mv: {}, u0: {}, v0: {}",
            self.width, self.height, self.k2, self.k3, self.k4, self.k5, self.mu, self.mv,
            self.u0, self.v0
        )
    }
}

/// Intrinsics of one camera slot.
///
/// A closed sum over the supported calibration models. The variant is fixed
/// at construction; consumers match exhaustively and recover the
/// discriminator through [`CameraIntrinsics::calib_model`] without knowing
/// the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CameraIntrinsics {
    /// Pinhole calibration.
    Pinhole(PinholeIntrinsics),
    /// Kannala-Brandt calibration.
    KannalaBrandt(KannalaBrandtIntrinsics),
    /// Calibration present but its model is not known to this build.
    Unknown,
}

impl CameraIntrinsics {
    /// The calibration model discriminator of this record.
    pub const fn calib_model(&self) -> CalibModel {
        match self {
            Self::Pinhole(_) => CalibModel::Pinhole,
            Self::KannalaBrandt(_) => CalibModel::KannalaBrandt,
            Self::Unknown => CalibModel::Unknown,
        }
    }

    /// Image dimensions, `None` for an unknown-model record.
    pub const fn image_size(&self) -> Option<(u16, u16)> {
        match self {
            Self::Pinhole(p) => Some((p.width, p.height)),
            Self::KannalaBrandt(kb) => Some((kb.width, kb.height)),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for CameraIntrinsics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pinhole(p) => p.fmt(f),
            Self::KannalaBrandt(kb) => kb.fmt(f),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}
