//! Rigid transforms between sensor coordinate frames.

use std::fmt;

/// Rigid transform from one sensor frame to another.
///
/// A point `p` in the source frame maps to `R * p + t` in the target frame.
/// No operation here verifies that `rotation` is orthogonal: calibration
/// data is taken as-is, and a malformed rotation yields a mathematically
/// consistent but physically meaningless result. Rejecting bad calibration
/// belongs to the loader, not to this algebra.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Extrinsics {
    /// Rotation matrix, row-major.
    pub rotation: [[f64; 3]; 3],
    /// Translation vector.
    pub translation: [f64; 3],
}

impl Extrinsics {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        rotation: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        translation: [0.0, 0.0, 0.0],
    };

    /// The inverse transform.
    ///
    /// Rotation becomes its transpose and the translation is rotated into
    /// the original frame by the transpose and negated:
    /// `t'[i] = -sum_j(R[j][i] * t[j])`. Pure and total.
    pub fn inverse(&self) -> Self {
        let r = &self.rotation;
        let t = &self.translation;
        let mut inverted = Self {
            rotation: [[0.0; 3]; 3],
            translation: [0.0; 3],
        };
        for i in 0..3 {
            for j in 0..3 {
                inverted.rotation[i][j] = r[j][i];
            }
            inverted.translation[i] = -(r[0][i] * t[0] + r[1][i] * t[1] + r[2][i] * t[2]);
        }
        inverted
    }

    /// Maps a point from the source frame to the target frame.
    pub fn transform(&self, point: [f64; 3]) -> [f64; 3] {
        let r = &self.rotation;
        let t = &self.translation;
        [
            r[0][0] * point[0] + r[0][1] * point[1] + r[0][2] * point[2] + t[0],
            r[1][0] * point[0] + r[1][1] * point[1] + r[1][2] * point[2] + t[1],
            r[2][0] * point[0] + r[2][1] * point[1] + r[2][2] * point[2] + t[2],
        ]
    }

    /// Chains two transforms: the result maps through `other`, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        let a = &self.rotation;
        let b = &other.rotation;
        let mut composed = Self {
            rotation: [[0.0; 3]; 3],
            translation: self.transform(other.translation),
        };
        for i in 0..3 {
            for j in 0..3 {
                composed.rotation[i][j] =
                    a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        composed
    }
}

impl fmt::Display for Extrinsics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rotation: {:?}, translation: {:?}",
            self.rotation, self.translation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // rotation of 90 degrees about Z with a translation
    fn sample() -> Extrinsics {
        Extrinsics {
            rotation: [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            translation: [0.1, -0.2, 0.05],
        }
    }

    fn assert_close(a: &Extrinsics, b: &Extrinsics) {
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(a.rotation[i][j], b.rotation[i][j], epsilon = 1e-12);
            }
            assert_relative_eq!(a.translation[i], b.translation[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_inverse_rotation_is_transpose() {
        let e = sample();
        let inv = e.inverse();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(inv.rotation[i][j], e.rotation[j][i]);
            }
        }
    }

    #[test]
    fn test_inverse_translation() {
        let e = sample();
        let inv = e.inverse();
        // t' = -R^T t for the 90-degree Z rotation above
        assert_relative_eq!(inv.translation[0], 0.2, epsilon = 1e-12);
        assert_relative_eq!(inv.translation[1], 0.1, epsilon = 1e-12);
        assert_relative_eq!(inv.translation[2], -0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_double_inverse_round_trips() {
        let e = sample();
        assert_close(&e.inverse().inverse(), &e);
    }

    #[test]
    fn test_point_round_trips_through_inverse() {
        let e = sample();
        let inv = e.inverse();
        let p = [1.5, -2.25, 0.75];
        let back = inv.transform(e.transform(p));
        for i in 0..3 {
            assert_relative_eq!(back[i], p[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_compose_with_inverse_is_identity() {
        let e = sample();
        assert_close(&e.compose(&e.inverse()), &Extrinsics::IDENTITY);
        assert_close(&e.inverse().compose(&e), &Extrinsics::IDENTITY);
    }

    #[test]
    fn test_identity_transform_is_noop() {
        let p = [3.0, -1.0, 2.0];
        assert_eq!(Extrinsics::IDENTITY.transform(p), p);
    }
}
