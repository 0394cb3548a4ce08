//! # Target-Space Transforms
//!
//! Maps welded source geometry into the shared target space.
//!
//! Points use the full affine transform. Normals use the inverse-transpose
//! of the linear part and are re-normalized, so they stay perpendicular to
//! the surface under non-uniform scale.

use crate::error::{MeshError, MeshResult};
use config::constants::DETERMINANT_EPSILON;
use glam::{DAffine3, DMat3, DQuat, DVec3};

/// Source-local → target-space transform with a cached normal matrix.
///
/// # Example
///
/// ```rust
/// use outline_mesh::TargetTransform;
/// use glam::{DQuat, DVec3};
///
/// let t = TargetTransform::from_scale_rotation_translation(
///     DVec3::new(2.0, 1.0, 1.0),
///     DQuat::IDENTITY,
///     DVec3::new(0.0, 0.0, 5.0),
/// )?;
/// assert_eq!(t.transform_point(DVec3::X), DVec3::new(2.0, 0.0, 5.0));
/// # Ok::<(), outline_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTransform {
    affine: DAffine3,
    normal_matrix: DMat3,
}

impl Default for TargetTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TargetTransform {
    /// Identity: source space already is target space.
    pub const IDENTITY: Self = Self {
        affine: DAffine3::IDENTITY,
        normal_matrix: DMat3::IDENTITY,
    };

    /// Creates a transform from an affine matrix.
    ///
    /// # Errors
    ///
    /// [`MeshError::SingularTransform`] if the linear part is (near)
    /// singular relative to its own size, e.g. a zero scale on some axis.
    /// Tiny or huge uniform scales are accepted.
    pub fn from_affine(affine: DAffine3) -> MeshResult<Self> {
        let linear = affine.matrix3;
        let determinant = linear.determinant();
        let column_product =
            linear.x_axis.length() * linear.y_axis.length() * linear.z_axis.length();

        if !determinant.is_finite()
            || determinant.abs() <= DETERMINANT_EPSILON * column_product
        {
            return Err(MeshError::SingularTransform { determinant });
        }

        Ok(Self {
            affine,
            normal_matrix: affine.matrix3.inverse().transpose(),
        })
    }

    /// Creates a transform from scale, rotation and translation, applied in
    /// that order.
    pub fn from_scale_rotation_translation(
        scale: DVec3,
        rotation: DQuat,
        translation: DVec3,
    ) -> MeshResult<Self> {
        Self::from_affine(DAffine3::from_scale_rotation_translation(
            scale,
            rotation,
            translation,
        ))
    }

    /// Creates a pure translation.
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            affine: DAffine3::from_translation(translation),
            normal_matrix: DMat3::IDENTITY,
        }
    }

    /// Composes "source local → world → target local" from two
    /// local-to-world transforms.
    ///
    /// # Errors
    ///
    /// [`MeshError::SingularTransform`] if either transform is singular.
    pub fn relative_to(source_to_world: DAffine3, target_to_world: DAffine3) -> MeshResult<Self> {
        let target = Self::from_affine(target_to_world)?;
        Self::from_affine(target.affine.inverse() * source_to_world)
    }

    /// Returns the affine point transform.
    #[inline]
    pub fn affine(&self) -> DAffine3 {
        self.affine
    }

    /// Transforms a position (rotation, scale and translation).
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.affine.transform_point3(point)
    }

    /// Transforms a normal and re-normalizes it.
    ///
    /// Zero normals stay zero.
    #[inline]
    pub fn transform_normal(&self, normal: DVec3) -> DVec3 {
        (self.normal_matrix * normal).normalize_or_zero()
    }
}
