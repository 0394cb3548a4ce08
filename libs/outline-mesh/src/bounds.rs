//! # Bounding Volume
//!
//! Axis-aligned bounding box recomputed from final output positions.

use glam::DVec3;

/// An axis-aligned bounding box.
///
/// An empty point set yields a zero-sized box at the origin, which is how
/// an empty outline reports its bounds.
///
/// # Example
///
/// ```rust
/// use outline_mesh::Aabb;
/// use glam::DVec3;
///
/// let aabb = Aabb::from_points(&[DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0)]);
/// assert_eq!(aabb.size(), DVec3::new(1.0, 2.0, 3.0));
/// assert!(aabb.contains(DVec3::new(0.5, 1.0, 1.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Aabb {
    /// Zero-sized box at the origin.
    pub const ZERO: Self = Self {
        min: DVec3::ZERO,
        max: DVec3::ZERO,
    };

    /// Creates a box from two corners, sorting each axis.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Computes the tightest box enclosing `points`.
    ///
    /// Returns [`Aabb::ZERO`] for an empty slice.
    pub fn from_points(points: &[DVec3]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::ZERO;
        };

        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }

        Self { min, max }
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns true if `point` lies inside or on the box.
    #[inline]
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Returns true if the box has zero extent on every axis.
    #[inline]
    pub fn is_zero_sized(&self) -> bool {
        self.min == self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_empty_is_zero() {
        let aabb = Aabb::from_points(&[]);
        assert_eq!(aabb, Aabb::ZERO);
        assert!(aabb.is_zero_sized());
    }

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(&[
            DVec3::new(-1.0, 5.0, 0.0),
            DVec3::new(2.0, -3.0, 4.0),
            DVec3::new(0.0, 0.0, -6.0),
        ]);
        assert_eq!(aabb.min, DVec3::new(-1.0, -3.0, -6.0));
        assert_eq!(aabb.max, DVec3::new(2.0, 5.0, 4.0));
        assert_eq!(aabb.center(), DVec3::new(0.5, 1.0, -1.0));
    }

    #[test]
    fn test_aabb_new_sorts_corners() {
        let aabb = Aabb::new(DVec3::ONE, DVec3::ZERO);
        assert_eq!(aabb.min, DVec3::ZERO);
        assert_eq!(aabb.max, DVec3::ONE);
    }

    #[test]
    fn test_aabb_contains() {
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert!(aabb.contains(DVec3::ONE));
        assert!(!aabb.contains(DVec3::new(1.5, 0.5, 0.5)));
    }
}
