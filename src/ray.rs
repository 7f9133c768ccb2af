//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a
//! semi-infinite line in 3D space used for intersection testing.

use glam::DVec3;

use crate::error::Error;

/// Ray in 3D space defined by origin and unit direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a surface point for
    /// secondary rays.
    pub origin: DVec3,

    /// Direction of the ray, always unit length.
    ///
    /// Normalized at construction so the hit parameter t is a plain
    /// Euclidean distance along the ray.
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    ///
    /// The direction is normalized regardless of the magnitude passed in.
    /// A zero-magnitude direction is rejected with
    /// [`Error::DegenerateVector`] rather than letting NaN leak into the
    /// intersection math.
    pub fn new(origin: DVec3, direction: DVec3) -> Result<Self, Error> {
        let direction = direction
            .try_normalize()
            .ok_or(Error::DegenerateVector)?;
        Ok(Self { origin, direction })
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + t * self.direction
    }
}
