//! Sphere primitive and analytic ray-sphere intersection.

use glam::DVec3;

use crate::ray::Ray;
use crate::shading::Color;

/// Sphere primitive defined by center, radius, and base color.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: DVec3,

    /// Radius of the sphere (always non-negative).
    ///
    /// Negative radius values are clamped to 0.0 in the constructor.
    pub radius: f64,

    /// Diffuse base color of the surface, linear RGB in [0, 1].
    pub albedo: Color,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0.
    pub fn new(center: DVec3, radius: f64, albedo: Color) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            albedo,
        }
    }

    /// Test the ray against this sphere, returning the nearest hit
    /// parameter inside `(t_min, t_max)`.
    ///
    /// Solves `a*t^2 + b*t + c = 0` with `a = d.d`, `b = 2*(o-c).d`,
    /// `c = (o-c).(o-c) - r^2`. A negative discriminant means the ray's
    /// line misses the sphere entirely; a zero discriminant (tangent ray)
    /// counts as a hit with the single repeated root.
    pub fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<f64> {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Prefer the near root; when it lies outside the range (typically
        // behind the ray origin) fall back to the far one.
        let mut root = (-b - sqrtd) / (2.0 * a);
        if root <= t_min || root >= t_max {
            root = (-b + sqrtd) / (2.0 * a);
            if root <= t_min || root >= t_max {
                return None;
            }
        }
        Some(root)
    }

    /// Outward unit normal at a point on the sphere's surface.
    pub fn normal_at(&self, point: DVec3) -> DVec3 {
        (point - self.center) / self.radius
    }
}
