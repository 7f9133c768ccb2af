//! Scene description and ray-scene intersection.
//!
//! The scene is an explicit immutable value (sphere records plus one point
//! light) built once and passed by reference into the renderer, rather than
//! literals inlined in the shading code. Intersection uses a nearest-hit
//! scan over all spheres.

use glam::DVec3;

use crate::ray::Ray;
use crate::shading::Color;
use crate::sphere::Sphere;

/// Lower bound on accepted hit parameters.
///
/// Rejects intersections behind (or numerically on top of) the ray origin.
pub const T_MIN: f64 = 1e-3;

/// A single point light.
///
/// Only the position varies per light; intensity is a global constant of
/// the shading model ([`crate::shading::LIGHT_INTENSITY`]).
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Position of the light in world coordinates.
    pub position: DVec3,
}

/// Ray-scene intersection information.
///
/// Everything the shading model needs: hit point, outward unit normal,
/// distance along the ray, and the surface's base color.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Point where the ray intersects the surface.
    pub point: DVec3,
    /// Outward unit surface normal at the intersection point.
    pub normal: DVec3,
    /// Distance along the ray to the intersection point.
    pub t: f64,
    /// Base color of the surface that was hit.
    pub albedo: Color,
}

/// Immutable scene: a list of spheres and one point light.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Spheres making up the scene geometry.
    pub spheres: Vec<Sphere>,
    /// The single point light.
    pub light: Light,
}

impl Scene {
    /// Create a scene from its parts.
    pub fn new(spheres: Vec<Sphere>, light: Light) -> Self {
        Self { spheres, light }
    }

    /// The fixed two-sphere demo scene.
    ///
    /// A red sphere on the left, a green sphere on the right, both of
    /// radius 0.5 and one unit in front of the camera, lit from (1, 0, 0).
    pub fn two_spheres() -> Self {
        Self::new(
            vec![
                Sphere::new(DVec3::new(-1.0, 0.0, -1.0), 0.5, Color::new(1.0, 0.0, 0.0)),
                Sphere::new(DVec3::new(1.0, 0.0, -1.0), 0.5, Color::new(0.0, 1.0, 0.0)),
            ],
            Light {
                position: DVec3::new(1.0, 0.0, 0.0),
            },
        )
    }

    /// Find the nearest intersection of the ray with any sphere in
    /// `(T_MIN, t_max)`.
    ///
    /// Keeps a closest-so-far accumulator across all spheres, so whichever
    /// surface is geometrically nearest wins regardless of declaration
    /// order.
    pub fn hit(&self, ray: &Ray, t_max: f64) -> Option<HitRecord> {
        let mut nearest: Option<HitRecord> = None;
        let mut closest_so_far = t_max;

        for sphere in &self.spheres {
            if let Some(t) = sphere.hit(ray, T_MIN, closest_so_far) {
                let point = ray.at(t);
                closest_so_far = t;
                nearest = Some(HitRecord {
                    point,
                    normal: sphere.normal_at(point),
                    t,
                    albedo: sphere.albedo,
                });
            }
        }

        nearest
    }
}
