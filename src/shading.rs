//! Ambient + diffuse shading model.
//!
//! Radiance is computed independently for whichever surface is hit; there
//! are no shadow rays and no traced reflections.

use glam::DVec3;

use crate::scene::{HitRecord, Light};

/// RGB color in linear space, one f64 per channel.
pub type Color = DVec3;

/// Constant background illumination, independent of the light direction.
pub const AMBIENT: f64 = 0.1;

/// Per-channel intensity of the point light, applied to every surface.
pub const LIGHT_INTENSITY: Color = DVec3::new(1.5, 1.5, 1.5);

/// Shade a hit with the ambient + diffuse model.
///
/// `diff` is the cosine of the angle between the surface normal and the
/// direction to the light, clamped at zero for back-facing surfaces:
///
/// ```text
/// color = 0.5 * (albedo * AMBIENT + albedo * diff) * LIGHT_INTENSITY
/// ```
///
/// with all products component-wise.
pub fn shade(rec: &HitRecord, light: &Light) -> Color {
    let light_dir = (light.position - rec.point).normalize();
    let diff = rec.normal.dot(light_dir).max(0.0);
    0.5 * (rec.albedo * AMBIENT + rec.albedo * diff) * LIGHT_INTENSITY
}

/// Mirror reflection of an incident direction about a surface normal.
///
/// Extension point for specular bounces; the renderer does not currently
/// trace reflected rays.
pub fn reflect(direction: DVec3, normal: DVec3) -> DVec3 {
    direction - 2.0 * direction.dot(normal) * normal
}
