//! Pinhole camera: viewport mapping and the per-pixel render loop.

use glam::DVec3;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::{shade, Color};

/// Color returned for rays that hit nothing: pure black.
pub const BACKGROUND: Color = DVec3::ZERO;

/// Pinhole camera with a fixed virtual viewport.
///
/// The viewport is the rectangle spanned by `lower_left`, `horizontal` and
/// `vertical`; one ray is cast through each pixel's position on it, no
/// anti-aliasing. `render` is the single operation the core exposes to its
/// collaborators.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixels (at least 2).
    pub image_width: u32,
    /// Rendered image height in pixels (at least 2).
    pub image_height: u32,
    /// Shading depth budget, reserved for reflection bounces.
    ///
    /// Carried through `ray_color` and guarded against zero, but the
    /// current shading model never recurses, so values above 1 render
    /// identically.
    pub max_depth: u32,

    /// Camera position, the origin of every primary ray.
    origin: DVec3,
    /// World position of the viewport's lower-left corner.
    lower_left: DVec3,
    /// Vector spanning the viewport's horizontal edge.
    horizontal: DVec3,
    /// Vector spanning the viewport's vertical edge (pointing up).
    vertical: DVec3,
}

impl Camera {
    /// Create a camera for the given image dimensions.
    ///
    /// The viewport is fixed: a 4x2 rectangle one unit in front of a
    /// camera sitting at the world origin.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            max_depth: 5,
            origin: DVec3::ZERO,
            lower_left: DVec3::new(-2.0, -1.0, -1.0),
            horizontal: DVec3::new(4.0, 0.0, 0.0),
            vertical: DVec3::new(0.0, 2.0, 0.0),
        }
    }

    /// Render the scene into a fresh framebuffer.
    ///
    /// Rows are filled in parallel; every pixel is a pure computation on
    /// its own ray, so the output is bit-identical across runs. An error
    /// on any pixel aborts the whole render.
    pub fn render(&self, scene: &Scene) -> Result<Framebuffer, Error> {
        let mut frame = Framebuffer::new(self.image_width, self.image_height);
        let height = self.image_height;

        info!(
            "Rendering {}x{} using {} CPU cores...",
            self.image_width,
            self.image_height,
            rayon::current_num_threads()
        );
        let render_start = std::time::Instant::now();
        let pb = ProgressBar::new(height as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        frame
            .par_rows_mut()
            .enumerate()
            .try_for_each(|(row, pixels)| {
                // The viewport's v axis points up while buffer rows grow
                // downward, so buffer row `row` samples scanline
                // j = height - 1 - row.
                let j = height - 1 - row as u32;
                for (i, pixel) in pixels.chunks_exact_mut(3).enumerate() {
                    let ray = self.get_ray(i as u32, j)?;
                    let color = self.ray_color(&ray, scene, self.max_depth);
                    pixel.copy_from_slice(&Framebuffer::encode_bgr(color));
                }
                pb.inc(1);
                Ok::<(), Error>(())
            })?;

        pb.finish();
        info!("Image rendered in {:.2?}", render_start.elapsed());

        Ok(frame)
    }

    /// Build the primary ray for pixel column `i`, viewport scanline `j`.
    ///
    /// `j` counts from the bottom of the viewport: j = 0 is v = 0.
    fn get_ray(&self, i: u32, j: u32) -> Result<Ray, Error> {
        let u = i as f64 / (self.image_width - 1) as f64;
        let v = j as f64 / (self.image_height - 1) as f64;
        let direction = self.lower_left + self.horizontal * u + self.vertical * v - self.origin;
        Ray::new(self.origin, direction)
    }

    /// Color seen along a ray: the shaded nearest hit, or the background.
    fn ray_color(&self, ray: &Ray, scene: &Scene, depth: u32) -> Color {
        // Depth budget exhausted, no more light is gathered.
        if depth == 0 {
            return BACKGROUND;
        }

        match scene.hit(ray, f64::INFINITY) {
            Some(rec) => shade(&rec, &scene.light),
            None => BACKGROUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Light;
    use crate::sphere::Sphere;

    #[test]
    fn corner_pixels_map_to_the_viewport_corners() {
        let camera = Camera::new(3, 3);
        // i = j = 0 aims at the lower-left corner.
        let r = camera.get_ray(0, 0).unwrap();
        assert_eq!(r.origin, DVec3::ZERO);
        let expected = DVec3::new(-2.0, -1.0, -1.0).normalize();
        assert!((r.direction - expected).length() < 1e-12);
        // The center pixel looks straight down -z.
        let center = camera.get_ray(1, 1).unwrap();
        assert_eq!(center.direction, DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn miss_shades_as_background() {
        let camera = Camera::new(4, 4);
        let scene = Scene::two_spheres();
        let up = Ray::new(DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(camera.ray_color(&up, &scene, camera.max_depth), BACKGROUND);
    }

    #[test]
    fn exhausted_depth_budget_shades_black() {
        let camera = Camera::new(4, 4);
        let scene = Scene::two_spheres();
        let at_red = Ray::new(DVec3::ZERO, DVec3::new(-1.0, 0.0, -1.0)).unwrap();
        assert_eq!(camera.ray_color(&at_red, &scene, 0), BACKGROUND);
        assert_ne!(camera.ray_color(&at_red, &scene, camera.max_depth), BACKGROUND);
    }

    #[test]
    fn buffer_rows_are_flipped_against_the_viewport() {
        // One sphere that only upward-pointing rays can hit: the top
        // buffer row must be lit and the bottom row must stay background.
        let scene = Scene::new(
            vec![Sphere::new(
                DVec3::new(0.0, 10.0, 0.0),
                9.5,
                Color::new(1.0, 1.0, 1.0),
            )],
            Light {
                position: DVec3::new(1.0, 0.0, 0.0),
            },
        );
        let camera = Camera::new(2, 2);
        let frame = camera.render(&scene).unwrap();
        assert_ne!(frame.pixel(0, 0).unwrap(), [0, 0, 0]);
        assert_eq!(frame.pixel(0, 1).unwrap(), [0, 0, 0]);
    }
}
