//! miniray rendering core
//!
//! Renders a fixed scene (two spheres, one point light) through a pinhole
//! camera with ambient + diffuse shading, one ray per pixel. The core
//! exposes a single operation, [`Camera::render`], which produces a
//! finished [`Framebuffer`]; displaying or persisting the buffer is left
//! to collaborators.
//!
//! [`Camera::render`]: camera::Camera::render
//! [`Framebuffer`]: framebuffer::Framebuffer

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod error;
pub mod framebuffer;
pub mod ray;
pub mod scene;
pub mod shading;
pub mod sphere;
