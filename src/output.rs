//! Output collaborator: persists a finished framebuffer to disk.
//!
//! The rendering core hands over a BGR framebuffer and has no opinion on
//! image formats; this module converts to RGB and encodes PNG via the
//! `image` crate.

use log::{info, warn};

use miniray::framebuffer::Framebuffer;

/// Save a framebuffer as a PNG file.
///
/// Logs the outcome instead of panicking; a failed save leaves the
/// process alive with the rendered buffer intact.
pub fn save_framebuffer_as_png(frame: &Framebuffer, output_path: &str) {
    let image = frame.to_rgb_image();
    match image.save(output_path) {
        Ok(_) => info!("Image saved as {}", output_path),
        Err(e) => warn!("Failed to save image: {}", e),
    }
}
