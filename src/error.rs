//! Error taxonomy for the rendering core.
//!
//! The taxonomy is deliberately narrow: a ray that misses the scene is normal
//! control flow (`Option::None`), not an error.

use thiserror::Error;

/// Errors that can abort a render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A zero-magnitude vector was given where a direction is required.
    ///
    /// Normalizing such a vector would divide by zero and propagate NaN
    /// through every downstream dot product, so construction fails instead.
    #[error("cannot normalize a zero-magnitude vector into a direction")]
    DegenerateVector,

    /// A pixel coordinate outside the framebuffer was addressed.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} framebuffer")]
    PixelOutOfBounds {
        /// Offending column.
        x: u32,
        /// Offending row.
        y: u32,
        /// Framebuffer width in pixels.
        width: u32,
        /// Framebuffer height in pixels.
        height: u32,
    },
}
