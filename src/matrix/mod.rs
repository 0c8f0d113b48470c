//! Time-multiplexed drive for the 8x8 LED panel
//!
//! The panel has no framebuffer of its own: an image is produced by driving
//! one cell at a time, fast enough that persistence of vision fuses the
//! passes into a steady picture. [`LinePort`] is the only hardware-facing
//! seam; everything above it is plain logic.

pub mod addressing;
pub mod frame;
pub mod lines;
pub mod scanner;

// Re-export commonly used types
pub use addressing::{drive_cell, release_all};
pub use frame::Frame;
pub use lines::{Level, LinePort};
pub use scanner::MatrixScanner;
