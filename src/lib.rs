//! Snake on an 8x8 scanned LED matrix
//!
//! This library provides:
//! - Core game logic (game module)
//! - Time-multiplexed panel drive (matrix module)
//! - Remote-control decoding and dispatch (input module)
//! - The device main loop (driver module)
//! - A terminal simulation of the panel (sim, render and modes modules)

pub mod driver;
pub mod game;
pub mod input;
pub mod matrix;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod sim;
