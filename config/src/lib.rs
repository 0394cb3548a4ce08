//! # Config Crate
//!
//! Centralized configuration constants for outline mesh generation.
//! All magic numbers and tunable parameters are defined here so the
//! welder, the builder, and the settings layer agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_weld_threshold, WIDTH_DISPLACEMENT_DIVISOR};
//!
//! let threshold = clamp_weld_threshold(0.0);
//! assert!(threshold > 0.0);
//!
//! let width = 0.02;
//! let offset = width / WIDTH_DISPLACEMENT_DIVISOR;
//! assert!(offset < width);
//! ```

pub mod constants;

#[cfg(test)]
mod tests;
