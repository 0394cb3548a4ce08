//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_determinant_epsilon_is_small() {
    assert!(DETERMINANT_EPSILON > 0.0);
    assert!(DETERMINANT_EPSILON < 1e-6);
}

// =============================================================================
// WELDING TESTS
// =============================================================================

#[test]
fn test_min_weld_threshold_is_positive() {
    assert!(MIN_WELD_THRESHOLD > 0.0, "weld threshold floor must be positive");
}

#[test]
fn test_default_weld_threshold_respects_floor() {
    assert!(DEFAULT_WELD_THRESHOLD >= MIN_WELD_THRESHOLD);
}

#[test]
fn test_clamp_weld_threshold() {
    assert_eq!(clamp_weld_threshold(0.0), MIN_WELD_THRESHOLD);
    assert_eq!(clamp_weld_threshold(-3.0), MIN_WELD_THRESHOLD);
    assert_eq!(clamp_weld_threshold(0.01), 0.01);
    assert_eq!(clamp_weld_threshold(f64::INFINITY), DEFAULT_WELD_THRESHOLD);
    assert_eq!(clamp_weld_threshold(f64::NAN), DEFAULT_WELD_THRESHOLD);
}

// =============================================================================
// DISPLACEMENT TESTS
// =============================================================================

#[test]
fn test_width_divisor_is_ten() {
    assert_eq!(WIDTH_DISPLACEMENT_DIVISOR, 10.0);
}

#[test]
fn test_default_mesh_width_respects_floor() {
    assert!(DEFAULT_MESH_WIDTH >= MIN_MESH_WIDTH);
}

#[test]
fn test_clamp_mesh_width() {
    assert_eq!(clamp_mesh_width(-0.5), MIN_MESH_WIDTH);
    assert_eq!(clamp_mesh_width(0.3), 0.3);
    assert_eq!(clamp_mesh_width(f64::NEG_INFINITY), DEFAULT_MESH_WIDTH);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_vertices_fits_u32_indices() {
    assert_eq!(MAX_VERTICES, u32::MAX as usize);
}

