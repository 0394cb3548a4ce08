//! # Configuration Constants
//!
//! Centralized constants for outline mesh generation. Weld thresholds,
//! displacement scaling, and numerical tolerances are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Tolerances for numerical checks
//! - **Welding**: Spatial-hash cell size bounds and defaults
//! - **Displacement**: Outline width defaults and scaling
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Relative tolerance for rejecting singular transforms.
///
/// The determinant of a 3x3 linear part is compared against the product of
/// its column lengths (the largest determinant those columns could have).
/// A ratio below this value means the columns are (nearly) linearly
/// dependent and the inverse-transpose used for normals is not defined.
/// Uniformly tiny or huge scales are not affected.
///
/// # Example
///
/// ```rust
/// use config::constants::DETERMINANT_EPSILON;
///
/// // Uniform scale of 5e-5: det = 1.25e-13, column product = 1.25e-13
/// let det: f64 = 1.25e-13;
/// let column_product: f64 = 1.25e-13;
/// assert!(det.abs() > DETERMINANT_EPSILON * column_product);
/// ```
pub const DETERMINANT_EPSILON: f64 = 1e-12;

// =============================================================================
// WELDING CONSTANTS
// =============================================================================

/// Smallest weld threshold accepted from user-facing settings.
///
/// The welder scales positions by `1 / threshold`, so a zero or negative
/// threshold is meaningless. Settings are clamped up to this value.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_WELD_THRESHOLD;
///
/// let requested = 0.0;
/// let threshold = f64::max(requested, MIN_WELD_THRESHOLD);
/// assert_eq!(threshold, 0.0001);
/// ```
pub const MIN_WELD_THRESHOLD: f64 = 0.0001;

/// Default weld threshold (spatial-hash cell edge length).
pub const DEFAULT_WELD_THRESHOLD: f64 = 0.0001;

// =============================================================================
// DISPLACEMENT CONSTANTS
// =============================================================================

/// Default user-facing outline width.
pub const DEFAULT_MESH_WIDTH: f64 = 0.02;

/// Smallest outline width accepted from user-facing settings.
pub const MIN_MESH_WIDTH: f64 = 0.0001;

/// Divisor converting a user-facing width into a normal displacement.
///
/// Each vertex moves `width / WIDTH_DISPLACEMENT_DIVISOR` along its normal.
/// Always divide by this value; multiplying by its reciprocal does not give
/// bit-identical results.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_MESH_WIDTH, WIDTH_DISPLACEMENT_DIVISOR};
///
/// let offset = DEFAULT_MESH_WIDTH / WIDTH_DISPLACEMENT_DIVISOR;
/// assert!((offset - 0.002).abs() < 1e-12);
/// ```
pub const WIDTH_DISPLACEMENT_DIVISOR: f64 = 10.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single output mesh.
///
/// Output triangles index vertices with `u32`, so this is the size of the
/// `u32` index space.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a user-facing weld threshold into the accepted range.
///
/// Non-finite values fall back to [`DEFAULT_WELD_THRESHOLD`]; everything
/// else is raised to at least [`MIN_WELD_THRESHOLD`].
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_weld_threshold, MIN_WELD_THRESHOLD};
///
/// assert_eq!(clamp_weld_threshold(-1.0), MIN_WELD_THRESHOLD);
/// assert_eq!(clamp_weld_threshold(0.5), 0.5);
/// ```
pub fn clamp_weld_threshold(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_WELD_THRESHOLD;
    }
    value.max(MIN_WELD_THRESHOLD)
}

/// Clamps a user-facing outline width into the accepted range.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_mesh_width, DEFAULT_MESH_WIDTH, MIN_MESH_WIDTH};
///
/// assert_eq!(clamp_mesh_width(0.0), MIN_MESH_WIDTH);
/// assert_eq!(clamp_mesh_width(f64::NAN), DEFAULT_MESH_WIDTH);
/// ```
pub fn clamp_mesh_width(value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_MESH_WIDTH;
    }
    value.max(MIN_MESH_WIDTH)
}
