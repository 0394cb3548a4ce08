//! # Error Types
//!
//! Error types for welding and outline building. Precondition violations
//! fail fast with enough context to find the offending input.
//!
//! ## Error Policy
//!
//! - Malformed input is an error, never an out-of-bounds read
//! - An empty source list or a missing source mesh is NOT an error: the
//!   builder returns an empty or partial mesh instead

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur during welding and outline generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Weld threshold is zero, negative, or not finite.
    #[error("Invalid weld threshold: {value} (must be finite and > 0)")]
    InvalidThreshold {
        /// The rejected threshold
        value: f64,
    },

    /// Outline width is not finite.
    #[error("Invalid outline width: {value} (must be finite)")]
    InvalidWidth {
        /// The rejected width
        value: f64,
    },

    /// Triangle indices violate the mesh contract.
    #[error("Malformed indices: {message}")]
    MalformedIndices {
        /// What was wrong with the index buffer
        message: String,
    },

    /// Normals were supplied but not one per position.
    #[error("Normal count mismatch: {normals} normals for {positions} positions")]
    NormalCountMismatch {
        /// Number of positions
        positions: usize,
        /// Number of normals
        normals: usize,
    },

    /// The linear part of a transform cannot be inverted.
    #[error("Singular transform (determinant {determinant})")]
    SingularTransform {
        /// Determinant of the 3x3 linear part
        determinant: f64,
    },

    /// A position cannot be quantized into a spatial-hash cell: it is not
    /// finite, or it is too far out for the weld threshold.
    #[error("Invalid position at vertex {index}: {position}")]
    InvalidPosition {
        /// Vertex index in the source mesh
        index: usize,
        /// The offending position
        position: String,
    },

    /// Too many vertices to address with `u32` indices.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Vertex count that was reached
        count: usize,
        /// Maximum supported count
        max: usize,
    },

    /// Settings could not be parsed.
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

impl MeshError {
    /// Creates a malformed indices error.
    pub fn malformed_indices(message: impl Into<String>) -> Self {
        Self::MalformedIndices {
            message: message.into(),
        }
    }

    /// Creates an invalid position error.
    pub fn invalid_position(index: usize, position: glam::DVec3) -> Self {
        Self::InvalidPosition {
            index,
            position: format!("{:?}", position),
        }
    }

    /// Creates an out-of-range index error.
    pub fn index_out_of_range(index: u32, vertex_count: usize) -> Self {
        Self::malformed_indices(format!(
            "index {} out of range for {} vertices",
            index, vertex_count
        ))
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::InvalidThreshold { value: 0.0 };
        assert!(err.to_string().contains("threshold"));

        let err = MeshError::index_out_of_range(7, 3);
        assert!(err.to_string().contains("index 7"));
        assert!(err.to_string().contains("3 vertices"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<f64>("not json").unwrap_err();
        let err: MeshError = json_err.into();
        assert!(matches!(err, MeshError::Settings(_)));
    }

    /// Errors must cross worker-thread boundaries.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
