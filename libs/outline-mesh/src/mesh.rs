//! # Mesh Data Structures
//!
//! Value types flowing through outline generation:
//!
//! ```text
//! RawMesh → weld → WeldedMesh → OutlineMeshBuilder → CombinedMesh
//! ```
//!
//! All geometry is f64. Export to f32 only happens at the writer boundary.

use crate::bounds::Aabb;
use crate::error::{MeshError, MeshResult};
use glam::DVec3;

// =============================================================================
// RAW MESH
// =============================================================================

/// Source triangle mesh as read from the host.
///
/// `normals` is either one normal per position or empty ("no normals
/// supplied"). `indices` is a flat triangle list.
///
/// # Example
///
/// ```rust
/// use outline_mesh::RawMesh;
/// use glam::DVec3;
///
/// let mesh = RawMesh::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![DVec3::Z; 3],
///     vec![0, 1, 2],
/// );
/// assert!(mesh.validate().is_ok());
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMesh {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    indices: Vec<u32>,
}

impl RawMesh {
    /// Creates a mesh from parallel position/normal buffers and a flat
    /// triangle index list. Nothing is validated here; see [`RawMesh::validate`].
    pub fn new(positions: Vec<DVec3>, normals: Vec<DVec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the vertex normals (empty if none were supplied).
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the flat triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of complete triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Checks the raw mesh contract.
    ///
    /// - normals are empty or one per position
    /// - index count is a multiple of 3
    /// - every index refers to an existing position
    pub fn validate(&self) -> MeshResult<()> {
        validate_buffers(&self.positions, &self.normals, &self.indices)
    }

    /// Replaces the normals with area-weighted vertex normals derived from
    /// the triangles.
    ///
    /// Useful for hosts that supply no normals: without them every welded
    /// normal is zero and the outline is not displaced. Vertices not
    /// referenced by any triangle get a zero normal.
    pub fn with_computed_normals(mut self) -> MeshResult<Self> {
        validate_indices(&self.indices, self.positions.len())?;

        let mut normals = vec![DVec3::ZERO; self.positions.len()];

        for tri in self.indices.chunks_exact(3) {
            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];

            // Cross product length is twice the area, so larger faces weigh more
            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = normals;
        Ok(self)
    }
}

impl From<WeldedMesh> for RawMesh {
    fn from(welded: WeldedMesh) -> Self {
        Self {
            positions: welded.positions,
            normals: welded.normals,
            indices: welded.indices,
        }
    }
}

// =============================================================================
// WELDED MESH
// =============================================================================

/// Result of welding one [`RawMesh`].
///
/// Positions are unique per spatial cell, normals are one per position, and
/// the triangle list contains no degenerate triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeldedMesh {
    pub(crate) positions: Vec<DVec3>,
    pub(crate) normals: Vec<DVec3>,
    pub(crate) indices: Vec<u32>,
}

impl WeldedMesh {
    /// Returns the welded vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the averaged vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the re-indexed triangle list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Checks the welded mesh invariants: parallel buffers, valid indices,
    /// and no degenerate triangles.
    pub fn validate(&self) -> MeshResult<()> {
        if self.normals.len() != self.positions.len() {
            return Err(MeshError::NormalCountMismatch {
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }
        validate_triangles(&self.indices, self.positions.len())
    }
}

// =============================================================================
// COMBINED MESH
// =============================================================================

/// Final outline mesh in target space.
///
/// Indices are already `u32` and go to the GPU as-is via
/// [`CombinedMesh::indices`]; only positions and normals need an f32 export.
///
/// Produced fresh by every build; a rebuild replaces it entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombinedMesh {
    pub(crate) positions: Vec<DVec3>,
    pub(crate) normals: Vec<DVec3>,
    pub(crate) indices: Vec<u32>,
    pub(crate) bounds: Aabb,
    pub(crate) generation: u64,
}

impl CombinedMesh {
    /// Creates an empty mesh with zero bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the displaced positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns the unit normals in target space.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the combined triangle list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the bounding box of all positions.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Returns the settings generation this mesh was built for.
    ///
    /// Zero unless the builder was created from settings.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if there is nothing to render.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Checks index validity and the absence of degenerate triangles.
    pub fn validate(&self) -> MeshResult<()> {
        if self.normals.len() != self.positions.len() {
            return Err(MeshError::NormalCountMismatch {
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }
        validate_triangles(&self.indices, self.positions.len())
    }

    /// Exports positions as a flattened `[x, y, z, ...]` f32 array for GPU.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as a flattened `[x, y, z, ...]` f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn flatten_f32(vectors: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vectors.len() * 3);
    for v in vectors {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

/// Validates raw weld input buffers.
pub(crate) fn validate_buffers(
    positions: &[DVec3],
    normals: &[DVec3],
    indices: &[u32],
) -> MeshResult<()> {
    if !normals.is_empty() && normals.len() != positions.len() {
        return Err(MeshError::NormalCountMismatch {
            positions: positions.len(),
            normals: normals.len(),
        });
    }
    validate_indices(indices, positions.len())
}

fn validate_indices(indices: &[u32], vertex_count: usize) -> MeshResult<()> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::malformed_indices(format!(
            "index count {} is not a multiple of 3",
            indices.len()
        )));
    }
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(MeshError::index_out_of_range(bad, vertex_count));
    }
    Ok(())
}

fn validate_triangles(indices: &[u32], vertex_count: usize) -> MeshResult<()> {
    validate_indices(indices, vertex_count)?;
    for tri in indices.chunks_exact(3) {
        if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
            return Err(MeshError::malformed_indices(format!(
                "degenerate triangle [{}, {}, {}]",
                tri[0], tri[1], tri[2]
            )));
        }
    }
    Ok(())
}
