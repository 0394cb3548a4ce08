//! # Outline Mesh Builder
//!
//! Welds every source mesh, moves it into target space, pushes each vertex
//! out along its normal and concatenates the results into one mesh.
//!
//! ## Pipeline
//!
//! ```text
//! [SourceEntry] ──par──► weld → transform → displace ──ordered──► concatenate → bounds
//! ```
//!
//! Sources are processed on the rayon pool; concatenation runs in list
//! order, so the output is identical to a sequential build. Sources are
//! never welded against each other: coincident vertices from different
//! sources stay separate.


use crate::bounds::Aabb;
use crate::error::{MeshError, MeshResult};
use crate::mesh::{CombinedMesh, RawMesh};
use crate::settings::OutlineSettings;
use crate::transform::TargetTransform;
use config::constants::{MAX_VERTICES, WIDTH_DISPLACEMENT_DIVISOR};
use glam::DVec3;
use rayon::prelude::*;
use tracing::{debug, info};

// =============================================================================
// SOURCE ENTRY
// =============================================================================

/// One input to the builder: a mesh and where it sits in target space.
///
/// The mesh may be missing (e.g. the host object lost its mesh); such
/// entries are skipped.
#[derive(Debug, Clone, Copy)]
pub struct SourceEntry<'a> {
    mesh: Option<&'a RawMesh>,
    transform: TargetTransform,
}

impl<'a> SourceEntry<'a> {
    /// Creates an entry for a present mesh.
    pub fn new(mesh: &'a RawMesh, transform: TargetTransform) -> Self {
        Self {
            mesh: Some(mesh),
            transform,
        }
    }

    /// Creates an entry whose mesh may be missing.
    pub fn from_option(mesh: Option<&'a RawMesh>, transform: TargetTransform) -> Self {
        Self { mesh, transform }
    }

    /// Creates an entry with no mesh.
    pub fn missing(transform: TargetTransform) -> Self {
        Self {
            mesh: None,
            transform,
        }
    }

    /// Returns the source mesh, if any.
    #[inline]
    pub fn mesh(&self) -> Option<&'a RawMesh> {
        self.mesh
    }

    /// Returns the source → target transform.
    #[inline]
    pub fn transform(&self) -> &TargetTransform {
        &self.transform
    }
}

/// One source after weld, transform and displacement.
struct DisplacedSource {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    indices: Vec<u32>,
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builds combined outline meshes.
///
/// # Example
///
/// ```rust
/// use outline_mesh::{OutlineMeshBuilder, RawMesh, SourceEntry, TargetTransform};
/// use glam::DVec3;
///
/// let triangle = RawMesh::new(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![DVec3::Z; 3],
///     vec![0, 1, 2],
/// );
///
/// let builder = OutlineMeshBuilder::new(0.0001, 1.0)?;
/// let outline = builder.build(&[SourceEntry::new(&triangle, TargetTransform::IDENTITY)])?;
///
/// assert_eq!(outline.vertex_count(), 3);
/// assert_eq!(outline.positions()[0], DVec3::new(0.0, 0.0, 0.1));
/// # Ok::<(), outline_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineMeshBuilder {
    threshold: f64,
    width: f64,
    generation: u64,
}

impl OutlineMeshBuilder {
    /// Creates a builder.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidThreshold`] unless `threshold` is finite and > 0
    /// - [`MeshError::InvalidWidth`] unless `width` is finite
    pub fn new(threshold: f64, width: f64) -> MeshResult<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(MeshError::InvalidThreshold { value: threshold });
        }
        if !width.is_finite() {
            return Err(MeshError::InvalidWidth { value: width });
        }

        Ok(Self {
            threshold,
            width,
            generation: 0,
        })
    }

    /// Creates a builder from user settings, clamping them first.
    ///
    /// Built meshes carry the settings generation.
    pub fn from_settings(settings: &OutlineSettings) -> MeshResult<Self> {
        let settings = settings.sanitized();
        let mut builder = Self::new(settings.weld_threshold, settings.mesh_width)?;
        builder.generation = settings.generation;
        Ok(builder)
    }

    /// Returns the weld threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the outline width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Distance each vertex moves along its normal.
    #[inline]
    pub fn displacement(&self) -> f64 {
        self.width / WIDTH_DISPLACEMENT_DIVISOR
    }

    /// Builds the combined outline mesh.
    ///
    /// An empty source list yields an empty mesh with zero bounds. Entries
    /// without a mesh contribute nothing.
    ///
    /// # Errors
    ///
    /// Propagates weld errors for malformed source meshes and
    /// [`MeshError::TooManyVertices`] if the combined mesh cannot be indexed
    /// with `u32`.
    pub fn build(&self, sources: &[SourceEntry<'_>]) -> MeshResult<CombinedMesh> {
        if sources.is_empty() {
            debug!("no outline sources, returning empty mesh");
            return Ok(CombinedMesh {
                generation: self.generation,
                ..CombinedMesh::default()
            });
        }

        let displaced = sources
            .par_iter()
            .enumerate()
            .map(|(index, source)| self.displace_source(index, source))
            .collect::<MeshResult<Vec<_>>>()?;

        let total_vertices: usize = displaced.iter().flatten().map(|s| s.positions.len()).sum();
        if total_vertices > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: total_vertices,
                max: MAX_VERTICES,
            });
        }
        let total_indices: usize = displaced.iter().flatten().map(|s| s.indices.len()).sum();

        let mut positions = Vec::with_capacity(total_vertices);
        let mut normals = Vec::with_capacity(total_vertices);
        let mut indices = Vec::with_capacity(total_indices);

        for source in displaced.into_iter().flatten() {
            // Fits: total_vertices <= u32::MAX
            let offset = positions.len() as u32;
            indices.extend(source.indices.iter().map(|&i| i + offset));
            positions.extend(source.positions);
            normals.extend(source.normals);
        }

        let bounds = Aabb::from_points(&positions);

        info!(
            sources = sources.len(),
            vertices = positions.len(),
            triangles = indices.len() / 3,
            "built outline mesh"
        );

        Ok(CombinedMesh {
            positions,
            normals,
            indices,
            bounds,
            generation: self.generation,
        })
    }

    /// Welds, transforms and displaces one source. `None` for a missing mesh.
    fn displace_source(
        &self,
        index: usize,
        source: &SourceEntry<'_>,
    ) -> MeshResult<Option<DisplacedSource>> {
        let Some(mesh) = source.mesh else {
            debug!(source = index, "skipping source without mesh");
            return Ok(None);
        };

        let welded = mesh.weld(self.threshold)?;
        let displacement = self.displacement();

        let mut positions = Vec::with_capacity(welded.vertex_count());
        let mut normals = Vec::with_capacity(welded.vertex_count());
        let mut undisplaced = 0usize;

        for (&position, &normal) in welded.positions().iter().zip(welded.normals()) {
            let position = source.transform.transform_point(position);
            let normal = source.transform.transform_normal(normal);
            if normal == DVec3::ZERO {
                undisplaced += 1;
            }

            positions.push(position + normal * displacement);
            normals.push(normal);
        }

        debug!(
            source = index,
            vertices_in = mesh.vertex_count(),
            vertices_out = positions.len(),
            triangles_out = welded.triangle_count(),
            undisplaced,
            "welded outline source"
        );

        Ok(Some(DisplacedSource {
            positions,
            normals,
            indices: welded.indices,
        }))
    }
}

/// Builds a combined outline mesh in one call.
///
/// See [`OutlineMeshBuilder::build`].
pub fn build_outline_mesh(
    sources: &[SourceEntry<'_>],
    threshold: f64,
    width: f64,
) -> MeshResult<CombinedMesh> {
    OutlineMeshBuilder::new(threshold, width)?.build(sources)
}
