//! # Vertex Welding
//!
//! Merges near-duplicate vertices with a uniform spatial hash.
//!
//! ## Algorithm
//!
//! 1. Scale each position by `1 / threshold` and floor each axis to get an
//!    integer cell key
//! 2. The first vertex seen in a cell opens a new slot; later vertices in the
//!    same cell accumulate into it
//! 3. Each slot's position is the mean of its members, its normal the
//!    normalized sum of their normals
//! 4. Triangles are remapped through the slot table; any triangle with two
//!    equal slots is dropped
//!
//! ## Cell boundaries
//!
//! This is grid quantization, not an epsilon-ball search. Two positions
//! closer than `threshold` can still land in neighbouring cells and stay
//! separate. Output must stay identical for identical input, so do not turn
//! this into a neighbour search.
//!
//! ## Cell range
//!
//! Scaled coordinates must fit an `i64` cell index. Positions that are not
//! finite, or so far out that `|p| / threshold` leaves the `i64` range, are
//! rejected rather than clamped into a shared edge cell.
//!
//! ## Determinism
//!
//! Slots are numbered in input vertex order. The hash map only resolves
//! key → slot and is never iterated, so output order does not depend on the
//! map implementation.


use crate::error::{MeshError, MeshResult};
use crate::mesh::{validate_buffers, RawMesh, WeldedMesh};
use config::constants::MAX_VERTICES;
use glam::DVec3;
use std::collections::HashMap;
use tracing::trace;

/// Exclusive bound on scaled coordinates: 2^63, the first value `as i64`
/// cannot represent.
const CELL_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Integer spatial-hash cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CellKey {
    x: i64,
    y: i64,
    z: i64,
}

impl CellKey {
    /// Quantizes a position scaled by `inverse_threshold`.
    ///
    /// `None` if a scaled coordinate is not finite or outside the `i64`
    /// range, where `as i64` would saturate.
    #[inline]
    fn from_position(position: DVec3, inverse_threshold: f64) -> Option<Self> {
        let scaled = (position * inverse_threshold).floor();
        if !scaled.is_finite() || scaled.abs().max_element() >= CELL_LIMIT {
            return None;
        }

        Some(Self {
            x: scaled.x as i64,
            y: scaled.y as i64,
            z: scaled.z as i64,
        })
    }
}

/// Running sums for one output vertex.
#[derive(Debug, Clone, Copy)]
struct SlotAccumulator {
    position_sum: DVec3,
    normal_sum: DVec3,
    count: u32,
}

impl SlotAccumulator {
    fn new(position: DVec3, normal: DVec3) -> Self {
        Self {
            position_sum: position,
            normal_sum: normal,
            count: 1,
        }
    }

    fn add(&mut self, position: DVec3, normal: DVec3) {
        self.position_sum += position;
        self.normal_sum += normal;
        self.count += 1;
    }

    fn position(&self) -> DVec3 {
        self.position_sum / f64::from(self.count)
    }

    /// Zero if the accumulated normals cancel out.
    fn normal(&self) -> DVec3 {
        self.normal_sum.normalize_or_zero()
    }
}

/// Welds one mesh.
///
/// # Arguments
///
/// * `positions` - Vertex positions
/// * `normals` - One normal per position, or empty (treated as zero normals)
/// * `indices` - Flat triangle list
/// * `threshold` - Spatial-hash cell edge length, must be finite and > 0
///
/// # Errors
///
/// - [`MeshError::InvalidThreshold`] for a zero, negative or non-finite threshold
/// - [`MeshError::NormalCountMismatch`] if normals are neither empty nor parallel
/// - [`MeshError::MalformedIndices`] for partial triangles or out-of-range indices
/// - [`MeshError::InvalidPosition`] for a non-finite position, or one too far
///   out to quantize at this threshold
///
/// # Example
///
/// ```rust
/// use outline_mesh::weld_vertices;
/// use glam::DVec3;
///
/// let positions = [DVec3::ZERO, DVec3::new(0.0, 0.0, 0.00005)];
/// let welded = weld_vertices(&positions, &[DVec3::Z, DVec3::Z], &[], 0.0001)?;
/// assert_eq!(welded.vertex_count(), 1);
/// # Ok::<(), outline_mesh::MeshError>(())
/// ```
pub fn weld_vertices(
    positions: &[DVec3],
    normals: &[DVec3],
    indices: &[u32],
    threshold: f64,
) -> MeshResult<WeldedMesh> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(MeshError::InvalidThreshold { value: threshold });
    }
    if positions.len() > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count: positions.len(),
            max: MAX_VERTICES,
        });
    }
    validate_buffers(positions, normals, indices)?;

    let inverse_threshold = 1.0 / threshold;
    let has_normals = !normals.is_empty();

    let mut cell_to_slot: HashMap<CellKey, u32> = HashMap::with_capacity(positions.len());
    let mut slots: Vec<SlotAccumulator> = Vec::with_capacity(positions.len());
    let mut vertex_to_slot: Vec<u32> = Vec::with_capacity(positions.len());

    for (i, &position) in positions.iter().enumerate() {
        let normal = if has_normals { normals[i] } else { DVec3::ZERO };
        let cell = CellKey::from_position(position, inverse_threshold)
            .ok_or_else(|| MeshError::invalid_position(i, position))?;

        let slot = match cell_to_slot.get(&cell) {
            Some(&slot) => {
                slots[slot as usize].add(position, normal);
                slot
            }
            None => {
                let slot = slots.len() as u32;
                cell_to_slot.insert(cell, slot);
                slots.push(SlotAccumulator::new(position, normal));
                slot
            }
        };
        vertex_to_slot.push(slot);
    }

    let welded_positions: Vec<DVec3> = slots.iter().map(SlotAccumulator::position).collect();
    let welded_normals: Vec<DVec3> = slots.iter().map(SlotAccumulator::normal).collect();

    let mut welded_indices = Vec::with_capacity(indices.len());
    for tri in indices.chunks_exact(3) {
        let a = vertex_to_slot[tri[0] as usize];
        let b = vertex_to_slot[tri[1] as usize];
        let c = vertex_to_slot[tri[2] as usize];

        // Collapsed to an edge or a point
        if a == b || b == c || a == c {
            continue;
        }
        welded_indices.extend_from_slice(&[a, b, c]);
    }

    trace!(
        vertices_in = positions.len(),
        vertices_out = welded_positions.len(),
        triangles_in = indices.len() / 3,
        triangles_out = welded_indices.len() / 3,
        "welded mesh"
    );

    Ok(WeldedMesh {
        positions: welded_positions,
        normals: welded_normals,
        indices: welded_indices,
    })
}

impl RawMesh {
    /// Welds this mesh. See [`weld_vertices`].
    pub fn weld(&self, threshold: f64) -> MeshResult<WeldedMesh> {
        weld_vertices(self.positions(), self.normals(), self.indices(), threshold)
    }
}
