//! Property-based tests for welding and outline building.
//!
//! These tests use proptest to generate random meshes and verify invariants.
//!
//! Run with: cargo test -p outline-mesh -- proptest

use glam::DVec3;
use outline_mesh::{build_outline_mesh, RawMesh, SourceEntry, TargetTransform};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating random meshes
// =============================================================================

fn arb_vec3(range: std::ops::Range<f64>) -> impl Strategy<Value = DVec3> + Clone {
    prop::array::uniform3(range).prop_map(DVec3::from_array)
}

/// Positions on a quarter-unit lattice: sums stay exact, so welded means
/// never leave their cell.
fn arb_lattice_vec3() -> impl Strategy<Value = DVec3> + Clone {
    prop::array::uniform3(-40i32..40).prop_map(|[x, y, z]| {
        DVec3::new(f64::from(x), f64::from(y), f64::from(z)) * 0.25
    })
}

/// Random mesh with valid (possibly degenerate) triangles and normals.
fn arb_mesh<S>(position: S, max_vertices: usize) -> impl Strategy<Value = RawMesh>
where
    S: Strategy<Value = DVec3> + Clone + 'static,
{
    (1..=max_vertices).prop_flat_map(move |n| {
        let positions = prop::collection::vec(position.clone(), n);
        let normals = prop::collection::vec(arb_vec3(-1.0..1.0), n);
        let triangles = prop::collection::vec(prop::array::uniform3(0..n as u32), 0..60);

        (positions, normals, triangles).prop_map(|(positions, normals, triangles)| {
            let indices = triangles.into_iter().flatten().collect();
            RawMesh::new(positions, normals, indices)
        })
    })
}

fn assert_triangles_valid(indices: &[u32], vertex_count: usize) -> Result<(), TestCaseError> {
    prop_assert_eq!(indices.len() % 3, 0);
    for tri in indices.chunks_exact(3) {
        for &i in tri {
            prop_assert!((i as usize) < vertex_count, "index {} >= {}", i, vertex_count);
        }
        prop_assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
    }
    Ok(())
}

fn assert_unit_or_zero(normals: &[DVec3]) -> Result<(), TestCaseError> {
    for n in normals {
        let len = n.length();
        prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-9, "normal length {}", len);
    }
    Ok(())
}

// =============================================================================
// Property Tests: Welding
// =============================================================================

proptest! {
    /// Welding never adds vertices or triangles.
    #[test]
    fn weld_never_grows(mesh in arb_mesh(arb_vec3(-10.0..10.0), 40), threshold in 0.0001..2.0f64) {
        let welded = mesh.weld(threshold).unwrap();
        prop_assert!(welded.vertex_count() <= mesh.vertex_count());
        prop_assert!(welded.triangle_count() <= mesh.triangle_count());
    }

    /// Output triangles reference existing vertices and are never degenerate.
    #[test]
    fn weld_output_is_valid(mesh in arb_mesh(arb_vec3(-10.0..10.0), 40), threshold in 0.0001..2.0f64) {
        let welded = mesh.weld(threshold).unwrap();
        prop_assert_eq!(welded.positions().len(), welded.normals().len());
        assert_triangles_valid(welded.indices(), welded.vertex_count())?;
        assert_unit_or_zero(welded.normals())?;
        prop_assert!(welded.validate().is_ok());
    }

    /// Same input, same output.
    #[test]
    fn weld_is_deterministic(mesh in arb_mesh(arb_vec3(-10.0..10.0), 40), threshold in 0.0001..2.0f64) {
        prop_assert_eq!(mesh.weld(threshold).unwrap(), mesh.weld(threshold).unwrap());
    }

    /// Welding a welded mesh again merges nothing further.
    #[test]
    fn reweld_is_idempotent(mesh in arb_mesh(arb_lattice_vec3(), 40)) {
        let first = mesh.weld(1.0).unwrap();
        let second = RawMesh::from(first.clone()).weld(1.0).unwrap();

        prop_assert_eq!(first.positions(), second.positions());
        prop_assert_eq!(first.indices(), second.indices());
        for (a, b) in first.normals().iter().zip(second.normals()) {
            prop_assert!(a.distance(*b) < 1e-9);
        }
    }
}

// =============================================================================
// Property Tests: Building
// =============================================================================

proptest! {
    /// The combined mesh is valid and each source's indices are shifted by
    /// the vertex count of all earlier sources.
    #[test]
    fn build_concatenates_with_offsets(
        meshes in prop::collection::vec(arb_mesh(arb_vec3(-5.0..5.0), 20), 0..4),
        offsets in prop::collection::vec(arb_vec3(-5.0..5.0), 4),
        width in 0.0..1.0f64,
    ) {
        let threshold = 0.01;
        let sources: Vec<SourceEntry<'_>> = meshes
            .iter()
            .zip(&offsets)
            .map(|(mesh, &offset)| SourceEntry::new(mesh, TargetTransform::from_translation(offset)))
            .collect();

        let outline = build_outline_mesh(&sources, threshold, width).unwrap();
        prop_assert!(outline.validate().is_ok());
        assert_triangles_valid(outline.indices(), outline.vertex_count())?;
        assert_unit_or_zero(outline.normals())?;

        let mut vertex_offset = 0u32;
        let mut index_cursor = 0usize;
        for mesh in &meshes {
            let welded = mesh.weld(threshold).unwrap();
            let expected: Vec<u32> = welded.indices().iter().map(|i| i + vertex_offset).collect();
            let actual = &outline.indices()[index_cursor..index_cursor + expected.len()];
            prop_assert_eq!(actual, expected.as_slice());

            vertex_offset += welded.vertex_count() as u32;
            index_cursor += expected.len();
        }
        prop_assert_eq!(vertex_offset as usize, outline.vertex_count());

        for p in outline.positions() {
            prop_assert!(outline.bounds().contains(*p));
        }
    }
}
