//! # Outline Mesh
//!
//! Builds a single welded, outward-displaced outline mesh from one or more
//! source triangle meshes, for silhouette/outline rendering.
//!
//! ## Architecture
//!
//! ```text
//! RawMesh ──weld──► WeldedMesh ──transform + displace──► CombinedMesh
//! ```
//!
//! - **Welding**: uniform spatial hash, one pass per source mesh
//! - **Degenerate removal**: triangles that collapse during welding are dropped
//! - **Merging**: sources are concatenated with offset indices, never welded
//!   against each other
//! - **Displacement**: every vertex moves `width / 10` along its target-space
//!   normal
//!
//! Everything is pure computation over in-memory buffers. Persisting or
//! uploading the result is left to the caller.
//!
//! ## Usage
//!
//! ```rust
//! use outline_mesh::{OutlineMeshBuilder, OutlineSettings, RawMesh, SourceEntry, TargetTransform};
//! use glam::DVec3;
//!
//! let mesh = RawMesh::new(
//!     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
//!     Vec::new(),
//!     vec![0, 1, 2],
//! )
//! .with_computed_normals()?;
//!
//! let builder = OutlineMeshBuilder::from_settings(&OutlineSettings::default())?;
//! let outline = builder.build(&[SourceEntry::new(&mesh, TargetTransform::IDENTITY)])?;
//! assert_eq!(outline.triangle_count(), 1);
//! # Ok::<(), outline_mesh::MeshError>(())
//! ```

pub mod bounds;
pub mod builder;
pub mod error;
pub mod mesh;
pub mod settings;
pub mod transform;
pub mod weld;

pub use bounds::Aabb;
pub use builder::{build_outline_mesh, OutlineMeshBuilder, SourceEntry};
pub use error::{MeshError, MeshResult};
pub use mesh::{CombinedMesh, RawMesh, WeldedMesh};
pub use settings::OutlineSettings;
pub use transform::TargetTransform;
pub use weld::weld_vertices;
