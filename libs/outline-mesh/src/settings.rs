//! # Outline Settings
//!
//! User-facing configuration for outline generation, loadable from JSON.
//!
//! The `generation` counter is bumped whenever the user asks for a forced
//! rebuild. The caching layer stores the generation a mesh was built for
//! and compares it with [`OutlineSettings::is_stale`].

use crate::error::MeshResult;
use config::constants::{
    clamp_mesh_width, clamp_weld_threshold, DEFAULT_MESH_WIDTH, DEFAULT_WELD_THRESHOLD,
};
use serde::{Deserialize, Serialize};

/// Settings shared by every outline built from them.
///
/// # Example
///
/// ```rust
/// use outline_mesh::OutlineSettings;
///
/// let settings = OutlineSettings::from_json(r#"{ "weld_threshold": 0.0 }"#)?;
/// assert_eq!(settings.weld_threshold, 0.0001);
/// assert_eq!(settings.mesh_width, 0.02);
/// # Ok::<(), outline_mesh::MeshError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineSettings {
    /// Spatial-hash cell edge length used for welding.
    pub weld_threshold: f64,
    /// Outline width; vertices move `mesh_width / 10` along their normals.
    pub mesh_width: f64,
    /// Forced-rebuild counter.
    pub generation: u64,
}

impl Default for OutlineSettings {
    fn default() -> Self {
        Self {
            weld_threshold: DEFAULT_WELD_THRESHOLD,
            mesh_width: DEFAULT_MESH_WIDTH,
            generation: 0,
        }
    }
}

impl OutlineSettings {
    /// Parses settings from JSON and clamps them into range.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> MeshResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Serializes settings to pretty-printed JSON.
    pub fn to_json(&self) -> MeshResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns a copy with threshold and width clamped to their minimums.
    ///
    /// Non-finite values fall back to the defaults.
    pub fn sanitized(self) -> Self {
        Self {
            weld_threshold: clamp_weld_threshold(self.weld_threshold),
            mesh_width: clamp_mesh_width(self.mesh_width),
            generation: self.generation,
        }
    }

    /// Marks every mesh built from earlier generations as stale.
    pub fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns true if a mesh built for `built_generation` must be rebuilt.
    pub fn is_stale(&self, built_generation: u64) -> bool {
        built_generation != self.generation
    }
}
