//! # umatrix - U-Matrix rendering for Self-Organizing Maps
//!
//! A U-Matrix visualizes the cluster structure a Self-Organizing Map (SOM)
//! has learned. Every map unit is drawn at its grid position and shaded by
//! the mean distance between its weight vector and those of its immediate
//! grid neighbors: light cells sit inside clusters, dark cells mark the
//! boundaries between them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use umatrix::{codebook, render_umatrix_svg, GridShape, Topology};
//!
//! // One weight vector per unit, row-major grid order
//! let codebook = codebook::load_json("codebook.json".as_ref())?;
//! let shape = GridShape::new(Topology::Hexagon, 10, 12);
//!
//! let mut out = std::fs::File::create("umatrix.svg")?;
//! render_umatrix_svg(&codebook, &shape, "My SOM", &mut out)?;
//! ```
//!
//! ## Inspecting the field
//!
//! ```rust,ignore
//! use umatrix::{UMatrix, UMatrixConfig};
//!
//! let umatrix = UMatrix::compute(&codebook, &shape, &UMatrixConfig::default())?;
//! for (i, unit) in umatrix.units().iter().enumerate() {
//!     println!("{}: {:.3} -> {}", i, unit.dissimilarity, unit.intensity);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`distance`] - Pairwise distances between matrix rows
//! - [`grid`] - Grid topologies and unit coordinates
//! - [`umatrix`] - Neighborhood aggregation, coloring, geometry and SVG output
//! - [`codebook`] - Loading codebooks from JSON
//! - [`config`] - Layout and neighborhood parameters

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codebook;
pub mod config;
pub mod distance;
pub mod error;
pub mod grid;
pub mod umatrix;

// Re-export commonly used types
pub use config::{IsolatedUnitPolicy, UMatrixConfig};
pub use distance::{distance, pairwise_distances, Metric};
pub use error::{Result, UMatrixError};
pub use grid::{grid_coords, GridShape, Topology};
pub use umatrix::{render_umatrix_svg, render_umatrix_svg_with, SvgDocument, UMatrix, UnitField};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
