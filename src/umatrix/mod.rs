//! U-Matrix computation and rendering.
//!
//! The U-Matrix colors each SOM unit by the mean distance between its
//! weight vector and the weight vectors of its grid neighbors. Units inside
//! a cluster are surrounded by similar weights and come out light; units on
//! a cluster boundary come out dark.
//!
//! The pipeline runs in a single pass:
//!
//! 1. Pairwise weight-space distances between all codebook rows
//! 2. Grid coordinates and pairwise grid-space distances
//! 3. Neighbors of each unit within the configured grid radius
//! 4. Mean weight-space distance to those neighbors
//! 5. Gray level relative to the largest weight-space distance
//! 6. One outline per unit, serialized as SVG
//!
//! Nothing is written until the whole field has been computed, so a failed
//! render leaves the sink untouched.

pub mod color;
pub mod dissimilarity;
pub mod geometry;
pub mod neighborhood;
pub mod render;

pub use geometry::{Canvas, Layout, Point};
pub use neighborhood::RowWithDist;
pub use render::{Polygon, Style, SvgDocument};

use crate::config::{IsolatedUnitPolicy, UMatrixConfig};
use crate::codebook::ensure_finite;
use crate::distance::{max_distance, pairwise_distances_with, Metric};
use crate::error::{Result, UMatrixError};
use crate::grid::GridShape;
use log::{debug, info, warn};
use ndarray::Array2;
use rayon::prelude::*;
use std::io::Write;

/// Metric used for both weight-space and grid-space distances.
const METRIC: Metric = Metric::Euclidean;

/// Aggregated dissimilarity of a single unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitField {
    /// Number of grid neighbors, not counting the unit itself.
    pub neighbors: usize,
    /// Mean weight-space distance to the neighbors.
    ///
    /// For an isolated unit this is the global maximum distance.
    pub dissimilarity: f64,
    /// Gray level in `[0, 255]`.
    pub intensity: u8,
}

impl UnitField {
    /// Returns true if the unit had no grid neighbor.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.neighbors == 0
    }
}

/// The U-Matrix scalar field of a codebook laid out on a grid.
#[derive(Debug, Clone)]
pub struct UMatrix {
    shape: GridShape,
    config: UMatrixConfig,
    coords: Array2<f64>,
    units: Vec<UnitField>,
    max_distance: f64,
}

impl UMatrix {
    /// Computes the U-Matrix of `codebook` (one row per unit, row-major grid order).
    pub fn compute(codebook: &Array2<f64>, shape: &GridShape, config: &UMatrixConfig) -> Result<Self> {
        config.validate()?;

        let n = codebook.nrows();
        let total_units = shape.total_units()?;
        if n != total_units {
            return Err(UMatrixError::InvalidInput(format!(
                "Codebook has {} units but a {}x{} grid has {}",
                n, shape.rows, shape.cols, total_units
            )));
        }
        ensure_finite(codebook)?;

        let coords = shape.coords()?;
        debug!(
            "Computing U-Matrix for {} units ({}x{} {})",
            n, shape.rows, shape.cols, shape.topology
        );

        let weight_dist = pairwise_distances_with(METRIC, codebook, config.parallel);
        let grid_dist = pairwise_distances_with(METRIC, &coords, config.parallel);

        let max_distance = max_distance(&weight_dist);
        if !max_distance.is_finite() {
            return Err(UMatrixError::InvalidInput(format!(
                "Weight-space distances overflow ({})",
                max_distance
            )));
        }
        if max_distance <= 0.0 {
            return Err(UMatrixError::DegenerateInput(
                "All codebook vectors are identical; maximum distance is zero".to_string(),
            ));
        }
        debug!("Maximum weight-space distance: {:.6}", max_distance);

        let unit_field = |unit: usize| {
            aggregate_unit(unit, &weight_dist, &grid_dist, max_distance, config)
        };
        let units: Vec<UnitField> = if config.parallel {
            (0..n).into_par_iter().map(unit_field).collect::<Result<_>>()?
        } else {
            (0..n).map(unit_field).collect::<Result<_>>()?
        };

        Ok(Self {
            shape: *shape,
            config: config.clone(),
            coords,
            units,
            max_distance,
        })
    }

    /// Grid the field was computed for.
    pub fn shape(&self) -> &GridShape {
        &self.shape
    }

    /// Per-unit results in unit-index order.
    pub fn units(&self) -> &[UnitField] {
        &self.units
    }

    /// Gray levels in unit-index order.
    pub fn intensities(&self) -> Vec<u8> {
        self.units.iter().map(|u| u.intensity).collect()
    }

    /// Largest weight-space distance between any two units.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Grid coordinates of every unit.
    pub fn coords(&self) -> &Array2<f64> {
        &self.coords
    }

    /// Builds the SVG document for this field.
    pub fn to_document(&self, title: &str) -> SvgDocument {
        let layout = Layout::new(self.shape.topology, self.config.scale, self.config.offset);
        let canvas = Canvas::for_grid(&self.shape, self.config.scale, self.config.offset);

        let polygons = self
            .coords
            .rows()
            .into_iter()
            .zip(self.units.iter())
            .map(|(coord, unit)| Polygon {
                points: layout.outline(coord[0], coord[1]),
                style: Style {
                    fill: unit.intensity,
                },
            })
            .collect();

        SvgDocument {
            title: title.to_string(),
            canvas,
            polygons,
        }
    }
}

fn aggregate_unit(
    unit: usize,
    weight_dist: &Array2<f64>,
    grid_dist: &Array2<f64>,
    max_distance: f64,
    config: &UMatrixConfig,
) -> Result<UnitField> {
    let in_radius = neighborhood::rows_in_radius(unit, config.neighbor_radius, grid_dist);
    let neighbors = in_radius.iter().filter(|n| n.row != unit).count();

    let dissimilarity = match dissimilarity::mean_neighbor_distance(unit, &in_radius, weight_dist) {
        Some(mean) => mean,
        None => match config.isolated_unit_policy {
            IsolatedUnitPolicy::MaxDissimilarity => {
                warn!(
                    "Unit {} has no grid neighbors within radius {}; treating it as maximally dissimilar",
                    unit, config.neighbor_radius
                );
                max_distance
            }
            IsolatedUnitPolicy::Reject => {
                return Err(UMatrixError::DegenerateInput(format!(
                    "Unit {} has no grid neighbors within radius {}",
                    unit, config.neighbor_radius
                )));
            }
        },
    };

    Ok(UnitField {
        neighbors,
        dissimilarity,
        intensity: color::intensity(dissimilarity, max_distance),
    })
}

/// Renders the U-Matrix of `codebook` as SVG with the default configuration.
pub fn render_umatrix_svg<W: Write + ?Sized>(
    codebook: &Array2<f64>,
    shape: &GridShape,
    title: &str,
    sink: &mut W,
) -> Result<()> {
    render_umatrix_svg_with(codebook, shape, title, &UMatrixConfig::default(), sink)
}

/// Renders the U-Matrix of `codebook` as SVG.
///
/// The sink receives either the complete document or nothing.
pub fn render_umatrix_svg_with<W: Write + ?Sized>(
    codebook: &Array2<f64>,
    shape: &GridShape,
    title: &str,
    config: &UMatrixConfig,
    sink: &mut W,
) -> Result<()> {
    let umatrix = UMatrix::compute(codebook, shape, config)?;
    let document = umatrix.to_document(title);
    document.write_to(sink)?;

    info!(
        "Rendered U-Matrix: {} units, canvas {}x{}",
        document.polygons.len(),
        document.canvas.width,
        document.canvas.height
    );
    Ok(())
}
