//! Approximate grid adjacency from grid-space distances.

use ndarray::Array2;

/// A unit index paired with its grid-space distance to a query unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowWithDist {
    /// Unit index.
    pub row: usize,
    /// Grid-space distance to the query unit.
    pub dist: f64,
}

/// Returns every unit whose grid distance to `row` is strictly below `radius`.
///
/// Results are in unit-index order and always include `row` itself, since
/// its self-distance is zero. Which units qualify depends on the grid
/// coordinates having the unit spacing the radius was chosen for.
pub fn rows_in_radius(row: usize, radius: f64, grid_dist: &Array2<f64>) -> Vec<RowWithDist> {
    grid_dist
        .row(row)
        .iter()
        .enumerate()
        .filter(|(_, dist)| **dist < radius)
        .map(|(i, &dist)| RowWithDist { row: i, dist })
        .collect()
}
