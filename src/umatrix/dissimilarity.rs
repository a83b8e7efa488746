//! Per-unit aggregation of weight-space dissimilarity.

use super::neighborhood::RowWithDist;
use ndarray::Array2;

/// Mean weight-space distance from `unit` to its grid neighbors.
///
/// Neighbors are selected by grid proximity but the averaged value is the
/// distance between weight vectors. The unit itself is skipped. Returns
/// `None` when no neighbor remains.
pub fn mean_neighbor_distance(
    unit: usize,
    neighbors: &[RowWithDist],
    weight_dist: &Array2<f64>,
) -> Option<f64> {
    let (sum, count) = neighbors
        .iter()
        .filter(|n| n.row != unit)
        .fold((0.0, 0usize), |(sum, count), n| {
            (sum + weight_dist[[unit, n.row]], count + 1)
        });

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
