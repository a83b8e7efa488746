//! Distance computations over the rows of a matrix.

use crate::error::{Result, UMatrixError};
use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Distance metric between two vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Euclidean (L2) distance.
    Euclidean,
}

impl Metric {
    /// Computes the distance between two equally sized vectors.
    #[inline]
    pub fn compute(&self, a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
        match self {
            Metric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).powi(2))
                .sum::<f64>()
                .sqrt(),
        }
    }

    /// Canonical name of the metric.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
        }
    }
}

impl FromStr for Metric {
    type Err = UMatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Metric::Euclidean),
            _ => Err(UMatrixError::UnknownMetric(s.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Distance between two vectors, checking that their lengths agree.
pub fn distance(metric: Metric, a: ArrayView1<f64>, b: ArrayView1<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(UMatrixError::InvalidInput(format!(
            "Vector lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(metric.compute(a, b))
}

/// Pairwise distances between all rows of `points`.
///
/// The result is an N x N matrix with a zero diagonal. Only the upper
/// triangle is computed; it is mirrored so the matrix is exactly symmetric.
/// Rows are processed on the rayon thread pool.
pub fn pairwise_distances(metric: Metric, points: &Array2<f64>) -> Array2<f64> {
    pairwise_distances_with(metric, points, true)
}

/// Pairwise distances between all rows of `points`, optionally on the
/// current thread only.
pub fn pairwise_distances_with(metric: Metric, points: &Array2<f64>, parallel: bool) -> Array2<f64> {
    let n = points.nrows();

    let upper_row = |i: usize| -> Vec<f64> {
        let row_i = points.row(i);
        ((i + 1)..n)
            .map(|j| metric.compute(row_i, points.row(j)))
            .collect()
    };
    let upper: Vec<Vec<f64>> = if parallel {
        (0..n).into_par_iter().map(upper_row).collect()
    } else {
        (0..n).map(upper_row).collect()
    };

    let mut dist = Array2::zeros((n, n));
    for (i, row) in upper.into_iter().enumerate() {
        for (k, d) in row.into_iter().enumerate() {
            let j = i + 1 + k;
            dist[[i, j]] = d;
            dist[[j, i]] = d;
        }
    }
    dist
}

/// Largest entry of a distance matrix (0.0 for an empty matrix).
pub fn max_distance(dist: &Array2<f64>) -> f64 {
    dist.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_metric_parsing() {
        assert_eq!("euclidean".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("Euclidean".parse::<Metric>().unwrap(), Metric::Euclidean);

        let err = "minkowski".parse::<Metric>().unwrap_err();
        assert!(matches!(err, UMatrixError::UnknownMetric(name) if name == "minkowski"));
    }

    #[test]
    fn test_distance() {
        let a = array![1.0, 0.0, 0.0];
        let b = array![0.0, 1.0, 0.0];
        let d = distance(Metric::Euclidean, a.view(), b.view()).unwrap();
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-10);
    }

    #[test]
    fn test_distance_length_mismatch() {
        let a = array![1.0, 0.0];
        let b = array![0.0, 1.0, 0.0];
        assert!(matches!(
            distance(Metric::Euclidean, a.view(), b.view()),
            Err(UMatrixError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_pairwise_known_values() {
        let points = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let dist = pairwise_distances(Metric::Euclidean, &points);

        assert_eq!(dist.dim(), (4, 4));
        assert!((dist[[0, 1]] - 1.0).abs() < 1e-12);
        assert!((dist[[0, 3]] - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((dist[[1, 2]] - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert!((max_distance(&dist) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_pairwise_symmetric_zero_diagonal() {
        let points = array![
            [0.3, -1.2, 4.0],
            [2.5, 0.0, -0.7],
            [-3.1, 1.1, 0.9],
            [0.0, 0.0, 0.0],
            [7.7, -2.2, 1.5]
        ];
        let dist = pairwise_distances(Metric::Euclidean, &points);

        for i in 0..5 {
            assert_eq!(dist[[i, i]], 0.0);
            for j in 0..5 {
                assert_eq!(dist[[i, j]], dist[[j, i]]);
                assert!(dist[[i, j]] >= 0.0);
            }
        }
    }

    #[test]
    fn test_pairwise_sequential_matches_parallel() {
        let points = Array2::from_shape_fn((9, 4), |(i, j)| ((i * 5 + j * 11) % 7) as f64 - 3.0);
        assert_eq!(
            pairwise_distances_with(Metric::Euclidean, &points, false),
            pairwise_distances(Metric::Euclidean, &points)
        );
    }

    #[test]
    fn test_pairwise_empty() {
        let points = Array2::<f64>::zeros((0, 3));
        let dist = pairwise_distances(Metric::Euclidean, &points);
        assert_eq!(dist.dim(), (0, 0));
        assert_eq!(max_distance(&dist), 0.0);
    }
}
