//! Loading SOM codebooks.
//!
//! A codebook file is a JSON array of weight vectors, one per unit, in
//! row-major grid order:
//!
//! ```text
//! [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]
//! ```

use crate::error::{Result, UMatrixError};
use ndarray::Array2;
use std::path::Path;

/// Builds a codebook matrix from a list of weight vectors.
///
/// All vectors must be non-empty and have the same length.
pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Array2<f64>> {
    let n = rows.len();
    let dim = rows.first().map(Vec::len).unwrap_or(0);

    if n == 0 || dim == 0 {
        return Err(UMatrixError::InvalidInput("Empty codebook".to_string()));
    }

    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != dim) {
        return Err(UMatrixError::InvalidInput(format!(
            "Weight vector {} has length {}, expected {}",
            i,
            row.len(),
            dim
        )));
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    let codebook = Array2::from_shape_vec((n, dim), flat)
        .map_err(|e| UMatrixError::InvalidInput(e.to_string()))?;
    ensure_finite(&codebook)?;
    Ok(codebook)
}

/// Fails on the first NaN or infinite weight.
pub fn ensure_finite(codebook: &Array2<f64>) -> Result<()> {
    match codebook.indexed_iter().find(|(_, w)| !w.is_finite()) {
        Some(((unit, component), w)) => Err(UMatrixError::InvalidInput(format!(
            "Weight vector {} has non-finite component {}: {}",
            unit, component, w
        ))),
        None => Ok(()),
    }
}

/// Parses a codebook from JSON text.
pub fn from_json(content: &str) -> Result<Array2<f64>> {
    let rows: Vec<Vec<f64>> = serde_json::from_str(content)?;
    from_rows(rows)
}

/// Loads a codebook from a JSON file.
pub fn load_json(path: &Path) -> Result<Array2<f64>> {
    let content = std::fs::read_to_string(path)?;
    from_json(&content)
}
