//! Grid layout for SOM units.
//!
//! Units are laid out row-major: unit `i` sits in grid row `i / cols` and
//! grid column `i % cols`. Coordinates use `x` for the column axis and `y`
//! for the row axis, with unit spacing between adjacent units.

use crate::error::{Result, UMatrixError};
use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

/// Shape of a grid unit, which determines how units are packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Square cells on an axis-aligned lattice.
    Rectangle,
    /// Hexagonal cells; odd rows are shifted by half a unit.
    Hexagon,
}

impl Topology {
    /// Canonical name of the topology.
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Rectangle => "rectangle",
            Topology::Hexagon => "hexagon",
        }
    }
}

impl FromStr for Topology {
    type Err = UMatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "rectangle" => Ok(Topology::Rectangle),
            "hexagon" => Ok(Topology::Hexagon),
            _ => Err(UMatrixError::UnsupportedTopology(s.to_string())),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Topology and dimensions of a SOM grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Unit shape.
    pub topology: Topology,
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
}

impl GridShape {
    /// Create a new grid shape.
    pub fn new(topology: Topology, rows: usize, cols: usize) -> Self {
        Self {
            topology,
            rows,
            cols,
        }
    }

    /// Total number of units in the grid.
    ///
    /// Fails if `rows * cols` does not fit in a `usize`.
    #[inline]
    pub fn total_units(&self) -> Result<usize> {
        unit_count(self.rows, self.cols)
    }

    /// Layout coordinates for every unit of this grid.
    pub fn coords(&self) -> Result<Array2<f64>> {
        grid_coords(self.topology, self.rows, self.cols)
    }
}

/// Generates an N x 2 matrix of `(x, y)` unit positions, N = rows * cols.
///
/// On a hexagonal grid odd rows are shifted right by 0.5 and rows are
/// `sqrt(0.75)` apart, so every unit is at distance 1 from its six
/// immediate neighbors.
pub fn grid_coords(topology: Topology, rows: usize, cols: usize) -> Result<Array2<f64>> {
    if rows == 0 || cols == 0 {
        return Err(UMatrixError::InvalidInput(format!(
            "Grid dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }

    let total = unit_count(rows, cols)?;

    let row_height = match topology {
        Topology::Rectangle => 1.0,
        Topology::Hexagon => 0.75f64.sqrt(),
    };

    let mut coords = Array2::zeros((total, 2));
    for (i, mut coord) in coords.rows_mut().into_iter().enumerate() {
        let row = i / cols;
        let col = i % cols;

        let shift = match topology {
            Topology::Hexagon if row % 2 == 1 => 0.5,
            _ => 0.0,
        };

        coord[0] = col as f64 + shift;
        coord[1] = row as f64 * row_height;
    }

    Ok(coords)
}

fn unit_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| {
        UMatrixError::InvalidInput(format!("Grid of {}x{} units is too large", rows, cols))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_parsing() {
        assert_eq!("rectangle".parse::<Topology>().unwrap(), Topology::Rectangle);
        assert_eq!("HEXAGON".parse::<Topology>().unwrap(), Topology::Hexagon);

        let err = "triangle".parse::<Topology>().unwrap_err();
        assert!(matches!(err, UMatrixError::UnsupportedTopology(name) if name == "triangle"));
    }

    #[test]
    fn test_rectangle_coords() {
        let coords = grid_coords(Topology::Rectangle, 2, 3).unwrap();
        assert_eq!(coords.dim(), (6, 2));

        // Unit 4 is in row 1, column 1
        assert_eq!(coords[[4, 0]], 1.0);
        assert_eq!(coords[[4, 1]], 1.0);
        // Unit 2 is in row 0, column 2
        assert_eq!(coords[[2, 0]], 2.0);
        assert_eq!(coords[[2, 1]], 0.0);
    }

    #[test]
    fn test_hexagon_coords() {
        let coords = grid_coords(Topology::Hexagon, 3, 2).unwrap();
        let h = 0.75f64.sqrt();

        // Even rows are not shifted
        assert_eq!(coords[[0, 0]], 0.0);
        assert_eq!(coords[[4, 0]], 0.0);
        assert!((coords[[4, 1]] - 2.0 * h).abs() < 1e-12);

        // Odd rows are shifted by half a unit
        assert_eq!(coords[[2, 0]], 0.5);
        assert_eq!(coords[[3, 0]], 1.5);
        assert!((coords[[3, 1]] - h).abs() < 1e-12);
    }

    #[test]
    fn test_hexagon_neighbors_at_unit_distance() {
        let coords = grid_coords(Topology::Hexagon, 2, 2).unwrap();
        let dx = coords[[2, 0]] - coords[[0, 0]];
        let dy = coords[[2, 1]] - coords[[0, 1]];
        assert!(((dx * dx + dy * dy).sqrt() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_dimension() {
        assert!(matches!(
            grid_coords(Topology::Rectangle, 0, 4),
            Err(UMatrixError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_oversized_grid() {
        let shape = GridShape::new(Topology::Rectangle, usize::MAX, 2);
        assert!(matches!(shape.total_units(), Err(UMatrixError::InvalidInput(_))));
        assert!(matches!(
            grid_coords(Topology::Hexagon, 2, usize::MAX),
            Err(UMatrixError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_grid_shape() {
        let shape = GridShape::new(Topology::Rectangle, 4, 5);
        assert_eq!(shape.total_units().unwrap(), 20);
        assert_eq!(shape.coords().unwrap().nrows(), 20);
    }
}
