//! Placement of unit outlines on the canvas.

use crate::grid::{GridShape, Topology};
use std::fmt;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.x, self.y)
    }
}

/// Size of the drawing area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl Canvas {
    /// Canvas that fits every unit of `shape` under the given scale and margin.
    pub fn for_grid(shape: &GridShape, scale: f64, offset: f64) -> Self {
        Self {
            width: shape.cols as f64 * scale + 2.0 * offset,
            height: shape.rows as f64 * scale + 2.0 * offset,
        }
    }
}

/// Maps grid coordinates to closed unit outlines.
///
/// Hexagonal units are drawn as boxes whose height is compressed to the
/// hexagon row pitch rather than as true six-sided outlines.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    scale: f64,
    offset: f64,
    half_width: f64,
    half_height: f64,
}

impl Layout {
    /// Create a layout for the given unit shape.
    pub fn new(topology: Topology, scale: f64, offset: f64) -> Self {
        let half_height = match topology {
            Topology::Rectangle => 0.5 * scale,
            Topology::Hexagon => 0.75f64.sqrt() / 2.0 * scale,
        };

        Self {
            scale,
            offset,
            half_width: 0.5 * scale,
            half_height,
        }
    }

    /// Canvas position of a grid coordinate.
    #[inline]
    pub fn to_canvas(&self, x: f64, y: f64) -> Point {
        Point::new(self.scale * x + self.offset, self.scale * y + self.offset)
    }

    /// Closed outline centered on the unit at grid position `(x, y)`.
    ///
    /// The first vertex is repeated as the last one.
    pub fn outline(&self, x: f64, y: f64) -> [Point; 5] {
        let c = self.to_canvas(x, y);
        let (hw, hh) = (self.half_width, self.half_height);

        [
            Point::new(c.x + hw, c.y + hh),
            Point::new(c.x + hw, c.y - hh),
            Point::new(c.x - hw, c.y - hh),
            Point::new(c.x - hw, c.y + hh),
            Point::new(c.x + hw, c.y + hh),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::grid_coords;

    #[test]
    fn test_canvas_size() {
        let canvas = Canvas::for_grid(&GridShape::new(Topology::Rectangle, 3, 5), 20.0, 10.0);
        assert_eq!(canvas.width, 120.0);
        assert_eq!(canvas.height, 80.0);
    }

    #[test]
    fn test_rectangle_outline() {
        let layout = Layout::new(Topology::Rectangle, 20.0, 10.0);
        let outline = layout.outline(1.0, 0.0);

        assert_eq!(outline[0], Point::new(40.0, 20.0));
        assert_eq!(outline[1], Point::new(40.0, 0.0));
        assert_eq!(outline[2], Point::new(20.0, 0.0));
        assert_eq!(outline[3], Point::new(20.0, 20.0));
        assert_eq!(outline[0], outline[4]);
    }

    #[test]
    fn test_hexagon_outline_compressed() {
        let layout = Layout::new(Topology::Hexagon, 20.0, 10.0);
        let outline = layout.outline(0.0, 0.0);

        let height = outline[0].y - outline[1].y;
        let width = outline[0].x - outline[2].x;
        assert!((width - 20.0).abs() < 1e-12);
        assert!((height - 20.0 * 0.75f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_outlines_within_canvas() {
        for topology in [Topology::Rectangle, Topology::Hexagon] {
            let shape = GridShape::new(topology, 4, 6);
            let canvas = Canvas::for_grid(&shape, 20.0, 10.0);
            let layout = Layout::new(topology, 20.0, 10.0);
            let coords = grid_coords(topology, 4, 6).unwrap();

            for coord in coords.rows() {
                for p in layout.outline(coord[0], coord[1]) {
                    assert!(p.x >= 0.0 && p.x <= canvas.width, "{:?} {}", topology, p);
                    assert!(p.y >= 0.0 && p.y <= canvas.height, "{:?} {}", topology, p);
                }
            }
        }
    }

    #[test]
    fn test_point_format() {
        assert_eq!(Point::new(30.0, 8.5).to_string(), "30.000000,8.500000");
    }
}
