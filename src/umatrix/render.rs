//! SVG serialization of the rendered map.
//!
//! The document is a title heading followed by an `svg` element holding
//! one polygon per unit:
//!
//! ```text
//! <h1>title</h1><svg width="60" height="60"><polygon points="..." style="..."></polygon>...</svg>
//! ```

use super::geometry::{Canvas, Point};
use crate::error::{Result, UMatrixError};
use std::fmt;
use std::io::Write;

/// Stroke color used for every unit outline.
pub const STROKE_COLOR: &str = "black";

/// Stroke width used for every unit outline.
pub const STROKE_WIDTH: u32 = 1;

/// Fill and stroke of a unit polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Gray level applied to all three color channels.
    pub fill: u8,
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fill:rgb({v},{v},{v});stroke:{};stroke-width:{}",
            STROKE_COLOR,
            STROKE_WIDTH,
            v = self.fill
        )
    }
}

/// A styled closed outline for one unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Outline vertices, first repeated as last.
    pub points: [Point; 5],
    /// Fill and stroke.
    pub style: Style,
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<polygon points=\"")?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "\" style=\"{}\"></polygon>", self.style)
    }
}

/// A complete U-Matrix image ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// Heading shown above the image.
    pub title: String,
    /// Drawing area.
    pub canvas: Canvas,
    /// Unit polygons in unit-index order.
    pub polygons: Vec<Polygon>,
}

impl SvgDocument {
    /// Writes the whole document to `sink` in a single write and flushes it.
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let encoded = self.to_string();
        sink.write_all(encoded.as_bytes())
            .map_err(UMatrixError::WriteFailure)?;
        sink.flush().map_err(UMatrixError::WriteFailure)?;
        Ok(())
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<h1>{}</h1>", escape_text(&self.title))?;
        write!(
            f,
            "<svg width=\"{}\" height=\"{}\">",
            self.canvas.width, self.canvas.height
        )?;
        for polygon in &self.polygons {
            write!(f, "{}", polygon)?;
        }
        f.write_str("</svg>")
    }
}

/// Escapes markup characters in element text.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
