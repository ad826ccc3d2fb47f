//! Plain-text and SVG serializers for point sequences.
//!
//! Both writers are generic over [`io::Write`] so the command handlers can
//! target files while the tests assert on in-memory buffers.

use std::io::{self, Write};

use moorecurve::point::Coordinate;

/// Factor every coordinate is scaled by in the SVG output.
const SVG_SCALE: u32 = 100;

/// Write one `"<x>, <y>"` line per point, in curve order.
pub fn write_points<W: Write>(mut w: W, points: &[Coordinate]) -> io::Result<()> {
    for p in points {
        writeln!(w, "{}, {}", p.x, p.y)?;
    }
    Ok(())
}

/// Write a minimal SVG document tracing the sequence as a single polyline.
///
/// Coordinates are scaled by [`SVG_SCALE`]; the document width and height are
/// the maxima of the scaled coordinates, so the polyline exactly fills the
/// viewport.
pub fn write_svg<W: Write>(mut w: W, points: &[Coordinate]) -> io::Result<()> {
    let max_x = points.iter().map(|p| p.x * SVG_SCALE).max().unwrap_or(0);
    let max_y = points.iter().map(|p| p.y * SVG_SCALE).max().unwrap_or(0);

    writeln!(w, "<?xml version=\"1.0\" standalone=\"no\"?>")?;
    writeln!(
        w,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{max_x}\" height=\"{max_y}\" version=\"1.1\" baseProfile=\"full\">"
    )?;
    write!(w, "<polyline points=\"")?;
    for p in points {
        write!(w, "{},{} ", p.x * SVG_SCALE, p.y * SVG_SCALE)?;
    }
    writeln!(w, "\" style=\"fill:none;stroke:black;stroke-width:2\"/>")?;
    writeln!(w, "</svg>")?;
    Ok(())
}
