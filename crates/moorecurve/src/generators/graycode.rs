use crate::{
    error,
    moorecurve::MooreCurve,
    ops,
    point::{Coordinate, PointSequence},
    spec::CurveSpec,
};

/// Correct raw Gray‑code coordinates into degree‑`bits` Hilbert coordinates.
///
/// At each bit position `i` the low `i` bits of x are reflected, or swapped
/// with those of y, depending on bit `i` of the *pre‑transform* y; an
/// independent reflection follows when bit `i` of the pre‑transform x is set.
/// The rule set is empirically derived; its correctness is established by the
/// cross‑validation tests against the other two generators rather than by a
/// closed‑form argument.
fn to_hilbert(mut x: u32, mut y: u32, bits: u32) -> Coordinate {
    let orig_x = x;
    let orig_y = y;
    for i in 1..bits {
        let mask = (1u32 << i) - 1;
        if (orig_y >> i) & 1 == 1 {
            x ^= mask;
        } else {
            let low_x = x & mask;
            let low_y = y & mask;
            x = (x & !mask) | low_y;
            y = (y & !mask) | low_x;
        }
        if (orig_x >> i) & 1 == 1 {
            x ^= mask;
        }
    }
    Coordinate::new(x, y)
}

/// Map a degree‑`(degree - 1)` Hilbert coordinate into the Moore grid.
///
/// `quadrant` is the top two bits of the vertex index: 0 lower‑left,
/// 1 upper‑left, 2 upper‑right, 3 lower‑right. Each case is a reflection or
/// rotation of the sub‑curve, translated by the half‑grid offset.
fn to_moore(c: Coordinate, quadrant: u32, degree: u32) -> Coordinate {
    let k = 1u32 << (degree - 1);
    match quadrant {
        0 => Coordinate::new(k - 1 - c.y, c.x),
        1 => Coordinate::new(k - 1 - c.y, c.x + k),
        2 => Coordinate::new(c.y + k, (k - 1 - c.x) + k),
        _ => Coordinate::new(c.y + k, k - 1 - c.x),
    }
}

/// Coordinates of vertex `v` on the degree‑`degree` Moore curve.
fn vertex(v: u32, degree: u32) -> Coordinate {
    let shift = 2 * (degree - 1);

    // The low bits index a vertex of the degree-(N-1) Hilbert sub-curve.
    let sub_index = v & !(3u32 << shift);
    let gray = ops::graycode(sub_index);
    let (y, x) = ops::deinterleave2(gray);

    let quadrant = v >> shift;
    to_moore(to_hilbert(x, y, degree - 1), quadrant, degree)
}

/// The closed‑form Gray‑code generator.
///
/// Computes every point independently from its vertex index with no
/// intermediate command string: O(degree) work and O(1) extra state per
/// point.
#[derive(Debug)]
pub struct GrayCode {
    /// Validated degree and derived grid quantities.
    spec: CurveSpec,
}

impl GrayCode {
    /// Construct a Gray‑code generator for `degree` in `[1, 15]`.
    pub fn new(degree: u32) -> error::Result<Self> {
        Ok(Self {
            spec: CurveSpec::new(degree)?,
        })
    }
}

impl MooreCurve for GrayCode {
    fn name(&self) -> &'static str {
        "Gray code"
    }

    fn info(&self) -> &'static str {
        "Closed-form per-vertex transform: the Gray code of the vertex index\n\
        is decoded into Hilbert coordinates of the next-lower degree, then\n\
        mapped into one of the four Moore quadrants. No string buffer."
    }

    fn degree(&self) -> u32 {
        self.spec.degree()
    }

    fn length(&self) -> u32 {
        self.spec.length()
    }

    fn points(&self) -> error::Result<PointSequence> {
        let degree = self.spec.degree();
        let mut points = Vec::with_capacity(self.spec.length() as usize);
        for v in 0..self.spec.length() {
            points.push(vertex(v, degree));
        }
        Ok(points)
    }
}
