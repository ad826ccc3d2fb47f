//! Degree validation and derived grid quantities.

use crate::{error, point::Coordinate};

/// Highest supported curve degree.
///
/// At degree 16 the point count (`4^16`) no longer fits `u32`, and the text
/// output format makes no promises beyond 15‑bit coordinates.
pub const MAX_DEGREE: u32 = 15;

/// A validated Moore‑curve degree.
///
/// Construction is the single place the `[1, MAX_DEGREE]` bound is enforced;
/// every generator goes through it, so the derived quantities below can use
/// unchecked shifts.
#[derive(Clone, Copy, Debug)]
pub struct CurveSpec {
    /// The validated recursion degree.
    degree: u32,
}

impl CurveSpec {
    /// Validate `degree` against the supported range `[1, MAX_DEGREE]`.
    pub fn new(degree: u32) -> error::Result<Self> {
        if degree < 1 || degree > MAX_DEGREE {
            return Err(error::Error::Degree(format!(
                "the degree must be between 1 and {MAX_DEGREE}, got {degree}"
            )));
        }
        Ok(Self { degree })
    }

    /// The curve degree.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Side length of the covered grid (`2^degree`).
    pub fn side(&self) -> u32 {
        1 << self.degree
    }

    /// Number of points on the curve (`4^degree`).
    pub fn length(&self) -> u32 {
        1 << (2 * self.degree)
    }

    /// The fixed start point `(2^(degree-1) - 1, 0)`.
    pub fn start(&self) -> Coordinate {
        Coordinate::new((1 << (self.degree - 1)) - 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(CurveSpec::new(0).is_err());
        assert!(CurveSpec::new(1).is_ok());
        assert!(CurveSpec::new(MAX_DEGREE).is_ok());
        assert!(CurveSpec::new(MAX_DEGREE + 1).is_err());
    }

    #[test]
    fn derived_quantities() -> error::Result<()> {
        let spec = CurveSpec::new(1)?;
        assert_eq!(spec.length(), 4);
        assert_eq!(spec.side(), 2);
        assert_eq!(spec.start(), Coordinate::new(0, 0));

        let spec = CurveSpec::new(3)?;
        assert_eq!(spec.length(), 64);
        assert_eq!(spec.side(), 8);
        assert_eq!(spec.start(), Coordinate::new(3, 0));

        // Degree 15 is the u32 ceiling: 4^15 points still fit.
        let spec = CurveSpec::new(15)?;
        assert_eq!(spec.length(), 1 << 30);
        Ok(())
    }
}
