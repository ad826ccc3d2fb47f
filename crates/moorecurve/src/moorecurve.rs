//! The `MooreCurve` trait implemented by every generator.

use crate::{error, point::PointSequence};

/// Common interface of the three Moore‑curve generators.
///
/// A generator is a pure function of its degree: repeated calls to
/// [`points`](Self::points) produce identical sequences, and the three
/// implementations agree point‑for‑point.
pub trait MooreCurve {
    /// Short name of the generation method.
    fn name(&self) -> &'static str;

    /// A short human‑readable description of the method.
    fn info(&self) -> &'static str;

    /// The curve degree this generator was constructed for.
    fn degree(&self) -> u32;

    /// The number of points the curve visits (`4^degree`).
    fn length(&self) -> u32;

    /// Compute the full ordered point sequence.
    ///
    /// On success the returned sequence has exactly [`length`](Self::length)
    /// entries and starts at `(2^(degree-1) - 1, 0)`. Only the string‑rewrite
    /// method can fail, and only when its command buffers cannot be reserved;
    /// in that case no points are produced.
    fn points(&self) -> error::Result<PointSequence>;
}
