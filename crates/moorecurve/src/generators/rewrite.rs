use std::ops::Range;

use crate::{
    error,
    moorecurve::MooreCurve,
    point::PointSequence,
    spec::CurveSpec,
    turtle::Turtle,
};

/// A single turtle command in an expanded L‑system string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    /// Quarter turn counter‑clockwise (`-`).
    Left,
    /// Quarter turn clockwise (`+`).
    Right,
    /// Step one unit and record the point (`F`).
    Forward,
}

/// Which of the two mutually‑dependent productions a span holds.
#[derive(Clone, Copy, Debug)]
enum Production {
    /// `L(i) = - R F + L F L + F R -`
    L,
    /// `R(i) = + L F - R F R - F L +`
    R,
}

/// Number of commands in either production at `degree`: `(4^degree - 1) / 3 * 7`.
fn commands_count(degree: u32) -> usize {
    if degree == 0 {
        return 0;
    }
    ((1usize << (2 * degree)) - 1) / 3 * 7
}

/// Allocation failures surface as a typed error naming the degree.
fn buffer_error(degree: u32) -> error::Error {
    error::Error::Allocation(format!(
        "could not reserve the command buffers for degree {degree}; the degree is too big"
    ))
}

/// Memoised production expansions sharing one command buffer.
///
/// Every production `L(i)` / `R(i)` needed by the axiom occupies its own span
/// of `buf`, written exactly once bottom‑up; later expansions splice earlier
/// spans in verbatim instead of re‑expanding them, so total work is linear in
/// the final command count rather than exponential in the degree.
struct ProductionTable {
    /// The shared command buffer all spans index into.
    buf: Vec<Command>,
    /// Span of `L(i)` in `buf`, indexed by sub‑degree; empty below 1.
    l_spans: Vec<Range<usize>>,
    /// Span of `R(i)` in `buf`, indexed by sub‑degree; empty below 1.
    r_spans: Vec<Range<usize>>,
}

impl ProductionTable {
    /// Expand every production the degree‑`degree` axiom references.
    ///
    /// Builds `L(i)` and `R(i)` for `i < degree - 1` and then `L(degree - 1)`
    /// alone; the axiom never references the top‑level `R`.
    fn build(degree: u32) -> error::Result<Self> {
        let sub = (degree - 1) as usize;

        let mut capacity = commands_count(degree - 1);
        for i in 1..sub {
            capacity += 2 * commands_count(i as u32);
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|_| buffer_error(degree))?;

        let mut table = Self {
            buf,
            l_spans: vec![0..0; sub + 1],
            r_spans: vec![0..0; sub + 1],
        };
        for i in 1..sub {
            table.expand(Production::L, i);
            table.expand(Production::R, i);
        }
        if sub >= 1 {
            table.expand(Production::L, sub);
        }
        Ok(table)
    }

    /// Write one production expansion at the end of the buffer.
    ///
    /// Both sub‑spans it references were written by earlier calls, so the new
    /// span is assembled from fixed symbols and verbatim copies only.
    fn expand(&mut self, production: Production, degree: usize) {
        let start = self.buf.len();
        let l = self.l_spans[degree - 1].clone();
        let r = self.r_spans[degree - 1].clone();
        match production {
            Production::L => {
                self.buf.push(Command::Left);
                self.buf.extend_from_within(r.clone());
                self.buf.push(Command::Forward);
                self.buf.push(Command::Right);
                self.buf.extend_from_within(l.clone());
                self.buf.push(Command::Forward);
                self.buf.extend_from_within(l);
                self.buf.push(Command::Right);
                self.buf.push(Command::Forward);
                self.buf.extend_from_within(r);
                self.buf.push(Command::Left);
                self.l_spans[degree] = start..self.buf.len();
            }
            Production::R => {
                self.buf.push(Command::Right);
                self.buf.extend_from_within(l.clone());
                self.buf.push(Command::Forward);
                self.buf.push(Command::Left);
                self.buf.extend_from_within(r.clone());
                self.buf.push(Command::Forward);
                self.buf.extend_from_within(r);
                self.buf.push(Command::Left);
                self.buf.push(Command::Forward);
                self.buf.extend_from_within(l);
                self.buf.push(Command::Right);
                self.r_spans[degree] = start..self.buf.len();
            }
        }
    }

    /// Assemble the degree‑`degree` axiom `L F L + F + L F L` from the
    /// top‑level `L` span.
    fn axiom(&self, degree: u32) -> error::Result<Vec<Command>> {
        let span = self.l_spans[(degree - 1) as usize].clone();

        let mut commands = Vec::new();
        commands
            .try_reserve_exact(4 * span.len() + 5)
            .map_err(|_| buffer_error(degree))?;

        let l = &self.buf[span];
        commands.extend_from_slice(l);
        commands.push(Command::Forward);
        commands.extend_from_slice(l);
        commands.push(Command::Right);
        commands.push(Command::Forward);
        commands.push(Command::Right);
        commands.extend_from_slice(l);
        commands.push(Command::Forward);
        commands.extend_from_slice(l);
        Ok(commands)
    }
}

/// The string‑rewriting generator.
///
/// Expands the curve's L‑system into a flat command string, then walks it
/// once with a turtle. The only generator that can fail: its working buffers
/// grow to gigabytes near the degree ceiling, so reservation errors are
/// reported instead of aborting.
#[derive(Debug)]
pub struct StringRewrite {
    /// Validated degree and derived grid quantities.
    spec: CurveSpec,
}

impl StringRewrite {
    /// Construct a string‑rewrite generator for `degree` in `[1, 15]`.
    pub fn new(degree: u32) -> error::Result<Self> {
        Ok(Self {
            spec: CurveSpec::new(degree)?,
        })
    }
}

impl MooreCurve for StringRewrite {
    fn name(&self) -> &'static str {
        "String rewriting"
    }

    fn info(&self) -> &'static str {
        "Expands the L-system productions into a command string using a\n\
        memoised production buffer, then interprets it with a turtle.\n\
        Linear total work, but the command buffer dominates memory use."
    }

    fn degree(&self) -> u32 {
        self.spec.degree()
    }

    fn length(&self) -> u32 {
        self.spec.length()
    }

    fn points(&self) -> error::Result<PointSequence> {
        let degree = self.spec.degree();
        let table = ProductionTable::build(degree)?;
        let commands = table.axiom(degree)?;
        drop(table);

        let mut turtle = Turtle::new(self.spec.start(), self.spec.length() as usize);
        for command in &commands {
            match command {
                Command::Left => turtle.turn_left(),
                Command::Right => turtle.turn_right(),
                Command::Forward => turtle.forward(),
            }
        }
        let points = turtle.into_points();
        debug_assert_eq!(points.len() as u32, self.spec.length());
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Coordinate;

    #[test]
    fn command_counts() {
        assert_eq!(commands_count(0), 0);
        assert_eq!(commands_count(1), 7);
        assert_eq!(commands_count(2), 35);
        assert_eq!(commands_count(3), 147);
        // Each level is four sub-expansions plus seven fixed symbols.
        for degree in 1..10 {
            assert_eq!(
                commands_count(degree),
                4 * commands_count(degree - 1) + 7
            );
        }
    }

    #[test]
    fn degree_1_axiom_is_three_forwards() -> error::Result<()> {
        let table = ProductionTable::build(1)?;
        assert_eq!(
            table.axiom(1)?,
            vec![
                Command::Forward,
                Command::Right,
                Command::Forward,
                Command::Right,
                Command::Forward,
            ]
        );
        Ok(())
    }

    #[test]
    fn first_level_productions() -> error::Result<()> {
        use Command::{Forward, Left, Right};

        // L(1) with empty sub-productions is "-F+F+F-".
        let table = ProductionTable::build(2)?;
        let span = table.l_spans[1].clone();
        assert_eq!(
            &table.buf[span],
            &[Left, Forward, Right, Forward, Right, Forward, Left]
        );
        Ok(())
    }

    #[test]
    fn spans_are_written_once_and_sized_by_formula() -> error::Result<()> {
        let table = ProductionTable::build(5)?;
        for i in 1..=4 {
            assert_eq!(table.l_spans[i].len(), commands_count(i as u32));
        }
        for i in 1..=3 {
            assert_eq!(table.r_spans[i].len(), commands_count(i as u32));
        }
        // The axiom never references R(degree - 1), so it is never expanded.
        assert_eq!(table.r_spans[4].len(), 0);
        // Spans tile the buffer exactly; nothing is written twice.
        let spanned: usize = (1..=4).map(|i| table.l_spans[i].len()).sum::<usize>()
            + (1..=3).map(|i| table.r_spans[i].len()).sum::<usize>();
        assert_eq!(spanned, table.buf.len());
        Ok(())
    }

    #[test]
    fn degree_1_traces_the_unit_square() -> error::Result<()> {
        let points = StringRewrite::new(1)?.points()?;
        assert_eq!(
            points,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
                Coordinate::new(1, 0),
            ]
        );
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_degrees() {
        assert!(StringRewrite::new(0).is_err());
        assert!(StringRewrite::new(16).is_err());
    }
}
