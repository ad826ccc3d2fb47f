use crate::{
    error, moorecurve::MooreCurve, point::PointSequence, spec::CurveSpec, turtle::Turtle,
};

/// Walk the `L` production: `- R F + L F L + F R -`.
///
/// Recursion terminates at degree 0 without emitting anything.
fn l_production(degree: u32, turtle: &mut Turtle) {
    if degree == 0 {
        return;
    }
    turtle.turn_left();
    r_production(degree - 1, turtle);
    turtle.forward();
    turtle.turn_right();
    l_production(degree - 1, turtle);
    turtle.forward();
    l_production(degree - 1, turtle);
    turtle.turn_right();
    turtle.forward();
    r_production(degree - 1, turtle);
    turtle.turn_left();
}

/// Walk the `R` production: `+ L F - R F R - F L +`.
///
/// Mirror image of [`l_production`].
fn r_production(degree: u32, turtle: &mut Turtle) {
    if degree == 0 {
        return;
    }
    turtle.turn_right();
    l_production(degree - 1, turtle);
    turtle.forward();
    turtle.turn_left();
    r_production(degree - 1, turtle);
    turtle.forward();
    r_production(degree - 1, turtle);
    turtle.turn_left();
    turtle.forward();
    l_production(degree - 1, turtle);
    turtle.turn_right();
}

/// Walk the degree‑`degree` axiom `L F L + F + L F L`.
fn axiom(degree: u32, turtle: &mut Turtle) {
    let sub = degree - 1;
    l_production(sub, turtle);
    turtle.forward();
    l_production(sub, turtle);
    turtle.turn_right();
    turtle.forward();
    turtle.turn_right();
    l_production(sub, turtle);
    turtle.forward();
    l_production(sub, turtle);
}

/// The direct mutual‑recursion generator.
///
/// Interprets the productions on the fly against shared turtle state instead
/// of materialising a command string: stack depth O(degree), no working
/// buffers beyond the output itself.
#[derive(Debug)]
pub struct RecursiveTurtle {
    /// Validated degree and derived grid quantities.
    spec: CurveSpec,
}

impl RecursiveTurtle {
    /// Construct a recursive‑turtle generator for `degree` in `[1, 15]`.
    pub fn new(degree: u32) -> error::Result<Self> {
        Ok(Self {
            spec: CurveSpec::new(degree)?,
        })
    }
}

impl MooreCurve for RecursiveTurtle {
    fn name(&self) -> &'static str {
        "Recursive turtle"
    }

    fn info(&self) -> &'static str {
        "Mirrors the L-system productions as two mutually recursive\n\
        procedures driving the turtle directly; every forward step appends\n\
        one point. Nothing is materialised besides the output."
    }

    fn degree(&self) -> u32 {
        self.spec.degree()
    }

    fn length(&self) -> u32 {
        self.spec.length()
    }

    fn points(&self) -> error::Result<PointSequence> {
        let mut turtle = Turtle::new(self.spec.start(), self.spec.length() as usize);
        axiom(self.spec.degree(), &mut turtle);
        let points = turtle.into_points();
        debug_assert_eq!(points.len() as u32, self.spec.length());
        Ok(points)
    }
}
