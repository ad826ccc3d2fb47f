//! Central registry of solution metadata and constructors.

use crate::{
    error,
    generators::{graycode::GrayCode, recursive::RecursiveTurtle, rewrite::StringRewrite},
    moorecurve::MooreCurve,
};

/// Metadata describing one registered solution.
pub struct Entry {
    /// Stable key used on the command line and in [`construct`].
    pub key: &'static str,
    /// Numeric solution code accepted as an alternative to the key.
    pub code: u32,
    /// Human‑readable display name.
    pub display: &'static str,
    /// One‑line summary of the method.
    pub summary: &'static str,
}

/// All registered solutions, ordered by numeric code.
pub const REGISTRY: &[Entry] = &[
    Entry {
        key: "rewrite",
        code: 0,
        display: "String rewriting",
        summary: "L-system expansion interpreted by a turtle",
    },
    Entry {
        key: "graycode",
        code: 1,
        display: "Gray code",
        summary: "Closed-form per-vertex bit manipulation",
    },
    Entry {
        key: "recursive",
        code: 2,
        display: "Recursive turtle",
        summary: "Mutual recursion driving the turtle directly",
    },
];

/// Keys of every registered solution, ordered by numeric code.
pub const SOLUTION_NAMES: [&str; 3] = ["rewrite", "graycode", "recursive"];

/// Construct a solution by key for the requested degree.
pub fn construct(key: &str, degree: u32) -> error::Result<Box<dyn MooreCurve + 'static>> {
    match key {
        "rewrite" => Ok(Box::new(StringRewrite::new(degree)?)),
        "graycode" => Ok(Box::new(GrayCode::new(degree)?)),
        "recursive" => Ok(Box::new(RecursiveTurtle::new(degree)?)),
        _ => Err(error::Error::Solution(format!(
            "unknown solution '{key}'; valid options: {}",
            SOLUTION_NAMES.join(", ")
        ))),
    }
}

/// Construct a solution by numeric code (`0`, `1`, or `2`).
pub fn construct_code(code: u32, degree: u32) -> error::Result<Box<dyn MooreCurve + 'static>> {
    match REGISTRY.iter().find(|entry| entry.code == code) {
        Some(entry) => construct(entry.key, degree),
        None => Err(error::Error::Solution(format!(
            "unsupported solution code {code}; use a number between 0 and {}",
            REGISTRY.len() - 1
        ))),
    }
}

/// Validate a solution key and degree without constructing the generator.
pub fn validate(key: &str, degree: u32) -> error::Result<()> {
    construct(key, degree).map(|_| ())
}
