//! Command handlers for the `moore` CLI.
//!
//! These functions run the selected generator and write the resulting
//! artifacts to disk.

use std::{fs::File, io::BufWriter, path::Path, time::Instant};

use anyhow::{Context, Result};
use moorecurve::{generator_from_name, point::PointSequence};

use crate::output::{write_points, write_svg};

/// Parameters for the `generate` subcommand.
pub struct GenerateOptions<'a> {
    /// Curve degree (1..=15).
    pub degree: u32,
    /// Registry key of the solution to run.
    pub solution: &'a str,
    /// Destination for the coordinate list.
    pub output: &'a Path,
    /// Destination for the SVG document.
    pub svg: &'a Path,
    /// Number of timed generation cycles, when benchmarking.
    pub benchmark: Option<u32>,
    /// Whether to print the mean cycle time.
    pub average: bool,
}

/// Generate the point sequence and write both artifacts.
///
/// With benchmarking enabled the generation is repeated and timed per cycle;
/// generation is pure and deterministic, so the artifacts are serialized once
/// from the final sequence.
pub fn generate(options: GenerateOptions<'_>) -> Result<()> {
    let GenerateOptions {
        degree,
        solution,
        output,
        svg,
        benchmark,
        average,
    } = options;

    let generator = generator_from_name(solution, degree)?;

    let cycles = benchmark.unwrap_or(1);
    let mut total = 0.0;
    let mut points = PointSequence::new();
    for _ in 0..cycles {
        let started = Instant::now();
        points = generator.points()?;
        let elapsed = started.elapsed().as_secs_f64();
        if benchmark.is_some() {
            println!("Time: {elapsed:.6}");
            total += elapsed;
        }
    }
    if average {
        println!("Average time: {:.6}", total / f64::from(cycles));
    }

    let file = File::create(output)
        .with_context(|| format!("Failed to open the file {}", output.display()))?;
    write_points(BufWriter::new(file), &points)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let file = File::create(svg)
        .with_context(|| format!("Failed to open the file {}", svg.display()))?;
    write_svg(BufWriter::new(file), &points)
        .with_context(|| format!("Failed to write {}", svg.display()))?;

    Ok(())
}
