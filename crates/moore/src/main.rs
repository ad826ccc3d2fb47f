//! Command‑line entry point for the `moore` tool.
//!
//! Provides subcommands to generate Moore‑curve point sequences and list the
//! available solution methods.

use std::{fmt::Display, path::PathBuf, process};

use anyhow::Result;
use clap::{Parser, Subcommand};
use moorecurve::registry;

/// CLI command implementations.
mod cmd;
/// Text and SVG serializers shared by the CLI.
mod output;

/// Parse a solution key or numeric code into a registry key.
fn parse_solution(s: &str) -> Result<String, String> {
    if registry::SOLUTION_NAMES.contains(&s) {
        return Ok(s.to_string());
    }
    if let Ok(code) = s.parse::<u32>() {
        return match registry::REGISTRY.iter().find(|entry| entry.code == code) {
            Some(entry) => Ok(entry.key.to_string()),
            None => Err(format!(
                "unsupported solution code {}; use a number between 0 and {}",
                code,
                registry::REGISTRY.len() - 1
            )),
        };
    }
    Err(format!(
        "invalid solution '{}'. Valid options: {} (or codes 0-{})",
        s,
        registry::SOLUTION_NAMES.join(", "),
        registry::REGISTRY.len() - 1
    ))
}

#[derive(Parser)]
#[command(name = "moore")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `moore` tool.
enum Commands {
    #[command(about = "Generate the point sequence of a Moore curve")]
    /// Generate the point sequence of a Moore curve.
    Generate {
        #[arg(
            short = 'n',
            long = "degree",
            value_parser = clap::value_parser!(u32).range(1..=15),
            help = "Degree N of the Moore curve (1-15); the curve has 4^N points"
        )]
        /// Recursion degree of the curve.
        degree: u32,

        #[arg(
            short = 's',
            long = "solution",
            default_value = "rewrite",
            value_parser = parse_solution,
            help = &format!(
                "Solution used to compute the points (options: {}, or codes 0-{})",
                registry::SOLUTION_NAMES.join(", "),
                registry::REGISTRY.len() - 1
            )
        )]
        /// Solution key or numeric code.
        solution: String,

        #[arg(
            short = 'o',
            long = "output",
            help = "File the coordinate list is written to, one \"<x>, <y>\" line per point"
        )]
        /// Destination for the coordinate list.
        output: PathBuf,

        #[arg(
            long = "svg",
            default_value = "svg_result.svg",
            help = "File the SVG polyline is written to"
        )]
        /// Destination for the SVG document.
        svg: PathBuf,

        #[arg(
            short = 'B',
            long = "benchmark",
            value_name = "CYCLES",
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Time the generation, repeating it CYCLES times"
        )]
        /// Number of timed generation cycles.
        benchmark: Option<u32>,

        #[arg(
            long = "average",
            requires = "benchmark",
            help = "Print the average time over all benchmark cycles"
        )]
        /// Print the mean cycle time (requires --benchmark).
        average: bool,
    },

    #[command(
        name = "list-solutions",
        about = "List the available solution methods"
    )]
    /// List the available solution methods.
    ListSolutions,
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Handle the `list-solutions` subcommand.
fn handle_list_solutions() {
    println!("Available solutions (code — key — method):");
    for entry in registry::REGISTRY {
        println!("- {} — {} — {}", entry.code, entry.key, entry.summary);
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            degree,
            solution,
            output,
            svg,
            benchmark,
            average,
        } => report_ok(
            cmd::generate(cmd::GenerateOptions {
                degree,
                solution: &solution,
                output: &output,
                svg: &svg,
                benchmark,
                average,
            }),
            "OK!",
        ),
        Commands::ListSolutions => handle_list_solutions(),
    }
}
