//! Minimal example: generate a degree-2 Moore curve and print its points.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // 16-point Moore curve on a 4x4 grid (degree 2)
    let curve = moorecurve::generator_from_name("graycode", 2)?;
    println!(
        "{} at degree {}: {} points",
        curve.name(),
        curve.degree(),
        curve.length()
    );

    let points = curve.points()?;
    for p in &points {
        println!("{}, {}", p.x, p.y);
    }

    assert_eq!(points.len() as u32, curve.length());

    Ok(())
}
