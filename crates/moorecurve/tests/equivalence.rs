//! Property-based tests verifying cross-algorithm equivalence.
//!
//! No independent ground truth for the point sequence exists, so the three
//! generators are checked against each other: any transcription error in one
//! method surfaces as a disagreement here.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use moorecurve::{generator_from_name, generator_from_solution, registry};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// All three generators agree on a sampled vertex of a random curve.
    #[test]
    fn solutions_agree_at_sampled_vertices(degree in 1u32..=7, sample in 0u32..1 << 14) {
        let reference = generator_from_name("rewrite", degree)
            .expect("rewrite constructs")
            .points()
            .expect("rewrite generates");
        let index = (sample as usize) % reference.len();
        for key in &registry::SOLUTION_NAMES[1..] {
            let other = generator_from_name(key, degree)
                .expect("solution constructs")
                .points()
                .expect("solution generates");
            prop_assert_eq!(reference.len(), other.len());
            prop_assert_eq!(
                reference[index],
                other[index],
                "{} disagrees at degree {} index {}",
                key,
                degree,
                index
            );
        }
    }

    /// Consecutive points are always lattice neighbours.
    #[test]
    fn sampled_steps_are_unit_steps(degree in 1u32..=7, sample in 1u32..1 << 14) {
        for key in registry::SOLUTION_NAMES {
            let points = generator_from_name(key, degree)
                .expect("solution constructs")
                .points()
                .expect("solution generates");
            let index = (sample as usize) % (points.len() - 1).max(1);
            prop_assert_eq!(
                points[index].manhattan(&points[index + 1]),
                1,
                "{} step at degree {} index {}",
                key,
                degree,
                index
            );
        }
    }

    /// Numeric solution codes select the same generator as their keys.
    #[test]
    fn codes_match_keys(degree in 1u32..=5) {
        for entry in registry::REGISTRY {
            let by_key = generator_from_name(entry.key, degree).expect("key constructs");
            let by_code = generator_from_solution(entry.code, degree).expect("code constructs");
            prop_assert_eq!(by_key.points().expect("key"), by_code.points().expect("code"));
        }
    }
}

// ============================================================================
// Edge case tests (non-property-based)
// ============================================================================

/// First, middle, and last vertices agree across solutions at a larger degree
/// than the exhaustive comparison covers.
#[test]
fn edge_vertices_agree_at_degree_9() {
    let reference = generator_from_name("rewrite", 9)
        .expect("rewrite constructs")
        .points()
        .expect("rewrite generates");
    let probes = [0, reference.len() / 2, reference.len() - 1];
    for key in &registry::SOLUTION_NAMES[1..] {
        let other = generator_from_name(key, 9)
            .expect("solution constructs")
            .points()
            .expect("solution generates");
        for &probe in &probes {
            assert_eq!(
                reference[probe], other[probe],
                "{key} disagrees at degree 9 index {probe}"
            );
        }
    }
}

/// Unknown codes are rejected the same way unknown keys are.
#[test]
fn unknown_selectors_are_rejected() {
    assert!(generator_from_name("zorder", 2).is_err());
    assert!(generator_from_solution(3, 2).is_err());
    assert!(generator_from_solution(u32::MAX, 2).is_err());
}
