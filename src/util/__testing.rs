//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;
use itertools::Itertools;
use num::{BigRational, Zero};

use crate::{Polynomial, Root, Term};

/// Infinite stream of fractions `n/d` with `|n| <= max_numerator` and
/// `1 <= d <= max_denominator`, reduced.
pub struct RandStreamRational {
    state: Rng,
    max_numerator: i64,
    max_denominator: i64,
}

impl RandStreamRational {
    #[must_use]
    pub fn new(seed: u64, max_numerator: i64, max_denominator: i64) -> Self {
        assert!(max_numerator >= 0, "maximum numerator should be non-negative");
        assert!(max_denominator >= 1, "maximum denominator should be positive");
        Self {
            state: Rng::with_seed(seed),
            max_numerator,
            max_denominator,
        }
    }
}

impl Iterator for RandStreamRational {
    type Item = BigRational;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.state.i64(-self.max_numerator..=self.max_numerator);
        let d = self.state.i64(1..=self.max_denominator);
        Some(BigRational::new(n.into(), d.into()))
    }
}

/// Infinite stream of polynomials with random rational coefficients, every
/// degree up to `max_degree` is present with probability one half.
pub struct PolyStream {
    state: Rng,
    coefficients: RandStreamRational,
    max_degree: u32,
}

impl PolyStream {
    #[must_use]
    pub fn new(seed: u64, max_degree: u32, max_numerator: i64, max_denominator: i64) -> Self {
        let mut state = Rng::with_seed(seed);
        let coefficients = RandStreamRational::new(state.u64(..), max_numerator, max_denominator);
        Self {
            state,
            coefficients,
            max_degree,
        }
    }
}

impl Iterator for PolyStream {
    type Item = Polynomial;

    fn next(&mut self) -> Option<Self::Item> {
        let mut poly = Polynomial::new();
        for degree in 0..=self.max_degree {
            let coefficient = self.coefficients.next()?;
            if self.state.bool() {
                poly.add_term(Term::from_ratio(coefficient, degree));
            }
        }
        Some(poly)
    }
}

/// Generate one test case where the roots are known, the polynomial is the
/// product of `(x - r)` for each root, scaled by a non-zero constant.
///
/// # Panics
/// If `scale_stream` runs out of non-zero values
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = BigRational>,
    mut scale_stream: impl Iterator<Item = BigRational>,
    degree: usize,
) -> (Polynomial, Vec<BigRational>) {
    let roots = roots_stream.take(degree).collect_vec();
    let scale = scale_stream
        .find(|s| !s.is_zero())
        .expect("rng stream should be infinite");
    let poly = Polynomial::from_roots(&roots) * Term::from_ratio(scale, 0);
    (poly, roots)
}

/// Like [`test_case_roots`], the first root is repeated `multiplicity` extra
/// times.
///
/// # Panics
/// If `scale_stream` runs out of non-zero values, or `multiplicity >= degree`
pub fn test_case_multiple_roots(
    roots_stream: impl Iterator<Item = BigRational>,
    scale_stream: impl Iterator<Item = BigRational>,
    degree: usize,
    multiplicity: usize,
) -> (Polynomial, Vec<BigRational>) {
    assert!(multiplicity < degree, "need at least one distinct root");
    let mut roots = roots_stream.take(degree - multiplicity).collect_vec();
    let first_root = roots[0].clone();
    roots.extend(std::iter::repeat(first_root).take(multiplicity));
    test_case_roots(roots.into_iter(), scale_stream, degree)
}

/// Check that exactly the distinct `expected` roots were found, each one as
/// an exact fraction.
#[must_use]
pub fn check_roots(found: &[Root], expected: &[BigRational]) -> bool {
    let expected = expected.iter().sorted().dedup().collect_vec();
    found.len() == expected.len()
        && found
            .iter()
            .zip(expected)
            .all(|(f, e)| f.is_exact() && f.display_text() == e.to_string())
}

/// Check that `poly` evaluates to at most `tol` in magnitude at every root.
#[must_use]
pub fn check_values(poly: &Polynomial, roots: &[Root], tol: f64) -> bool {
    roots.iter().all(|r| poly.evaluate(r.value()).abs() <= tol)
}
