//! Real root finding for polynomials with rational coefficients.
//!
//! The solver works in stages. Roots at zero are factored out first, then the
//! remaining polynomial is scaled to integer coefficients and every rational
//! candidate allowed by the rational root theorem is tried. Whatever survives
//! is solved with the quadratic formula when its degree is at most two, or
//! located numerically otherwise.

use crate::{Polynomial, Root};

mod int_poly;
use int_poly::IntPoly;
mod numeric;
mod quadratic;
mod rational;

/// Values at most this far from zero count as zero
pub const DEFAULT_EPSILON: f64 = 1E-10;

/// Step size of the numeric scan
pub const DEFAULT_DELTA: f64 = 1E-4;

/// Consecutive steps the outward scan must look stable for before stopping
pub const DEFAULT_STABLE_STEPS: u32 = 10_000;

/// Root finder configuration.
///
/// The defaults are what [`solve_for_polynomial`] uses. Smaller `delta` finds
/// roots that are closer together at the cost of more evaluations.
///
/// ```
/// use rational_poly::{Polynomial, Solver};
///
/// let p = Polynomial::parse("x^3 - 2").unwrap();
/// let roots = Solver::default().with_delta(1E-3).solve(&p);
/// assert_eq!(roots.len(), 1);
/// assert_eq!(roots[0].display_text(), "1.259921");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Solver {
    epsilon: f64,
    delta: f64,
    stable_steps: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            delta: DEFAULT_DELTA,
            stable_steps: DEFAULT_STABLE_STEPS,
        }
    }
}

impl Solver {
    #[must_use]
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// # Panics
    /// If `delta` is not a positive number
    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        assert!(delta > 0.0, "scan step must be positive");
        self.delta = delta;
        self
    }

    #[must_use]
    pub const fn with_stable_steps(mut self, stable_steps: u32) -> Self {
        self.stable_steps = stable_steps;
        self
    }

    #[must_use]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub const fn delta(&self) -> f64 {
        self.delta
    }

    #[must_use]
    pub const fn stable_steps(&self) -> u32 {
        self.stable_steps
    }

    /// All real roots that could be found, sorted by value.
    ///
    /// A repeated rational root is reported once. The zero polynomial has no
    /// listed roots, see [`Polynomial::is_zero`].
    #[must_use]
    pub fn solve(&self, polynomial: &Polynomial) -> Vec<Root> {
        let terms = polynomial.terms();
        let Some(lowest) = terms.first() else {
            log::debug!("zero polynomial, not listing any roots");
            return vec![];
        };

        let mut roots = vec![];
        if lowest.degree() > 0 {
            roots.push(Root::zero());
        }
        if terms.len() == 1 {
            return roots;
        }

        let mut working = IntPoly::normalized(terms, lowest.degree());
        log::trace!("normalized {{coefficients: {working:?}}}");

        rational::roots(&mut working, &mut roots);

        match working.degree() {
            0 => {}
            1 | 2 => quadratic::roots(&working, &mut roots),
            _ => {
                log::debug!(
                    "falling back to numeric scan {{degree: {}}}",
                    working.degree()
                );
                self.numeric_roots(&working, &mut roots);
            }
        }

        roots.sort();
        roots
    }
}

/// Real roots of `polynomial` with the default [`Solver`].
///
/// ```
/// use rational_poly::{solve_for_polynomial, Polynomial};
///
/// let p = Polynomial::parse("-x^2 + 2x + 1").unwrap();
/// let roots: Vec<String> = solve_for_polynomial(&p)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(roots, vec!["1-sqrt(2)", "1+sqrt(2)"]);
/// ```
#[must_use]
pub fn solve_for_polynomial(polynomial: &Polynomial) -> Vec<Root> {
    Solver::default().solve(polynomial)
}
