use std::fmt;

use itertools::Itertools;
use num::BigRational;

use crate::{solve_for_polynomial, Polynomial, Root};

impl Polynomial {
    /// Real roots, i.e. solutions of `p(x) = 0`, in ascending order.
    ///
    /// The zero polynomial has no listed roots.
    #[must_use]
    pub fn x_intercepts(&self) -> Vec<Root> {
        solve_for_polynomial(self)
    }

    /// Roots of the first derivative, in ascending order.
    #[must_use]
    pub fn critical_points(&self) -> Vec<Root> {
        solve_for_polynomial(&self.derivative())
    }

    /// Roots of the second derivative, in ascending order.
    #[must_use]
    pub fn inflection_points(&self) -> Vec<Root> {
        solve_for_polynomial(&self.nth_derivative(2))
    }

    /// Everything a reader usually wants to know about the graph of `self`.
    ///
    /// ```
    /// use rational_poly::Polynomial;
    ///
    /// let summary = Polynomial::parse("x^3 - x").unwrap().summary();
    /// assert_eq!(summary.to_string(), "\
    /// x-intercepts: [-1, 0, 1]
    /// y-intercept: 0
    /// critical points: [-sqrt(3)/3, sqrt(3)/3]
    /// inflection points: [0]");
    /// ```
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            is_zero: self.is_zero(),
            x_intercepts: self.x_intercepts(),
            y_intercept: self.y_intercept(),
            critical_points: self.critical_points(),
            inflection_points: self.inflection_points(),
        }
    }
}

/// Intercepts, critical points and inflection points of a polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    /// The polynomial was identically zero, every real number is a root even
    /// though `x_intercepts` is empty
    pub is_zero: bool,
    pub x_intercepts: Vec<Root>,
    pub y_intercept: BigRational,
    pub critical_points: Vec<Root>,
    pub inflection_points: Vec<Root>,
}

fn fmt_roots(roots: &[Root]) -> String {
    format!("[{}]", roots.iter().join(", "))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x-intercepts: {}", fmt_roots(&self.x_intercepts))?;
        writeln!(f, "y-intercept: {}", self.y_intercept)?;
        writeln!(f, "critical points: {}", fmt_roots(&self.critical_points))?;
        write!(f, "inflection points: {}", fmt_roots(&self.inflection_points))
    }
}
