use std::fmt;

use num::{BigRational, Zero};

use crate::Term;

mod calculus;
mod conversions;
mod impl_num;
mod parse;
mod summary;
pub use summary::Summary;

/// A polynomial in one variable with rational coefficients.
///
/// Terms are kept sorted by ascending degree, with at most one term per
/// degree and no zero terms. The empty polynomial is the zero polynomial.
///
/// ```
/// use rational_poly::{Polynomial, Term};
///
/// let mut p = Polynomial::new();
/// p.add_term(Term::new(1, 1, 1));
/// p.add_term(Term::new(2, 1, 2));
/// p.add_term(Term::new(-3, 1, 0));
/// assert_eq!(p.to_string(), "2x^2 + x - 3");
/// assert_eq!(p.evaluate(2.0), 7.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// The zero polynomial
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a term, combining it with the existing term of the same degree.
    ///
    /// Adding a zero term does nothing, and a term which cancels out an
    /// existing one removes it.
    pub fn add_term(&mut self, term: Term) {
        if term.is_zero() {
            return;
        }

        match self.terms.binary_search_by_key(&term.degree(), Term::degree) {
            Ok(i) => {
                let combined = self.terms[i].combine(&term);
                debug_assert!(combined, "binary search matched on degree");
                if self.terms[i].is_zero() {
                    self.terms.remove(i);
                }
            }
            Err(i) => self.terms.insert(i, term),
        }
    }

    /// Evaluate the polynomial at `point`.
    #[must_use]
    pub fn evaluate(&self, point: f64) -> f64 {
        self.terms.iter().map(|t| t.evaluate(point)).sum()
    }

    /// Terms in ascending order of degree
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    #[must_use]
    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }

    /// Highest degree with a non-zero coefficient, `None` for the zero
    /// polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.leading_term().map(Term::degree)
    }

    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.last()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The value at `x = 0`, i.e. the constant term.
    ///
    /// ```
    /// use rational_poly::Polynomial;
    /// use num::BigRational;
    ///
    /// let p = Polynomial::parse("x^2 + 7/15x - 4/15").unwrap();
    /// assert_eq!(p.y_intercept(), BigRational::new((-4).into(), 15.into()));
    /// ```
    #[must_use]
    pub fn y_intercept(&self) -> BigRational {
        match self.terms.first() {
            Some(t) if t.degree() == 0 => t.coefficient().clone(),
            _ => BigRational::zero(),
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.terms.iter().rev();
        let Some(leading) = iter.next() else {
            return write!(f, "0");
        };
        write!(f, "{leading}")?;
        for term in iter {
            if term.is_negative() {
                write!(f, " - {}", term.abs())?;
            } else {
                write!(f, " + {term}")?;
            }
        }
        Ok(())
    }
}
