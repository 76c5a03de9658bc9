// Implementation of arithmetic operators

use std::ops::{Add, Mul, Neg, Sub};

use itertools::iproduct;
use num::BigRational;

use crate::{Polynomial, Term};

impl Polynomial {
    /// Monic polynomial with the given rational roots, repeated roots give
    /// repeated factors.
    ///
    /// ```
    /// use rational_poly::Polynomial;
    /// use num::BigRational;
    ///
    /// let p = Polynomial::from_roots(&[
    ///     BigRational::from_integer((-1).into()),
    ///     BigRational::from_integer((-2).into()),
    ///     BigRational::from_integer((-3).into()),
    /// ]);
    /// assert_eq!(p.to_string(), "x^3 + 6x^2 + 11x + 6");
    /// ```
    #[must_use]
    pub fn from_roots(roots: &[BigRational]) -> Self {
        let one = Self::from(Term::new(1, 1, 0));
        roots.iter().fold(one, |acc, root| {
            let factor: Self = [Term::new(1, 1, 1), Term::from_ratio(-root.clone(), 0)]
                .into_iter()
                .collect();
            acc * factor
        })
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            terms: self.terms.into_iter().map(Neg::neg).collect(),
        }
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self.extend(rhs);
        self
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        iproduct!(self.terms.iter(), rhs.terms.iter())
            .map(|(a, b)| a * b)
            .collect()
    }
}

impl Mul<Term> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Term) -> Self {
        self.terms.into_iter().map(|t| &t * &rhs).collect()
    }
}
