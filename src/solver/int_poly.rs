use std::fmt;

use num::{BigInt, Integer, ToPrimitive, Zero};

use crate::{util::natural::lcm_of, Term};

/// Polynomial with integer coefficients, stored as `(degree, coefficient)`
/// pairs in ascending order of degree. Zero coefficients are left out so that
/// sparse polynomials of huge degree stay small.
///
/// The constant and the leading coefficient are non-zero, which holds after
/// [`IntPoly::normalized`] and is kept by exact deflation.
#[derive(Clone, PartialEq, Eq)]
pub(super) struct IntPoly(Vec<(u32, BigInt)>);

impl IntPoly {
    /// Scale `terms` by the lcm of their denominators and shift every degree
    /// down by `shift`.
    ///
    /// `terms` must be sorted by ascending degree with the lowest degree equal
    /// to `shift`.
    pub(super) fn normalized(terms: &[Term], shift: u32) -> Self {
        debug_assert!(terms.first().is_some_and(|t| t.degree() == shift));
        let lcm = lcm_of(terms.iter().map(Term::denominator));
        Self(
            terms
                .iter()
                .map(|t| (t.degree() - shift, t.numerator() * (&lcm / t.denominator())))
                .collect(),
        )
    }

    pub(super) fn degree(&self) -> u32 {
        self.0.last().map_or(0, |(d, _)| *d)
    }

    pub(super) fn constant(&self) -> BigInt {
        self.coeff(0)
    }

    pub(super) fn leading(&self) -> BigInt {
        self.0.last().map_or_else(BigInt::zero, |(_, c)| c.clone())
    }

    /// Coefficient of `x^degree`, zero if there is no such term
    pub(super) fn coeff(&self, degree: u32) -> BigInt {
        self.0
            .binary_search_by_key(&degree, |(d, _)| *d)
            .map_or_else(|_| BigInt::zero(), |i| self.0[i].1.clone())
    }

    pub(super) fn eval(&self, x: f64) -> f64 {
        self.0.iter().map(|(d, c)| to_f64(c) * pow(x, *d)).sum()
    }

    /// Value of the leading term alone
    pub(super) fn eval_leading(&self, x: f64) -> f64 {
        to_f64(&self.leading()) * pow(x, self.degree())
    }

    /// Divide by `(denominator * x - numerator)` using synthetic division.
    ///
    /// Returns `false` and leaves `self` untouched if the division has a
    /// remainder, i.e. `numerator / denominator` is not an exact root. Takes
    /// one step per degree, gaps between terms included.
    pub(super) fn deflate(&mut self, numerator: &BigInt, denominator: &BigInt) -> bool {
        debug_assert!(denominator > &BigInt::zero());
        let degree = self.degree();
        if degree == 0 {
            return false;
        }
        let mut coeffs = self.0.iter().rev().peekable();
        let mut quotient = vec![];
        let mut carry = BigInt::zero();
        for i in (1..=degree).rev() {
            let mut sum = &carry * numerator;
            if let Some((_, c)) = coeffs.next_if(|(d, _)| *d == i) {
                sum += c;
            }
            let (next, remainder) = sum.div_rem(denominator);
            if !remainder.is_zero() {
                return false;
            }
            if !next.is_zero() {
                quotient.push((i - 1, next.clone()));
            }
            carry = next;
        }
        let mut remainder = &carry * numerator;
        if let Some((_, c)) = coeffs.next_if(|(d, _)| *d == 0) {
            remainder += c;
        }
        if !remainder.is_zero() {
            return false;
        }
        quotient.reverse();
        self.0 = quotient;
        true
    }
}

fn to_f64(x: &BigInt) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

fn pow(x: f64, exp: u32) -> f64 {
    i32::try_from(exp).map_or_else(|_| x.powf(f64::from(exp)), |exp| x.powi(exp))
}

impl fmt::Debug for IntPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(d, c)| (d, c)))
            .finish()
    }
}

#[cfg(test)]
mod test {
    use num::{BigInt, ToPrimitive};

    use super::IntPoly;
    use crate::Polynomial;

    fn normalized(text: &str) -> IntPoly {
        let p = Polynomial::parse(text).unwrap();
        let shift = p.terms()[0].degree();
        IntPoly::normalized(p.terms(), shift)
    }

    fn coeffs(p: &IntPoly) -> Vec<(u32, i64)> {
        p.0.iter().map(|(d, c)| (*d, c.to_i64().unwrap())).collect()
    }

    fn deflate(p: &mut IntPoly, numerator: i64, denominator: i64) -> bool {
        p.deflate(&BigInt::from(numerator), &BigInt::from(denominator))
    }

    #[test]
    fn normalize() {
        assert_eq!(
            coeffs(&normalized("x^2 + 7/15x + -4/15")),
            vec![(0, -4), (1, 7), (2, 15)]
        );
        assert_eq!(coeffs(&normalized("1/2x^3 + 1/3x^2")), vec![(0, 2), (1, 3)]);
        assert_eq!(coeffs(&normalized("x^4 - x^2")), vec![(0, -1), (2, 1)]);
    }

    #[test]
    fn normalize_beyond_i64() {
        let p = normalized("1/1000003x^3 + 1/1000033x^2 + 1/1000037x + 1/1000039");
        let lcm = BigInt::from(1_000_003_i64)
            * BigInt::from(1_000_033_i64)
            * BigInt::from(1_000_037_i64)
            * BigInt::from(1_000_039_i64);
        assert_eq!(p.degree(), 3);
        assert_eq!(p.leading(), &lcm / 1_000_003);
        assert_eq!(p.coeff(2), &lcm / 1_000_033);
        assert_eq!(p.coeff(1), &lcm / 1_000_037);
        assert_eq!(p.constant(), &lcm / 1_000_039);
        assert!(p.leading().to_i64().is_none());
    }

    #[test]
    fn huge_degree() {
        let p = normalized("x^4000000000 + 1");
        assert_eq!(p.degree(), 4_000_000_000);
        assert_eq!(p.0.len(), 2);
        assert!((p.eval(1.0) - 2.0).abs() < f64::EPSILON);
        assert!((p.eval(-1.0) - 2.0).abs() < f64::EPSILON);
        assert!((p.eval(0.5) - 1.0).abs() < f64::EPSILON);
        assert!(p.eval(1.5).is_infinite());
        assert!(p.eval_leading(1.5).is_infinite());
        assert!((p.eval_leading(-1.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accessors() {
        let p = normalized("3x^3 - x + 2");
        assert_eq!(p.degree(), 3);
        assert_eq!(p.constant(), BigInt::from(2));
        assert_eq!(p.leading(), BigInt::from(3));
        assert_eq!(p.coeff(2), BigInt::from(0));
        assert_eq!(p.coeff(7), BigInt::from(0));
        assert_eq!(format!("{p:?}"), "{0: 2, 1: -1, 3: 3}");
    }

    #[test]
    fn eval() {
        let p = normalized("x^3 + 6x^2 + 11x + 6");
        assert!(p.eval(-1.0).abs() < f64::EPSILON);
        assert!((p.eval(1.0) - 24.0).abs() < f64::EPSILON);
        assert!((p.eval_leading(2.0) - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn deflate_exact() {
        let mut p = normalized("x^3 + 6x^2 + 11x + 6");
        assert!(deflate(&mut p, -1, 1));
        assert_eq!(coeffs(&p), vec![(0, 6), (1, 5), (2, 1)]);
        assert!(deflate(&mut p, -2, 1));
        assert_eq!(coeffs(&p), vec![(0, 3), (1, 1)]);
        assert!(deflate(&mut p, -3, 1));
        assert_eq!(coeffs(&p), vec![(0, 1)]);
        assert!(!deflate(&mut p, 1, 1));
    }

    #[test]
    fn deflate_rational() {
        // 15x^2 + 7x - 4 = (5x + 4)(3x - 1)
        let mut p = normalized("x^2 + 7/15x + -4/15");
        assert!(deflate(&mut p, 1, 3));
        assert_eq!(coeffs(&p), vec![(0, 4), (1, 5)]);
    }

    #[test]
    fn deflate_across_gaps() {
        // x^4 - 1 = (x - 1)(x^3 + x^2 + x + 1)
        let mut p = normalized("x^4 - 1");
        assert!(deflate(&mut p, 1, 1));
        assert_eq!(coeffs(&p), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

        // x^3 + 1 = (x + 1)(x^2 - x + 1)
        let mut p = normalized("x^3 + 1");
        assert!(deflate(&mut p, -1, 1));
        assert_eq!(coeffs(&p), vec![(0, 1), (1, -1), (2, 1)]);

        // 8x^3 - 1 = (2x - 1)(4x^2 + 2x + 1)
        let mut p = normalized("8x^3 - 1");
        assert!(deflate(&mut p, 1, 2));
        assert_eq!(coeffs(&p), vec![(0, 1), (1, 2), (2, 4)]);
    }

    #[test]
    fn deflate_not_a_root() {
        let mut p = normalized("x^2 - 2");
        let before = p.clone();
        assert!(!deflate(&mut p, 1, 1));
        assert!(!deflate(&mut p, 3, 2));
        assert_eq!(p, before);
    }

    #[test]
    fn deflate_near_miss() {
        // 7907/7919 is a root, 7906/7919 and 7907/7918 are within 1e-4 of it
        let mut p = normalized("62710561x^3 - 62615533x^2 + 7919x - 7907");
        let before = p.clone();
        assert!(!deflate(&mut p, 7906, 7919));
        assert!(!deflate(&mut p, 7907, 7918));
        assert_eq!(p, before);
        assert!(deflate(&mut p, 7907, 7919));
        assert_eq!(coeffs(&p), vec![(0, 1), (2, 7919)]);
    }
}
