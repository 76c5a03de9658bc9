use std::{
    fmt,
    ops::{Mul, Neg},
    str::FromStr,
};

use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};

use crate::error::{ParseError, Result};

/// A single monomial `numerator/denominator * x^degree`.
///
/// The coefficient is an arbitrary precision fraction, always kept in lowest
/// terms with a positive denominator, so two terms with equal value compare
/// equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    coefficient: BigRational,
    degree: u32,
}

impl Term {
    /// Create the term `numerator/denominator * x^degree`.
    ///
    /// ```
    /// use rational_poly::Term;
    ///
    /// let t = Term::new(2, -4, 3);
    /// assert_eq!(*t.numerator(), (-1).into());
    /// assert_eq!(*t.denominator(), 2.into());
    /// assert_eq!(t.to_string(), "-1/2x^3");
    /// ```
    ///
    /// # Panics
    /// If `denominator` is zero.
    #[must_use]
    pub fn new(numerator: i64, denominator: i64, degree: u32) -> Self {
        Self::from_ratio(
            BigRational::new(numerator.into(), denominator.into()),
            degree,
        )
    }

    #[must_use]
    pub const fn from_ratio(coefficient: BigRational, degree: u32) -> Self {
        Self {
            coefficient,
            degree,
        }
    }

    /// The constant `0`
    #[must_use]
    pub fn zero() -> Self {
        Self::from_ratio(BigRational::zero(), 0)
    }

    /// Read a term from its textual form, e.g. `x`, `-x^10`, `2x^2`, `1/4x^5`
    /// or `-4/15`.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the coefficient is not an integer or a
    /// fraction of integers, the denominator is zero, or anything other than
    /// `^` followed by a non-negative integer comes after the `x`.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let (coefficient_text, degree) = match text.split_once('x') {
            None => (text, 0),
            Some((coefficient, power)) => (coefficient.trim_end(), parse_power(power, text)?),
        };
        let coefficient = parse_coefficient(coefficient_text)?;
        Ok(Self::from_ratio(coefficient, degree))
    }

    #[must_use]
    pub const fn numerator(&self) -> &BigInt {
        self.coefficient.numer()
    }

    /// Always positive
    #[must_use]
    pub const fn denominator(&self) -> &BigInt {
        self.coefficient.denom()
    }

    #[must_use]
    pub const fn degree(&self) -> u32 {
        self.degree
    }

    #[must_use]
    pub const fn coefficient(&self) -> &BigRational {
        &self.coefficient
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Evaluate the term at `point`.
    #[must_use]
    pub fn evaluate(&self, point: f64) -> f64 {
        let coefficient = self.coefficient.to_f64().unwrap_or(f64::NAN);
        point.powf(f64::from(self.degree)) * coefficient
    }

    /// Add `other` into `self` if both have the same degree.
    ///
    /// Returns whether the terms were combined. The result may be zero, in
    /// which case the caller is expected to drop it.
    pub fn combine(&mut self, other: &Self) -> bool {
        if self.degree != other.degree {
            return false;
        }
        self.coefficient += &other.coefficient;
        true
    }

    /// Power rule, the derivative of a constant is the zero term.
    ///
    /// ```
    /// use rational_poly::Term;
    ///
    /// assert_eq!(Term::new(2, 3, 3).derivative(), Term::new(2, 1, 2));
    /// assert!(Term::new(2, 3, 0).derivative().is_zero());
    /// ```
    #[must_use]
    pub fn derivative(&self) -> Self {
        if self.degree == 0 {
            return Self::zero();
        }
        Self::from_ratio(
            self.coefficient.clone() * BigInt::from(self.degree),
            self.degree - 1,
        )
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_ratio(self.coefficient.abs(), self.degree)
    }
}

/// Exponent part of a term, i.e. everything after the `x`
fn parse_power(power: &str, text: &str) -> Result<u32> {
    if power.is_empty() {
        return Ok(1);
    }
    let Some(exponent) = power.strip_prefix('^') else {
        return Err(ParseError::unexpected_input(text));
    };
    exponent
        .trim()
        .parse()
        .map_err(|_| ParseError::invalid_degree(text))
}

fn parse_coefficient(text: &str) -> Result<BigRational> {
    match text {
        "" | "+" => return Ok(BigRational::one()),
        "-" => return Ok(-BigRational::one()),
        _ => {}
    }

    let Some((numerator, denominator)) = text.split_once('/') else {
        return parse_integer(text).map(BigRational::from_integer);
    };
    let numerator = parse_integer(numerator)?;
    let denominator = parse_integer(denominator)?;
    if denominator.is_zero() {
        return Err(ParseError::zero_denominator(text));
    }
    Ok(BigRational::new(numerator, denominator))
}

fn parse_integer(text: &str) -> Result<BigInt> {
    let text = text.trim();
    // `BigInt` also accepts digit separators
    if text.contains('_') {
        return Err(ParseError::unexpected_input(text));
    }
    text.parse()
        .map_err(|e| ParseError::invalid_integer(text, e))
}

impl FromStr for Term {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Neg for Term {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_ratio(-self.coefficient, self.degree)
    }
}

impl Mul for &Term {
    type Output = Term;

    /// Product of coefficients, sum of degrees
    ///
    /// # Panics
    /// If the degrees add up to more than `u32::MAX`
    fn mul(self, rhs: Self) -> Term {
        let degree = self
            .degree
            .checked_add(rhs.degree)
            .expect("degree of product overflows u32");
        Term::from_ratio(&self.coefficient * &rhs.coefficient, degree)
    }
}

impl Mul for Term {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numerator = self.numerator();
        let denominator = self.denominator();
        if !denominator.is_one() {
            write!(f, "{numerator}/{denominator}")?;
        } else if self.degree == 0 || !numerator.abs().is_one() {
            write!(f, "{numerator}")?;
        } else if numerator.is_negative() {
            write!(f, "-")?;
        }

        match self.degree {
            0 => Ok(()),
            1 => write!(f, "x"),
            degree => write!(f, "x^{degree}"),
        }
    }
}
