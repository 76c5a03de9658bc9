use std::{cmp::Ordering, fmt};

use num::{BigInt, BigRational, Integer, One, Signed, ToPrimitive, Zero};

use crate::util::{
    doc_macros::approximate_display, natural::largest_square_factor, real::fmt_half_up,
};

/// Number of decimals shown for approximate roots
pub const DISPLAY_DECIMALS: u32 = 6;

/// A real root of a polynomial, i.e. a solution of `p(x) = 0`.
///
/// Roots are only produced by the solver. The display text is the most
/// exact representation that was found, in order of preference: an integer,
/// a reduced fraction, a quadratic surd like `1+2sqrt(3)/5`, or a decimal
/// approximation.
///
#[doc = approximate_display!()]
/// Roots are ordered by their numeric value.
#[derive(Clone, Debug)]
pub struct Root {
    value: f64,
    display: String,
    exact: bool,
}

impl Root {
    /// The root `x = 0`
    pub(crate) fn zero() -> Self {
        Self::rational(BigInt::zero(), BigInt::one())
    }

    /// The rational root `numerator / denominator`
    pub(crate) fn rational(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        let ratio = BigRational::new(numerator, denominator);
        Self {
            value: ratio.to_f64().unwrap_or(f64::NAN),
            display: ratio.to_string(),
            exact: true,
        }
    }

    /// One of the roots `(numerator ± sqrt(radicand)) / denominator` given by
    /// the quadratic formula. The sign of `denominator` is moved onto
    /// `numerator` first, `positive` then selects the sign in front of the
    /// radical.
    pub(crate) fn quadratic(
        mut numerator: BigInt,
        mut denominator: BigInt,
        radicand: &BigInt,
        positive: bool,
    ) -> Self {
        debug_assert!(!denominator.is_zero());
        debug_assert!(!radicand.is_negative());
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        if !radicand.is_positive() {
            return Self::rational(numerator, denominator);
        }

        let mut outside = largest_square_factor(radicand);
        let inside = radicand / (&outside * &outside);
        if inside.is_one() {
            // perfect square, the root is rational after all
            let offset = if positive { outside } else { -outside };
            return Self::rational(numerator + offset, denominator);
        }

        let value = quadratic_value(&numerator, &denominator, radicand, positive);

        let gcd = numerator.gcd(&denominator.gcd(&outside));
        numerator /= &gcd;
        denominator /= &gcd;
        outside /= &gcd;

        let mut display = String::new();
        if !numerator.is_zero() {
            display.push_str(&numerator.to_string());
            display.push(if positive { '+' } else { '-' });
        } else if !positive {
            display.push('-');
        }
        if !outside.is_one() {
            display.push_str(&outside.to_string());
        }
        display.push_str(&format!("sqrt({inside})"));
        if !denominator.is_one() {
            display.push_str(&format!("/{denominator}"));
        }

        Self {
            value,
            display,
            exact: true,
        }
    }

    /// A root that was only located numerically
    pub(crate) fn approximate(value: f64) -> Self {
        Self {
            value,
            display: fmt_half_up(value, DISPLAY_DECIMALS),
            exact: false,
        }
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Whether [`Root::display_text`] is the exact value rather than a
    /// decimal approximation.
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        self.exact
    }
}

/// `(numerator ± sqrt(radicand)) / denominator` in floating point.
///
/// When the two terms of the numerator have opposite signs they cancel, so
/// the root is computed from its conjugate `(numerator² - radicand) /
/// (denominator * (numerator ∓ sqrt(radicand)))` instead.
fn quadratic_value(
    numerator: &BigInt,
    denominator: &BigInt,
    radicand: &BigInt,
    positive: bool,
) -> f64 {
    let to_f64 = |x: &BigInt| x.to_f64().unwrap_or(f64::NAN);
    let sqrt = to_f64(radicand).sqrt();
    let sqrt = if positive { sqrt } else { -sqrt };
    let n = to_f64(numerator);
    if n != 0.0 && n.is_sign_positive() != sqrt.is_sign_positive() {
        let product = numerator * numerator - radicand;
        to_f64(&product) / (to_f64(denominator) * (n - sqrt))
    } else {
        (n + sqrt) / to_f64(denominator)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

impl PartialEq for Root {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Root {}

impl PartialOrd for Root {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Root {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rational(numerator: i64, denominator: i64) -> Root {
        Root::rational(numerator.into(), denominator.into())
    }

    fn quadratic(numerator: i64, denominator: i64, radicand: i64, positive: bool) -> Root {
        Root::quadratic(
            numerator.into(),
            denominator.into(),
            &radicand.into(),
            positive,
        )
    }

    #[test]
    fn zeroes() {
        for root in [
            Root::zero(),
            rational(0, 1),
            rational(0, 2),
            quadratic(0, 2, 0, true),
        ] {
            assert_eq!(root.value(), 0.0);
            assert_eq!(root.display_text(), "0");
        }
    }

    #[test]
    fn positives() {
        let half = rational(2, 4);
        assert_eq!(half.value(), 0.5);
        assert_eq!(half.display_text(), "1/2");

        let surd = quadratic(2, 4, 10, true);
        assert!((surd.value() - 1.290_569_415_042_095).abs() < 1E-15);
        assert_eq!(surd.display_text(), "2+sqrt(10)/4");
    }

    #[test]
    fn negatives() {
        let r1 = rational(-2, 4);
        assert_eq!(r1.value(), -0.5);
        assert_eq!(r1.display_text(), "-1/2");

        let r2 = rational(2, -4);
        assert_eq!(r1.value(), r2.value());
        assert_eq!(r1.display_text(), r2.display_text());

        let r3 = quadratic(2, -4, 10, true);
        assert!((r3.value() - 0.290_569_415_042_094_9).abs() < 1E-15);
        assert_eq!(r3.display_text(), "-2+sqrt(10)/4");
    }

    #[test]
    fn quadratic_forms() {
        let r = quadratic(1, 1, 0, true);
        assert_eq!(r.value(), 1.0);
        assert_eq!(r.display_text(), "1");

        let r = quadratic(0, 1, 2, true);
        assert_eq!(r.value(), std::f64::consts::SQRT_2);
        assert_eq!(r.display_text(), "sqrt(2)");

        let r = quadratic(0, 1, 2, false);
        assert_eq!(r.display_text(), "-sqrt(2)");

        // (2 - sqrt(8)) / 2 = 1 - sqrt(2)
        let r = quadratic(2, 2, 8, false);
        assert_eq!(r.display_text(), "1-sqrt(2)");
        assert!((r.value() - (1.0 - std::f64::consts::SQRT_2)).abs() < 1E-15);

        // (3 + sqrt(12)) / 5 = 3+2sqrt(3)/5
        let r = quadratic(3, 5, 12, true);
        assert_eq!(r.display_text(), "3+2sqrt(3)/5");

        // perfect squares collapse to rationals
        let r = quadratic(1, 4, 9, false);
        assert_eq!(r.display_text(), "-1/2");
        assert!(r.is_exact());
    }

    #[test]
    fn approximate() {
        let r = Root::approximate(46.415_888_336_127_79);
        assert_eq!(r.display_text(), "46.415888");
        assert!(!r.is_exact());
        assert_eq!(r.to_string(), "46.415888");
    }

    #[test]
    fn ordering() {
        let mut roots = vec![
            Root::approximate(1.5),
            rational(-3, 1),
            quadratic(0, 1, 2, true),
            Root::zero(),
        ];
        roots.sort();
        let values: Vec<f64> = roots.iter().map(Root::value).collect();
        assert_eq!(values, vec![-3.0, 0.0, std::f64::consts::SQRT_2, 1.5]);
        assert!(rational(1, 3) < rational(1, 2));
    }

    #[test]
    fn beyond_i64() {
        let big: BigInt = BigInt::from(i64::MAX) * 10;
        let r = Root::rational(big.clone(), BigInt::from(20));
        assert_eq!(r.display_text(), "9223372036854775807/2");
        assert!((r.value() - 4.611_686_018_427_388e18).abs() < 1E4);

        // roots of x^2 + 4000000000x + 1
        let b = BigInt::from(4_000_000_000_i64);
        let discriminant = &b * &b - 4;
        let small = Root::quadratic(-b.clone(), BigInt::from(2), &discriminant, true);
        let large = Root::quadratic(-b, BigInt::from(2), &discriminant, false);
        assert!(small.is_exact());
        assert!((small.value() + 2.5E-10).abs() < 1E-20);
        assert!((large.value() + 4E9).abs() < 1E-3);
        assert!(large < small);
    }

    #[test]
    fn no_cancellation() {
        // x^2 + 100000000x - 1 has a root near 1e-8
        let r = quadratic(-100_000_000, 2, 10_000_000_000_000_004, true);
        assert!((r.value() - 1E-8).abs() < 1E-20);

        let r = quadratic(3, 1, 2, false);
        assert!((r.value() - (3.0 - std::f64::consts::SQRT_2)).abs() < 1E-15);
    }
}
