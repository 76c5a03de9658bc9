//! integer utilities for factoring and normalizing coefficients

use num::{BigInt, Integer, One, Signed, ToPrimitive, Zero};

/// Largest magnitude whose divisors are enumerated by [`factors`].
pub(crate) const FACTOR_LIMIT: u64 = 1_000_000_000_000;

/// Number of trial divisors [`largest_square_factor`] tries before it only
/// checks whether the rest is a perfect square.
const SQUARE_TRIAL_LIMIT: u32 = 100_000;

/// All positive divisors of `|a|` in ascending order, found by trial division.
///
/// `0` has no divisors in this sense and yields an empty list. Returns `None`
/// if `|a|` exceeds [`FACTOR_LIMIT`].
pub(crate) fn factors(a: &BigInt) -> Option<Vec<BigInt>> {
    let a = a.magnitude().to_u64().filter(|&a| a <= FACTOR_LIMIT)?;
    let mut small = vec![];
    let mut large = vec![];
    let mut i = 1;
    while i <= a / i {
        if a % i == 0 {
            small.push(i);
            if i != a / i {
                large.push(a / i);
            }
        }
        i += 1;
    }
    small.extend(large.into_iter().rev());
    Some(small.into_iter().map(BigInt::from).collect())
}

/// The largest `m` such that `m * m` divides `a`.
///
/// The remaining factor `a / (m * m)` is square-free, so this is what gets
/// pulled out of a radical, e.g. `sqrt(200) = 10 * sqrt(2)`.
///
/// Primes are divided out while they are at most the cube root of what is
/// left, after which the rest has at most two prime factors and is either a
/// square or square-free. For very large `a` the trial division gives up
/// early and the result may miss square factors made of two large primes.
pub(crate) fn largest_square_factor(a: &BigInt) -> BigInt {
    let mut rest = a.abs();
    let mut result = BigInt::one();
    if rest.is_zero() {
        return result;
    }
    let root = rest.sqrt();
    if &root * &root == rest {
        return root;
    }
    let mut n = BigInt::from(2);
    for _ in 0..SQUARE_TRIAL_LIMIT {
        if &n * &n * &n > rest {
            break;
        }
        let mut exponent = 0;
        while (&rest % &n).is_zero() {
            rest /= &n;
            exponent += 1;
        }
        if exponent > 1 {
            result *= n.pow(exponent / 2);
        }
        n += 1;
    }
    let root = rest.sqrt();
    if &root * &root == rest {
        result *= root;
    }
    result
}

/// Least common multiple of every value, `1` for an empty iterator.
pub(crate) fn lcm_of<'a>(values: impl IntoIterator<Item = &'a BigInt>) -> BigInt {
    values.into_iter().fold(BigInt::one(), |acc, v| {
        if v > &BigInt::one() {
            acc.lcm(v)
        } else {
            acc
        }
    })
}
