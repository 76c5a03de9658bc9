use num::{BigInt, Zero};

use super::IntPoly;
use crate::{util::natural::factors, Root};

/// Highest degree for which candidates are tested by exact division. Each
/// test takes one step per degree, so sparse polynomials of huge degree go
/// straight to the numeric scan.
pub(super) const MAX_EXACT_DEGREE: u32 = 4096;

/// Try every `±n/q` where `n` divides the constant and `q` divides the
/// leading coefficient, factoring out each root that is found.
///
/// A candidate is a root exactly when synthetic division leaves no remainder,
/// so no floating point test is involved.
pub(super) fn roots(working: &mut IntPoly, roots: &mut Vec<Root>) {
    debug_assert!(!working.constant().is_zero());
    if working.degree() > MAX_EXACT_DEGREE {
        log::debug!(
            "degree too high for exact division {{degree: {}}}",
            working.degree()
        );
        return;
    }
    let (Some(numerators), Some(denominators)) =
        (factors(&working.constant()), factors(&working.leading()))
    else {
        log::warn!(
            "coefficients too large to enumerate rational candidates {{constant: {}, leading: {}}}",
            working.constant(),
            working.leading()
        );
        return;
    };
    log::trace!(
        "rational candidates {{numerators: {numerators:?}, denominators: {denominators:?}}}"
    );

    for n in &numerators {
        for q in &denominators {
            for n in [n.clone(), -n] {
                if working.degree() == 0 {
                    return;
                }
                if factor_out(working, &n, q) {
                    log::debug!("found rational root {{numerator: {n}, denominator: {q}}}");
                    roots.push(Root::rational(n, q.clone()));
                }
            }
        }
    }
}

/// Deflate by `(q * x - n)` for as long as `n/q` is a root, returns whether
/// it was a root at all.
fn factor_out(working: &mut IntPoly, n: &BigInt, q: &BigInt) -> bool {
    let mut found = false;
    while working.degree() > 0 && working.deflate(n, q) {
        found = true;
    }
    found
}
