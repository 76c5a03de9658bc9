use num::{BigInt, Signed, Zero};

use super::IntPoly;
use crate::Root;

/// Quadratic formula for whatever is left after the rational roots were
/// factored out. A leftover linear factor only gets here when its
/// coefficients were too large to enumerate candidates for.
pub(super) fn roots(working: &IntPoly, roots: &mut Vec<Root>) {
    debug_assert!(working.degree() <= 2);
    let a = working.coeff(2);
    let b = working.coeff(1);
    let c = working.coeff(0);
    if a.is_zero() {
        if !b.is_zero() {
            roots.push(Root::rational(-c, b));
        }
        return;
    }

    let discriminant: BigInt = &b * &b - 4 * &a * &c;
    log::trace!("quadratic {{a: {a}, b: {b}, c: {c}, discriminant: {discriminant}}}");
    let denominator: BigInt = 2 * a;
    if discriminant.is_positive() {
        roots.push(Root::quadratic(
            -b.clone(),
            denominator.clone(),
            &discriminant,
            false,
        ));
        roots.push(Root::quadratic(-b, denominator, &discriminant, true));
    } else if discriminant.is_zero() {
        roots.push(Root::rational(-b, denominator));
    }
}
