use super::{IntPoly, Solver};
use crate::{
    util::real::{approx_zero, opposite_signs},
    Root,
};

impl Solver {
    /// Locate real roots by scanning for sign changes and bisecting.
    ///
    /// `[-1, 1]` is scanned with a fixed step. Outside of it the scan walks
    /// away from the origin looking at `p(x)` divided by its leading term,
    /// which tends to one. The walk stops once that ratio has been positive,
    /// close to one and barely changing for `stable_steps` consecutive steps.
    pub(super) fn numeric_roots(&self, working: &IntPoly, roots: &mut Vec<Root>) {
        self.scan_unit_interval(working, roots);
        self.scan_outward(working, roots, 1.0);
        self.scan_outward(working, roots, -1.0);
    }

    /// Steps are counted rather than accumulated, and the last one is
    /// clamped, so the scan ends exactly at `1` where the outward scan starts.
    fn scan_unit_interval(&self, working: &IntPoly, roots: &mut Vec<Root>) {
        let steps = (2.0 / self.delta).ceil();
        let mut previous = -1.0;
        let mut last = working.eval(previous);
        let mut i = 1.0;
        while i <= steps {
            let point = if i < steps {
                self.delta.mul_add(i, -1.0).min(1.0)
            } else {
                1.0
            };
            let current = working.eval(point);
            if opposite_signs(last, current) {
                roots.push(self.bisect(working, previous, point));
            }
            previous = point;
            last = current;
            i += 1.0;
        }
    }

    /// `direction` is `1.0` or `-1.0`
    fn scan_outward(&self, working: &IntPoly, roots: &mut Vec<Root>, direction: f64) {
        let step = self.delta * direction;
        let ratio = |x: f64| working.eval(x) / working.eval_leading(x);

        let mut point = direction;
        let mut last = ratio(point);
        let mut last_difference = 1.0_f64;
        let mut stable = 0;
        while last < 0.0 || stable < self.stable_steps {
            point += step;
            let current = ratio(point);
            if !current.is_finite() {
                log::warn!("scan left the representable range {{point: {point}}}");
                break;
            }
            if opposite_signs(last, current) {
                roots.push(self.bisect(working, point - step, point));
                stable = 0;
            }
            if last > 0.0 && last < 2.0 && last_difference.abs() < self.delta / 10.0 {
                stable += 1;
            } else {
                stable = 0;
            }
            last_difference = last - current;
            last = current;
        }
        log::trace!("outward scan done {{direction: {direction}, point: {point}}}");
    }

    /// Bisect a bracket with a sign change until the value is within epsilon
    /// of zero, or until the bracket cannot be split any further.
    fn bisect(&self, working: &IntPoly, mut left: f64, mut right: f64) -> Root {
        let mut left_value = working.eval(left);
        let mut right_value = working.eval(right);
        let mut mid = (left + right) / 2.0;
        let mut value = working.eval(mid);
        while !approx_zero(value, self.epsilon) {
            // ties move `left` too, high powers are flat in f64 away from the root
            if (0.0 < value && value <= left_value) || (0.0 > value && value >= left_value) {
                left = mid;
                left_value = value;
            } else {
                right = mid;
                right_value = value;
            }
            let next = (left + right) / 2.0;
            if next == left || next == right {
                // adjacent floats, pick the better end
                mid = if left_value.abs() <= right_value.abs() {
                    left
                } else {
                    right
                };
                log::trace!("bracket exhausted {{x: {mid}}}");
                break;
            }
            mid = next;
            value = working.eval(mid);
        }
        log::debug!("found approximate root {{x: {mid}}}");
        Root::approximate(mid)
    }
}
