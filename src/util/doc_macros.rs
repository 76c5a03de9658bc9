//! Macros for reducing doc comment boilerplate.

/// Documents the six decimal approximation used for irrational roots.
macro_rules! approximate_display {
    () => {
        r"Roots which are neither rational nor quadratic surds are displayed with six decimals, rounding ties away from zero.

"
    };
}
pub(crate) use approximate_display;
