//! Polynomials with rational coefficients, and their real roots.
//!
//! A [`Polynomial`] is a sum of [`Term`]s, each an exact fraction times a
//! non-negative power of `x`. Polynomials can be parsed from and printed as
//! text like `3/4x^3 - x + 2`, added, multiplied and differentiated.
//!
//! Real roots are found by [`solve_for_polynomial`], which reports them
//! exactly whenever it can, as integers, fractions or quadratic surds, and
//! falls back to a numeric scan otherwise.
//!
//! ```
//! use rational_poly::Polynomial;
//!
//! let p: Polynomial = "x^3 + 6x^2 + 11x + 6".parse().unwrap();
//! let roots: Vec<String> = p.x_intercepts().iter().map(ToString::to_string).collect();
//! assert_eq!(roots, vec!["-3", "-2", "-1"]);
//! assert_eq!(p.derivative().to_string(), "3x^2 + 12x + 11");
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod error;
pub use error::{ParseError, Result};

mod poly;
pub use poly::{Polynomial, Summary};

mod root;
pub use root::{Root, DISPLAY_DECIMALS};

mod solver;
pub use solver::{
    solve_for_polynomial, Solver, DEFAULT_DELTA, DEFAULT_EPSILON, DEFAULT_STABLE_STEPS,
};

mod term;
pub use term::Term;

mod util;
pub use util::__testing;
