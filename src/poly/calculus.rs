use crate::{Polynomial, Term};

impl Polynomial {
    /// Derivative, as a new polynomial.
    ///
    /// ```
    /// use rational_poly::Polynomial;
    ///
    /// let p = Polynomial::parse("x^10 + x").unwrap();
    /// assert_eq!(p.derivative().to_string(), "10x^9 + 1");
    /// ```
    #[must_use]
    pub fn derivative(&self) -> Self {
        // differentiating keeps degrees distinct and ascending, so the terms
        // can be pushed directly
        let terms = self
            .terms
            .iter()
            .map(Term::derivative)
            .filter(|t| !t.is_zero())
            .collect();
        Self { terms }
    }

    /// The `n`th derivative, `n = 0` is a copy of `self`.
    #[must_use]
    pub fn nth_derivative(&self, n: u32) -> Self {
        (0..n).fold(self.clone(), |p, _| p.derivative())
    }
}
