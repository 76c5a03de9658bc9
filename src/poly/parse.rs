use std::str::FromStr;

use crate::{
    error::{ParseError, Result},
    Polynomial, Term,
};

impl Polynomial {
    /// Read a polynomial from terms joined by `" + "` or `" - "`, the format
    /// produced by its [`Display`](std::fmt::Display) implementation.
    ///
    /// Blank text is the zero polynomial. The older `"x + -3"` style where
    /// every term carries its own sign is accepted as well.
    ///
    /// ```
    /// use rational_poly::Polynomial;
    ///
    /// let p = Polynomial::parse("x^2 + 7/15x + -4/15").unwrap();
    /// assert_eq!(p.to_string(), "x^2 + 7/15x - 4/15");
    /// assert_eq!(Polynomial::parse(&p.to_string()).unwrap(), p);
    /// ```
    ///
    /// # Errors
    /// The first [`ParseError`] of any term.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::new());
        }
        split_terms(text)
            .map(|(negate, term)| Term::parse(term).map(|t| if negate { -t } else { t }))
            .collect()
    }
}

/// Split on `" + "` and `" - "`, flagging the terms that follow a minus.
fn split_terms(text: &str) -> impl Iterator<Item = (bool, &str)> + '_ {
    let mut rest = Some((false, text));
    std::iter::from_fn(move || {
        let (negate, current) = rest.take()?;
        let separator = [" + ", " - "]
            .into_iter()
            .filter_map(|sep| current.find(sep).map(|i| (i, sep)))
            .min();
        let Some((i, sep)) = separator else {
            return Some((negate, current));
        };
        rest = Some((sep == " - ", &current[i + sep.len()..]));
        Some((negate, &current[..i]))
    })
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
