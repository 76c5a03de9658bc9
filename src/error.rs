use num::bigint::ParseBigIntError;
use thiserror::Error;

/// Errors produced when reading terms or polynomials from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A term was expected but the text was blank, e.g. `"x + "`
    #[error("expected a term but found nothing")]
    Empty,

    #[error("invalid integer `{text}`")]
    InvalidInteger {
        text: String,
        #[source]
        source: ParseBigIntError,
    },

    #[error("zero denominator in `{text}`")]
    ZeroDenominator { text: String },

    /// The exponent after `^` is missing or not a non-negative integer
    #[error("invalid degree in `{text}`")]
    InvalidDegree { text: String },

    #[error("unexpected input `{text}`")]
    UnexpectedInput { text: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    pub(crate) fn invalid_integer(text: &str, source: ParseBigIntError) -> Self {
        Self::InvalidInteger {
            text: text.to_owned(),
            source,
        }
    }

    pub(crate) fn zero_denominator(text: &str) -> Self {
        Self::ZeroDenominator {
            text: text.to_owned(),
        }
    }

    pub(crate) fn invalid_degree(text: &str) -> Self {
        Self::InvalidDegree {
            text: text.to_owned(),
        }
    }

    pub(crate) fn unexpected_input(text: &str) -> Self {
        Self::UnexpectedInput {
            text: text.to_owned(),
        }
    }
}
