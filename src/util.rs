//! Internal utilities, not part of the API

pub(crate) mod doc_macros;
pub(crate) mod natural;
pub(crate) mod real;

// re-exported by crate root
#[doc(hidden)]
pub mod __testing;
