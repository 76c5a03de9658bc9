use crate::{Polynomial, Term};

impl From<Term> for Polynomial {
    fn from(value: Term) -> Self {
        let mut p = Self::new();
        p.add_term(value);
        p
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(value: Polynomial) -> Self {
        value.into_terms()
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        let mut p = Self::new();
        p.extend(iter);
        p
    }
}

impl Extend<Term> for Polynomial {
    fn extend<I: IntoIterator<Item = Term>>(&mut self, iter: I) {
        for term in iter {
            self.add_term(term);
        }
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type IntoIter = std::slice::Iter<'a, Term>;
    type Item = &'a Term;
    fn into_iter(self) -> Self::IntoIter {
        self.terms().iter()
    }
}

impl IntoIterator for Polynomial {
    type IntoIter = std::vec::IntoIter<Term>;
    type Item = Term;
    fn into_iter(self) -> Self::IntoIter {
        self.into_terms().into_iter()
    }
}
