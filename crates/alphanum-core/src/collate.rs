use std::cmp::Ordering;

/// Orders two runs of non-digit text.
///
/// Implementations must be a total order. The natural comparator inherits
/// their notion of equality: if `collate` reports two runs equal, so does the
/// comparator for strings that differ only in those runs.
pub trait Collate {
    fn collate(&self, lhs: &str, rhs: &str) -> Ordering;
}

impl<F> Collate for F
where
    F: Fn(&str, &str) -> Ordering,
{
    #[inline]
    fn collate(&self, lhs: &str, rhs: &str) -> Ordering {
        self(lhs, rhs)
    }
}

/// Orders text by Unicode scalar value, the same as `str::cmp`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodePointOrder;

impl Collate for CodePointOrder {
    #[inline]
    fn collate(&self, lhs: &str, rhs: &str) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Orders text by scalar value after lowercasing, so `"a" == "A"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseInsensitive;

impl Collate for CaseInsensitive {
    fn collate(&self, lhs: &str, rhs: &str) -> Ordering {
        lhs.chars()
            .flat_map(char::to_lowercase)
            .cmp(rhs.chars().flat_map(char::to_lowercase))
    }
}
