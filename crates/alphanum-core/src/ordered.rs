use std::{cmp::Ordering, fmt, ops::Deref};

use crate::natural_cmp::natural_cmp;

/// A `String` whose `Ord` is [`natural_cmp`], for use as a `BTreeMap` key or
/// with plain `sort()`.
///
/// Equality follows the ordering, so `NaturalString::from("A1")` equals
/// `NaturalString::from("a1")`.
#[derive(Debug, Clone, Default)]
pub struct NaturalString(pub String);

impl NaturalString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for NaturalString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for NaturalString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Deref for NaturalString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for NaturalString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl PartialEq for NaturalString {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NaturalString {}

impl PartialOrd for NaturalString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NaturalString {
    fn cmp(&self, other: &Self) -> Ordering {
        natural_cmp(&self.0, &other.0)
    }
}
