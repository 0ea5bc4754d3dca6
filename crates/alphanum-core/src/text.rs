use std::cmp::Ordering;

use crate::{collate::Collate, cursor::CursorPair};

/// Consumes the non-digit run under each cursor and lets `collation` order
/// them. Both cursors must be at a non-digit.
pub fn compare_runs<C>(cursors: &mut CursorPair<'_>, collation: &C) -> Ordering
where
    C: Collate + ?Sized,
{
    let lhs = cursors.lhs.take_text_run();
    let rhs = cursors.rhs.take_text_run();
    debug_assert!(!lhs.is_empty() && !rhs.is_empty());
    collation.collate(lhs, rhs)
}
