use std::cmp::Ordering;

use crate::cursor::CursorPair;

/// Compares the digit runs under both cursors as unsigned integers and leaves
/// each cursor just past its run.
///
/// Precedence is significant-digit count, then the first differing
/// significant digit, then the number of leading zeros. The run with *more*
/// leading zeros compares greater, so `"00000" > "0000"` and `"02" > "1"`.
/// Existing orderings rely on this, keep it.
///
/// Runs of any length are compared digit by digit, nothing is parsed into a
/// fixed-width integer.
pub fn compare_runs(cursors: &mut CursorPair<'_>) -> Ordering {
    let zeroes_lhs = cursors.lhs.skip_zeroes();
    let zeroes_rhs = cursors.rhs.skip_zeroes();

    let mut delta = Ordering::Equal;
    loop {
        match (cursors.lhs.next_digit(), cursors.rhs.next_digit()) {
            (Some(lhs), Some(rhs)) => {
                if delta.is_eq() {
                    delta = lhs.value().cmp(&rhs.value());
                }
            }
            (None, Some(_)) => {
                cursors.rhs.skip_digits();
                return Ordering::Less;
            }
            (Some(_), None) => {
                cursors.lhs.skip_digits();
                return Ordering::Greater;
            }
            (None, None) => return delta.then(zeroes_lhs.cmp(&zeroes_rhs)),
        }
    }
}
