use std::cmp::Ordering;

use crate::{
    collate::{CaseInsensitive, Collate},
    cursor::CursorPair,
    digit, numeric, text,
};

/// Orders strings so that embedded numbers compare by value: `"file2"` sorts
/// before `"file12"`.
///
/// Both strings are split into alternating runs of digits and non-digits.
/// Digit runs compare as unsigned integers (see [`numeric::compare_runs`] for
/// the leading-zero rule), a digit run sorts before a non-digit run at the
/// same position, and non-digit runs are ordered by the collation `C`. When
/// every run compares equal the string with fewer chars sorts first.
///
/// Decimal points carry no meaning: `"1.3" < "1.15"` because `3 < 15`.
///
/// The comparator holds nothing but its collation, so it can be shared
/// between threads whenever `C` can.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphanumericComparator<C = CaseInsensitive> {
    collation: C,
}

impl<C: Collate> AlphanumericComparator<C> {
    pub fn new(collation: C) -> Self {
        Self { collation }
    }

    pub fn collation(&self) -> &C {
        &self.collation
    }

    pub fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        match (lhs.is_empty(), rhs.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => (),
        }

        let mut cursors = CursorPair::new(lhs, rhs);
        while let Some((lhs_ch, rhs_ch)) = cursors.peek() {
            let ordering = match (digit::is_digit(lhs_ch), digit::is_digit(rhs_ch)) {
                (true, true) => numeric::compare_runs(&mut cursors),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => text::compare_runs(&mut cursors, &self.collation),
            };

            if ordering.is_ne() {
                return ordering;
            }
        }

        lhs.chars().count().cmp(&rhs.chars().count())
    }

    /// Stable sort of `items` in natural order.
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by(|lhs, rhs| self.compare(lhs.as_ref(), rhs.as_ref()));
    }
}

impl AlphanumericComparator<CaseInsensitive> {
    /// Comparator whose text runs ignore case, same as `Default`.
    pub fn case_insensitive() -> Self {
        Self::new(CaseInsensitive)
    }
}

/// Natural order with case-insensitive text runs.
pub fn natural_cmp(s1: &str, s2: &str) -> Ordering {
    AlphanumericComparator::case_insensitive().compare(s1, s2)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::collate::CodePointOrder;

    fn check_total_order(strs: &[&str]) {
        let comparator = AlphanumericComparator::case_insensitive();
        for (i, x) in strs.iter().enumerate() {
            for (j, y) in strs.iter().enumerate() {
                assert_eq!(
                    comparator.compare(x, y),
                    i.cmp(&j),
                    "comparing {x:?} with {y:?}"
                );
            }
        }
    }

    #[test]
    fn empty_strings() {
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
        assert_eq!(natural_cmp("", "abc"), Ordering::Less);
        assert_eq!(natural_cmp("abc", ""), Ordering::Greater);
        assert_eq!(natural_cmp("", "0"), Ordering::Less);
    }

    #[test]
    fn equality() {
        for s in ["abc", "123", "abc123", "a1b2c3", "\u{0661}\u{0662}x", "🦀1🦀"] {
            assert_eq!(natural_cmp(s, s), Ordering::Equal, "{s:?}");
        }
    }

    #[test]
    fn numbers_before_text() {
        assert_eq!(natural_cmp("123", "abc"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "123"), Ordering::Greater);
        assert_eq!(natural_cmp("x1", "x-"), Ordering::Less);
    }

    #[test]
    fn numbers_ordered_numerically() {
        assert_eq!(natural_cmp("2", "11"), Ordering::Less);
        assert_eq!(natural_cmp("a2", "a11"), Ordering::Less);
        assert_eq!(natural_cmp("file12", "file2"), Ordering::Greater);
    }

    #[test]
    fn leading_zeroes() {
        assert_eq!(natural_cmp("02", "11"), Ordering::Less);
        assert_eq!(natural_cmp("02", "002"), Ordering::Less);
        assert_eq!(natural_cmp("00000", "0000"), Ordering::Greater);
        assert_eq!(natural_cmp("02", "1"), Ordering::Greater);
    }

    #[test]
    fn decimal_points_are_separators() {
        assert_eq!(natural_cmp("1.3", "1.5"), Ordering::Less);
        assert_eq!(natural_cmp("1.3", "1.15"), Ordering::Less);
    }

    #[test]
    fn letters_after_equal_numbers() {
        assert_eq!(natural_cmp("2AZ", "2ZA"), Ordering::Less);
        assert_eq!(natural_cmp("2az", "2ZA"), Ordering::Less);
    }

    #[test]
    fn different_length_numbers() {
        assert_eq!(natural_cmp("112A", "22A"), Ordering::Greater);
    }

    #[test]
    fn length_breaks_final_tie() {
        assert_eq!(natural_cmp("a1", "a1b"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "ABC"), Ordering::Equal);

        let comparator = AlphanumericComparator::new(|_: &str, _: &str| Ordering::Equal);
        assert_eq!(comparator.compare("x", "yyy"), Ordering::Less);
        assert_eq!(comparator.compare("yyy", "x"), Ordering::Greater);
    }

    #[test]
    fn mixed_scripts() {
        // Arabic-Indic 3 is less than ASCII 12
        assert_eq!(natural_cmp("p\u{0663}", "p12"), Ordering::Less);
        // fullwidth and Devanagari 10 are equal numbers
        assert_eq!(natural_cmp("\u{FF11}\u{FF10}", "\u{0967}\u{0966}"), Ordering::Equal);
        // Thai digits are text and therefore sort after ASCII digits
        assert_eq!(natural_cmp("\u{0E51}", "9"), Ordering::Greater);
    }

    #[test]
    fn collation_decides_text_runs() {
        let sensitive = AlphanumericComparator::new(CodePointOrder);
        assert_eq!(sensitive.compare("2a", "2B"), Ordering::Greater);
        assert_eq!(natural_cmp("2a", "2B"), Ordering::Less);

        let reversed = AlphanumericComparator::new(|lhs: &str, rhs: &str| rhs.cmp(lhs));
        assert_eq!(reversed.compare("a1", "b1"), Ordering::Greater);
        assert_eq!(reversed.compare("a1", "a2"), Ordering::Less);
    }

    #[test]
    fn total_order() {
        check_total_order(&["10", "a", "aa", "b", "c"]);
        check_total_order(&["a", "a0", "a1", "a1a", "a1b", "a2", "a10", "a20"]);
        check_total_order(&["1.1", "1.01", "1.001", "1.2", "1.02", "1.3", "1.10"]);
        check_total_order(&["0", "00", "1", "01", "001", "2", "10", "010"]);
        check_total_order(&["img1.png", "img2.png", "img10.png", "img12.png"]);
    }

    #[test]
    fn case_insensitive_constructor() {
        let comparator = AlphanumericComparator::case_insensitive();
        assert_eq!(comparator.compare("File2", "file10"), Ordering::Less);

        let defaulted: AlphanumericComparator = Default::default();
        assert_eq!(defaulted.compare("ABC1", "abc1"), Ordering::Equal);
        assert_eq!(
            AlphanumericComparator::<CaseInsensitive>::default().compare("a9", "A10"),
            Ordering::Less
        );
    }

    #[test]
    fn sort_slice() {
        let mut files = vec!["file10.txt", "File2.txt", "file1.txt", "file02.txt"];
        AlphanumericComparator::case_insensitive().sort(&mut files);
        assert_eq!(files, ["file1.txt", "File2.txt", "file02.txt", "file10.txt"]);

        let mut owned: Vec<String> = ["b2", "b10", "a"].iter().map(|s| s.to_string()).collect();
        AlphanumericComparator::new(CodePointOrder).sort(&mut owned);
        assert_eq!(owned, ["a", "b2", "b10"]);
    }

    const ALPHABET: [char; 10] = ['0', '1', '2', '9', 'a', 'B', 'b', '.', '\u{0662}', '\u{FF10}'];

    fn random_string(rng: &mut StdRng) -> String {
        let len = rng.gen_range(0..6);
        (0..len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
            .collect()
    }

    #[test]
    fn random_reflexive_and_antisymmetric() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..5000 {
            let a = random_string(&mut rng);
            let b = random_string(&mut rng);
            assert_eq!(natural_cmp(&a, &a), Ordering::Equal, "{a:?}");
            assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse(), "{a:?} {b:?}");
        }
    }

    #[test]
    fn random_transitive() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            let mut strs = [
                random_string(&mut rng),
                random_string(&mut rng),
                random_string(&mut rng),
            ];
            AlphanumericComparator::case_insensitive().sort(&mut strs);
            let [a, b, c] = &strs;
            assert_ne!(natural_cmp(a, b), Ordering::Greater, "{a:?} {b:?}");
            assert_ne!(natural_cmp(b, c), Ordering::Greater, "{b:?} {c:?}");
            assert_ne!(natural_cmp(a, c), Ordering::Greater, "{a:?} {c:?}");
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut strs: Vec<String> = (0..500).map(|_| random_string(&mut rng)).collect();
        let comparator = AlphanumericComparator::case_insensitive();
        comparator.sort(&mut strs);
        let once = strs.clone();
        comparator.sort(&mut strs);
        assert_eq!(strs, once);
        assert!(strs.windows(2).all(|w| comparator.compare(&w[0], &w[1]).is_le()));
    }
}
