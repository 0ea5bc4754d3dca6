//! Classification of code points into the supported decimal-digit scripts.

/// Zero and nine of every digit script that takes part in numeric runs.
/// Each range is ten contiguous code points.
const DIGIT_SCRIPTS: [(char, char); 5] = [
    ('0', '9'),
    ('\u{0660}', '\u{0669}'), // Arabic-Indic
    ('\u{06F0}', '\u{06F9}'), // Extended Arabic-Indic
    ('\u{0966}', '\u{096F}'), // Devanagari
    ('\u{FF10}', '\u{FF19}'), // Fullwidth
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit {
    value: u8,
}

impl Digit {
    #[inline]
    pub fn value(self) -> u8 {
        self.value
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.value == 0
    }
}

/// Returns the digit `ch` denotes, or `None` if `ch` is not a digit of a
/// supported script. Digits of any other script are treated as text.
#[inline]
pub fn classify(ch: char) -> Option<Digit> {
    DIGIT_SCRIPTS
        .iter()
        .find(|(zero, nine)| (*zero..=*nine).contains(&ch))
        .map(|(zero, _)| Digit {
            value: (ch as u32 - *zero as u32) as u8,
        })
}

#[inline]
pub fn is_digit(ch: char) -> bool {
    classify(ch).is_some()
}
