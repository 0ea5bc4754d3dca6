use crate::digit::{self, Digit};

/// Read position into one side of a comparison. Only ever moves forward, and
/// always by a whole `char`.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn bump(&mut self, ch: char) {
        self.offset += ch.len_utf8();
    }

    /// Consumes the digit under the cursor, if there is one.
    #[inline]
    pub fn next_digit(&mut self) -> Option<Digit> {
        let ch = self.peek()?;
        let digit = digit::classify(ch)?;
        self.bump(ch);
        Some(digit)
    }

    /// Consumes leading zero digits and returns how many there were.
    pub fn skip_zeroes(&mut self) -> usize {
        let mut count = 0;
        while let Some(ch) = self.peek()
            && digit::classify(ch).is_some_and(Digit::is_zero)
        {
            self.bump(ch);
            count += 1;
        }
        count
    }

    pub fn skip_digits(&mut self) {
        while self.next_digit().is_some() {}
    }

    /// Consumes the maximal run of non-digits under the cursor.
    pub fn take_text_run(&mut self) -> &'a str {
        let start = self.offset;
        while let Some(ch) = self.peek()
            && !digit::is_digit(ch)
        {
            self.bump(ch);
        }
        &self.text[start..self.offset]
    }
}

/// The two read positions of a single comparison.
#[derive(Debug, Clone, Copy)]
pub struct CursorPair<'a> {
    pub lhs: Cursor<'a>,
    pub rhs: Cursor<'a>,
}

impl<'a> CursorPair<'a> {
    pub fn new(lhs: &'a str, rhs: &'a str) -> Self {
        Self {
            lhs: Cursor::new(lhs),
            rhs: Cursor::new(rhs),
        }
    }

    /// Peeks at both sides, `None` once either side is exhausted.
    #[inline]
    pub fn peek(&self) -> Option<(char, char)> {
        Some((self.lhs.peek()?, self.rhs.peek()?))
    }
}
