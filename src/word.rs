//! Words and letter sets.
//!
//! Every word handled by the solver is exactly [`WORD_LENGTH`] lowercase ASCII
//! letters, so both types are small `Copy` values backed by bytes and bits.

use crate::error::{Error, Result};
use crate::WORD_LENGTH;
use std::fmt;
use std::str::FromStr;

/// A validated five-letter lowercase word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse a word, lowercasing it first.
    ///
    /// Surrounding whitespace is ignored. Anything other than exactly five
    /// ASCII letters is rejected with [`Error::InvalidWord`].
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != WORD_LENGTH || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(Error::InvalidWord(s.to_string()));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, b) in letters.iter_mut().zip(bytes) {
            *slot = b.to_ascii_lowercase();
        }
        Ok(Self(letters))
    }

    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Letter at `index` as a byte in `b'a'..=b'z'`.
    pub fn letter(&self, index: usize) -> u8 {
        self.0[index]
    }

    /// The set of distinct letters in this word.
    pub fn letter_set(&self) -> LetterSet {
        self.0.iter().fold(LetterSet::empty(), |mut set, &b| {
            set.insert(b);
            set
        })
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// A set of letters `a..=z`, one bit per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    const ALL_BITS: u32 = (1 << 26) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every letter of the alphabet.
    pub const fn full() -> Self {
        Self(Self::ALL_BITS)
    }

    pub fn single(letter: u8) -> Self {
        let mut set = Self::empty();
        set.insert(letter);
        set
    }

    /// Bit for `letter`, or zero for anything outside `a..=z`.
    fn bit(letter: u8) -> u32 {
        if letter.is_ascii_lowercase() {
            1 << (letter - b'a')
        } else {
            0
        }
    }

    /// Add `letter`. Bytes outside `a..=z` are ignored.
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    /// Remove `letter`. Bytes outside `a..=z` are ignored.
    pub fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Letters in `self` that are not in `other`.
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::full() {
            return f.write_str("*");
        }
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
