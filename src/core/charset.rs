use std::collections::HashSet;

use rand::{
    Rng,
    distr::{Distribution, slice::Choose},
};

use crate::error::{GeneratorError, GeneratorResult};

/// The 26 lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// The 26 uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 10 decimal digits.
pub const DIGITS: &str = "0123456789";

/// The 17 special symbols allowed in passwords.
///
/// `-` is a plain member of the set, not a range marker.
pub const SPECIAL: &str = "!@#$%^&*()_-+=<>?";

/// An ordered, non-empty sequence of distinct characters used as a sampling universe.
///
/// # Examples
///
/// ```
/// use credgen::core::charset::CharacterSet;
///
/// let set = CharacterSet::password();
/// assert_eq!(set.len(), 79);
/// assert!(set.contains('?'));
/// assert!(!set.contains(' '));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Builds a character set from the characters of `chars`, in order.
    ///
    /// # Errors
    /// - `GeneratorError::EmptyCharacterSet` if `chars` is empty
    /// - `GeneratorError::DuplicateCharacter` if a character appears twice
    pub fn new(chars: &str) -> GeneratorResult<Self> {
        Self::combine(&[chars])
    }

    /// Concatenates several sets in order, checking that no character overlaps.
    pub fn combine(sets: &[&str]) -> GeneratorResult<Self> {
        let mut seen = HashSet::new();
        let mut chars = Vec::new();

        for c in sets.iter().flat_map(|set| set.chars()) {
            if !seen.insert(c) {
                return Err(GeneratorError::DuplicateCharacter(c));
            }
            chars.push(c);
        }

        if chars.is_empty() {
            return Err(GeneratorError::EmptyCharacterSet);
        }

        Ok(CharacterSet { chars })
    }

    /// The lowercase alphabet used for usernames.
    pub fn username() -> Self {
        CharacterSet {
            chars: LOWERCASE.chars().collect(),
        }
    }

    /// Lowercase, uppercase, digits and special symbols, in that order.
    pub fn password() -> Self {
        CharacterSet {
            chars: [LOWERCASE, UPPERCASE, DIGITS, SPECIAL]
                .iter()
                .flat_map(|set| set.chars())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &char> {
        self.chars.iter()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Draws `length` characters uniformly and independently, with replacement.
    ///
    /// # Errors
    /// - `GeneratorError::EmptyCharacterSet` if there is nothing to draw from
    pub fn sample<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> GeneratorResult<String> {
        let choose = Choose::new(self.chars.as_slice())
            .map_err(|_| GeneratorError::EmptyCharacterSet)?;

        Ok(choose.sample_iter(rng).take(length).collect())
    }
}
