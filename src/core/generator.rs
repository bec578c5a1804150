use std::fmt;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::error::{GeneratorError, GeneratorResult};

use super::charset::CharacterSet;

/// Longest string a generator will produce.
pub const MAX_LENGTH: usize = 1 << 20;

/// Converts a requested length into a `usize`, rejecting negative values and
/// values above [`MAX_LENGTH`].
///
/// # Examples
///
/// ```
/// use credgen::core::generator::checked_length;
///
/// assert_eq!(checked_length(6).unwrap(), 6);
/// assert!(checked_length(-1).is_err());
/// assert!(checked_length(i64::MAX).is_err());
/// ```
pub fn checked_length(length: i64) -> GeneratorResult<usize> {
    if length < 0 {
        return Err(GeneratorError::InvalidLength(length));
    }

    match usize::try_from(length) {
        Ok(length) if length <= MAX_LENGTH => Ok(length),
        _ => Err(GeneratorError::LengthTooLarge {
            length,
            max: MAX_LENGTH,
        }),
    }
}

/// Produces random strings of a requested length from a fixed character set.
///
/// Every position is drawn independently and uniformly, with replacement.
/// Nothing guarantees that a given character, or a given class of characters,
/// shows up in the output.
///
/// # Length policy
///
/// A length of zero yields an empty string. A negative length is rejected
/// with `GeneratorError::InvalidLength`, and one above [`MAX_LENGTH`] with
/// `GeneratorError::LengthTooLarge`, before any randomness is consumed.
pub trait Generator {
    /// The universe the generator samples from.
    fn character_set(&self) -> &CharacterSet;

    /// Short name used in log messages.
    fn name(&self) -> &str;

    /// Generates a string using the supplied random number generator.
    fn generate_with<R: Rng + ?Sized>(&self, length: i64, rng: &mut R) -> GeneratorResult<String> {
        let length = checked_length(length)?;
        debug!("Generating {} of length {}", self.name(), length);
        self.character_set().sample(length, rng)
    }

    /// Generates a string using the thread-local generator, seeded by the OS.
    fn generate(&self, length: i64) -> GeneratorResult<String> {
        self.generate_with(length, &mut rand::rng())
    }
}

/// Generates usernames made of lowercase letters.
#[derive(Debug, Clone)]
pub struct UsernameGenerator {
    character_set: CharacterSet,
}

impl UsernameGenerator {
    pub fn new() -> UsernameGenerator {
        UsernameGenerator {
            character_set: CharacterSet::username(),
        }
    }
}

impl Default for UsernameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for UsernameGenerator {
    fn character_set(&self) -> &CharacterSet {
        &self.character_set
    }

    fn name(&self) -> &str {
        "username"
    }
}

/// Generates passwords from lowercase, uppercase, digit and special characters.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    character_set: CharacterSet,
}

impl PasswordGenerator {
    pub fn new() -> PasswordGenerator {
        PasswordGenerator {
            character_set: CharacterSet::password(),
        }
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for PasswordGenerator {
    fn character_set(&self) -> &CharacterSet {
        &self.character_set
    }

    fn name(&self) -> &str {
        "password"
    }
}

/// Generates a username of `length` lowercase letters.
pub fn generate_username(length: i64) -> GeneratorResult<String> {
    UsernameGenerator::new().generate(length)
}

/// Generates a password of `length` characters drawn from the 79-character set.
pub fn generate_password(length: i64) -> GeneratorResult<String> {
    PasswordGenerator::new().generate(length)
}

/// A generated username and password pair.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Generates both values, or neither if one of the lengths is invalid.
    pub fn generate(username_length: i64, password_length: i64) -> GeneratorResult<Credentials> {
        Self::generate_with(username_length, password_length, &mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(
        username_length: i64,
        password_length: i64,
        rng: &mut R,
    ) -> GeneratorResult<Credentials> {
        checked_length(username_length)?;
        checked_length(password_length)?;

        let username = UsernameGenerator::new().generate_with(username_length, &mut *rng)?;
        let password = PasswordGenerator::new().generate_with(password_length, &mut *rng)?;

        Ok(Credentials { username, password })
    }

    /// Renders the pair as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// Keeps passwords out of debug logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
