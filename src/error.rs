use thiserror::Error;

/// Type alias for results returned by the generators and the prompt.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[derive(Error, Debug)]
/// Generator error
pub enum GeneratorError {
    #[error("invalid length: {0} (length must not be negative)")]
    InvalidLength(i64),

    #[error("invalid length: {length} (length must not exceed {max})")]
    LengthTooLarge { length: i64, max: usize },

    #[error("invalid input: {0}")]
    InputParse(String),

    #[error("character set is empty")]
    EmptyCharacterSet,

    #[error("duplicate character in character set: {0:?}")]
    DuplicateCharacter(char),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
