use std::io::{BufRead, Write};

use log::{debug, info};

use crate::{
    core::generator::Credentials,
    error::{GeneratorError, GeneratorResult},
};

pub const USERNAME_LENGTH_PROMPT: &str = "Enter desired username length: ";
pub const PASSWORD_LENGTH_PROMPT: &str = "Enter desired password length: ";

/// Line-oriented dialogue that asks for two lengths and prints the generated pair.
///
/// The prompt is written against any buffered reader and writer, so the
/// binary plugs in stdin/stdout while tests plug in byte slices.
///
/// # Examples
///
/// ```
/// use credgen::prompt::Prompt;
///
/// let input = "6\n12\n".as_bytes();
/// let mut output = Vec::new();
///
/// let credentials = Prompt::new(input, &mut output).run().unwrap();
/// assert_eq!(credentials.username.len(), 6);
/// assert_eq!(credentials.password.len(), 12);
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.contains("Generated Username: "));
/// ```
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Prompt<R, W> {
        Prompt { input, output }
    }

    /// Writes `label`, then reads one line and parses it as a length.
    ///
    /// # Errors
    /// - `GeneratorError::InputParse` if the line is not an integer or input ended
    /// - `GeneratorError::Io` if the prompt cannot be written or input cannot be read
    pub fn read_length(&mut self, label: &str) -> GeneratorResult<i64> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GeneratorError::InputParse(
                "unexpected end of input".to_string(),
            ));
        }

        let answer = line.trim();
        let length = answer
            .parse::<i64>()
            .map_err(|_| GeneratorError::InputParse(format!("{:?} is not an integer", answer)))?;

        debug!("Read length {}", length);
        Ok(length)
    }

    /// Runs the full dialogue and returns what was printed.
    pub fn run(mut self) -> GeneratorResult<Credentials> {
        let username_length = self.read_length(USERNAME_LENGTH_PROMPT)?;
        let password_length = self.read_length(PASSWORD_LENGTH_PROMPT)?;

        let credentials = Credentials::generate(username_length, password_length)?;

        writeln!(self.output, "Generated Username: {}", credentials.username)?;
        writeln!(self.output, "Generated Password: {}", credentials.password)?;
        self.output.flush()?;

        info!(
            "Generated username of length {} and password of length {}",
            username_length, password_length
        );
        Ok(credentials)
    }
}
