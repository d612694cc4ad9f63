//! Line-oriented prompting
//!
//! Generic over the reader and writer so the menu can be driven from tests
//! with in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseValidationError;

/// Print a prompt and read one line, without its line terminator
///
/// Returns `TrackerError::InputClosed` once the input is exhausted.
pub fn prompt_string<R, W>(input: &mut R, output: &mut W, prompt: &str) -> TrackerResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TrackerError::InputClosed);
    }

    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Keep prompting until `validate` accepts the line
///
/// Each rejection prints the validator's message before asking again.
pub fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    validate: F,
) -> TrackerResult<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, ExpenseValidationError>,
{
    loop {
        let line = prompt_string(input, output, prompt)?;
        match validate(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                log::debug!("Rejected input {:?}: {:?}", line, e);
                writeln!(output, "{}", e)?;
            }
        }
    }
}
