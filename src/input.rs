//! Console input helpers shared by the binaries.

use crate::{Error, Result};
use std::io::{BufRead, Write};

/// Print `question` without a trailing newline and read one raw line.
///
/// End of input yields an empty string.
pub fn ask<R: BufRead, W: Write>(question: &str, reader: &mut R, writer: &mut W) -> Result<String> {
    write!(writer, "{}", question)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}

/// Trim surrounding whitespace (including the line terminator) and reject
/// empty prompts.
pub fn normalize_prompt(raw: &str) -> Result<String> {
    let prompt = raw.trim();
    if prompt.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(prompt.to_string())
}

pub fn read_prompt<R: BufRead, W: Write>(
    question: &str,
    reader: &mut R,
    writer: &mut W,
) -> Result<String> {
    let line = ask(question, reader, writer)?;
    normalize_prompt(&line)
}
