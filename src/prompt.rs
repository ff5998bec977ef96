//! Interactive precision prompt
//!
//! Used when no digit count is given on the command line.

use std::io::{self, BufRead, Write};

const QUESTION: &str = "How many decimal places of pi should be computed?";
const RETRY: &str = "Please enter a non-negative whole number.";

/// Ask for the requested digit count until a usable answer arrives
///
/// Only the leading integer of each line is read; the rest of the line is
/// discarded. Negative or non-numeric answers repeat the question. Running
/// out of input is an error.
pub fn read_requested_digits<R, W>(input: &mut R, output: &mut W) -> io::Result<u64>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        writeln!(output, "{}", QUESTION)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a precision was given",
            ));
        }

        match leading_integer(&line) {
            Some(digits) => return Ok(digits),
            None => {
                tracing::debug!(input = line.trim_end(), "Rejected precision input");
                writeln!(output, "{}", RETRY)?;
            }
        }
    }
}

/// The unsigned integer a line starts with, ignoring leading whitespace
fn leading_integer(line: &str) -> Option<u64> {
    let trimmed = line.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}
