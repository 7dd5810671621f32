use std::io;

use regex::Regex;
use thiserror::Error;

use crate::board::Square;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}, expected <row>,<col>")]
    InvalidInput { input: String },
    #[error("user exited")]
    UserExit,
}

/// Reads one step from stdin in `<row>,<col>` form.
pub fn parse_step_input() -> Result<Square, InputError> {
    let mut input = String::new();
    let raw = match io::stdin().read_line(&mut input) {
        Ok(0) => return Err(InputError::UserExit),
        Ok(_n) => input.trim_start().trim_end(),
        Err(error) => {
            return Err(InputError::IOError {
                error: error.to_string(),
            })
        }
    };

    parse_step(raw)
}

/// Parses a raw `<row>,<col>` line. Negative coordinates parse
/// successfully; whether they are on the board is the session's concern.
pub fn parse_step(raw: &str) -> Result<Square, InputError> {
    match raw {
        "quit" | "exit" | "q" => return Err(InputError::UserExit),
        _ => (),
    };

    let re = Regex::new(r"^(-?\d+)\s*,\s*(-?\d+)$").unwrap();
    let caps = match re.captures(raw) {
        Some(captures) => captures,
        None => {
            return Err(InputError::InvalidInput {
                input: raw.to_string(),
            })
        }
    };

    match (caps[1].parse::<i32>(), caps[2].parse::<i32>()) {
        (Ok(row), Ok(col)) => Ok(Square::new(row, col)),
        _ => Err(InputError::InvalidInput {
            input: raw.to_string(),
        }),
    }
}
