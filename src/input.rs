//! Prompted console input for the coordinate converter.
//!
//! Values are whitespace separated tokens, so `1 0 0` on one line answers all
//! three prompts and blank lines are skipped.

use crate::spherical::Cartesian;
use crate::{GeometryError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Splits a line-oriented reader into whitespace separated tokens.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, refilling line by line. `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Prompt for one coordinate and parse the next token.
pub fn read_scalar<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    writer: &mut W,
    axis: char,
) -> Result<f64> {
    write!(writer, "Enter Value of {axis} coordinate: ")?;
    writer.flush()?;

    let token = tokens
        .next_token()?
        .ok_or(GeometryError::UnexpectedEof { axis })?;

    token
        .parse::<f64>()
        .map_err(|_| GeometryError::invalid_number(axis, token))
}

pub fn read_cartesian<R: BufRead, W: Write>(reader: R, writer: &mut W) -> Result<Cartesian> {
    let mut tokens = Tokens::new(reader);
    let x = read_scalar(&mut tokens, writer, 'X')?;
    let y = read_scalar(&mut tokens, writer, 'Y')?;
    let z = read_scalar(&mut tokens, writer, 'Z')?;
    log::debug!("read coordinates x={x}, y={y}, z={z}");
    Ok(Cartesian::new(x, y, z))
}
