//! Numeric keypad input.

use crate::error::{AtmError, Result};
use log::warn;
use std::collections::VecDeque;
use std::io::BufRead;

/// Source of integer input for the ATM.
///
/// Values are returned as typed; range checks belong to the caller.
/// Returns [`AtmError::InputClosed`] once no more input will arrive.
pub trait Keypad {
    fn get_input(&mut self) -> Result<i64>;
}

/// Reads one integer per line, e.g. from stdin.
///
/// Lines that are not integers, including lines that are not valid UTF-8,
/// are logged and skipped.
#[derive(Debug)]
pub struct LineKeypad<R: BufRead> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> LineKeypad<R> {
    pub fn new(reader: R) -> Self {
        LineKeypad {
            reader,
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> Keypad for LineKeypad<R> {
    fn get_input(&mut self) -> Result<i64> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Err(AtmError::InputClosed);
            }

            let decoded = String::from_utf8_lossy(&self.line);
            let trimmed = decoded.trim();
            match trimmed.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => warn!("Ignoring non-numeric keypad input {:?}", trimmed),
            }
        }
    }
}

/// Keypad fed from a fixed list of values.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeypad {
    inputs: VecDeque<i64>,
}

impl ScriptedKeypad {
    pub fn new<I: IntoIterator<Item = i64>>(inputs: I) -> Self {
        ScriptedKeypad {
            inputs: inputs.into_iter().collect(),
        }
    }

    /// Number of values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Keypad for ScriptedKeypad {
    fn get_input(&mut self) -> Result<i64> {
        self.inputs.pop_front().ok_or(AtmError::InputClosed)
    }
}
