//! ATM screen.
//!
//! Output goes to an injected [`Write`] sink (stdout in the binary, a
//! `Vec<u8>` or [`std::io::sink`] in tests). Every piece of text shown is
//! also kept, in order, so a session can be replayed and asserted on.

use crate::error::Result;
use crate::money::Money;
use std::io::Write;

/// Renders messages and records them in display order.
#[derive(Debug)]
pub struct Screen<W: Write> {
    out: W,
    messages: Vec<String>,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Screen {
            out,
            messages: Vec::new(),
        }
    }

    /// Shows `message` without a trailing newline.
    pub fn display_message(&mut self, message: &str) -> Result<()> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;
        self.messages.push(message.to_string());
        Ok(())
    }

    /// Shows `message` followed by a newline.
    pub fn display_message_line(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.messages.push(message.to_string());
        Ok(())
    }

    /// Shows `amount` as `$X,XXX.XX`.
    ///
    /// The formatted amount is recorded in [`Screen::messages`] as its own
    /// entry, like any other displayed text.
    pub fn display_dollar_amount(&mut self, amount: Money) -> Result<()> {
        let formatted = amount.to_dollar_string();
        write!(self.out, "{}", formatted)?;
        self.messages.push(formatted);
        Ok(())
    }

    /// Everything shown so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
