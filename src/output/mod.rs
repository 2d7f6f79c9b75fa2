use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        let mut stdout = io::stdout().lock();
        match self.mode {
            OutputMode::Text => writeln!(stdout, "{text_line}")?,
            OutputMode::Json => {
                serde_json::to_writer_pretty(&mut stdout, json_value)?;
                writeln!(stdout)?;
            }
        }
        Ok(())
    }

    /// Informational line that is not part of the result. Kept off stdout in
    /// JSON mode so the document stays parseable.
    pub fn notice(&self, line: &str) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => writeln!(io::stdout().lock(), "{line}")?,
            OutputMode::Json => writeln!(io::stderr().lock(), "{line}")?,
        }
        Ok(())
    }
}
