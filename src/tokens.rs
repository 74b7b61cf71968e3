// Copyright (C) 2020-2026 Andy Kurnia.

use super::error;

// Whitespace-delimited tokens, possibly several per line. None means input is
// over.
pub trait TokenSource {
    fn next_token(&mut self) -> error::Returns<Option<String>>;
}

pub struct ReaderTokens<R: std::io::BufRead> {
    reader: R,
    pending: std::collections::VecDeque<String>,
}

impl<R: std::io::BufRead> ReaderTokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: std::collections::VecDeque::new(),
        }
    }
}

impl<R: std::io::BufRead> TokenSource for ReaderTokens<R> {
    fn next_token(&mut self) -> error::Returns<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            // bad bytes become U+FFFD and are rejected like any other bad token.
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(|s| s.to_string()),
            );
        }
    }
}

pub struct EditorTokens {
    rl: rustyline::DefaultEditor,
    pending: std::collections::VecDeque<String>,
}

impl EditorTokens {
    pub fn new() -> error::Returns<Self> {
        Ok(Self {
            rl: rustyline::DefaultEditor::new()?,
            pending: std::collections::VecDeque::new(),
        })
    }
}

impl TokenSource for EditorTokens {
    fn next_token(&mut self) -> error::Returns<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            match self.rl.readline(">> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.rl.add_history_entry(line.as_str())?;
                    }
                    self.pending
                        .extend(line.split_whitespace().map(|s| s.to_string()));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    log::debug!("CTRL-C");
                    return Ok(None);
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    log::debug!("CTRL-D");
                    return Ok(None);
                }
                Err(err) => {
                    return Err(err.into());
                }
            }
        }
    }
}
