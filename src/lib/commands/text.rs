use tokio::io::AsyncBufReadExt;

use crate::commands;

pub struct CommandsReader<R: tokio::io::AsyncRead + std::marker::Unpin> {
    lines: tokio::io::Lines<tokio::io::BufReader<R>>,
    line_number: usize,
}

impl<R: tokio::io::AsyncRead + std::marker::Unpin> CommandsReader<R> {
    pub fn from_reader(reader: R) -> Self {
        const BUFFER_SIZE: usize = 8 * 1024;
        let reader = tokio::io::BufReader::with_capacity(BUFFER_SIZE, reader);
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NextError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        source: commands::ParseError,
    },
    #[error("failed to read command: {0}")]
    IO(#[from] std::io::Error),
}

impl<R: tokio::io::AsyncRead + std::marker::Unpin> CommandsReader<R> {
    /// Returns the next command, skipping blank lines and `#` comments.
    /// `None` once the input is exhausted.
    pub async fn next_command(&mut self) -> Option<Result<commands::Command, NextError>> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(error) => return Some(Err(NextError::IO(error))),
            };
            self.line_number += 1;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            return Some(line.parse().map_err(|source| NextError::Parse {
                line: self.line_number,
                source,
            }));
        }
    }
}
