// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use async_stream::stream;
use futures_util::{FutureExt, StreamExt};
use miette::IntoDiagnostic;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{LineResult, OutputDevice, PinnedInputStream, execute_commands,
            gen_input_stream};

/// The text input channel that is used to answer questions that have no options. It is
/// a stream of lines that comes from stdin ([`Self::new_stdin()`]), or from a fixed list
/// of lines for tests ([`Self::new_mock()`]).
#[allow(missing_debug_implementations)]
pub struct LineReader {
    pub resource: PinnedInputStream<LineResult>,
}

impl LineReader {
    #[must_use]
    pub fn new_stdin() -> Self {
        let it = stream! {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => yield Ok(line),
                    Ok(None) => break,
                    Err(error) => {
                        yield Err(error);
                        break;
                    }
                }
            }
        };
        Self {
            resource: Box::pin(it),
        }
    }

    #[must_use]
    pub fn new_mock(lines: Vec<&str>) -> Self {
        let lines: Vec<LineResult> =
            lines.into_iter().map(|it| Ok(it.to_string())).collect();
        Self {
            resource: gen_input_stream(lines),
        }
    }
}

impl LineReader {
    /// Print `Enter {name}: ` to the `output_device`, and wait for one line of text. The
    /// trailing line ending is removed, nothing else is trimmed. Returns `None` when
    /// there is no more input.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt can't be written, or if stdin can't be read.
    pub async fn read_line(
        &mut self,
        name: &str,
        output_device: &OutputDevice,
    ) -> miette::Result<Option<String>> {
        execute_commands!(
            output_device,
            crossterm::style::Print(format!("Enter {name}: "))
        );

        match self.resource.next().fuse().await {
            Some(line) => {
                let line = line.into_diagnostic()?;
                Ok(Some(strip_line_ending(&line).to_string()))
            }
            None => Ok(None),
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("hello", "hello")]
    #[test_case("hello\n", "hello")]
    #[test_case("hello\r\n", "hello")]
    #[test_case("  spaced out  \n", "  spaced out  ")]
    #[test_case("", "")]
    fn test_strip_line_ending(input: &str, expected: &str) {
        assert_eq!(strip_line_ending(input), expected);
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_read_line_prints_prompt() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut line_reader = LineReader::new_mock(vec!["Nadia\r\n", "42"]);

        let first = line_reader.read_line("name", &output_device).await.unwrap();
        let second = line_reader.read_line("age", &output_device).await.unwrap();
        let third = line_reader.read_line("zip", &output_device).await.unwrap();

        assert_eq!(first, Some("Nadia".to_string()));
        assert_eq!(second, Some("42".to_string()));
        assert_eq!(third, None);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "Enter name: Enter age: Enter zip: "
        );
    }
}
