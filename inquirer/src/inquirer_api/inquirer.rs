/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crossterm::style::Print;

use crate::{Answer, Answers, AutocompleteComponent, AutocompleteState,
            CheckboxComponent, CheckboxState, InputDevice, InquirerError,
            InquirerResult, LineReader, OutputDevice, Question, SelectionWidget,
            StyleSheet, autocomplete_keypress_handler, checkbox_keypress_handler,
            enter_event_loop_async, execute_commands};

/// Asks for the values of the questions that aren't answered yet, strictly one at a
/// time, in order.
///
/// It exclusively owns the text input channel ([`LineReader`]) and the key event source
/// ([`InputDevice`]) for the whole session. Each selection widget resumes the input
/// device when it starts and pauses it when it resolves. Call [`Self::close()`] when you
/// are done.
#[allow(missing_debug_implementations)]
pub struct Inquirer {
    no_tty: bool,
    line_reader: Option<LineReader>,
    input_device: Option<InputDevice>,
    output_device: OutputDevice,
    style: StyleSheet,
}

impl Inquirer {
    /// When `no_tty` is `false`, lines are read from stdin and key presses from the
    /// terminal. When it is `true`, nothing is ever asked, and missing values are an
    /// error.
    #[must_use]
    pub fn new(no_tty: bool) -> Self {
        if no_tty {
            Self::new_with_devices(true, None, None, OutputDevice::new_stdout())
        } else {
            Self::new_with_devices(
                false,
                Some(LineReader::new_stdin()),
                Some(InputDevice::new_event_stream()),
                OutputDevice::new_stdout(),
            )
        }
    }

    /// Use this to inject mock devices (for tests), or to embed the inquirer in an app
    /// that already owns the terminal.
    #[must_use]
    pub fn new_with_devices(
        no_tty: bool,
        line_reader: Option<LineReader>,
        input_device: Option<InputDevice>,
        output_device: OutputDevice,
    ) -> Self {
        Self {
            no_tty,
            line_reader,
            input_device,
            output_device,
            style: StyleSheet::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleSheet) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool { !self.no_tty }

    /// Returns `params` w/ an answer for every question in `questions`. Values that are
    /// already in `params` are never asked for again. If anything has to be asked in an
    /// interactive session, the `usage_text` is printed first.
    ///
    /// # Errors
    ///
    /// - [`InquirerError::MissingRequiredParameter`] in a non interactive session.
    /// - [`InquirerError::NoInteractiveSession`] if the input channel that the question
    ///   needs is missing.
    /// - [`InquirerError::LineReaderClosed`] or [`InquirerError::KeyEventSourceClosed`]
    ///   if the input runs out.
    pub async fn prompt(
        &mut self,
        params: Answers,
        questions: &[Question],
        usage_text: Option<&str>,
    ) -> InquirerResult<Answers> {
        let mut answers = params;

        let is_anything_missing = questions
            .iter()
            .any(|question| !answers.contains_key(&question.name));

        if let Some(usage_text) = usage_text
            && is_anything_missing
            && self.is_interactive()
        {
            execute_commands!(self.output_device, Print(format!("{usage_text}\n")));
        }

        for question in questions {
            if answers.contains_key(&question.name) {
                continue;
            }

            let answer = self.ask(question).await?;

            tracing::info!(message = "Answer collected", name = %question.name, answer = %answer);

            answers.insert(question.name.clone(), answer);
        }

        Ok(answers)
    }

    async fn ask(&mut self, question: &Question) -> InquirerResult<Answer> {
        if self.no_tty {
            return Err(InquirerError::MissingRequiredParameter {
                name: question.name.clone(),
            }
            .into());
        }

        if question.options.is_none() {
            return self.prompt_text(question).await.map(Answer::Text);
        }

        match question.widget {
            SelectionWidget::Checkbox => {
                self.prompt_checkbox(question).await.map(Answer::Checked)
            }
            SelectionWidget::Autocomplete => {
                self.prompt_autocomplete(question).await.map(Answer::Text)
            }
        }
    }

    /// Print `Enter {name}: ` and read one line of text. The line is returned as is.
    ///
    /// # Errors
    ///
    /// - [`InquirerError::NoInteractiveSession`] if there's no line reader.
    /// - [`InquirerError::LineReaderClosed`] if there's no more input.
    pub async fn prompt_text(&mut self, question: &Question) -> InquirerResult<String> {
        let Some(line_reader) = self.line_reader.as_mut() else {
            return Err(InquirerError::NoInteractiveSession {
                name: question.name.clone(),
            }
            .into());
        };

        match line_reader
            .read_line(&question.name, &self.output_device)
            .await?
        {
            Some(line) => Ok(line),
            None => Err(InquirerError::LineReaderClosed {
                name: question.name.clone(),
            }
            .into()),
        }
    }

    /// Run the checkbox widget for `question`. Missing options are treated as an empty
    /// list, which resolves to an empty list on enter.
    ///
    /// # Errors
    ///
    /// - [`InquirerError::NoInteractiveSession`] if there's no input device.
    /// - [`InquirerError::KeyEventSourceClosed`] if the key presses run out.
    pub async fn prompt_checkbox(&mut self, question: &Question) -> InquirerResult<Vec<bool>> {
        let Some(input_device) = self.input_device.as_mut() else {
            return Err(InquirerError::NoInteractiveSession {
                name: question.name.clone(),
            }
            .into());
        };

        let mut state = CheckboxState::new(
            &question.name,
            question.get_options(),
            question.max_display_lines,
        );
        let mut function_component =
            CheckboxComponent::new(self.output_device.clone(), self.style);

        enter_event_loop_async(
            &mut state,
            &mut function_component,
            checkbox_keypress_handler,
            input_device,
        )
        .await
    }

    /// Run the autocomplete widget for `question`. Resolves to the focused match, or to
    /// the typed query if nothing matches.
    ///
    /// # Errors
    ///
    /// - [`InquirerError::NoInteractiveSession`] if there's no input device.
    /// - [`InquirerError::KeyEventSourceClosed`] if the key presses run out.
    pub async fn prompt_autocomplete(
        &mut self,
        question: &Question,
    ) -> InquirerResult<String> {
        let Some(input_device) = self.input_device.as_mut() else {
            return Err(InquirerError::NoInteractiveSession {
                name: question.name.clone(),
            }
            .into());
        };

        let mut state = AutocompleteState::new(
            &question.name,
            question.get_options(),
            question.max_display_lines,
        );
        let mut function_component =
            AutocompleteComponent::new(self.output_device.clone(), self.style);

        enter_event_loop_async(
            &mut state,
            &mut function_component,
            autocomplete_keypress_handler,
            input_device,
        )
        .await
    }

    /// Release the line reader and the input device.
    pub fn close(self) {
        drop(self.line_reader);
        if let Some(input_device) = self.input_device {
            input_device.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{KeyPress, StdoutMock, gen_key_press_events, gen_typed_text_events};

    fn new_mock_inquirer(
        lines: Vec<&str>,
        key_presses: Vec<KeyPress>,
    ) -> (Inquirer, StdoutMock) {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let inquirer = Inquirer::new_with_devices(
            false,
            Some(LineReader::new_mock(lines)),
            Some(InputDevice::new_mock(gen_key_press_events(key_presses))),
            output_device,
        );
        (inquirer, stdout_mock)
    }

    fn expect_error(report: &miette::Report) -> InquirerError {
        InquirerError::from_report(report).cloned().unwrap()
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_text_prompt_stores_raw_line() {
        let (mut inquirer, stdout_mock) = new_mock_inquirer(vec!["  Nadia "], vec![]);

        let answers = inquirer
            .prompt(Answers::new(), &[Question::new("name")], Some("Usage: greet"))
            .await
            .unwrap();

        assert_eq!(answers.get("name"), Some(&Answer::from("  Nadia ")));
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string(),
            "Usage: greet\nEnter name: "
        );
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_present_params_are_not_asked_again() {
        let (mut inquirer, stdout_mock) = new_mock_inquirer(vec![], vec![]);
        let mut params = Answers::new();
        params.insert("name".into(), "Nazmul".into());

        let answers = inquirer
            .prompt(params.clone(), &[Question::new("name")], Some("Usage: greet"))
            .await
            .unwrap();

        assert_eq!(answers, params);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_non_interactive_missing_parameter() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut inquirer = Inquirer::new_with_devices(true, None, None, output_device);

        let report = inquirer
            .prompt(Answers::new(), &[Question::new("color")], Some("Usage: paint"))
            .await
            .unwrap_err();

        assert_eq!(
            expect_error(&report),
            InquirerError::MissingRequiredParameter {
                name: "color".into()
            }
        );
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "");
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_non_interactive_with_everything_answered() {
        let (output_device, _stdout_mock) = OutputDevice::new_mock();
        let mut inquirer = Inquirer::new_with_devices(true, None, None, output_device);
        let mut params = Answers::new();
        params.insert("color".into(), "red".into());

        let answers = inquirer
            .prompt(params.clone(), &[Question::new("color")], None)
            .await
            .unwrap();

        assert_eq!(answers, params);
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_no_line_reader() {
        let (output_device, _stdout_mock) = OutputDevice::new_mock();
        let mut inquirer = Inquirer::new_with_devices(false, None, None, output_device);

        let report = inquirer
            .prompt(Answers::new(), &[Question::new("title")], None)
            .await
            .unwrap_err();

        assert_eq!(
            expect_error(&report),
            InquirerError::NoInteractiveSession {
                name: "title".into()
            }
        );
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_no_input_device_for_widget() {
        let (output_device, _stdout_mock) = OutputDevice::new_mock();
        let mut inquirer = Inquirer::new_with_devices(
            false,
            Some(LineReader::new_mock(vec![])),
            None,
            output_device,
        );
        let question = Question::new("branch").with_options(["main"]);

        let report = inquirer
            .prompt(Answers::new(), &[question], None)
            .await
            .unwrap_err();

        assert_eq!(
            expect_error(&report),
            InquirerError::NoInteractiveSession {
                name: "branch".into()
            }
        );
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_line_reader_runs_out() {
        let (mut inquirer, _stdout_mock) = new_mock_inquirer(vec![], vec![]);

        let report = inquirer
            .prompt(Answers::new(), &[Question::new("title")], None)
            .await
            .unwrap_err();

        assert_eq!(
            expect_error(&report),
            InquirerError::LineReaderClosed {
                name: "title".into()
            }
        );
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_mixed_session_in_order() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut key_presses = gen_key_press_events([
            // Checkbox.
            KeyPress::Down,
            KeyPress::Space,
            KeyPress::Enter,
        ]);
        // Autocomplete.
        key_presses.extend(gen_typed_text_events("b"));
        key_presses.extend(gen_key_press_events([KeyPress::Down, KeyPress::Enter]));

        let mut inquirer = Inquirer::new_with_devices(
            false,
            Some(LineReader::new_mock(vec!["fix the thing"])),
            Some(InputDevice::new_mock(key_presses)),
            output_device,
        )
        .with_style(StyleSheet::sea_foam_style());

        let questions = [
            Question::new("title"),
            Question::new("labels")
                .with_options(["bug", "docs", "perf"])
                .with_widget(SelectionWidget::Checkbox),
            Question::new("branch")
                .with_options(["Alpha", "beta", "Banana"])
                .with_max_display_lines(2),
        ];

        let answers = inquirer
            .prompt(Answers::new(), &questions, None)
            .await
            .unwrap();

        let expected: Answers = [
            ("title".to_string(), Answer::from("fix the thing")),
            ("labels".to_string(), Answer::from(vec![false, true, false])),
            ("branch".to_string(), Answer::from("beta")),
        ]
        .into_iter()
        .collect();
        assert_eq!(answers, expected);

        {
            let input_device = inquirer.input_device.as_ref().unwrap();
            assert_eq!(input_device.resume_count(), 2);
            assert_eq!(input_device.pause_count(), 2);
            assert!(!input_device.is_resumed());
        }

        let output = stdout_mock.get_copy_of_buffer_as_string_strip_ansi();
        assert!(output.contains("Enter title: "));
        assert!(output.contains("> ◉ docs"));
        assert!(output.contains("Search: b"));

        inquirer.close();
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_prompt_checkbox_without_options() {
        let (mut inquirer, _stdout_mock) =
            new_mock_inquirer(vec![], vec![KeyPress::Down, KeyPress::Enter]);
        let question = Question::new("empty").with_widget(SelectionWidget::Checkbox);

        let result = inquirer.prompt_checkbox(&question).await.unwrap();

        assert_eq!(result, Vec::<bool>::new());
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_prompt_autocomplete_falls_back_to_query() {
        let (mut inquirer, _stdout_mock) = new_mock_inquirer(
            vec![],
            vec![KeyPress::Char('x'), KeyPress::Char('1'), KeyPress::Enter],
        );
        let question = Question::new("branch").with_options(["main", "dev"]);

        let result = inquirer.prompt_autocomplete(&question).await.unwrap();

        assert_eq!(result, "x1");
    }
}
