// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeMap, fmt::Display};

use serde::{Deserialize, Serialize};

/// Describes one parameter that the program needs. A question without `options` is
/// answered w/ a line of text, otherwise w/ the selection `widget`.
///
/// Questions can be loaded from JSON:
///
/// ```
/// use r3bl_inquirer::{Question, SelectionWidget};
///
/// let json = r#"[
///     { "name": "title" },
///     { "name": "labels", "options": ["bug", "docs"], "widget": "checkbox" },
///     { "name": "branch", "options": ["main", "dev"], "maxDisplayLines": 5 }
/// ]"#;
/// let questions: Vec<Question> = serde_json::from_str(json).unwrap();
/// assert_eq!(questions[1].widget, SelectionWidget::Checkbox);
/// assert_eq!(questions[2].max_display_lines, Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Unset, zero, or negative means "show all the options".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_display_lines: Option<i64>,
    #[serde(default)]
    pub widget: SelectionWidget,
}

/// Which widget answers a question that has options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionWidget {
    #[default]
    Autocomplete,
    Checkbox,
}

impl Question {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: None,
            max_display_lines: None,
            widget: SelectionWidget::default(),
        }
    }

    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_max_display_lines(mut self, max_display_lines: i64) -> Self {
        self.max_display_lines = Some(max_display_lines);
        self
    }

    #[must_use]
    pub fn with_widget(mut self, widget: SelectionWidget) -> Self {
        self.widget = widget;
        self
    }

    /// Missing options are treated as an empty list.
    #[must_use]
    pub fn get_options(&self) -> Vec<String> { self.options.clone().unwrap_or_default() }
}

/// The value collected for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    /// From a text prompt, the autocomplete widget, or passed in up front.
    Text(String),
    /// From the checkbox widget. One `bool` per option, in the original order.
    Checked(Vec<bool>),
}

impl Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Text(text) => write!(f, "{text}"),
            Answer::Checked(checked) => {
                let checked = checked
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{checked}]")
            }
        }
    }
}

mod convert_to_answer {
    use super::Answer;

    impl From<String> for Answer {
        fn from(text: String) -> Self { Answer::Text(text) }
    }

    impl From<&str> for Answer {
        fn from(text: &str) -> Self { Answer::Text(text.to_string()) }
    }

    impl From<Vec<bool>> for Answer {
        fn from(checked: Vec<bool>) -> Self { Answer::Checked(checked) }
    }
}

/// Answers keyed by question name.
pub type Answers = BTreeMap<String, Answer>;
