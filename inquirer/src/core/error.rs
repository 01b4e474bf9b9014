// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Every fallible API in this crate returns this. The typed [`InquirerError`] can be
/// recovered from the report using [`miette::Report::downcast_ref()`].
pub type InquirerResult<T> = miette::Result<T>;

/// Conditions that stop the [`crate::Inquirer`] from collecting an answer. None of them
/// are retried or swallowed, they are propagated to the caller.
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum InquirerError {
    /// A value is missing, and there is no line reader or input device to ask for it.
    #[error("🙈 No TTY available and no input channel to ask for '{name}'")]
    #[diagnostic(
        code(r3bl_inquirer::no_interactive_session),
        help("Run this in an interactive terminal, or pass the value up front")
    )]
    NoInteractiveSession { name: String },

    /// A value is missing and the session is non interactive.
    #[error("🚫 Missing required parameter: {name}")]
    #[diagnostic(
        code(r3bl_inquirer::missing_required_parameter),
        help("Pass every required value up front when running without a TTY")
    )]
    MissingRequiredParameter { name: String },

    /// The key press stream ended before the widget resolved.
    #[error("⌨️ Key event source closed before the prompt resolved")]
    #[diagnostic(code(r3bl_inquirer::key_event_source_closed))]
    KeyEventSourceClosed,

    /// The text input stream ended before a line was read.
    #[error("📭 Line reader closed before '{name}' was answered")]
    #[diagnostic(code(r3bl_inquirer::line_reader_closed))]
    LineReaderClosed { name: String },
}

impl InquirerError {
    /// Returns the typed error carried by the `report`, if there is one.
    #[must_use]
    pub fn from_report(report: &miette::Report) -> Option<&InquirerError> {
        report.downcast_ref::<InquirerError>()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fail_with_missing_param() -> InquirerResult<()> {
        Err(InquirerError::MissingRequiredParameter {
            name: "color".into(),
        })?;
        Ok(())
    }

    #[test]
    fn test_typed_error_survives_report() {
        let report = fail_with_missing_param().unwrap_err();
        assert_eq!(
            InquirerError::from_report(&report),
            Some(&InquirerError::MissingRequiredParameter {
                name: "color".into()
            })
        );
    }

    #[test]
    fn test_display_names_the_parameter() {
        let error = InquirerError::NoInteractiveSession {
            name: "branch".into(),
        };
        assert!(error.to_string().contains("'branch'"));
    }

    #[test]
    fn test_foreign_report_is_not_typed() {
        let report = miette::miette!("something else");
        assert_eq!(InquirerError::from_report(&report), None);
    }
}
