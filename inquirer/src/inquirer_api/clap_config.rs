// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser, ValueEnum};

use crate::{Answer, Answers, StyleSheet, TTYResult};

#[derive(Debug, Parser)]
#[command(bin_name = "inquirer")]
#[command(about = "🙋 Ask for the parameters that are missing, then print them as JSON")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  inquirer [\x1b[32mQuestions file\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n"
)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(
        value_name = "questions",
        help = "JSON file w/ an array of questions, eg: [{\"name\": \"branch\", \"options\": [\"main\", \"dev\"]}]"
    )]
    pub questions_file: String,

    #[arg(
        long = "param",
        short = 'p',
        value_name = "name=value",
        value_parser = parse_param,
        help = "Value that is already known, and won't be asked for. Can be repeated"
    )]
    pub params: Vec<(String, String)>,

    #[arg(long, short = 'u', help = "Printed before the first question is asked")]
    pub usage: Option<String>,

    #[arg(
        long,
        help = "Never ask, fail if a value is missing. Implied when there is no terminal"
    )]
    pub no_tty: bool,

    #[arg(long, value_enum, default_value_t = StyleName::Default)]
    pub style: StyleName,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleName {
    Default,
    SeaFoam,
}

impl From<StyleName> for StyleSheet {
    fn from(style_name: StyleName) -> Self {
        match style_name {
            StyleName::Default => StyleSheet::default(),
            StyleName::SeaFoam => StyleSheet::sea_foam_style(),
        }
    }
}

impl CLIArg {
    /// The `--param` values, keyed by name. If a name is repeated, the last one wins.
    #[must_use]
    pub fn get_params(&self) -> Answers {
        self.params
            .iter()
            .map(|(name, value)| (name.clone(), Answer::Text(value.clone())))
            .collect()
    }

    /// Nothing is asked if `--no-tty` is passed, or if stdin isn't a terminal, since
    /// key presses can't be read from a pipe.
    #[must_use]
    pub fn is_no_tty(&self, stdin_tty_result: TTYResult) -> bool {
        self.no_tty || stdin_tty_result == TTYResult::IsNotInteractive
    }
}

/// Split `name=value` at the first `=`. The value may be empty, the name may not.
///
/// # Errors
///
/// Returns an error message if there's no `=`, or the name is empty.
pub fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((name, value)) if !name.is_empty() => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(format!("expected `name=value`, got `{arg}`")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("name=Nadia", Ok(("name", "Nadia")); "simple")]
    #[test_case("query=a=b", Ok(("query", "a=b")); "value with equals")]
    #[test_case("empty=", Ok(("empty", "")); "empty value")]
    #[test_case("=value", Err(()); "empty name")]
    #[test_case("novalue", Err(()); "no equals")]
    fn test_parse_param(arg: &str, expected: Result<(&str, &str), ()>) {
        let actual = parse_param(arg).map_err(|_| ());
        let expected = expected.map(|(name, value)| (name.to_string(), value.to_string()));
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_cli_args() {
        let cli_arg = CLIArg::try_parse_from([
            "inquirer",
            "questions.json",
            "-p",
            "name=Nadia",
            "--param",
            "branch=main",
            "--param",
            "name=Nazmul",
            "--no-tty",
            "--style",
            "sea-foam",
            "-l",
        ])
        .unwrap();

        assert_eq!(cli_arg.questions_file, "questions.json");
        assert!(cli_arg.no_tty);
        assert!(cli_arg.global_options.enable_logging);
        assert_eq!(cli_arg.style, StyleName::SeaFoam);
        assert_eq!(cli_arg.usage, None);

        let params = cli_arg.get_params();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("name"), Some(&Answer::from("Nazmul")));
        assert_eq!(params.get("branch"), Some(&Answer::from("main")));
    }

    #[test_case(&[], TTYResult::IsInteractive, false; "terminal")]
    #[test_case(&[], TTYResult::IsNotInteractive, true; "piped stdin")]
    #[test_case(&["--no-tty"], TTYResult::IsInteractive, true; "flag")]
    #[test_case(&["--no-tty"], TTYResult::IsNotInteractive, true; "flag and piped stdin")]
    fn test_is_no_tty(extra_args: &[&str], stdin_tty_result: TTYResult, expected: bool) {
        let args = ["inquirer", "questions.json"].iter().chain(extra_args);
        let cli_arg = CLIArg::try_parse_from(args).unwrap();
        assert_eq!(cli_arg.is_no_tty(stdin_tty_result), expected);
    }

    #[test]
    fn test_style_name_to_style_sheet() {
        assert_eq!(StyleSheet::from(StyleName::Default), StyleSheet::default());
        assert_eq!(
            StyleSheet::from(StyleName::SeaFoam),
            StyleSheet::sea_foam_style()
        );
    }
}
