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

//! Loads questions from a JSON file, asks for the ones that weren't passed w/ `--param`,
//! and prints all the answers as JSON to stdout.
//!
//! ```text
//! inquirer questions.json --param name=Nadia --usage "Usage: paint <name> <color>"
//! ```

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_inquirer::{CLIArg, Inquirer, InquirerResult, Question, is_stdin_interactive,
                    try_initialize_logging_global};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> InquirerResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let result = try_run(cli_arg).await;

    if let Err(ref error) = result {
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Could not run inquirer due to the following problem",
            error = ?error
        );
    }

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    result
}

async fn try_run(cli_arg: CLIArg) -> InquirerResult<()> {
    let questions_json = tokio::fs::read_to_string(&cli_arg.questions_file)
        .await
        .into_diagnostic()?;
    let questions: Vec<Question> = serde_json::from_str(&questions_json).into_diagnostic()?;

    let no_tty = cli_arg.is_no_tty(is_stdin_interactive());

    let mut inquirer = Inquirer::new(no_tty).with_style(cli_arg.style.into());
    let answers = inquirer
        .prompt(cli_arg.get_params(), &questions, cli_arg.usage.as_deref())
        .await;
    inquirer.close();
    let answers = answers?;

    println!("{}", serde_json::to_string_pretty(&answers).into_diagnostic()?);

    Ok(())
}
