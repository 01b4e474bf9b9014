// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_inquirer
//!
//! Ask the user for the parameters that your CLI app is missing. Each parameter is
//! described by a [`Question`]. A question without options is answered with a single
//! line of text. A question with options is answered using one of two selection
//! widgets that are driven by raw key presses:
//!
//! 1. **checkbox** - multi select list. `Up` / `Down` move the cursor (and wrap around),
//!    `Space` toggles the focused option, `Enter` resolves to one `bool` per option.
//! 2. **autocomplete** - type to filter the options (case insensitive prefix match, the
//!    matches are sorted), `Up` / `Down` move the cursor, `Backspace` edits the query,
//!    `Enter` resolves to the focused match, or to the raw query if nothing matches.
//!
//! # How to use it as a library?
//!
//! ```no_run
//! use r3bl_inquirer::{Answers, Inquirer, Question};
//!
//! #[tokio::main]
//! async fn main() -> miette::Result<()> {
//!     let questions = vec![
//!         Question::new("name"),
//!         Question::new("color").with_options(["red", "green", "blue"]),
//!     ];
//!     let mut inquirer = Inquirer::new(false);
//!     let answers = inquirer
//!         .prompt(Answers::default(), &questions, Some("Usage: paint <name> <color>"))
//!         .await?;
//!     inquirer.close();
//!     println!("{answers:?}");
//!     Ok(())
//! }
//! ```
//!
//! # Module layout
//!
//! - [`mod@core`]: errors, terminal detection, logging, and the terminal I/O devices
//!   ([`InputDevice`], [`OutputDevice`], [`LineReader`]).
//! - [`choose_impl`]: the selection widget state machines, the option filter, the
//!   viewport manager, the event loop and the render components.
//! - [`inquirer_api`]: the [`Inquirer`] which sequences the questions.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach.
pub mod choose_impl;
pub mod core;
pub mod inquirer_api;

// Re-export.
pub use choose_impl::*;
pub use core::*;
pub use inquirer_api::*;

/// Enable very chatty logging of the widget state on every key press. You can use
/// `tail -f log.txt` to watch the logs.
pub const DEVELOPMENT_MODE: bool = false;
