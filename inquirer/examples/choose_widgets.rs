// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run the checkbox and the autocomplete widgets in a real terminal.
//!
//! ```text
//! cargo run --example choose_widgets
//! ```

use r3bl_inquirer::{InquirerResult, Inquirer, Question, SelectionWidget, StyleSheet,
                    TTYResult, is_fully_uninteractive_terminal};

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> InquirerResult<()> {
    if is_fully_uninteractive_terminal() == TTYResult::IsNotInteractive {
        println!("This example needs an interactive terminal.");
        return Ok(());
    }

    let mut inquirer = Inquirer::new(false).with_style(StyleSheet::sea_foam_style());

    let toppings = Question::new("toppings")
        .with_options(["cheese", "olives", "basil", "mushrooms", "peppers", "onions"])
        .with_max_display_lines(4)
        .with_widget(SelectionWidget::Checkbox);
    let checked = inquirer.prompt_checkbox(&toppings).await?;
    println!("toppings: {checked:?}");

    let branch = Question::new("branch")
        .with_options(["main", "Develop", "feature 1", "feature 2", "fix 42", "docs"])
        .with_max_display_lines(3);
    let chosen = inquirer.prompt_autocomplete(&branch).await?;
    println!("branch: {chosen}");

    inquirer.close();

    Ok(())
}
