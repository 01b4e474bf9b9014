// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{cursor::MoveToPreviousLine, style::ContentStyle};
use miette::IntoDiagnostic as _;

use crate::{AutocompleteState, FunctionComponent, IS_FOCUSED, IS_NOT_FOCUSED,
            OutputDevice, StyleSheet, as_row_count, get_terminal_width,
            lock_output_device_as_mut, queue_commands_no_lock, queue_row};

/// Renders an [`AutocompleteState`]: one header row `"Search: {query}"`, followed by
/// `visible_count` rows formatted as `"{cursor} {option}"`.
#[allow(missing_debug_implementations)]
pub struct AutocompleteComponent {
    pub output_device: OutputDevice,
    pub style: StyleSheet,
    pub viewport_width: usize,
}

impl AutocompleteComponent {
    #[must_use]
    pub fn new(output_device: OutputDevice, style: StyleSheet) -> Self {
        Self {
            output_device,
            style,
            viewport_width: get_terminal_width(),
        }
    }
}

impl FunctionComponent<AutocompleteState> for AutocompleteComponent {
    fn get_output_device(&self) -> OutputDevice { self.output_device.clone() }

    fn calculate_header_viewport_height(&self, _state: &AutocompleteState) -> usize { 1 }

    fn calculate_items_viewport_height(&self, state: &AutocompleteState) -> usize {
        state.visible_count
    }

    fn render(&mut self, state: &AutocompleteState) -> miette::Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let items_viewport_height = self.calculate_items_viewport_height(state);
        let viewport_width = self.viewport_width;
        let style = self.style;
        let visible_range = state.visible_range();
        let rendered_count = visible_range.len();

        let output_device = self.get_output_device();
        let locked_output_device = lock_output_device_as_mut!(output_device);

        queue_row(
            &mut *locked_output_device,
            format!("Search: {}", state.query),
            style.header_style,
            viewport_width,
        )?;

        for option_index in visible_range {
            let is_focused = option_index == state.selected_index;
            let cursor = if is_focused { IS_FOCUSED } else { IS_NOT_FOCUSED };
            let option = &state.filtered_options[option_index];
            queue_row(
                &mut *locked_output_device,
                format!("{cursor} {option}"),
                style.row_style(is_focused, false),
                viewport_width,
            )?;
        }

        // The filtered list can be shorter than the viewport.
        for _ in rendered_count..items_viewport_height {
            queue_row(
                &mut *locked_output_device,
                String::new(),
                ContentStyle::new(),
                viewport_width,
            )?;
        }

        queue_commands_no_lock! {
            &mut *locked_output_device,
            MoveToPreviousLine(as_row_count(viewport_height)),
        };

        locked_output_device.flush().into_diagnostic()?;

        Ok(())
    }
}
