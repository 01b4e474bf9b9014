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

use crossterm::{cursor::MoveToPreviousLine, style::ContentStyle};
use miette::IntoDiagnostic as _;

use crate::{CheckboxState, DEVELOPMENT_MODE, FunctionComponent, OutputDevice,
            StyleSheet, as_row_count, get_terminal_width, lock_output_device_as_mut,
            queue_commands_no_lock, queue_row};

pub const IS_FOCUSED: &str = ">";
pub const IS_NOT_FOCUSED: &str = " ";
pub const IS_CHECKED: &str = "◉";
pub const IS_NOT_CHECKED: &str = "○";

/// Renders a [`CheckboxState`]: one header row w/ the question name, followed by
/// `visible_count` rows formatted as `"{cursor} {mark} {option}"`.
#[allow(missing_debug_implementations)]
pub struct CheckboxComponent {
    pub output_device: OutputDevice,
    pub style: StyleSheet,
    pub viewport_width: usize,
}

impl CheckboxComponent {
    #[must_use]
    pub fn new(output_device: OutputDevice, style: StyleSheet) -> Self {
        Self {
            output_device,
            style,
            viewport_width: get_terminal_width(),
        }
    }
}

impl FunctionComponent<CheckboxState> for CheckboxComponent {
    fn get_output_device(&self) -> OutputDevice { self.output_device.clone() }

    fn calculate_header_viewport_height(&self, _state: &CheckboxState) -> usize { 1 }

    /// This is constant for the lifetime of the widget, and never more than the number
    /// of options.
    fn calculate_items_viewport_height(&self, state: &CheckboxState) -> usize {
        state.visible_count
    }

    fn render(&mut self, state: &CheckboxState) -> miette::Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let items_viewport_height = self.calculate_items_viewport_height(state);
        let viewport_width = self.viewport_width;
        let style = self.style;
        let visible_range = state.visible_range();

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "🎨 render checkbox",
                visible_range = ?visible_range,
                selected_index = %state.selected_index,
                viewport_height = %viewport_height
            );
        });

        let output_device = self.get_output_device();
        let locked_output_device = lock_output_device_as_mut!(output_device);

        // Print header.
        queue_row(
            &mut *locked_output_device,
            state.header.clone(),
            style.header_style,
            viewport_width,
        )?;

        // Print each line in viewport.
        let rendered_count = visible_range.len();
        for option_index in visible_range {
            let is_focused = option_index == state.selected_index;
            let is_checked = state.selections.get(option_index).copied().unwrap_or(false);
            let cursor = if is_focused { IS_FOCUSED } else { IS_NOT_FOCUSED };
            let mark = if is_checked { IS_CHECKED } else { IS_NOT_CHECKED };
            let option = &state.options[option_index];
            queue_row(
                &mut *locked_output_device,
                format!("{cursor} {mark} {option}"),
                style.row_style(is_focused, is_checked),
                viewport_width,
            )?;
        }

        // Pad, so that the viewport height is constant.
        for _ in rendered_count..items_viewport_height {
            queue_row(
                &mut *locked_output_device,
                String::new(),
                ContentStyle::new(),
                viewport_width,
            )?;
        }

        // Move the cursor back up.
        queue_commands_no_lock! {
            &mut *locked_output_device,
            MoveToPreviousLine(as_row_count(viewport_height)),
        };

        locked_output_device.flush().into_diagnostic()?;

        Ok(())
    }
}
