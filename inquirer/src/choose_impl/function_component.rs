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

use crossterm::{cursor::{MoveToNextLine, MoveToPreviousLine},
                style::Print,
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic as _;

use crate::{OutputDevice, lock_output_device_as_mut, queue_commands};

/// Renders the state `S` of a widget inline in the terminal, below the cursor. The
/// viewport height (header rows + item rows) must not change while the widget is
/// active, so every frame overwrites exactly the rows of the previous one.
pub trait FunctionComponent<S> {
    fn get_output_device(&self) -> OutputDevice;

    fn calculate_header_viewport_height(&self, state: &S) -> usize;

    fn calculate_items_viewport_height(&self, state: &S) -> usize;

    /// Full frame redraw. The cursor is left where it was before the call.
    ///
    /// # Errors
    ///
    /// Returns an error if the rendering operation fails.
    fn render(&mut self, state: &S) -> miette::Result<()>;

    fn calculate_viewport_height(&self, state: &S) -> usize {
        /* for header row(s) */
        self.calculate_header_viewport_height(state) +
        /* not including the header */
        self.calculate_items_viewport_height(state)
    }

    /// # Errors
    ///
    /// Returns an error if the viewport allocation fails.
    fn allocate_viewport_height_space(&mut self, state: &S) -> miette::Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        if viewport_height == 0 {
            return Ok(());
        }

        // Allocate space. This is required so that the commands to move the cursor up
        // and down shown below will work.
        for _ in 0..viewport_height {
            queue_commands! {
                self.get_output_device(),
                Print("\n"),
            };
        }

        // Move the cursor back up.
        queue_commands! {
            self.get_output_device(),
            MoveToPreviousLine(as_row_count(viewport_height)),
        };

        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if clearing the viewport fails.
    fn clear_viewport(&mut self, state: &S) -> miette::Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        if viewport_height == 0 {
            return Ok(());
        }

        for _ in 0..viewport_height {
            queue_commands! {
                self.get_output_device(),
                Clear(ClearType::CurrentLine),
                MoveToNextLine(1),
            };
        }

        // Move the cursor back up.
        queue_commands! {
            self.get_output_device(),
            MoveToPreviousLine(as_row_count(viewport_height)),
        };

        let output_device = self.get_output_device();
        lock_output_device_as_mut!(output_device)
            .flush()
            .into_diagnostic()?;

        Ok(())
    }
}

/// Crossterm cursor commands take a `u16`.
#[must_use]
pub fn as_row_count(height: usize) -> u16 { u16::try_from(height).unwrap_or(u16::MAX) }
