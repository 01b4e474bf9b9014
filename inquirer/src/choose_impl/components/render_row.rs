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

use crossterm::{cursor::{MoveToColumn, MoveToNextLine},
                style::{ContentStyle, PrintStyledContent, ResetColor},
                terminal::{Clear, ClearType}};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{LockedOutputDevice, queue_commands_no_lock};

const ELLIPSIS: &str = "...";

/// Clip `line` so that it fits in `viewport_width` display columns. If anything is cut
/// off, the line ends w/ `...`. Wide characters (eg: emoji, CJK) count as 2 columns.
#[must_use]
pub fn clip_string_to_width_with_ellipsis(line: String, viewport_width: usize) -> String {
    if UnicodeWidthStr::width(line.as_str()) <= viewport_width {
        return line;
    }

    if viewport_width <= ELLIPSIS.len() {
        return ELLIPSIS[..viewport_width].to_string();
    }

    let available_width = viewport_width - ELLIPSIS.len();
    let mut clipped = String::new();
    let mut clipped_width = 0;
    for ch in line.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if clipped_width + ch_width > available_width {
            break;
        }
        clipped.push(ch);
        clipped_width += ch_width;
    }
    clipped.push_str(ELLIPSIS);
    clipped
}

/// Overwrite the row that the cursor is on w/ `text`, then move to the start of the next
/// row. The caller must hold the lock on the output device.
///
/// # Errors
///
/// Returns an error if the commands can't be queued.
pub fn queue_row(
    locked_output_device: LockedOutputDevice<'_>,
    text: String,
    style: ContentStyle,
    viewport_width: usize,
) -> miette::Result<()> {
    let text = clip_string_to_width_with_ellipsis(text, viewport_width);
    queue_commands_no_lock! {
        &mut *locked_output_device,
        // Bring the caret back to the start of line.
        MoveToColumn(0),
        // Reset the colors that may have been set by the previous command.
        ResetColor,
        // Clear the current line.
        Clear(ClearType::CurrentLine),
        // Print the text.
        PrintStyledContent(style.apply(text)),
        // Move to next line.
        MoveToNextLine(1),
        // Reset the colors.
        ResetColor,
    };
    Ok(())
}
