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

//! ### Vertical scrolling and viewport
//!
//! Only `visible_count` items are rendered at a time. The first one is at
//! `viewport_start`. The viewport follows the selected index around, so that it is
//! always visible.
//!
//! ```text
//!                    +0--------------------+
//!                    |                     |
//!                    |        above        |
//!                    |                     |
//!                    +--- viewport_start --+
//!                    |         ↑           |      ↑
//!                    |                     |      |
//!                    |      within vp      |  visible_count
//!                    |                     |      |
//!                    |         ↓           |      ↓
//!                    +--- viewport_start --+
//!                    |  + visible_count    |
//!                    |                     |
//!                    |        below        |
//!                    |                     |
//!                    +---------------------+
//! ```
//!
//! All the values are `usize`, so `viewport_start` can't go negative.

use std::ops::Range;

/// Turns the optional `max_display_lines` of a question into the number of rows that
/// are shown at a time. Unset, zero, or negative values fall back to `item_count`, and
/// larger values are capped at `item_count`. The result is never zero, so that the
/// cursor always has a row to sit on.
#[must_use]
pub fn resolve_visible_count(max_display_lines: Option<i64>, item_count: usize) -> usize {
    let resolved = match max_display_lines {
        Some(lines) if lines > 0 => usize::try_from(lines).unwrap_or(usize::MAX),
        _ => item_count,
    };
    resolved.min(item_count).max(1)
}

/// Scroll up if `selected_index` is above the viewport, scroll down (just enough) if it
/// is below it, otherwise leave `viewport_start` alone.
#[must_use]
pub fn adjust_viewport_start(
    selected_index: usize,
    viewport_start: usize,
    visible_count: usize,
) -> usize {
    let visible_count = visible_count.max(1);
    if selected_index < viewport_start {
        selected_index
    } else if selected_index >= viewport_start + visible_count {
        selected_index + 1 - visible_count
    } else {
        viewport_start
    }
}

/// Indices of the items that are rendered, ie
/// `viewport_start..min(viewport_start + visible_count, item_count)`.
#[must_use]
pub fn visible_range(
    viewport_start: usize,
    visible_count: usize,
    item_count: usize,
) -> Range<usize> {
    let end = viewport_start.saturating_add(visible_count).min(item_count);
    viewport_start.min(end)..end
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(None, 5, 5)]
    #[test_case(Some(3), 5, 3)]
    #[test_case(Some(10), 5, 5)]
    #[test_case(Some(5), 5, 5)]
    #[test_case(Some(i64::MAX), 2, 2)]
    #[test_case(Some(3), 0, 1)]
    #[test_case(Some(0), 5, 5)]
    #[test_case(Some(-2), 5, 5)]
    #[test_case(None, 0, 1)]
    #[test_case(Some(-1), 0, 1)]
    fn test_resolve_visible_count(
        max_display_lines: Option<i64>,
        item_count: usize,
        expected: usize,
    ) {
        assert_eq!(resolve_visible_count(max_display_lines, item_count), expected);
    }

    #[test_case(2, 3, 2, 2; "scroll up")]
    #[test_case(0, 1, 2, 0; "scroll up to the top")]
    #[test_case(4, 1, 2, 3; "scroll down")]
    #[test_case(3, 1, 2, 2; "scroll down by one")]
    #[test_case(2, 1, 2, 1; "bottom of the viewport")]
    #[test_case(1, 1, 2, 1; "top of the viewport")]
    #[test_case(9, 0, 10, 0; "everything is visible")]
    fn test_adjust_viewport_start(
        selected_index: usize,
        viewport_start: usize,
        visible_count: usize,
        expected: usize,
    ) {
        assert_eq!(
            adjust_viewport_start(selected_index, viewport_start, visible_count),
            expected
        );
    }

    #[test]
    fn test_selection_is_always_visible() {
        let visible_count = 3;
        let mut viewport_start = 0;
        let moves: [usize; 10] = [0, 4, 5, 9, 2, 1, 0, 7, 8, 3];
        for selected_index in moves {
            viewport_start =
                adjust_viewport_start(selected_index, viewport_start, visible_count);
            assert!(viewport_start <= selected_index);
            assert!(selected_index < viewport_start + visible_count);
        }
    }

    #[test_case(0, 2, 3, 0..2)]
    #[test_case(1, 2, 3, 1..3)]
    #[test_case(0, 5, 3, 0..3)]
    #[test_case(0, 1, 0, 0..0)]
    #[test_case(4, 2, 3, 3..3)]
    fn test_visible_range(
        viewport_start: usize,
        visible_count: usize,
        item_count: usize,
        expected: Range<usize>,
    ) {
        assert_eq!(visible_range(viewport_start, visible_count, item_count), expected);
    }
}
