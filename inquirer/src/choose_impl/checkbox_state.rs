// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{DEVELOPMENT_MODE, EventLoopResult, KeyPress, adjust_viewport_start,
            resolve_visible_count, visible_range};

/// State of the multi select checkbox widget. It is created fresh for each question and
/// only mutated by [`checkbox_keypress_handler()`].
///
/// `selections` has one entry per option, in the original order of `options`, and its
/// length never changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckboxState {
    pub header: String,
    pub options: Vec<String>,
    pub selected_index: usize,
    pub selections: Vec<bool>,
    pub viewport_start: usize,
    pub visible_count: usize,
}

impl CheckboxState {
    #[must_use]
    pub fn new(
        header: impl Into<String>,
        options: Vec<String>,
        max_display_lines: Option<i64>,
    ) -> Self {
        let visible_count = resolve_visible_count(max_display_lines, options.len());
        Self {
            header: header.into(),
            selections: vec![false; options.len()],
            options,
            selected_index: 0,
            viewport_start: 0,
            visible_count,
        }
    }

    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        visible_range(self.viewport_start, self.visible_count, self.options.len())
    }

    fn move_cursor_to(&mut self, selected_index: usize) {
        self.selected_index = selected_index;
        self.viewport_start = adjust_viewport_start(
            self.selected_index,
            self.viewport_start,
            self.visible_count,
        );
    }
}

/// Up and down wrap around. Space toggles the focused option. Enter resolves to a copy of
/// `selections`. With no options, only enter does something, and it resolves to an empty
/// list.
pub fn checkbox_keypress_handler(
    state: &mut CheckboxState,
    key_press: KeyPress,
) -> EventLoopResult<Vec<bool>> {
    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔆 checkbox_keypress_handler",
            key_press = ?key_press,
            selected_index = %state.selected_index,
            viewport_start = %state.viewport_start
        );
    });

    let option_count = state.options.len();

    match key_press {
        KeyPress::Enter => EventLoopResult::ExitWithResult(state.selections.clone()),

        _ if option_count == 0 => EventLoopResult::Continue,

        KeyPress::Up => {
            state.move_cursor_to((state.selected_index + option_count - 1) % option_count);
            EventLoopResult::ContinueAndRerender
        }

        KeyPress::Down => {
            state.move_cursor_to((state.selected_index + 1) % option_count);
            EventLoopResult::ContinueAndRerender
        }

        KeyPress::Space => {
            if let Some(is_checked) = state.selections.get_mut(state.selected_index) {
                *is_checked = !*is_checked;
            }
            EventLoopResult::ContinueAndRerender
        }

        KeyPress::Backspace | KeyPress::Char(_) => EventLoopResult::Continue,
    }
}
