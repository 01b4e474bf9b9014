// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{DEVELOPMENT_MODE, EventLoopResult, KeyPress, adjust_viewport_start,
            filter_options, resolve_visible_count, visible_range};

/// State of the filterable autocomplete widget. It is created fresh for each question
/// and only mutated by [`autocomplete_keypress_handler()`].
///
/// Invariants:
/// - `filtered_options == filter_options(&options, &query)`.
/// - `selected_index < max(1, filtered_options.len())`.
/// - `viewport_start <= selected_index < viewport_start + visible_count`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutocompleteState {
    pub header: String,
    pub options: Vec<String>,
    pub query: String,
    pub filtered_options: Vec<String>,
    pub selected_index: usize,
    pub viewport_start: usize,
    pub visible_count: usize,
}

impl AutocompleteState {
    /// The viewport size is derived from the full option count, so it stays the same
    /// while the query changes.
    #[must_use]
    pub fn new(
        header: impl Into<String>,
        options: Vec<String>,
        max_display_lines: Option<i64>,
    ) -> Self {
        let visible_count = resolve_visible_count(max_display_lines, options.len());
        let filtered_options = filter_options(&options, "");
        Self {
            header: header.into(),
            options,
            query: String::new(),
            filtered_options,
            selected_index: 0,
            viewport_start: 0,
            visible_count,
        }
    }

    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        visible_range(
            self.viewport_start,
            self.visible_count,
            self.filtered_options.len(),
        )
    }

    /// The value that enter resolves to: the focused match, or the raw query when
    /// nothing matches.
    #[must_use]
    pub fn get_result(&self) -> String {
        match self.filtered_options.get(self.selected_index) {
            Some(option) => option.clone(),
            None => self.query.clone(),
        }
    }

    /// Recompute the matches for the current query, then pull the selected index back
    /// into range, then move the viewport so it is visible.
    fn refilter(&mut self) {
        self.filtered_options = filter_options(&self.options, &self.query);

        let max_index = self.filtered_options.len().max(1) - 1;
        self.selected_index = self.selected_index.min(max_index);

        self.viewport_start = adjust_viewport_start(
            self.selected_index,
            self.viewport_start,
            self.visible_count,
        );
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

/// Lower case letters, digits, and space edit the query. Backspace removes the last
/// character. Up and down move the cursor and stop at the ends of the list. Enter
/// resolves to [`AutocompleteState::get_result()`]. Everything else is ignored.
pub fn autocomplete_keypress_handler(
    state: &mut AutocompleteState,
    key_press: KeyPress,
) -> EventLoopResult<String> {
    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔍 autocomplete_keypress_handler",
            key_press = ?key_press,
            query = ?state.query,
            selected_index = %state.selected_index,
            viewport_start = %state.viewport_start
        );
    });

    if let Some(query_char) = key_press.as_query_char() {
        state.query.push(query_char);
        state.refilter();
        return EventLoopResult::ContinueAndRerender;
    }

    match key_press {
        KeyPress::Enter => EventLoopResult::ExitWithResult(state.get_result()),

        KeyPress::Backspace => {
            if state.query.pop().is_none() {
                return EventLoopResult::Continue;
            }
            state.refilter();
            EventLoopResult::ContinueAndRerender
        }

        KeyPress::Up => {
            state.move_cursor_to(state.selected_index.saturating_sub(1));
            EventLoopResult::ContinueAndRerender
        }

        KeyPress::Down => {
            let Some(last_index) = state.filtered_options.len().checked_sub(1) else {
                return EventLoopResult::Continue;
            };
            state.move_cursor_to((state.selected_index + 1).min(last_index));
            EventLoopResult::ContinueAndRerender
        }

        KeyPress::Space | KeyPress::Char(_) => EventLoopResult::Continue,
    }
}
