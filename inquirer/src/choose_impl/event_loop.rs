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

use crate::{FunctionComponent, InputDevice, InquirerError, InquirerResult, KeyPress};

/// What the event loop should do after a key press has been applied to the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<T> {
    /// Nothing changed, wait for the next key press.
    Continue,
    /// The state changed, redraw before waiting for the next key press.
    ContinueAndRerender,
    /// Terminal state. The loop stops reading key presses and returns `T`.
    ExitWithResult(T),
}

/// Drives one widget until it resolves.
///
/// 1. Reserve the rows for the viewport and render the first frame.
/// 2. Resume the `input_device`. Key presses are fed one at a time to `on_keypress`,
///    and each one is fully handled (including the redraw) before the next one is
///    read.
/// 3. On [`EventLoopResult::ExitWithResult`] the viewport is cleared, the input device
///    is paused, and the result is returned.
///
/// # Errors
///
/// Returns [`InquirerError::KeyEventSourceClosed`] if the key presses run out before the
/// widget resolves, or an error if the terminal can't be written to.
pub async fn enter_event_loop_async<S, T>(
    state: &mut S,
    function_component: &mut impl FunctionComponent<S>,
    on_keypress: impl Fn(&mut S, KeyPress) -> EventLoopResult<T>,
    input_device: &mut InputDevice,
) -> InquirerResult<T> {
    function_component.allocate_viewport_height_space(state)?;

    // First render before waiting for user input.
    function_component.render(state)?;

    let output_device = function_component.get_output_device();
    let mut subscription = input_device.resume(&output_device)?;

    let return_this = loop {
        let Some(key_press) = subscription.next_key_press().await else {
            function_component.clear_viewport(state)?;
            return Err(InquirerError::KeyEventSourceClosed.into());
        };

        match on_keypress(state, key_press) {
            EventLoopResult::Continue => {}
            EventLoopResult::ContinueAndRerender => function_component.render(state)?,
            EventLoopResult::ExitWithResult(it) => {
                function_component.clear_viewport(state)?;
                break it;
            }
        }
    };

    // Pause the input device before handing control back to the caller.
    drop(subscription);

    Ok(return_this)
}
