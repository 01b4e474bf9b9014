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

use std::{ops::{Deref, DerefMut},
          time::Duration};

use crossterm::{QueueableCommand as _,
                cursor::{Hide, Show},
                event::EventStream,
                terminal::{disable_raw_mode, enable_raw_mode}};
use futures_util::{FutureExt, StreamExt};
use miette::IntoDiagnostic;

use crate::{CrosstermEventResult,
            InquirerResult,
            KeyPress,
            OutputDevice,
            PinnedInputStream,
            execute_commands,
            gen_input_stream,
            gen_input_stream_with_delay,
            lock_output_device_as_mut};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDeviceState {
    /// A widget holds a [`KeyPressSubscription`] and key presses are being captured.
    Resumed,
    /// Nobody is listening. This is the initial state.
    Paused,
}

/// This struct represents the key event source that drives the selection widgets. It
/// owns a stream of terminal events, which is either the real terminal
/// ([`Self::new_event_stream()`]) or a fixed list of events for tests
/// ([`Self::new_mock()`]).
///
/// Key presses are only captured while a [`KeyPressSubscription`] is alive. Use
/// [`Self::resume()`] to get one, and drop it to pause the device again. This guarantees
/// that every resume is paired w/ exactly one pause, even if the widget bails early w/
/// an error.
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
    pub is_mock: bool,
    state: InputDeviceState,
    resume_count: usize,
    pause_count: usize,
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        Self::new(Box::pin(EventStream::new()), false)
    }

    #[must_use]
    pub fn new_mock(generator_vec: Vec<CrosstermEventResult>) -> InputDevice {
        Self::new(gen_input_stream(generator_vec), true)
    }

    #[must_use]
    pub fn new_mock_with_delay(
        generator_vec: Vec<CrosstermEventResult>,
        delay: Duration,
    ) -> InputDevice {
        Self::new(gen_input_stream_with_delay(generator_vec, delay), true)
    }

    fn new(resource: PinnedInputStream<CrosstermEventResult>, is_mock: bool) -> Self {
        Self {
            resource,
            is_mock,
            state: InputDeviceState::Paused,
            resume_count: 0,
            pause_count: 0,
        }
    }
}

impl InputDevice {
    /// Returns the next [`KeyPress`]. Terminal events that aren't key presses are
    /// skipped. Returns `None` when the underlying stream ends or fails.
    pub async fn next_key_press(&mut self) -> Option<KeyPress> {
        loop {
            match self.resource.next().fuse().await {
                Some(Ok(event)) => {
                    if let Ok(key_press) = KeyPress::try_from(event) {
                        return Some(key_press);
                    }
                }
                Some(Err(error)) => {
                    tracing::warn!(message = "Failed to read terminal event", ?error);
                    return None;
                }
                None => return None,
            }
        }
    }

    /// Start capturing key presses. Raw mode is enabled (for the real terminal only) and
    /// the cursor is hidden on the `output_device`. Everything is undone when the
    /// returned [`KeyPressSubscription`] is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode can't be enabled, or the cursor can't be hidden.
    pub fn resume(
        &mut self,
        output_device: &OutputDevice,
    ) -> InquirerResult<KeyPressSubscription<'_>> {
        if !self.is_mock {
            enable_raw_mode().into_diagnostic()?;
        }

        let subscription = KeyPressSubscription {
            input_device: self,
            output_device: output_device.clone(),
        };

        subscription.input_device.state = InputDeviceState::Resumed;
        subscription.input_device.resume_count += 1;
        tracing::debug!(
            message = "InputDevice resumed",
            resume_count = subscription.input_device.resume_count
        );

        // If this fails, the subscription is dropped, and the device is paused.
        execute_commands!(output_device, Hide);

        Ok(subscription)
    }

    fn pause(&mut self) {
        if self.state == InputDeviceState::Paused {
            return;
        }

        if !self.is_mock {
            disable_raw_mode().ok();
        }

        self.state = InputDeviceState::Paused;
        self.pause_count += 1;
        tracing::debug!(message = "InputDevice paused", pause_count = self.pause_count);
    }

    /// Release the underlying OS resources. This consumes the device, so it can't be
    /// used after this.
    pub fn destroy(mut self) {
        self.pause();
        tracing::debug!(
            message = "InputDevice destroyed",
            resume_count = self.resume_count,
            pause_count = self.pause_count
        );
    }

    #[must_use]
    pub fn state(&self) -> InputDeviceState { self.state }

    #[must_use]
    pub fn is_resumed(&self) -> bool { self.state == InputDeviceState::Resumed }

    #[must_use]
    pub fn resume_count(&self) -> usize { self.resume_count }

    #[must_use]
    pub fn pause_count(&self) -> usize { self.pause_count }
}

/// Scoped acquisition of an [`InputDevice`]. It derefs to the device, so you can call
/// [`InputDevice::next_key_press()`] on it. When it is dropped the device is paused and
/// the cursor is shown again.
#[allow(missing_debug_implementations)]
pub struct KeyPressSubscription<'a> {
    input_device: &'a mut InputDevice,
    output_device: OutputDevice,
}

impl Deref for KeyPressSubscription<'_> {
    type Target = InputDevice;

    fn deref(&self) -> &Self::Target { self.input_device }
}

impl DerefMut for KeyPressSubscription<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.input_device }
}

impl Drop for KeyPressSubscription<'_> {
    fn drop(&mut self) {
        self.input_device.pause();
        let locked_output_device = lock_output_device_as_mut!(self.output_device);
        locked_output_device.queue(Show).ok();
        locked_output_device.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::gen_key_press_events;

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_next_key_press_skips_other_events() {
        let mut events = vec![Ok(crossterm::event::Event::FocusGained)];
        events.extend(gen_key_press_events([KeyPress::Down]));
        events.push(Ok(crossterm::event::Event::Resize(10, 10)));
        events.extend(gen_key_press_events([KeyPress::Enter]));

        let mut input_device = InputDevice::new_mock(events);

        assert_eq!(input_device.next_key_press().await, Some(KeyPress::Down));
        assert_eq!(input_device.next_key_press().await, Some(KeyPress::Enter));
        assert_eq!(input_device.next_key_press().await, None);
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_stream_error_ends_input() {
        let events = vec![
            Err(std::io::Error::other("boom")),
            Ok(KeyPress::Enter.into()),
        ];
        let mut input_device = InputDevice::new_mock(events);
        assert_eq!(input_device.next_key_press().await, None);
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_resume_and_pause_are_paired() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut input_device =
            InputDevice::new_mock(gen_key_press_events([KeyPress::Space, KeyPress::Up]));
        assert_eq!(input_device.state(), InputDeviceState::Paused);

        {
            let mut subscription = input_device.resume(&output_device).unwrap();
            assert!(subscription.is_resumed());
            assert_eq!(subscription.next_key_press().await, Some(KeyPress::Space));
        }
        assert_eq!(input_device.state(), InputDeviceState::Paused);

        {
            let mut subscription = input_device.resume(&output_device).unwrap();
            assert_eq!(subscription.next_key_press().await, Some(KeyPress::Up));
        }

        assert_eq!(input_device.resume_count(), 2);
        assert_eq!(input_device.pause_count(), 2);

        let output = stdout_mock.get_copy_of_buffer_as_string();
        assert!(output.contains("\x1b[?25l"));
        assert!(output.ends_with("\x1b[?25h"));

        input_device.destroy();
    }

    #[test]
    fn test_destroy_while_paused_does_not_pause_again() {
        let input_device = InputDevice::new_mock(vec![]);
        assert_eq!(input_device.pause_count(), 0);
        input_device.destroy();
    }
}
