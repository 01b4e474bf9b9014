// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use async_stream::stream;

use crate::{CrosstermEventResult, KeyPress, PinnedInputStream};

/// The main constructors that use this are:
/// - [`crate::InputDevice::new_mock()`]
/// - [`crate::LineReader::new_mock()`]
pub fn gen_input_stream<T>(generator_vec: Vec<T>) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

/// Same as [`gen_input_stream()`], but waits `delay` before yielding each item.
pub fn gen_input_stream_with_delay<T>(
    generator_vec: Vec<T>,
    delay: Duration,
) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            tokio::time::sleep(delay).await;
            yield item;
        }
    };
    Box::pin(it)
}

/// Simulated terminal input for the given key presses.
pub fn gen_key_press_events(
    key_presses: impl IntoIterator<Item = KeyPress>,
) -> Vec<CrosstermEventResult> {
    key_presses
        .into_iter()
        .map(|key_press| Ok(key_press.into()))
        .collect()
}

/// Simulated terminal input for typing `text`, one key press per character.
pub fn gen_typed_text_events(text: &str) -> Vec<CrosstermEventResult> {
    gen_key_press_events(text.chars().map(|ch| match ch {
        ' ' => KeyPress::Space,
        _ => KeyPress::Char(ch),
    }))
}

#[cfg(test)]
mod tests {
    use futures_util::StreamExt;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_gen_input_stream() {
        let mut input_stream = gen_input_stream(vec![1, 2, 3]);
        for expected in 1..=3 {
            assert_eq!(input_stream.next().await, Some(expected));
        }
        assert_eq!(input_stream.next().await, None);
    }

    #[tokio::test]
    #[allow(clippy::needless_return)]
    async fn test_gen_input_stream_with_delay() {
        const DELAY: u64 = 20;

        let start_time = std::time::Instant::now();

        let mut input_stream =
            gen_input_stream_with_delay(vec![1, 2, 3], Duration::from_millis(DELAY));
        for _ in 1..=3 {
            input_stream.next().await;
        }

        let elapsed = start_time.elapsed();

        assert_eq!(input_stream.next().await, None);
        assert!(elapsed >= Duration::from_millis(DELAY * 3));
    }

    #[test]
    fn test_gen_typed_text_events() {
        let events = gen_typed_text_events("a b");
        let key_presses: Vec<KeyPress> = events
            .into_iter()
            .map(|it| KeyPress::try_from(it.unwrap()).unwrap())
            .collect();
        assert_eq!(
            key_presses,
            vec![KeyPress::Char('a'), KeyPress::Space, KeyPress::Char('b')]
        );
    }
}
