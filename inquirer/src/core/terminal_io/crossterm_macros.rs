// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// This is a macro to queue commands to the output device. It locks the output device
/// before queuing the commands, and unlocks it after. If you already hold the lock, use
/// [`queue_commands_no_lock!`] instead, otherwise this will deadlock.
#[macro_export]
macro_rules! queue_commands {
    ($output_device:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                $crate::lock_output_device_as_mut!($output_device),
                $command
            ).into_diagnostic()?;
        )*
    }}
}

/// This is similar to [`queue_commands!`], but it does not lock the output device. Use
/// it when you are holding the lock for a span of operations, so that the output can't
/// interleave with anything else.
#[macro_export]
macro_rules! queue_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                $writer,
                $command
            ).into_diagnostic()?;
        )*
    }}
}

/// This is a macro to execute commands to the output device immediately. It locks the
/// output device, queues the commands, and flushes.
#[macro_export]
macro_rules! execute_commands {
    ($output_device:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        let locked_output_device = $crate::lock_output_device_as_mut!($output_device);
        $(
            ::crossterm::QueueableCommand::queue(
                &mut *locked_output_device,
                $command
            ).into_diagnostic()?;
        )*
        ::std::io::Write::flush(locked_output_device).into_diagnostic()?;
    }}
}
