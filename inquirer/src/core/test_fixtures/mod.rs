// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod input_stream_mock;
pub mod stdout_mock;

// Re-export.
pub use input_stream_mock::*;
pub use stdout_mock::*;
