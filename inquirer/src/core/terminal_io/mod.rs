// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod crossterm_macros;
pub mod input_device;
pub mod key_press;
pub mod line_reader;
pub mod output_device;
pub mod terminal_io_type_aliases;

// Re-export.
pub use input_device::*;
pub use key_press::*;
pub use line_reader::*;
pub use output_device::*;
pub use terminal_io_type_aliases::*;
