// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod autocomplete_component;
pub mod checkbox_component;
pub mod render_row;

// Re-export.
pub use autocomplete_component::*;
pub use checkbox_component::*;
pub use render_row::*;
