// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod autocomplete_state;
pub mod checkbox_state;
pub mod components;
pub mod event_loop;
pub mod filter;
pub mod function_component;
pub mod scroll;
pub mod style;

// Re-export.
pub use autocomplete_state::*;
pub use checkbox_state::*;
pub use components::*;
pub use event_loop::*;
pub use filter::*;
pub use function_component::*;
pub use scroll::*;
pub use style::*;
