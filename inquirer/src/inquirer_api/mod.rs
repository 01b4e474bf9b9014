// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod clap_config;
pub mod inquirer;
pub mod question;

// Re-export.
pub use clap_config::*;
pub use inquirer::*;
pub use question::*;
