// TestBench - platform/mod.rs
//
// Platform abstraction layer: filesystem commands, native dialogs,
// config directory resolution.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod dialogs;
pub mod fs;
