// TestBench - core/mod.rs
//
// Core logic layer: data model, activity log, pure host commands.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod activity_log;
pub mod greeting;
pub mod model;
