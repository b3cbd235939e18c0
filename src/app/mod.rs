// TestBench - app/mod.rs
//
// Application layer: session state, host call lifecycle, user flows.
// Dependencies: core, platform.
// Must NOT depend on: ui.

pub mod actions;
pub mod bridge;
pub mod state;
