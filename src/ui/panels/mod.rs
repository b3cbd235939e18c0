// TestBench - ui/panels/mod.rs

pub mod directory;
pub mod files;
pub mod invoke;
pub mod logs;
