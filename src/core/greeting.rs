// TestBench - core/greeting.rs
//
// The two pure host commands. Neither touches I/O and neither can fail.

/// `greet` command.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}! You've been greeted from Rust!")
}

/// `ping` command: echoes the message back with a `pong:` prefix.
pub fn ping(message: &str) -> String {
    format!("pong: {message}")
}
