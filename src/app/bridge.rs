// TestBench - app/bridge.rs
//
// Host call lifecycle. Each issued call runs its command on a short-lived
// background thread and reports back over its own mpsc channel; the UI
// thread polls without blocking.
//
// Architecture:
//   - `CallManager` lives on the UI thread; commands run on worker threads.
//   - Every call settles exactly once: with the command's result, or with
//     `BenchError::WorkerLost` if the worker disconnects without replying.
//   - Calls are independent. No queueing, retries, de-duplication or
//     cancellation: a second click issues a second call.

use crate::core::greeting;
use crate::core::model::{Call, CallId, CallValue};
use crate::platform::fs;
use crate::util::error::BenchError;
use std::sync::mpsc::{self, TryRecvError};
use std::time::{Duration, Instant};

/// Outcome of a host command.
pub type CallResult = std::result::Result<CallValue, BenchError>;

/// Function that runs a call to completion on a worker thread.
pub type Executor = fn(Call) -> CallResult;

/// Run a call against the real host commands.
pub fn execute(call: Call) -> CallResult {
    let value = match call {
        Call::Greet { name } => CallValue::Text(greeting::greet(&name)),
        Call::Ping { message } => CallValue::Text(greeting::ping(&message)),
        Call::ReadTextFile { path } => CallValue::Text(fs::read_text_file(&path)?),
        Call::WriteTextFile { path, contents } => {
            fs::write_text_file(&path, &contents)?;
            CallValue::Unit
        }
        Call::ListDir { path } => CallValue::Paths(fs::list_dir(&path)?),
    };
    Ok(value)
}

/// A call that has been issued and not yet observed as settled.
struct PendingCall<A> {
    id: CallId,
    command: &'static str,
    action: A,
    rx: mpsc::Receiver<CallResult>,
    issued_at: Instant,
}

impl<A> PendingCall<A> {
    fn settle(self, result: CallResult) -> SettledCall<A> {
        SettledCall {
            id: self.id,
            command: self.command,
            action: self.action,
            result,
            elapsed: self.issued_at.elapsed(),
        }
    }
}

/// A call whose result has been delivered to the UI thread.
#[derive(Debug)]
pub struct SettledCall<A> {
    pub id: CallId,
    pub command: &'static str,
    /// Caller-supplied context describing what to do with the result.
    pub action: A,
    pub result: CallResult,
    pub elapsed: Duration,
}

/// Issues host calls and collects their results.
///
/// `A` is the caller's per-call context, kept on the UI thread and handed
/// back unchanged with the settled result.
pub struct CallManager<A> {
    pending: Vec<PendingCall<A>>,
    next_id: CallId,
    executor: Executor,
}

impl<A> CallManager<A> {
    pub fn new() -> Self {
        Self::with_executor(execute)
    }

    /// Use a custom executor in place of the real host commands.
    pub fn with_executor(executor: Executor) -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
            executor,
        }
    }

    /// Issue `call` on a new worker thread and return its id.
    pub fn issue(&mut self, action: A, call: Call) -> CallId {
        let id = self.next_id;
        self.next_id += 1;

        let command = call.command();
        let (tx, rx) = mpsc::channel();
        let executor = self.executor;

        let spawned = std::thread::Builder::new()
            .name(format!("call-{command}-{id}"))
            .spawn(move || {
                let result = executor(call);
                // Receiver dropped means the UI is gone; nothing to report to.
                let _ = tx.send(result);
            });

        // On spawn failure the sender is dropped with the closure, so the
        // call settles as WorkerLost on the next poll.
        if let Err(e) = spawned {
            tracing::error!(id, command, error = %e, "Failed to spawn call worker");
        }

        self.pending.push(PendingCall {
            id,
            command,
            action,
            rx,
            issued_at: Instant::now(),
        });

        tracing::debug!(id, command, "Call issued");
        id
    }

    /// Collect every call that has settled since the last poll, in issue order.
    /// Never blocks.
    pub fn poll(&mut self) -> Vec<SettledCall<A>> {
        let mut settled = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for call in self.pending.drain(..) {
            match call.rx.try_recv() {
                Ok(result) => settled.push(call.settle(result)),
                Err(TryRecvError::Disconnected) => {
                    let command = call.command;
                    settled.push(call.settle(Err(BenchError::WorkerLost { command })));
                }
                Err(TryRecvError::Empty) => still_pending.push(call),
            }
        }
        self.pending = still_pending;

        for call in &settled {
            match &call.result {
                Ok(value) => tracing::debug!(
                    id = call.id,
                    command = call.command,
                    elapsed_ms = call.elapsed.as_millis() as u64,
                    value = %value,
                    "Call settled"
                ),
                Err(e) => tracing::warn!(
                    id = call.id,
                    command = call.command,
                    elapsed_ms = call.elapsed.as_millis() as u64,
                    error = %e,
                    "Call failed"
                ),
            }
        }

        settled
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Block until every outstanding call has settled or `timeout` elapses,
    /// returning everything that settled. Intended for tests and shutdown.
    pub fn wait_all(&mut self, timeout: Duration) -> Vec<SettledCall<A>> {
        let deadline = Instant::now() + timeout;
        let mut settled = self.poll();
        while self.has_pending() && Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(5));
            settled.extend(self.poll());
        }
        settled
    }
}

impl<A> Default for CallManager<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn test_execute_greet_and_ping() {
        assert_eq!(
            execute(Call::Greet { name: "Ada".into() }).unwrap(),
            CallValue::Text("Hello, Ada! You've been greeted from Rust!".into())
        );
        assert_eq!(
            execute(Call::Ping { message: "hi".into() }).unwrap(),
            CallValue::Text("pong: hi".into())
        );
    }

    #[test]
    fn test_execute_read_failure_is_command_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(Call::ReadTextFile {
            path: dir.path().join("missing.txt"),
        })
        .unwrap_err();
        assert!(matches!(err, BenchError::Command(_)));
        assert!(err.to_string().starts_with("read_text_file failed:"));
    }

    #[test]
    fn test_issue_and_poll_settles_each_call_once() {
        let mut bridge: CallManager<&str> = CallManager::new();
        let a = bridge.issue("first", Call::Ping { message: "1".into() });
        let b = bridge.issue("second", Call::Ping { message: "2".into() });
        assert!(a < b);
        assert_eq!(bridge.pending_count(), 2);

        let settled = bridge.wait_all(WAIT);
        assert_eq!(settled.len(), 2);
        assert!(!bridge.has_pending());
        assert!(bridge.poll().is_empty(), "nothing settles twice");

        let mut ids: Vec<CallId> = settled.iter().map(|s| s.id).collect();
        ids.sort();
        assert_eq!(ids, vec![a, b]);
        for s in &settled {
            assert_eq!(s.command, "ping");
            assert!(s.result.is_ok());
        }
    }

    #[test]
    fn test_action_context_is_returned_unchanged() {
        let mut bridge: CallManager<String> = CallManager::new();
        bridge.issue("ctx-42".to_string(), Call::Greet { name: "x".into() });
        let settled = bridge.wait_all(WAIT);
        assert_eq!(settled[0].action, "ctx-42");
    }

    fn panicking_executor(_call: Call) -> CallResult {
        panic!("worker blew up");
    }

    #[test]
    fn test_worker_panic_settles_as_worker_lost() {
        let mut bridge: CallManager<()> = CallManager::with_executor(panicking_executor);
        bridge.issue((), Call::ListDir { path: ".".into() });
        let settled = bridge.wait_all(WAIT);
        assert_eq!(settled.len(), 1);
        assert!(matches!(
            settled[0].result,
            Err(BenchError::WorkerLost { command: "list_dir" })
        ));
    }

    fn slow_executor(call: Call) -> CallResult {
        std::thread::sleep(Duration::from_millis(200));
        execute(call)
    }

    #[test]
    fn test_poll_does_not_block_on_running_calls() {
        let mut bridge: CallManager<()> = CallManager::with_executor(slow_executor);
        bridge.issue((), Call::Ping { message: "slow".into() });
        let started = Instant::now();
        let first = bridge.poll();
        assert!(started.elapsed() < Duration::from_millis(150));
        assert!(first.is_empty());
        assert!(bridge.has_pending());
        assert_eq!(bridge.wait_all(WAIT).len(), 1);
    }
}
