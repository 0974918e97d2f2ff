// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External command execution with an optional timeout.
//!
//! Commands are spawned directly from an argv list (no shell). Output is
//! drained on background threads so a chatty child cannot fill its pipe
//! and stall while we poll for exit. The timeout covers both the exit and
//! the end of output: a grandchild still holding the pipes open past the
//! deadline is a timeout too.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Interval between exit polls while a timeout is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Captured result of a finished command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Stdout followed by stderr.
    pub fn combined(&self) -> String {
        let mut out = String::with_capacity(self.stdout.len() + self.stderr.len());
        out.push_str(&self.stdout);
        out.push_str(&self.stderr);
        out
    }
}

/// Display form of an argv list, for messages.
pub fn display(argv: &[String]) -> String {
    argv.join(" ")
}

/// Run `argv` in `root`, killing it if it outlives `timeout`.
pub fn run(argv: &[String], root: &Path, timeout: Option<Duration>) -> Result<CommandOutput> {
    let Some((program, args)) = argv.split_first() else {
        return Err(Error::ConfigInvalid("empty command".to_string()));
    };
    let shown = display(argv);
    tracing::debug!("running `{}` in {}", shown, root.display());

    let started = Instant::now();
    let mut child = Command::new(program)
        .args(args)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| Error::Spawn { command: shown.clone(), source })?;

    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let status = match timeout {
        Some(limit) => wait_with_timeout(&mut child, limit, &shown)?,
        None => child.wait().map_err(|source| Error::Wait { command: shown.clone(), source })?,
    };

    let deadline = timeout.map(|limit| (started + limit, limit));
    let output = CommandOutput {
        status,
        stdout: collect(&stdout, deadline, &shown)?,
        stderr: collect(&stderr, deadline, &shown)?,
        elapsed: started.elapsed(),
    };
    tracing::debug!(
        "`{}` exited with {} after {:.2}s",
        shown,
        output.status,
        output.elapsed.as_secs_f64()
    );
    Ok(output)
}

fn wait_with_timeout(child: &mut Child, limit: Duration, shown: &str) -> Result<ExitStatus> {
    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) if started.elapsed() >= limit => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(Error::Timeout { command: shown.to_string(), timeout: limit });
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(source) => return Err(Error::Wait { command: shown.to_string(), source }),
        }
    }
}

/// Read `pipe` to EOF on a background thread; the buffer arrives on the channel.
fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    match pipe {
        Some(mut pipe) => {
            thread::spawn(move || {
                let mut buf = Vec::new();
                // Partial output is still useful if the pipe errors mid-read.
                let _ = pipe.read_to_end(&mut buf);
                let _ = tx.send(buf);
            });
        }
        None => {
            let _ = tx.send(Vec::new());
        }
    }
    rx
}

/// Wait for drained output, no later than `deadline` when one is set.
///
/// On timeout the reader thread is left detached; it ends when the last
/// holder of the pipe exits.
fn collect(
    rx: &Receiver<Vec<u8>>,
    deadline: Option<(Instant, Duration)>,
    shown: &str,
) -> Result<String> {
    let buf = match deadline {
        Some((at, limit)) => match rx.recv_timeout(at.saturating_duration_since(Instant::now())) {
            Ok(buf) => buf,
            Err(RecvTimeoutError::Timeout) => {
                return Err(Error::Timeout { command: shown.to_string(), timeout: limit });
            }
            Err(RecvTimeoutError::Disconnected) => Vec::new(),
        },
        None => rx.recv().unwrap_or_default(),
    };
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
