//! Running the selected node binary in the shim's place.

use crate::Error;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// How the child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    Exited(i32),
    /// Killed by the given signal number.
    Signaled(i32),
}

impl ChildOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ChildOutcome::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ChildOutcome::Signaled(signal);
            }
        }
        ChildOutcome::Exited(1)
    }

    /// Exit code standing in for this outcome when it cannot be reproduced
    /// exactly: the code itself, or `128 + signal` as shells report it.
    pub fn exit_code(self) -> i32 {
        match self {
            ChildOutcome::Exited(code) => code,
            ChildOutcome::Signaled(signal) => 128 + signal,
        }
    }
}

/// Run `binary` with `args` on the shim's own stdin, stdout and stderr and
/// wait for it.
pub fn delegate(binary: &Path, args: &[OsString]) -> Result<ChildOutcome, Error> {
    debug!(binary = %binary.display(), ?args, "delegating");
    let mut child = Command::new(binary)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| Error::Delegation {
            path: binary.to_path_buf(),
            source,
        })?;

    let _interrupts = IgnoreInterrupts::install();
    let status = child.wait().map_err(|source| Error::Delegation {
        path: binary.to_path_buf(),
        source,
    })?;

    let outcome = ChildOutcome::from_status(status);
    debug!(?outcome, "child finished");
    Ok(outcome)
}

/// End this process the way the child ended.
pub fn terminate_like(outcome: ChildOutcome) -> ! {
    if let ChildOutcome::Signaled(signal) = outcome {
        #[cfg(unix)]
        reraise(signal);
        #[cfg(not(unix))]
        let _ = signal;
    }
    std::process::exit(outcome.exit_code())
}

#[cfg(unix)]
fn reraise(signal: i32) {
    use nix::sys::signal::{self, SigHandler, Signal};

    let Ok(signal) = Signal::try_from(signal) else {
        return;
    };
    // SAFETY: restores the default disposition; no handler code is installed.
    if unsafe { signal::signal(signal, SigHandler::SigDfl) }.is_ok() {
        let _ = signal::raise(signal);
    }
}

/// While alive, terminal interrupts are left to the child.
///
/// The child shares the terminal's process group and receives `SIGINT` and
/// `SIGQUIT` itself; the shim has to outlive it to mirror how it ended.
/// Installed only after spawning, since ignored dispositions are inherited
/// across exec.
struct IgnoreInterrupts {
    #[cfg(unix)]
    previous: Vec<(nix::sys::signal::Signal, nix::sys::signal::SigHandler)>,
}

#[cfg(unix)]
impl IgnoreInterrupts {
    fn install() -> Self {
        use nix::sys::signal::{self, SigHandler, Signal};

        let mut previous = Vec::new();
        for sig in [Signal::SIGINT, Signal::SIGQUIT] {
            // SAFETY: SigIgn installs no handler code and the shim is single-threaded.
            match unsafe { signal::signal(sig, SigHandler::SigIgn) } {
                Ok(handler) => previous.push((sig, handler)),
                Err(e) => tracing::warn!(signal = sig.as_str(), error = %e, "cannot ignore signal"),
            }
        }
        Self { previous }
    }
}

#[cfg(unix)]
impl Drop for IgnoreInterrupts {
    fn drop(&mut self) {
        for (sig, handler) in self.previous.drain(..) {
            // SAFETY: puts back the disposition that was active before install.
            let _ = unsafe { nix::sys::signal::signal(sig, handler) };
        }
    }
}

// TODO: on Windows, install a console control handler so Ctrl+C does not end
// the shim before the child.
#[cfg(not(unix))]
impl IgnoreInterrupts {
    fn install() -> Self { Self {} }
}
