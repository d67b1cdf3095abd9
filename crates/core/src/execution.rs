use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::text::trim;

/// How a child process came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self::Exited(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;

            if let Some(signal) = status.signal() {
                return Self::Signaled(signal);
            }
        }

        Self::Exited(-1)
    }
}

/// Raw result of running a child to completion.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub status: Termination,
}

/// Locates and runs external programs.
pub trait ProcessRunner {
    /// Resolves `executable` against the search path.
    fn lookup(&self, executable: &str) -> Option<PathBuf>;

    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    fn run(&self, program: &Path, args: &[String]) -> io::Result<ProcessOutput>;
}

/// [`ProcessRunner`] that spawns real OS processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn lookup(&self, executable: &str) -> Option<PathBuf> {
        which::which(executable).ok()
    }

    fn run(&self, program: &Path, args: &[String]) -> io::Result<ProcessOutput> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(ProcessOutput {
            stdout: output.stdout,
            status: output.status.into(),
        })
    }
}

/// Runs `executable` and returns its trimmed standard output.
///
/// Nothing is written to this process's standard output, whatever the
/// outcome.
///
/// # Errors
///
/// Returns an error if the executable cannot be found, cannot be started, or
/// does not exit with status 0.
pub fn exec_silent(executable: &str, args: &[String]) -> Result<String> {
    exec_with(&SystemRunner, &mut io::sink(), false, executable, args)
}

/// Runs `executable` and returns its trimmed standard output.
///
/// On failure a single `ERROR for '<executable> [<args>]': <error>` line is
/// printed to standard output before the error is returned. Standard output
/// is only locked for that write, never while the child runs.
///
/// # Errors
///
/// Returns an error if the executable cannot be found, cannot be started, or
/// does not exit with status 0.
///
/// # Examples
///
/// ```no_run
/// use cmdkit_core::execution::exec;
///
/// let kernel = exec("uname", &["-r".to_string()])?;
/// println!("Running on {kernel}");
/// # Ok::<(), cmdkit_core::error::Error>(())
/// ```
pub fn exec(executable: &str, args: &[String]) -> Result<String> {
    exec_with(&SystemRunner, &mut io::stdout(), true, executable, args)
}

/// Whether `executable` can be found on the search path.
#[must_use]
pub fn has_binary(executable: &str) -> bool {
    SystemRunner.lookup(executable).is_some()
}

/// Shared routine behind [`exec`] and [`exec_silent`].
///
/// When `report` is set, failures are described on `out` before being
/// returned. The error itself is never altered.
///
/// # Errors
///
/// Returns an error if the executable cannot be found, cannot be started, or
/// does not exit with status 0.
pub fn exec_with<R, W>(
    runner: &R,
    out: &mut W,
    report: bool,
    executable: &str,
    args: &[String],
) -> Result<String>
where
    R: ProcessRunner + ?Sized,
    W: Write + ?Sized,
{
    let result = run_captured(runner, executable, args);

    if let Err(e) = &result {
        debug!("`{}` failed: {}", describe(executable, args), e);

        if report {
            let reported = writeln!(out, "ERROR for '{}': {}", describe(executable, args), e);
            if let Err(write_error) = reported {
                warn!("Unable to report failure of `{executable}`: {write_error}");
            }
        }
    }

    result
}

fn run_captured<R>(runner: &R, executable: &str, args: &[String]) -> Result<String>
where
    R: ProcessRunner + ?Sized,
{
    let Some(program) = runner.lookup(executable) else {
        return Err(Error::executable_not_found(executable));
    };

    debug!("Executing `{}` as {}", describe(executable, args), program.display());

    let output = runner.run(&program, args)?;

    match output.status {
        Termination::Exited(0) => Ok(trim(&String::from_utf8_lossy(&output.stdout))),
        Termination::Exited(code) => Err(Error::ExitStatus(code)),
        Termination::Signaled(signal) => Err(Error::Signal(signal)),
    }
}

/// Renders an invocation as `<executable> [<arg> <arg> ...]`.
fn describe(executable: &str, args: &[String]) -> String {
    format!("{} [{}]", executable, args.join(" "))
}
