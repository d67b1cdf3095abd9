use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("exec: \"{}\": executable file not found in $PATH", .executable)]
    ExecutableNotFound { executable: String },

    #[error("exit status {}", .0)]
    ExitStatus(i32),

    #[error("signal: {}", signal_name(.0))]
    Signal(i32),

    #[error("Error with sub process: {}", .0)]
    SubProcess(#[from] std::io::Error),

    /// No home directory could be found. The lookup behind
    /// [`Environment::home_dir`](crate::environment::Environment::home_dir)
    /// reports no cause, so there is nothing to carry.
    #[error("unable to determine the home directory of the current user")]
    HomeDirectory,

    #[error("unable to determine the current working directory: {}", .0)]
    WorkingDirectory(std::io::Error),
}

impl Error {
    pub fn executable_not_found(executable: &str) -> Self {
        Self::ExecutableNotFound {
            executable: executable.to_string(),
        }
    }
}

/// Human readable name for the signals a child is commonly killed with.
fn signal_name(signal: &i32) -> String {
    let name = match *signal {
        1 => "hangup",
        2 => "interrupt",
        3 => "quit",
        6 => "aborted",
        9 => "killed",
        11 => "segmentation fault",
        13 => "broken pipe",
        15 => "terminated",
        _ => return signal.to_string(),
    };

    name.to_string()
}
