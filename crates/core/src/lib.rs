//! cmdkit Core Library
//!
//! Small, stateless building blocks for command-line tools: text trimming and
//! splitting, integer deduplication, external process execution with captured
//! output, and filesystem path helpers.
//!
//! # Key Features
//!
//! - **Text**: whitespace trimming and separator splitting without empty entries
//! - **Collections**: deduplication in first-occurrence or ascending order
//! - **Execution**: run a program, capture its trimmed output, report failures uniformly
//! - **Filesystem**: existence checks and `~`/relative path expansion
//!
//! Process spawning and environment lookups sit behind the
//! [`execution::ProcessRunner`] and [`environment::Environment`] traits so they
//! can be swapped out.
//!
//! # Examples
//!
//! ```no_run
//! use cmdkit_core::execution::exec;
//! use cmdkit_core::filesystem::expand_path;
//! use cmdkit_core::text::comma_split;
//!
//! let config_dir = expand_path("~/.config")?;
//! for name in comma_split("git,ssh,,gpg") {
//!     let version = exec(&name, &["--version".to_string()])?;
//!     println!("{name} ({config_dir}): {version}");
//! }
//! # Ok::<(), cmdkit_core::error::Error>(())
//! ```

pub mod collections;
pub mod environment;
pub mod error;
pub mod execution;
pub mod filesystem;
pub mod text;
