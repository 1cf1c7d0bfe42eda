//! # CLI Behavior
//!
//! This is **one possible UI client** for the tracker, not the tracker itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`doctrack`].
//!
//! ## Sessions
//!
//! The document list is held in memory for the lifetime of the process, so the CLI is
//! a session shell rather than a one-shot command:
//!
//! - `doctrack` reads commands line by line (with a prompt when stdin is a terminal).
//! - `doctrack -c "add Lease --by Ann --expires 2025-07-23" -c list` runs the given
//!   lines in order and exits.
//!
//! A failing command is reported on stderr and the session moves on to the next line;
//! only process-level failures (bad flags, unreadable config) exit non-zero.
//!
//! Every line is split shell-style (quotes, backslash escapes) and parsed with clap, so
//! `help` and `<command> --help` work inside the session. After any command that changes
//! the list, the summary counts are printed again.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers that call the API
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap
//! - `shell`: Line splitting and the read loop

mod commands;
mod render;
mod setup;
mod shell;

pub use commands::run;
