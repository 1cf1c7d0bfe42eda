//! # doctrack CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/doctrack/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/)                                          │
//! │  - clap parsing of process args and session lines          │
//! │  - Session loop + context wiring                           │
//! │  - Terminal rendering (tables, stats, messages)            │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - Resolves short ids, supplies the reference date         │
//! │  - Returns structured `CmdResult` values                   │
//! └───────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*) + Store                        │
//! │  - Validation, status derivation, filtering, counts        │
//! │  - No knowledge of stdout/stderr or process exits          │
//! └───────────────────────────────────────────────────────────┘
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
