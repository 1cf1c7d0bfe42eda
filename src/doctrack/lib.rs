//! # Doctrack Architecture
//!
//! Doctrack is a **UI-agnostic document expiry library**. The terminal session that ships
//! with it is one client; the same core could back a web page or a desktop form.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses session commands, renders tables and cards        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the reference date and the expiring-soon window     │
//! │  - Resolves short id prefixes to UUIDs                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / delete / view / edit / list / stats / types        │
//! │  - Pure functions over the store, returning `CmdResult`     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `DocumentStore` trait with change notification           │
//! │  - `InMemoryStore`: session-lifetime, newest first          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Views
//!
//! Status and display date are never stored. Every read goes through
//! [`status::derive_view`], which computes them from the record's expiry date and the
//! reference date.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns `Result<CmdResult>`. It never
//! writes to stdout, never exits the process, and never pops up a notice. Conditions the
//! user must see (validation failures, the unsupported edit operation) come back as typed
//! errors and the client decides how to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`DocumentRecord`, `ExpiryDate`, `DocumentType`)
//! - [`status`]: Status classification and expiry date formatting
//! - [`config`]: Tracker settings
//! - [`samples`]: The starter document set
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod samples;
pub mod status;
pub mod store;
