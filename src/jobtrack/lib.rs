//! # Jobtrack Architecture
//!
//! Jobtrack is a **UI-agnostic job-application tracking library**. It is not a
//! CLI application that happens to have some library code; it is a library
//! that happens to ship with a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, shell.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the session state (store, undo controller, paths)   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions beyond what a command is for          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait over one persisted JSON blob        │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Index System
//!
//! Users reference applications by short 1-based display indexes, assigned in
//! a canonical order (newest apply date first) that does not move when a list
//! is filtered or re-sorted. The store itself keys records by UUID. See
//! `index.rs`.
//!
//! ## The Undo Window
//!
//! Deleting an application arms a single-slot undo window (ten seconds by
//! default) instead of asking twice. The window is a deadline, not a thread;
//! event-loop hosts pump it via `TrackerApi::tick`. See `undo.rs`.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business logic
//!    against `MemBackend`. This is where the lion's share of testing lives.
//! 2. **Core state machines** (`undo.rs`, `store/`): unit tests with short
//!    windows and simulated write failures.
//! 3. **CLI**: end-to-end tests in `tests/` driving the real binary.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod query;
pub mod store;
pub mod undo;
