//! # kbase Architecture
//!
//! kbase is a **UI-agnostic knowledge-base library**. The `kb` binary is one
//! client of it; the rendered HTML fragments are meant to be dropped into
//! any static shell page (or exported as a bundle).
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, prints fragments and status messages   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the loaded store, navigator, access log, renderer   │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation                             │
//! │  - Operates on Rust types, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Domain + Storage (model, store/, search, render/, route,   │
//! │  nav, forms, log, session)                                  │
//! │  - ContentStore is the single owned application state       │
//! │  - DataStore trait: FileStore (prod), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! types, never writes to stdout/stderr, and never exits the process. The
//! same core could sit behind a web handler or any other UI.
//!
//! ## The One Hard Contract
//!
//! Stored text is untrusted. Everything the renderer interpolates goes
//! through `render::html::escape` (or `highlight`, which escapes
//! internally) exactly once. See `render/html.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`model`]: Typed entities (sections, articles, cases, items, ...)
//! - [`store`]: The owned content store and persistence backends
//! - [`search`]: Linear substring search over the store
//! - [`render`]: HTML fragment rendering, escaping, highlighting
//! - [`route`]: The `section[/subcategory][/entry]` fragment grammar
//! - [`nav`]: Route resolution and browsing history
//! - [`forms`]: Validated create/edit writes into the store
//! - [`log`]: The session access log
//! - [`session`]: Identity seam for the access log
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod forms;
pub mod log;
pub mod model;
pub mod nav;
pub mod render;
pub mod route;
pub mod search;
pub mod session;
pub mod store;
