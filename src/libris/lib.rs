//! # Libris
//!
//! Libris is a small personal library catalog. The library crate holds
//! everything that is not terminal I/O; the binary wires it to an
//! interactive menu.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                            │
//! │  - Menu loop, prompts, rendering                         │
//! │  - The ONLY place that reads stdin or writes the terminal│
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Store (store.rs)                                        │
//! │  - In-memory catalog, add/remove/search/update/list      │
//! │  - Explicit load/save against one JSON file              │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Model (model.rs)                                        │
//! │  - Book, Status, key-value (de)serialization             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence is explicit: nothing is written to disk until the store's
//! `save` runs (the menu does this on exit). A missing or corrupt catalog
//! file loads as an empty catalog.
//!
//! ## Module Overview
//!
//! - [`store`]: The catalog store and search fields
//! - [`model`]: Core data types (`Book`, `Status`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Menu loop, prompts, and rendering for the binary (not part
//!   of the lib API)

pub mod config;
pub mod error;
pub mod model;
pub mod store;
