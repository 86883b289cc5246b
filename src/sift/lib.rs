//! # Sift Architecture
//!
//! Sift is a **UI-agnostic filter view** over a fixed catalog of records (people, files and
//! chats). The library owns the visibility rules; whatever draws the screen only forwards
//! user events and renders what the library reports back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and session events, prints tab rows     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - VisibilityController: owns the catalog and the state     │
//! │  - Normalizes inputs (tab names → Tab)                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per transition or derivation                  │
//! │  - Pure functions over (Catalog, VisibilityState)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (store/)                                      │
//! │  - RecordSource trait                                       │
//! │  - JsonFileSource, DemoSource, InMemorySource (testing)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tabs and categories
//!
//! A [`model::Category`] is one of the three record kinds. A [`model::Tab`] is what the user
//! can click: a category or the `All` sentinel. Only categories can be hidden, so `All` is
//! always on the tab row.
//!
//! The state invariant that everything else leans on: the selected tab is either `All` or a
//! category that is currently active. Every mutation in `commands/` preserves it, and the
//! derivations (`visible`, `counts`) rely on it.
//!
//! ## Module Overview
//!
//! - [`api`]: The controller facade, entry point for all operations
//! - [`commands`]: Transition and derivation logic
//! - [`state`]: The mutable visibility state
//! - [`catalog`]: The validated, read-only record list
//! - [`store`]: Record sources
//! - [`model`]: Core data types (`Record`, `Category`, `Tab`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod store;
