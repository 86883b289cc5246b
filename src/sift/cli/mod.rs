//! # CLI Behavior
//!
//! A terminal presentation layer over [`sift::api::VisibilityController`]. The library never
//! prints; everything shown here is rendered from what the controller reports.
//!
//! Running `sift` with no arguments is `sift list`: the tab row with counts, then every
//! record. `sift session` keeps one controller alive and applies events read from stdin,
//! which is the closest thing to clicking around the original search screen.
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers and the session loop
//! - `render`: Tab row, settings panel and result list formatting
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
