//! # Record Sources
//!
//! The catalog is supplied from outside the core. The [`RecordSource`] trait lets the
//! controller be built the same way whether records come from a file, the built-in demo set
//! or a test fixture.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileSource`]: A JSON array of records on disk
//!   - Same record shape as the demo set: `{ "id", "type", "name", "icon" }`
//!   - `type` is one of `people`, `files`, `chats`
//!
//! - [`demo::DemoSource`]: The built-in sample set (people, their files, chats with them)
//!   - Deterministic, so two runs show the same catalog
//!
//! - [`memory::InMemorySource`]: A fixed vector, for tests and embedding
//!
//! Sources are read once, at construction. Nothing is ever written back through them.

use crate::error::Result;
use crate::model::Record;

pub mod demo;
pub mod fs;
pub mod memory;

/// Something that can hand over an ordered list of records.
pub trait RecordSource {
    /// Load every record, in display order.
    fn load(&self) -> Result<Vec<Record>>;

    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
}
