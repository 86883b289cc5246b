//! The read-only record list every derivation runs against.
//!
//! A [`Catalog`] is built once from a [`RecordSource`](crate::store::RecordSource) and never
//! changes afterwards. Construction checks that record ids are unique; order is kept exactly
//! as supplied since the visible list is a stable filter over it.

use crate::error::{Result, SiftError};
use crate::model::{Category, Record};
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(SiftError::DuplicateRecordId(record.id));
            }
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of the given kind, regardless of visibility.
    pub fn count_of(&self, category: Category) -> usize {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .count()
    }
}
