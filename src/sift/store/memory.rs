use super::RecordSource;
use crate::error::Result;
use crate::model::Record;

/// Records held in memory. Used by tests and by callers that already have the data.
#[derive(Debug, Default, Clone)]
pub struct InMemorySource {
    records: Vec<Record>,
}

impl InMemorySource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl RecordSource for InMemorySource {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::catalog::Catalog;
    use crate::model::{Category, Record};

    /// Builds catalogs with sequential ids starting at 1.
    #[derive(Default)]
    pub struct CatalogFixture {
        records: Vec<Record>,
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self::default()
        }

        fn push(mut self, category: Category, name: &str, icon: &str) -> Self {
            let id = self.records.len() as u64 + 1;
            self.records.push(Record::new(id, category, name, icon));
            self
        }

        pub fn with_person(self, name: &str) -> Self {
            self.push(Category::People, name, "👤")
        }

        pub fn with_file(self, name: &str) -> Self {
            self.push(Category::Files, name, "📄")
        }

        pub fn with_chat(self, name: &str) -> Self {
            self.push(Category::Chats, name, "💬")
        }

        pub fn records(self) -> Vec<Record> {
            self.records
        }

        pub fn build(self) -> Catalog {
            Catalog::new(self.records).expect("fixture ids are unique")
        }
    }

    /// Alice, her file and a chat with her: ids 1, 2, 3.
    pub fn scenario_catalog() -> Catalog {
        CatalogFixture::new()
            .with_person("Alice")
            .with_file("Alice_file.pdf")
            .with_chat("Chat with Alice")
            .build()
    }
}
