//! Built-in sample catalog.
//!
//! One person per name, then one or two files per person, then one or two chats per person.
//! Ids run sequentially across the three groups. How many files and chats a person gets, and
//! which file types and chat icons they use, is derived from the name's position so the set
//! is the same on every run.

use super::RecordSource;
use crate::error::Result;
use crate::model::{Category, Record};

const NAMES: [&str; 26] = [
    "Alice", "Ben", "Charlie", "Diana", "Ethan", "Fiona", "George", "Hannah", "Ian", "Jack",
    "Kara", "Leo", "Mona", "Nathan", "Olivia", "Paul", "Quinn", "Rachel", "Sam", "Tina", "Uma",
    "Victor", "Wendy", "Xander", "Yara", "Zane",
];

const FILE_TYPES: [(&str, &str); 5] = [
    (".pdf", "📄"),
    (".jpg", "🖼️"),
    (".mp3", "🎵"),
    (".mp4", "🎬"),
    (".docx", "📃"),
];

const CHAT_ICONS: [&str; 3] = ["💬", "📨", "📱"];
const PEOPLE_ICON: &str = "👤";

#[derive(Debug, Default, Clone, Copy)]
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }

    pub fn records(&self) -> Vec<Record> {
        let mut records = Vec::new();
        let mut next_id = 1u64;
        let mut push = |category: Category, name: String, icon: &str| {
            records.push(Record::new(next_id, category, name, icon));
            next_id += 1;
        };

        for name in NAMES {
            push(Category::People, name.to_string(), PEOPLE_ICON);
        }

        for (i, name) in NAMES.iter().enumerate() {
            // distinct types per person: consecutive slots of the rotated list
            for k in 0..files_for(i) {
                let (ext, icon) = FILE_TYPES[(i + k) % FILE_TYPES.len()];
                push(Category::Files, format!("{}_file{}", name, ext), icon);
            }
        }

        for (i, name) in NAMES.iter().enumerate() {
            for k in 0..chats_for(i) {
                let icon = CHAT_ICONS[(i + k) % CHAT_ICONS.len()];
                push(Category::Chats, format!("Chat with {}", name), icon);
            }
        }

        records
    }
}

fn files_for(position: usize) -> usize {
    1 + position % 2
}

fn chats_for(position: usize) -> usize {
    1 + (position / 2) % 2
}

impl RecordSource for DemoSource {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records())
    }

    fn describe(&self) -> String {
        "demo".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use std::collections::HashSet;

    #[test]
    fn people_come_first_with_sequential_ids() {
        let records = DemoSource::new().records();
        assert_eq!(records[0], Record::new(1, Category::People, "Alice", "👤"));
        assert_eq!(records[25].name, "Zane");
        assert_eq!(records[26].category, Category::Files);

        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        let expected: Vec<u64> = (1..=records.len() as u64).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn every_person_has_one_or_two_files_and_chats() {
        let catalog = Catalog::new(DemoSource::new().records()).unwrap();
        for name in NAMES {
            let files = catalog
                .records()
                .iter()
                .filter(|r| r.category == Category::Files && r.name.starts_with(&format!("{}_", name)))
                .count();
            let chat_name = format!("Chat with {}", name);
            let chats = catalog
                .records()
                .iter()
                .filter(|r| r.category == Category::Chats && r.name == chat_name)
                .count();
            assert!((1..=2).contains(&files), "{} has {} files", name, files);
            assert!((1..=2).contains(&chats), "{} has {} chats", name, chats);
        }
        assert_eq!(catalog.count_of(Category::People), 26);
    }

    #[test]
    fn file_types_do_not_repeat_per_person() {
        let records = DemoSource::new().records();
        let names: Vec<&str> = records
            .iter()
            .filter(|r| r.category == Category::Files)
            .map(|r| r.name.as_str())
            .collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(DemoSource::new().records(), DemoSource::new().records());
    }
}
