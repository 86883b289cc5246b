use crate::error::SiftError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The kind of a record. These are the only tabs that can be hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Files,
    Chats,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::People, Category::Files, Category::Chats];

    /// Order of the checkboxes in the settings panel.
    pub const SETTINGS_ORDER: [Category; 3] = [Category::Files, Category::People, Category::Chats];

    pub fn label(&self) -> &'static str {
        match self {
            Category::People => "People",
            Category::Files => "Files",
            Category::Chats => "Chats",
        }
    }

    /// The lowercase name used in catalog files (`"type": "files"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::People => "people",
            Category::Files => "files",
            Category::Chats => "chats",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "people" => Ok(Category::People),
            "files" => Ok(Category::Files),
            "chats" => Ok(Category::Chats),
            _ => Err(SiftError::InvalidCategory(s.to_string())),
        }
    }
}

/// A choice on the tab row: a single category, or the `All` sentinel.
///
/// `All` is not a category. It can be selected but never toggled, so it is
/// always present on the tab row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    All,
    Category(Category),
}

impl Tab {
    pub const PEOPLE: Tab = Tab::Category(Category::People);
    pub const FILES: Tab = Tab::Category(Category::Files);
    pub const CHATS: Tab = Tab::Category(Category::Chats);

    /// Every tab, in the default tab row order.
    pub const ALL_TABS: [Tab; 4] = [Tab::All, Tab::FILES, Tab::PEOPLE, Tab::CHATS];

    pub fn category(&self) -> Option<Category> {
        match self {
            Tab::All => None,
            Tab::Category(c) => Some(*c),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All",
            Tab::Category(c) => c.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::All => "🗂️",
            Tab::Category(Category::People) => "👤",
            Tab::Category(Category::Files) => "📎",
            Tab::Category(Category::Chats) => "💬",
        }
    }
}

impl From<Category> for Tab {
    fn from(category: Category) -> Self {
        Tab::Category(category)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(Tab::All);
        }
        s.parse::<Category>().map(Tab::Category)
    }
}

impl Serialize for Tab {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Tab {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A single catalog entry. Records are never modified once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    #[serde(rename = "type")]
    pub category: Category,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl Record {
    pub fn new(id: u64, category: Category, name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id,
            category,
            name: name.into(),
            icon: icon.into(),
        }
    }
}
