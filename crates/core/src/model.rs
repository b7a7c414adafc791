use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Leaf
// ---------------------------------------------------------------------------

/// A single name/value pair. Either side may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Setting")]
pub struct Setting {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Setting {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Value: {}",
            self.name.as_deref().unwrap_or(""),
            self.value.as_deref().unwrap_or("")
        )
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// Ordered settings. Each entry is written as a direct `<Setting>` child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Row")]
pub struct Row {
    #[serde(rename = "Setting", default, skip_serializing_if = "Vec::is_empty")]
    pub setting: Vec<Setting>,
}

impl Row {
    pub fn new(settings: Vec<Setting>) -> Self {
        Self { setting: settings }
    }

    /// Value of the first setting called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.setting
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
            .and_then(|s| s.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Page")]
pub struct Page {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rows in document order.
    #[serde(rename = "Row", default, skip_serializing_if = "Vec::is_empty")]
    pub row: Vec<Row>,
}

impl Page {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: Some(name.into()),
            row: rows,
        }
    }
}

// ---------------------------------------------------------------------------
// Single-child containers
// ---------------------------------------------------------------------------

/// Holds at most one page, despite the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Pages")]
pub struct Pages {
    #[serde(rename = "Page", skip_serializing_if = "Option::is_none")]
    pub page: Option<Page>,
}

impl Pages {
    pub fn new(page: Page) -> Self {
        Self { page: Some(page) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Processor")]
pub struct Processor {
    #[serde(rename = "Pages", skip_serializing_if = "Option::is_none")]
    pub pages: Option<Pages>,
}

impl Processor {
    pub fn new(pages: Pages) -> Self {
        Self { pages: Some(pages) }
    }
}

/// Root of the settings tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "Object")]
pub struct Object {
    #[serde(rename = "Processor", skip_serializing_if = "Option::is_none")]
    pub processor: Option<Processor>,
}

impl Object {
    pub fn new(processor: Processor) -> Self {
        Self {
            processor: Some(processor),
        }
    }

    /// The page at the bottom of the chain, if every level is present.
    pub fn page(&self) -> Option<&Page> {
        self.processor
            .as_ref()?
            .pages
            .as_ref()?
            .page
            .as_ref()
    }
}
