// Output formatting policy
// Optionally loaded from a TOML file, e.g.
//
//     indent_char = "\t"
//     indent_size = 1

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::XmlError;

/// Indentation used when writing documents.
///
/// The rest of the policy is fixed: no XML declaration, no namespace
/// declarations, UTF-8 without a byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlFormat {
    /// Either a space or a tab.
    pub indent_char: char,
    /// Characters per nesting level. 0 writes the document on one line.
    pub indent_size: usize,
}

impl Default for XmlFormat {
    fn default() -> Self {
        Self {
            indent_char: ' ',
            indent_size: 2,
        }
    }
}

impl XmlFormat {
    /// Single-line output.
    pub const fn compact() -> Self {
        Self {
            indent_char: ' ',
            indent_size: 0,
        }
    }

    pub fn is_indented(&self) -> bool {
        self.indent_size > 0
    }

    pub fn validate(&self) -> Result<(), XmlError> {
        if matches!(self.indent_char, ' ' | '\t') {
            Ok(())
        } else {
            Err(XmlError::Config(format!(
                "indent_char must be a space or a tab, got {:?}",
                self.indent_char
            )))
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, XmlError> {
        let format: Self = toml::from_str(s).map_err(|e| XmlError::Config(e.to_string()))?;
        format.validate()?;
        Ok(format)
    }

    /// Load from disk, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::debug!("No format config at {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_toml_str(&contents) {
            Ok(format) => format,
            Err(e) => {
                log::warn!("Error reading {}: {}. Using default format", path.display(), e);
                Self::default()
            }
        }
    }
}
