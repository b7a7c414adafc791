//! `settingsxml-core` — the settings tree.
//!
//! Plain value holders, no I/O. Element names are declared on each type so the
//! markup shape is fixed at compile time.

pub mod model;

pub use model::{Object, Page, Pages, Processor, Row, Setting};
