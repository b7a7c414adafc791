use serde::de::DeserializeOwned;
use serde::Serialize;

use settingsxml_core::{Object, Page, Pages, Processor, Row, Setting};

/// A type that can stand as the root of an XML document.
///
/// Field names come from the type's serde attributes; `ROOT` names the
/// document element and is checked on decode.
pub trait XmlDocument: Serialize + DeserializeOwned + Default {
    const ROOT: &'static str;
}

macro_rules! impl_document {
    ($($ty:ty => $root:literal),* $(,)?) => {
        $(
            impl XmlDocument for $ty {
                const ROOT: &'static str = $root;
            }
        )*
    };
}

impl_document! {
    Object => "Object",
    Processor => "Processor",
    Pages => "Pages",
    Page => "Page",
    Row => "Row",
    Setting => "Setting",
}
