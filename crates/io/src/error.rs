use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    /// File or stream access failed.
    Io(String),
    /// The value could not be written as XML.
    Encode(String),
    /// Malformed markup, or content that does not map onto the target type.
    Parse(String),
    /// The document root is not the element the target type expects.
    RootMismatch { expected: &'static str, found: String },
    /// Empty path or empty text; nothing was read.
    EmptyInput,
    /// Formatting policy could not be loaded or is invalid.
    Config(String),
}

impl fmt::Display for XmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Encode(msg) => write!(f, "encode error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::RootMismatch { expected, found } => {
                write!(f, "expected root element <{expected}>, found <{found}>")
            }
            Self::EmptyInput => write!(f, "empty input"),
            Self::Config(msg) => write!(f, "format config error: {msg}"),
        }
    }
}

impl std::error::Error for XmlError {}

impl From<std::io::Error> for XmlError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
