//! Encode and decode [`XmlDocument`] values.
//!
//! Encoding is strict: every failure, including I/O on save, is returned to the
//! caller. Decoding comes in two flavours:
//!
//! - `try_decode_*` returns `Result<T, XmlError>`.
//! - `decode_*` never fails. Any error is logged and `T::default()` is
//!   returned, so one corrupt file cannot abort a bulk load. The price is that
//!   a failed decode looks the same as a document that held an empty tree.
//!
//! Output carries no XML declaration, no namespace declarations and no
//! byte-order mark.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::se::Serializer;
use quick_xml::Reader;
use serde::Serialize;

use crate::document::XmlDocument;
use crate::error::XmlError;
use crate::format::XmlFormat;

const BOM: char = '\u{feff}';

// =============================================================================
// Encode
// =============================================================================

pub fn encode_to_text<T: XmlDocument>(value: &T) -> Result<String, XmlError> {
    encode_to_text_with(value, &XmlFormat::default())
}

pub fn encode_to_text_with<T: XmlDocument>(
    value: &T,
    format: &XmlFormat,
) -> Result<String, XmlError> {
    format.validate()?;

    let mut text = String::new();
    let mut ser = Serializer::with_root(&mut text, Some(T::ROOT))
        .map_err(|e| XmlError::Encode(e.to_string()))?;
    if format.is_indented() {
        ser.indent(format.indent_char, format.indent_size);
    }
    value
        .serialize(ser)
        .map_err(|e| XmlError::Encode(e.to_string()))?;

    Ok(text)
}

/// Write the document to any byte sink. The sink is flushed but not closed.
pub fn encode_to_writer<T: XmlDocument, W: Write>(value: &T, writer: W) -> Result<(), XmlError> {
    write_document(value, &XmlFormat::default(), writer)
}

/// Create or truncate `path` and write the document to it.
pub fn encode_to_file<T: XmlDocument>(value: &T, path: &Path) -> Result<(), XmlError> {
    encode_to_file_with(value, path, &XmlFormat::default())
}

pub fn encode_to_file_with<T: XmlDocument>(
    value: &T,
    path: &Path,
    format: &XmlFormat,
) -> Result<(), XmlError> {
    // Encode before touching the file so a failed encode leaves it intact.
    let text = encode_to_text_with(value, format)?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn write_document<T: XmlDocument, W: Write>(
    value: &T,
    format: &XmlFormat,
    mut writer: W,
) -> Result<(), XmlError> {
    let text = encode_to_text_with(value, format)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Decode (strict)
// =============================================================================

pub fn try_decode_from_text<T: XmlDocument>(text: &str) -> Result<T, XmlError> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    if text.trim().is_empty() {
        return Err(XmlError::EmptyInput);
    }

    let root = root_element(text)?;
    if root != T::ROOT {
        return Err(XmlError::RootMismatch {
            expected: T::ROOT,
            found: root,
        });
    }

    quick_xml::de::from_str(text).map_err(|e| XmlError::Parse(e.to_string()))
}

pub fn try_decode_from_file<T: XmlDocument>(path: &Path) -> Result<T, XmlError> {
    if path.as_os_str().is_empty() {
        return Err(XmlError::EmptyInput);
    }
    let text = fs::read_to_string(path)?;
    try_decode_from_text(&text)
}

/// Reads `stream` to the end. The caller keeps ownership and closes it.
pub fn try_decode_from_stream<T: XmlDocument>(stream: &mut impl Read) -> Result<T, XmlError> {
    let mut text = String::new();
    stream.read_to_string(&mut text)?;
    try_decode_from_text(&text)
}

/// Decode every regular file directly inside `dir`, sorted by file name.
///
/// Subdirectories are skipped. A missing or unreadable directory yields an
/// empty list.
pub fn try_decode_directory<T: XmlDocument>(dir: &Path) -> Vec<(PathBuf, Result<T, XmlError>)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    files
        .into_iter()
        .map(|path| {
            let result = try_decode_from_file(&path);
            (path, result)
        })
        .collect()
}

/// Name of the first element in the document.
fn root_element(text: &str) -> Result<String, XmlError> {
    let mut reader = Reader::from_str(text);

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(XmlError::Parse("no root element".to_string())),
            Ok(_) => {}
            Err(e) => return Err(XmlError::Parse(e.to_string())),
        }
    }
}

// =============================================================================
// Decode (default on failure)
// =============================================================================

pub fn decode_from_text<T: XmlDocument>(text: &str) -> T {
    or_default(try_decode_from_text(text), "string")
}

pub fn decode_from_file<T: XmlDocument>(path: &Path) -> T {
    or_default(
        try_decode_from_file(path),
        format_args!("file. File: {}", path.display()),
    )
}

pub fn decode_from_stream<T: XmlDocument>(stream: &mut impl Read) -> T {
    or_default(try_decode_from_stream(stream), "stream")
}

/// One entry per file, in file-name order. Files that fail to decode
/// contribute `T::default()` at their position.
pub fn decode_directory<T: XmlDocument>(dir: &Path) -> Vec<T> {
    try_decode_directory(dir)
        .into_iter()
        .map(|(path, result)| {
            or_default(result, format_args!("file. File: {}", path.display()))
        })
        .collect()
}

fn or_default<T: XmlDocument>(result: Result<T, XmlError>, source: impl Display) -> T {
    match result {
        Ok(value) => value,
        Err(XmlError::EmptyInput) => {
            log::debug!("Nothing to deserialize from {}", source);
            T::default()
        }
        Err(e) => {
            log::warn!("Failed to deserialize <{}> from {}. Error: {}", T::ROOT, source, e);
            T::default()
        }
    }
}
