// XML encode/decode for the settings tree

pub mod document;
pub mod error;
pub mod format;
pub mod xml;

pub use document::XmlDocument;
pub use error::XmlError;
pub use format::XmlFormat;
pub use xml::{
    decode_directory, decode_from_file, decode_from_stream, decode_from_text, encode_to_file,
    encode_to_file_with, encode_to_text, encode_to_text_with, encode_to_writer,
    try_decode_directory, try_decode_from_file, try_decode_from_stream, try_decode_from_text,
};
