// src/param/error.rs

use thiserror::Error;

/// Layout problems found before a param file is handed to the decoder.
#[derive(Error, Debug)]
pub enum ParamError {
    #[error("invalid magic {0:?}, expected \"paracobn\"")]
    BadMagic([u8; 8]),

    #[error("unexpected end of data at offset {offset:#x} (wanted {wanted} bytes)")]
    UnexpectedEof { offset: usize, wanted: usize },

    #[error("unknown param type tag {tag} at offset {offset:#x}")]
    UnknownType { tag: u8, offset: usize },

    #[error("hash index {index} out of range ({len} hashes in table)")]
    HashIndex { index: u32, len: usize },

    #[error("invalid string at offset {offset:#x}: {reason}")]
    InvalidString { offset: usize, reason: String },

    #[error("root param must be a struct, found type tag {0}")]
    RootNotStruct(u8),

    #[error("params nested deeper than {0} levels")]
    TooDeep(usize),

    #[error("param tree references more than {limit} nodes; offsets are shared or looping")]
    TooManyNodes { limit: usize },
}
