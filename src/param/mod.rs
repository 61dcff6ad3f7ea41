// src/param/mod.rs

pub mod error;
#[cfg(test)]
pub(crate) mod fixture;
pub mod layout;
pub mod read;

pub use error::ParamError;
pub use prc::param::ParamKind;
pub use read::{read_bytes, read_file};

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Viewer-side helpers on decoded params.
pub trait ParamExt {
    fn type_name(&self) -> &'static str;

    /// Display form of a leaf value; `None` for lists and structs.
    fn value_string(&self) -> Option<String>;

    /// Number of children for lists and structs, `None` for leaves.
    fn children_len(&self) -> Option<usize>;
}

impl ParamExt for ParamKind {
    fn type_name(&self) -> &'static str {
        match self {
            ParamKind::Bool(_) => "bool",
            ParamKind::I8(_) => "i8",
            ParamKind::U8(_) => "u8",
            ParamKind::I16(_) => "i16",
            ParamKind::U16(_) => "u16",
            ParamKind::I32(_) => "i32",
            ParamKind::U32(_) => "u32",
            ParamKind::Float(_) => "float",
            ParamKind::Hash(_) => "hash40",
            ParamKind::Str(_) => "string",
            ParamKind::List(_) => "list",
            ParamKind::Struct(_) => "struct",
        }
    }

    fn value_string(&self) -> Option<String> {
        Some(match self {
            ParamKind::Bool(v) => v.to_string(),
            ParamKind::I8(v) => v.to_string(),
            ParamKind::U8(v) => v.to_string(),
            ParamKind::I16(v) => v.to_string(),
            ParamKind::U16(v) => v.to_string(),
            ParamKind::I32(v) => v.to_string(),
            ParamKind::U32(v) => v.to_string(),
            ParamKind::Float(v) => v.to_string(),
            ParamKind::Hash(v) => v.to_string(),
            ParamKind::Str(v) => format!("{:?}", v),
            ParamKind::List(_) | ParamKind::Struct(_) => return None,
        })
    }

    fn children_len(&self) -> Option<usize> {
        match self {
            ParamKind::List(v) => Some(v.0.len()),
            ParamKind::Struct(v) => Some(v.0.len()),
            _ => None,
        }
    }
}

/// Serializes a param tree: structs as maps keyed by hash display, lists as
/// sequences, leaves as scalars.
pub struct Serialized<'a>(pub &'a ParamKind);

impl Serialize for Serialized<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            ParamKind::Bool(v) => serializer.serialize_bool(*v),
            ParamKind::I8(v) => serializer.serialize_i8(*v),
            ParamKind::U8(v) => serializer.serialize_u8(*v),
            ParamKind::I16(v) => serializer.serialize_i16(*v),
            ParamKind::U16(v) => serializer.serialize_u16(*v),
            ParamKind::I32(v) => serializer.serialize_i32(*v),
            ParamKind::U32(v) => serializer.serialize_u32(*v),
            ParamKind::Float(v) => serializer.serialize_f32(*v),
            ParamKind::Hash(v) => serializer.collect_str(v),
            ParamKind::Str(v) => serializer.serialize_str(v),
            ParamKind::List(children) => {
                let mut seq = serializer.serialize_seq(Some(children.0.len()))?;
                for child in children.0.iter() {
                    seq.serialize_element(&Serialized(child))?;
                }
                seq.end()
            }
            ParamKind::Struct(children) => {
                let mut map = serializer.serialize_map(Some(children.0.len()))?;
                for (hash, child) in children.0.iter() {
                    map.serialize_entry(&hash.to_string(), &Serialized(child))?;
                }
                map.end()
            }
        }
    }
}
