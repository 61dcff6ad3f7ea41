// src/param/layout.rs

use super::ParamError;

pub(crate) const MAGIC: &[u8; 8] = b"paracobn";
const HEADER_LEN: usize = 0x10;
const MAX_DEPTH: usize = 128;

pub(crate) const TYPE_BOOL: u8 = 1;
pub(crate) const TYPE_I8: u8 = 2;
pub(crate) const TYPE_U8: u8 = 3;
pub(crate) const TYPE_I16: u8 = 4;
pub(crate) const TYPE_U16: u8 = 5;
pub(crate) const TYPE_I32: u8 = 6;
pub(crate) const TYPE_U32: u8 = 7;
pub(crate) const TYPE_FLOAT: u8 = 8;
pub(crate) const TYPE_HASH: u8 = 9;
pub(crate) const TYPE_STR: u8 = 10;
pub(crate) const TYPE_LIST: u8 = 11;
pub(crate) const TYPE_STRUCT: u8 = 12;

/// Walk every offset in a param file without decoding values. Returns the
/// number of nodes visited.
///
/// Every node takes at least two bytes, so a walk visiting more nodes than the
/// file has bytes is following shared or looping offsets and is cut off.
pub fn check_layout(data: &[u8]) -> Result<usize, ParamError> {
    let magic: [u8; 8] = array(data, 0)?;
    if &magic != MAGIC {
        return Err(ParamError::BadMagic(magic));
    }

    let hash_size = read_u32(data, 0x08)? as usize;
    let ref_size = read_u32(data, 0x0C)? as usize;
    let ref_start = HEADER_LEN + hash_size;
    let param_start = ref_start + ref_size;
    slice(data, HEADER_LEN, hash_size)?;

    let root_tag = read_u8(data, param_start)?;
    if root_tag != TYPE_STRUCT {
        return Err(ParamError::RootNotStruct(root_tag));
    }

    let mut walk = Walk {
        data,
        hash_count: hash_size / 8,
        ref_start,
        visited: 0,
        budget: data.len(),
    };
    walk.node(param_start, 0)?;
    Ok(walk.visited)
}

struct Walk<'a> {
    data: &'a [u8],
    hash_count: usize,
    ref_start: usize,
    visited: usize,
    budget: usize,
}

impl Walk<'_> {
    fn node(&mut self, pos: usize, depth: usize) -> Result<(), ParamError> {
        if depth > MAX_DEPTH {
            return Err(ParamError::TooDeep(MAX_DEPTH));
        }
        self.visited += 1;
        if self.visited > self.budget {
            return Err(ParamError::TooManyNodes { limit: self.budget });
        }

        let data = self.data;
        let body = pos + 1;
        match read_u8(data, pos)? {
            TYPE_BOOL | TYPE_I8 | TYPE_U8 => {
                slice(data, body, 1)?;
            }
            TYPE_I16 | TYPE_U16 => {
                slice(data, body, 2)?;
            }
            TYPE_I32 | TYPE_U32 | TYPE_FLOAT => {
                slice(data, body, 4)?;
            }
            TYPE_HASH => self.hash_index(read_u32(data, body)?)?,
            TYPE_STR => {
                let offset = self.ref_start + read_u32(data, body)? as usize;
                check_cstr(data, offset)?;
            }
            TYPE_LIST => {
                let count = read_u32(data, body)? as usize;
                for i in 0..count {
                    let rel = read_u32(data, body + 4 + i * 4)? as usize;
                    self.node(pos + rel, depth + 1)?;
                }
            }
            TYPE_STRUCT => {
                let count = read_u32(data, body)? as usize;
                let table = self.ref_start + read_u32(data, body + 4)? as usize;
                for i in 0..count {
                    let entry = table + i * 8;
                    self.hash_index(read_u32(data, entry)?)?;
                    let rel = read_u32(data, entry + 4)? as usize;
                    self.node(pos + rel, depth + 1)?;
                }
            }
            tag => return Err(ParamError::UnknownType { tag, offset: pos }),
        }
        Ok(())
    }

    fn hash_index(&self, index: u32) -> Result<(), ParamError> {
        if (index as usize) < self.hash_count {
            Ok(())
        } else {
            Err(ParamError::HashIndex {
                index,
                len: self.hash_count,
            })
        }
    }
}

fn slice(data: &[u8], offset: usize, len: usize) -> Result<&[u8], ParamError> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(ParamError::UnexpectedEof { offset, wanted: len })
}

fn array<const N: usize>(data: &[u8], offset: usize) -> Result<[u8; N], ParamError> {
    let mut out = [0u8; N];
    out.copy_from_slice(slice(data, offset, N)?);
    Ok(out)
}

fn read_u8(data: &[u8], offset: usize) -> Result<u8, ParamError> {
    Ok(slice(data, offset, 1)?[0])
}

fn read_u32(data: &[u8], offset: usize) -> Result<u32, ParamError> {
    Ok(u32::from_le_bytes(array(data, offset)?))
}

fn check_cstr(data: &[u8], offset: usize) -> Result<(), ParamError> {
    let tail = data
        .get(offset..)
        .ok_or(ParamError::UnexpectedEof { offset, wanted: 1 })?;
    let len = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| ParamError::InvalidString {
            offset,
            reason: "missing NUL terminator".into(),
        })?;
    std::str::from_utf8(&tail[..len]).map_err(|e| ParamError::InvalidString {
        offset,
        reason: e.to_string(),
    })?;
    Ok(())
}
