// src/param/fixture.rs

//! Builds param files for tests.

use super::layout::*;

pub(crate) enum Node {
    Bool(bool),
    U8(u8),
    I16(i16),
    I32(i32),
    Float(f32),
    Hash(u64),
    Str(&'static str),
    List(Vec<Node>),
    Struct(Vec<(u64, Node)>),
}

#[derive(Default)]
struct Encoder {
    hashes: Vec<u64>,
    refs: Vec<u8>,
    params: Vec<u8>,
}

impl Encoder {
    fn hash_index(&mut self, hash: u64) -> u32 {
        match self.hashes.iter().position(|&h| h == hash) {
            Some(i) => i as u32,
            None => {
                self.hashes.push(hash);
                (self.hashes.len() - 1) as u32
            }
        }
    }

    fn put_u32(buf: &mut [u8], at: usize, value: u32) {
        buf[at..at + 4].copy_from_slice(&value.to_le_bytes());
    }

    fn node(&mut self, node: &Node) {
        let pos = self.params.len();
        match node {
            Node::Bool(v) => self.params.extend([TYPE_BOOL, *v as u8]),
            Node::U8(v) => self.params.extend([TYPE_U8, *v]),
            Node::I16(v) => {
                self.params.push(TYPE_I16);
                self.params.extend(v.to_le_bytes());
            }
            Node::I32(v) => {
                self.params.push(TYPE_I32);
                self.params.extend(v.to_le_bytes());
            }
            Node::Float(v) => {
                self.params.push(TYPE_FLOAT);
                self.params.extend(v.to_le_bytes());
            }
            Node::Hash(v) => {
                let index = self.hash_index(*v);
                self.params.push(TYPE_HASH);
                self.params.extend(index.to_le_bytes());
            }
            Node::Str(v) => {
                let offset = self.refs.len() as u32;
                self.refs.extend_from_slice(v.as_bytes());
                self.refs.push(0);
                self.params.push(TYPE_STR);
                self.params.extend(offset.to_le_bytes());
            }
            Node::List(children) => {
                self.params.push(TYPE_LIST);
                self.params.extend((children.len() as u32).to_le_bytes());
                let table = self.params.len();
                self.params.resize(table + children.len() * 4, 0);
                for (i, child) in children.iter().enumerate() {
                    let rel = (self.params.len() - pos) as u32;
                    Self::put_u32(&mut self.params, table + i * 4, rel);
                    self.node(child);
                }
            }
            Node::Struct(children) => {
                let table = self.refs.len();
                self.refs.resize(table + children.len() * 8, 0);
                self.params.push(TYPE_STRUCT);
                self.params.extend((children.len() as u32).to_le_bytes());
                self.params.extend((table as u32).to_le_bytes());
                for (i, (hash, child)) in children.iter().enumerate() {
                    let index = self.hash_index(*hash);
                    let rel = (self.params.len() - pos) as u32;
                    Self::put_u32(&mut self.refs, table + i * 8, index);
                    Self::put_u32(&mut self.refs, table + i * 8 + 4, rel);
                    self.node(child);
                }
            }
        }
    }
}

/// Assemble a file from raw sections.
pub(crate) fn assemble(hashes: &[u64], refs: &[u8], params: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    out.extend_from_slice(&((hashes.len() * 8) as u32).to_le_bytes());
    out.extend_from_slice(&(refs.len() as u32).to_le_bytes());
    for h in hashes {
        out.extend_from_slice(&h.to_le_bytes());
    }
    out.extend_from_slice(refs);
    out.extend_from_slice(params);
    out
}

pub(crate) fn u32s(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Encode a root struct.
pub(crate) fn encode(root: Vec<(u64, Node)>) -> Vec<u8> {
    let mut enc = Encoder::default();
    enc.node(&Node::Struct(root));
    assemble(&enc.hashes, &enc.refs, &enc.params)
}

pub(crate) const HASH_A: u64 = 0x0a_1111_0001;
pub(crate) const HASH_B: u64 = 0x0b_2222_0002;

/// root { HASH_A: i32 -5, HASH_B: [true, "hi"] }
pub(crate) fn sample_file() -> Vec<u8> {
    encode(vec![
        (HASH_A, Node::I32(-5)),
        (HASH_B, Node::List(vec![Node::Bool(true), Node::Str("hi")])),
    ])
}
