//! Decoders for the record payloads the device returns in BODY headers.
//!
//! Directory listing:
//! ```text
//! ┌─────────┬──────────────────────────┬──────────────────────────┬───
//! │ Count   │ Entry 0                  │ Entry 1                  │ ...
//! │ u16 BE  │ L0 (u16 BE) │ L0-2 bytes │ L1 (u16 BE) │ L1-2 bytes │
//! └─────────┴──────────────────────────┴──────────────────────────┴───
//! ```
//! Each entry length includes its own 2-byte prefix.
//!
//! Capacity: `total` (u32 BE) then `used` (u32 BE).
//!
//! Model: `model` is bytes `[0, 15)` and `sub_model` is bytes `[14, 20)`.
//! The one-byte overlap at offset 14 is how the device lays it out.

use std::fmt;

use bytes::Bytes;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ExwordError, Result};

/// Size of the count prefix and of each entry length prefix.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Minimum capacity body size.
pub const CAPACITY_RECORD_SIZE: usize = 8;

/// Minimum model body size.
pub const MODEL_RECORD_SIZE: usize = 20;

pub const MODEL_LEN: usize = 15;
pub const SUB_MODEL_OFFSET: usize = 14;
pub const SUB_MODEL_LEN: usize = 6;

/// Directory entry flag: entry is a directory.
pub const ENTRY_FLAG_DIR: u8 = 0x01;
/// Directory entry flag: name is stored as unicode.
pub const ENTRY_FLAG_UNICODE: u8 = 0x02;

/// One record of a directory listing, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Encoded record length, prefix included. Not a file size.
    pub size: u16,
    raw: Bytes,
}

impl DirectoryEntry {
    /// The record bytes exactly as received, length prefix included.
    #[inline]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    /// Attribute byte following the length prefix (0 if the record has none).
    pub fn flags(&self) -> u8 {
        self.raw.get(LENGTH_PREFIX_SIZE).copied().unwrap_or(0)
    }

    /// Name bytes after the flags, up to the first NUL.
    pub fn name(&self) -> &[u8] {
        let rest = self.raw.get(LENGTH_PREFIX_SIZE + 1..).unwrap_or(&[]);
        let end = rest.iter().position(|&b| b == 0).unwrap_or(rest.len());
        &rest[..end]
    }

    /// Lossy text form of [`name`](Self::name).
    pub fn name_lossy(&self) -> String {
        String::from_utf8_lossy(self.name()).into_owned()
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.flags() & ENTRY_FLAG_DIR != 0
    }

    #[inline]
    pub fn is_unicode(&self) -> bool {
        self.flags() & ENTRY_FLAG_UNICODE != 0
    }
}

impl Serialize for DirectoryEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DirectoryEntry", 4)?;
        s.serialize_field("size", &self.size)?;
        s.serialize_field("flags", &self.flags())?;
        s.serialize_field("name", &self.name_lossy())?;
        s.serialize_field("is_directory", &self.is_directory())?;
        s.end()
    }
}

/// Storage capacity in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapacityRecord {
    pub total: u32,
    pub used: u32,
}

impl CapacityRecord {
    /// Bytes still available.
    pub fn free(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }
}

/// Model identification block.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelRecord {
    pub model: [u8; MODEL_LEN],
    pub sub_model: [u8; SUB_MODEL_LEN],
}

impl ModelRecord {
    pub fn model_str(&self) -> String {
        trim_nul(&self.model)
    }

    pub fn sub_model_str(&self) -> String {
        trim_nul(&self.sub_model)
    }
}

impl fmt::Debug for ModelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelRecord")
            .field("model", &self.model_str())
            .field("sub_model", &self.sub_model_str())
            .finish()
    }
}

impl Serialize for ModelRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ModelRecord", 2)?;
        s.serialize_field("model", &self.model_str())?;
        s.serialize_field("sub_model", &self.sub_model_str())?;
        s.end()
    }
}

fn trim_nul(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

#[inline]
fn read_u16(body: &[u8], offset: usize) -> Option<u16> {
    let b = body.get(offset..offset + 2)?;
    Some(u16::from_be_bytes([b[0], b[1]]))
}

#[inline]
fn read_u32(body: &[u8], offset: usize) -> Option<u32> {
    let b = body.get(offset..offset + 4)?;
    Some(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}

/// Decode a directory listing body.
///
/// Entries share the input buffer; nothing is copied.
pub fn decode_directory(body: &Bytes) -> Result<Vec<DirectoryEntry>> {
    let count = read_u16(body, 0).ok_or_else(|| {
        ExwordError::Decode(format!(
            "directory listing needs {} bytes for its count, got {}",
            LENGTH_PREFIX_SIZE,
            body.len()
        ))
    })?;

    let mut entries = Vec::with_capacity(count as usize);
    let mut offset = LENGTH_PREFIX_SIZE;
    for index in 0..count {
        let size = read_u16(body, offset).ok_or_else(|| {
            ExwordError::Decode(format!(
                "entry {} of {}: length prefix at offset {} past end of {}-byte body",
                index,
                count,
                offset,
                body.len()
            ))
        })?;
        let len = size as usize;
        if len < LENGTH_PREFIX_SIZE {
            return Err(ExwordError::Decode(format!(
                "entry {} of {}: declared length {} is shorter than its prefix",
                index, count, len
            )));
        }
        if len > body.len() - offset {
            return Err(ExwordError::Decode(format!(
                "entry {} of {}: declared length {} exceeds remaining {} bytes",
                index,
                count,
                len,
                body.len() - offset
            )));
        }
        entries.push(DirectoryEntry {
            size,
            raw: body.slice(offset..offset + len),
        });
        offset += len;
    }

    Ok(entries)
}

/// Decode a capacity body. Trailing bytes are ignored.
pub fn decode_capacity(body: &[u8]) -> Result<CapacityRecord> {
    match (read_u32(body, 0), read_u32(body, 4)) {
        (Some(total), Some(used)) => Ok(CapacityRecord { total, used }),
        _ => Err(ExwordError::Decode(format!(
            "capacity record needs {} bytes, got {}",
            CAPACITY_RECORD_SIZE,
            body.len()
        ))),
    }
}

/// Decode a model body.
pub fn decode_model(body: &[u8]) -> Result<ModelRecord> {
    if body.len() < MODEL_RECORD_SIZE {
        return Err(ExwordError::Decode(format!(
            "model record needs {} bytes, got {}",
            MODEL_RECORD_SIZE,
            body.len()
        )));
    }
    let mut record = ModelRecord::default();
    record.model.copy_from_slice(&body[..MODEL_LEN]);
    record
        .sub_model
        .copy_from_slice(&body[SUB_MODEL_OFFSET..SUB_MODEL_OFFSET + SUB_MODEL_LEN]);
    Ok(record)
}
