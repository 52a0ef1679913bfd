//! Codec module - filename marshaling and record decoding.
//!
//! - [`FilenameCodec`] - ASCII names to UTF-16BE with a double-NUL terminator
//! - [`decode_directory`], [`decode_capacity`], [`decode_model`] - parsers for
//!   the BODY payloads returned by pseudo-command queries
//!
//! All decoders check bounds against the actual body length and return
//! [`ExwordError::Decode`](crate::ExwordError::Decode) instead of reading past
//! the end.

mod filename;
mod records;

pub use filename::FilenameCodec;
pub use records::{
    decode_capacity, decode_directory, decode_model, CapacityRecord, DirectoryEntry, ModelRecord,
    CAPACITY_RECORD_SIZE, ENTRY_FLAG_DIR, ENTRY_FLAG_UNICODE, LENGTH_PREFIX_SIZE,
    MODEL_RECORD_SIZE,
};
