//! Protocol module - OBEX vocabulary, pseudo-commands, and status codes.
//!
//! This module describes what goes over the wire:
//! - Request/response objects with NAME, LENGTH and BODY headers
//! - The fixed catalog of administrative pseudo-filenames
//! - Response code classification

mod obex;
mod pseudo;
mod response;

pub use obex::{setpath_flags, Command, Header, HeaderId, Request, Response};
pub use pseudo::PseudoCommand;
pub use response::{codes, response_to_string, ResponseKind, Status, FINAL_BIT};
