//! OBEX request and response objects.
//!
//! The device speaks a small subset of OBEX: five command kinds and three
//! header kinds. A [`Request`] is built by the transfer operations and handed
//! to a [`RequestEngine`](crate::transport::RequestEngine), which executes it
//! and returns a [`Response`] with the status byte and any returned headers.
//!
//! ```text
//! ┌─────────┬───────────────┬──────────────────────────┐
//! │ Command │ non-hdr data  │ headers (NAME/LENGTH/BODY│
//! │ 1 byte  │ SETPATH only  │ in insertion order)      │
//! └─────────┴───────────────┴──────────────────────────┘
//! ```

use bytes::Bytes;

use super::response::Status;

/// Request command kinds understood by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Connect,
    Disconnect,
    Put,
    Get,
    SetPath,
}

impl Command {
    /// OBEX opcode (without the final bit).
    pub fn opcode(self) -> u8 {
        match self {
            Command::Connect => 0x00,
            Command::Disconnect => 0x01,
            Command::Put => 0x02,
            Command::Get => 0x03,
            Command::SetPath => 0x05,
        }
    }
}

/// Header kinds exchanged with the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderId {
    /// Unicode (or zero-length) object name.
    Name,
    /// Object length, 4-byte big-endian quantity.
    Length,
    /// Object payload.
    Body,
}

impl HeaderId {
    /// OBEX header identifier byte. The top two bits encode the value type.
    pub fn wire_id(self) -> u8 {
        match self {
            HeaderId::Name => 0x01,
            HeaderId::Length => 0xC3,
            HeaderId::Body => 0x48,
        }
    }
}

/// A single request or response header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    Name(Bytes),
    Length(u32),
    Body(Bytes),
}

impl Header {
    /// Header kind.
    pub fn id(&self) -> HeaderId {
        match self {
            Header::Name(_) => HeaderId::Name,
            Header::Length(_) => HeaderId::Length,
            Header::Body(_) => HeaderId::Body,
        }
    }

    /// Encoded value length. 4 for LENGTH, byte count otherwise.
    pub fn value_len(&self) -> usize {
        match self {
            Header::Name(b) | Header::Body(b) => b.len(),
            Header::Length(_) => 4,
        }
    }
}

/// Flags carried in the SETPATH non-header data.
pub mod setpath_flags {
    /// Back up one level before applying the name.
    pub const BACKUP: u8 = 0b0000_0001;
    /// Do not create the directory if it does not exist.
    pub const NO_CREATE: u8 = 0b0000_0010;
}

/// An outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    command: Command,
    headers: Vec<Header>,
    non_header_data: Option<Bytes>,
}

impl Request {
    /// Create an empty request of the given kind.
    pub fn new(command: Command) -> Self {
        Self {
            command,
            headers: Vec::new(),
            non_header_data: None,
        }
    }

    /// Append a header. Headers are sent in insertion order.
    pub fn push_header(&mut self, header: Header) {
        self.headers.push(header);
    }

    /// Builder form of [`push_header`](Self::push_header).
    pub fn with_header(mut self, header: Header) -> Self {
        self.push_header(header);
        self
    }

    /// Attach raw bytes sent between the opcode and the headers.
    ///
    /// Only SETPATH carries such data.
    pub fn set_non_header_data(&mut self, data: &[u8]) {
        debug_assert_eq!(self.command, Command::SetPath);
        self.non_header_data = Some(Bytes::copy_from_slice(data));
    }

    #[inline]
    pub fn command(&self) -> Command {
        self.command
    }

    #[inline]
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    #[inline]
    pub fn non_header_data(&self) -> Option<&[u8]> {
        self.non_header_data.as_deref()
    }

    /// First header of the given kind.
    pub fn header(&self, id: HeaderId) -> Option<&Header> {
        self.headers.iter().find(|h| h.id() == id)
    }
}

/// A response returned by the request engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: Status,
    headers: Vec<Header>,
}

impl Response {
    /// Create a response with no headers.
    pub fn new(status: Status) -> Self {
        Self {
            status,
            headers: Vec::new(),
        }
    }

    /// Builder helper to append a returned header.
    pub fn with_header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Iterate the returned headers in arrival order.
    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }

    /// First BODY header, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.headers.iter().find_map(|h| match h {
            Header::Body(b) => Some(b),
            _ => None,
        })
    }
}
