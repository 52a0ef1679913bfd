//! Transfer operations.
//!
//! Every operation is one blocking request/response exchange:
//! 1. Build a request of the right command kind
//! 2. Attach NAME / LENGTH / BODY headers
//! 3. Execute it through the session's request engine
//! 4. On success, scan the returned headers and decode the payload
//!
//! A response whose masked code is not `SUCCESS` is returned as
//! [`ExwordError::Status`] carrying the raw byte. A successful response whose
//! payload is missing or inconsistent is [`ExwordError::MissingHeader`] or
//! [`ExwordError::Decode`].

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::{
    decode_capacity, decode_directory, decode_model, CapacityRecord, DirectoryEntry,
    FilenameCodec, ModelRecord,
};
use crate::error::{ExwordError, Result};
use crate::protocol::{Command, Header, HeaderId, PseudoCommand, Request, Response, Status};
use crate::session::Session;
use crate::transport::RequestEngine;

impl<H, E: RequestEngine> Session<H, E> {
    /// Open the OBEX connection.
    pub fn connect(&mut self) -> Result<Status> {
        self.exchange(Request::new(Command::Connect)).map(|r| r.status())
    }

    /// Close the OBEX connection.
    pub fn disconnect(&mut self) -> Result<Status> {
        self.exchange(Request::new(Command::Disconnect))
            .map(|r| r.status())
    }

    /// Upload `data` as `name` in the current directory.
    pub fn send_file(&mut self, name: impl AsRef<[u8]>, data: impl Into<Bytes>) -> Result<Status> {
        let name = checked_name(name.as_ref())?;
        let data = data.into();
        let length = wire_length(data.len())?;
        let request = Request::new(Command::Put)
            .with_header(Header::Name(FilenameCodec::encode(name)))
            .with_header(Header::Length(length))
            .with_header(Header::Body(data));
        self.exchange(request).map(|r| r.status())
    }

    /// Download `name` from the current directory.
    ///
    /// A response without a LENGTH header yields an empty payload.
    pub fn get_file(&mut self, name: impl AsRef<[u8]>) -> Result<Bytes> {
        let name = checked_name(name.as_ref())?;
        let request =
            Request::new(Command::Get).with_header(Header::Name(FilenameCodec::encode(name)));
        let response = self.exchange(request)?;

        let mut length = None;
        for header in response.headers() {
            match header {
                Header::Length(n) => length = Some(*n as usize),
                Header::Body(body) => {
                    let n = length.unwrap_or(0);
                    if body.len() < n {
                        return Err(ExwordError::Decode(format!(
                            "file body has {} bytes, LENGTH declared {}",
                            body.len(),
                            n
                        )));
                    }
                    return Ok(body.slice(..n));
                }
                Header::Name(_) => {}
            }
        }

        match length {
            Some(n) if n > 0 => Err(ExwordError::MissingHeader(HeaderId::Body)),
            _ => Ok(Bytes::new()),
        }
    }

    /// Delete `name` from the current directory.
    ///
    /// The BODY is the plain, NUL-terminated filename rather than its
    /// unicode form.
    pub fn remove_file(&mut self, name: impl AsRef<[u8]>) -> Result<Status> {
        let name = checked_name(name.as_ref())?;
        let mut body = BytesMut::with_capacity(name.len() + 1);
        body.put_slice(name);
        body.put_u8(0);
        self.put_pseudo(PseudoCommand::Remove, body.freeze())
    }

    /// Format the removable storage card.
    pub fn sd_format(&mut self) -> Result<Status> {
        self.put_pseudo(PseudoCommand::SdFormat, Bytes::from_static(&[0]))
    }

    /// Unlock the device for administrative commands.
    pub fn unlock(&mut self) -> Result<Status> {
        self.put_pseudo(PseudoCommand::Unlock, Bytes::from_static(&[0]))
    }

    /// Re-lock the device.
    pub fn lock(&mut self) -> Result<Status> {
        self.put_pseudo(PseudoCommand::Lock, Bytes::from_static(&[0]))
    }

    /// Register a user name and id with the device.
    pub fn set_name(&mut self, name: impl AsRef<[u8]>, id: impl AsRef<[u8]>) -> Result<Status> {
        let name = checked_name(name.as_ref())?;
        let id = checked_name(id.as_ref())?;
        let mut body = BytesMut::with_capacity(name.len() + id.len() + 2);
        body.put_slice(name);
        body.put_u8(0);
        body.put_slice(id);
        body.put_u8(0);
        self.put_pseudo(PseudoCommand::CName, body.freeze())
    }

    /// Change the current directory.
    ///
    /// An empty `path` selects the root: the NAME header is sent with zero
    /// length instead of an encoded empty string. `flags` go in the SETPATH
    /// non-header data (see [`setpath_flags`](crate::protocol::setpath_flags)).
    pub fn set_path(&mut self, path: impl AsRef<[u8]>, flags: u8) -> Result<Status> {
        let path = checked_name(path.as_ref())?;
        let name = if path.is_empty() {
            Bytes::new()
        } else {
            FilenameCodec::encode(path)
        };
        let mut request = Request::new(Command::SetPath);
        request.set_non_header_data(&[flags, 0x00]);
        request.push_header(Header::Name(name));
        self.exchange(request).map(|r| r.status())
    }

    /// Query the model identification.
    pub fn get_model(&mut self) -> Result<ModelRecord> {
        let response = self.get_pseudo(PseudoCommand::Model)?;
        decode_model(body_of(&response)?)
    }

    /// Query storage capacity of the current medium.
    pub fn get_capacity(&mut self) -> Result<CapacityRecord> {
        let response = self.get_pseudo(PseudoCommand::Cap)?;
        decode_capacity(body_of(&response)?)
    }

    /// List the current directory.
    pub fn list_directory(&mut self) -> Result<Vec<DirectoryEntry>> {
        let response = self.get_pseudo(PseudoCommand::List)?;
        decode_directory(body_of(&response)?)
    }

    fn get_pseudo(&mut self, command: PseudoCommand) -> Result<Response> {
        let request = Request::new(Command::Get).with_header(pseudo_name(command));
        self.exchange(request)
    }

    fn put_pseudo(&mut self, command: PseudoCommand, body: Bytes) -> Result<Status> {
        let length = wire_length(body.len())?;
        let request = Request::new(Command::Put)
            .with_header(pseudo_name(command))
            .with_header(Header::Length(length))
            .with_header(Header::Body(body));
        self.exchange(request).map(|r| r.status())
    }

    /// Execute one request and fail on any non-success status.
    fn exchange(&mut self, request: Request) -> Result<Response> {
        if self.debug >= 2 {
            for header in request.headers() {
                tracing::debug!(
                    "  > {:?} ({} bytes): {:02x?}",
                    header.id(),
                    header.value_len(),
                    header
                );
            }
        }

        let response = self.engine.execute(&request)?;
        let status = response.status();

        if self.debug >= 1 {
            tracing::debug!(
                "{:?} -> 0x{:02x} {}",
                request.command(),
                status.raw(),
                status
            );
        }
        if self.debug >= 2 {
            for header in response.headers() {
                tracing::debug!("  < {:?} ({} bytes)", header.id(), header.value_len());
            }
        }

        if status.is_success() {
            Ok(response)
        } else {
            Err(ExwordError::Status(status))
        }
    }
}

fn pseudo_name(command: PseudoCommand) -> Header {
    Header::Name(Bytes::from_static(command.wire_name()))
}

fn body_of(response: &Response) -> Result<&Bytes> {
    response
        .body()
        .ok_or(ExwordError::MissingHeader(HeaderId::Body))
}

/// Names travel as C strings; an interior NUL would truncate them.
fn checked_name(name: &[u8]) -> Result<&[u8]> {
    if name.contains(&0) {
        return Err(ExwordError::InvalidName);
    }
    Ok(name)
}

fn wire_length(len: usize) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| ExwordError::Decode(format!("payload of {} bytes exceeds u32 length", len)))
}
