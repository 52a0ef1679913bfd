//! # exword
//!
//! File management for Casio EX-Word electronic dictionaries.
//!
//! The dictionary is reached over USB through OBEX. Administrative commands
//! are ordinary GET/PUT requests against reserved pseudo-filenames such as
//! `_Model` or `_List`, and their answers are compact big-endian records.
//!
//! ## Architecture
//!
//! - **Codec**: UTF-16BE filename marshaling, directory/capacity/model decoders
//! - **Protocol**: OBEX request/response objects, pseudo-command catalog,
//!   response classification
//! - **Transport**: device discovery and request-engine traits (mock, `usb`)
//! - **Session**: owns one device handle and one request engine, exposes the
//!   transfer operations
//!
//! ## Example
//!
//! ```
//! use exword::protocol::{Header, Response, Status};
//! use exword::transport::mock::{MockDevice, MockEngine, MockTransport};
//! use exword::{Session, SessionConfig};
//! use bytes::Bytes;
//!
//! let mut transport = MockTransport::new(vec![MockDevice::new(0x07cf, 0x6101)]);
//! let mut session = Session::open(&mut transport, SessionConfig::default(), |_, _| {
//!     let mut engine = MockEngine::new();
//!     engine.push_response(Response::new(Status::new(0xA0)));
//!     engine.push_response(Response::new(Status::new(0xA0)).with_header(Header::Body(
//!         Bytes::from_static(&[0, 0, 0, 10, 0, 0, 0, 5]),
//!     )));
//!     Ok(engine)
//! })?;
//!
//! session.connect()?;
//! let cap = session.get_capacity()?;
//! assert_eq!(cap.free(), 5);
//! session.close();
//! # Ok::<(), exword::ExwordError>(())
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod protocol;
pub mod session;
pub mod transport;

mod operations;

pub use codec::{CapacityRecord, DirectoryEntry, ModelRecord};
pub use config::SessionConfig;
pub use error::{ExwordError, Result};
pub use protocol::{ResponseKind, Status};
pub use session::{DeviceIdentity, Session};
