//! Session lifecycle.
//!
//! A [`Session`] owns one open device handle and one request engine bound to
//! it. Opening a session:
//! 1. Find the first device matching the configured vendor/product pair
//! 2. Read manufacturer/product strings (failures are logged, not fatal)
//! 3. Initialize the request engine for that device
//!
//! If any step fails, everything acquired so far is dropped before the error
//! is returned.
//!
//! # Example
//!
//! ```
//! use exword::transport::mock::{MockDevice, MockEngine, MockTransport};
//! use exword::{Session, SessionConfig};
//!
//! let mut transport = MockTransport::new(vec![
//!     MockDevice::new(0x07cf, 0x6101).with_strings("CASIO", "EX-word"),
//! ]);
//! let session = Session::open(&mut transport, SessionConfig::default(), |_, _| {
//!     Ok(MockEngine::new())
//! })
//! .unwrap();
//!
//! assert_eq!(session.identity().product, "EX-word");
//! session.close();
//! ```

use serde::Serialize;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::transport::{DeviceHandle, RequestEngine, Transport};

/// Visible characters kept from each descriptor string.
pub const MAX_DESCRIPTOR_LEN: usize = 19;

/// Identity of the device a session is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeviceIdentity {
    pub vendor_id: u16,
    pub product_id: u16,
    /// Empty when the descriptor could not be read.
    pub manufacturer: String,
    /// Empty when the descriptor could not be read.
    pub product: String,
}

/// An open connection to one device.
///
/// Calls are blocking and must not overlap; the session takes `&mut self`
/// for every exchange.
pub struct Session<H, E> {
    // Field order is drop order: the engine goes before the handle it uses.
    pub(crate) engine: E,
    handle: H,
    identity: DeviceIdentity,
    pub(crate) debug: u8,
}

impl<H, E> Session<H, E>
where
    H: DeviceHandle,
    E: RequestEngine,
{
    /// Find the device, capture its identity, and bind a request engine.
    ///
    /// `init_engine` receives the open handle and the identity read from it.
    pub fn open<T, F>(transport: &mut T, config: SessionConfig, init_engine: F) -> Result<Self>
    where
        T: Transport<Handle = H>,
        F: FnOnce(&H, &DeviceIdentity) -> Result<E>,
    {
        let handle = transport.open(config.vendor_id, config.product_id)?;

        let identity = DeviceIdentity {
            vendor_id: handle.vendor_id(),
            product_id: handle.product_id(),
            manufacturer: descriptor("manufacturer", handle.manufacturer()),
            product: descriptor("product", handle.product()),
        };

        // On error `handle` is dropped here, closing the device.
        let engine = init_engine(&handle, &identity)?;

        tracing::debug!(
            "Opened {:04x}:{:04x} ({} {})",
            identity.vendor_id,
            identity.product_id,
            identity.manufacturer,
            identity.product
        );

        Ok(Self {
            engine,
            handle,
            identity,
            debug: config.debug,
        })
    }
}

impl<H, E> Session<H, E> {
    /// Release the request engine, then the device handle.
    pub fn close(self) {
        let Session {
            engine,
            handle,
            identity,
            ..
        } = self;
        drop(engine);
        drop(handle);
        tracing::debug!(
            "Closed {:04x}:{:04x}",
            identity.vendor_id,
            identity.product_id
        );
    }

    #[inline]
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    #[inline]
    pub fn vendor_id(&self) -> u16 {
        self.identity.vendor_id
    }

    #[inline]
    pub fn product_id(&self) -> u16 {
        self.identity.product_id
    }

    #[inline]
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// The request engine, e.g. to inspect a mock.
    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[inline]
    pub fn debug(&self) -> u8 {
        self.debug
    }

    /// Set exchange tracing verbosity (see [`SessionConfig::debug`]).
    pub fn set_debug(&mut self, level: u8) {
        self.debug = level;
    }
}

/// Close a session that may never have been opened.
pub fn close<H, E>(session: Option<Session<H, E>>) {
    if let Some(session) = session {
        session.close();
    }
}

fn descriptor(which: &str, value: Result<String>) -> String {
    match value {
        Ok(s) => s.chars().take(MAX_DESCRIPTOR_LEN).collect(),
        Err(e) => {
            tracing::warn!("Could not read {} string: {}", which, e);
            String::new()
        }
    }
}
