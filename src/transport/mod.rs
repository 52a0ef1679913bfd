//! Transport module - the collaborators a session is built on.
//!
//! - [`Transport`] finds and opens the USB device
//! - [`DeviceHandle`] is the open device; dropping it closes it
//! - [`RequestEngine`] executes OBEX requests against the device
//!
//! [`mock`] provides in-memory implementations of all three. With the `usb`
//! feature, `UsbTransport` enumerates real devices through `nusb`.

pub mod mock;
#[cfg(feature = "usb")]
mod usb;

#[cfg(feature = "usb")]
pub use usb::{UsbHandle, UsbTransport};

use crate::error::Result;
use crate::protocol::{Request, Response};

/// Device discovery.
pub trait Transport {
    type Handle: DeviceHandle;

    /// Open the first attached device reporting `vendor_id:product_id`.
    ///
    /// Returns [`ExwordError::DeviceNotFound`](crate::ExwordError::DeviceNotFound)
    /// when nothing matches.
    fn open(&mut self, vendor_id: u16, product_id: u16) -> Result<Self::Handle>;
}

/// An open device.
pub trait DeviceHandle {
    fn vendor_id(&self) -> u16;
    fn product_id(&self) -> u16;
    /// Manufacturer string descriptor.
    fn manufacturer(&self) -> Result<String>;
    /// Product string descriptor.
    fn product(&self) -> Result<String>;
}

/// OBEX request execution.
///
/// One call is one blocking request/response exchange. Timeouts and
/// retransmission belong to the implementation.
pub trait RequestEngine {
    fn execute(&mut self, request: &Request) -> Result<Response>;
}

impl<E: RequestEngine + ?Sized> RequestEngine for Box<E> {
    fn execute(&mut self, request: &Request) -> Result<Response> {
        (**self).execute(request)
    }
}
