//! USB device discovery through `nusb`.

use crate::error::{ExwordError, Result};

use super::{DeviceHandle, Transport};

/// Enumerates the USB bus and opens the first matching device.
#[derive(Debug, Default)]
pub struct UsbTransport;

impl UsbTransport {
    pub fn new() -> Self {
        Self
    }
}

/// An opened USB device with its cached descriptor strings.
pub struct UsbHandle {
    info: nusb::DeviceInfo,
    device: nusb::Device,
}

impl UsbHandle {
    /// The underlying device, for a request engine to claim its interface.
    pub fn device(&self) -> &nusb::Device {
        &self.device
    }
}

impl Transport for UsbTransport {
    type Handle = UsbHandle;

    fn open(&mut self, vendor_id: u16, product_id: u16) -> Result<UsbHandle> {
        let info = nusb::list_devices()?
            .find(|d| d.vendor_id() == vendor_id && d.product_id() == product_id)
            .ok_or(ExwordError::DeviceNotFound {
                vendor_id,
                product_id,
            })?;
        tracing::debug!(
            "Opening USB device {:04x}:{:04x} on bus {} addr {}",
            vendor_id,
            product_id,
            info.bus_number(),
            info.device_address()
        );
        let device = info
            .open()
            .map_err(|e| ExwordError::Transport(format!("failed to open device: {e}")))?;
        Ok(UsbHandle { info, device })
    }
}

impl DeviceHandle for UsbHandle {
    fn vendor_id(&self) -> u16 {
        self.info.vendor_id()
    }

    fn product_id(&self) -> u16 {
        self.info.product_id()
    }

    fn manufacturer(&self) -> Result<String> {
        self.info
            .manufacturer_string()
            .map(str::to_owned)
            .ok_or_else(|| ExwordError::Transport("manufacturer descriptor unavailable".into()))
    }

    fn product(&self) -> Result<String> {
        self.info
            .product_string()
            .map(str::to_owned)
            .ok_or_else(|| ExwordError::Transport("product descriptor unavailable".into()))
    }
}
