//! In-memory transport and request engine.
//!
//! # Example
//!
//! ```
//! use exword::protocol::{Command, Request, Response, Status};
//! use exword::transport::mock::MockEngine;
//! use exword::transport::RequestEngine;
//!
//! let mut engine = MockEngine::new();
//! engine.push_response(Response::new(Status::new(0xA0)));
//!
//! let rsp = engine.execute(&Request::new(Command::Connect)).unwrap();
//! assert!(rsp.status().is_success());
//! assert_eq!(engine.requests().len(), 1);
//! ```

use std::collections::VecDeque;

use crate::error::{ExwordError, Result};
use crate::protocol::{codes, Request, Response, Status, FINAL_BIT};

use super::{DeviceHandle, RequestEngine, Transport};

/// A fake attached device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDevice {
    pub vendor_id: u16,
    pub product_id: u16,
    /// `None` simulates an unreadable descriptor.
    pub manufacturer: Option<String>,
    pub product: Option<String>,
}

impl MockDevice {
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            manufacturer: None,
            product: None,
        }
    }

    pub fn with_strings(mut self, manufacturer: &str, product: &str) -> Self {
        self.manufacturer = Some(manufacturer.to_string());
        self.product = Some(product.to_string());
        self
    }
}

impl DeviceHandle for MockDevice {
    fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    fn product_id(&self) -> u16 {
        self.product_id
    }

    fn manufacturer(&self) -> Result<String> {
        self.manufacturer
            .clone()
            .ok_or_else(|| ExwordError::Transport("manufacturer descriptor unavailable".into()))
    }

    fn product(&self) -> Result<String> {
        self.product
            .clone()
            .ok_or_else(|| ExwordError::Transport("product descriptor unavailable".into()))
    }
}

/// Transport over a fixed list of fake devices, in enumeration order.
#[derive(Debug, Default)]
pub struct MockTransport {
    devices: Vec<MockDevice>,
    /// Number of successful opens.
    pub opened: usize,
}

impl MockTransport {
    pub fn new(devices: Vec<MockDevice>) -> Self {
        Self { devices, opened: 0 }
    }
}

impl Transport for MockTransport {
    type Handle = MockDevice;

    fn open(&mut self, vendor_id: u16, product_id: u16) -> Result<MockDevice> {
        let device = self
            .devices
            .iter()
            .find(|d| d.vendor_id == vendor_id && d.product_id == product_id)
            .cloned()
            .ok_or(ExwordError::DeviceNotFound {
                vendor_id,
                product_id,
            })?;
        self.opened += 1;
        Ok(device)
    }
}

/// Request engine answering from a scripted queue.
///
/// Every executed request is recorded. When the queue is empty the engine
/// answers `SUCCESS | FINAL` with no headers.
#[derive(Debug, Default)]
pub struct MockEngine {
    responses: VecDeque<Result<Response>>,
    requests: Vec<Request>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next response.
    pub fn push_response(&mut self, response: Response) {
        self.responses.push_back(Ok(response));
    }

    /// Queue an engine failure.
    pub fn push_error(&mut self, error: ExwordError) {
        self.responses.push_back(Err(error));
    }

    /// Requests executed so far, oldest first.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&Request> {
        self.requests.last()
    }
}

impl RequestEngine for MockEngine {
    fn execute(&mut self, request: &Request) -> Result<Response> {
        self.requests.push(request.clone());
        self.responses
            .pop_front()
            .unwrap_or_else(|| Ok(Response::new(Status::new(codes::SUCCESS | FINAL_BIT))))
    }
}
