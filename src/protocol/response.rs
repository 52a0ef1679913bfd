//! Response status codes and their classification.
//!
//! OBEX response codes are single bytes whose top bit is the "final" flag.
//! Flow control only cares whether the masked code equals
//! [`codes::SUCCESS`]; every other code is a failure, even informative ones.

use std::fmt;

/// Final bit carried by every terminal response.
pub const FINAL_BIT: u8 = 0x80;

/// Raw response codes (without the final bit).
pub mod codes {
    pub const CONTINUE: u8 = 0x10;
    pub const SWITCH_PRO: u8 = 0x11;
    pub const SUCCESS: u8 = 0x20;
    pub const CREATED: u8 = 0x21;
    pub const ACCEPTED: u8 = 0x22;
    pub const NO_CONTENT: u8 = 0x24;
    pub const BAD_REQUEST: u8 = 0x40;
    pub const UNAUTHORIZED: u8 = 0x41;
    pub const PAYMENT_REQUIRED: u8 = 0x42;
    pub const FORBIDDEN: u8 = 0x43;
    pub const NOT_FOUND: u8 = 0x44;
    pub const METHOD_NOT_ALLOWED: u8 = 0x45;
    pub const CONFLICT: u8 = 0x49;
    pub const INTERNAL_SERVER_ERROR: u8 = 0x50;
    pub const NOT_IMPLEMENTED: u8 = 0x51;
    pub const DATABASE_FULL: u8 = 0x60;
    pub const DATABASE_LOCKED: u8 = 0x61;
}

/// Closed set of response outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Continue,
    SwitchingProtocols,
    Success,
    Created,
    Accepted,
    NoContent,
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    Conflict,
    InternalServerError,
    NotImplemented,
    DatabaseFull,
    DatabaseLocked,
    Unknown,
}

impl ResponseKind {
    /// Classify a raw status byte. The final bit is ignored.
    pub fn from_status(raw: u8) -> Self {
        match raw & !FINAL_BIT {
            codes::CONTINUE => ResponseKind::Continue,
            codes::SWITCH_PRO => ResponseKind::SwitchingProtocols,
            codes::SUCCESS => ResponseKind::Success,
            codes::CREATED => ResponseKind::Created,
            codes::ACCEPTED => ResponseKind::Accepted,
            codes::NO_CONTENT => ResponseKind::NoContent,
            codes::BAD_REQUEST => ResponseKind::BadRequest,
            codes::UNAUTHORIZED => ResponseKind::Unauthorized,
            codes::PAYMENT_REQUIRED => ResponseKind::PaymentRequired,
            codes::FORBIDDEN => ResponseKind::Forbidden,
            codes::NOT_FOUND => ResponseKind::NotFound,
            codes::METHOD_NOT_ALLOWED => ResponseKind::MethodNotAllowed,
            codes::CONFLICT => ResponseKind::Conflict,
            codes::INTERNAL_SERVER_ERROR => ResponseKind::InternalServerError,
            codes::NOT_IMPLEMENTED => ResponseKind::NotImplemented,
            codes::DATABASE_FULL => ResponseKind::DatabaseFull,
            codes::DATABASE_LOCKED => ResponseKind::DatabaseLocked,
            _ => ResponseKind::Unknown,
        }
    }

    /// Human-readable description.
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseKind::Continue => "Continue",
            ResponseKind::SwitchingProtocols => "Switching protocols",
            ResponseKind::Success => "OK, Success",
            ResponseKind::Created => "Created",
            ResponseKind::Accepted => "Accepted",
            ResponseKind::NoContent => "No Content",
            ResponseKind::BadRequest => "Bad Request",
            ResponseKind::Unauthorized => "Unauthorized",
            ResponseKind::PaymentRequired => "Payment required",
            ResponseKind::Forbidden => "Forbidden",
            ResponseKind::NotFound => "Not found",
            ResponseKind::MethodNotAllowed => "Method not allowed",
            ResponseKind::Conflict => "Conflict",
            ResponseKind::InternalServerError => "Internal server error",
            ResponseKind::NotImplemented => "Not implemented!",
            ResponseKind::DatabaseFull => "Database full",
            ResponseKind::DatabaseLocked => "Database locked",
            ResponseKind::Unknown => "Unknown response",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw response status byte as returned by the request engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// The byte exactly as received.
    #[inline]
    pub fn raw(self) -> u8 {
        self.0
    }

    /// Response code with the final bit masked off.
    #[inline]
    pub fn code(self) -> u8 {
        self.0 & !FINAL_BIT
    }

    #[inline]
    pub fn is_final(self) -> bool {
        self.0 & FINAL_BIT != 0
    }

    /// True only for `SUCCESS`, with or without the final bit.
    #[inline]
    pub fn is_success(self) -> bool {
        self.code() == codes::SUCCESS
    }

    #[inline]
    pub fn kind(self) -> ResponseKind {
        ResponseKind::from_status(self.0)
    }
}

impl From<u8> for Status {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind(), f)
    }
}

/// Text for a raw status byte (standalone function).
pub fn response_to_string(raw: u8) -> &'static str {
    ResponseKind::from_status(raw).as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_and_without_final_bit() {
        assert!(Status::new(0x20).is_success());
        assert!(Status::new(0xA0).is_success());
        assert!(!Status::new(0x20).is_final());
        assert!(Status::new(0xA0).is_final());
        assert_eq!(Status::new(0xA0).kind(), ResponseKind::Success);
    }

    #[test]
    fn test_bad_request_is_failure() {
        let status = Status::new(0xC0);
        assert_eq!(status.kind(), ResponseKind::BadRequest);
        assert!(!status.is_success());
        assert_eq!(status.to_string(), "Bad Request");
    }

    #[test]
    fn test_informative_codes_are_not_success() {
        for raw in [0x10, 0x90, 0x21, 0x22, 0xA4] {
            assert!(!Status::new(raw).is_success(), "0x{raw:02x}");
        }
    }

    #[test]
    fn test_classification_table() {
        let table = [
            (0x10, ResponseKind::Continue, "Continue"),
            (0x11, ResponseKind::SwitchingProtocols, "Switching protocols"),
            (0x20, ResponseKind::Success, "OK, Success"),
            (0x21, ResponseKind::Created, "Created"),
            (0x22, ResponseKind::Accepted, "Accepted"),
            (0x24, ResponseKind::NoContent, "No Content"),
            (0x40, ResponseKind::BadRequest, "Bad Request"),
            (0x41, ResponseKind::Unauthorized, "Unauthorized"),
            (0x42, ResponseKind::PaymentRequired, "Payment required"),
            (0x43, ResponseKind::Forbidden, "Forbidden"),
            (0x44, ResponseKind::NotFound, "Not found"),
            (0x45, ResponseKind::MethodNotAllowed, "Method not allowed"),
            (0x49, ResponseKind::Conflict, "Conflict"),
            (0x50, ResponseKind::InternalServerError, "Internal server error"),
            (0x51, ResponseKind::NotImplemented, "Not implemented!"),
            (0x60, ResponseKind::DatabaseFull, "Database full"),
            (0x61, ResponseKind::DatabaseLocked, "Database locked"),
        ];
        for (raw, kind, text) in table {
            assert_eq!(ResponseKind::from_status(raw), kind);
            assert_eq!(ResponseKind::from_status(raw | FINAL_BIT), kind);
            assert_eq!(response_to_string(raw), text);
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(ResponseKind::from_status(0x7F), ResponseKind::Unknown);
        assert_eq!(response_to_string(0x23), "Unknown response");
    }
}
