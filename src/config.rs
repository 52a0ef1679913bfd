//! Session configuration.
//!
//! # Example
//!
//! ```
//! use exword::SessionConfig;
//!
//! let config = SessionConfig::from_json(r#"{ "debug": 2 }"#).unwrap();
//! assert_eq!(config.debug, 2);
//! assert_eq!(config.vendor_id, 0x07cf);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Casio USB vendor identifier.
pub const CASIO_VENDOR_ID: u16 = 0x07cf;

/// EX-Word product identifier.
pub const EXWORD_PRODUCT_ID: u16 = 0x6101;

/// Configuration for opening a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Vendor id the device must report.
    pub vendor_id: u16,
    /// Product id the device must report.
    pub product_id: u16,
    /// Tracing verbosity for exchanges: 0 quiet, 1 per request, 2 per header.
    pub debug: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            vendor_id: CASIO_VENDOR_ID,
            product_id: EXWORD_PRODUCT_ID,
            debug: 0,
        }
    }
}

impl SessionConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signature() {
        let config = SessionConfig::default();
        assert_eq!(config.vendor_id, 0x07cf);
        assert_eq!(config.product_id, 0x6101);
        assert_eq!(config.debug, 0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SessionConfig::from_json(r#"{"product_id": 4660}"#).unwrap();
        assert_eq!(config.product_id, 0x1234);
        assert_eq!(config.vendor_id, CASIO_VENDOR_ID);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = SessionConfig::from_json("{ debug: }").unwrap_err();
        assert!(err.to_string().contains("Config error"));
    }
}
