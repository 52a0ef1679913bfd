//! Pseudo-filenames the device interprets as administrative commands.
//!
//! Each name is sent as the NAME header of a GET or PUT. The device tells
//! them apart from real files by the leading underscore. The wire bytes are
//! built at compile time; `N` must equal `2 * name.len() + 2` or the build
//! fails.

/// Widen an ASCII literal into UTF-16BE with a double-NUL terminator.
const fn wide<const N: usize>(name: &[u8]) -> [u8; N] {
    assert!(N == name.len() * 2 + 2);
    let mut out = [0u8; N];
    let mut i = 0;
    while i < name.len() {
        out[2 * i + 1] = name[i];
        i += 1;
    }
    out
}

const MODEL: [u8; 14] = wide(b"_Model");
const LIST: [u8; 12] = wide(b"_List");
const REMOVE: [u8; 16] = wide(b"_Remove");
const CAP: [u8; 10] = wide(b"_Cap");
const SD_FORMAT: [u8; 20] = wide(b"_SdFormat");
const UNLOCK: [u8; 16] = wide(b"_Unlock");
const LOCK: [u8; 12] = wide(b"_Lock");
const CNAME: [u8; 14] = wide(b"_CName");
const CRYPT_KEY: [u8; 20] = wide(b"_CryptKey");

/// Catalog of device-recognized pseudo-commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoCommand {
    Model,
    List,
    Remove,
    Cap,
    SdFormat,
    Unlock,
    Lock,
    CName,
    CryptKey,
}

impl PseudoCommand {
    pub const ALL: [PseudoCommand; 9] = [
        PseudoCommand::Model,
        PseudoCommand::List,
        PseudoCommand::Remove,
        PseudoCommand::Cap,
        PseudoCommand::SdFormat,
        PseudoCommand::Unlock,
        PseudoCommand::Lock,
        PseudoCommand::CName,
        PseudoCommand::CryptKey,
    ];

    /// Encoded name, including the terminator.
    pub fn wire_name(self) -> &'static [u8] {
        match self {
            PseudoCommand::Model => &MODEL,
            PseudoCommand::List => &LIST,
            PseudoCommand::Remove => &REMOVE,
            PseudoCommand::Cap => &CAP,
            PseudoCommand::SdFormat => &SD_FORMAT,
            PseudoCommand::Unlock => &UNLOCK,
            PseudoCommand::Lock => &LOCK,
            PseudoCommand::CName => &CNAME,
            PseudoCommand::CryptKey => &CRYPT_KEY,
        }
    }

    /// Header length the device expects for this name.
    pub fn wire_len(self) -> usize {
        self.wire_name().len()
    }

    /// The plain ASCII name, for logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            PseudoCommand::Model => "_Model",
            PseudoCommand::List => "_List",
            PseudoCommand::Remove => "_Remove",
            PseudoCommand::Cap => "_Cap",
            PseudoCommand::SdFormat => "_SdFormat",
            PseudoCommand::Unlock => "_Unlock",
            PseudoCommand::Lock => "_Lock",
            PseudoCommand::CName => "_CName",
            PseudoCommand::CryptKey => "_CryptKey",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_literal_bytes() {
        let expected = [0, b'_', 0, b'M', 0, b'o', 0, b'd', 0, b'e', 0, b'l', 0, 0];
        assert_eq!(PseudoCommand::Model.wire_name(), &expected[..]);
        assert_eq!(PseudoCommand::Model.wire_len(), 14);
    }

    #[test]
    fn test_fixed_lengths() {
        let lengths = [
            (PseudoCommand::Model, 14),
            (PseudoCommand::List, 12),
            (PseudoCommand::Remove, 16),
            (PseudoCommand::Cap, 10),
            (PseudoCommand::SdFormat, 20),
            (PseudoCommand::Unlock, 16),
            (PseudoCommand::Lock, 12),
            (PseudoCommand::CName, 14),
            (PseudoCommand::CryptKey, 20),
        ];
        for (cmd, len) in lengths {
            assert_eq!(cmd.wire_len(), len, "{}", cmd.as_str());
        }
    }

    #[test]
    fn test_names_match_ascii_form() {
        for cmd in PseudoCommand::ALL {
            let wire = cmd.wire_name();
            let ascii = cmd.as_str().as_bytes();
            assert_eq!(wire.len(), ascii.len() * 2 + 2);
            for (i, &c) in ascii.iter().enumerate() {
                assert_eq!(wire[2 * i], 0);
                assert_eq!(wire[2 * i + 1], c);
            }
            assert_eq!(&wire[wire.len() - 2..], &[0, 0]);
            assert!(ascii.starts_with(b"_"));
        }
    }
}
