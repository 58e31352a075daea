//! Compact MD5 hash type used for cache keys
//!
//! Hashes are stored as their raw 16 bytes and rendered as lowercase hex, which
//! keeps every derived file name within `[0-9a-f]`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string is not a 32-character hex MD5 digest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid hash format: {hash}. Expected MD5 hex string")]
pub struct InvalidHash {
    pub hash: String,
}

/// MD5 digest stored as a 16-byte array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Md5Hash([u8; 16]);

impl Md5Hash {
    /// Hash arbitrary bytes
    pub fn compute(data: impl AsRef<[u8]>) -> Self {
        Md5Hash(md5::compute(data).0)
    }

    /// Create an MD5 hash from a hex string (case insensitive)
    pub fn from_hex(hex: &str) -> Result<Self, InvalidHash> {
        let invalid = || InvalidHash {
            hash: hex.to_string(),
        };

        if hex.len() != 32 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut bytes = [0u8; 16];
        for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
            let pair = std::str::from_utf8(chunk).map_err(|_| invalid())?;
            bytes[i] = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
        }

        Ok(Md5Hash(bytes))
    }

    /// Lowercase 32-character hexadecimal representation
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for Md5Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Md5Hash {
    type Err = InvalidHash;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
