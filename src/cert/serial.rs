use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Normalize a serial number into its canonical storage form: lowercase with
/// every colon replaced by a hyphen. No other characters are altered, and no
/// validation is performed; a malformed serial normalizes like any other
/// string and simply never matches a stored key.
pub fn normalize_serial(serial: &str) -> String {
    serial.to_lowercase().replace(':', "-")
}

#[derive(Error, Debug)]
pub enum SerialNumberParseError {
    #[error("Invalid hex character: {0}")]
    InvalidHexCharacter(char),

    #[error("Empty string provided")]
    EmptyString,

    #[error("Invalid length: expected even number of hex characters")]
    InvalidLength,
}

/// A validated certificate serial number, stored as bare lowercase hex.
///
/// The lookup layer deliberately accepts raw strings; this type is for
/// callers that want serials validated before they reach storage, such as
/// the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber {
    hex: String,
}

impl SerialNumber {
    /// Parse a serial in bare, colon- or hyphen-delimited hex, any case.
    pub fn parse(identifier: &str) -> Result<Self, SerialNumberParseError> {
        if identifier.is_empty() {
            return Err(SerialNumberParseError::EmptyString);
        }

        let cleaned = identifier.replace([':', '-'], "").to_lowercase();

        if cleaned.len() % 2 != 0 {
            return Err(SerialNumberParseError::InvalidLength);
        }
        for ch in cleaned.chars() {
            if !ch.is_ascii_hexdigit() {
                return Err(SerialNumberParseError::InvalidHexCharacter(ch));
            }
        }

        Ok(Self { hex: cleaned })
    }

    /// The raw hex form, no delimiters.
    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    /// Hyphen-delimited octet pairs, the canonical storage rendering
    /// (e.g. "3b-fc-2e-b1").
    pub fn as_hyphen_hex(&self) -> String {
        self.octet_pairs().join("-")
    }

    /// Colon-delimited octet pairs, the conventional display rendering
    /// (e.g. "3b:fc:2e:b1").
    pub fn as_colon_hex(&self) -> String {
        self.octet_pairs().join(":")
    }

    fn octet_pairs(&self) -> Vec<String> {
        self.hex
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect()
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_colon_hex())
    }
}

impl FromStr for SerialNumber {
    type Err = SerialNumberParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SerialNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_colon_hex())
    }
}

impl<'de> Deserialize<'de> for SerialNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SerialNumber::parse(&s).map_err(serde::de::Error::custom)
    }
}
