#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

/// Length of the textual form of an [`ObjectId`].
pub const OBJECT_ID_HEX_LEN: usize = 24;

/// A server-assigned record identifier.
///
/// Twelve bytes on the server side, exchanged as 24 hexadecimal characters.
/// Parsing is case-insensitive; rendering is always lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        if value.len() != OBJECT_ID_HEX_LEN {
            return Err(CatalogError::invalid_identifier(value));
        }
        let mut out = [0u8; 12];
        hex::decode_to_slice(value, &mut out)
            .map_err(|_| CatalogError::invalid_identifier(value))?;
        Ok(Self(out))
    }

    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 12] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl FromStr for ObjectId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl serde::Serialize for ObjectId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// The numeric, client-only `id` some historical records carry.
///
/// A record that has a legacy id but no [`ObjectId`] has never been persisted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct LegacyId(pub u64);

impl LegacyId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LegacyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
