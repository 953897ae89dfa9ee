//! # Asset Identifiers
//!
//! The two identifier types that key the value algebra: [`PolicyId`] names
//! a minting authority (a 28-byte script hash), [`AssetName`] names a token
//! class under that authority (0–32 free-form bytes). The native currency
//! is not a special structure — it is simply the reserved pair of empty
//! identifiers, [`PolicyId::ada()`] and [`AssetName::ada()`].
//!
//! Both types derive `Ord` over their raw bytes, so sorting them is
//! byte-lexicographic. That ordering is load-bearing: it defines the
//! canonical order of [`Value`](super::Value) and therefore its equality.
//!
//! Over the wire, identifiers travel as lowercase hex strings.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Byte length of a non-empty policy id (a BLAKE2b-224 script hash).
pub const POLICY_ID_LENGTH: usize = 28;

/// Maximum byte length of an asset name.
pub const MAX_ASSET_NAME_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while constructing or parsing identifiers.
#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    /// A policy id must be exactly [`POLICY_ID_LENGTH`] bytes, or empty
    /// for the native currency.
    #[error("policy id must be {POLICY_ID_LENGTH} bytes or empty, got {0} bytes")]
    BadPolicyIdLength(usize),

    /// An asset name longer than [`MAX_ASSET_NAME_LENGTH`] bytes.
    #[error("asset name must be at most {MAX_ASSET_NAME_LENGTH} bytes, got {0} bytes")]
    AssetNameTooLong(usize),

    /// The hex string could not be decoded.
    #[error("invalid hex in identifier: {0}")]
    BadHex(#[from] hex::FromHexError),
}

// ---------------------------------------------------------------------------
// PolicyId
// ---------------------------------------------------------------------------

/// Identifier of a token-minting authority.
///
/// Either exactly 28 bytes (the hash of the minting policy) or empty,
/// which is the identifier reserved for the native currency.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyId(Vec<u8>);

impl PolicyId {
    /// Creates a policy id from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::BadPolicyIdLength`] unless the input is empty or
    /// exactly [`POLICY_ID_LENGTH`] bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, IdError> {
        let bytes = bytes.into();
        if !bytes.is_empty() && bytes.len() != POLICY_ID_LENGTH {
            return Err(IdError::BadPolicyIdLength(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// The reserved empty policy id of the native currency.
    pub fn ada() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if this is the native-currency policy id.
    pub fn is_ada(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the lowercase hex encoding (empty string for ADA).
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parses a hex-encoded policy id.
    pub fn from_hex(s: &str) -> Result<Self, IdError> {
        Self::new(hex::decode(s)?)
    }
}

impl fmt::Debug for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ada() {
            write!(f, "PolicyId(ada)")
        } else {
            write!(f, "PolicyId({}...)", &self.to_hex()[..12])
        }
    }
}

impl fmt::Display for PolicyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for PolicyId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for PolicyId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for PolicyId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// AssetName
// ---------------------------------------------------------------------------

/// Identifier of a token class under one policy.
///
/// Free-form bytes, at most 32 of them. Often UTF-8 ("SpaceBudz1234") but
/// nothing enforces that, so display is always hex. The empty name is
/// reserved for the native currency.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetName(Vec<u8>);

impl AssetName {
    /// Creates an asset name from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::AssetNameTooLong`] past [`MAX_ASSET_NAME_LENGTH`]
    /// bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, IdError> {
        let bytes = bytes.into();
        if bytes.len() > MAX_ASSET_NAME_LENGTH {
            return Err(IdError::AssetNameTooLong(bytes.len()));
        }
        Ok(Self(bytes))
    }

    /// The reserved empty asset name of the native currency.
    pub fn ada() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if this is the native-currency asset name.
    pub fn is_ada(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the lowercase hex encoding (empty string for ADA).
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Parses a hex-encoded asset name.
    pub fn from_hex(s: &str) -> Result<Self, IdError> {
        Self::new(hex::decode(s)?)
    }
}

impl fmt::Debug for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetName({})", self.to_hex())
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::str::FromStr for AssetName {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for AssetName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AssetName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_id_accepts_28_bytes() {
        let id = PolicyId::new([0x33u8; POLICY_ID_LENGTH]).unwrap();
        assert_eq!(id.as_bytes().len(), POLICY_ID_LENGTH);
        assert!(!id.is_ada());
    }

    #[test]
    fn policy_id_accepts_empty() {
        let id = PolicyId::new(Vec::new()).unwrap();
        assert!(id.is_ada());
        assert_eq!(id, PolicyId::ada());
    }

    #[test]
    fn policy_id_rejects_odd_lengths() {
        for len in [1usize, 27, 29, 32] {
            let result = PolicyId::new(vec![0u8; len]);
            assert_eq!(result, Err(IdError::BadPolicyIdLength(len)));
        }
    }

    #[test]
    fn asset_name_accepts_up_to_32_bytes() {
        assert!(AssetName::new(Vec::new()).is_ok());
        assert!(AssetName::new(vec![0xffu8; MAX_ASSET_NAME_LENGTH]).is_ok());
    }

    #[test]
    fn asset_name_rejects_33_bytes() {
        let result = AssetName::new(vec![0u8; 33]);
        assert_eq!(result, Err(IdError::AssetNameTooLong(33)));
    }

    #[test]
    fn policy_id_hex_roundtrip() {
        let id = PolicyId::new([0xabu8; POLICY_ID_LENGTH]).unwrap();
        let recovered = PolicyId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn asset_name_hex_roundtrip() {
        let name = AssetName::new(b"SpaceBudz".to_vec()).unwrap();
        let recovered: AssetName = name.to_hex().parse().unwrap();
        assert_eq!(name, recovered);
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(PolicyId::from_hex("zz").is_err());
        assert!(AssetName::from_hex("0").is_err());
    }

    #[test]
    fn ordering_is_byte_lexicographic() {
        let a = AssetName::new(vec![0x01]).unwrap();
        let b = AssetName::new(vec![0x01, 0x00]).unwrap();
        let c = AssetName::new(vec![0x02]).unwrap();
        assert!(AssetName::ada() < a);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn ada_identifiers_are_empty() {
        assert!(PolicyId::ada().as_bytes().is_empty());
        assert!(AssetName::ada().as_bytes().is_empty());
        assert_eq!(PolicyId::ada().to_hex(), "");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let id = PolicyId::new([0x11u8; POLICY_ID_LENGTH]).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "11".repeat(POLICY_ID_LENGTH)));

        let recovered: PolicyId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn serde_rejects_wrong_length() {
        let result: Result<PolicyId, _> = serde_json::from_str("\"1234\"");
        assert!(result.is_err());
    }
}
