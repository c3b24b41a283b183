use alloc::string::String;
use core::{
    fmt,
    ops::Deref,
    str,
};

use crate::common::{
    Bytes32,
    DigestError,
};

/// A SHA-256 output.
///
/// The canonical textual form is 64 lowercase hex characters with no prefix.
/// Parsing also accepts a `0x` prefix and uppercase digits.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Digest(Bytes32);

impl Digest {
    /// Memory length of the type
    pub const LEN: usize = 32;

    pub const fn new(bytes: Bytes32) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &Bytes32 {
        &self.0
    }

    pub const fn into_inner(self) -> Bytes32 {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The lowercase hex rendering as raw ASCII bytes.
    pub fn to_hex_bytes(&self) -> [u8; 2 * Self::LEN] {
        let mut buffer = [0u8; 2 * Self::LEN];
        hex::encode_to_slice(self.0, &mut buffer)
            .expect("32 bytes always encode into 64 hex characters");
        buffer
    }
}

impl Deref for Digest {
    type Target = Bytes32;

    fn deref(&self) -> &Bytes32 {
        &self.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes32> for Digest {
    fn from(bytes: Bytes32) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for Bytes32 {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl PartialEq<Bytes32> for Digest {
    fn eq(&self, other: &Bytes32) -> bool {
        &self.0 == other
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = DigestError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Bytes32::try_from(bytes)
            .map(Self)
            .map_err(|_| DigestError::InvalidLength(bytes.len()))
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?
        }

        self.0.iter().try_for_each(|b| write!(f, "{:02x}", &b))
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:x})", self)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <Self as fmt::LowerHex>::fmt(self, f)
    }
}

impl str::FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != 2 * Self::LEN {
            return Err(DigestError::InvalidLength(s.len()))
        }

        let mut bytes = Bytes32::default();
        hex::decode_to_slice(s, &mut bytes).map_err(|_| DigestError::InvalidHex)?;

        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
mod use_serde {
    use super::*;
    use serde::{
        de,
        Deserialize,
        Deserializer,
        Serialize,
        Serializer,
    };

    impl Serialize for Digest {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Digest {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let encoded = String::deserialize(deserializer)?;
            encoded.parse().map_err(de::Error::custom)
        }
    }
}
