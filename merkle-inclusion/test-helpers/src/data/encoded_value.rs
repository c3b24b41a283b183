use core::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data::TestError;

/// How a leaf or queried value is written down in a fixture.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Base64,
    Hex,
    #[serde(rename = "utf-8")]
    Utf8,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base64 => f.write_str("base64"),
            Self::Hex => f.write_str("hex"),
            Self::Utf8 => f.write_str("utf-8"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EncodedValue {
    value: String,
    encoding: Encoding,
}

impl EncodedValue {
    pub fn new(value: impl Into<String>, encoding: Encoding) -> Self {
        Self {
            value: value.into(),
            encoding,
        }
    }

    /// The raw bytes the value stands for. Hex values may carry a `0x`
    /// prefix.
    pub fn into_bytes(self) -> Result<Vec<u8>, TestError> {
        let decoded = match self.encoding {
            Encoding::Base64 => base64::decode(&self.value).ok(),
            Encoding::Hex => {
                let digits = self.value.strip_prefix("0x").unwrap_or(&self.value);
                hex::decode(digits).ok()
            }
            Encoding::Utf8 => return Ok(self.value.into_bytes()),
        };

        decoded.ok_or(TestError::Decoding {
            encoding: self.encoding,
            value: self.value,
        })
    }
}
