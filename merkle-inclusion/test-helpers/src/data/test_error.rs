use thiserror::Error;

use crate::data::Encoding;

#[derive(Clone, Debug, Error)]
pub enum TestError {
    #[error("{name}: {reason}")]
    Failed { name: String, reason: String },
    #[error("cannot decode {value:?} as {encoding}")]
    Decoding { encoding: Encoding, value: String },
    #[error("cannot load fixture: {0}")]
    Fixture(String),
}
