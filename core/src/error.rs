use std::{error, fmt};

use crate::num::CHUNK_BASE;

#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum TallyError {
    InvalidChunkValue(u32),
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChunkValue(value) => {
                write!(f, "chunk value {} must be less than {}", value, CHUNK_BASE)
            }
        }
    }
}

impl error::Error for TallyError {}
