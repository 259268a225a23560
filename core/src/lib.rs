#![forbid(unsafe_code)]

mod error;
mod num;

pub use error::TallyError;
pub use num::{BigNumber, CHUNK_BASE};
