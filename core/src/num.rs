use crate::error::TallyError;
use std::cmp::max;
use std::fmt::{Debug, Display, Error, Formatter};
use std::ops::Add;

/// Each chunk holds nine decimal digits.
pub const CHUNK_BASE: u32 = 1_000_000_000;

const INITIAL_CAPACITY: usize = 5;

/// An arbitrary-precision unsigned integer, stored as base-10^9 chunks.
///
/// Chunks are little-endian. The canonical representation of zero is the
/// empty chunk sequence; any other canonical value has a nonzero most
/// significant chunk.
#[derive(Clone, PartialEq, Eq)]
pub struct BigNumber {
    chunks: Vec<u32>,
}

#[allow(clippy::as_conversions, clippy::cast_possible_truncation)]
const fn truncate(n: u64) -> u32 {
    n as u32
}

/// Adds two chunks, returning the reduced sum and a 0-or-1 overflow.
///
/// `x + y` is at most `2 * (CHUNK_BASE - 1)`, which fits in a `u32`.
fn add_chunks(x: u32, y: u32) -> (u32, u32) {
    debug_assert!(x < CHUNK_BASE && y < CHUNK_BASE);
    let sum = x + y;
    if sum >= CHUNK_BASE {
        (sum - CHUNK_BASE, 1)
    } else {
        (sum, 0)
    }
}

impl BigNumber {
    pub fn new() -> Self {
        Self {
            chunks: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Appends `chunk` as the new most significant chunk.
    pub fn push_chunk(&mut self, chunk: u32) -> Result<(), TallyError> {
        if chunk >= CHUNK_BASE {
            return Err(TallyError::InvalidChunkValue(chunk));
        }
        self.chunks.push(chunk);
        Ok(())
    }

    fn get(&self, idx: usize) -> u32 {
        if idx < self.chunks.len() {
            self.chunks[idx]
        } else {
            0
        }
    }

    /// Trims most significant zero chunks, leaving the empty sequence for
    /// zero. Idempotent; capacity is unchanged.
    pub fn normalize(&mut self) {
        while let Some(0) = self.chunks.last() {
            self.chunks.pop();
        }
    }
}

impl Default for BigNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl Add<&BigNumber> for &BigNumber {
    type Output = BigNumber;

    fn add(self, other: &BigNumber) -> BigNumber {
        let len = max(self.chunks.len(), other.chunks.len());
        let mut result = BigNumber {
            chunks: Vec::with_capacity(len + 1),
        };
        let mut carry = 0;
        for i in 0..len {
            let (sum, overflow) = add_chunks(self.get(i), other.get(i));
            // the carried-in 1 can bump the reduced sum back up to the base
            let sum = sum + carry;
            carry = overflow;
            if sum >= CHUNK_BASE {
                result.chunks.push(sum - CHUNK_BASE);
                carry = 1;
            } else {
                result.chunks.push(sum);
            }
        }
        if carry != 0 {
            result.chunks.push(1);
        }
        result.normalize();
        result
    }
}

impl Add for BigNumber {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl From<u64> for BigNumber {
    fn from(mut value: u64) -> Self {
        let mut result = Self::new();
        while value > 0 {
            result.chunks.push(truncate(value % u64::from(CHUNK_BASE)));
            value /= u64::from(CHUNK_BASE);
        }
        result
    }
}

impl Display for BigNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self.chunks.split_last() {
            None => write!(f, "0"),
            Some((top, lower)) => {
                write!(f, "{}", top)?;
                for chunk in lower.iter().rev() {
                    write!(f, "{:09}", chunk)?;
                }
                Ok(())
            }
        }
    }
}

impl Debug for BigNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{:?}", self.chunks)
    }
}
