use tally_core::{BigNumber, TallyError, CHUNK_BASE};

const MAX_CHUNKS: usize = 10;

/// Generates a big number from uniformly random chunks, with between
/// 1 and `MAX_CHUNKS` of them.
pub fn big_number() -> Result<BigNumber, TallyError> {
    let mut result = BigNumber::new();
    for _ in 0..rand::random_range(1..=MAX_CHUNKS) {
        result.push_chunk(rand::random_range(0..CHUNK_BASE))?;
    }
    result.normalize();
    Ok(result)
}
