//! Error types for transposition cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum TranspositionError {
    #[error("Invalid grid dimensions (rows and cols must be > 0)")]
    InvalidDimensions,

    #[error("Ciphertext length {length} is not a multiple of the grid capacity {capacity}")]
    MalformedCiphertext { length: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, TranspositionError>;
