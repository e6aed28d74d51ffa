//! # Transposition Cipher Library
//!
//! This library implements a classical row/column transposition cipher.
//!
//! ## Algorithm
//!
//! A message is written into a fixed rows × cols grid in row-major
//! order (row 0 left-to-right, then row 1, ...) and read back out in
//! column-major order (column 0 top-to-bottom, then column 1, ...).
//! Messages longer than one grid are processed block by block; an
//! underfull final block is padded with the filler character `'A'`.
//! Decryption writes each ciphertext block back by columns, reads it
//! by rows, and strips the trailing filler.
//!
//! The grid shape acts as the key: the decrypting side must use the
//! same `rows` and `cols` as the encrypting side.
//!
//! ## Usage
//!
//! ```rust
//! use transposition_cipher::Transposition;
//!
//! let mut encryptor = Transposition::new(2, 3)?;
//! let encrypted = encryptor.encrypt_message("HI");
//! assert_eq!(encrypted, "HAIAAA");
//!
//! let mut decryptor = Transposition::new(2, 3)?;
//! let decrypted = decryptor.decrypt_message(&encrypted)?;
//! assert_eq!(decrypted, "HI");
//! # Ok::<(), transposition_cipher::TranspositionError>(())
//! ```
//!
//! ## Limitations
//!
//! - This is a permutation of the message, **not** secure encryption.
//! - Padding is indistinguishable from real trailing `'A'` characters:
//!   a message that truly ends in `'A'` loses those characters on
//!   decryption.
//! - The unit of operation is one `char` (one Unicode scalar value);
//!   grapheme clusters spanning several `char`s are not kept together.

// Public modules
pub mod cipher;
pub mod error;

// Internal grid storage
mod grid;

// Re-exports for easy access
pub use cipher::{Transposition, FILLER};
pub use error::{Result, TranspositionError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


// Documentation tests
#[cfg(doctest)]
mod doctests {
    /// Verify that all code examples in documentation work
    #[test]
    fn dummy() {
        // This ensures doctests are run
    }
}
