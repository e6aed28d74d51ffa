//! Row/column transposition cipher over a reusable character grid

use crate::error::{Result, TranspositionError};
use crate::grid::Grid;

/// Character used to pad an underfull final block.
pub const FILLER: char = 'A';

/// Classical row/column transposition cipher.
///
/// A message is written into a rows × cols grid in row-major order,
/// padded with [`FILLER`] when the final block comes up short, and read
/// back out in column-major order. The grid shape is the encryption
/// key: decryption only recovers the message when performed with the
/// same `rows` and `cols`. Decrypting with a different shape of equal
/// capacity produces deterministic garbage, not an error.
///
/// The grid is owned by the cipher and reused for every block, so all
/// block and message operations take `&mut self`; to encrypt from
/// several threads, give each thread its own instance.
pub struct Transposition {
    grid: Grid,
}

impl Transposition {
    /// Creates a cipher with the given grid shape.
    ///
    /// # Errors
    ///
    /// Returns [`TranspositionError::InvalidDimensions`] if `rows` or
    /// `cols` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transposition_cipher::Transposition;
    ///
    /// let cipher = Transposition::new(4, 5)?;
    /// assert_eq!(cipher.capacity(), 20);
    ///
    /// assert!(Transposition::new(0, 5).is_err());
    /// # Ok::<(), transposition_cipher::TranspositionError>(())
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(TranspositionError::InvalidDimensions);
        }

        Ok(Transposition {
            grid: Grid::new(rows, cols),
        })
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of grid columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Number of characters one block holds (`rows * cols`).
    pub fn capacity(&self) -> usize {
        self.grid.capacity()
    }

    /// Flat row-major view of the grid cells: the cell at `(row, col)`
    /// is at index `row * cols() + col`. Before the first fill the
    /// cells are blank.
    pub fn grid(&self) -> &[char] {
        self.grid.cells()
    }

    /// Places one block into the grid in row-major order.
    ///
    /// If `block` holds fewer than [`capacity()`](Self::capacity)
    /// characters, every remaining cell is set to [`FILLER`]. If it
    /// holds more, only the first `capacity()` characters are used;
    /// [`encrypt_message`](Self::encrypt_message) is responsible for
    /// chunking. Either way the previous grid contents are fully
    /// overwritten; an empty block leaves the grid entirely filler.
    pub fn fill_block(&mut self, block: &str) {
        let chars: Vec<char> = block.chars().collect();
        self.grid.fill_row_major(&chars, FILLER);
    }

    /// Reads the grid in column-major order (column 0 top-to-bottom,
    /// then column 1, and so on) into a string of exactly
    /// [`capacity()`](Self::capacity) characters.
    ///
    /// Pure serialization of whatever [`fill_block`](Self::fill_block)
    /// placed; no padding logic of its own.
    pub fn read_by_columns(&self) -> String {
        let mut out = String::with_capacity(self.grid.capacity());
        self.grid.append_columns_to(&mut out);
        out
    }

    /// Undoes the column-major permutation of one ciphertext block:
    /// writes `chunk` into the grid in column-major order, then reads
    /// it back in row-major order.
    ///
    /// Pure permutation: filler characters are kept;
    /// [`decrypt_message`](Self::decrypt_message) strips them.
    ///
    /// # Errors
    ///
    /// Returns [`TranspositionError::MalformedCiphertext`] if `chunk`
    /// does not hold exactly [`capacity()`](Self::capacity) characters.
    pub fn decrypt_block(&mut self, chunk: &str) -> Result<String> {
        let chars: Vec<char> = chunk.chars().collect();
        if chars.len() != self.grid.capacity() {
            return Err(TranspositionError::MalformedCiphertext {
                length: chars.len(),
                capacity: self.grid.capacity(),
            });
        }

        self.grid.write_by_columns(&chars);

        let mut out = String::with_capacity(self.grid.capacity());
        self.grid.append_rows_to(&mut out);
        Ok(out)
    }

    /// Encrypts a message of any length.
    ///
    /// The message is processed as a sequence of characters in blocks
    /// of [`capacity()`](Self::capacity); an underfull final block is
    /// padded with [`FILLER`]. The result concatenates every block's
    /// column-major readout, so its length is always a multiple of the
    /// capacity. An empty message encrypts to an empty string without
    /// touching the grid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transposition_cipher::Transposition;
    ///
    /// let mut cipher = Transposition::new(2, 2)?;
    /// assert_eq!(cipher.encrypt_message("ABCD"), "ACBD");
    /// # Ok::<(), transposition_cipher::TranspositionError>(())
    /// ```
    pub fn encrypt_message(&mut self, message: &str) -> String {
        let chars: Vec<char> = message.chars().collect();
        let capacity = self.grid.capacity();

        let blocks = chars.len().div_ceil(capacity);
        let mut encrypted = String::with_capacity(blocks * capacity);

        for block in chars.chunks(capacity) {
            self.grid.fill_row_major(block, FILLER);
            self.grid.append_columns_to(&mut encrypted);
        }

        encrypted
    }

    /// Decrypts a message produced by
    /// [`encrypt_message`](Self::encrypt_message) with the same grid
    /// shape.
    ///
    /// Every `capacity()`-character block is un-permuted, then trailing
    /// [`FILLER`] characters are stripped from the result. Padding is
    /// indistinguishable from real trailing `'A'`s, so a message whose
    /// true ending was `'A'` loses those characters, a known limitation
    /// of the scheme that this library does not detect. An empty
    /// input decrypts to an empty string, as does a ciphertext that is
    /// entirely filler.
    ///
    /// # Errors
    ///
    /// Returns [`TranspositionError::MalformedCiphertext`] if the input
    /// length is not a multiple of [`capacity()`](Self::capacity).
    pub fn decrypt_message(&mut self, encrypted: &str) -> Result<String> {
        let chars: Vec<char> = encrypted.chars().collect();
        let capacity = self.grid.capacity();

        if chars.len() % capacity != 0 {
            return Err(TranspositionError::MalformedCiphertext {
                length: chars.len(),
                capacity,
            });
        }

        let mut decrypted = String::with_capacity(chars.len());

        for chunk in chars.chunks(capacity) {
            self.grid.write_by_columns(chunk);
            self.grid.append_rows_to(&mut decrypted);
        }

        // Trailing filler is padding; the strip stops at the empty string.
        while decrypted.ends_with(FILLER) {
            decrypted.pop();
        }

        Ok(decrypted)
    }
}
