//! Trifold - a classical cipher pipeline
//!
//! A pedagogical demonstration that composes three classical techniques,
//! not a production security tool.
//!
//! ## Transform Pipeline
//!
//! The plaintext goes through the following transforms:
//!
//! ```text
//! Input → Normalize → Substitute → Column transpose → Row transpose → Ciphertext
//! ```
//!
//! - **Normalize**: uppercase, strip spaces (other characters untouched)
//! - **Substitute**: monoalphabetic substitution with a random alphabet permutation
//! - **Column transpose**: pad with 'X' and read round-robin columns
//! - **Row transpose**: split into fixed-width rows, read back column by column
//!
//! The pipeline is one-way: the generated key is returned to the caller as
//! the decryption artifact, but no decryption routine is provided. Being a
//! composition of a monoalphabetic substitution and two fixed permutations,
//! it offers no resistance to frequency analysis.
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use trifold::cipher::encrypt;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let outcome = encrypt("ATTACK AT DAWN", &mut rng);
//!
//! // Spaces are stripped before substitution; the column stage may add
//! // up to column_width - 1 filler characters.
//! assert!(outcome.ciphertext.len() >= "ATTACKATDAWN".len());
//! assert!(outcome.ciphertext.len() < "ATTACKATDAWN".len() + outcome.column_width);
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod key;
pub mod pipeline;

pub use cipher::{encrypt, encrypt_with, Encryption};
pub use error::{Result, TrifoldError};
pub use key::SubstitutionKey;
