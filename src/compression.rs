//! Sliding-window dictionary compression.
//!
//! This module provides the building blocks of an LZ77/LZSS-style encoder:
//! - `MatchReference`: a (position, length) back-reference with a fixed
//!   16-bit packed form (12 bits of position, 4 bits of length)
//! - `SlidingWindowBuffer`: a fixed-capacity ring buffer used both as the
//!   history window and as the lookahead window
//! - `Encoder` / `Decoder`: sessions that drive a pair of windows over a
//!   byte stream and produce or consume literal/match tokens
//! - `stream`: read/write handles defaulting to the standard streams
//!
//! # Examples
//!
//! ```rust
//! use window_lz::compression::{compress, decompress, WindowConfig};
//!
//! let config = WindowConfig::default();
//! let data = b"abracadabra abracadabra";
//! let tokens = compress(data, &config).unwrap();
//! assert_eq!(decompress(&tokens, &config).unwrap(), data);
//! ```

pub use crate::error::Result;

/// Trait for longest-match search strategies.
///
/// Implementations must return the leftmost-longest match of `lookahead`
/// (starting at its slot 0) inside `history`, capped at `max_length`, or
/// `None` when no byte matches. A returned length must not exceed
/// `lookahead.fill()`; the encoder trims longer runs to the bytes it has.
pub trait MatchFinder {
    /// Find the longest run of `lookahead` present in `history`
    fn find_longest_match(
        &self,
        history: &SlidingWindowBuffer,
        lookahead: &SlidingWindowBuffer,
        max_length: usize,
    ) -> Option<MatchReference>;
}

pub mod match_reference;
pub use match_reference::{MatchReference, MAX_LENGTH, MAX_POSITION};

pub mod sliding_window;
pub use sliding_window::{BruteForceFinder, SlidingWindowBuffer};

pub mod lzss;
pub use lzss::{compress, decompress, Decoder, Encoder, Token, WindowConfig};

pub mod stream;
