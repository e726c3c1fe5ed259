//! Encoder and decoder sessions over a pair of sliding windows.
//!
//! The encoder feeds upcoming bytes into a lookahead window, asks the
//! history window for its longest match and emits either a literal or a
//! match reference. The decoder replays the tokens into its own history
//! window of the same size, so every reference is resolved against exactly
//! the window state the encoder searched.
//!
//! Tokens are returned as values; packing them into a byte stream is left
//! to the caller.

use log::{debug, trace};

use crate::compression::match_reference::{MAX_LENGTH, MAX_POSITION};
use crate::compression::{
    BruteForceFinder, MatchFinder, MatchReference, Result, SlidingWindowBuffer,
};
use crate::error::Error;

/// Window sizes and the match threshold for an encoder/decoder pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Capacity of the history window, at most 4096
    pub history_size: usize,
    /// Capacity of the lookahead window and the longest match, at most 15
    pub lookahead_size: usize,
    /// Shortest run worth emitting as a reference
    pub min_match_length: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            history_size: MAX_POSITION + 1,
            lookahead_size: MAX_LENGTH,
            min_match_length: 3, // a reference costs two bytes
        }
    }
}

impl WindowConfig {
    /// Check that every reference produced under this config can be packed.
    pub fn validate(&self) -> Result<()> {
        if self.history_size == 0 || self.lookahead_size == 0 {
            return Err(Error::invalid_input("window sizes must be positive"));
        }
        if self.history_size > MAX_POSITION + 1 {
            return Err(Error::InputTooLarge {
                length: self.history_size,
                max_length: MAX_POSITION + 1,
            });
        }
        if self.lookahead_size > MAX_LENGTH {
            return Err(Error::InputTooLarge {
                length: self.lookahead_size,
                max_length: MAX_LENGTH,
            });
        }
        if self.min_match_length == 0 || self.min_match_length > self.lookahead_size {
            return Err(Error::invalid_input(format!(
                "min_match_length must be between 1 and {}, got {}",
                self.lookahead_size, self.min_match_length
            )));
        }
        Ok(())
    }
}

/// One step of encoder output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(u8),
    Match(MatchReference),
}

impl Token {
    /// Number of plaintext bytes this token stands for.
    pub fn span(&self) -> usize {
        match self {
            Token::Literal(_) => 1,
            Token::Match(reference) => reference.length,
        }
    }
}

/// Encoding session owning its history and lookahead windows.
///
/// History carries over between `encode` calls, so a long input can be fed
/// in chunks; the matching `Decoder` must then be fed the tokens in the same
/// order.
#[derive(Debug, Clone)]
pub struct Encoder<F = BruteForceFinder> {
    config: WindowConfig,
    history: SlidingWindowBuffer,
    lookahead: SlidingWindowBuffer,
    finder: F,
}

impl Encoder<BruteForceFinder> {
    pub fn new(config: WindowConfig) -> Result<Self> {
        Self::with_finder(config, BruteForceFinder)
    }
}

impl<F: MatchFinder> Encoder<F> {
    /// Create a session using a custom match finder.
    pub fn with_finder(config: WindowConfig, finder: F) -> Result<Self> {
        config.validate()?;
        debug!(
            "encoder session: history {} bytes, lookahead {} bytes, min match {}",
            config.history_size, config.lookahead_size, config.min_match_length
        );
        Ok(Encoder {
            history: SlidingWindowBuffer::new(config.history_size)?,
            lookahead: SlidingWindowBuffer::new(config.lookahead_size)?,
            config,
            finder,
        })
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn history(&self) -> &SlidingWindowBuffer {
        &self.history
    }

    /// Encode `input`, continuing from the history of earlier calls.
    ///
    /// # Example
    ///
    /// ```
    /// use window_lz::compression::{Encoder, Token, WindowConfig};
    ///
    /// let mut encoder = Encoder::new(WindowConfig::default()).unwrap();
    /// let tokens = encoder.encode(b"abcabcabc");
    /// assert_eq!(tokens[0], Token::Literal(b'a'));
    /// assert!(matches!(tokens[3], Token::Match(_)));
    /// ```
    pub fn encode(&mut self, input: &[u8]) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < input.len() {
            // The search reads the lookahead from slot 0, so re-seat it each step.
            self.lookahead.clear();
            let end = (pos + self.config.lookahead_size).min(input.len());
            self.lookahead.extend_from_slice(&input[pos..end]);

            let found = self.finder.find_longest_match(
                &self.history,
                &self.lookahead,
                self.config.lookahead_size,
            );
            let available = self.lookahead.fill();
            let token = match found {
                Some(reference) => {
                    let length = reference.length.min(available);
                    if length >= self.config.min_match_length {
                        Token::Match(MatchReference::new(reference.position, length))
                    } else {
                        Token::Literal(input[pos])
                    }
                }
                None => Token::Literal(input[pos]),
            };
            trace!("offset {}: {:?}", pos, token);

            let advance = token.span();
            self.history.extend_from_slice(&input[pos..pos + advance]);
            pos += advance;
            tokens.push(token);
        }
        tokens
    }

    /// Drop all history so the next `encode` starts a fresh stream.
    pub fn reset(&mut self) {
        self.history.clear();
        self.lookahead.clear();
    }
}

/// Decoding session owning its history window.
#[derive(Debug, Clone)]
pub struct Decoder {
    history: SlidingWindowBuffer,
}

impl Decoder {
    pub fn new(config: &WindowConfig) -> Result<Self> {
        config.validate()?;
        debug!("decoder session: history {} bytes", config.history_size);
        Ok(Decoder {
            history: SlidingWindowBuffer::new(config.history_size)?,
        })
    }

    /// Reconstruct the plaintext for `tokens`.
    ///
    /// A reference that does not fit the current window, or that no encoder
    /// could have packed, aborts decoding.
    pub fn decode(&mut self, tokens: &[Token]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(tokens.len());
        for token in tokens {
            match *token {
                Token::Literal(byte) => {
                    self.history.append_byte(byte);
                    output.push(byte);
                }
                Token::Match(reference) => {
                    let run = self.history.resolve(reference)?;
                    self.history.extend_from_slice(&run);
                    output.extend_from_slice(&run);
                }
            }
        }
        Ok(output)
    }

    pub fn reset(&mut self) {
        self.history.clear();
    }
}

/// Compress `input` into literal and match tokens.
///
/// # Example
///
/// ```
/// use window_lz::compression::{compress, MatchReference, Token, WindowConfig};
///
/// let tokens = compress(b"abcabc", &WindowConfig::default()).unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3], Token::Match(MatchReference::new(0, 3)));
/// ```
pub fn compress(input: &[u8], config: &WindowConfig) -> Result<Vec<Token>> {
    let mut encoder = Encoder::new(config.clone())?;
    Ok(encoder.encode(input))
}

/// Rebuild the original bytes from tokens produced under the same config.
pub fn decompress(tokens: &[Token], config: &WindowConfig) -> Result<Vec<u8>> {
    Decoder::new(config)?.decode(tokens)
}
