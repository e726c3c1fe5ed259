pub mod compression;
pub mod error;

pub use compression::{
    compress, decompress, Decoder, Encoder, MatchFinder, MatchReference, SlidingWindowBuffer,
    Token, WindowConfig,
};
pub use error::{Error, Result};
