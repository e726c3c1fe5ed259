//! Packed back-references.
//!
//! A reference is stored in two bytes: the high 12 bits carry the window
//! position and the low 4 bits carry the run length.
//!
//! ```text
//!  byte0            byte1
//! +----------------+--------+--------+
//! | position[11:4] | pos[3:0] | len  |
//! +----------------+--------+--------+
//! ```

use crate::compression::Result;
use crate::error::Error;

/// Bits of the packed form holding the position
pub const POSITION_BITS: u32 = 12;
/// Bits of the packed form holding the length
pub const LENGTH_BITS: u32 = 4;
/// Largest encodable window position
pub const MAX_POSITION: usize = (1 << POSITION_BITS) - 1;
/// Largest encodable run length
pub const MAX_LENGTH: usize = (1 << LENGTH_BITS) - 1;
/// Size of a packed reference in bytes
pub const ENCODED_LEN: usize = 2;

const LENGTH_MASK: u16 = (1 << LENGTH_BITS) - 1;

/// A back-reference into the history window.
///
/// Construction does not validate either field. `encode` silently aliases
/// values outside `[0, 4095] x [0, 15]`; use `try_encode` to have them
/// reported instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchReference {
    pub position: usize,
    pub length: usize,
}

impl MatchReference {
    pub const fn new(position: usize, length: usize) -> Self {
        MatchReference { position, length }
    }

    /// Pack into `(position << 4) | length`, truncated to 16 bits.
    ///
    /// # Example
    ///
    /// ```
    /// use window_lz::compression::MatchReference;
    ///
    /// assert_eq!(MatchReference::new(0xABC, 0xD).encode(), 0xABCD);
    /// // Out-of-range fields alias rather than fail.
    /// assert_eq!(MatchReference::new(4096, 0).encode(), 0);
    /// ```
    pub fn encode(&self) -> u16 {
        ((self.position << LENGTH_BITS) | self.length) as u16
    }

    /// Pack, reporting fields that exceed their bit budgets.
    pub fn try_encode(&self) -> Result<u16> {
        if self.position > MAX_POSITION {
            return Err(Error::FieldOutOfRange {
                field: "position",
                value: self.position,
                max: MAX_POSITION,
            });
        }
        if self.length > MAX_LENGTH {
            return Err(Error::FieldOutOfRange {
                field: "length",
                value: self.length,
                max: MAX_LENGTH,
            });
        }
        Ok(self.encode())
    }

    /// The packed form as two bytes, position high byte first.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        self.encode().to_be_bytes()
    }

    pub fn from_encoded(value: u16) -> Self {
        MatchReference {
            position: (value >> LENGTH_BITS) as usize,
            length: (value & LENGTH_MASK) as usize,
        }
    }

    pub fn from_bytes(bytes: [u8; ENCODED_LEN]) -> Self {
        Self::from_encoded(u16::from_be_bytes(bytes))
    }

    /// Decode a reference from exactly two bytes.
    ///
    /// Any other input length is a caller error and is reported rather
    /// than truncated or padded.
    ///
    /// # Example
    ///
    /// ```
    /// use window_lz::compression::MatchReference;
    ///
    /// let reference = MatchReference::decode(&[0xAB, 0xCD]).unwrap();
    /// assert_eq!(reference, MatchReference::new(0xABC, 0xD));
    /// assert!(MatchReference::decode(&[0xAB]).is_err());
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let packed: [u8; ENCODED_LEN] = bytes.try_into().map_err(|_| {
            Error::invalid_input(format!(
                "match reference must be {} bytes, got {}",
                ENCODED_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self::from_bytes(packed))
    }
}

impl From<MatchReference> for u16 {
    fn from(reference: MatchReference) -> u16 {
        reference.encode()
    }
}

impl From<u16> for MatchReference {
    fn from(value: u16) -> Self {
        MatchReference::from_encoded(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let reference = MatchReference::new(0x123, 0x4);
        assert_eq!(reference.encode(), 0x1234);
        assert_eq!(reference.to_bytes(), [0x12, 0x34]);
    }

    #[test]
    fn test_round_trip_full_range() {
        for position in 0..=MAX_POSITION {
            for length in 0..=MAX_LENGTH {
                let reference = MatchReference::new(position, length);
                let decoded = MatchReference::decode(&reference.to_bytes()).unwrap();
                assert_eq!(decoded, reference);
            }
        }
    }

    #[test]
    fn test_position_aliasing() {
        assert_eq!(
            MatchReference::new(4096, 0).encode(),
            MatchReference::new(0, 0).encode()
        );
        assert_eq!(
            MatchReference::new(4096 + 7, 3).encode(),
            MatchReference::new(7, 3).encode()
        );
    }

    #[test]
    fn test_length_overflows_into_position() {
        // A length of 16 carries into the lowest position bit.
        assert_eq!(
            MatchReference::new(0, 16).encode(),
            MatchReference::new(1, 0).encode()
        );
    }

    #[test]
    fn test_try_encode_rejects_out_of_range() {
        assert!(matches!(
            MatchReference::new(4096, 0).try_encode(),
            Err(Error::FieldOutOfRange {
                field: "position",
                value: 4096,
                max: 4095
            })
        ));
        assert!(matches!(
            MatchReference::new(0, 16).try_encode(),
            Err(Error::FieldOutOfRange { field: "length", .. })
        ));
        assert_eq!(MatchReference::new(4095, 15).try_encode().unwrap(), 0xFFFF);
    }

    #[test]
    fn test_decode_wrong_length() {
        assert!(matches!(
            MatchReference::decode(&[]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            MatchReference::decode(&[1]),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            MatchReference::decode(&[1, 2, 3]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_u16_conversions() {
        let reference = MatchReference::new(42, 9);
        let packed: u16 = reference.into();
        assert_eq!(MatchReference::from(packed), reference);
    }
}
