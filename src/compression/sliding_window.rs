//! Fixed-capacity ring buffer for history and lookahead windows.
//!
//! The same type plays both roles in an encoder: the history window holds
//! bytes already seen (the dictionary) and the lookahead window holds bytes
//! about to be matched. Once more than `capacity` bytes have been appended,
//! each new byte overwrites the oldest one in place.
//!
//! Positions passed to `byte_at` and reported in a `MatchReference` are raw
//! storage slots, not distances back from the newest byte. A slot captured
//! before further appends may name different data afterwards, so references
//! should be resolved against the window state they were produced from (see
//! `resolve`), or converted with `distance_of` / `slot_at_distance`.

use crate::compression::{MatchFinder, MatchReference, Result};
use crate::error::Error;

/// A ring buffer of bytes with a saturating fill counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingWindowBuffer {
    storage: Vec<u8>,
    /// Next slot to be written
    write_pos: usize,
    /// Number of valid bytes, saturating at capacity
    fill: usize,
    /// Slot of the oldest retained byte
    start_pos: usize,
}

impl SlidingWindowBuffer {
    /// Create an empty window holding up to `capacity` bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use window_lz::compression::SlidingWindowBuffer;
    ///
    /// let mut window = SlidingWindowBuffer::new(4).unwrap();
    /// window.extend_from_slice(b"abcdef");
    /// assert_eq!(window.fill(), 4);
    /// assert_eq!(window.iter().collect::<Vec<_>>(), b"cdef");
    /// ```
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_input("window capacity must be positive"));
        }
        Ok(SlidingWindowBuffer {
            storage: vec![0; capacity],
            write_pos: 0,
            fill: 0,
            start_pos: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of valid bytes, never more than `capacity`
    pub fn fill(&self) -> usize {
        self.fill
    }

    pub fn is_empty(&self) -> bool {
        self.fill == 0
    }

    pub fn is_full(&self) -> bool {
        self.fill == self.capacity()
    }

    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    pub fn start_pos(&self) -> usize {
        self.start_pos
    }

    /// Append one byte, overwriting the oldest byte once the window is full.
    pub fn append_byte(&mut self, byte: u8) {
        let capacity = self.capacity();
        self.storage[self.write_pos] = byte;
        self.write_pos = (self.write_pos + 1) % capacity;
        if self.fill < capacity {
            self.fill += 1;
        }
        if self.fill == capacity {
            self.start_pos = self.write_pos;
        }
    }

    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.append_byte(byte);
        }
    }

    /// Byte stored at raw slot `pos % capacity`.
    pub fn byte_at(&self, pos: usize) -> u8 {
        self.storage[pos % self.capacity()]
    }

    /// Forget all content and zero the storage.
    pub fn clear(&mut self) {
        self.storage.fill(0);
        self.write_pos = 0;
        self.fill = 0;
        self.start_pos = 0;
    }

    /// Retained bytes in write order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..self.fill).map(move |k| self.byte_at(self.start_pos + k))
    }

    /// Distance back from the write pointer to `slot`; the newest byte is at
    /// distance 1.
    pub fn distance_of(&self, slot: usize) -> usize {
        let capacity = self.capacity();
        let slot = slot % capacity;
        match (self.write_pos + capacity - slot) % capacity {
            0 => capacity,
            distance => distance,
        }
    }

    /// Raw slot of the byte `distance` back from the write pointer, or
    /// `None` if no retained byte lies that far back.
    pub fn slot_at_distance(&self, distance: usize) -> Option<usize> {
        if distance == 0 || distance > self.fill {
            return None;
        }
        let capacity = self.capacity();
        Some((self.write_pos + capacity - distance) % capacity)
    }

    /// Longest leftmost run of `lookahead` (from its slot 0) inside this
    /// window, capped at `max_length` bytes.
    ///
    /// Returns `None` when the window is empty or no byte matches.
    ///
    /// # Example
    ///
    /// ```
    /// use window_lz::compression::{MatchReference, SlidingWindowBuffer};
    ///
    /// let mut history = SlidingWindowBuffer::new(8).unwrap();
    /// history.extend_from_slice(b"ABCABC");
    /// let mut lookahead = SlidingWindowBuffer::new(8).unwrap();
    /// lookahead.extend_from_slice(b"ABCABX");
    ///
    /// let found = history.find_longest_match(15, &lookahead);
    /// assert_eq!(found, Some(MatchReference::new(0, 5)));
    /// ```
    pub fn find_longest_match(
        &self,
        max_length: usize,
        lookahead: &SlidingWindowBuffer,
    ) -> Option<MatchReference> {
        BruteForceFinder.find_longest_match(self, lookahead, max_length)
    }

    /// Bytes denoted by `reference` in the window's current state.
    ///
    /// Fails if the run starts or continues outside the filled region, if
    /// the reference is empty, or if it could not have been packed (position
    /// above 4095 or length above 15). Once the window is full a run may be
    /// longer than the window itself; it then cycles through the slots the
    /// same way the search compared them.
    pub fn resolve(&self, reference: MatchReference) -> Result<Vec<u8>> {
        if reference.length == 0 {
            return Err(Error::invalid_input("match reference has zero length"));
        }
        reference.try_encode()?;
        let outside = || {
            Error::invalid_input(format!(
                "match reference {}+{} reaches outside the {} filled bytes",
                reference.position, reference.length, self.fill
            ))
        };
        if reference.position >= self.capacity() {
            return Err(outside());
        }
        let end = reference
            .position
            .checked_add(reference.length)
            .ok_or_else(outside)?;
        (reference.position..end)
            .map(|slot| {
                if slot % self.capacity() >= self.fill {
                    return Err(outside());
                }
                Ok(self.byte_at(slot))
            })
            .collect()
    }
}

/// Exhaustive scan over every candidate start position.
///
/// O(fill x match length) per call. The 12-bit position field bounds the
/// window at 4096 slots, which keeps the scan affordable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceFinder;

impl MatchFinder for BruteForceFinder {
    fn find_longest_match(
        &self,
        history: &SlidingWindowBuffer,
        lookahead: &SlidingWindowBuffer,
        max_length: usize,
    ) -> Option<MatchReference> {
        let capacity = history.capacity();
        let fill = history.fill();
        let limit = lookahead.fill().min(max_length);

        let mut best: Option<MatchReference> = None;
        let mut best_length = 0;
        for i in 0..fill {
            let mut j = 0;
            while j < limit
                && (i + j) % capacity < fill
                && history.byte_at(i + j) == lookahead.byte_at(j)
            {
                j += 1;
            }
            // Strict improvement keeps the earliest start among ties.
            if j > best_length {
                best_length = j;
                best = Some(MatchReference::new(i, j));
                if best_length == limit {
                    break;
                }
            }
        }
        best
    }
}
