// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::collections::BTreeSet;
use std::fmt;

/// Set of logical processor indices decoded from an affinity mask.
///
/// The mask is stored as a little-endian byte sequence of any length: byte `k` holds the bits for
/// processors `8k..8k+7`, least significant bit first. Every byte sequence (including an empty one)
/// decodes to a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProcessorSet {
    processors: BTreeSet<usize>,
}

impl ProcessorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_mask_bytes(mask_bytes: &[u8]) -> Self {
        let mut processors = BTreeSet::new();
        for (byte_index, byte) in mask_bytes.iter().enumerate() {
            for bit in 0..8usize {
                if byte & (1u8 << bit) != 0 {
                    processors.insert(byte_index * 8 + bit);
                }
            }
        }
        Self { processors }
    }

    /// Re-encodes the set in its minimal form (no trailing zero bytes; empty for an empty set).
    pub fn to_mask_bytes(&self) -> Vec<u8> {
        let highest_processor = match self.processors.last() {
            Some(value) => *value,
            None => return Vec::new(),
        };
        let mut mask_bytes = vec![0u8; highest_processor / 8 + 1];
        for processor in &self.processors {
            mask_bytes[processor / 8] |= 1u8 << (processor % 8);
        }
        mask_bytes
    }

    /// The mask as an integer, or `None` if a processor index is 64 or above.
    pub fn mask_u64(&self) -> Option<u64> {
        let mut mask: u64 = 0;
        for processor in &self.processors {
            if *processor >= 64 {
                return None;
            }
            mask |= 1u64 << processor;
        }
        Some(mask)
    }

    pub fn insert(&mut self, processor: usize) -> bool {
        self.processors.insert(processor)
    }

    pub fn contains(&self, processor: usize) -> bool {
        self.processors.contains(&processor)
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.processors.iter().copied()
    }
}

impl FromIterator<usize> for ProcessorSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self { processors: iter.into_iter().collect() }
    }
}

impl fmt::Display for ProcessorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for processor in &self.processors {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", processor)?;
            first = false;
        }
        Ok(())
    }
}
