// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Simulated memory region with fault injection

use crate::core::platform::{MemoryPort, Word};
use std::collections::BTreeMap;

/// Storage fault on one word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault<W> {
    /// Reads always return this value, whatever was written
    StuckAt(W),
    /// Reads return the stored value with these bits inverted
    FlipBits(W),
}

/// Word-granular backing store implementing [`MemoryPort`]
///
/// Besides the data it counts accesses so tests can see how far a scan
/// went.
///
/// # Example
///
/// ```
/// use saturn_post::core::platform::MemoryPort;
/// use saturn_post::core::sim::SimMemory;
///
/// let mut vram = SimMemory::<u16>::new(0x25C0_0000, 16);
/// vram.stuck_at(2, 0x0000);
///
/// vram.write(2, 0x1234);
/// assert_eq!(vram.read(2), 0x0000);
/// assert_eq!(vram.highest_read(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct SimMemory<W: Word> {
    base_address: u32,
    cells: Vec<W>,
    faults: BTreeMap<usize, Fault<W>>,
    reads: u64,
    writes: u64,
    highest_read: Option<usize>,
}

impl<W: Word> SimMemory<W> {
    /// Create a zero-filled region of `len` words at `base_address`
    pub fn new(base_address: u32, len: usize) -> Self {
        Self {
            base_address,
            cells: vec![W::default(); len],
            faults: BTreeMap::new(),
            reads: 0,
            writes: 0,
            highest_read: None,
        }
    }

    /// Attach a fault to the word at `index`
    pub fn inject(&mut self, index: usize, fault: Fault<W>) {
        assert!(
            index < self.cells.len(),
            "fault index {} out of range (len {})",
            index,
            self.cells.len()
        );
        self.faults.insert(index, fault);
    }

    pub fn stuck_at(&mut self, index: usize, value: W) {
        self.inject(index, Fault::StuckAt(value));
    }

    pub fn flip_bits(&mut self, index: usize, mask: W) {
        self.inject(index, Fault::FlipBits(mask));
    }

    pub fn clear_faults(&mut self) {
        self.faults.clear();
    }

    /// Number of port reads since creation or the last counter reset
    pub fn reads(&self) -> u64 {
        self.reads
    }

    /// Number of port writes since creation or the last counter reset
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Highest index read through the port
    pub fn highest_read(&self) -> Option<usize> {
        self.highest_read
    }

    pub fn reset_counters(&mut self) {
        self.reads = 0;
        self.writes = 0;
        self.highest_read = None;
    }

    /// Stored contents, without faults applied
    ///
    /// This is what other simulated devices (the sprite renderer, the sound
    /// chip) fetch from.
    pub fn as_slice(&self) -> &[W] {
        &self.cells
    }

    fn apply_fault(&self, index: usize, stored: W) -> W {
        match self.faults.get(&index) {
            Some(Fault::StuckAt(value)) => *value,
            Some(Fault::FlipBits(mask)) => W::from_u32(stored.to_u32() ^ mask.to_u32()),
            None => stored,
        }
    }
}

impl<W: Word> MemoryPort<W> for SimMemory<W> {
    fn base_address(&self) -> u32 {
        self.base_address
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn read(&mut self, index: usize) -> W {
        let stored = self.cells[index];
        self.reads += 1;
        self.highest_read = Some(self.highest_read.map_or(index, |h| h.max(index)));
        self.apply_fault(index, stored)
    }

    fn write(&mut self, index: usize, value: W) {
        self.cells[index] = value;
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_bits_applies_on_read() {
        let mut ram = SimMemory::<u32>::new(0x2020_0000, 8);
        ram.flip_bits(5, 0x8000_0001);
        ram.write(5, 0x1234_5678);

        assert_eq!(ram.read(5), 0x9234_5679);
        assert_eq!(ram.as_slice()[5], 0x1234_5678);
    }

    #[test]
    fn test_clear_faults_restores_reads() {
        let mut ram = SimMemory::<u8>::new(0x25A0_0000, 4);
        ram.stuck_at(1, 0xFF);
        ram.write(1, 0x11);
        assert_eq!(ram.read(1), 0xFF);

        ram.clear_faults();
        assert_eq!(ram.read(1), 0x11);
    }

    #[test]
    fn test_counters() {
        let mut ram = SimMemory::<u16>::new(0x25C0_0000, 8);
        assert_eq!(ram.highest_read(), None);

        ram.write(0, 1);
        ram.read(6);
        ram.read(2);
        assert_eq!(ram.reads(), 2);
        assert_eq!(ram.writes(), 1);
        assert_eq!(ram.highest_read(), Some(6));

        ram.reset_counters();
        assert_eq!(ram.reads(), 0);
        assert_eq!(ram.highest_read(), None);
        assert_eq!(ram.address_of(3), 0x25C0_0006);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_fault_index_checked() {
        let mut ram = SimMemory::<u32>::new(0x2020_0000, 4);
        ram.stuck_at(4, 0);
    }
}
