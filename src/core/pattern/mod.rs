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

//! Write/read-back pattern verification
//!
//! Shared by the Memory and VRAM tests. One pass per invocation:
//!
//! 1. Write `pattern(i) = i ^ key` (narrowed to the bus width) to every word
//!    of the range.
//! 2. Read every word back in order and compare.
//! 3. Stop at the first mismatch and report its bus address.
//!
//! The XOR pattern changes low bits on every step and is trivially
//! recomputed for the compare. It is a smoke test, not a fault model: it
//! does not walk bits or march, and it only tells distinct indices apart
//! while the range fits in the word width (`count <= 2^BITS`).
//!
//! # Example
//!
//! ```
//! use saturn_post::core::pattern::{AddressRange, PatternVerifier};
//! use saturn_post::core::sim::SimMemory;
//!
//! let mut ram = SimMemory::<u32>::new(0x2020_0000, 0x100);
//! let verifier = PatternVerifier::new(AddressRange::new(0, 0x100), 0xAAAA_AAAA);
//!
//! assert_eq!(verifier.run(&mut ram).unwrap(), 0x100);
//! ```

use crate::core::error::{PostError, Result, VerificationFailure};
use crate::core::platform::{MemoryPort, Word};

#[cfg(test)]
mod tests;

/// Word range inside a memory region
///
/// `offset` and `count` are in words of the region's bus width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    pub offset: u32,
    pub count: u32,
}

impl AddressRange {
    pub const fn new(offset: u32, count: u32) -> Self {
        Self { offset, count }
    }

    /// Whether the range lies inside a region of `region_len` words
    pub fn fits(&self, region_len: usize) -> bool {
        (self.offset as u64 + self.count as u64) <= region_len as u64
    }
}

/// Value written at range index `index`
#[inline(always)]
pub fn pattern<W: Word>(index: u32, key: u32) -> W {
    W::from_u32(index ^ key)
}

/// Pattern pass over one address range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternVerifier {
    range: AddressRange,
    key: u32,
}

impl PatternVerifier {
    pub fn new(range: AddressRange, key: u32) -> Self {
        debug_assert_ne!(key, 0, "pattern key must be non-zero");
        Self { range, key }
    }

    pub fn range(&self) -> AddressRange {
        self.range
    }

    pub fn key(&self) -> u32 {
        self.key
    }

    /// Run the write phase and the verify phase over `port`
    ///
    /// Returns the number of words verified. A mismatch returns
    /// [`PostError::Verification`] and no word after it is read.
    ///
    /// # Errors
    ///
    /// - [`PostError::RangeOutOfBounds`] if the range does not fit the port;
    ///   nothing is written in that case
    /// - [`PostError::Verification`] on the first mismatch
    pub fn run<W, P>(&self, port: &mut P) -> Result<u32>
    where
        W: Word,
        P: MemoryPort<W> + ?Sized,
    {
        if !self.range.fits(port.len()) {
            return Err(PostError::RangeOutOfBounds {
                offset: self.range.offset,
                count: self.range.count,
                region_len: port.len(),
            });
        }

        if self.range.count as u64 > 1u64 << W::BITS {
            log::warn!(
                "Pattern range of 0x{:X} words repeats every 0x{:X} words at {}-bit width",
                self.range.count,
                1u64 << W::BITS,
                W::BITS
            );
        }

        log::debug!(
            "Pattern pass: 0x{:08X} + 0x{:X} words, key 0x{:X}",
            port.address_of(self.range.offset as usize),
            self.range.count,
            self.key
        );

        self.write_phase(port);
        self.verify_phase(port)?;

        Ok(self.range.count)
    }

    fn write_phase<W: Word, P: MemoryPort<W> + ?Sized>(&self, port: &mut P) {
        let base = self.range.offset as usize;
        for i in 0..self.range.count {
            port.write(base + i as usize, pattern(i, self.key));
        }
    }

    fn verify_phase<W: Word, P: MemoryPort<W> + ?Sized>(
        &self,
        port: &mut P,
    ) -> std::result::Result<(), VerificationFailure> {
        let base = self.range.offset as usize;
        for i in 0..self.range.count {
            let index = base + i as usize;
            let expected: W = pattern(i, self.key);
            let actual = port.read(index);

            if actual != expected {
                let failure = VerificationFailure {
                    address: port.address_of(index),
                    index: i,
                    expected: expected.to_u32(),
                    actual: actual.to_u32(),
                };
                log::info!("{}", failure);
                return Err(failure);
            }
        }
        Ok(())
    }
}
