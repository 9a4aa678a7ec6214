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

//! Volatile address-mapped memory port
//!
//! Every access goes through `read_volatile`/`write_volatile` so the compiler
//! can neither merge the write phase into the verify phase nor drop reads it
//! thinks it already knows the answer to.

use super::{MemoryPort, Word};
use std::ptr;

/// Memory port over a raw address-mapped region
pub struct MmioPort<W: Word> {
    ptr: *mut W,
    len: usize,
    bus_address: u32,
}

impl<W: Word> MmioPort<W> {
    /// Create a port over `len` words starting at `ptr`
    ///
    /// `bus_address` is the address reported in failure messages; on hardware
    /// it equals `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for volatile reads and writes of `len` words,
    /// suitably aligned for `W`, and not accessed through any other path while
    /// the port exists.
    pub unsafe fn new(ptr: *mut W, len: usize, bus_address: u32) -> Self {
        Self {
            ptr,
            len,
            bus_address,
        }
    }

    /// Create a port over a fixed hardware address
    ///
    /// # Safety
    ///
    /// Same contract as [`MmioPort::new`]; `address` must name a mapped
    /// region of at least `len` words on the running machine.
    pub unsafe fn at(address: u32, len: usize) -> Self {
        Self::new(address as usize as *mut W, len, address)
    }

    #[inline(always)]
    fn check(&self, index: usize) {
        assert!(
            index < self.len,
            "MMIO index {} out of range (len {})",
            index,
            self.len
        );
    }
}

impl<W: Word> MemoryPort<W> for MmioPort<W> {
    fn base_address(&self) -> u32 {
        self.bus_address
    }

    fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn read(&mut self, index: usize) -> W {
        self.check(index);
        // SAFETY: index is in bounds and the constructor contract covers validity
        unsafe { ptr::read_volatile(self.ptr.add(index)) }
    }

    #[inline(always)]
    fn write(&mut self, index: usize, value: W) {
        self.check(index);
        // SAFETY: index is in bounds and the constructor contract covers validity
        unsafe { ptr::write_volatile(self.ptr.add(index), value) }
    }
}
