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

//! POST error types

use thiserror::Error;

/// Result type for POST operations
pub type Result<T> = std::result::Result<T, PostError>;

/// Main error type for the POST utility
#[derive(Error, Debug)]
pub enum PostError {
    #[error(transparent)]
    Verification(#[from] VerificationFailure),

    #[error(
        "Pattern range 0x{offset:X}+0x{count:X} words exceeds region of 0x{region_len:X} words"
    )]
    RangeOutOfBounds {
        offset: u32,
        count: u32,
        region_len: usize,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid input script: {0}")]
    Script(String),

    #[error("Audio backend error: {0}")]
    Audio(String),
}

/// A pattern read-back that did not match what was written
///
/// `address` is the bus address of the faulting word; `index` is its
/// position inside the tested range. Values are widened to 32 bits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Verification failed at 0x{address:08X}: expected 0x{expected:X}, read 0x{actual:X}")]
pub struct VerificationFailure {
    pub address: u32,
    pub index: u32,
    pub expected: u32,
    pub actual: u32,
}
