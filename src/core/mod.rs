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

//! POST components
//!
//! - Platform capabilities and the memory map
//! - Pattern verification shared by the memory tests
//! - Pad polling with repeat suppression
//! - The seven diagnostics and the menu that runs them
//! - A simulated Saturn for tests and the host harness

#[cfg(feature = "audio")]
pub mod audio;
pub mod config;
pub mod controller;
pub mod diag;
pub mod error;
pub mod menu;
pub mod pattern;
pub mod platform;
pub mod sim;

// Re-export commonly used types
pub use config::PostConfig;
pub use controller::{Buttons, InputPoller, PadState};
pub use diag::{DiagnosticTest, TestResult};
pub use error::{PostError, Result, VerificationFailure};
pub use menu::{MenuController, Phase};
pub use pattern::{AddressRange, PatternVerifier};
pub use platform::Platform;
pub use sim::SimSaturn;
