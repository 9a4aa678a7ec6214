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

//! Custom assertions for POST testing

use saturn_post::core::diag::TestResult;
use saturn_post::core::sim::SimSaturn;

/// Assert some page shown so far contains `needle`
#[allow(dead_code)]
pub fn assert_shown(saturn: &SimSaturn, needle: &str) {
    assert!(
        saturn.console.has_shown(needle),
        "'{}' never shown; last screen:\n{}",
        needle,
        saturn.console.screen()
    );
}

/// Assert a result is a verification failure at `address`
#[allow(dead_code)]
pub fn assert_failed_at(result: &TestResult, address: u32) {
    match result.failure() {
        Some(failure) => assert_eq!(
            failure.address, address,
            "Failure address mismatch: expected 0x{:08X}, got 0x{:08X}",
            address, failure.address
        ),
        None => panic!("expected FAIL at 0x{:08X}, got {}", address, result),
    }
}
