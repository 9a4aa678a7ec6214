// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Pattern verifier tests
//!
//! - `basic`: pass, fail-fast and bounds behaviour on simulated memory
//! - `properties`: proptest properties over keys, ranges and fault positions
