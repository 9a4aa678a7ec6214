// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Controller module tests
//!
//! - `basic`: button masks and pad samples
//! - `input`: polling, navigation decode and repeat guards
