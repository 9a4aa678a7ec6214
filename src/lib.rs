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

//! Saturn power-on self test
//!
//! A menu of hardware diagnostics for the Sega Saturn: a work RAM and VDP1
//! VRAM pattern test, a back-screen colour cycle, a live controller monitor,
//! an SCSP beep, a VDP1 sprite and a CPU register dump. Everything reaches
//! the hardware through the [`core::platform::Platform`] capabilities, so the
//! same menu runs against the register-mapped machine or the simulated one in
//! [`core::sim`].
//!
//! # Example
//!
//! ```
//! use saturn_post::core::config::PostConfig;
//! use saturn_post::core::controller::Buttons;
//! use saturn_post::core::menu::{MenuController, Phase};
//! use saturn_post::core::sim::{InputScript, SimSaturn};
//!
//! let mut saturn = SimSaturn::new();
//! saturn.set_script(InputScript::taps(&[Buttons::START], 0));
//!
//! let mut menu = MenuController::from_config(&PostConfig::default());
//! assert_eq!(menu.step(&mut saturn), Phase::Executing);
//! assert_eq!(menu.step(&mut saturn), Phase::AwaitingDismissal);
//! assert!(saturn.console.has_shown("Memory test PASS"));
//! ```

pub mod core;
