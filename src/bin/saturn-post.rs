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

//! Saturn POST on the simulated machine
//!
//! Runs the POST menu against [`SimSaturn`] for a fixed number of frames,
//! driven by a scripted pad. Useful for trying the menu without hardware and
//! for reproducing a memory fault report.

use clap::Parser;
use log::{error, info, warn};
use saturn_post::core::config::PostConfig;
use saturn_post::core::error::{PostError, Result};
use saturn_post::core::menu::{show_banner, MenuController, Phase};
use saturn_post::core::platform::map::FRAME_RATE;
use saturn_post::core::platform::MemoryPort;
use saturn_post::core::sim::{InputScript, SimSaturn};
use std::path::PathBuf;

/// Saturn power-on self test (simulated)
#[derive(Parser)]
#[command(name = "saturn-post")]
#[command(about = "Run the Saturn POST menu on a simulated machine", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// TOML input script
    #[arg(short = 's', long, conflicts_with = "taps")]
    script: Option<PathBuf>,

    /// Comma-separated button taps, e.g. "down, down, a"
    #[arg(short = 't', long)]
    taps: Option<String>,

    /// Idle frames after each tap
    #[arg(long, default_value = "12")]
    tap_gap: u32,

    /// Number of frames to run
    #[arg(short = 'n', long, default_value = "1800")]
    frames: u64,

    /// Work RAM longword index to hold at zero
    #[arg(long, value_parser = parse_index)]
    ram_fault: Option<usize>,

    /// VDP1 VRAM longword index to hold at zero
    #[arg(long, value_parser = parse_index)]
    vram_fault: Option<usize>,

    /// Print every new screen to stdout
    #[arg(long)]
    show_console: bool,

    /// Pace frames at 60Hz
    #[arg(long)]
    realtime: bool,

    /// Play the Sound Test through the default output device
    #[cfg(feature = "audio")]
    #[arg(long)]
    audio: bool,
}

/// Accept decimal or 0x-prefixed hexadecimal
fn parse_index(text: &str) -> std::result::Result<usize, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid index '{}': {}", text, e))
}

fn load_script(args: &Args) -> Result<InputScript> {
    if let Some(path) = &args.script {
        info!("Loading input script from: {}", path.display());
        return InputScript::load(path);
    }
    match &args.taps {
        Some(taps) => InputScript::parse_taps(taps, args.tap_gap),
        None => Ok(InputScript::new()),
    }
}

fn build_machine(args: &Args) -> Result<SimSaturn> {
    let mut saturn = SimSaturn::new();
    saturn.console.echo = args.show_console;

    if let Some(index) = args.ram_fault {
        if index >= saturn.work_ram.len() {
            return Err(PostError::Config(format!(
                "work RAM fault index 0x{:X} out of range",
                index
            )));
        }
        warn!("Work RAM index 0x{:X} stuck at zero", index);
        saturn.work_ram.stuck_at(index, 0);
    }

    if let Some(index) = args.vram_fault {
        if index >= saturn.vram.len() {
            return Err(PostError::Config(format!(
                "VRAM fault index 0x{:X} out of range",
                index
            )));
        }
        warn!("VRAM index 0x{:X} stuck at zero", index);
        saturn.vram.stuck_at(index, 0);
    }

    #[cfg(feature = "audio")]
    {
        if args.audio {
            let backend = saturn_post::core::audio::AudioBackend::new()?;
            saturn.set_audio_sink(Box::new(backend));
        }
    }

    if args.realtime {
        saturn.set_realtime(FRAME_RATE);
    }

    saturn.set_script(load_script(args)?);
    saturn.set_frame_limit(args.frames);
    Ok(saturn)
}

fn main() -> Result<()> {
    // Load .env file if present (RUST_LOG and friends)
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("saturn-post v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PostConfig::load(path).inspect_err(|e| error!("Bad config: {}", e))?,
        None => PostConfig::default(),
    };

    let mut saturn = build_machine(&args).inspect_err(|e| error!("Setup failed: {}", e))?;

    show_banner(&mut saturn.console);

    let mut menu = MenuController::from_config(&config);
    let log_interval = (args.frames / 10).max(1);
    let mut next_log = log_interval;

    info!("Running {} frames", args.frames);
    while saturn.frame() < args.frames {
        let previous = menu.phase();
        let phase = menu.step(&mut saturn);
        if previous == Phase::Executing && phase == Phase::AwaitingDismissal {
            if let Some(result) = menu.last_result() {
                info!("Result: {}: {}", menu.selected_label(), result);
            }
        }

        if saturn.frame() >= next_log {
            info!(
                "Progress: {}/{} frames | {:?} | selected: {}",
                saturn.frame(),
                args.frames,
                menu.phase(),
                menu.selected_label()
            );
            next_log = saturn.frame() + log_interval;
        }
    }

    info!("Stopped after {} frames", saturn.frame());
    match menu.last_result() {
        Some(result) => info!("Last result: {}: {}", menu.selected_label(), result),
        None => info!("No test was run"),
    }

    Ok(())
}
