// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Diagnostic tests against the simulated machine

use super::*;
use crate::core::config::PatternConfig;
use crate::core::controller::{PadState, RepeatGuard};
use crate::core::platform::Rgb1555;
use crate::core::sim::{InputScript, SimSaturn};

fn quick_timing() -> TimingConfig {
    TimingConfig {
        result_hold_frames: 3,
        color_dwell_frames: 2,
        tone_frames: 4,
    }
}

fn run_on(test: &mut dyn DiagnosticTest, saturn: &mut SimSaturn) -> TestResult {
    let timing = quick_timing();
    let mut input = InputPoller::default();
    let mut ctx = TestContext::new(saturn, &mut input, &timing);
    test.run(&mut ctx)
}

fn start_after(frames: u32) -> InputScript {
    let mut script = InputScript::new();
    script.idle(frames).hold(Buttons::START, 1);
    script
}

#[test]
fn test_memory_pass_holds_result() {
    let mut saturn = SimSaturn::new();
    let result = run_on(&mut MemoryPatternTest::default(), &mut saturn);

    assert_eq!(result, TestResult::Pass);
    assert!(saturn.console.has_shown("Memory test PASS"));
    assert_eq!(saturn.frame(), 3);
    assert_eq!(saturn.work_ram.reads(), 0x1000);
}

#[test]
fn test_memory_fail_reports_address_and_holds() {
    let mut saturn = SimSaturn::new();
    saturn.work_ram.stuck_at(0x10, 0);

    let result = run_on(&mut MemoryPatternTest::default(), &mut saturn);

    let failure = result.failure().copied().unwrap();
    assert_eq!(failure.address, 0x2020_0040);
    assert!(!result.passed());
    assert!(saturn.console.has_shown("Memory test FAIL at 20200040"));
    assert_eq!(saturn.frame(), 3);
}

#[test]
fn test_vram_fault_fails_check() {
    let mut saturn = SimSaturn::new();
    saturn.vram.stuck_at(0x1000, 0x0000);

    let timing = quick_timing();
    let mut input = InputPoller::default();
    let mut ctx = TestContext::new(&mut saturn, &mut input, &timing);
    let ok = VramPatternTest::default().check(&mut ctx);

    assert!(!ok);
    assert!(saturn.console.has_shown("VRAM test FAIL at 25c04000"));
    assert_eq!(saturn.vram.highest_read(), Some(0x1000));
}

#[test]
fn test_vram_clean_passes() {
    let mut saturn = SimSaturn::new();
    let result = run_on(&mut VramPatternTest::default(), &mut saturn);

    assert_eq!(result, TestResult::Pass);
    assert!(saturn.console.has_shown("VRAM test PASS"));
    assert_eq!(saturn.vram.writes(), 0x2_0000);
    assert_eq!(saturn.vram.highest_read(), Some(0x1_FFFF));
}

#[test]
fn test_pattern_range_too_large_is_aborted() {
    let mut saturn = SimSaturn::new();
    let config = PatternConfig {
        offset: 0,
        words: 0x5_0000,
        key: 0xAAAA,
    };

    let result = run_on(&mut VramPatternTest::new(&config), &mut saturn);

    assert!(matches!(result, TestResult::Aborted(_)));
    assert!(saturn.console.has_shown("VRAM test not run"));
    assert_eq!(saturn.vram.writes(), 0);
}

#[test]
fn test_color_cycle_order_and_dwell() {
    let mut saturn = SimSaturn::new();
    let result = run_on(&mut ColorCyclePresentation, &mut saturn);

    assert_eq!(result, TestResult::Complete);
    assert_eq!(
        saturn.vdp2.color_history(),
        &[
            Rgb1555::RED,
            Rgb1555::GREEN,
            Rgb1555::BLUE,
            Rgb1555::WHITE,
            Rgb1555::BLACK
        ]
    );
    assert!(saturn.vdp2.display_enabled());
    assert_eq!(saturn.frame(), 4 * 2);
    assert_eq!(saturn.console.screen(), "Color Test complete.\n");
}

#[test]
fn test_controller_monitor_echoes_pad() {
    let mut saturn = SimSaturn::new();
    let mut script = InputScript::new();
    script
        .push(
            PadState {
                buttons: Buttons::B,
                analog_x: -5,
                analog_y: 12,
            },
            2,
        )
        .idle(1)
        .hold(Buttons::START, 1);
    saturn.set_script(script);

    let result = run_on(&mut ControllerMonitor, &mut saturn);

    assert_eq!(result, TestResult::Complete);
    assert!(saturn.console.has_shown("Buttons: 0x0100"));
    assert!(saturn.console.has_shown("Analog X: -5"));
    assert!(saturn.console.has_shown("Analog Y: 12"));
    assert!(saturn.console.has_shown("Press Start to return"));

    // Start seen on frame 3, then the delay guard
    assert_eq!(saturn.frame(), 3 + InputPoller::DEFAULT_SETTLE_FRAMES as u64);
}

#[test]
fn test_controller_monitor_stays_open_on_a() {
    let mut saturn = SimSaturn::new();
    let mut script = InputScript::new();
    script.hold(Buttons::A, 2).hold(Buttons::START, 1);
    saturn.set_script(script);

    run_on(&mut ControllerMonitor, &mut saturn);

    assert!(saturn.console.has_shown("Buttons: 0x0400"));
    assert_eq!(saturn.frame(), 2 + InputPoller::DEFAULT_SETTLE_FRAMES as u64);
}

#[test]
fn test_sound_plays_beep_on_slot_zero() {
    let mut saturn = SimSaturn::new();
    let result = run_on(&mut AudioChannelExerciser, &mut saturn);

    assert_eq!(result, TestResult::Complete);
    assert!(saturn.scsp.is_initialized());
    assert_eq!(
        saturn.scsp.slot_config(0),
        Some(&AudioChannelExerciser::channel_config())
    );
    assert_eq!(saturn.scsp.key_on_events(), 1);
    assert!(!saturn.scsp.is_playing(0));
    assert_eq!(&saturn.sound_ram.as_slice()[..32], &BEEP_SAMPLE[..]);
    assert!(saturn.take_audio().iter().any(|&(l, r)| l != 0 && r != 0));
    assert_eq!(saturn.console.screen(), "Sound Test Complete.\n");
}

#[test]
fn test_sprite_drawn_at_position() {
    let mut saturn = SimSaturn::new();
    saturn.set_script(start_after(2));

    let result = run_on(&mut SpriteRenderExerciser, &mut saturn);

    assert_eq!(result, TestResult::Complete);
    assert!(saturn.vdp1.is_initialized());
    assert_eq!(
        saturn.vdp1.command_list(),
        &[SpriteRenderExerciser::command()]
    );
    assert!(saturn.vram.as_slice()[..128].iter().all(|&w| w == SPRITE_COLOR_PAIR));
    assert_eq!(saturn.vram.as_slice()[128], 0);

    assert_eq!(saturn.vdp1.pixel(100, 100), Some(SPRITE_COLOR));
    assert_eq!(saturn.vdp1.pixel(115, 115), Some(SPRITE_COLOR));
    assert_eq!(saturn.vdp1.pixel(99, 100), Some(0));
    assert_eq!(saturn.vdp1.pixel(116, 100), Some(0));

    assert!(saturn.console.has_shown("Sprite Test complete.\nPress Start to return.\n"));
}

#[test]
fn test_register_dump_lists_four_registers() {
    let mut saturn = SimSaturn::new();
    saturn.registers = [0, 0xDEAD_BEEF, 0x0600_4000, 0x2020_0000];
    saturn.set_script(start_after(0));

    let result = run_on(&mut RegisterSnapshotTest, &mut saturn);

    assert_eq!(result, TestResult::Complete);
    assert!(saturn.console.has_shown(
        "CPU Registers:\nr0: 00000000\nr1: deadbeef\nr2: 06004000\nr3: 20200000\n"
    ));
    assert!(saturn.console.has_shown("Press Start to return."));
}

#[test]
fn test_wait_for_dismissal_with_edge_guard() {
    let mut saturn = SimSaturn::new();
    saturn.set_script(start_after(1));

    let timing = quick_timing();
    let mut input = InputPoller::new(RepeatGuard::Edge, 0);
    let mut ctx = TestContext::new(&mut saturn, &mut input, &timing);
    ctx.wait_for_dismissal();

    // Edge guard consumes no frames and latches Start
    assert_eq!(saturn.frame(), 1);
    assert!(!input.pressed(Buttons::START));
}

#[test]
fn test_result_display() {
    let failure = VerificationFailure {
        address: 0x25C0_2000,
        index: 0x1000,
        expected: 0xBAAA,
        actual: 0,
    };

    assert_eq!(TestResult::Pass.to_string(), "PASS");
    assert_eq!(TestResult::Fail(failure).to_string(), "FAIL at 25c02000");
    assert_eq!(TestResult::Complete.to_string(), "Complete");
    assert!(TestResult::Complete.passed());
    assert_eq!(TestResult::Fail(failure).failure(), Some(&failure));
}

#[test]
fn test_report_flushes_line() {
    let mut saturn = SimSaturn::new();
    let timing = quick_timing();
    let mut input = InputPoller::default();
    let mut ctx = TestContext::new(&mut saturn, &mut input, &timing);
    ctx.report("hello");

    assert_eq!(saturn.console.screen(), "hello\n");
    assert_eq!(saturn.console.flushes(), 1);
}
