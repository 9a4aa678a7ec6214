// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Selection movement tests

use super::super::*;
use super::{drive, quick_config};
use crate::core::controller::RepeatGuard;
use crate::core::sim::{InputScript, SimSaturn};

#[test]
fn test_options_are_numbered_in_order() {
    let menu = MenuController::from_config(&quick_config());
    let labels: Vec<_> = menu.options().iter().map(MenuOption::label).collect();

    assert_eq!(
        labels,
        [
            "Memory Test",
            "Color Test",
            "Controller Test",
            "Sound Test",
            "Sprite Test",
            "VRAM Test",
            "CPU Register Dump",
        ]
    );
    for (i, option) in menu.options().iter().enumerate() {
        assert_eq!(option.ordinal(), i);
    }
    assert_eq!(menu.selection(), 0);
    assert_eq!(menu.phase(), Phase::Browsing);
    assert!(menu.last_result().is_none());
}

#[test]
fn test_empty_menu_rejected() {
    let result = MenuController::new(Vec::new(), InputPoller::default(), TimingConfig::default());
    assert!(matches!(result, Err(PostError::Config(_))));
}

#[test]
fn test_banner_replaced_by_menu() {
    let mut saturn = SimSaturn::new();
    show_banner(&mut saturn.console);
    assert_eq!(
        saturn.console.screen(),
        "Saturn POST Diagnostic\nUse D-Pad to navigate, A/Start to select\n"
    );

    let mut menu = MenuController::from_config(&quick_config());
    menu.step(&mut saturn);

    assert!(saturn.console.screen().starts_with(MENU_TITLE));
    assert_eq!(saturn.console.transcript().len(), 2);
    assert_eq!(saturn.console.clears(), 2);
}

#[test]
fn test_idle_frame_draws_menu() {
    let mut saturn = SimSaturn::new();
    let mut menu = MenuController::from_config(&quick_config());

    assert_eq!(menu.step(&mut saturn), Phase::Browsing);
    assert_eq!(saturn.frame(), 1);
    assert_eq!(
        saturn.console.screen(),
        "Saturn POST Menu:\n\
         > Memory Test\n\
         \x20 Color Test\n\
         \x20 Controller Test\n\
         \x20 Sound Test\n\
         \x20 Sprite Test\n\
         \x20 VRAM Test\n\
         \x20 CPU Register Dump\n"
    );
}

#[test]
fn test_down_moves_one_option_per_press() {
    let mut saturn = SimSaturn::new();
    saturn.set_script(InputScript::taps(&[Buttons::DOWN; 3], 12));
    let mut menu = MenuController::from_config(&quick_config());

    drive(&mut menu, &mut saturn, 60);

    assert_eq!(menu.selection(), 3);
    assert_eq!(menu.selected_label(), "Sound Test");
    assert_eq!(menu.phase(), Phase::Browsing);
    assert!(saturn.console.screen().contains("> Sound Test\n"));
}

#[test]
fn test_down_wraps_to_first() {
    let mut saturn = SimSaturn::new();
    saturn.set_script(InputScript::taps(&[Buttons::DOWN; 7], 12));
    let mut menu = MenuController::from_config(&quick_config());

    drive(&mut menu, &mut saturn, 7 * 13 + 5);

    assert_eq!(menu.selection(), 0);
}

#[test]
fn test_up_wraps_to_last() {
    let mut saturn = SimSaturn::new();
    saturn.set_script(InputScript::taps(&[Buttons::UP, Buttons::UP], 12));
    let mut menu = MenuController::from_config(&quick_config());

    drive(&mut menu, &mut saturn, 30);

    assert_eq!(menu.selection(), 5);
    assert_eq!(menu.selected_label(), "VRAM Test");
}

#[test]
fn test_up_wins_over_down() {
    let mut saturn = SimSaturn::new();
    saturn.set_script(InputScript::taps(&[Buttons::UP | Buttons::DOWN], 0));
    let mut menu = MenuController::from_config(&quick_config());

    menu.step(&mut saturn);

    assert_eq!(menu.selection(), 6);
}

#[test]
fn test_delay_guard_repeats_while_held() {
    let mut saturn = SimSaturn::new();
    let mut script = InputScript::new();
    script.hold(Buttons::DOWN, 22);
    saturn.set_script(script);
    let mut menu = MenuController::from_config(&quick_config());

    // Accepted at frames 0 and 11; the settle after the second runs out the hold
    drive(&mut menu, &mut saturn, 22);

    assert_eq!(menu.selection(), 2);
}

#[test]
fn test_edge_guard_needs_release() {
    let mut config = quick_config();
    config.input.repeat_guard = RepeatGuard::Edge;
    config.input.settle_frames = 0;

    let mut saturn = SimSaturn::new();
    let mut script = InputScript::new();
    script
        .hold(Buttons::DOWN, 30)
        .idle(1)
        .hold(Buttons::DOWN, 1);
    saturn.set_script(script);
    let mut menu = MenuController::from_config(&config);

    drive(&mut menu, &mut saturn, 30);
    assert_eq!(menu.selection(), 1);

    drive(&mut menu, &mut saturn, 5);
    assert_eq!(menu.selection(), 2);
}
