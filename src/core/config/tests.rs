// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut

//! Config loading tests

use super::*;
use std::io::Write;

#[test]
fn test_default_matches_platform_constants() {
    let config = PostConfig::default();

    assert_eq!(config.input.repeat_guard, RepeatGuard::Delay);
    assert_eq!(config.input.settle_frames, 10);
    assert_eq!(config.memory.words, 0x1000);
    assert_eq!(config.memory.key, 0xAAAA_AAAA);
    assert_eq!(config.vram.words, 0x2_0000);
    assert_eq!(config.vram.key, 0xAAAA);
    assert_eq!(config.timing.result_hold_frames, 120);
    assert_eq!(config.timing.color_dwell_frames, 60);
    assert_eq!(config.timing.tone_frames, 60);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_document_is_default() {
    let config = PostConfig::from_toml_str("").unwrap();
    assert_eq!(config, PostConfig::default());
}

#[test]
fn test_partial_document_keeps_other_sections() {
    let config = PostConfig::from_toml_str(
        r#"
        [input]
        repeat_guard = "edge"

        [memory]
        words = 0x400
        key = 0x5555
        "#,
    )
    .unwrap();

    assert_eq!(config.input.repeat_guard, RepeatGuard::Edge);
    assert_eq!(config.input.settle_frames, 10);
    assert_eq!(config.memory.offset, 0);
    assert_eq!(config.memory.words, 0x400);
    assert_eq!(config.vram, PatternConfig::VRAM);
    assert_eq!(config.timing, TimingConfig::default());
}

#[test]
fn test_zero_key_rejected() {
    let err = PostConfig::from_toml_str("[vram]\nwords = 16\nkey = 0\n").unwrap_err();
    assert!(matches!(err, PostError::Config(_)));
}

#[test]
fn test_zero_settle_rejected_only_for_delay_guard() {
    let err = PostConfig::from_toml_str("[input]\nsettle_frames = 0\n").unwrap_err();
    assert!(matches!(err, PostError::Config(_)));

    let ok = PostConfig::from_toml_str("[input]\nrepeat_guard = \"edge\"\nsettle_frames = 0\n");
    assert!(ok.is_ok());
}

#[test]
fn test_unknown_field_rejected() {
    let err = PostConfig::from_toml_str("[timing]\nwarp_frames = 3\n").unwrap_err();
    assert!(matches!(err, PostError::Toml(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[timing]\nresult_hold_frames = 5").unwrap();

    let config = PostConfig::load(file.path()).unwrap();
    assert_eq!(config.timing.result_hold_frames, 5);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PostConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, PostError::Io(_)));
}

#[test]
fn test_verifier_from_section() {
    let verifier = PatternConfig::VRAM.verifier();
    assert_eq!(verifier.range(), AddressRange::new(0, 0x2_0000));
    assert_eq!(verifier.key(), 0xAAAA);
}
