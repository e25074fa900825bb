use std::collections::HashSet;

use pretty_assertions::assert_eq;

use crate::gpu::{find_mode, cirrus_modes, ColorClass, ModeDescriptor};
use crate::gpu::{SEQ_640X480X8, GRAPH_SVGA_COLOR, CRTC_640X480X8, SEQ_VGA, GRAPH_VGA, CRTC_VGA};

#[test]
fn mode_ids_are_unique() {
    let mut seen = HashSet::new();
    for mode in cirrus_modes() {
        assert!(seen.insert(mode.mode), "duplicate mode {:02X}", mode.mode);
    }
    assert_eq!(17, seen.len());
}

#[test]
fn has_exactly_one_fallback_entry() {
    let fallbacks: Vec<&ModeDescriptor> = cirrus_modes().iter().filter(|m| m.is_fallback()).collect();
    assert_eq!(1, fallbacks.len());

    let vga = fallbacks[0];
    assert_eq!((0, 0, 0), (vga.width, vga.height, vga.depth));
    assert_eq!(SEQ_VGA, vga.seq);
    assert_eq!(GRAPH_VGA, vga.graph);
    assert_eq!(CRTC_VGA, vga.crtc);
}

#[test]
fn no_program_contains_the_terminator() {
    for mode in cirrus_modes() {
        for program in &[mode.seq, mode.graph, mode.crtc] {
            assert!(!program.is_empty());
            assert!(!program.contains(&(0xFF, 0xFF)), "mode {:02X}", mode.mode);
        }
    }
}

#[test]
fn can_find_modes() {
    let mode = find_mode(0x5F).unwrap();
    assert_eq!((640, 480, 8), (mode.width, mode.height, mode.depth));
    assert_eq!(SEQ_640X480X8, mode.seq);
    assert_eq!(GRAPH_SVGA_COLOR, mode.graph);
    assert_eq!(CRTC_640X480X8, mode.crtc);
    assert_eq!(0x00, mode.hidden_dac);
    assert_eq!(ColorClass::Indexed, mode.color_class);

    let mode = find_mode(0x7B).unwrap();
    assert_eq!((1600, 1200, 8), (mode.width, mode.height, mode.depth));

    assert!(find_mode(0x03).is_none());
    assert!(find_mode(0x13).is_none());
    assert!(find_mode(0xFF).is_none());
}

#[test]
fn fallback_is_only_found_by_its_own_id() {
    assert!(find_mode(ModeDescriptor::FALLBACK).unwrap().is_fallback());
    for id in 0..=0xFFu8 {
        if id == ModeDescriptor::FALLBACK {
            continue;
        }
        if let Some(mode) = find_mode(id) {
            assert!(!mode.is_fallback());
            assert_eq!(id, mode.mode);
        }
    }
}

#[test]
fn color_class_follows_depth() {
    for mode in cirrus_modes().iter().filter(|m| !m.is_fallback()) {
        let expected = match mode.depth {
            8 => ColorClass::Indexed,
            15 | 16 => ColorClass::Direct,
            24 => ColorClass::Direct24,
            _ => unreachable!(),
        };
        assert_eq!(expected, mode.color_class, "mode {:02X}", mode.mode);
    }
    assert_eq!(0x41, ColorClass::Direct24.attribute_mode_bits());
    assert_eq!(3, ColorClass::Direct24.value());
}

#[test]
fn hidden_dac_matches_pixel_format() {
    for mode in cirrus_modes().iter().filter(|m| !m.is_fallback()) {
        let expected = match mode.depth {
            8 => 0x00,
            15 => 0xF0,
            16 => 0xE1,
            24 => 0xE5,
            _ => unreachable!(),
        };
        assert_eq!(expected, mode.hidden_dac, "mode {:02X}", mode.mode);
    }
}

#[test]
fn direct_color_channels_fill_the_pixel() {
    for mode in cirrus_modes().iter().filter(|m| m.memory_model == 0x06) {
        let bits = mode.red.mask + mode.green.mask + mode.blue.mask + mode.reserved.mask;
        assert_eq!(mode.bits_per_pixel, bits, "mode {:02X}", mode.mode);
    }
    let mode = find_mode(0x66).unwrap();
    assert_eq!(10, mode.red.position);
    assert_eq!(15, mode.reserved.position);
}

#[test]
fn computes_framebuffer_size() {
    let mode = find_mode(0x71).unwrap();
    assert_eq!(3, mode.bytes_per_pixel());
    assert_eq!(1920, mode.bytes_per_scan_line());
    assert_eq!(640 * 480 * 3, mode.framebuffer_size());
}
