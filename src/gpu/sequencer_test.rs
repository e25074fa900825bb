use pretty_assertions::assert_eq;

use crate::gpu::{apply_program, cirrus_modes, CRTC_VGA};
use crate::hardware::{IoEvent, Port, TraceBus};

#[test]
fn writes_index_low_value_high() {
    let mut bus = TraceBus::default();
    apply_program(&mut bus, CRTC_VGA, Port::VGA_CRTC_ADDRESS);
    assert_eq!(vec![
        IoEvent::OutWord(Port::VGA_CRTC_ADDRESS, 0x001A),
        IoEvent::OutWord(Port::VGA_CRTC_ADDRESS, 0x001B),
        IoEvent::OutWord(Port::VGA_CRTC_ADDRESS, 0x001D),
    ], bus.events);
}

#[test]
fn writes_every_pair_and_nothing_else() {
    for mode in cirrus_modes() {
        for &(program, port) in &[(mode.seq, Port::SEQ_ADDRESS), (mode.graph, Port::GRDC_ADDRESS), (mode.crtc, Port::MDA_CRTC_ADDRESS)] {
            let mut bus = TraceBus::default();
            apply_program(&mut bus, program, port);

            assert_eq!(program.len(), bus.events.len());
            let writes = bus.word_writes_to(port);
            assert_eq!(program.len(), writes.len());
            assert!(!writes.contains(&0xFFFF));
            for (&(index, value), &word) in program.iter().zip(writes.iter()) {
                assert_eq!(u16::from(value) << 8 | u16::from(index), word);
            }
        }
    }
}

#[test]
fn empty_program_writes_nothing() {
    let mut bus = TraceBus::default();
    apply_program(&mut bus, &[], Port::SEQ_ADDRESS);
    assert!(bus.events.is_empty());
}

#[test]
fn program_lands_in_register_bank() {
    let mut bus = TraceBus::default();
    let mode = crate::gpu::find_mode(0x64).unwrap();
    apply_program(&mut bus, mode.seq, Port::SEQ_ADDRESS);
    assert_eq!(0x17, bus.seq[0x07]);
    assert_eq!(0x58, bus.seq[0x0B]);
    assert_eq!(0x33, bus.seq[0x1E]);
}
