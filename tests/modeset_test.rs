use pretty_assertions::assert_eq;

use cirrus_vgabios::bios::{BiosDataArea, BIOS};
use cirrus_vgabios::config::AdapterConfig;
use cirrus_vgabios::cpu::{RegisterState, R};
use cirrus_vgabios::gpu::{cirrus_modes, Cirrus};
use cirrus_vgabios::hardware::{IoEvent, Port, TraceBus};
use cirrus_vgabios::interrupt::int10;
use cirrus_vgabios::memory::FlatMemory;

fn int10(cirrus: &Cirrus, bus: &mut TraceBus, bda: &mut FlatMemory, ax: u16, bx: u16) -> (bool, RegisterState) {
    let mut regs = RegisterState::default();
    regs.set_r16(R::AX, ax);
    regs.set_r16(R::BX, bx);
    let handled = int10::handle(cirrus, &mut regs, bus, bda);
    (handled, regs)
}

#[test]
fn post_then_probe_then_set_mode() {
    let cfg = AdapterConfig::from_toml_str("chip_id = 0xA0\ndram_control = 0x10\n").unwrap();
    let cirrus = Cirrus::new(cfg.callback_offset);
    let mut bus = TraceBus::new(&cfg);
    let mut bda = FlatMemory::new(BIOS::LOW_MEMORY_SIZE);

    assert!(cirrus.init(&mut bus));
    assert_eq!(0x10, bus.seq[0x0A]);

    let (handled, regs) = int10(&cirrus, &mut bus, &mut bda, 0x1200, 0x0080);
    assert!(handled);
    assert_eq!(0x0032, regs.get_r16(R::AX));

    let (_, regs) = int10(&cirrus, &mut bus, &mut bda, 0x1200, 0x0085);
    assert_eq!(0x10, regs.get_r8(R::AL));

    let (_, regs) = int10(&cirrus, &mut bus, &mut bda, 0x1260, 0x00A0);
    assert_eq!(0x01, regs.get_r8(R::AH));

    bus.clear_events();
    let (handled, regs) = int10(&cirrus, &mut bus, &mut bda, 0x0060, 0);
    assert!(handled);
    assert_eq!(0x20, regs.get_r8(R::AL));
    assert_eq!(0x60, bda.video_mode());
    assert_eq!(0, bda.vbe_mode());

    // GR09 from the register program, then 1MB as 64 banks of 16k, then bank 0 again
    let selects: Vec<u16> = bus.word_writes_to(Port::GRDC_ADDRESS).into_iter()
        .filter(|w| w & 0xFF == 0x09)
        .collect();
    let mut expected = vec![0x0009];
    expected.extend((0..64u16).map(|bank| bank << 8 | 0x09));
    expected.push(0x0009);
    assert_eq!(expected, selects);
    assert_eq!(0x00, bus.graph[0x09]);
    assert!(bus.vram.memory.iter().all(|&b| b == 0xFF));
}

#[test]
fn every_mode_round_trips_through_int10() {
    let cirrus = Cirrus::default();
    for mode in cirrus_modes().iter().filter(|m| !m.is_fallback()) {
        let mut bus = TraceBus::default();
        let mut bda = FlatMemory::new(BIOS::LOW_MEMORY_SIZE);
        bda.set_vbe_mode(0x4101);

        let (handled, _) = int10(&cirrus, &mut bus, &mut bda, 0x0080 | u16::from(mode.mode), 0);
        assert!(handled);
        assert_eq!(mode.mode, bda.video_mode());
        assert_eq!(0, bda.vbe_mode());
        assert_eq!(mode.hidden_dac, bus.hidden_dac);
        assert_eq!(0xFF, bus.pel_mask);
        assert_eq!(0x12, bus.seq[0x06]);
        for &(index, value) in mode.crtc {
            assert_eq!(value, bus.crtc[index as usize], "mode {:02X} CR{:02X}", mode.mode, index);
        }
    }
}

#[test]
fn standard_mode_leaves_extensions_reset() {
    let cirrus = Cirrus::default();
    let mut bus = TraceBus::default();
    let mut bda = FlatMemory::new(BIOS::LOW_MEMORY_SIZE);

    int10(&cirrus, &mut bus, &mut bda, 0x0064, 0);
    assert_eq!(0x17, bus.seq[0x07]);
    assert_eq!(0x0D, bus.attr[0x10]);

    bus.clear_events();
    let (handled, regs) = int10(&cirrus, &mut bus, &mut bda, 0x0003, 0);
    assert!(!handled);
    assert_eq!(0x30, regs.get_r8(R::AL));
    assert_eq!(0x64, bda.video_mode());
    assert_eq!(0x00, bus.seq[0x07]);
    assert_eq!(0x0C, bus.attr[0x10]);
    assert_eq!(0x00, bus.hidden_dac);
    assert!(!bus.events.iter().any(|e| match e {
        IoEvent::Fill(..) => true,
        _ => false,
    }));
}
