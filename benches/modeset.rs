#[macro_use]
extern crate criterion;

use criterion::Criterion;

use cirrus_vgabios::bios::BIOS;
use cirrus_vgabios::config::AdapterConfig;
use cirrus_vgabios::gpu::{find_mode, Cirrus};
use cirrus_vgabios::hardware::TraceBus;
use cirrus_vgabios::memory::FlatMemory;

fn switch_mode(c: &mut Criterion) {
    let cirrus = Cirrus::default();
    let mut bus = TraceBus::default();
    let mode = find_mode(0x74).unwrap();

    c.bench_function("switch to 1024x768x16", move |b| b.iter(|| {
        bus.clear_events();
        cirrus.switch_mode(&mut bus, mode);
    }));
}

fn set_mode_with_clear(c: &mut Criterion) {
    let cirrus = Cirrus::default();
    let cfg = AdapterConfig { dram_control: 0x10, ..AdapterConfig::default() };
    let mut bus = TraceBus::new(&cfg);
    let mut bda = FlatMemory::new(BIOS::LOW_MEMORY_SIZE);

    c.bench_function("set mode 5F with 1MB clear", move |b| b.iter(|| {
        bus.clear_events();
        cirrus.set_video_mode(&mut bus, &mut bda, 0x5F, false)
    }));
}

criterion_group!(benches, switch_mode, set_mode_with_clear);
criterion_main!(benches);
