use std::process;

use clap::{Arg, App, ArgMatches};
use log::info;
use tracing_subscriber::EnvFilter;

use cirrus_vgabios::bios::{BiosDataArea, BIOS};
use cirrus_vgabios::config::AdapterConfig;
use cirrus_vgabios::cpu::{RegisterState, R};
use cirrus_vgabios::error::Error;
use cirrus_vgabios::gpu::{cirrus_modes, Cirrus};
use cirrus_vgabios::hardware::{Port, TraceBus};
use cirrus_vgabios::interrupt::extbios;
use cirrus_vgabios::memory::FlatMemory;
use cirrus_vgabios::tools::{hex_words, parse_hex_u8};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = App::new("cirrus-modetrace")
        .version("0.1")
        .about("Prints the I/O a Cirrus Logic mode switch performs")
        .arg(Arg::with_name("CONFIG")
            .help("Adapter config file (toml)")
            .takes_value(true)
            .long("config"))
        .arg(Arg::with_name("SET")
            .help("Overrides one adapter setting, eg. chip_id=0xA0")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .long("set"))
        .arg(Arg::with_name("LIST")
            .help("Lists the supported modes")
            .long("list"))
        .arg(Arg::with_name("MODE")
            .help("Mode to switch to, in hex")
            .takes_value(true)
            .long("mode"))
        .arg(Arg::with_name("NOCLEAR")
            .help("Keep video memory contents on mode switch")
            .long("no-clear"))
        .arg(Arg::with_name("EXTBIOS")
            .help("Calls vendor extension function BL, in hex")
            .takes_value(true)
            .long("extbios"))
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<AdapterConfig, Error> {
    let mut cfg = match matches.value_of("CONFIG") {
        Some(path) => AdapterConfig::from_file(path)?,
        None => AdapterConfig::default(),
    };
    if let Some(values) = matches.values_of("SET") {
        for kv in values {
            let mut parts = kv.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            cfg.set_override(key.trim(), value.trim())?;
        }
    }
    Ok(cfg)
}

fn list_modes() {
    println!("mode  resolution    bpp  class  dac  model  pitch  framebuffer");
    for mode in cirrus_modes().iter().filter(|m| !m.is_fallback()) {
        println!("{:02X}    {:4}x{:<4}  {:3}  {:5}  {:02X}   {:02X}     {:5}  {} KiB",
            mode.mode,
            mode.width,
            mode.height,
            mode.depth,
            mode.color_class.value(),
            mode.hidden_dac,
            mode.memory_model,
            mode.bytes_per_scan_line(),
            mode.framebuffer_size() / 1024);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    if matches.is_present("LIST") {
        list_modes();
        return Ok(());
    }

    let cfg = load_config(matches)?;
    let cirrus = Cirrus::new(cfg.callback_offset);
    let mut bus = TraceBus::new(&cfg);
    if !cirrus.init(&mut bus) {
        return Err(Error::NotDetected);
    }
    info!("adapter: {:?}, {} KiB", cfg, cfg.vram_size() / 1024);
    bus.clear_events();

    if let Some(s) = matches.value_of("MODE") {
        let mode = parse_hex_u8(s)?;
        let mut bda = FlatMemory::new(BIOS::LOW_MEMORY_SIZE);
        let ok = cirrus.set_video_mode(&mut bus, &mut bda, mode, matches.is_present("NOCLEAR"));
        for ev in &bus.events {
            println!("{}", ev);
        }
        let crtc_addr = if cfg.color_emulation { Port::VGA_CRTC_ADDRESS } else { Port::MDA_CRTC_ADDRESS };
        for &port in &[Port::SEQ_ADDRESS, Port::GRDC_ADDRESS, crtc_addr] {
            println!("{:04X}: {}", port, hex_words(&bus.word_writes_to(port)));
        }
        println!("mode {:02X}: {}, bda mode {:02X}", mode, if ok { "set" } else { "not supported" }, bda.video_mode());
        bus.clear_events();
    }

    if let Some(s) = matches.value_of("EXTBIOS") {
        let mut regs = RegisterState::default();
        regs.set_r8(R::AH, 0x12);
        regs.set_r8(R::BL, parse_hex_u8(s)?);
        let handled = extbios::handle(&cirrus, &mut regs, &mut bus);
        println!("{}: {}", if handled { "handled" } else { "not handled" }, regs);
    }
    Ok(())
}
