use std::fmt;

use log::{debug, trace};

use crate::config::AdapterConfig;
use crate::hardware::{Port, VgaBus, SEG_GRAPH};
use crate::memory::{FlatMemory, MemoryAddress};

#[cfg(test)]
#[path = "./trace_test.rs"]
mod trace_test;

/// one I/O transaction as seen on the bus
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IoEvent {
    In(u16, u8),
    Out(u16, u8),
    OutWord(u16, u16),
    Fill(MemoryAddress, u16, usize),
}

impl fmt::Display for IoEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IoEvent::In(port, data) => write!(f, "in   {:04X} -> {:02X}", port, data),
            IoEvent::Out(port, data) => write!(f, "out  {:04X} <- {:02X}", port, data),
            IoEvent::OutWord(port, data) => write!(f, "outw {:04X} <- {:04X}", port, data),
            IoEvent::Fill(addr, data, length) => write!(f, "fill {} <- {:04X} x {} bytes", addr, data, length),
        }
    }
}

/// Emulates the register banks and banked video memory of a CLGD 54xx
/// and records every access in order.
pub struct TraceBus {
    pub events: Vec<IoEvent>,

    pub seq_index: u8,
    pub seq: [u8; 0x100],

    pub graph_index: u8,
    pub graph: [u8; 0x100],

    pub crtc_index: u8,
    pub crtc: [u8; 0x100],

    pub attr_index: u8,
    /// false: next write to 0x03C0 is an index, true: it is data
    attr_flipflop: bool,
    pub attr: [u8; 0x20],

    pub misc_output: u8,

    pub pel_mask: u8,
    pub hidden_dac: u8,
    /// number of consecutive PEL mask reads, 4 reads unlock the hidden DAC
    pel_reads: u8,

    pub vram: FlatMemory,

    cirrus_present: bool,
}

impl TraceBus {
    pub fn new(cfg: &AdapterConfig) -> Self {
        let mut bus = TraceBus {
            events: Vec::new(),
            seq_index: 0,
            seq: [0; 0x100],
            graph_index: 0,
            graph: [0; 0x100],
            crtc_index: 0,
            crtc: [0; 0x100],
            attr_index: 0,
            attr_flipflop: false,
            attr: [0; 0x20],
            misc_output: if cfg.color_emulation { 0x67 } else { 0x66 },
            pel_mask: 0xFF,
            hidden_dac: 0,
            pel_reads: 0,
            vram: FlatMemory::new(cfg.vram_size()),
            cirrus_present: cfg.cirrus_present,
        };
        bus.seq[0x0F] = cfg.dram_control;
        bus.crtc[0x27] = cfg.chip_id;
        bus.attr[0x10] = cfg.attribute_mode;
        bus
    }

    /// forgets all recorded events, keeps register state
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// returns the recorded events, leaving the log empty
    pub fn take_events(&mut self) -> Vec<IoEvent> {
        std::mem::replace(&mut self.events, Vec::new())
    }

    /// data of all word writes to `port`, in order
    pub fn word_writes_to(&self, port: u16) -> Vec<u16> {
        self.events.iter().filter_map(|e| match *e {
            IoEvent::OutWord(p, data) if p == port => Some(data),
            _ => None,
        }).collect()
    }

    /// address of the 64k graphics window in video memory
    pub fn bank_base(&self) -> u32 {
        let granularity = if self.graph[0x0B] & 0x20 != 0 { 16 * 1024 } else { 4 * 1024 };
        u32::from(self.graph[0x09]) * granularity
    }

    fn write_seq(&mut self, data: u8) {
        match self.seq_index {
            0x06 => {
                // extension unlock: reads back 0x12 when unlocked, 0x0F when locked
                self.seq[0x06] = if data & 0x17 == 0x12 { 0x12 } else { 0x0F };
            }
            0x0F => {
                // DRAM control is strapped
            }
            index => self.seq[index as usize] = data,
        }
    }

    fn read_seq(&self) -> u8 {
        if !self.cirrus_present && self.seq_index > 0x04 {
            return 0xFF;
        }
        self.seq[self.seq_index as usize]
    }

    fn write_attr(&mut self, data: u8) {
        if self.attr_flipflop {
            self.attr[self.attr_index as usize] = data;
        } else {
            self.attr_index = data & 0x1F;
        }
        self.attr_flipflop = !self.attr_flipflop;
    }

    fn write_pel_mask(&mut self, data: u8) {
        if self.cirrus_present && self.pel_reads >= 4 {
            self.hidden_dac = data;
        } else {
            self.pel_mask = data;
        }
        self.pel_reads = 0;
    }

    fn read_pel_mask(&mut self) -> u8 {
        if self.pel_reads < 4 {
            self.pel_reads += 1;
        }
        self.pel_mask
    }

    fn read(&mut self, port: u16) -> u8 {
        if port != Port::PEL_MASK {
            self.pel_reads = 0;
        }
        match port {
            Port::ACTL_READ_DATA => self.attr[self.attr_index as usize],
            Port::SEQ_ADDRESS => self.seq_index,
            Port::SEQ_DATA => self.read_seq(),
            Port::PEL_MASK => self.read_pel_mask(),
            Port::READ_MISC_OUTPUT => self.misc_output,
            Port::GRDC_ADDRESS => self.graph_index,
            Port::GRDC_DATA => self.graph[self.graph_index as usize],
            0x03B4 | 0x03D4 => self.crtc_index,
            0x03B5 | 0x03D5 => self.crtc[self.crtc_index as usize],
            Port::ACTL_RESET => {
                self.attr_flipflop = false;
                0
            }
            _ => {
                debug!("in_u8: unhandled port {:04X}", port);
                0xFF
            }
        }
    }

    fn write(&mut self, port: u16, data: u8) {
        if port != Port::PEL_MASK {
            self.pel_reads = 0;
        }
        match port {
            Port::ACTL_ADDRESS => self.write_attr(data),
            Port::SEQ_ADDRESS => self.seq_index = data,
            Port::SEQ_DATA => self.write_seq(data),
            Port::PEL_MASK => self.write_pel_mask(data),
            Port::GRDC_ADDRESS => self.graph_index = data,
            Port::GRDC_DATA => self.graph[self.graph_index as usize] = data,
            0x03B4 | 0x03D4 => self.crtc_index = data,
            0x03B5 | 0x03D5 => self.crtc[self.crtc_index as usize] = data,
            _ => debug!("out_u8: unhandled port {:04X}, data {:02X}", port, data),
        }
    }
}

impl Default for TraceBus {
    fn default() -> Self {
        Self::new(&AdapterConfig::default())
    }
}

impl VgaBus for TraceBus {
    fn in_u8(&mut self, port: u16) -> u8 {
        let data = self.read(port);
        trace!("in_u8 {:04X} = {:02X}", port, data);
        self.events.push(IoEvent::In(port, data));
        data
    }

    fn out_u8(&mut self, port: u16, data: u8) {
        trace!("out_u8 {:04X}, {:02X}", port, data);
        self.events.push(IoEvent::Out(port, data));
        self.write(port, data);
    }

    fn out_u16(&mut self, port: u16, data: u16) {
        trace!("out_u16 {:04X}, {:04X}", port, data);
        self.events.push(IoEvent::OutWord(port, data));
        self.write(port, data as u8);
        self.write(port.wrapping_add(1), (data >> 8) as u8);
    }

    fn memset16_far(&mut self, seg: u16, offset: u16, data: u16, length: usize) {
        let addr = MemoryAddress::new(seg, offset);
        self.events.push(IoEvent::Fill(addr, data, length));
        if seg != SEG_GRAPH {
            debug!("memset16_far: {} is outside the graphics window", addr);
            return;
        }
        let base = self.bank_base() + u32::from(offset);
        self.vram.fill_u16(base, data, length);
    }
}
