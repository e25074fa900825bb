use log::trace;

use crate::gpu::RegisterProgram;
use crate::hardware::VgaBus;

#[cfg(test)]
#[path = "./sequencer_test.rs"]
mod sequencer_test;

/// writes each (index, value) pair of `program` as one word to the index port `port`,
/// index in the low byte and value in the high byte
pub fn apply_program<B: VgaBus>(bus: &mut B, program: RegisterProgram, port: u16) {
    trace!("applying {} registers to {:04X}", program.len(), port);
    for &(index, value) in program {
        bus.out_u16(port, u16::from(value) << 8 | u16::from(index));
    }
}
