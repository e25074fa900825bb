// BIOS call handlers, each taking the caller's register file

pub mod int10;
pub mod extbios;
pub mod vesa;
