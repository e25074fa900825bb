#[macro_use]
extern crate quick_error;

#[macro_use]
extern crate serde_derive;

pub mod bios;
pub mod config;
pub mod cpu;
pub mod error;
pub mod gpu;
pub mod hardware;
pub mod interrupt;
pub mod memory;
pub mod tools;
