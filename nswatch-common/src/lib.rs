#![no_std]

pub mod constants;
mod wire;

pub use wire::*;
