#![no_std]

extern crate alloc;

pub mod alphabet;
pub mod caesar;
pub mod entropy;
pub mod keyed;
pub mod transposition;

/// Direction of a cipher transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Encrypt,
    Decrypt,
}
