#![no_std]
//! Bit-serial CRC8 with a caller-supplied polynomial and seed.
//!
//! ```
//! use crc8::Crc8;
//!
//! let mut pec = Crc8::new(0x07, 0x00);
//! for byte in b"123456789" {
//! 	pec.update(*byte);
//! }
//! assert_eq!(pec.result(), 0xf4);
//! ```

pub mod crc8;
pub mod error;

pub use crate::crc8::{checksum, Crc8};
pub use crate::error::CrcMismatch;
