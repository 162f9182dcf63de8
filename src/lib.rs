//! # binreader
//!
//! A small, strict decoder for fixed binary buffers.
//!
//! ## Features
//!
//! - Signed and unsigned integers from 8 to 64 bits, big- or little-endian
//! - Bit-exact IEEE-754 `f32` / `f64`
//! - Zero-copy byte spans, UTF-8 strings and NUL-terminated strings
//! - Seek, skip and rewind, plus `std::io::{Read, BufRead, Seek}`
//! - A failed read never moves the cursor
//!
//! ## Quick Start
//!
//! ```
//! use binreader::{BinaryReader, Endian};
//!
//! let data = [0x1F, 0x7F, 0x01, 0x00, 0x00, 0x00, b'o', b'k'];
//! let mut reader = BinaryReader::new(&data);
//!
//! assert_eq!(reader.read_u16().unwrap(), 0x1F7F); // big-endian by default
//! assert_eq!(reader.read_u32_with(Endian::Little).unwrap(), 1);
//! assert_eq!(reader.read_string(2).unwrap(), "ok");
//!
//! // Out-of-bounds reads report what was missing and leave the cursor alone
//! assert!(reader.read_u8().is_err());
//! assert_eq!(reader.position(), 8);
//!
//! reader.rewind();
//! assert_eq!(reader.read_u8().unwrap(), 0x1F);
//! ```

pub mod endian;
pub mod error;
pub mod io;
pub mod reader;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use endian::Endian;
pub use error::{Error, Result};
pub use reader::{BinaryReader, Primitive};
