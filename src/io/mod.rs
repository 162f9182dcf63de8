//! `std::io` integration for [`BinaryReader`](crate::BinaryReader).
//!
//! `BinaryReader` implements `Read`, `BufRead` and `Seek`, so a buffer can
//! be handed to any library that consumes a stream while the same cursor
//! keeps serving typed reads.

mod adapter;
