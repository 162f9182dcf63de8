//! Public API tests for `BinaryReader`.
//!
//! The first group mirrors the behaviour of a `DataView`-backed reader:
//! big-endian unless told otherwise, two's-complement signed values, and
//! lossy UTF-8 text. The rest walk realistic layouts end to end.

use std::io::{Read, Seek, SeekFrom};

use binreader::{BinaryReader, Endian, Error};

// ============================================================================
// DataView-compatible reads
// ============================================================================

#[test]
fn test_read_bytes() {
    let array = [1u8, 2, 3, 4];
    let mut reader = BinaryReader::new(&array);
    assert_eq!(reader.read_bytes(4).unwrap(), &[1, 2, 3, 4]);
    assert_eq!(reader.position(), 4);
}

#[test]
fn test_read_int8() {
    let mut reader = BinaryReader::new(&[0x7F]);
    assert_eq!(reader.read_i8().unwrap(), 0x7F);
}

#[test]
fn test_read_uint8() {
    let mut reader = BinaryReader::new(&[0xFF]);
    assert_eq!(reader.read_u8().unwrap(), 0xFF);
}

#[test]
fn test_read_int16_big_endian() {
    let mut reader = BinaryReader::new(&[0x1F, 0x7F]);
    assert_eq!(reader.read_i16().unwrap(), 0x1F * 256 + 0x7F);
}

#[test]
fn test_read_int16_little_endian() {
    let mut reader = BinaryReader::new(&[0x1F, 0x7F]);
    assert_eq!(
        reader.read_i16_with(Endian::from_little(true)).unwrap(),
        0x7F * 256 + 0x1F
    );
}

#[test]
fn test_read_uint32_both_orders() {
    let data = [0xDE, 0xAD, 0xBE, 0xEF];
    assert_eq!(BinaryReader::new(&data).read_u32().unwrap(), 0xDEAD_BEEF);
    assert_eq!(BinaryReader::new(&data).read_u32_le().unwrap(), 0xEFBE_ADDE);
    assert_eq!(BinaryReader::new(&data).read_i32().unwrap(), 0xDEAD_BEEFu32 as i32);
}

#[test]
fn test_read_big_int64() {
    let data = [0x80, 0, 0, 0, 0, 0, 0, 0x01];
    assert_eq!(
        BinaryReader::new(&data).read_i64().unwrap(),
        i64::MIN + 1
    );
    assert_eq!(
        BinaryReader::new(&data).read_u64_le().unwrap(),
        0x0100_0000_0000_0080
    );
}

#[test]
fn test_read_float32_rounding_is_exact() {
    // 0.1f32 is stored as 0x3DCCCCCD; widening to f64 must not reinterpret it
    let mut reader = BinaryReader::new(&[0x3D, 0xCC, 0xCC, 0xCD]);
    let value = reader.read_f32().unwrap();
    assert_eq!(value, 0.1f32);
    assert_eq!(value as f64, 0.100_000_001_490_116_12);
}

#[test]
fn test_read_float64() {
    let data = std::f64::consts::PI.to_le_bytes();
    let mut reader = BinaryReader::new(&data);
    assert_eq!(reader.read_f64_le().unwrap(), std::f64::consts::PI);
}

#[test]
fn test_read_char_and_string() {
    let mut reader = BinaryReader::new("Hello, wörld".as_bytes());
    assert_eq!(reader.read_char().unwrap(), 'H');
    assert_eq!(reader.read_string(4).unwrap(), "ello");
    reader.skip(2).unwrap();
    assert_eq!(reader.read_string(6).unwrap(), "wörld");
    assert!(reader.is_at_end());
}

#[test]
fn test_read_string_splitting_a_character() {
    // "é" is C3 A9; reading only the first byte yields a replacement char
    let mut reader = BinaryReader::new("é".as_bytes());
    assert_eq!(reader.read_string(1).unwrap(), "\u{FFFD}");
    assert_eq!(reader.read_string(1).unwrap(), "\u{FFFD}");
}

// ============================================================================
// Bounds contract
// ============================================================================

#[test]
fn test_every_read_past_end_is_rejected() {
    let data = [0u8; 3];
    let mut reader = BinaryReader::new(&data);
    reader.skip(3).unwrap();

    assert!(reader.read_u8().is_err());
    assert!(reader.read_i8().is_err());
    assert!(reader.read_u16().is_err());
    assert!(reader.read_i32_le().is_err());
    assert!(reader.read_u64_be().is_err());
    assert!(reader.read_f32().is_err());
    assert!(reader.read_f64_with(Endian::Little).is_err());
    assert!(reader.read_bytes(1).is_err());
    assert!(reader.read_string(1).is_err());
    assert!(reader.read_char().is_err());
    assert!(reader.read_cstr().is_err());
    assert_eq!(reader.position(), 3);
}

#[test]
fn test_partial_read_reports_shortfall() {
    let mut reader = BinaryReader::new(&[1, 2, 3, 4, 5]);
    reader.skip(2).unwrap();
    let err = reader.read_u64().unwrap_err();
    assert_eq!(
        err,
        Error::UnexpectedEof {
            offset: 2,
            needed: 8,
            available: 3
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected end of buffer at offset 2: needed 8 bytes, 3 available"
    );
    // Still readable after the failure
    assert_eq!(reader.read_u16().unwrap(), 0x0304);
}

// ============================================================================
// Layouts
// ============================================================================

/// Canonical 44-byte PCM WAV header.
fn wav_header() -> Vec<u8> {
    let mut h = Vec::new();
    h.extend_from_slice(b"RIFF");
    h.extend_from_slice(&36u32.to_le_bytes());
    h.extend_from_slice(b"WAVE");
    h.extend_from_slice(b"fmt ");
    h.extend_from_slice(&16u32.to_le_bytes());
    h.extend_from_slice(&1u16.to_le_bytes()); // PCM
    h.extend_from_slice(&2u16.to_le_bytes()); // channels
    h.extend_from_slice(&44_100u32.to_le_bytes());
    h.extend_from_slice(&176_400u32.to_le_bytes());
    h.extend_from_slice(&4u16.to_le_bytes());
    h.extend_from_slice(&16u16.to_le_bytes());
    h.extend_from_slice(b"data");
    h.extend_from_slice(&0u32.to_le_bytes());
    h
}

#[test]
fn test_little_endian_header_layout() {
    let header = wav_header();
    let mut reader = BinaryReader::new(&header).with_endian(Endian::Little);

    assert_eq!(reader.read_str(4).unwrap(), "RIFF");
    assert_eq!(reader.read_u32().unwrap(), 36);
    assert_eq!(&reader.read_array::<4>().unwrap(), b"WAVE");
    assert_eq!(reader.read_bytes(4).unwrap(), b"fmt ");
    assert_eq!(reader.read_u32().unwrap(), 16);
    assert_eq!(reader.read_u16().unwrap(), 1);
    assert_eq!(reader.read_u16().unwrap(), 2);
    assert_eq!(reader.read_u32().unwrap(), 44_100);

    // Jump straight to the data chunk tag
    reader.seek(36).unwrap();
    assert_eq!(reader.read_str(4).unwrap(), "data");
    assert_eq!(reader.read_u32().unwrap(), 0);
    assert!(reader.is_at_end());
}

#[test]
fn test_mixed_endian_record() {
    let mut data = Vec::new();
    data.extend_from_slice(&0xCAFEu16.to_be_bytes());
    data.extend_from_slice(&(-12_345i32).to_le_bytes());
    data.extend_from_slice(&2.5f32.to_be_bytes());
    data.extend_from_slice(b"id\0");
    data.extend_from_slice(&u64::MAX.to_le_bytes());

    let mut reader = BinaryReader::from(&data);
    assert_eq!(reader.read_u16_be().unwrap(), 0xCAFE);
    assert_eq!(reader.read_i32_le().unwrap(), -12_345);
    assert_eq!(reader.read_f32_be().unwrap(), 2.5);
    assert_eq!(reader.read_cstr().unwrap(), b"id");
    assert_eq!(reader.read_u64_le().unwrap(), u64::MAX);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn test_rewind_and_reread() {
    let data = [0x00, 0x01, 0x00, 0x02];
    let mut reader = BinaryReader::new(&data);
    let first: Vec<u16> = (0..2).map(|_| reader.read_u16().unwrap()).collect();
    reader.rewind();
    let second: Vec<u16> = (0..2).map(|_| reader.read_u16().unwrap()).collect();
    assert_eq!(first, vec![1, 2]);
    assert_eq!(first, second);
}

#[test]
fn test_std_io_interop() {
    let data = b"\x00\x00\x00\x05hello world";
    let mut reader = BinaryReader::new(data);

    let len = reader.read_u32().unwrap() as usize;
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).unwrap();
    assert_eq!(payload, b"hello");

    // Typed reads and Seek share one cursor
    assert_eq!(reader.stream_position().unwrap(), 9);
    Seek::seek(&mut reader, SeekFrom::End(-5)).unwrap();
    assert_eq!(reader.read_string(5).unwrap(), "world");
}
