//! WASM bindings for browser-side buffer decoding.
//!
//! Exposes a `BinaryReader` class to JavaScript with the same method names
//! as the `DataView`-based readers common in JS code. Every multi-byte read
//! takes an optional `littleEndian` flag; omitting it reads big-endian.

use wasm_bindgen::prelude::*;

use crate::endian::Endian;
use crate::error;
use crate::reader::BinaryReader as Reader;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// JavaScript-facing reader that owns a copy of its buffer.
#[wasm_bindgen(js_name = BinaryReader)]
pub struct JsBinaryReader {
    data: Vec<u8>,
    position: usize,
}

impl JsBinaryReader {
    /// Runs `f` against a borrowed reader at the stored position and keeps
    /// the new position only if `f` succeeded.
    fn with_reader<T>(
        &mut self,
        f: impl FnOnce(&mut Reader<'_>) -> error::Result<T>,
    ) -> Result<T, JsValue> {
        let mut reader = Reader::new(&self.data);
        reader.seek(self.position).map_err(to_js)?;
        let value = f(&mut reader).map_err(to_js)?;
        self.position = reader.position();
        Ok(value)
    }
}

fn to_js(err: error::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn endian(little_endian: Option<bool>) -> Endian {
    Endian::from_little(little_endian.unwrap_or(false))
}

#[wasm_bindgen(js_class = BinaryReader)]
impl JsBinaryReader {
    #[wasm_bindgen(constructor)]
    pub fn new(data: &[u8]) -> JsBinaryReader {
        JsBinaryReader {
            data: data.to_vec(),
            position: 0,
        }
    }

    /// Current position in the buffer.
    #[wasm_bindgen(getter)]
    pub fn position(&self) -> usize {
        self.position
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.data.len()
    }

    pub fn seek(&mut self, position: usize) -> Result<(), JsValue> {
        self.with_reader(|r| r.seek(position))
    }

    pub fn rewind(&mut self) {
        self.position = 0;
    }

    #[wasm_bindgen(js_name = readBytes)]
    pub fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>, JsValue> {
        self.with_reader(|r| r.read_bytes(length).map(<[u8]>::to_vec))
    }

    #[wasm_bindgen(js_name = readInt8)]
    pub fn read_int8(&mut self) -> Result<i8, JsValue> {
        self.with_reader(|r| r.read_i8())
    }

    #[wasm_bindgen(js_name = readUint8)]
    pub fn read_uint8(&mut self) -> Result<u8, JsValue> {
        self.with_reader(|r| r.read_u8())
    }

    #[wasm_bindgen(js_name = readInt16)]
    pub fn read_int16(&mut self, little_endian: Option<bool>) -> Result<i16, JsValue> {
        self.with_reader(|r| r.read_i16_with(endian(little_endian)))
    }

    #[wasm_bindgen(js_name = readUint16)]
    pub fn read_uint16(&mut self, little_endian: Option<bool>) -> Result<u16, JsValue> {
        self.with_reader(|r| r.read_u16_with(endian(little_endian)))
    }

    #[wasm_bindgen(js_name = readInt32)]
    pub fn read_int32(&mut self, little_endian: Option<bool>) -> Result<i32, JsValue> {
        self.with_reader(|r| r.read_i32_with(endian(little_endian)))
    }

    #[wasm_bindgen(js_name = readUint32)]
    pub fn read_uint32(&mut self, little_endian: Option<bool>) -> Result<u32, JsValue> {
        self.with_reader(|r| r.read_u32_with(endian(little_endian)))
    }

    #[wasm_bindgen(js_name = readFloat32)]
    pub fn read_float32(&mut self, little_endian: Option<bool>) -> Result<f32, JsValue> {
        self.with_reader(|r| r.read_f32_with(endian(little_endian)))
    }

    #[wasm_bindgen(js_name = readFloat64)]
    pub fn read_float64(&mut self, little_endian: Option<bool>) -> Result<f64, JsValue> {
        self.with_reader(|r| r.read_f64_with(endian(little_endian)))
    }

    /// Returned to JavaScript as a `BigInt`.
    #[wasm_bindgen(js_name = readBigInt64)]
    pub fn read_big_int64(&mut self, little_endian: Option<bool>) -> Result<i64, JsValue> {
        self.with_reader(|r| r.read_i64_with(endian(little_endian)))
    }

    /// Returned to JavaScript as a `BigInt`.
    #[wasm_bindgen(js_name = readBigUint64)]
    pub fn read_big_uint64(&mut self, little_endian: Option<bool>) -> Result<u64, JsValue> {
        self.with_reader(|r| r.read_u64_with(endian(little_endian)))
    }

    /// Reads one UTF-8 encoded character (1 to 4 bytes).
    ///
    /// Throws on invalid or truncated UTF-8 instead of returning
    /// `"\uFFFD"`; use `readString(1)` for lossy single-byte decoding.
    #[wasm_bindgen(js_name = readChar)]
    pub fn read_char(&mut self) -> Result<String, JsValue> {
        self.with_reader(|r| r.read_char().map(String::from))
    }

    #[wasm_bindgen(js_name = readString)]
    pub fn read_string(&mut self, length: usize) -> Result<String, JsValue> {
        self.with_reader(|r| r.read_string(length))
    }
}
