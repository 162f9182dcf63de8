//! binreader - decode typed values from a binary file

use std::fmt;
use std::fs;
use std::process::ExitCode;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::{Parser, ValueEnum};
use serde::{Serialize, Serializer};

use binreader::{BinaryReader, Endian};

#[derive(Parser)]
#[command(name = "binreader")]
#[command(version, about = "Decode typed values from a binary file", long_about = None)]
#[command(after_help = "EXAMPLES:
    binreader data.bin -t u32 -c 4            Four big-endian u32 values
    binreader data.bin -o 16 -t f64 --le      One little-endian f64 at offset 16
    binreader data.bin -t string -l 12        Twelve bytes of UTF-8 text
    binreader data.bin -t cstr -c 3 --json    Three NUL-terminated strings as JSON")]
struct Cli {
    /// File to decode
    #[arg(value_name = "FILE")]
    input: String,

    /// Byte offset to start reading from
    #[arg(short, long, default_value_t = 0)]
    offset: usize,

    /// Type of each value
    #[arg(short = 't', long = "type", value_enum, default_value_t = ValueType::U8)]
    value_type: ValueType,

    /// Number of values to read
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Byte length of each `bytes` or `string` value
    #[arg(short, long, default_value_t = 1)]
    length: usize,

    /// Read multi-byte values as little-endian (default: big-endian)
    #[arg(long = "le", visible_alias = "little-endian")]
    little_endian: bool,

    /// Print values as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ValueType {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    Bytes,
    String,
    Char,
    Cstr,
}

/// A decoded value, printed one per line or serialized into a JSON array.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Value {
    Unsigned(u64),
    Signed(i64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Bytes(#[serde(serialize_with = "as_base64")] Vec<u8>),
}

fn as_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(bytes))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(v) => write!(f, "{v}"),
            Value::Signed(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Bytes(bytes) => {
                for (i, byte) in bytes.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{byte:02X}")?;
                }
                Ok(())
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let data = fs::read(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;

    let endian = Endian::from_little(cli.little_endian);
    let mut reader = BinaryReader::new(&data).with_endian(endian);
    reader.seek(cli.offset).map_err(|e| e.to_string())?;

    log::debug!(
        "decoding {} x {:?} ({:?}) from {} at offset {}",
        cli.count,
        cli.value_type,
        endian,
        cli.input,
        cli.offset
    );

    let values = read_values(&mut reader, cli.value_type, cli.length, cli.count)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&values).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        for value in &values {
            println!("{value}");
        }
    }

    Ok(())
}

/// Decodes `count` values, naming the failing index on error.
fn read_values(
    reader: &mut BinaryReader<'_>,
    value_type: ValueType,
    length: usize,
    count: usize,
) -> Result<Vec<Value>, String> {
    let mut values = Vec::new();
    for index in 0..count {
        let value =
            read_value(reader, value_type, length).map_err(|e| format!("value {index}: {e}"))?;
        values.push(value);
    }
    Ok(values)
}

fn read_value(
    reader: &mut BinaryReader<'_>,
    value_type: ValueType,
    length: usize,
) -> binreader::Result<Value> {
    Ok(match value_type {
        ValueType::U8 => Value::Unsigned(reader.read_u8()?.into()),
        ValueType::I8 => Value::Signed(reader.read_i8()?.into()),
        ValueType::U16 => Value::Unsigned(reader.read_u16()?.into()),
        ValueType::I16 => Value::Signed(reader.read_i16()?.into()),
        ValueType::U32 => Value::Unsigned(reader.read_u32()?.into()),
        ValueType::I32 => Value::Signed(reader.read_i32()?.into()),
        ValueType::U64 => Value::Unsigned(reader.read_u64()?),
        ValueType::I64 => Value::Signed(reader.read_i64()?),
        ValueType::F32 => Value::Float32(reader.read_f32()?),
        ValueType::F64 => Value::Float64(reader.read_f64()?),
        ValueType::Bytes => Value::Bytes(reader.read_bytes(length)?.to_vec()),
        ValueType::String => Value::Text(reader.read_string(length)?),
        ValueType::Char => Value::Text(reader.read_char()?.to_string()),
        ValueType::Cstr => Value::Text(String::from_utf8_lossy(reader.read_cstr()?).into_owned()),
    })
}
