use crate::cli::{
    args::IntAction,
    commands::{read_input, read_text},
    config::create_codec,
    global::GlobalArgs,
};
use num_bigint::BigInt;
use octext::{CodecError, CodecRegistry, UintBytes, bytes_to_uint, int_to_bytes};

pub fn handle(
    action: IntAction,
    global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        IntAction::ToBytes {
            value,
            fill,
            chunk,
            overflow,
            codec,
        } => {
            let codec = create_codec(registry, &codec)?;
            let n = parse_integer(&value)?;

            let mut options = UintBytes::default().overflow(overflow);
            options.fill_size = fill.unwrap_or(0);
            options.chunk_size = chunk.unwrap_or(0);

            let bytes = int_to_bytes(&n, options)?;
            println!("{}", codec.encode(&bytes));
        }
        IntAction::FromBytes { file, codec } => {
            let bytes = match codec {
                Some(name) => {
                    let codec = create_codec(registry, &name)?;
                    codec.decode(&read_text(file.as_ref(), global)?)?
                }
                None => read_input(file.as_ref(), global)?,
            };
            println!("{}", bytes_to_uint(&bytes));
        }
    }

    Ok(())
}

/// Decimal, or hexadecimal with a `0x` prefix.
fn parse_integer(value: &str) -> Result<BigInt, CodecError> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => BigInt::parse_bytes(hex.as_bytes(), 16),
        None => trimmed.parse::<BigInt>().ok(),
    };
    parsed.ok_or_else(|| CodecError::invalid_type(value, "a decimal or 0x-prefixed integer"))
}
