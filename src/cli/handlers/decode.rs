use crate::cli::{
    args::DecodeArgs,
    commands::{read_text, write_output},
    config::{codec_name, create_codec},
    global::GlobalArgs,
};
use octext::CodecRegistry;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = codec_name(registry, args.codec)?;
    let codec = create_codec(registry, &name)?;
    let input = read_text(args.file.as_ref(), global)?;

    // Decoders skip whitespace, so a trailing newline from `encode` is fine
    let decoded = codec.decode(&input)?;
    tracing::info!(codec = %name, output = decoded.len(), "decoded");

    write_output(args.output.as_ref(), &decoded)
}
