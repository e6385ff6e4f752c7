use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_line},
    config::{codec_name, create_codec},
    global::GlobalArgs,
};
use octext::CodecRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let name = codec_name(registry, args.codec)?;
    let codec = create_codec(registry, &name)?;
    let input_data = read_input(args.file.as_ref(), global)?;

    let encoded = codec.encode(&input_data);
    tracing::info!(
        codec = %name,
        input = input_data.len(),
        output = encoded.len(),
        "encoded"
    );

    write_line(args.output.as_ref(), &encoded)
}
