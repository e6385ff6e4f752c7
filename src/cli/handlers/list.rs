use octext::{CodecMode, CodecRegistry};

pub fn handle(registry: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("Available codecs:\n");

    for name in registry.names() {
        let Some(codec_config) = registry.get_codec(&name) else {
            continue;
        };
        let base = match codec_config.mode {
            CodecMode::Radix | CodecMode::Chunked => codec_config.chars.chars().count(),
            CodecMode::Ascii85 | CodecMode::Rfc1924 => 85,
            CodecMode::Base64Url => 64,
        };
        println!(
            "  {:<15} base-{:<3} {:>10}  {}",
            name,
            base,
            codec_config.mode.as_str(),
            codec_config.description
        );
    }

    Ok(())
}
