use crate::cli::args::ConfigArgs;
use octext::CodecRegistry;

pub fn handle(args: ConfigArgs, registry: &CodecRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = registry.names();

    if args.codecs {
        println!("{}", names.join(","));
        return Ok(());
    }

    if args.settings {
        let data_uri = registry.data_uri_settings();
        println!(
            "default_codec = {}",
            registry.settings.default_codec.as_deref().unwrap_or("(none)")
        );
        println!("data_uri.mime_type = {}", data_uri.mime_type);
        println!("data_uri.charset = {}", data_uri.charset);
        println!("data_uri.encoding = {:?}", data_uri.encoding);
        return Ok(());
    }

    // Human-readable summary
    println!("Codecs: {} available", names.len());
    if let Some(default_codec) = &registry.settings.default_codec {
        println!("Default codec: {}", default_codec);
    }
    println!("\nUse 'config --codecs' for machine-readable output");
    println!("Use 'config --settings' to show global settings");

    Ok(())
}
