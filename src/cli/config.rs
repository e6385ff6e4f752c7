use crate::cli::global::GlobalArgs;
use octext::{Codec, CodecNotFoundError, CodecRegistry, find_closest_codec};

/// Loads the registry with user and project overrides, then `--config`.
pub fn load_registry(global: &GlobalArgs) -> Result<CodecRegistry, Box<dyn std::error::Error>> {
    let mut registry = CodecRegistry::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        let extra = CodecRegistry::load_from_file(std::path::Path::new(expanded.as_ref()))
            .map_err(|e| format!("Cannot load codec file '{}': {}", path, e))?;
        tracing::debug!(path = %expanded, codecs = extra.codecs.len(), "merging --config");
        registry.merge(extra);
    }

    Ok(registry)
}

/// The codec named on the command line, else `[settings] default_codec`.
pub fn codec_name(
    registry: &CodecRegistry,
    requested: Option<String>,
) -> Result<String, Box<dyn std::error::Error>> {
    match requested.or_else(|| registry.settings.default_codec.clone()) {
        Some(name) => Ok(name),
        None => Err("No codec given and no default_codec configured".into()),
    }
}

/// Helper function to create a codec from the registry
pub fn create_codec(
    registry: &CodecRegistry,
    name: &str,
) -> Result<Codec, Box<dyn std::error::Error>> {
    let codec_config = registry.get_codec(name).ok_or_else(|| {
        // Try to find a close match
        let suggestion = find_closest_codec(name, &registry.names());
        CodecNotFoundError::new(name, suggestion)
    })?;

    let codec = codec_config
        .build()
        .map_err(|e| format!("Invalid codec '{}': {}", name, e))?;
    tracing::debug!(codec = name, mode = codec_config.mode.as_str(), "codec ready");
    Ok(codec)
}
