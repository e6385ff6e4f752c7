use crate::cli::{
    args::DataUriAction,
    commands::{read_input, read_text, write_line, write_output},
    global::GlobalArgs,
};
use octext::{CodecRegistry, PayloadEncoding, data_uri_parse};

pub fn handle(
    action: DataUriAction,
    global: &GlobalArgs,
    registry: &CodecRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DataUriAction::Encode {
            file,
            mime_type,
            charset,
            percent,
        } => {
            let mut builder = registry.data_uri_settings().builder();
            if let Some(mime_type) = mime_type {
                builder = builder.mime_type(mime_type);
            }
            if let Some(charset) = charset {
                builder = builder.charset(charset);
            }
            if percent {
                builder = builder.encoding(PayloadEncoding::Percent);
            }

            let data = read_input(file.as_ref(), global)?;
            write_line(None, &builder.build(&data))
        }
        DataUriAction::Decode {
            uri,
            show_type,
            output,
        } => {
            let uri = match uri {
                Some(uri) => uri,
                None => read_text(None, global)?,
            };
            let (data, mime) = data_uri_parse(uri.trim())?;

            if show_type {
                let mut line = mime.essence();
                for (key, value) in &mime.params {
                    line.push_str(&format!(";{}={}", key, value));
                }
                return write_line(output.as_ref(), &line);
            }

            tracing::info!(mime = %mime.essence(), bytes = data.len(), "data uri decoded");
            write_output(output.as_ref(), &data)
        }
    }
}
