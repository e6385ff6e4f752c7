use crate::cli::global::GlobalArgs;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Reads a file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > global.max_size {
                if !global.force {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
                tracing::warn!(
                    size = file_size,
                    limit = global.max_size,
                    "processing file above --max-size"
                );
            }
        }

        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    // Check stdin size after reading
    if global.max_size > 0 && buffer.len() > global.max_size {
        if !global.force {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                buffer.len(),
                global.max_size
            )
            .into());
        }
        tracing::warn!(
            size = buffer.len(),
            limit = global.max_size,
            "processing input above --max-size"
        );
    }

    Ok(buffer)
}

/// Like [`read_input`], but the input must be UTF-8 text.
pub fn read_text(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = read_input(file, global)?;
    String::from_utf8(bytes).map_err(|_| "Input must be valid UTF-8 for decoding".into())
}

/// Writes bytes to a file or stdout.
pub fn write_output(
    output: Option<&PathBuf>,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Writes a line of text to a file or stdout.
pub fn write_line(
    output: Option<&PathBuf>,
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');
    write_output(output, line.as_bytes())
}
