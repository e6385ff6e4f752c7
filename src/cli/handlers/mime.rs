use crate::cli::args::MimeAction;
use octext::{best_match, parse_media_range, parse_mime_type};

pub fn handle(action: MimeAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MimeAction::BestMatch { supported, accept } => {
            let chosen = best_match(supported.as_slice(), &accept)?;
            if chosen.is_empty() {
                tracing::warn!(accept = %accept, "no supported type is acceptable");
                std::process::exit(1);
            }
            println!("{}", chosen);
        }
        MimeAction::Parse { mime_type, range } => {
            let parsed = if range {
                parse_media_range(&mime_type)?
            } else {
                parse_mime_type(&mime_type)?
            };
            println!("type: {}", parsed.media_type);
            println!("subtype: {}", parsed.subtype);
            for (key, value) in &parsed.params {
                println!("param: {}={}", key, value);
            }
        }
    }

    Ok(())
}
