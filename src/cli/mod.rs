mod args;
mod commands;
mod config;
mod global;
mod handlers;

use args::{ConfigArgs, DataUriAction, DecodeArgs, EncodeArgs, IntAction, Ipv6Action, MimeAction};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "octext")]
#[command(version)]
#[command(about = "Binary-to-text codecs: base36/58/62, Ascii85, RFC 1924, URL-safe base64 and data URIs", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode data with a named codec
    Encode(EncodeArgs),

    /// Decode data with a named codec
    Decode(DecodeArgs),

    /// List available codecs
    List,

    /// Inspect the codec registry
    Config(ConfigArgs),

    /// Build or unpack data URIs
    DataUri {
        #[command(subcommand)]
        action: DataUriAction,
    },

    /// MIME type parsing and Accept negotiation
    Mime {
        #[command(subcommand)]
        action: MimeAction,
    },

    /// RFC 1924 compact IPv6 addresses
    Ipv6 {
        #[command(subcommand)]
        action: Ipv6Action,
    },

    /// Integer and byte-string conversion
    Int {
        #[command(subcommand)]
        action: IntAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    octext::set_color_enabled(!cli.global.no_color);
    init_tracing(&cli.global);

    let global = &cli.global;
    // Load codec registry with user overrides
    let registry = || config::load_registry(global);

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, global, &registry()?),
        Commands::Decode(args) => handlers::decode::handle(args, global, &registry()?),
        Commands::List => handlers::list::handle(&registry()?),
        Commands::Config(args) => handlers::config::handle(args, &registry()?),
        Commands::DataUri { action } => handlers::data_uri::handle(action, global, &registry()?),
        Commands::Mime { action } => handlers::mime::handle(action),
        Commands::Ipv6 { action } => handlers::ipv6::handle(action),
        Commands::Int { action } => handlers::int::handle(action, global, &registry()?),
    }
}

fn init_tracing(global: &GlobalArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(global.log_level()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!global.no_color)
        .with_target(false)
        .without_time()
        .try_init();
}
