use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jdwire_tools::{
    decode, format_decode_pretty, pack_hex, parse_hex, parse_id_sizes, parse_value, size_report,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "jdwire-tools",
    version,
    about = "jdwire packing, decoding and sizing tools"
)]
struct Cli {
    /// Identifier widths: one width for all kinds, or
    /// object,thread,field,frame,method.
    #[arg(long, global = true, env = "JDWIRE_ID_SIZES", default_value = "8")]
    id_sizes: String,
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack values through a format and print the bytes as hex.
    Pack {
        /// Format tags, e.g. "1tm8".
        format: String,
        /// One value per tag (decimal, 0x hex, or negative decimal).
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Decode bytes through a format.
    Unpack {
        /// Format tags, e.g. "iiiii".
        format: String,
        /// Input bytes as hex.
        #[arg(conflicts_with = "file", required_unless_present = "file")]
        hex: Option<String>,
        /// Read raw input bytes from a file instead.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },
    /// Report per-tag and total encoded sizes of a format.
    Size {
        /// Format tags.
        format: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let sizes = parse_id_sizes(&cli.id_sizes).context("parse --id-sizes")?;
    debug!(?sizes, "identifier widths");

    match cli.command {
        Command::Pack { format, values } => {
            let values = values
                .iter()
                .map(String::as_str)
                .map(parse_value)
                .collect::<Result<Vec<_>>>()?;
            let hex = pack_hex(sizes, &format, &values)?;
            info!(format = %format, bytes = hex.len() / 2, "packed");
            println!("{hex}");
        }
        Command::Unpack {
            format,
            hex,
            file,
            output,
        } => {
            let bytes = match (hex, file) {
                (_, Some(path)) => {
                    fs::read(&path).with_context(|| format!("read input {}", path.display()))?
                }
                (Some(hex), None) => parse_hex(&hex)?,
                (None, None) => bail!("provide hex input or --file"),
            };
            debug!(len = bytes.len(), "loaded input");
            let report = decode(sizes, &format, &bytes)?;
            info!(
                fields = report.fields.len(),
                consumed = report.consumed,
                trailing = report.trailing,
                "decoded"
            );
            match output {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
                OutputFormat::Pretty => print!("{}", format_decode_pretty(&report)),
            }
        }
        Command::Size { format } => {
            let report = size_report(sizes, &format);
            info!(format = %format, total = report.total, "sized");
            for tag in &report.tags {
                let note = if tag.known { "" } else { " (unknown)" };
                println!("{} {}{note}", tag.tag, tag.width);
            }
            println!("total {}", report.total);
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
