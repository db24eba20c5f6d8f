use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use brackdom::parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE};
use brackdom::Config;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod outline;

#[derive(Debug, Parser)]
#[command(
    name = "brackdom",
    version,
    about = "Parse bracket-tag markup and print its element tree"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Tree)]
    format: FormatArg,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Maximum nesting depth (0 means unlimited)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Indented outline, one node per line
    Tree,
    /// Pretty-printed JSON
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let source = Source::from(args.input);
    let markup = source.read()?;

    let config = Config::new(args.max_depth, args.max_size);
    let nodes = brackdom::parse_with_config(&markup, config)
        .with_context(|| format!("failed to parse {source}"))?;
    info!(roots = nodes.len(), "parsed {source}");

    let rendered = match args.format {
        FormatArg::Tree => outline::render(&nodes),
        FormatArg::Json => {
            let mut json =
                serde_json::to_string_pretty(&nodes).context("failed to serialize tree")?;
            json.push('\n');
            json
        }
    };

    let mut sink: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    sink.write_all(rendered.as_bytes())
        .and_then(|()| sink.flush())
        .context("failed to write output")
}

/// Where the markup comes from
enum Source {
    Stdin,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Source {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdin, Self::File)
    }
}

impl Source {
    fn read(&self) -> Result<String> {
        match self {
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input file {}", path.display())),
            Self::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read stdin")?;
                Ok(buffer)
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
