//! downup CLI - render markup from a file or stdin
//!
//! Usage: `downup [--format html|markdown] [--no-paragraphs] [FILE|-]`

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;
use downup::{Format, Options, Parser, Tokenizer};
use tracing_subscriber::EnvFilter;

/// Render downup markup as HTML.
#[derive(clap::Parser)]
#[command(name = "downup", version, about)]
struct Cli {
    /// Output format for links, images and tables.
    #[arg(short, long, default_value_t = Format::Html, value_parser = str::parse::<Format>)]
    format: Format,

    /// Leave top-level text unwrapped instead of adding `<p>` elements.
    #[arg(long)]
    no_paragraphs: bool,

    /// Input file; stdin when omitted or `-`.
    input: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            format: self.format,
            paragraphs: !self.no_paragraphs,
            ..Options::default()
        }
    }
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(cli.input.as_deref())?;

    let mut parser = Parser::with_options(Tokenizer::new(input), &cli.options());
    let output = parser.parse()?;
    for diagnostic in parser.errors() {
        tracing::warn!(%diagnostic, "markup left as written");
    }

    io::stdout().write_all(output.as_bytes())?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG overrides; otherwise only warnings
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("downup: {err}");
            ExitCode::FAILURE
        }
    }
}
