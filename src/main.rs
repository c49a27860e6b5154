use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dupscan::report::render_text;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for dupscan.
#[derive(Parser, Debug)]
#[command(name = "dupscan")]
#[command(about = "Find duplicate documents in a generated-site corpus")]
#[command(version)]
struct Args {
    /// Corpus root containing one subdirectory per document
    root: PathBuf,

    /// YAML pipeline configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON report to this path (atomically)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match dupscan::run_to_completion(&args.root, args.config.as_deref(), args.out.as_deref()) {
        Ok(report) => {
            print!("{}", render_text(&report));
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "run_failed");
            eprintln!("dupscan: {err}");
            ExitCode::FAILURE
        }
    }
}
