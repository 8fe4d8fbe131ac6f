use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::{Context, Result};
use booldex::core::config::{Config, ResultPathStyle};
use booldex::core::database::Database;
use booldex::core::error::Error;
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "booldex", version)]
#[command(about = "Boolean retrieval over a document corpus", long_about = None)]
struct Args {
    /// Corpus manifest: one document path per line
    manifest: PathBuf,

    /// File holding the query, e.g. `cat dog | !bird`
    query_file: PathBuf,

    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to write the inverted index [default: indice.txt]
    #[arg(long)]
    index_out: Option<PathBuf>,

    /// Where to write the matching documents [default: resposta.txt]
    #[arg(long)]
    result_out: Option<PathBuf>,

    /// Text analyzer (portuguese, english, simple)
    #[arg(long)]
    analyzer: Option<String>,

    /// List matches by file name instead of manifest path
    #[arg(long)]
    file_names: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.downcast_ref::<Error>().is_some_and(Error::is_query_error) {
                error!("query rejected, no result file written: {:#}", err);
            } else {
                error!("{:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(path) = args.index_out {
        config.index_path = path;
    }
    if let Some(path) = args.result_out {
        config.result_path = path;
    }
    if let Some(name) = args.analyzer {
        config.analyzer = name;
    }
    if args.file_names {
        config.result_paths = ResultPathStyle::FileName;
    }

    let results = Database::run(&args.manifest, &args.query_file, config)
        .with_context(|| format!("querying corpus {}", args.manifest.display()))?;

    info!("{} matching documents", results.total_hits());
    Ok(())
}
