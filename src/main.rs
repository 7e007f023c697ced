use std::{
    fs::{File, OpenOptions},
    io::{self, Read},
    path::{Path, PathBuf},
    sync::Mutex,
};

use alerun::{input::parse_sequence, RunQuery};
use anyhow::Context;
use joinery::JoinableIterator;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

const EXAMPLE: [i64; 13] = [1, 2, 3, 5, 10, 9, 8, 9, 10, 11, 7, 8, 7];

#[derive(Debug, StructOpt)]
struct Args {
    /// Amount by which consecutive numbers in a run must increase or decrease
    #[structopt(short, long, default_value = "1", allow_hyphen_values = true)]
    step: i64,

    /// Length of a run
    #[structopt(short, long, default_value = "3")]
    window_size: usize,

    /// If given, read the sequence from this file
    #[structopt(short, long, conflicts_with_all = &["input", "example"])]
    file: Option<PathBuf>,

    /// If given, use this as the sequence directly
    #[structopt(short, long, conflicts_with_all = &["file", "example"])]
    input: Option<String>,

    /// Search the built-in example sequence
    #[structopt(short, long)]
    example: bool,

    /// Append diagnostics to this file instead of writing them to stderr
    #[structopt(short, long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file: {:?}", path.display()))?;

            builder
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_file(true)
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };

    installed.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {}", err))
}

fn read_sequence(args: &Args) -> anyhow::Result<Vec<i64>> {
    if args.example {
        return Ok(EXAMPLE.to_vec());
    }

    let buf = match args.input {
        Some(ref buf) => buf.clone(),
        None => {
            let mut buf = String::new();
            match args.file {
                Some(ref file) => File::open(file)
                    .with_context(|| format!("failed to open file: {:?}", file.display()))?
                    .read_to_string(&mut buf)
                    .context("failed to read sequence from file")?,
                None => io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read sequence from stdin")?,
            };
            buf
        }
    };

    parse_sequence(&buf).context("failed to parse integer sequence")
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::from_args();

    init_logging(args.log_file.as_deref())?;

    let sequence = read_sequence(&args)?;
    let query = RunQuery {
        step: args.step,
        window_size: args.window_size,
    };

    info!(?query, len = sequence.len(), "searching for runs");
    println!("searching [{}]", sequence.iter().join_with(", "));

    match query.find(&sequence).context("invalid run query")? {
        Some(runs) => println!("found run indices [{}]", runs.iter().join_with(", ")),
        None => println!("no runs found"),
    }

    Ok(())
}
