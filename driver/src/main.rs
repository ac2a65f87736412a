use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use driver::sink::{JsonLinesSink, VerdictSink};
use driver::source::JsonLinesSource;

/// Replays a recording of recognized game state through the overheat analyzer
/// and writes an audit line for every overheat.
#[derive(Debug, Parser)]
struct Args {
    /// Recording to replay, one JSON record per line. Reads stdin when omitted.
    #[arg(long)]
    input: Option<std::path::PathBuf>,
    /// Audit log to write. Writes to stdout when omitted.
    #[arg(long)]
    output: Option<std::path::PathBuf>,
    /// JSON file with analyzer settings
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    #[arg(short, long)]
    verbose: bool,
    #[command(flatten)]
    overrides: driver::settings::Overrides,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(move |meta| {
            *meta.level() <= level
                && (meta.target().contains("driver") || meta.target().contains("analysis"))
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Could not install logging: {}", e);
    }

    match run(args).await {
        Ok(stats) => {
            tracing::info!(?stats, "Done");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Replay failed: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<analysis::Stats, driver::DriverError> {
    let mut config = driver::settings::load_config(args.config.as_deref())?;
    args.overrides.apply(&mut config);

    let session = common::SessionId::new();
    tracing::info!(%session, "Starting...");

    let sink: Box<dyn VerdictSink> = match args.output.as_ref() {
        Some(path) => Box::new(JsonLinesSink::new(std::io::BufWriter::new(
            std::fs::File::create(path)?,
        ))),
        None => Box::new(JsonLinesSink::new(std::io::stdout())),
    };

    match args.input.as_ref() {
        Some(path) => {
            let source = JsonLinesSource::open(path).await?;
            driver::pipeline::replay(config, source, sink, session).await
        }
        None => driver::pipeline::replay(config, JsonLinesSource::stdin(), sink, session).await,
    }
}
