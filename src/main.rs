use catalog_desk::{
    adapters::seed::{BuiltinSeed, JsonFileSeed},
    application::{load_library, standard_dispatcher},
    console::Console,
    ports::CatalogSource,
};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[clap(name = "catalog-desk", version, about = "Terminal catalog browser for books and movies")]
struct Cli {
    #[clap(
        long,
        help = "JSON file with books, movies and customers (defaults to the built-in catalog)"
    )]
    seed: Option<PathBuf>,

    #[clap(
        long,
        default_value = "catalog_desk=info",
        help = "Log filter used when RUST_LOG is not set"
    )]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing (stdout is reserved for the dialogue)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source: Box<dyn CatalogSource> = match &cli.seed {
        Some(path) => Box::new(JsonFileSeed::new(path)),
        None => Box::new(BuiltinSeed::new()),
    };

    let library = match load_library(source.as_ref()) {
        Ok(library) => library,
        Err(err) => {
            tracing::error!(error = ?err, "failed to build catalog");
            eprintln!("catalog-desk: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(library, standard_dispatcher(), stdin.lock(), stdout.lock());

    match console.run() {
        Ok(outcome) => {
            tracing::info!(?outcome, "session ended");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = ?err, "terminal failure");
            ExitCode::FAILURE
        }
    }
}
