// file: src/main.rs
// description: commandline entry point, outcome reporting and exit codes
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use surname_search::utils::logging::{format_error, format_info, format_success};
use surname_search::{
    Config, OutputFormat, ResultWriter, RunOutcome, SearchOrchestrator, SurnameRepository,
    Validator,
};
use tracing::{debug, error, info};

const EXIT_SUCCESS: u8 = 0;
const EXIT_NO_MATCHES: u8 = 1;
const EXIT_USAGE: u8 = 2;
const EXIT_FAILURE: u8 = 3;

#[derive(Parser, Debug)]
#[command(name = "surname_search")]
#[command(author = "cipher")]
#[command(version)]
#[command(
    about = "Searches all surnames in the database by the beginning of the surname",
    long_about = "Searches all surnames in the database by the beginning of the surname \
                  passed with --surname. Results are stored in SearchResults.html \
                  (or SearchResults.json with --format json).\n\n\
                  Connection settings come from DB_HOST, DB_PORT, DB_USERNAME and \
                  DB_PASSWORD, a .env file, or the configuration file."
)]
struct Cli {
    /// Beginning of the surname to search for (empty matches everything)
    #[arg(short, long, value_name = "SURNAME", allow_hyphen_values = true)]
    surname: Option<String>,

    /// Output format, also used as the results file extension
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Directory for the results file [default: output.directory from config]
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print the number of matches instead of writing a file (exits 1 when
    /// nothing matches)
    #[arg(long)]
    count: bool,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Debug)]
enum Status {
    /// No prefix, or one that can never match. Carries the reason if any.
    Usage(Option<String>),
    Written(PathBuf),
    Counted(u64),
    NoMatches,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    surname_search::utils::logging::init_logger(cli.color, cli.verbose);

    let result = dispatch(&cli).await;
    report(&result);
    ExitCode::from(exit_code(&result))
}

/// Validates the arguments, then searches. Nothing is loaded or connected
/// until a usable prefix is known.
async fn dispatch(cli: &Cli) -> Result<Status> {
    let Some(prefix) = cli.surname.as_deref() else {
        return Ok(Status::Usage(None));
    };

    if let Err(e) = Validator::validate_prefix(prefix) {
        return Ok(Status::Usage(Some(e.to_string())));
    }

    run(cli, prefix).await
}

fn exit_code(result: &Result<Status>) -> u8 {
    match result {
        Ok(Status::Written(_)) => EXIT_SUCCESS,
        Ok(Status::Counted(0)) | Ok(Status::NoMatches) => EXIT_NO_MATCHES,
        Ok(Status::Counted(_)) => EXIT_SUCCESS,
        Ok(Status::Usage(_)) => EXIT_USAGE,
        Err(_) => EXIT_FAILURE,
    }
}

fn report(result: &Result<Status>) {
    match result {
        Ok(Status::Usage(None)) => {
            eprintln!("{}", Cli::command().render_help());
        }
        Ok(Status::Usage(Some(reason))) => {
            eprintln!("{}", format_error(reason));
            eprintln!("{}", Cli::command().render_usage());
        }
        Ok(Status::Written(path)) => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            println!(
                "{}",
                format_success(&format!("Success! Check your {}.", file_name))
            );
        }
        Ok(Status::Counted(count)) => {
            println!("{}", count);
        }
        Ok(Status::NoMatches) => {
            println!("{}", format_info("No matches found in DB."));
        }
        Err(e) => {
            error!("Search failed: {:#}", e);
            eprintln!("{}", format_error(&format!("{:#}", e)));
        }
    }
}

async fn run(cli: &Cli, prefix: &str) -> Result<Status> {
    let config = load_config(&cli.config)?;

    // The output location is checked before any connection is opened.
    let writer = if cli.count {
        None
    } else {
        let output_dir = cli
            .output_dir
            .clone()
            .unwrap_or_else(|| config.output.directory.clone());
        let writer = ResultWriter::new(output_dir, &config.output.file_stem)
            .context("Invalid output location")?;
        Some(writer)
    };

    let repository = SurnameRepository::connect(&config.db)
        .await
        .context("Failed to connect to the database")?;

    if let Err(e) = repository.ping().await {
        repository.close().await;
        return Err(e).context("Database connection check failed");
    }

    let Some(writer) = writer else {
        let count = repository.count_matches(prefix).await;
        repository.close().await;
        return Ok(Status::Counted(count.context("Count query failed")?));
    };

    let pretty = cli.pretty || config.output.pretty_json;
    let orchestrator = SearchOrchestrator::new(repository, cli.format.renderer(pretty), writer);

    info!("Searching surnames starting with {:?}", prefix);
    let outcome = orchestrator.run(prefix).await;
    orchestrator.close().await;

    match outcome.context("Search failed")? {
        RunOutcome::Written { path, format, count } => {
            info!("Saved {} surnames as {}", count, format);
            Ok(Status::Written(path))
        }
        RunOutcome::NoMatches { .. } => Ok(Status::NoMatches),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        debug!("Loading configuration from: {}", path.display());
        Config::load(Some(path)).context("Failed to load configuration")
    } else {
        debug!(
            "Config file {} not found, using defaults and environment",
            path.display()
        );
        Config::load(None).context("Failed to load configuration")
    }
}
