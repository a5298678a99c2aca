use clap::Parser;
use rust_decimal::Decimal;
use tinybank::{commands, config, registry};

/// In-memory bank driven by a stream of commands, one per line
#[derive(Debug, Parser)]
#[command(name = "tinybank", version, about)]
struct Args {
    /// File with one command per line, stdin when omitted
    input: Option<std::path::PathBuf>,

    /// Branch assigned to accounts opened without an explicit one
    #[arg(long, default_value = config::DEFAULT_BRANCH)]
    branch: String,

    /// Largest amount a single withdrawal may take
    #[arg(long, default_value_t = Decimal::from(config::DEFAULT_WITHDRAWAL_LIMIT))]
    withdrawal_limit: Decimal,

    /// Number of withdrawals allowed per account
    #[arg(long, default_value_t = config::DEFAULT_MAX_WITHDRAWALS)]
    max_withdrawals: u32,

    /// Log every operation, not only warnings
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    if let Err(error) = run(args).await {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error("{0}: {1}")]
    IO(std::path::PathBuf, std::io::Error),
    #[error("failed to read commands: {0}")]
    Read(std::io::Error),
}

async fn run(args: Args) -> Result<(), RunError> {
    let mut registry = registry::Registry::new(config::Config {
        branch: args.branch,
        withdrawal_limit: args.withdrawal_limit,
        max_withdrawals: args.max_withdrawals,
    });

    match args.input {
        Some(input) => {
            let file = tokio::fs::File::open(&input)
                .await
                .map_err(|error| RunError::IO(input.clone(), error))?;
            process(commands::text::CommandsReader::from_reader(file), &mut registry).await
        }
        None => {
            process(
                commands::text::CommandsReader::from_reader(tokio::io::stdin()),
                &mut registry,
            )
            .await
        }
    }
}

async fn process<R: tokio::io::AsyncRead + std::marker::Unpin>(
    mut reader: commands::text::CommandsReader<R>,
    registry: &mut registry::Registry,
) -> Result<(), RunError> {
    while let Some(next) = reader.next_command().await {
        let command = match next {
            Ok(command) => command,
            Err(commands::text::NextError::IO(error)) => return Err(RunError::Read(error)),
            Err(error) => {
                // Malformed lines are reported and skipped
                tracing::warn!(%error, "skipping command");
                continue;
            }
        };

        match commands::execute(registry, command) {
            Ok(outcome) => println!("{}", outcome),
            Err(error) => eprintln!("operation failed: {}", error),
        }
    }
    Ok(())
}
