mod cli;
mod stats_cmd;
mod verify_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        cli::Commands::Stats {
            ref registry,
            ref encoding,
            format,
        } => stats_cmd::run(registry, encoding.as_deref(), format),
        cli::Commands::Verify { ref registry } => verify_cmd::run(registry),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
