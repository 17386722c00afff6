//! Cardsmith CLI - Generate flashcards and discussion questions from text.

use cardsmith_cli::commands;
use cardsmith_cli::{Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log filter used with `--verbose`
const VERBOSE_FILTER: &str = "warn,cardsmith_extractor=debug,cardsmith_llm=debug,cardsmith_mochi=debug";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    // Log to stderr so stdout carries only records
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> cardsmith_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };

    // `config` manages the file itself, so it must work even when the file is broken
    if let Command::Config(args) = cli.command {
        let formatter = Formatter::new(
            cli.format.map(Into::into).unwrap_or_default(),
            !cli.no_color,
        );
        return commands::execute_config(args, &config_path, &formatter);
    }

    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Generate(args) => {
            commands::execute_generate(args, &config, &formatter).await?;
        }
        Command::Parse(args) => {
            commands::execute_parse(args, &formatter)?;
        }
        Command::Export(args) => {
            commands::execute_export(args, &config, &formatter).await?;
        }
        Command::Config(_) => unreachable!("handled above"),
    }

    Ok(())
}
