use anyhow::Result;
use clap::{Parser, Subcommand};
use docquery::{run_file, run_lines, WriterSink};
use docquery_core::{Config, Dispatcher, LogLevel};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docquery")]
#[command(about = "Index token lists and run boolean queries over them", long_about = None)]
struct Cli {
    /// Minimum severity printed: 0|error, 1|info, 2|debug (default: $DOCQUERY_LOG_LEVEL or info)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin, one per line
    Repl,
    /// Process a file of commands as one batch
    Run {
        /// Command file path
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let config = match cli.log_level {
        Some(level) => Config::new(level),
        None => Config::from_env(),
    };
    let mut dispatcher = Dispatcher::new(WriterSink::new(io::stdout(), &config));

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            run_lines(io::stdin().lock(), &mut dispatcher)?;
        }
        Commands::Run { input } => {
            run_file(&input, &mut dispatcher)?;
        }
    }
    Ok(())
}
