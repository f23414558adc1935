use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "trash-cleaner")]
#[command(about = "Empties the trash bin in small scheduled batches", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP dashboard and the background scheduler
    Serve {
        #[arg(short, long, default_value = "8790")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Run one cleanup batch now (suitable for cron)
    Run {
        /// Re-baseline progress to the current trash count first
        #[arg(long)]
        manual: bool,
    },
    /// Print enabled flag, last run and next run
    Status,
    /// Print campaign progress against the baseline
    Progress,
    /// Start a cleanup campaign
    Enable,
    /// Stop the cleanup campaign at the next batch boundary
    Disable,
    /// Write default settings for keys that are missing
    Install,
    /// Put freshly created items into the trash (local SQLite only)
    Seed {
        #[arg(short, long, default_value = "100")]
        count: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Run { manual } => commands::campaign::run_once(manual).await?,
        Commands::Status => commands::campaign::status().await?,
        Commands::Progress => commands::campaign::progress().await?,
        Commands::Enable => commands::campaign::set_enabled(true).await?,
        Commands::Disable => commands::campaign::set_enabled(false).await?,
        Commands::Install => commands::campaign::install().await?,
        Commands::Seed { count } => commands::seed::run(count).await?,
    }

    Ok(())
}
