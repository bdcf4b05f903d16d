use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ether_split::audit::AuditLogger;
use ether_split::cli::Session;
use ether_split::config::{paths::SplitPaths, settings::Settings};
use ether_split::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "SPLIT_LOG";

#[derive(Parser)]
#[command(
    name = "split",
    version,
    about = "Split shared expenses among friends",
    long_about = "Ether-Split keeps a ledger of who paid for what during one session, \
                  works out who owes whom, and prints a settlement report you can \
                  export or send as payment requests from your wallet."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    #[command(alias = "shell")]
    Session,

    /// Run shell commands from a file
    Run {
        /// Script with one shell command per line
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("ether_split=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = SplitPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut session = open_session(&paths, settings);
            session.run(stdin.lock(), &mut io::stdout().lock(), interactive)?;
        }
        Commands::Run { file } => {
            let script = File::open(&file)
                .with_context(|| format!("Failed to open script {}", file.display()))?;
            let mut session = open_session(&paths, settings);
            session.run(BufReader::new(script), &mut io::stdout().lock(), false)?;
        }
        Commands::Config => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                tracing::info!(path = %paths.settings_file().display(), "wrote default settings");
            }
            println!("Ether-Split Configuration");
            println!("=========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Export directory: {}", settings.resolve_export_dir(&paths).display());
            println!();
            println!("Settings:");
            println!("  Currency:        {}", settings.currency_symbol);
            println!("  Share precision: {}", settings.share_precision);
            println!(
                "  Wallet address:  {}",
                settings.wallet_address.as_deref().unwrap_or("(not set)")
            );
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Commands::Audit { limit } => {
            let logger = AuditLogger::new(paths.audit_log());
            if !logger.exists() {
                println!("No audit entries yet.");
                return Ok(());
            }
            for entry in logger.read_recent(limit)? {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}

fn open_session(paths: &SplitPaths, settings: Settings) -> Session {
    let audit = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));
    let export_dir = settings.resolve_export_dir(paths);
    Session::new(Storage::new(audit), settings, export_dir)
}
