use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spendbook_cli::cli::{handle_ledger_command, LedgerCommands, Session};
use spendbook_cli::config::{SpendbookPaths, Settings};
use spendbook_cli::storage::PurchaseStore;

/// Environment variable holding the log filter
const LOG_ENV: &str = "SPENDBOOK_LOG";

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Terminal-based personal purchase tracker",
    long_about = "Spendbook records income and categorized purchases, shows your \
                  remaining balance and sorts your spending, keeping everything \
                  in a plain text file."
)]
struct Cli {
    /// Purchases file (defaults to the configured file, then ./purchases.txt)
    #[arg(short, long, global = true, env = "SPENDBOOK_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (the default)
    Menu,

    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Show current configuration and paths
    Config {
        /// Remember a purchases file for later runs
        #[arg(long, value_name = "PATH")]
        set_file: Option<PathBuf>,

        /// Forget the remembered purchases file
        #[arg(long, conflicts_with = "set_file")]
        reset_file: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = SpendbookPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let purchases_file = settings.resolve_purchases_file(cli.file.as_deref());
    let store = PurchaseStore::new(purchases_file);

    match cli.command {
        None | Some(Commands::Menu) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), store);
            session.run()?;
        }
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&store, cmd)?;
        }
        Some(Commands::Config {
            set_file,
            reset_file,
        }) => {
            if set_file.is_some() || reset_file {
                settings.purchases_file = set_file;
                settings.save(&paths)?;
                info!(settings = %paths.settings_file().display(), "settings saved");
                println!("Settings were saved!");
                println!();
            }

            println!("Spendbook Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!(
                "Purchases file:   {}",
                settings.resolve_purchases_file(cli.file.as_deref()).display()
            );
            println!();
            println!("Settings:");
            println!("  Schema version: {}", settings.schema_version);
            match &settings.purchases_file {
                Some(path) => println!("  Purchases file: {}", path.display()),
                None => println!("  Purchases file: (default)"),
            }
        }
    }

    Ok(())
}

/// Log to stderr so menu and report output on stdout stay clean
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
