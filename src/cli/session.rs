//! Interactive session shell
//!
//! A session owns one [`Storage`] for its whole lifetime. Input is read a
//! line at a time; each line is split on whitespace and parsed with clap.
//! After `friend add <name>` without an address the next line is taken as
//! that friend's address, or discards them if it is empty or `cancel`.

use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::expense::{handle_expense_command, ExpenseCommands};
use super::export::handle_export_command;
use super::friend::{handle_friend_command, FriendCommands};
use super::wallet::{handle_request_command, handle_requests_list, handle_wallet_command, WalletCommands};
use super::Reply;
use crate::config::Settings;
use crate::display::format_participant_added;
use crate::error::SplitResult;
use crate::export::ExportFormat;
use crate::reports::{render_report, BalanceReport};
use crate::services::ParticipantService;
use crate::storage::Storage;
use crate::wallet::{ConfiguredWallet, WalletConnector};

const PROMPT: &str = "split> ";

/// One parsed shell line
#[derive(Parser, Debug)]
#[command(
    name = "split",
    no_binary_name = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Commands understood by the session shell
#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Manage friends
    #[command(subcommand, alias = "friends")]
    Friend(FriendCommands),

    /// Manage expenses
    #[command(subcommand, alias = "expenses")]
    Expense(ExpenseCommands),

    /// Show everyone's net balance
    #[command(alias = "balance")]
    Balances,

    /// Print the settlement report
    Report,

    /// Connect or inspect the wallet
    #[command(subcommand)]
    Wallet(WalletCommands),

    /// Ask a friend to settle up
    Request {
        /// Friend name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// List payment requests sent this session
    Requests,

    /// Export the ledger
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
        /// Output file; prints to the terminal when omitted
        path: Option<PathBuf>,
        /// Write to the export directory with a timestamped name
        #[arg(long, conflicts_with = "path")]
        save: bool,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl ShellCommand {
    /// Parse one line of shell input
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        ShellLine::try_parse_from(line.split_whitespace()).map(|parsed| parsed.command)
    }
}

/// A running shell session
pub struct Session {
    pub(crate) storage: Storage,
    pub(crate) settings: Settings,
    pub(crate) export_dir: PathBuf,
    pub(crate) connector: Box<dyn WalletConnector>,
    pub(crate) wallet: Option<String>,
    awaiting_address: Option<String>,
}

impl Session {
    /// Start a session whose wallet is the one configured in settings
    pub fn new(storage: Storage, settings: Settings, export_dir: PathBuf) -> Self {
        let connector = Box::new(ConfiguredWallet::new(settings.wallet_address.clone()));
        Self {
            storage,
            settings,
            export_dir,
            connector,
            wallet: None,
            awaiting_address: None,
        }
    }

    /// Replace the wallet used by `wallet connect`
    pub fn with_connector(mut self, connector: Box<dyn WalletConnector>) -> Self {
        self.connector = connector;
        self
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Address of the connected wallet, if any
    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    /// Read and execute lines until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
        interactive: bool,
    ) -> SplitResult<()> {
        tracing::info!(session = %self.storage.session_id(), "session started");

        if interactive {
            writeln!(output, "Ether-Split. Type 'help' for commands.")?;
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            let quit = match self.handle_line(&line) {
                Some(Reply::Quit) => true,
                Some(Reply::Text(text)) => {
                    if !text.is_empty() {
                        writeln!(output, "{}", text)?;
                    }
                    false
                }
                Some(Reply::AwaitAddress { prompt, .. }) => {
                    if interactive {
                        write!(output, "{} ", prompt)?;
                    } else {
                        writeln!(output, "{}", prompt)?;
                    }
                    output.flush()?;
                    continue;
                }
                None => false,
            };

            if quit {
                break;
            }
            if interactive {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }
        }

        if let Some(pending) = self.storage.participants.pending() {
            tracing::debug!(name = %pending.name, "session ended with a pending participant");
        }
        tracing::info!(
            participants = self.storage.participants.len(),
            expenses = self.storage.expenses.len(),
            "session ended"
        );
        Ok(())
    }

    /// Handle one input line; `None` means nothing to print
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let trimmed = line.trim();

        if let Some(name) = self.awaiting_address.take() {
            return Some(self.receive_address(&name, trimmed));
        }

        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let command = match ShellCommand::parse_line(trimmed) {
            Ok(command) => command,
            Err(e) => return Some(Reply::Text(e.render().to_string().trim_end().to_string())),
        };

        match self.execute(command) {
            Ok(Reply::AwaitAddress { name, prompt }) => {
                self.awaiting_address = Some(name.clone());
                Some(Reply::AwaitAddress { name, prompt })
            }
            Ok(reply) => Some(reply),
            Err(e) => {
                tracing::debug!(error = %e, "command rejected");
                Some(Reply::Text(format!("Error: {}", e)))
            }
        }
    }

    /// The line after a `friend add` prompt
    fn receive_address(&mut self, name: &str, line: &str) -> Reply {
        let mut service = ParticipantService::new(&mut self.storage);

        if line.is_empty() || line.eq_ignore_ascii_case("cancel") {
            service.cancel_pending();
            return Reply::Text(format!("Cancelled adding {}.", name));
        }

        match service.confirm(name, line) {
            Ok(participant) => Reply::Text(format_participant_added(&participant)),
            Err(e) => Reply::Text(format!("Error: {}", e)),
        }
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: ShellCommand) -> SplitResult<Reply> {
        match command {
            ShellCommand::Friend(cmd) => handle_friend_command(self, cmd),
            ShellCommand::Expense(cmd) => handle_expense_command(self, cmd),
            ShellCommand::Balances => Ok(Reply::Text(
                BalanceReport::generate(&self.storage, &self.settings)
                    .format_terminal()
                    .trim_end()
                    .to_string(),
            )),
            ShellCommand::Report => Ok(Reply::Text(
                render_report(&self.storage, &self.settings)
                    .trim_end()
                    .to_string(),
            )),
            ShellCommand::Wallet(cmd) => handle_wallet_command(self, cmd),
            ShellCommand::Request { name } => handle_request_command(self, &name),
            ShellCommand::Requests => Ok(handle_requests_list(self)),
            ShellCommand::Export { format, path, save } => {
                handle_export_command(self, format, path, save)
            }
            ShellCommand::Quit => Ok(Reply::Quit),
        }
    }
}
