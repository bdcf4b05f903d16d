//! Session shell and its command handlers
//!
//! Each shell line is parsed with clap and dispatched to a handler that
//! talks to the service layer and returns what should be printed.

pub mod expense;
pub mod export;
pub mod friend;
pub mod session;
pub mod wallet;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::handle_export_command;
pub use friend::{handle_friend_command, FriendCommands};
pub use session::{Session, ShellCommand};
pub use wallet::{handle_request_command, handle_requests_list, handle_wallet_command, WalletCommands};

/// What a handler wants the shell to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text
    Text(String),
    /// Print the prompt and read the next line as `name`'s address
    AwaitAddress { name: String, prompt: String },
    /// Leave the shell
    Quit,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}
