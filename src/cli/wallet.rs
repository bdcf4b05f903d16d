//! Wallet and payment request shell commands

use clap::Subcommand;

use super::{Reply, Session};
use crate::error::SplitResult;
use crate::models::participant::shorten_address;
use crate::services::RequestService;
use crate::wallet::{connect, ConfiguredWallet};

/// Wallet subcommands
#[derive(Subcommand, Debug)]
pub enum WalletCommands {
    /// Connect a wallet; defaults to the configured address
    Connect {
        /// Address to connect instead of the configured one
        address: Option<String>,
    },
    /// Show the connected wallet
    Status,
}

/// Handle a wallet command
pub fn handle_wallet_command(session: &mut Session, cmd: WalletCommands) -> SplitResult<Reply> {
    match cmd {
        WalletCommands::Connect { address } => {
            let connected = match address {
                Some(address) => connect(&ConfiguredWallet::new(Some(address)))?,
                None => connect(session.connector.as_ref())?,
            };
            let message = format!("Connected wallet {}", shorten_address(&connected));
            session.wallet = Some(connected);
            Ok(Reply::Text(message))
        }

        WalletCommands::Status => Ok(Reply::Text(match &session.wallet {
            Some(address) => format!("Connected: {}", address),
            None => "No wallet connected.".to_string(),
        })),
    }
}

/// Send a payment request to a friend
pub fn handle_request_command(session: &mut Session, name: &[String]) -> SplitResult<Reply> {
    let wallet = session.wallet.clone();
    let request = RequestService::new(&mut session.storage).send(&name.join(" "), wallet.as_deref())?;
    Ok(Reply::Text(format!(
        "Payment request sent to {} ({})",
        request.name,
        shorten_address(&request.to)
    )))
}

/// List the payment requests sent this session
pub fn handle_requests_list(session: &Session) -> Reply {
    let requests = session.storage.requests.list();
    if requests.is_empty() {
        return Reply::text("No payment requests sent.");
    }

    let lines: Vec<String> = requests.iter().map(|r| r.summary()).collect();
    Reply::Text(lines.join("\n"))
}
