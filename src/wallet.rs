//! Wallet connection
//!
//! The wallet is an external collaborator. A connector hands back the
//! accounts it is willing to expose; the first one becomes the sender
//! address for payment requests. Failures never touch the ledger.

use crate::error::{SplitError, SplitResult};

/// Something that can be asked for wallet accounts
pub trait WalletConnector {
    /// Ask the wallet for its accounts
    fn request_accounts(&self) -> SplitResult<Vec<String>>;
}

/// Connect and return the first exposed account
pub fn connect(connector: &dyn WalletConnector) -> SplitResult<String> {
    let accounts = connector.request_accounts()?;
    let address = accounts
        .into_iter()
        .map(|a| a.trim().to_string())
        .find(|a| !a.is_empty())
        .ok_or_else(|| SplitError::ExternalFailure("wallet exposed no accounts".into()))?;

    tracing::debug!(address = %address, "wallet connected");
    Ok(address)
}

/// A wallet backed by a fixed address from settings or the command line
#[derive(Debug, Clone, Default)]
pub struct ConfiguredWallet {
    address: Option<String>,
}

impl ConfiguredWallet {
    pub fn new(address: Option<String>) -> Self {
        Self { address }
    }
}

impl WalletConnector for ConfiguredWallet {
    fn request_accounts(&self) -> SplitResult<Vec<String>> {
        match &self.address {
            Some(address) => Ok(vec![address.clone()]),
            None => Err(SplitError::ExternalFailure(
                "no wallet detected (set wallet_address in config.json or pass an address)".into(),
            )),
        }
    }
}
