//! Payment request service
//!
//! Records "please settle up" notifications sent from the connected wallet.
//! Nothing here affects balances.

use chrono::{DateTime, Utc};

use crate::audit::EntityType;
use crate::error::{SplitError, SplitResult};
use crate::models::PaymentRequest;
use crate::storage::Storage;

pub struct RequestService<'a> {
    storage: &'a mut Storage,
}

impl<'a> RequestService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Send a request to participant `name` from `wallet`
    ///
    /// Requires a connected wallet and a participant with an address.
    pub fn send(&mut self, name: &str, wallet: Option<&str>) -> SplitResult<PaymentRequest> {
        let from = wallet
            .filter(|w| !w.trim().is_empty())
            .ok_or_else(|| SplitError::Validation("Connect your wallet first".into()))?;

        let name = name.trim();
        let participant = self
            .storage
            .participants
            .get(name)
            .ok_or_else(|| SplitError::participant_not_found(name))?;

        let to = participant
            .address
            .clone()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| {
                SplitError::Validation(format!("{} does not have a wallet address", name))
            })?;

        let participant_name = participant.name.clone();
        Ok(self.record_request_sent(&to, &participant_name, from, Utc::now()))
    }

    /// Append a request to the log as-is
    pub fn record_request_sent(
        &mut self,
        to: &str,
        name: &str,
        from: &str,
        time: DateTime<Utc>,
    ) -> PaymentRequest {
        let request = PaymentRequest::new(to, name, from, time);
        self.storage.requests.append(request.clone());
        tracing::debug!(to = %request.to, name = %request.name, "payment request recorded");

        self.storage.log_create(
            EntityType::PaymentRequest,
            request.to.clone(),
            Some(request.name.clone()),
            &request,
        );

        request
    }

    /// Requests in the order they were sent
    pub fn list(&self) -> &[PaymentRequest] {
        self.storage.requests.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::balance::BalanceService;
    use crate::services::ParticipantService;

    const WALLET: &str = "0x9999999999999999999999999999999999999999";

    fn storage_with_bob() -> Storage {
        let mut storage = Storage::in_memory();
        ParticipantService::new(&mut storage)
            .add_with_address("Bob", "0xB0B0000000000000000000000000000000000001")
            .unwrap();
        storage
    }

    #[test]
    fn test_send_request() {
        let mut storage = storage_with_bob();
        let before = BalanceService::new(&storage).balances();

        let request = RequestService::new(&mut storage).send("Bob", Some(WALLET)).unwrap();

        assert_eq!(request.name, "Bob");
        assert_eq!(request.from, WALLET);
        assert_eq!(storage.requests.len(), 1);
        assert_eq!(BalanceService::new(&storage).balances(), before);
    }

    #[test]
    fn test_send_requires_wallet() {
        let mut storage = storage_with_bob();
        let mut service = RequestService::new(&mut storage);

        assert!(service.send("Bob", None).unwrap_err().is_validation());
        assert!(service.send("Bob", Some(" ")).unwrap_err().is_validation());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_request_targets_participant_address() {
        let mut storage = storage_with_bob();
        let request = RequestService::new(&mut storage)
            .send("  Bob ", Some(WALLET))
            .unwrap();
        assert_eq!(request.to, "0xB0B0000000000000000000000000000000000001");
        assert!(request.summary().starts_with("To Bob (0xB0B0...0001) at "));
    }

    #[test]
    fn test_removed_participant_cannot_be_requested() {
        let mut storage = storage_with_bob();
        ParticipantService::new(&mut storage).remove("Bob").unwrap();
        let err = RequestService::new(&mut storage)
            .send("Bob", Some(WALLET))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_send_to_unknown_participant() {
        let mut storage = storage_with_bob();
        let err = RequestService::new(&mut storage)
            .send("Carol", Some(WALLET))
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
