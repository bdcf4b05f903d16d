//! Participant display formatting
//!
//! Formats the participant registry as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Participant, PendingParticipant};

#[derive(Tabled)]
struct ParticipantRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Added")]
    added: String,
}

/// Format the participant list, noting any participant still waiting for
/// an address
pub fn format_participant_list(
    participants: &[Participant],
    pending: Option<&PendingParticipant>,
) -> String {
    let mut output = if participants.is_empty() {
        "No friends added yet.\n".to_string()
    } else {
        let rows = participants.iter().enumerate().map(|(i, p)| ParticipantRow {
            index: i + 1,
            name: p.name.clone(),
            address: p.short_address(),
            added: p.added_at.format("%Y-%m-%d %H:%M").to_string(),
        });
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        format!("{}\n", table)
    };

    if let Some(pending) = pending {
        output.push_str(&format!(
            "Waiting for a wallet address for {}.\n",
            pending.name
        ));
    }

    output
}

/// One-line confirmation shown after a participant is added
pub fn format_participant_added(participant: &Participant) -> String {
    format!(
        "Added {} ({})",
        participant.name,
        participant.short_address()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_participant_list(&[], None), "No friends added yet.\n");
    }

    #[test]
    fn test_list_shows_short_addresses() {
        let participants = vec![
            Participant::new("Alice", "0x52908400098527886E0F7030069857D2E4169EE7"),
            Participant::new("Bob", "0x1234"),
        ];
        let output = format_participant_list(&participants, None);

        assert!(output.contains("Alice"));
        assert!(output.contains("0x5290...9EE7"));
        assert!(output.contains("0x1234"));
    }

    #[test]
    fn test_pending_is_noted() {
        let pending = PendingParticipant::new("Carol");
        let output = format_participant_list(&[], Some(&pending));
        assert!(output.contains("Waiting for a wallet address for Carol."));
    }
}
