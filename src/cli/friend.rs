//! Friend (participant) shell commands

use clap::Subcommand;

use super::{Reply, Session};
use crate::display::{format_participant_added, format_participant_list};
use crate::error::SplitResult;
use crate::services::ParticipantService;

/// Friend subcommands
#[derive(Subcommand, Debug)]
pub enum FriendCommands {
    /// Add a friend; without --address the next line is read as the address
    Add {
        /// Friend name (may contain spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        /// Wallet address
        #[arg(short, long)]
        address: Option<String>,
    },
    /// Supply the address for the friend being added
    Confirm {
        /// Wallet address
        address: String,
    },
    /// Stop adding the friend waiting for an address
    Cancel,
    /// Remove a friend and scrub them from every expense
    #[command(alias = "rm")]
    Remove {
        /// Friend name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// List friends
    #[command(alias = "ls")]
    List,
}

/// Handle a friend command
pub fn handle_friend_command(session: &mut Session, cmd: FriendCommands) -> SplitResult<Reply> {
    let mut service = ParticipantService::new(&mut session.storage);

    match cmd {
        FriendCommands::Add { name, address } => {
            let name = name.join(" ");
            match address {
                Some(address) => {
                    let participant = service.add_with_address(&name, &address)?;
                    Ok(Reply::text(format_participant_added(&participant)))
                }
                None => {
                    let pending = service.add(&name)?;
                    Ok(Reply::AwaitAddress {
                        prompt: format!("Wallet address for {}:", pending.name),
                        name: pending.name,
                    })
                }
            }
        }

        FriendCommands::Confirm { address } => {
            let participant = service.confirm_pending(&address)?;
            Ok(Reply::text(format_participant_added(&participant)))
        }

        FriendCommands::Cancel => Ok(Reply::text(match service.cancel_pending() {
            Some(pending) => format!("Cancelled adding {}.", pending.name),
            None => "No friend is waiting for an address.".to_string(),
        })),

        FriendCommands::Remove { name } => {
            let removal = service.remove(&name.join(" "))?;

            let mut lines = vec![format!("Removed {}.", removal.participant.name)];
            for edit in &removal.cascade.edited {
                lines.push(format!(
                    "  Expense {} \"{}\" is now split among {}",
                    edit.after.id,
                    edit.after.description,
                    edit.after.split_among.join(", ")
                ));
            }
            for dropped in &removal.cascade.dropped {
                lines.push(format!(
                    "  Expense {} \"{}\" was dropped ({})",
                    dropped.record.id, dropped.record.description, dropped.reason
                ));
            }
            Ok(Reply::Text(lines.join("\n")))
        }

        FriendCommands::List => {
            let pending = session.storage.participants.pending();
            Ok(Reply::Text(
                format_participant_list(session.storage.participants.list(), pending)
                    .trim_end()
                    .to_string(),
            ))
        }
    }
}
