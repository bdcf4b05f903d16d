//! Expense shell commands

use clap::Subcommand;

use super::{Reply, Session};
use crate::display::{format_expense_added, format_expense_list};
use crate::error::{SplitError, SplitResult};
use crate::models::ExpenseId;
use crate::services::{CreateExpenseInput, ExpenseService};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense split equally among friends
    Add {
        /// Amount paid (e.g. "10" or "10.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Friend who paid
        #[arg(short, long)]
        paid_by: String,
        /// Comma-separated friends sharing the cost
        #[arg(
            short,
            long,
            value_delimiter = ',',
            required_unless_present = "all",
            conflicts_with = "all"
        )]
        split: Vec<String>,
        /// Split among every friend
        #[arg(short, long)]
        all: bool,
        /// What the money was spent on
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },
    /// Remove an expense by id
    #[command(alias = "rm")]
    Remove {
        /// Expense id as shown by `expense list`
        id: String,
    },
    /// List recorded expenses
    #[command(alias = "ls")]
    List,
}

/// Handle an expense command
pub fn handle_expense_command(session: &mut Session, cmd: ExpenseCommands) -> SplitResult<Reply> {
    let currency = session.settings.currency_symbol.clone();

    match cmd {
        ExpenseCommands::Add {
            amount,
            paid_by,
            split,
            all,
            description,
        } => {
            let split_among = if all {
                session.storage.participants.names()
            } else {
                split
            };

            let input = CreateExpenseInput::parse(description.join(" "), &amount, paid_by, split_among)?;
            let record = ExpenseService::new(&mut session.storage).add(input)?;
            Ok(Reply::text(format_expense_added(&record, &currency)))
        }

        ExpenseCommands::Remove { id } => {
            let expense_id: ExpenseId = id
                .parse()
                .map_err(|_| SplitError::Validation(format!("Invalid expense id: '{}'", id)))?;

            let removed = ExpenseService::new(&mut session.storage).remove(expense_id)?;
            Ok(Reply::Text(format!(
                "Removed expense {} \"{}\"",
                removed.id, removed.description
            )))
        }

        ExpenseCommands::List => Ok(Reply::Text(
            format_expense_list(
                session.storage.expenses.list(),
                &currency,
                session.settings.share_precision,
            )
            .trim_end()
            .to_string(),
        )),
    }
}
