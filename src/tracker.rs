use std::{io::Write, str::FromStr};

use crate::{
    aggregator::Aggregator,
    errors::TrackerError,
    models::TransactionType,
    recorder::Recorder,
    report,
    traits::{Prompt, TransactionStore},
};
use anyhow::{Result, anyhow};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    Summary,
    Transactions,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::AddIncome),
            "2" => Ok(MenuChoice::AddExpense),
            "3" => Ok(MenuChoice::Summary),
            "4" => Ok(MenuChoice::Transactions),
            "5" => Ok(MenuChoice::Exit),
            other => Err(anyhow!("unknown menu choice {other:?}")),
        }
    }
}

/// Interactive menu loop. Every operation recovers from its own errors so
/// the loop resumes until the user exits or input ends.
pub struct Tracker<S, P, W> {
    store: S,
    prompt: P,
    out: W,
}

impl<S, P, W> Tracker<S, P, W>
where
    S: TransactionStore,
    P: Prompt,
    W: Write,
{
    pub fn new(store: S, prompt: P, out: W) -> Self {
        Self { store, prompt, out }
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to Personal Finance Tracker!")?;

        loop {
            self.show_menu()?;

            let input = match self.prompt.ask("\nEnter your choice (1-5): ") {
                Ok(input) => input,
                Err(err) => match err.downcast_ref::<TrackerError>() {
                    Some(TrackerError::InputClosed) => {
                        debug!("input closed, leaving menu");
                        break;
                    }
                    _ => return Err(err),
                },
            };

            let Ok(choice) = input.parse::<MenuChoice>() else {
                writeln!(self.out, "Invalid choice. Please try again.")?;
                continue;
            };
            debug!(?choice, "menu choice");

            match choice {
                MenuChoice::AddIncome => {
                    Recorder::new(&self.store).record(TransactionType::Income, &mut self.prompt, &mut self.out);
                }
                MenuChoice::AddExpense => {
                    Recorder::new(&self.store).record(TransactionType::Expense, &mut self.prompt, &mut self.out);
                }
                MenuChoice::Summary => self.show_summary()?,
                MenuChoice::Transactions => self.show_transactions()?,
                MenuChoice::Exit => {
                    writeln!(self.out, "Thank you for using Personal Finance Tracker!")?;
                    break;
                }
            }
        }

        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n--- Personal Finance Tracker ---")?;
        writeln!(self.out, "1. Add Income")?;
        writeln!(self.out, "2. Add Expense")?;
        writeln!(self.out, "3. View Summary")?;
        writeln!(self.out, "4. View All Transactions")?;
        writeln!(self.out, "5. Exit")?;
        Ok(())
    }

    fn show_summary(&mut self) -> Result<()> {
        let aggregator = Aggregator::new(&self.store);
        let totals = aggregator.totals(&mut self.out);
        let breakdown = aggregator.breakdown(&mut self.out);
        report::write_summary(&mut self.out, &totals, &breakdown)?;
        Ok(())
    }

    fn show_transactions(&mut self) -> Result<()> {
        match self.store.load() {
            Ok(transactions) => report::write_listing(&mut self.out, &transactions)?,
            Err(err) => writeln!(self.out, "Error displaying transactions: {err:#}")?,
        }
        Ok(())
    }
}
