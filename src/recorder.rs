use crate::{
    errors::TrackerError,
    models::{Transaction, TransactionType, display_amount, parse_amount, require_text},
    report::say,
    traits::{Prompt, TransactionStore},
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::Write;
use tracing::{info, warn};

/// Validates user input and appends one transaction per successful call.
pub struct Recorder<'a, S> {
    store: &'a S,
}

impl<'a, S> Recorder<'a, S>
where
    S: TransactionStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Records a transaction dated today.
    pub fn record(
        &self,
        type_: TransactionType,
        prompt: &mut impl Prompt,
        out: &mut impl Write,
    ) -> bool {
        self.record_on(type_, Local::now().date_naive(), prompt, out)
    }

    /// Asks for amount, description and category, stopping at the first
    /// invalid answer. Returns true only if a row was appended.
    pub fn record_on(
        &self,
        type_: TransactionType,
        date: NaiveDate,
        prompt: &mut impl Prompt,
        out: &mut impl Write,
    ) -> bool {
        match self.try_record(type_, date, prompt) {
            Ok(tx) => {
                info!(%type_, amount = %tx.amount(), category = %tx.category(), "recorded transaction");
                say(
                    out,
                    format_args!(
                        "{} of ${:.2} added successfully!",
                        type_.label(),
                        display_amount(tx.amount())
                    ),
                );
                true
            }
            Err(err) => {
                match err.downcast_ref::<TrackerError>() {
                    Some(e) if e.is_validation() => {
                        warn!(%type_, "rejected input: {e:?}");
                        say(out, format_args!("{e}"));
                    }
                    Some(TrackerError::InputClosed) => {}
                    _ => say(out, format_args!("Error adding transaction: {err:#}")),
                }
                false
            }
        }
    }

    fn try_record(
        &self,
        type_: TransactionType,
        date: NaiveDate,
        prompt: &mut impl Prompt,
    ) -> Result<Transaction> {
        let amount = parse_amount(&prompt.ask(&format!("Enter {type_} amount: $"))?)?;
        let description = require_text(
            &prompt.ask(&format!("Enter {type_} description: "))?,
            TrackerError::EmptyDescription,
        )?;
        let category = require_text(
            &prompt.ask(&format!("Enter {type_} category: "))?,
            TrackerError::EmptyCategory,
        )?;

        let tx = Transaction::new(date, type_, amount, &description, &category)?;
        self.store.append(&tx)?;
        Ok(tx)
    }
}
