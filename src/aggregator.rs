use crate::{
    errors::TrackerError,
    models::{Breakdown, Totals, TransactionType},
    report::say,
    traits::TransactionStore,
};
use anyhow::Result;
use rust_decimal::Decimal;
use std::io::Write;
use tracing::error;

/// Read-only summaries over every transaction in a store.
pub struct Aggregator<'a, S> {
    store: &'a S,
}

impl<'a, S> Aggregator<'a, S>
where
    S: TransactionStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Total income, total expense and their difference.
    ///
    /// Falls back to all zeros when the store cannot be read, reporting the
    /// cause on `out`.
    pub fn totals(&self, out: &mut impl Write) -> Totals {
        self.try_totals().unwrap_or_else(|err| {
            error!("Error calculating balance: {err:#}");
            say(out, format_args!("Error calculating balance: {err:#}"));
            Totals::default()
        })
    }

    /// Category sums per transaction type.
    ///
    /// Falls back to an empty breakdown when the store cannot be read,
    /// reporting the cause on `out`.
    pub fn breakdown(&self, out: &mut impl Write) -> Breakdown {
        self.try_breakdown().unwrap_or_else(|err| {
            error!("Error getting category breakdown: {err:#}");
            say(out, format_args!("Error getting category breakdown: {err:#}"));
            Breakdown::default()
        })
    }

    pub fn try_totals(&self) -> Result<Totals> {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;

        for tx in self.store.load()? {
            let sum = match tx.type_() {
                TransactionType::Income => &mut income,
                TransactionType::Expense => &mut expense,
            };
            *sum = sum
                .checked_add(*tx.amount())
                .ok_or(TrackerError::ValueOverflow)?;
        }

        Totals::new(income, expense)
    }

    pub fn try_breakdown(&self) -> Result<Breakdown> {
        let mut breakdown = Breakdown::default();
        for tx in self.store.load()? {
            breakdown.add(*tx.type_(), tx.category(), *tx.amount())?;
        }
        Ok(breakdown)
    }
}
