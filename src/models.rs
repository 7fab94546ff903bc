use crate::errors::TrackerError;
use anyhow::Result;
use chrono::NaiveDate;
use getset::Getters;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl TransactionType {
    /// Capitalized form used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => f.write_str("income"),
            TransactionType::Expense => f.write_str("expense"),
        }
    }
}

/// One row of the store. Column names match the file header
/// `Date,Type,Amount,Description,Category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Transaction {
    #[getset(get = "pub")]
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[getset(get = "pub")]
    #[serde(rename = "Type")]
    type_: TransactionType,
    #[getset(get = "pub")]
    #[serde(rename = "Amount", with = "rust_decimal::serde::str")]
    amount: Decimal,
    #[getset(get = "pub")]
    #[serde(rename = "Description")]
    description: String,
    #[getset(get = "pub")]
    #[serde(rename = "Category")]
    category: String,
}

impl Transaction {
    /// Builds a transaction, enforcing a positive amount and non-empty
    /// description and category.
    pub fn new(
        date: NaiveDate,
        type_: TransactionType,
        amount: Decimal,
        description: &str,
        category: &str,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(TrackerError::NonPositiveAmount)?;
        }
        Ok(Transaction {
            date,
            type_,
            amount,
            description: require_text(description, TrackerError::EmptyDescription)?,
            category: require_text(category, TrackerError::EmptyCategory)?,
        })
    }
}

/// Parses a user-entered amount. Accepts plain decimals and scientific notation.
pub fn parse_amount(input: &str) -> Result<Decimal, TrackerError> {
    let input = input.trim();
    let amount = input
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| TrackerError::InvalidAmount)?;

    // Digits past the 28th decimal place are rounded away, so a tiny but
    // positive input can come back as zero.
    if amount.is_zero() && has_significant_digit(input) {
        return Err(TrackerError::InvalidAmount);
    }
    if amount <= Decimal::ZERO {
        return Err(TrackerError::NonPositiveAmount);
    }
    Ok(amount)
}

fn has_significant_digit(input: &str) -> bool {
    input
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.chars().any(|c| ('1'..='9').contains(&c)))
}

/// Rounds to cents the way amounts are shown to the user, half away from zero.
pub fn display_amount(amount: &Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Trims `input`, rejecting it with `err` when nothing is left.
pub fn require_text(input: &str, err: TrackerError) -> Result<String, TrackerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(err);
    }
    Ok(trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct Totals {
    #[getset(get = "pub")]
    income: Decimal,
    #[getset(get = "pub")]
    expense: Decimal,
    #[getset(get = "pub")]
    balance: Decimal,
}

impl Totals {
    pub fn new(income: Decimal, expense: Decimal) -> Result<Self> {
        let balance = income
            .checked_sub(expense)
            .ok_or(TrackerError::ValueOverflow)?;
        Ok(Totals {
            income,
            expense,
            balance,
        })
    }

    pub fn is_solvent(&self) -> bool {
        self.balance >= Decimal::ZERO
    }
}

/// Per-type category sums, in the order each category first appears.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct Breakdown {
    #[getset(get = "pub")]
    income: Vec<(String, Decimal)>,
    #[getset(get = "pub")]
    expense: Vec<(String, Decimal)>,
}

impl Breakdown {
    pub fn for_type(&self, type_: TransactionType) -> &[(String, Decimal)] {
        match type_ {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
        }
    }

    pub fn add(&mut self, type_: TransactionType, category: &str, amount: Decimal) -> Result<()> {
        let sums = match type_ {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expense,
        };
        match sums.iter_mut().find(|(name, _)| name == category) {
            Some((_, sum)) => {
                *sum = sum.checked_add(amount).ok_or(TrackerError::ValueOverflow)?;
            }
            None => sums.push((category.to_string(), amount)),
        }
        Ok(())
    }
}
