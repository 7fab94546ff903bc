use crate::models::{Breakdown, Totals, Transaction, TransactionType, display_amount};
use std::{
    fmt,
    io::{self, Write},
};
use tracing::warn;

const RULE_WIDTH: usize = 70;

/// Writes one line of user feedback. Output failures are logged, not raised.
pub fn say(out: &mut impl Write, message: fmt::Arguments<'_>) {
    if let Err(err) = writeln!(out, "{message}") {
        warn!("failed to write output: {err}");
    }
}

pub fn write_summary(out: &mut impl Write, totals: &Totals, breakdown: &Breakdown) -> io::Result<()> {
    writeln!(out, "\n--- Financial Summary ---")?;
    writeln!(out, "Total Income:  ${:.2}", display_amount(totals.income()))?;
    writeln!(out, "Total Expenses: ${:.2}", display_amount(totals.expense()))?;
    writeln!(out, "Balance:       ${:.2}", display_amount(totals.balance()))?;

    if totals.is_solvent() {
        writeln!(out, "✓ You're in the positive!")?;
    } else {
        writeln!(out, "⚠ You're spending more than you earn!")?;
    }

    for (type_, title) in [
        (TransactionType::Income, "Income by Category"),
        (TransactionType::Expense, "Expenses by Category"),
    ] {
        let sums = breakdown.for_type(type_);
        if sums.is_empty() {
            continue;
        }
        writeln!(out, "\n--- {title} ---")?;
        for (category, amount) in sums {
            writeln!(out, "{category}: ${:.2}", display_amount(amount))?;
        }
    }
    Ok(())
}

pub fn write_listing(out: &mut impl Write, transactions: &[Transaction]) -> io::Result<()> {
    if transactions.is_empty() {
        return writeln!(out, "No transactions found.");
    }

    writeln!(out, "\n--- All Transactions ---")?;
    writeln!(
        out,
        "{:<12} {:<8} {:<10} {:<15} {}",
        "Date", "Type", "Amount", "Category", "Description"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for tx in transactions {
        let amount = format!("${:.2}", display_amount(tx.amount()));
        writeln!(
            out,
            "{:<12} {:<8} {:<10} {:<15} {}",
            tx.date().format("%Y-%m-%d").to_string(),
            tx.type_().to_string(),
            amount,
            tx.category(),
            tx.description()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use chrono::NaiveDate;
    use rust_decimal::prelude::*;

    fn render<F>(f: F) -> Result<String>
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_summary_positive_with_categories() -> Result<()> {
        let totals = Totals::new(dec!(1200), dec!(600.5))?;
        let mut breakdown = Breakdown::default();
        breakdown.add(TransactionType::Income, "Job", dec!(1200))?;
        breakdown.add(TransactionType::Expense, "Housing", dec!(500))?;
        breakdown.add(TransactionType::Expense, "Food", dec!(100.5))?;

        let text = render(|out| write_summary(out, &totals, &breakdown))?;

        assert!(text.contains("Total Income:  $1200.00"));
        assert!(text.contains("Total Expenses: $600.50"));
        assert!(text.contains("Balance:       $599.50"));
        assert!(text.contains("✓ You're in the positive!"));
        assert!(text.contains("--- Income by Category ---\nJob: $1200.00"));
        assert!(text.contains("--- Expenses by Category ---\nHousing: $500.00\nFood: $100.50"));
        Ok(())
    }

    #[test]
    fn test_summary_negative_without_categories() -> Result<()> {
        let totals = Totals::new(dec!(0), dec!(25))?;

        let text = render(|out| write_summary(out, &totals, &Breakdown::default()))?;

        assert!(text.contains("Balance:       $-25.00"));
        assert!(text.contains("⚠ You're spending more than you earn!"));
        assert!(!text.contains("by Category"));
        Ok(())
    }

    #[test]
    fn test_summary_rounds_to_cents() -> Result<()> {
        let totals = Totals::new(dec!(19.999), dec!(0.005))?;
        let mut breakdown = Breakdown::default();
        breakdown.add(TransactionType::Income, "Job", dec!(19.999))?;
        breakdown.add(TransactionType::Expense, "Fees", dec!(0.005))?;

        let text = render(|out| write_summary(out, &totals, &breakdown))?;

        assert!(text.contains("Total Income:  $20.00"));
        assert!(text.contains("Total Expenses: $0.01"));
        assert!(text.contains("Balance:       $19.99"));
        assert!(text.contains("Job: $20.00"));
        assert!(text.contains("Fees: $0.01"));
        Ok(())
    }

    #[test]
    fn test_listing_rounds_to_cents() -> Result<()> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let rows = vec![
            Transaction::new(date, TransactionType::Income, dec!(19.999), "Refund", "Misc")?,
            Transaction::new(date, TransactionType::Expense, dec!(0.005), "Fee", "Bank")?,
        ];

        let text = render(|out| write_listing(out, &rows))?;

        assert!(text.contains("$20.00 "));
        assert!(text.contains("$0.01 "));
        Ok(())
    }

    #[test]
    fn test_listing_empty() -> Result<()> {
        let text = render(|out| write_listing(out, &[]))?;
        assert_eq!(text, "No transactions found.\n");
        Ok(())
    }

    #[test]
    fn test_listing_rows_are_aligned() -> Result<()> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let rows = vec![Transaction::new(date, TransactionType::Expense, dec!(500), "Rent", "Housing")?];

        let text = render(|out| write_listing(out, &rows))?;
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "--- All Transactions ---");
        assert_eq!(lines[2], "Date         Type     Amount     Category        Description");
        assert_eq!(lines[3].len(), RULE_WIDTH);
        assert_eq!(lines[4], "2024-01-02   expense  $500.00    Housing         Rent");
        Ok(())
    }
}
