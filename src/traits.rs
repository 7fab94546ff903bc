use anyhow::Result;

use crate::models::Transaction;

/// TransactionStore trait provides append-only persistence of transactions.
pub trait TransactionStore {
    /// Appends a transaction to the store, creating it with a header row
    /// if it does not exist yet.
    ///
    /// # Arguments
    /// * `transaction` - The validated transaction to persist.
    ///
    /// # Returns
    /// A Result indicating success or failure.
    fn append(&self, transaction: &Transaction) -> Result<()>;

    /// Reads every transaction in the store, in file order.
    ///
    /// # Returns
    /// All records, an empty list when the store does not exist, or an error
    /// if any row cannot be read.
    fn load(&self) -> Result<Vec<Transaction>>;
}

/// Prompt trait provides line input from the user.
pub trait Prompt {
    /// Shows `message` and reads one line of input without its line ending.
    ///
    /// Fails with `TrackerError::InputClosed` once input is exhausted.
    fn ask(&mut self, message: &str) -> Result<String>;
}
