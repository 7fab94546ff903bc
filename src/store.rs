use crate::{models::Transaction, traits::TransactionStore};
use anyhow::Result;
use csv::{ReaderBuilder, WriterBuilder};
use std::{
    fs::{self, OpenOptions},
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

pub const DEFAULT_STORE_PATH: &str = "transactions.csv";

const DEFAULT_HAS_HEADERS: bool = true;

/// Append-only CSV file with a `Date,Type,Amount,Description,Category` header.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // An empty file counts as missing so it still gets a header.
    fn needs_header(&self) -> Result<bool> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

impl TransactionStore for CsvStore {
    fn append(&self, transaction: &Transaction) -> Result<()> {
        let needs_header = self.needs_header()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(transaction)?;
        writer.flush()?;

        debug!(path = %self.path.display(), header = needs_header, "appended row");
        Ok(())
    }

    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store does not exist yet");
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(DEFAULT_HAS_HEADERS)
            .from_path(&self.path)?;

        let mut transactions = Vec::new();
        for rec in reader.deserialize::<Transaction>() {
            let tx: Transaction = rec?;
            transactions.push(tx);
        }

        debug!(path = %self.path.display(), rows = transactions.len(), "loaded store");
        Ok(transactions)
    }
}
