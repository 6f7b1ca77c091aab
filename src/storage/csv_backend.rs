use std::{
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    errors::LedgerError,
    ledger::{Transaction, TransactionDraft, TransactionKind},
};

use super::{RecordStore, Result};

/// Header row written before the records, in fixed field order.
pub const CSV_HEADER: [&str; 4] = ["date", "kind", "category", "amount"];
/// Column name used for the kind field by files written before the rename.
const LEGACY_KIND_COLUMN: &str = "type";
const TMP_SUFFIX: &str = "tmp";

/// Flat-file store keeping the whole transaction list in one CSV file.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for CsvRecordStore {
    fn load(&self) -> Result<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no transaction file yet; starting empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };
        let transactions = read_transactions(file)?;
        info!(
            path = %self.path.display(),
            records = transactions.len(),
            "loaded transactions"
        );
        Ok(transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = tmp_path(&self.path);
        let written = File::create(&tmp)
            .map_err(LedgerError::from)
            .and_then(|file| write_transactions(file, transactions))
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(LedgerError::from));
        if let Err(err) = written {
            warn!(path = %self.path.display(), error = %err, "saving transactions failed");
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        info!(
            path = %self.path.display(),
            records = transactions.len(),
            "saved transactions"
        );
        Ok(())
    }
}

/// One data row as stored on disk. Fields are matched to columns by header name.
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    #[serde(alias = "type")]
    kind: String,
    category: String,
    amount: String,
}

#[derive(Serialize)]
struct CsvOutRow<'a> {
    date: &'a str,
    kind: TransactionKind,
    category: &'a str,
    amount: String,
}

impl CsvRow {
    fn into_transaction(self, record_no: usize) -> Result<Transaction> {
        let kind = self
            .kind
            .parse::<TransactionKind>()
            .map_err(|message| LedgerError::decode(record_no, message))?;
        let raw_amount = self.amount.trim();
        let amount = raw_amount.parse::<f64>().map_err(|_| {
            LedgerError::decode(record_no, format!("amount `{raw_amount}` is not a number"))
        })?;
        TransactionDraft {
            date: self.date,
            kind: Some(kind),
            category: self.category,
            amount: Some(amount),
        }
        .validate()
        .map_err(|err| LedgerError::decode(record_no, err.to_string()))
    }
}

/// Checks the header row names every field, in field order. Names are case-sensitive.
fn check_header(headers: &StringRecord) -> Result<()> {
    if headers.is_empty() {
        return Err(LedgerError::decode(0, "missing header row"));
    }
    let has = |name: &str| headers.iter().any(|header| header == name);
    for name in CSV_HEADER {
        let present = if name == CSV_HEADER[1] {
            has(name) || has(LEGACY_KIND_COLUMN)
        } else {
            has(name)
        };
        if !present {
            return Err(LedgerError::decode(
                0,
                format!("header is missing the `{name}` column"),
            ));
        }
    }
    if has(CSV_HEADER[1]) && has(LEGACY_KIND_COLUMN) {
        return Err(LedgerError::decode(
            0,
            format!("header has both `{}` and `{LEGACY_KIND_COLUMN}` columns", CSV_HEADER[1]),
        ));
    }
    Ok(())
}

/// Decodes a CSV document. Any malformed record fails the whole read.
pub fn read_transactions<R: io::Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);
    check_header(rdr.headers()?)?;

    let mut transactions = Vec::new();
    for (idx, row) in rdr.deserialize::<CsvRow>().enumerate() {
        transactions.push(row?.into_transaction(idx + 1)?);
    }
    Ok(transactions)
}

/// Encodes the full sequence, header first.
pub fn write_transactions<W: io::Write>(writer: W, transactions: &[Transaction]) -> Result<()> {
    let mut wrt = WriterBuilder::new().has_headers(false).from_writer(writer);
    wrt.write_record(CSV_HEADER)?;
    for txn in transactions {
        wrt.serialize(CsvOutRow {
            date: txn.date(),
            kind: txn.kind(),
            category: txn.category(),
            amount: format_amount(txn.amount()),
        })?;
    }
    wrt.flush()?;
    Ok(())
}

/// Renders an amount with at least two decimals and enough digits to read back exactly.
pub fn format_amount(amount: f64) -> String {
    let text = amount.to_string();
    match text.find('.') {
        None => format!("{text}.00"),
        Some(idx) if text.len() - idx - 1 < 2 => format!("{text}0"),
        Some(_) => text,
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
