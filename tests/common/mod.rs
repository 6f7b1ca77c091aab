#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use finance_tracker::{core::FinanceTracker, storage::CsvRecordStore};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that outlives the calling test.
pub fn scratch_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates a tracker backed by `transactions.csv` in an isolated directory.
pub fn setup_tracker() -> (FinanceTracker, PathBuf) {
    let path = scratch_dir().join("transactions.csv");
    let store = CsvRecordStore::new(path.clone());
    let tracker = FinanceTracker::open(Box::new(store)).expect("open tracker");
    (tracker, path)
}
