//! In-memory operation history shared by all requests.

use calculator_sdk::OperationRecord;
use parking_lot::Mutex;

/// Append-only log of successful evaluations, oldest first.
///
/// All mutation goes through one mutex, so records appended by a single
/// call to [`HistoryLog::append_all`] stay contiguous.
#[derive(Debug, Default)]
pub struct HistoryLog {
    records: Mutex<Vec<OperationRecord>>,
    max_len: Option<usize>,
}

impl HistoryLog {
    /// `max_len = None` means unbounded.
    #[must_use]
    pub fn new(max_len: Option<usize>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            max_len,
        }
    }

    pub fn append(&self, record: OperationRecord) {
        let mut records = self.records.lock();
        records.push(record);
        self.evict_overflow(&mut records);
    }

    pub fn append_all(&self, batch: Vec<OperationRecord>) {
        if batch.is_empty() {
            return;
        }
        let mut records = self.records.lock();
        records.extend(batch);
        self.evict_overflow(&mut records);
    }

    /// Copy of the full log; later appends do not show up in it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<OperationRecord> {
        self.records.lock().clone()
    }

    /// Remove every record, returning how many there were.
    pub fn clear(&self) -> usize {
        let mut records = self.records.lock();
        let removed = records.len();
        records.clear();
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    fn evict_overflow(&self, records: &mut Vec<OperationRecord>) {
        if let Some(max) = self.max_len
            && records.len() > max
        {
            let excess = records.len() - max;
            records.drain(..excess);
            tracing::debug!(evicted = excess, max, "history bound reached");
        }
    }
}
