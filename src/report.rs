//! Per-item result aggregation for batch drivers.
//!
//! Every batch processes items sequentially and must attempt every remaining
//! item after a failure, so outcomes are collected here instead of
//! propagating out of the loop. The report is the data handed back to the
//! CLI, which renders it as text or JSON.

use serde::Serialize;

/// A single item that could not be processed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ItemFailure {
    /// What failed — a file path for normalize/tag, `identifier (url)` for
    /// fetch.
    pub label: String,
    pub reason: String,
}

/// Aggregate outcome of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Items attempted (malformed fetch rows are excluded before the batch
    /// starts and never count here).
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<ItemFailure>,
}

impl BatchReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, label: impl Into<String>, reason: impl Into<String>) {
        self.failures.push(ItemFailure {
            label: label.into(),
            reason: reason.into(),
        });
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_add_up() {
        let mut report = BatchReport::new(3);
        report.record_success();
        report.record_failure("b.jpg", "decode failed");
        report.record_success();

        assert_eq!(report.total, 3);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].label, "b.jpg");
        assert!(!report.is_clean());
    }

    #[test]
    fn empty_report_is_clean() {
        assert!(BatchReport::new(0).is_clean());
    }

    #[test]
    fn serializes_to_json() {
        let mut report = BatchReport::new(2);
        report.record_success();
        report.record_failure("x", "timed out");

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total\":2"));
        assert!(json.contains("\"succeeded\":1"));
        assert!(json.contains("timed out"));
    }
}
