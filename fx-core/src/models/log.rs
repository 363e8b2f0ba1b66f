use super::currency::CurrencyCode;
use super::operation::{Operation, OperationId};
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;

/// The append-only, in-memory record of completed conversions.
///
/// A single process-wide instance is shared by all request handlers; one
/// mutex serializes appends, clears, and snapshot reads, which is sufficient
/// for the light concurrency this service is designed for. Reads return owned
/// copies, so callers never observe later mutations through a snapshot.
///
/// Insertion order is preserved (oldest first) and never reordered; the only
/// mutations are appending and clearing everything.
#[derive(Debug, Default)]
pub struct OperationLog {
    items: Mutex<Vec<Operation>>,
}

impl OperationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still guards a structurally intact Vec; recover the
    // guard instead of propagating the panic.
    fn items(&self) -> MutexGuard<'_, Vec<Operation>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a completed conversion.
    ///
    /// Generates a fresh unique id and stamps the current UTC instant; the
    /// inputs were already validated by the converter, so this never fails.
    /// Returns a copy of the stored record.
    pub fn add(
        &self,
        from: CurrencyCode,
        to: CurrencyCode,
        amount: f64,
        rate: f64,
        result: f64,
    ) -> Operation {
        let operation = Operation {
            id: OperationId::random(),
            ts: OffsetDateTime::now_utc(),
            from_currency: from,
            to_currency: to,
            amount,
            rate,
            result,
        };
        self.items().push(operation.clone());
        operation
    }

    /// Snapshot a slice of the log in insertion order (oldest first).
    ///
    /// `offset` is clamped to 0 when negative and yields an empty result when
    /// it points past the end. An absent `limit` means "through the end"; a
    /// negative `limit` yields an empty result.
    pub fn list(&self, limit: Option<i64>, offset: i64) -> Vec<Operation> {
        let offset = offset.max(0) as usize;
        let items = self.items();
        let tail = items.get(offset..).unwrap_or_default();
        match limit {
            None => tail.to_vec(),
            Some(limit) if limit < 0 => Vec::new(),
            Some(limit) => tail.iter().take(limit as usize).cloned().collect(),
        }
    }

    /// Total number of operations currently held.
    pub fn count(&self) -> usize {
        self.items().len()
    }

    /// Remove every operation, returning how many were removed.
    ///
    /// The returned value is the count immediately before clearing, taken
    /// under the same lock acquisition.
    pub fn clear(&self) -> usize {
        let mut items = self.items();
        let deleted = items.len();
        items.clear();
        deleted
    }

    /// Find one operation by exact id.
    pub fn get(&self, id: OperationId) -> Option<Operation> {
        self.items().iter().find(|op| op.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        CurrencyCode::parse(s).unwrap()
    }

    fn filled(n: usize) -> OperationLog {
        let log = OperationLog::new();
        for i in 0..n {
            log.add(code("USD"), code("RUB"), (i + 1) as f64, 1.0, (i + 1) as f64);
        }
        log
    }

    #[test]
    fn test_add_list_count_clear() {
        let log = OperationLog::new();
        assert_eq!(log.count(), 0);
        assert!(log.list(None, 0).is_empty());

        let op = log.add(code("USD"), code("RUB"), 10.0, 92.5, 925.0);
        assert_eq!(log.count(), 1);

        let items = log.list(None, 0);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, op.id);
        assert_eq!(items[0].from_currency.as_str(), "USD");

        assert_eq!(log.clear(), 1);
        assert_eq!(log.count(), 0);
        assert!(log.list(None, 0).is_empty());
    }

    #[test]
    fn test_list_limit_and_offset() {
        let log = filled(5);
        assert_eq!(log.count(), 5);

        assert_eq!(log.list(Some(2), 0).len(), 2);
        assert_eq!(log.list(None, 10).len(), 0);
        assert_eq!(log.list(Some(2), 3).len(), 2);
        assert_eq!(log.list(Some(-1), 0).len(), 0);
        assert_eq!(log.list(None, -100).len(), 5);
        assert_eq!(log.list(Some(10), 4).len(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let log = filled(5);
        let amounts: Vec<f64> = log.list(None, 0).iter().map(|op| op.amount).collect();
        assert_eq!(amounts, [1.0, 2.0, 3.0, 4.0, 5.0]);

        let page: Vec<f64> = log.list(Some(2), 2).iter().map(|op| op.amount).collect();
        assert_eq!(page, [3.0, 4.0]);
    }

    #[test]
    fn test_ids_unique_and_timestamps_non_decreasing() {
        let log = filled(50);
        let items = log.list(None, 0);

        let mut ids: Vec<OperationId> = items.iter().map(|op| op.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);

        for pair in items.windows(2) {
            assert!(pair[0].ts <= pair[1].ts);
        }
    }

    #[test]
    fn test_get_by_id() {
        let log = filled(3);
        let target = log.list(None, 0)[1].clone();

        assert_eq!(log.get(target.id), Some(target));
        assert_eq!(log.get(OperationId::random()), None);
    }

    #[test]
    fn test_snapshots_survive_clear() {
        let log = filled(5);
        let snapshot = log.list(None, 0);
        assert_eq!(log.clear(), 5);
        assert_eq!(snapshot.len(), 5);
    }
}
