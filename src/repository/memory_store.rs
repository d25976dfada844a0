use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::repository::repository_error::{RepositoryError, RepositoryResult};

/// Process-lifetime table keyed by a monotonically increasing id.
///
/// The counter and the rows live under one lock, so a record is visible
/// exactly when its id has been handed out.
pub struct MemoryTable<T> {
    name: &'static str,
    inner: Mutex<TableInner<T>>,
}

struct TableInner<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T: Clone> MemoryTable<T> {
    pub fn new(name: &'static str) -> Self {
        MemoryTable {
            name,
            inner: Mutex::new(TableInner { next_id: 1, rows: BTreeMap::new() }),
        }
    }

    pub fn insert_with<F>(&self, build: F) -> RepositoryResult<T>
    where
        F: FnOnce(i64) -> T,
    {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;
        let row = build(id);
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    pub fn all(&self) -> RepositoryResult<Vec<T>> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    pub fn get(&self, id: i64) -> RepositoryResult<T> {
        self.lock()?
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("{} {} not found", self.name, id)))
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        Ok(self.lock()?.rows.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> RepositoryResult<std::sync::MutexGuard<'_, TableInner<T>>> {
        self.inner
            .lock()
            .map_err(|e| RepositoryError::poisoned(format!("{} table lock poisoned: {}", self.name, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_from_one() {
        let table = MemoryTable::new("row");
        let a = table.insert_with(|id| (id, "a")).unwrap();
        let b = table.insert_with(|id| (id, "b")).unwrap();
        assert_eq!(a.0, 1);
        assert_eq!(b.0, 2);
        assert_eq!(table.all().unwrap(), vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_missing_row_is_not_found() {
        let table: MemoryTable<i64> = MemoryTable::new("row");
        assert!(matches!(table.get(9), Err(RepositoryError::NotFound(_))));
        assert!(table.is_empty().unwrap());
    }
}
