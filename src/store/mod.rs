//! The financial store
//!
//! `FinancialStore` is the single owner of the session's `FinancialData`.
//! Readers get an immutable `Arc` snapshot; every change goes through one of
//! the four mutation operations, which compute the next snapshot, persist it
//! to the backing slot, install it, and then notify subscribers.
//!
//! Operations referring to a transaction or budget that doesn't exist are
//! no-ops reported as `None`: nothing is written and nobody is notified. The
//! only error a mutation can return is a failed write, in which case the
//! in-memory state is left as it was.
//!
//! The store performs no input validation; see [`crate::forms`].

mod change;
mod subscribers;

pub use change::Change;
pub use subscribers::{Subscriber, Subscribers, SubscriptionId};

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::FinanceResult;
use crate::models::{Budget, FinancialData, IdGenerator, Money, NewTransaction, Transaction, TransactionId};
use crate::storage::{hydrate, JsonFileStore, SnapshotStore};

/// State container for one session of financial data
pub struct FinancialStore<S: SnapshotStore> {
    backend: S,
    data: Arc<FinancialData>,
    ids: IdGenerator,
    subscribers: Subscribers,
}

impl FinancialStore<JsonFileStore> {
    /// Open the store backed by a JSON file
    pub fn open_file(path: PathBuf) -> Self {
        Self::open(JsonFileStore::new(path))
    }
}

impl<S: SnapshotStore> FinancialStore<S> {
    /// Open the store, hydrating from `backend` or falling back to the seed
    pub fn open(backend: S) -> Self {
        let data = hydrate(&backend);
        let ids = IdGenerator::seeded_from(data.transactions.iter().map(|t| &t.id));
        Self {
            backend,
            data: Arc::new(data),
            ids,
            subscribers: Subscribers::default(),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<FinancialData> {
        Arc::clone(&self.data)
    }

    /// Borrow the current state without cloning the `Arc`
    pub fn data(&self) -> &FinancialData {
        &self.data
    }

    /// The backing slot
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Register a subscriber for applied mutations
    pub fn subscribe(&mut self, subscriber: impl Subscriber + 'static) -> SubscriptionId {
        self.subscribers.add(Box::new(subscriber))
    }

    /// Remove a subscriber; returns `false` if it wasn't registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Record a transaction under a fresh id
    ///
    /// An expense also adds to the `spent` of the budget with the same
    /// category, if there is one. Income adds to and expenses subtract from
    /// the current savings.
    pub fn add_transaction(&mut self, input: NewTransaction) -> FinanceResult<Transaction> {
        let data = &self.data;
        let id = self.ids.next_id(|id| data.transaction(id).is_some());
        let txn = Transaction::from_new(id, input);
        let next = self.data.with_transaction(txn.clone());

        self.commit(next, Change::TransactionAdded(txn.clone()))?;
        Ok(txn)
    }

    /// Remove a transaction and undo its effect on budgets and savings
    ///
    /// Returns the removed transaction, or `None` if `id` is unknown.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        let Some((next, removed)) = self.data.without_transaction(id) else {
            tracing::debug!(id = %id, "delete of unknown transaction ignored");
            return Ok(None);
        };

        self.commit(next, Change::TransactionDeleted(removed.clone()))?;
        Ok(Some(removed))
    }

    /// Replace the allocation of an existing budget; `spent` is untouched
    ///
    /// Returns the updated budget, or `None` if no budget has `category`.
    pub fn update_budget(&mut self, category: &str, allocated: Money) -> FinanceResult<Option<Budget>> {
        let Some(before) = self.data.budget(category).cloned() else {
            tracing::debug!(category, "update of unknown budget ignored");
            return Ok(None);
        };
        let Some(next) = self.data.with_budget_allocation(category, allocated) else {
            return Ok(None);
        };

        let after = Budget {
            allocated,
            ..before.clone()
        };
        self.commit(
            next,
            Change::BudgetUpdated {
                before,
                after: after.clone(),
            },
        )?;
        Ok(Some(after))
    }

    /// Replace the savings goal
    pub fn update_savings_goal(&mut self, goal: Money) -> FinanceResult<()> {
        let before = self.data.savings_goal;
        let next = self.data.with_savings_goal(goal);

        self.commit(next, Change::SavingsGoalUpdated { before, after: goal })
    }

    fn commit(&mut self, next: FinancialData, change: Change) -> FinanceResult<()> {
        self.backend.save(&next)?;
        self.data = Arc::new(next);

        tracing::debug!(change = %change.summary(), "applied mutation");
        self.subscribers.notify_all(&change, &self.data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinanceError;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn groceries() -> NewTransaction {
        NewTransaction::expense(Money::from_units(50), "Food", "Groceries", date(1, 15))
    }

    fn memory_store() -> FinancialStore<MemoryStore> {
        FinancialStore::open(MemoryStore::new())
    }

    /// Slot whose writes always fail
    struct ReadOnlyStore;

    impl SnapshotStore for ReadOnlyStore {
        fn load(&self) -> FinanceResult<Option<FinancialData>> {
            Ok(None)
        }

        fn save(&mut self, _data: &FinancialData) -> FinanceResult<()> {
            Err(FinanceError::Storage("read-only".into()))
        }
    }

    #[test]
    fn test_open_empty_is_seed() {
        let store = memory_store();
        assert_eq!(*store.snapshot(), FinancialData::seed());
        assert!(store.backend().raw().is_none());
    }

    #[test]
    fn test_add_expense_updates_budget_and_savings() {
        let mut store = memory_store();
        let txn = store.add_transaction(groceries()).unwrap();

        let data = store.data();
        assert_eq!(data.transactions, vec![txn]);
        assert_eq!(data.budget("Food").unwrap().spent, Money::from_units(50));
        assert_eq!(data.current_savings, Money::from_units(-50));
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut store = memory_store();
        store.add_transaction(groceries()).unwrap();
        store.update_savings_goal(Money::from_units(8000)).unwrap();

        let reopened = FinancialStore::open(store.backend().clone());
        assert_eq!(reopened.data(), store.data());
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let mut store = memory_store();
        let before = store.snapshot();
        store.add_transaction(groceries()).unwrap();

        assert!(before.transactions.is_empty());
        assert_eq!(store.snapshot().transactions.len(), 1);
    }

    #[test]
    fn test_ids_unique_within_session() {
        let mut store = memory_store();
        let a = store.add_transaction(groceries()).unwrap();
        let b = store.add_transaction(groceries()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ids_do_not_reuse_persisted_ones() {
        let mut first = memory_store();
        let far_future = TransactionId::new("99999999999999");
        let mut data = FinancialData::seed();
        data.transactions.push(Transaction::from_new(far_future.clone(), groceries()));
        first.backend.save(&data).unwrap();

        let mut store = FinancialStore::open(first.backend().clone());
        let txn = store.add_transaction(groceries()).unwrap();
        assert_eq!(txn.id.as_str(), "100000000000000");
    }

    #[test]
    fn test_ids_unique_when_stored_id_is_max() {
        let max_id = TransactionId::new(u64::MAX.to_string());
        let mut data = FinancialData::seed();
        data.transactions.push(Transaction::from_new(max_id.clone(), groceries()));
        let mut backend = MemoryStore::new();
        backend.save(&data).unwrap();

        let mut store = FinancialStore::open(backend);
        let a = store.add_transaction(groceries()).unwrap();
        let b = store.add_transaction(groceries()).unwrap();

        assert_ne!(a.id, max_id);
        assert_ne!(b.id, max_id);
        assert_ne!(a.id, b.id);

        let removed = store.delete_transaction(&a.id).unwrap().unwrap();
        assert_eq!(removed.id, a.id);
        assert!(store.data().transaction(&max_id).is_some());
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut store = memory_store();
        store.add_transaction(groceries()).unwrap();
        let raw_before = store.backend().raw().map(String::from);

        let removed = store.delete_transaction(&TransactionId::new("nope")).unwrap();

        assert!(removed.is_none());
        assert_eq!(store.backend().raw().map(String::from), raw_before);
    }

    #[test]
    fn test_update_budget_only_touches_allocated() {
        let mut store = memory_store();
        store.add_transaction(groceries()).unwrap();

        let updated = store
            .update_budget("Food", Money::from_units(650))
            .unwrap()
            .unwrap();

        assert_eq!(updated.allocated, Money::from_units(650));
        assert_eq!(updated.spent, Money::from_units(50));
        assert_eq!(store.data().budget("Food"), Some(&updated));
    }

    #[test]
    fn test_update_unknown_budget_is_noop() {
        let mut store = memory_store();
        let result = store.update_budget("Travel", Money::from_units(100)).unwrap();

        assert!(result.is_none());
        assert_eq!(*store.snapshot(), FinancialData::seed());
        assert!(store.backend().raw().is_none());
    }

    #[test]
    fn test_failed_write_leaves_state_unchanged() {
        let mut store = FinancialStore::open(ReadOnlyStore);
        let notified = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&notified);
        store.subscribe(move |_: &Change, _: &Arc<FinancialData>| *counter.borrow_mut() += 1);

        assert!(store.add_transaction(groceries()).is_err());
        assert!(store.update_savings_goal(Money::from_units(1)).is_err());

        assert_eq!(*store.snapshot(), FinancialData::seed());
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn test_subscribers_see_new_snapshot() {
        let mut store = memory_store();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |change: &Change, snapshot: &Arc<FinancialData>| {
            sink.borrow_mut()
                .push((change.clone(), snapshot.current_savings));
        });

        let txn = store.add_transaction(groceries()).unwrap();
        store.update_savings_goal(Money::from_units(6000)).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (Change::TransactionAdded(txn), Money::from_units(-50)));
        assert_eq!(
            seen[1].0,
            Change::SavingsGoalUpdated {
                before: Money::from_units(5000),
                after: Money::from_units(6000),
            }
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = memory_store();
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let id = store.subscribe(move |_: &Change, _: &Arc<FinancialData>| *counter.borrow_mut() += 1);

        store.update_savings_goal(Money::from_units(1)).unwrap();
        assert!(store.unsubscribe(id));
        store.update_savings_goal(Money::from_units(2)).unwrap();

        assert_eq!(*count.borrow(), 1);
    }
}
