//! Observer list for store changes
//!
//! Subscribers are called in registration order after a mutation has been
//! persisted and the new snapshot installed.

use std::fmt;
use std::sync::Arc;

use crate::models::FinancialData;

use super::change::Change;

/// Something that wants to hear about applied mutations
pub trait Subscriber {
    fn notify(&mut self, change: &Change, snapshot: &Arc<FinancialData>);
}

impl<F> Subscriber for F
where
    F: FnMut(&Change, &Arc<FinancialData>),
{
    fn notify(&mut self, change: &Change, snapshot: &Arc<FinancialData>) {
        self(change, snapshot)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered subscribers
#[derive(Default)]
pub struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Subscriber>)>,
}

impl Subscribers {
    pub fn add(&mut self, subscriber: Box<dyn Subscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    /// Returns `false` when `id` was not registered
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify_all(&mut self, change: &Change, snapshot: &Arc<FinancialData>) {
        for (_, subscriber) in &mut self.entries {
            subscriber.notify(change, snapshot);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn goal_change() -> Change {
        Change::SavingsGoalUpdated {
            before: Money::zero(),
            after: Money::from_units(1),
        }
    }

    #[test]
    fn test_notify_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        for name in ["first", "second"] {
            let calls = Rc::clone(&calls);
            subscribers.add(Box::new(move |_: &Change, _: &Arc<FinancialData>| {
                calls.borrow_mut().push(name)
            }));
        }

        subscribers.notify_all(&goal_change(), &Arc::new(FinancialData::seed()));
        assert_eq!(*calls.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_remove() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut subscribers = Subscribers::default();
        let id = subscribers.add(Box::new(move |_: &Change, _: &Arc<FinancialData>| {
            *counter.borrow_mut() += 1
        }));

        assert!(subscribers.remove(id));
        assert!(!subscribers.remove(id));

        subscribers.notify_all(&goal_change(), &Arc::new(FinancialData::seed()));
        assert_eq!(*calls.borrow(), 0);
    }
}
