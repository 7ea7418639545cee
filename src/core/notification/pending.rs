//=========================================================================
// Pending Queue
//=========================================================================
//
// Stable priority queue for notifications waiting on an active slot.
//
// Architecture:
//   BTreeMap<(Reverse(priority), seq), PendingEntry>
//
// The first map entry is always the head: highest priority, earliest
// insertion among ties. The queue is unbounded.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

//=== Internal Dependencies ===============================================

use super::entry::{PendingEntry, PendingOrder};
use super::request::NotificationKind;

//=== Pending Queue =======================================================

/// Pending notifications ordered by priority, then insertion.
pub(crate) struct PendingQueue<K: NotificationKind> {
    entries: BTreeMap<PendingOrder, PendingEntry<K>>,
}

impl<K: NotificationKind> PendingQueue<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts an entry at its ordered position.
    pub(crate) fn push(&mut self, entry: PendingEntry<K>) {
        self.entries.insert(entry.order(), entry);
    }

    /// Removes and returns the head.
    pub(crate) fn pop_front(&mut self) -> Option<PendingEntry<K>> {
        self.entries.pop_first().map(|(_, entry)| entry)
    }

    /// Returns true if any entry has identity `(key, kind)`.
    pub(crate) fn contains(&self, key: &str, kind: K) -> bool {
        self.entries.values().any(|e| e.request.matches(key, kind))
    }

    /// Removes the most recently inserted entry with identity `(key, kind)`.
    pub(crate) fn remove_latest(&mut self, key: &str, kind: K) -> Option<PendingEntry<K>> {
        let order = self
            .entries
            .values()
            .filter(|e| e.request.matches(key, kind))
            .max_by_key(|e| e.seq)
            .map(PendingEntry::order)?;

        self.entries.remove(&order)
    }

    /// Iterates entries in dequeue order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &PendingEntry<K>> {
        self.entries.values()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Takes all entries in dequeue order, leaving the queue empty.
    pub(crate) fn take(&mut self) -> Vec<PendingEntry<K>> {
        std::mem::take(&mut self.entries).into_values().collect()
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notification::request::{NotificationRequest, Priority};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKind {
        Toast,
        Banner,
    }

    impl NotificationKind for TestKind {}

    fn entry(key: &str, priority: Priority, seq: u64) -> PendingEntry<TestKind> {
        PendingEntry {
            seq,
            request: NotificationRequest::new(key, TestKind::Toast, key).with_priority(priority),
        }
    }

    #[test]
    fn new_queue_is_empty() {
        let mut queue = PendingQueue::<TestKind>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.pop_front().is_none());
    }

    #[test]
    fn pops_by_priority_then_insertion() {
        let mut queue = PendingQueue::new();
        queue.push(entry("low", Priority::Low, 0));
        queue.push(entry("high-a", Priority::High, 1));
        queue.push(entry("crit", Priority::Critical, 2));
        queue.push(entry("high-b", Priority::High, 3));

        let keys: Vec<String> = std::iter::from_fn(|| queue.pop_front())
            .map(|e| e.request.key)
            .collect();

        assert_eq!(keys, vec!["crit", "high-a", "high-b", "low"]);
    }

    #[test]
    fn remove_latest_picks_highest_sequence() {
        let mut queue = PendingQueue::new();
        queue.push(entry("dup", Priority::High, 0));
        queue.push(entry("dup", Priority::Low, 1));
        queue.push(entry("other", Priority::Normal, 2));

        let removed = queue.remove_latest("dup", TestKind::Toast).unwrap();
        assert_eq!(removed.seq, 1);
        assert_eq!(queue.len(), 2);
        assert!(queue.contains("dup", TestKind::Toast));
    }

    #[test]
    fn remove_latest_ignores_other_kinds() {
        let mut queue = PendingQueue::new();
        queue.push(entry("dup", Priority::Normal, 0));

        assert!(queue.remove_latest("dup", TestKind::Banner).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn take_drains_in_order() {
        let mut queue = PendingQueue::new();
        queue.push(entry("a", Priority::Low, 0));
        queue.push(entry("b", Priority::Critical, 1));

        let taken = queue.take();
        assert_eq!(taken[0].request.key, "b");
        assert_eq!(taken[1].request.key, "a");
        assert!(queue.is_empty());
    }

    #[test]
    fn iter_follows_dequeue_order() {
        let mut queue = PendingQueue::new();
        queue.push(entry("n", Priority::Normal, 0));
        queue.push(entry("c", Priority::Critical, 1));

        let keys: Vec<&str> = queue.iter().map(|e| e.request.key.as_str()).collect();
        assert_eq!(keys, vec!["c", "n"]);
    }
}
