//=========================================================================
// Notification Queue
//=========================================================================
//
// Admission control for a bounded set of display slots.
//
// Architecture:
//   NotificationQueue
//     ├─ active:  BTreeMap<EntryId, ActiveEntry>   (id order = spawn order)
//     └─ pending: PendingQueue                     (priority desc, seq asc)
//
// Flow:
//   try_add() → dedupe → capacity → overflow policy → AddOutcome
//
// The active set never exceeds `max_active`; every eviction happens inside
// try_add() before the new entry is inserted.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::debug;

//=== Internal Dependencies ===============================================

use super::entry::{ActiveEntry, EntryId, PendingEntry};
use super::outcome::{AddOutcome, KeyRemoval};
use super::pending::PendingQueue;
use super::request::{DedupePolicy, NotificationKind, NotificationRequest, OverflowPolicy, Priority};

//=== NotificationQueue ===================================================

/// Bounded active slots plus an unbounded priority-ordered pending queue.
///
/// The queue owns both collections. Callers refer to entries only by
/// [`EntryId`] or by `(key, kind)`.
///
/// # Example
///
/// ```rust
/// # use aetheric_notify::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Toast { Info }
/// # impl NotificationKind for Toast {}
/// let mut queue = NotificationQueue::new(1);
///
/// let first = queue.try_add(NotificationRequest::new("a", Toast::Info, "first"));
/// assert!(first.is_spawned());
///
/// let second = queue.try_add(NotificationRequest::new("b", Toast::Info, "second"));
/// assert!(second.is_dropped());
/// ```
pub struct NotificationQueue<K: NotificationKind> {
    max_active: usize,
    active: BTreeMap<EntryId, ActiveEntry<K>>,
    pending: PendingQueue<K>,
    next_id: u64,
    next_seq: u64,
}

impl<K: NotificationKind> NotificationQueue<K> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty queue with `max_active` display slots.
    ///
    /// # Panics
    ///
    /// Panics if `max_active == 0`.
    pub fn new(max_active: usize) -> Self {
        assert!(max_active > 0, "max_active must be at least 1");

        Self {
            max_active,
            active: BTreeMap::new(),
            pending: PendingQueue::new(),
            next_id: 0,
            next_seq: 0,
        }
    }

    //--- Admission --------------------------------------------------------

    /// Decides whether `request` spawns, waits, or is dropped.
    ///
    /// See [`DedupePolicy`] and [`OverflowPolicy`] for the rules. When the
    /// result is `Spawned` with an `evicted` id, that entry has already been
    /// removed from the active set.
    pub fn try_add(&mut self, request: NotificationRequest<K>) -> AddOutcome {
        let mut evicted = None;

        match request.dedupe {
            DedupePolicy::None => {}
            DedupePolicy::IgnoreIfSameKeyExists => {
                if self.contains(&request.key, request.kind) {
                    debug!(
                        "Dropping {:?}/{:?}: same key already queued",
                        request.kind, request.key
                    );
                    return AddOutcome::Dropped;
                }
            }
            DedupePolicy::ReplaceIfSameKeyExists => {
                evicted = self.replace_internal(&request.key, request.kind);
            }
        }

        if self.has_active_capacity() {
            let id = self.spawn_internal(request);
            return AddOutcome::Spawned { id, evicted };
        }

        match request.overflow {
            OverflowPolicy::DropNew => {
                debug!("Dropping {:?}/{:?}: active slots full", request.kind, request.key);
                AddOutcome::Dropped
            }
            OverflowPolicy::DropOldest => {
                let evicted = self.evict_oldest_internal();
                let id = self.spawn_internal(request);
                AddOutcome::Spawned { id, evicted }
            }
            OverflowPolicy::DropLowestPriority => match self.lowest_priority_active() {
                Some((victim, lowest)) if lowest < request.priority => {
                    debug!(
                        "Evicting {} ({:?}) for {:?} request {:?}",
                        victim, lowest, request.priority, request.key
                    );
                    self.active.remove(&victim);
                    let id = self.spawn_internal(request);
                    AddOutcome::Spawned {
                        id,
                        evicted: Some(victim),
                    }
                }
                _ => {
                    self.enqueue_internal(request);
                    AddOutcome::Enqueued
                }
            },
        }
    }

    //--- Removal ----------------------------------------------------------

    /// Removes the active entry with `id`.
    ///
    /// Returns `None` if no such entry is active. Pending is untouched.
    pub fn remove_active_by_id(&mut self, id: EntryId) -> Option<ActiveEntry<K>> {
        let removed = self.active.remove(&id);
        if removed.is_some() {
            debug!("Removed active entry {}", id);
        } else {
            debug!("Active entry {} not found, skipping removal", id);
        }
        removed
    }

    /// Removes one entry with identity `(key, kind)`.
    ///
    /// Active entries are checked before pending ones. If duplicates exist,
    /// the most recently added match is removed.
    pub fn remove_by_key(&mut self, key: &str, kind: K) -> Option<KeyRemoval<K>> {
        if let Some(entry) = self.remove_latest_active(key, kind) {
            debug!("Cleared active entry {} for {:?}/{:?}", entry.id, kind, key);
            return Some(KeyRemoval::Active(entry));
        }

        let entry = self.pending.remove_latest(key, kind)?;
        debug!("Cleared pending entry for {:?}/{:?}", kind, key);
        Some(KeyRemoval::Pending(entry))
    }

    /// Removes and returns the head of the pending queue.
    ///
    /// Does not check active capacity; the caller re-feeds the request
    /// through [`try_add`](Self::try_add) once a slot is free.
    pub fn dequeue_pending(&mut self) -> Option<PendingEntry<K>> {
        self.pending.pop_front()
    }

    /// Empties both collections.
    ///
    /// Returns the ids of the active entries that were removed, in spawn
    /// order. Ids keep counting up afterwards.
    pub fn clear(&mut self) -> Vec<EntryId> {
        let ids = self.active.keys().copied().collect();
        self.active.clear();
        let dropped = self.pending.take();
        debug!("Cleared queue ({} pending dropped)", dropped.len());
        ids
    }

    //--- Query API --------------------------------------------------------

    pub fn has_active_capacity(&self) -> bool {
        self.active.len() < self.max_active
    }

    pub fn max_active(&self) -> usize {
        self.max_active
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Active entries in spawn order.
    pub fn active(&self) -> impl Iterator<Item = &ActiveEntry<K>> {
        self.active.values()
    }

    /// Pending entries in dequeue order.
    pub fn pending(&self) -> impl Iterator<Item = &PendingEntry<K>> {
        self.pending.iter()
    }

    pub fn get_active(&self, id: EntryId) -> Option<&ActiveEntry<K>> {
        self.active.get(&id)
    }

    /// Returns true if an active or pending entry has identity `(key, kind)`.
    pub fn contains(&self, key: &str, kind: K) -> bool {
        self.active.values().any(|e| e.request.matches(key, kind)) || self.pending.contains(key, kind)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Removes an existing match for a replacing request.
    ///
    /// Returns the freed active id, or `None` if the match was pending or
    /// there was no match.
    fn replace_internal(&mut self, key: &str, kind: K) -> Option<EntryId> {
        if let Some(entry) = self.remove_latest_active(key, kind) {
            debug!("Replacing active entry {} for {:?}/{:?}", entry.id, kind, key);
            return Some(entry.id);
        }

        if self.pending.remove_latest(key, kind).is_some() {
            debug!("Replacing pending entry for {:?}/{:?}", kind, key);
        }
        None
    }

    fn remove_latest_active(&mut self, key: &str, kind: K) -> Option<ActiveEntry<K>> {
        let id = self
            .active
            .values()
            .rev()
            .find(|e| e.request.matches(key, kind))
            .map(|e| e.id)?;

        self.active.remove(&id)
    }

    fn spawn_internal(&mut self, request: NotificationRequest<K>) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;

        debug!("Spawning {} for {:?}/{:?}", id, request.kind, request.key);
        self.active.insert(id, ActiveEntry { id, request });
        id
    }

    fn enqueue_internal(&mut self, request: NotificationRequest<K>) {
        let seq = self.next_seq;
        self.next_seq += 1;

        debug!(
            "Enqueueing {:?}/{:?} ({:?}), {} pending",
            request.kind,
            request.key,
            request.priority,
            self.pending.len() + 1
        );
        self.pending.push(PendingEntry { seq, request });
    }

    fn evict_oldest_internal(&mut self) -> Option<EntryId> {
        let (id, _) = self.active.pop_first()?;
        debug!("Evicting oldest active entry {}", id);
        Some(id)
    }

    /// Lowest-priority active entry, earliest spawn among ties.
    fn lowest_priority_active(&self) -> Option<(EntryId, Priority)> {
        self.active
            .values()
            .min_by_key(|e| e.request.priority)
            .map(|e| (e.id, e.request.priority))
    }
}

//=== Tests ===============================================================
