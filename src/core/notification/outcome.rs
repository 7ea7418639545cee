//=========================================================================
// Admission Outcomes
//=========================================================================

//=== Internal Dependencies ===============================================

use super::entry::{ActiveEntry, EntryId, PendingEntry};
use super::request::NotificationKind;

//=== AddOutcome ==========================================================

/// Result of [`NotificationQueue::try_add`](super::NotificationQueue::try_add).
///
/// `Dropped` is an expected policy decision, not an error. Callers usually
/// ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The request took an active slot.
    ///
    /// `evicted` holds the id of the active entry it displaced, if any. The
    /// view must free that slot before showing the new one.
    Spawned {
        id: EntryId,
        evicted: Option<EntryId>,
    },

    /// The request waits in the pending queue.
    Enqueued,

    /// The request was discarded.
    Dropped,
}

impl AddOutcome {
    pub fn is_spawned(&self) -> bool {
        matches!(self, Self::Spawned { .. })
    }

    pub fn is_enqueued(&self) -> bool {
        matches!(self, Self::Enqueued)
    }

    pub fn is_dropped(&self) -> bool {
        matches!(self, Self::Dropped)
    }

    /// Id of the spawned entry, if the request was spawned.
    pub fn spawned_id(&self) -> Option<EntryId> {
        match self {
            Self::Spawned { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Id of the entry evicted to make room, if any.
    pub fn evicted_id(&self) -> Option<EntryId> {
        match self {
            Self::Spawned { evicted, .. } => *evicted,
            _ => None,
        }
    }
}

//=== KeyRemoval ==========================================================

/// Entry removed by [`NotificationQueue::remove_by_key`](super::NotificationQueue::remove_by_key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRemoval<K: NotificationKind> {
    /// An active entry; its slot is now free.
    Active(ActiveEntry<K>),

    /// A pending entry; it was never displayed.
    Pending(PendingEntry<K>),
}

impl<K: NotificationKind> KeyRemoval<K> {
    /// Id of the freed active slot, `None` when a pending entry was removed.
    pub fn active_id(&self) -> Option<EntryId> {
        match self {
            Self::Active(entry) => Some(entry.id),
            Self::Pending(_) => None,
        }
    }
}

//=== Tests ===============================================================
