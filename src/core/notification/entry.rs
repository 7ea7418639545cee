//=========================================================================
// Queue Entries
//=========================================================================
//
// Entries stored by the notification queue.
//
//   ActiveEntry  ── occupies one display slot, identified by EntryId
//   PendingEntry ── waits for a slot, ordered by (priority desc, seq asc)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cmp::Reverse;
use std::fmt;

//=== Internal Dependencies ===============================================

use super::request::{NotificationKind, NotificationRequest, Priority};

//=== EntryId =============================================================

/// Identifier of an active entry.
///
/// Assigned from a monotonic counter at spawn time and never reused by the
/// queue that issued it, so a larger id always means a later spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub(crate) u64);

impl EntryId {
    /// Returns the raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== ActiveEntry =========================================================

/// A notification occupying one of the bounded display slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveEntry<K: NotificationKind> {
    pub(crate) id: EntryId,
    pub(crate) request: NotificationRequest<K>,
}

impl<K: NotificationKind> ActiveEntry<K> {
    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Snapshot of the request taken at admission.
    pub fn request(&self) -> &NotificationRequest<K> {
        &self.request
    }

    pub fn into_request(self) -> NotificationRequest<K> {
        self.request
    }
}

//=== PendingEntry ========================================================

/// A notification waiting for a free active slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry<K: NotificationKind> {
    pub(crate) seq: u64,
    pub(crate) request: NotificationRequest<K>,
}

impl<K: NotificationKind> PendingEntry<K> {
    pub fn request(&self) -> &NotificationRequest<K> {
        &self.request
    }

    pub fn into_request(self) -> NotificationRequest<K> {
        self.request
    }

    /// Sort key: higher priority first, then earlier insertion.
    pub(crate) fn order(&self) -> PendingOrder {
        (Reverse(self.request.priority), self.seq)
    }
}

/// Ordering key for pending entries.
pub(crate) type PendingOrder = (Reverse<Priority>, u64);

//=== Tests ===============================================================
