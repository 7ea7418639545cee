//=========================================================================
// Notification System
//=========================================================================
//
// Admission core: decides which notifications occupy the bounded display
// slots and which wait.
//
// Architecture:
//   NotificationRequest ──try_add()──> NotificationQueue ──> AddOutcome
//                                        ├─ active  (bounded)
//                                        └─ pending (priority ordered)
//
// The queue is plain data. It tracks no time and drives no view; the
// presenter does both.
//
//=========================================================================

//=== Module Declarations =================================================

mod entry;
mod outcome;
mod pending;
mod queue;
mod request;

//=== Public API ==========================================================

pub use entry::{ActiveEntry, EntryId, PendingEntry};
pub use outcome::{AddOutcome, KeyRemoval};
pub use queue::NotificationQueue;
pub use request::{DedupePolicy, NotificationKind, NotificationRequest, OverflowPolicy, Priority};
