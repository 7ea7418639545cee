//=========================================================================
// Core Systems
//
// Host-independent notification logic.
//
// Responsibilities:
// - Admission of notification requests into bounded display slots
//   (`notification`)
// - Per-frame presentation: timers, promotion, view commands
//   (`presenter`)
//
// Notes:
// Nothing here touches a clock, a window or a thread of its own. The host
// calls into the presenter from its update loop and renders the returned
// view commands however it likes.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod notification;
pub mod presenter;

//=== Public API ==========================================================

pub use notification::{
    ActiveEntry, AddOutcome, DedupePolicy, EntryId, KeyRemoval, NotificationKind,
    NotificationQueue, NotificationRequest, OverflowPolicy, PendingEntry, Priority,
};
pub use presenter::{
    NotificationCommand, NotificationPresenter, NotificationSender, NotificationTemplate,
    PresenterBuilder, SubmitError, TemplateRegistry, ViewCommand,
};
