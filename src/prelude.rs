//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_notify::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Admission core
pub use crate::core::notification::{
    ActiveEntry, AddOutcome, DedupePolicy, EntryId, KeyRemoval, NotificationKind,
    NotificationQueue, NotificationRequest, OverflowPolicy, PendingEntry, Priority,
};

// Presenter
pub use crate::core::presenter::{
    NotificationCommand, NotificationPresenter, NotificationSender, NotificationTemplate,
    PresenterBuilder, SubmitError, TemplateRegistry, ViewCommand,
};
