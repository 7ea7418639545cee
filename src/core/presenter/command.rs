//=========================================================================
// Presenter Commands
//=========================================================================
//
// Contract between producers, the presenter and the view layer.
//
// Flow:
//   NotificationSender ──NotificationCommand──> presenter inbox
//   presenter ──ViewCommand──> view layer
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};

//=== Internal Dependencies ===============================================

use crate::core::notification::{EntryId, NotificationKind, NotificationRequest, Priority};

//=== NotificationCommand =================================================

/// Requests sent to a presenter through its inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationCommand<K: NotificationKind> {
    /// Admit a fully specified request.
    Show(NotificationRequest<K>),

    /// Admit a request built from the kind's template defaults.
    Notify { key: String, kind: K, text: String },

    /// Remove an active notification by id.
    Dismiss(EntryId),

    /// Remove one notification with this identity, active or pending.
    Clear { key: String, kind: K },

    /// Remove every active and pending notification.
    ClearAll,
}

//=== ViewCommand =========================================================

/// Instructions for the view layer, produced by the presenter.
///
/// A `Hide` for an evicted entry always precedes the `Show` that took its
/// slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand<K: NotificationKind> {
    Show {
        id: EntryId,
        kind: K,
        text: String,
        priority: Priority,
    },
    Hide {
        id: EntryId,
    },
}

//=== SubmitError =========================================================

/// Failure to deliver a command to the presenter inbox.
///
/// The undelivered command is handed back.
#[derive(Debug)]
pub enum SubmitError<K: NotificationKind> {
    /// The bounded inbox is at capacity.
    Full(NotificationCommand<K>),

    /// The presenter has been dropped.
    Disconnected(NotificationCommand<K>),
}

impl<K: NotificationKind> SubmitError<K> {
    pub fn into_command(self) -> NotificationCommand<K> {
        match self {
            Self::Full(command) | Self::Disconnected(command) => command,
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl<K: NotificationKind> std::fmt::Display for SubmitError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full(_) => write!(f, "Notification inbox is full"),
            Self::Disconnected(_) => write!(f, "Notification presenter is gone"),
        }
    }
}

impl<K: NotificationKind> std::error::Error for SubmitError<K> {}

impl<K: NotificationKind> From<TrySendError<NotificationCommand<K>>> for SubmitError<K> {
    fn from(err: TrySendError<NotificationCommand<K>>) -> Self {
        match err {
            TrySendError::Full(command) => Self::Full(command),
            TrySendError::Disconnected(command) => Self::Disconnected(command),
        }
    }
}

//=== NotificationSender ==================================================

/// Cloneable handle for submitting commands to a presenter.
///
/// Safe to move to other threads. Commands are applied on the presenter's
/// next update, in send order.
pub struct NotificationSender<K: NotificationKind> {
    sender: Sender<NotificationCommand<K>>,
}

impl<K: NotificationKind> NotificationSender<K> {
    pub(crate) fn new(sender: Sender<NotificationCommand<K>>) -> Self {
        Self { sender }
    }

    /// Sends a command without blocking.
    pub fn send(&self, command: NotificationCommand<K>) -> Result<(), SubmitError<K>> {
        self.sender.try_send(command)?;
        Ok(())
    }

    pub fn show(&self, request: NotificationRequest<K>) -> Result<(), SubmitError<K>> {
        self.send(NotificationCommand::Show(request))
    }

    pub fn notify(
        &self,
        key: impl Into<String>,
        kind: K,
        text: impl Into<String>,
    ) -> Result<(), SubmitError<K>> {
        self.send(NotificationCommand::Notify {
            key: key.into(),
            kind,
            text: text.into(),
        })
    }

    pub fn dismiss(&self, id: EntryId) -> Result<(), SubmitError<K>> {
        self.send(NotificationCommand::Dismiss(id))
    }

    pub fn clear(&self, key: impl Into<String>, kind: K) -> Result<(), SubmitError<K>> {
        self.send(NotificationCommand::Clear { key: key.into(), kind })
    }

    pub fn clear_all(&self) -> Result<(), SubmitError<K>> {
        self.send(NotificationCommand::ClearAll)
    }
}

impl<K: NotificationKind> Clone for NotificationSender<K> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

//=== Tests ===============================================================
