//=========================================================================
// Notification Inbox
//=========================================================================
//
// Presenter-side end of the command channel.
//
// Architecture:
//   Receiver<NotificationCommand> → collect_frame() → Vec<NotificationCommand>
//
// Draining is bounded per frame so a flood of submissions cannot stall
// the host's update loop; the rest waits for the next frame.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::command::NotificationCommand;
use crate::core::notification::NotificationKind;

//=== NotificationInbox ===================================================

/// Collects queued commands with bounded polling.
pub(crate) struct NotificationInbox<K: NotificationKind> {
    receiver: Receiver<NotificationCommand<K>>,
    max_per_frame: usize,
}

impl<K: NotificationKind> NotificationInbox<K> {
    pub(crate) fn new(receiver: Receiver<NotificationCommand<K>>, max_per_frame: usize) -> Self {
        Self {
            receiver,
            max_per_frame,
        }
    }

    /// Drains up to `max_per_frame` commands in send order.
    pub(crate) fn collect_frame(&mut self) -> Vec<NotificationCommand<K>> {
        let mut commands = Vec::new();

        while commands.len() < self.max_per_frame {
            match self.receiver.try_recv() {
                Ok(command) => commands.push(command),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if commands.len() >= self.max_per_frame && !self.receiver.is_empty() {
            warn!(
                "Notification inbox backlog: drained {} commands, {} left for next frame",
                commands.len(),
                self.receiver.len()
            );
        }

        commands
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
