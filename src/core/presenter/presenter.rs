//=========================================================================
// Notification Presenter
//=========================================================================
//
// Drives a NotificationQueue from the host's frame loop.
//
// Architecture:
//   PresenterBuilder ──build()──> NotificationPresenter
//                                   ├─ queue:     NotificationQueue
//                                   ├─ templates: TemplateRegistry
//                                   ├─ timers:    HashMap<EntryId, Duration>
//                                   ├─ inbox:     NotificationInbox
//                                   └─ outbox:    Vec<ViewCommand>
//
// Each update():
//   1. expire timers  2. drain and apply inbox  3. promote pending
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use crossbeam_channel::{bounded, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::command::{NotificationCommand, NotificationSender, ViewCommand};
use super::inbox::NotificationInbox;
use super::template::{NotificationTemplate, TemplateRegistry};
use crate::core::notification::{
    AddOutcome, EntryId, KeyRemoval, NotificationKind, NotificationQueue, NotificationRequest,
};

//=== PresenterBuilder ====================================================

/// Builder for configuring and constructing a [`NotificationPresenter`].
///
/// # Default Values
///
/// - **Active slots**: 3
/// - **Channel capacity**: 64 commands
/// - **Commands per frame**: 100
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use aetheric_notify::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Toast { Info, Achievement }
/// impl NotificationKind for Toast {}
///
/// let presenter = PresenterBuilder::<Toast>::new()
///     .with_max_active(2)
///     .with_template(Toast::Info, NotificationTemplate::new())
///     .with_template(
///         Toast::Achievement,
///         NotificationTemplate::new()
///             .with_display_duration(Duration::from_secs(5))
///             .with_priority(Priority::High)
///             .with_overflow(OverflowPolicy::DropLowestPriority),
///     )
///     .build();
///
/// assert_eq!(presenter.queue().max_active(), 2);
/// ```
pub struct PresenterBuilder<K: NotificationKind> {
    max_active: usize,
    channel_capacity: usize,
    max_commands_per_frame: usize,
    templates: TemplateRegistry<K>,
}

impl<K: NotificationKind> PresenterBuilder<K> {
    /// Creates a new builder with default settings and no templates.
    pub fn new() -> Self {
        Self {
            max_active: 3,
            channel_capacity: 64,
            max_commands_per_frame: 100,
            templates: TemplateRegistry::new(),
        }
    }

    /// Sets the number of notifications displayed at once.
    ///
    /// Default: 3
    ///
    /// # Panics
    ///
    /// Panics if `max_active == 0`.
    pub fn with_max_active(mut self, max_active: usize) -> Self {
        assert!(max_active > 0, "max_active must be at least 1");
        self.max_active = max_active;
        self
    }

    /// Sets the inbox capacity for [`NotificationSender`] submissions.
    ///
    /// Sends beyond this fail with [`SubmitError::Full`](super::SubmitError::Full)
    /// until the presenter drains the inbox.
    ///
    /// Default: 64
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets how many inbox commands one update applies.
    ///
    /// Default: 100
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_commands_per_frame(mut self, max: usize) -> Self {
        assert!(max > 0, "Commands per frame must be positive");
        self.max_commands_per_frame = max;
        self
    }

    /// Registers the display template for `kind`.
    pub fn with_template(mut self, kind: K, template: NotificationTemplate) -> Self {
        self.templates.register(kind, template);
        self
    }

    /// Builds the presenter.
    pub fn build(self) -> NotificationPresenter<K> {
        info!(
            "Building notification presenter (slots: {}, channel: {}, templates: {})",
            self.max_active,
            self.channel_capacity,
            self.templates.len()
        );

        let (sender, receiver) = bounded(self.channel_capacity);

        NotificationPresenter {
            queue: NotificationQueue::new(self.max_active),
            templates: self.templates,
            timers: HashMap::new(),
            inbox: NotificationInbox::new(receiver, self.max_commands_per_frame),
            sender,
            outbox: Vec::new(),
        }
    }
}

impl<K: NotificationKind> Default for PresenterBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== NotificationPresenter ===============================================

/// Owns a [`NotificationQueue`] and turns its decisions into view commands.
///
/// Display time is supplied by the host through [`update`](Self::update);
/// the presenter never reads a clock. Everything runs on the caller's
/// thread. Other threads submit through [`NotificationSender`] handles.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use aetheric_notify::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Toast { Info }
/// impl NotificationKind for Toast {}
///
/// let mut presenter = PresenterBuilder::new()
///     .with_template(Toast::Info, NotificationTemplate::new())
///     .build();
///
/// presenter.sender().notify("saved", Toast::Info, "Game saved").unwrap();
///
/// let commands = presenter.update(Duration::from_millis(16));
/// assert!(matches!(commands[0], ViewCommand::Show { .. }));
/// ```
pub struct NotificationPresenter<K: NotificationKind> {
    queue: NotificationQueue<K>,
    templates: TemplateRegistry<K>,
    timers: HashMap<EntryId, Duration>,
    inbox: NotificationInbox<K>,
    sender: Sender<NotificationCommand<K>>,
    outbox: Vec<ViewCommand<K>>,
}

impl<K: NotificationKind> NotificationPresenter<K> {
    //--- Update Loop ------------------------------------------------------

    /// Advances the presenter by one frame.
    ///
    /// Expires notifications whose display time ran out, applies inbox
    /// commands, promotes pending notifications into freed slots and
    /// returns every view command produced since the previous call.
    pub fn update(&mut self, dt: Duration) -> Vec<ViewCommand<K>> {
        // 1. Expire display timers of notifications already on screen
        self.advance_timers(dt);

        // 2. Apply queued commands in send order
        for command in self.inbox.collect_frame() {
            self.apply_command(command);
        }

        // 3. Fill freed slots from pending
        self.promote_pending();

        self.take_view_commands()
    }

    /// Takes view commands produced by direct calls since the last update.
    pub fn take_view_commands(&mut self) -> Vec<ViewCommand<K>> {
        std::mem::take(&mut self.outbox)
    }

    //--- Direct Commands --------------------------------------------------

    /// Returns a handle for submitting commands through the inbox.
    pub fn sender(&self) -> NotificationSender<K> {
        NotificationSender::new(self.sender.clone())
    }

    /// Admits `request` immediately.
    ///
    /// Requests whose kind has no template are dropped.
    pub fn submit(&mut self, request: NotificationRequest<K>) -> AddOutcome {
        if !self.templates.contains(request.kind) {
            warn!(
                "No template registered for {:?}, dropping {:?}",
                request.kind, request.key
            );
            return AddOutcome::Dropped;
        }

        let outcome = self.queue.try_add(request);
        self.apply_outcome(outcome);
        outcome
    }

    /// Admits a request built from the template defaults of `kind`.
    pub fn notify(&mut self, key: impl Into<String>, kind: K, text: impl Into<String>) -> AddOutcome {
        let Some(template) = self.templates.get(kind) else {
            warn!("No template registered for {:?}, dropping notification", kind);
            return AddOutcome::Dropped;
        };

        let request = NotificationRequest::new(key, kind, text)
            .with_priority(template.priority)
            .with_overflow(template.overflow)
            .with_dedupe(template.dedupe);

        self.submit(request)
    }

    /// Removes an active notification before its timer runs out.
    ///
    /// Returns false if `id` is not active.
    pub fn dismiss(&mut self, id: EntryId) -> bool {
        if self.queue.remove_active_by_id(id).is_none() {
            return false;
        }

        self.hide_internal(id);
        self.promote_pending();
        true
    }

    /// Removes one notification with identity `(key, kind)`.
    ///
    /// Returns false if nothing matched.
    pub fn clear(&mut self, key: &str, kind: K) -> bool {
        match self.queue.remove_by_key(key, kind) {
            Some(KeyRemoval::Active(entry)) => {
                self.hide_internal(entry.id());
                self.promote_pending();
                true
            }
            Some(KeyRemoval::Pending(_)) => true,
            None => false,
        }
    }

    /// Removes every active and pending notification.
    pub fn clear_all(&mut self) {
        let ids = self.queue.clear();
        info!("Clearing all notifications ({} active)", ids.len());

        for id in ids {
            self.hide_internal(id);
        }
    }

    //--- Query API --------------------------------------------------------

    pub fn queue(&self) -> &NotificationQueue<K> {
        &self.queue
    }

    pub fn templates(&self) -> &TemplateRegistry<K> {
        &self.templates
    }

    pub fn templates_mut(&mut self) -> &mut TemplateRegistry<K> {
        &mut self.templates
    }

    /// Display time left for an active notification.
    pub fn remaining(&self, id: EntryId) -> Option<Duration> {
        self.timers.get(&id).copied()
    }

    //--- Internal Helpers -------------------------------------------------

    fn apply_command(&mut self, command: NotificationCommand<K>) {
        match command {
            NotificationCommand::Show(request) => {
                self.submit(request);
            }
            NotificationCommand::Notify { key, kind, text } => {
                self.notify(key, kind, text);
            }
            NotificationCommand::Dismiss(id) => {
                if !self.dismiss(id) {
                    debug!("Notification {} not active, skipping dismiss", id);
                }
            }
            NotificationCommand::Clear { key, kind } => {
                if !self.clear(&key, kind) {
                    debug!("No notification {:?}/{:?} to clear", kind, key);
                }
            }
            NotificationCommand::ClearAll => self.clear_all(),
        }
    }

    /// Emits view commands and starts timers for an admission result.
    fn apply_outcome(&mut self, outcome: AddOutcome) {
        let AddOutcome::Spawned { id, evicted } = outcome else {
            return;
        };

        if let Some(evicted) = evicted {
            self.hide_internal(evicted);
        }

        let Some(entry) = self.queue.get_active(id) else {
            return;
        };
        let request = entry.request();

        self.timers.insert(id, self.templates.display_duration(request.kind));
        self.outbox.push(ViewCommand::Show {
            id,
            kind: request.kind,
            text: request.text.clone(),
            priority: request.priority,
        });
    }

    fn hide_internal(&mut self, id: EntryId) {
        self.timers.remove(&id);
        self.outbox.push(ViewCommand::Hide { id });
    }

    fn advance_timers(&mut self, dt: Duration) {
        let mut expired = Vec::new();

        for (&id, remaining) in self.timers.iter_mut() {
            *remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                expired.push(id);
            }
        }

        // Spawn order keeps Hide commands deterministic
        expired.sort_unstable();

        for id in expired {
            debug!("Notification {} display time elapsed", id);
            self.queue.remove_active_by_id(id);
            self.hide_internal(id);
        }
    }

    /// Moves pending notifications into free slots, head first.
    fn promote_pending(&mut self) {
        while self.queue.has_active_capacity() {
            let Some(entry) = self.queue.dequeue_pending() else {
                break;
            };

            let request = entry.request();
            if !self.templates.contains(request.kind) {
                warn!(
                    "No template registered for {:?}, dropping pending {:?}",
                    request.kind, request.key
                );
                continue;
            }

            debug!("Promoting pending {:?}/{:?}", request.kind, request.key);
            let outcome = self.queue.try_add(entry.into_request());
            self.apply_outcome(outcome);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
