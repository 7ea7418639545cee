//=========================================================================
// Notification Request
//=========================================================================
//
// Plain-data input to admission.
//
// A request carries its identity `(key, kind)`, the payload text, and the
// policies that decide what happens when the active slots are full or an
// entry with the same identity already exists.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Notification Kind Trait =============================================

/// Marker trait for notification categories.
///
/// Kinds select the display template in the presenter and take part in
/// dedupe identity. Typically implemented by game-specific enums.
///
/// ```rust
/// # use aetheric_notify::prelude::*;
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Toast { Info, Achievement }
/// impl NotificationKind for Toast {}
/// ```
pub trait NotificationKind: Clone + Copy + Eq + Hash + Debug + Send + 'static {}

//=== Priority ============================================================

/// Ordering used for eviction and promotion.
///
/// Variants are declared low to high so the derived `Ord` matches
/// importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

//=== Overflow Policy =====================================================

/// Behavior when every active slot is taken and no replacement freed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Discard the incoming request.
    #[default]
    DropNew,

    /// Evict the earliest spawned active entry, whatever its priority.
    DropOldest,

    /// Evict the lowest-priority active entry if the incoming request
    /// outranks it, otherwise wait in the pending queue.
    DropLowestPriority,
}

//=== Dedupe Policy =======================================================

/// Behavior when an entry with the same `(key, kind)` is active or pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DedupePolicy {
    /// Duplicates are allowed.
    #[default]
    None,

    /// Drop the incoming request and leave the existing entry alone.
    IgnoreIfSameKeyExists,

    /// Remove the existing entry, then admit the incoming request.
    ReplaceIfSameKeyExists,
}

//=== NotificationRequest =================================================

/// A request to display a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest<K: NotificationKind> {
    pub key: String,
    pub kind: K,
    pub text: String,
    pub priority: Priority,
    pub overflow: OverflowPolicy,
    pub dedupe: DedupePolicy,
}

impl<K: NotificationKind> NotificationRequest<K> {
    /// Creates a request with `Normal` priority, `DropNew` overflow and no
    /// dedupe.
    pub fn new(key: impl Into<String>, kind: K, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            text: text.into(),
            priority: Priority::default(),
            overflow: OverflowPolicy::default(),
            dedupe: DedupePolicy::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_dedupe(mut self, dedupe: DedupePolicy) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Returns true if this request has the identity `(key, kind)`.
    ///
    /// Keys compare structurally; an empty key is an ordinary key.
    pub fn matches(&self, key: &str, kind: K) -> bool {
        self.kind == kind && self.key == key
    }
}

//=== Tests ===============================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestKind {
        Toast,
        Banner,
    }

    impl NotificationKind for TestKind {}

    #[test]
    fn priority_orders_low_to_critical() {
        assert!(Priority::Low < Priority::Normal);
        assert!(Priority::Normal < Priority::High);
        assert!(Priority::High < Priority::Critical);
    }

    #[test]
    fn new_request_uses_defaults() {
        let request = NotificationRequest::new("save", TestKind::Toast, "Game saved");

        assert_eq!(request.priority, Priority::Normal);
        assert_eq!(request.overflow, OverflowPolicy::DropNew);
        assert_eq!(request.dedupe, DedupePolicy::None);
    }

    #[test]
    fn fluent_setters_override_policies() {
        let request = NotificationRequest::new("boss", TestKind::Banner, "Boss incoming")
            .with_priority(Priority::Critical)
            .with_overflow(OverflowPolicy::DropLowestPriority)
            .with_dedupe(DedupePolicy::ReplaceIfSameKeyExists);

        assert_eq!(request.priority, Priority::Critical);
        assert_eq!(request.overflow, OverflowPolicy::DropLowestPriority);
        assert_eq!(request.dedupe, DedupePolicy::ReplaceIfSameKeyExists);
    }

    #[test]
    fn matches_requires_exact_key_and_kind() {
        let request = NotificationRequest::new("loot", TestKind::Toast, "+10 gold");

        assert!(request.matches("loot", TestKind::Toast));
        assert!(!request.matches("loot", TestKind::Banner));
        assert!(!request.matches("Loot", TestKind::Toast));
    }

    #[test]
    fn empty_key_is_an_ordinary_key() {
        let request = NotificationRequest::new("", TestKind::Toast, "anonymous");

        assert!(request.matches("", TestKind::Toast));
        assert!(!request.matches(" ", TestKind::Toast));
    }
}
