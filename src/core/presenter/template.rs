//=========================================================================
// Template Registry
//=========================================================================
//
// Maps notification kinds to display templates.
//
// Architecture:
//   kind → HashMap → NotificationTemplate
//
// Kinds without a template are rejected by the presenter before
// admission.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::notification::{DedupePolicy, NotificationKind, OverflowPolicy, Priority};

//=== NotificationTemplate ================================================

/// Per-kind display settings and request defaults.
///
/// # Default Values
///
/// - **Display duration**: 3 seconds
/// - **Priority**: `Normal`
/// - **Overflow**: `DropNew`
/// - **Dedupe**: `None`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTemplate {
    pub display_duration: Duration,
    pub priority: Priority,
    pub overflow: OverflowPolicy,
    pub dedupe: DedupePolicy,
}

impl NotificationTemplate {
    pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(3);

    pub fn new() -> Self {
        Self {
            display_duration: Self::DEFAULT_DISPLAY_DURATION,
            priority: Priority::default(),
            overflow: OverflowPolicy::default(),
            dedupe: DedupePolicy::default(),
        }
    }

    /// Sets how long a spawned notification stays on screen.
    ///
    /// # Panics
    ///
    /// Panics if `duration` is zero.
    pub fn with_display_duration(mut self, duration: Duration) -> Self {
        assert!(!duration.is_zero(), "Display duration must be positive");
        self.display_duration = duration;
        self
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
}

impl Default for NotificationTemplate {
    fn default() -> Self {
        Self::new()
    }
}

//=== TemplateRegistry ====================================================

/// Lookup table from notification kind to template.
pub struct TemplateRegistry<K: NotificationKind> {
    templates: HashMap<K, NotificationTemplate>,
}

impl<K: NotificationKind> TemplateRegistry<K> {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registers the template for `kind`, replacing any previous one.
    pub fn register(&mut self, kind: K, template: NotificationTemplate) {
        if self.templates.insert(kind, template).is_some() {
            warn!("Template for {:?} was already registered and has been replaced", kind);
        }
    }

    /// Removes the template for `kind`, returning it if present.
    pub fn unregister(&mut self, kind: K) -> Option<NotificationTemplate> {
        self.templates.remove(&kind)
    }

    pub fn get(&self, kind: K) -> Option<&NotificationTemplate> {
        self.templates.get(&kind)
    }

    pub fn contains(&self, kind: K) -> bool {
        self.templates.contains_key(&kind)
    }

    /// Display duration for `kind`, or the default if it has no template.
    pub fn display_duration(&self, kind: K) -> Duration {
        self.get(kind)
            .map(|t| t.display_duration)
            .unwrap_or(NotificationTemplate::DEFAULT_DISPLAY_DURATION)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<K: NotificationKind> Default for TemplateRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Tests ===============================================================
