//=========================================================================
// Notification Scenarios
//=========================================================================
//
// End-to-end flows through the public API: queue admission rules and a
// presenter driven by a simulated frame loop.
//
//=========================================================================

use std::thread;
use std::time::Duration;

use aetheric_notify::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Hud {
    Toast,
    Achievement,
    Warning,
}

impl NotificationKind for Hud {}

const FRAME: Duration = Duration::from_millis(100);

//--- Helpers -------------------------------------------------------------

fn request(key: &str, priority: Priority, overflow: OverflowPolicy) -> NotificationRequest<Hud> {
    NotificationRequest::new(key, Hud::Toast, format!("{key} text"))
        .with_priority(priority)
        .with_overflow(overflow)
}

fn hud_presenter() -> NotificationPresenter<Hud> {
    PresenterBuilder::new()
        .with_max_active(2)
        .with_template(
            Hud::Toast,
            NotificationTemplate::new().with_display_duration(Duration::from_millis(300)),
        )
        .with_template(
            Hud::Achievement,
            NotificationTemplate::new()
                .with_display_duration(Duration::from_millis(500))
                .with_priority(Priority::High)
                .with_overflow(OverflowPolicy::DropLowestPriority),
        )
        .with_template(
            Hud::Warning,
            NotificationTemplate::new()
                .with_display_duration(Duration::from_millis(1000))
                .with_priority(Priority::Critical)
                .with_overflow(OverflowPolicy::DropLowestPriority)
                .with_dedupe(DedupePolicy::IgnoreIfSameKeyExists),
        )
        .build()
}

fn visible(presenter: &NotificationPresenter<Hud>) -> Vec<String> {
    presenter
        .queue()
        .active()
        .map(|e| e.request().key.clone())
        .collect()
}

//--- Queue Scenarios -----------------------------------------------------

#[test]
fn two_slot_admission_scenario() {
    let mut queue = NotificationQueue::new(2);

    let a = queue.try_add(request("A", Priority::Normal, OverflowPolicy::DropNew));
    let b = queue.try_add(request("B", Priority::Normal, OverflowPolicy::DropNew));
    assert!(a.is_spawned() && b.is_spawned());

    assert_eq!(
        queue.try_add(request("C", Priority::Normal, OverflowPolicy::DropNew)),
        AddOutcome::Dropped
    );

    let d = queue.try_add(request("D", Priority::Critical, OverflowPolicy::DropLowestPriority));
    assert_eq!(d.evicted_id(), a.spawned_id());

    let keys: Vec<&str> = queue.active().map(|e| e.request().key.as_str()).collect();
    assert_eq!(keys, vec!["B", "D"]);
}

#[test]
fn ids_are_never_reused() {
    let mut queue = NotificationQueue::new(1);
    let mut seen = Vec::new();

    for i in 0..20 {
        let outcome = queue.try_add(request(&format!("k{i}"), Priority::Normal, OverflowPolicy::DropOldest));
        let id = outcome.spawned_id().unwrap();
        assert!(!seen.contains(&id));
        seen.push(id);
    }

    assert_eq!(queue.active_len(), 1);
}

#[test]
fn caller_promotion_loop_respects_capacity() {
    let mut queue = NotificationQueue::new(2);
    let first = queue
        .try_add(request("a", Priority::Critical, OverflowPolicy::DropNew))
        .spawned_id()
        .unwrap();
    queue.try_add(request("b", Priority::Critical, OverflowPolicy::DropNew));

    for key in ["p1", "p2", "p3"] {
        assert!(queue
            .try_add(request(key, Priority::Normal, OverflowPolicy::DropLowestPriority))
            .is_enqueued());
    }

    assert!(queue.remove_active_by_id(first).is_some());

    let mut promoted = 0;
    while queue.has_active_capacity() {
        let Some(entry) = queue.dequeue_pending() else { break };
        assert!(queue.try_add(entry.into_request()).is_spawned());
        promoted += 1;
    }

    assert_eq!(promoted, 1);
    assert_eq!(queue.active_len(), 2);
    assert_eq!(queue.pending_len(), 2);
    assert_eq!(queue.pending().next().unwrap().request().key, "p2");
}

//--- Presenter Scenarios -------------------------------------------------

#[test]
fn frame_loop_cycles_through_pending() {
    let mut presenter = hud_presenter();
    let sender = presenter.sender();

    sender.notify("t1", Hud::Toast, "Picked up sword").unwrap();
    sender.notify("t2", Hud::Toast, "Picked up shield").unwrap();
    sender.notify("a1", Hud::Achievement, "First blood").unwrap();

    let commands = presenter.update(FRAME);
    // a1 outranks the toasts and evicts t1
    assert_eq!(commands.len(), 4);
    assert!(matches!(commands[2], ViewCommand::Hide { .. }));
    assert_eq!(visible(&presenter), vec!["t2", "a1"]);

    let mut frames = 0;
    while presenter.queue().active_len() > 0 {
        presenter.update(FRAME);
        frames += 1;
        assert!(frames < 20, "notifications never expired");
    }

    assert_eq!(presenter.queue().pending_len(), 0);
}

#[test]
fn warnings_wait_behind_warnings_and_ignore_duplicates() {
    let mut presenter = hud_presenter();

    assert!(presenter.notify("low-hp", Hud::Warning, "Low health").is_spawned());
    assert!(presenter.notify("low-ammo", Hud::Warning, "Low ammo").is_spawned());
    assert!(presenter.notify("poison", Hud::Warning, "Poisoned").is_enqueued());
    assert!(presenter.notify("poison", Hud::Warning, "Poisoned").is_dropped());
    assert!(presenter.notify("low-hp", Hud::Warning, "Low health").is_dropped());

    presenter.take_view_commands();
    let commands = presenter.update(Duration::from_millis(1000));

    let hidden = commands
        .iter()
        .filter(|c| matches!(c, ViewCommand::Hide { .. }))
        .count();
    assert_eq!(hidden, 2);
    assert_eq!(visible(&presenter), vec!["poison"]);
}

#[test]
fn senders_work_across_threads() {
    let mut presenter = hud_presenter();
    let sender = presenter.sender();

    let handle = thread::spawn(move || {
        sender.notify("remote", Hud::Toast, "From another thread").unwrap();
    });
    handle.join().unwrap();

    let commands = presenter.update(FRAME);
    assert!(matches!(
        &commands[0],
        ViewCommand::Show { kind: Hud::Toast, text, .. } if text == "From another thread"
    ));
}

#[test]
fn full_inbox_rejects_until_drained() {
    let mut presenter = PresenterBuilder::new()
        .with_channel_capacity(1)
        .with_template(Hud::Toast, NotificationTemplate::new())
        .build();
    let sender = presenter.sender();

    sender.notify("a", Hud::Toast, "a").unwrap();
    let err = sender.notify("b", Hud::Toast, "b").unwrap_err();
    assert!(matches!(err, SubmitError::Full(_)));

    presenter.update(FRAME);
    sender.send(err.into_command()).unwrap();
    presenter.update(FRAME);

    assert_eq!(presenter.queue().active_len(), 2);
}
