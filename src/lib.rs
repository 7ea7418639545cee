//=========================================================================
// Aetheric Notify: Library Root
//
// Notification queue with bounded display slots, priority-ordered
// pending storage, and per-request overflow and dedupe policies.
//
// Responsibilities:
// - Expose the admission core (`NotificationQueue`)
// - Expose the frame-driven presenter that turns admission results into
//   view commands (`NotificationPresenter`)
// - Keep rendering, timing sources and transport out of the crate
//
// Typical usage:
// ```no_run
// use std::time::Duration;
// use aetheric_notify::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Toast { Info }
// impl NotificationKind for Toast {}
//
// let mut presenter = PresenterBuilder::new()
//     .with_template(Toast::Info, NotificationTemplate::new())
//     .build();
//
// presenter.notify("saved", Toast::Info, "Game saved");
// for command in presenter.update(Duration::from_millis(16)) {
//     // hand `command` to the view layer
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the queue and the presenter. Most applications only need
// the re-exports below or the prelude.
//
pub mod core;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use crate::core::notification::{AddOutcome, NotificationQueue, NotificationRequest};
pub use crate::core::presenter::{NotificationPresenter, PresenterBuilder};
